//! Arcade Physics Collaborator
//!
//! The thin slice of a host physics engine the simulation consumes:
//! gravity accumulation, position integration, one-way platform landing,
//! and the player/carrot overlap scan. Everything here is a synchronous
//! snapshot taken once per tick.
//!
//! Landing is one-way: the player's body only checks collision downward,
//! so a rising player passes freely through platforms from below.

use super::carrot::CarrotPool;
use super::constants::*;
use super::platform::Platform;
use super::player::Player;

/// Per-tick contact snapshot for the player's body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contact {
    /// The player's lower edge rests on (or just landed on) a platform
    pub touching_down: bool,
}

/// Advance the player's body by one tick: accumulate gravity, integrate,
/// and resolve landing on a platform crossed from above.
pub fn step(player: &mut Player, platforms: &[Platform; PLATFORM_COUNT], dt: f32) -> Contact {
    let prev_bottom = player.bottom();

    player.vy += GRAVITY_Y * dt;
    player.x += player.vx * dt;
    player.y += player.vy * dt;

    // Landing only applies on the way down
    if player.vy < 0.0 {
        return Contact { touching_down: false };
    }

    let mut touching_down = false;
    for platform in platforms {
        if !spans_overlap(player.x, PLAYER_WIDTH, platform.x, PLATFORM_WIDTH) {
            continue;
        }
        let top = platform.top();
        if prev_bottom <= top && player.bottom() >= top {
            // Snap the feet to the surface and kill the fall
            player.y = top - PLAYER_HEIGHT * 0.5;
            player.vy = 0.0;
            touching_down = true;
            break;
        }
    }

    Contact { touching_down }
}

/// Scan the carrot arena for overlaps with the player. Returns the slot
/// indices of overlapping active carrots, in scan order.
pub fn player_carrot_overlaps(player: &Player, carrots: &CarrotPool) -> Vec<usize> {
    carrots
        .iter_active()
        .filter(|(_, carrot)| {
            spans_overlap(player.x, PLAYER_WIDTH, carrot.x, CARROT_WIDTH)
                && spans_overlap(player.y, PLAYER_HEIGHT, carrot.y, CARROT_HEIGHT)
        })
        .map(|(slot, _)| slot)
        .collect()
}

/// Do two center/extent spans overlap on one axis?
fn spans_overlap(center_a: f32, extent_a: f32, center_b: f32, extent_b: f32) -> bool {
    (center_a - center_b).abs() * 2.0 < extent_a + extent_b
}
