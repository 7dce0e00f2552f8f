//! Platform Pool & Recycler
//!
//! The world has exactly [`PLATFORM_COUNT`] platforms for the entire run.
//! The illusion of an infinite level comes from recycling: once a platform
//! scrolls further than [`LOOKAHEAD`] below the camera top it is moved to a
//! random spot just above the view, keeping its x from creation time.
//!
//! Recycling is in-place mutation of a fixed array, so the platform-count
//! invariant holds by construction.

use rand::Rng;

use super::constants::*;
use super::event::{Events, PlatformRecycled};

/// A bouncy platform. Position is the sprite center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
}

impl Platform {
    /// World-space y of the platform's upper edge (what the player lands on)
    pub fn top(&self) -> f32 {
        self.y - PLATFORM_HEIGHT * 0.5
    }
}

/// Seed the fixed pool: rows spaced [`PLATFORM_SPACING`] apart going down,
/// each at a random x.
pub fn seed_platforms(rng: &mut impl Rng) -> [Platform; PLATFORM_COUNT] {
    std::array::from_fn(|i| Platform {
        x: rng.gen_range(PLATFORM_X_MIN..=PLATFORM_X_MAX),
        y: PLATFORM_SPACING * i as f32,
    })
}

/// Move every platform past the recycle horizon to a random spot above the
/// view and announce each move so the carrot spawner can react.
pub fn recycle_platforms(
    platforms: &mut [Platform; PLATFORM_COUNT],
    scroll_y: f32,
    rng: &mut impl Rng,
    events: &mut Events,
) {
    for (slot, platform) in platforms.iter_mut().enumerate() {
        if platform.y >= scroll_y + LOOKAHEAD {
            platform.y = scroll_y - rng.gen_range(RECYCLE_LIFT_MIN..=RECYCLE_LIFT_MAX);
            events.platform_recycled.send(PlatformRecycled {
                slot,
                x: platform.x,
                y: platform.y,
            });
        }
    }
}

/// Find the visually lowest platform (maximum y).
///
/// The scan skips only strictly smaller y values, so on a tie the
/// later-scanned slot wins. Panics if the slice is empty; the world's pool
/// is a fixed array, so that can only happen through misuse.
pub fn bottommost(platforms: &[Platform]) -> &Platform {
    let (first, rest) = platforms
        .split_first()
        .expect("platform pool must never be empty");

    let mut bottom = first;
    for platform in rest {
        if platform.y < bottom.y {
            continue;
        }
        bottom = platform;
    }
    bottom
}
