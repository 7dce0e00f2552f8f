//! Player Controller
//!
//! The player never jumps on command: landing itself triggers the next
//! upward impulse. The controller is a two-state machine over the sprite
//! pose plus per-tick horizontal input response and screen wrap.
//!
//! State machine:
//! - any pose -> Airborne when the physics contact query says the player's
//!   lower edge touches a platform; the fixed jump impulse is applied
//! - Airborne -> Standing once vertical velocity turns strictly positive
//!   (the player is falling again)

use super::constants::*;
use crate::input::InputSnapshot;

/// Which sprite the player shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pose {
    /// Upright sprite, shown while falling
    #[default]
    Standing,
    /// Tucked jump sprite, shown while rising
    Airborne,
}

/// The player. Position is the sprite center.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub pose: Pose,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            vx: 0.0,
            vy: 0.0,
            pose: Pose::Standing,
        }
    }

    /// Half the sprite width; the wrap bounds derive from it.
    pub fn half_width(&self) -> f32 {
        PLAYER_WIDTH * 0.5
    }

    /// World-space y of the player's lower edge.
    pub fn bottom(&self) -> f32 {
        self.y + PLAYER_HEIGHT * 0.5
    }

    /// Apply one tick of control rules. `touching_down` is the physics
    /// contact snapshot taken at the start of the tick. Returns true when
    /// the auto-jump fired.
    pub fn control(&mut self, input: &InputSnapshot, touching_down: bool) -> bool {
        let jumped = touching_down;
        if touching_down {
            self.vy = JUMP_VELOCITY;
            self.pose = Pose::Airborne;
        }

        // Falling again: swap back to the standing sprite
        if self.vy > 0.0 && self.pose != Pose::Standing {
            self.pose = Pose::Standing;
        }

        // Horizontal response is suppressed at the instant of ground contact
        // so the zero-velocity write cannot mask the jump impulse frame.
        if input.left && !touching_down {
            self.vx = -RUN_SPEED;
        } else if input.right && !touching_down {
            self.vx = RUN_SPEED;
        } else {
            self.vx = 0.0;
        }

        jumped
    }

    /// Cylindrical play-field: leaving one side re-enters on the other.
    pub fn wrap(&mut self, view_width: f32) {
        let half_width = self.half_width();
        if self.x < -half_width {
            self.x = view_width + half_width;
        } else if self.x > view_width + half_width {
            self.x = -half_width;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
