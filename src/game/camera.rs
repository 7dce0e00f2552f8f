//! Camera Tracker
//!
//! Vertical follow is unconditional: the camera centers on the player's y
//! every tick, which is what produces the continuous upward scroll. The
//! horizontal axis has a slack region (deadzone) wider than the viewport,
//! so small side-to-side motion never moves the view.
//!
//! `scroll_y` is the top of the view in world space; the recyclers read it
//! as their horizon reference.

use super::constants::*;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// World-space x of the left edge of the view
    pub scroll_x: f32,
    /// World-space y of the top edge of the view
    pub scroll_y: f32,
    /// Width of the horizontal slack region, centered on the view
    pub deadzone_width: f32,
}

impl Camera {
    /// Camera centered on the player start.
    pub fn new() -> Self {
        Self {
            scroll_x: PLAYER_START_X - VIEW_WIDTH * 0.5,
            scroll_y: PLAYER_START_Y - VIEW_HEIGHT * 0.5,
            deadzone_width: VIEW_WIDTH * CAMERA_DEADZONE_FACTOR,
        }
    }

    /// Track the player for one tick.
    pub fn follow(&mut self, player_x: f32, player_y: f32) {
        self.scroll_y = player_y - VIEW_HEIGHT * 0.5;

        let center_x = self.scroll_x + VIEW_WIDTH * 0.5;
        let half_zone = self.deadzone_width * 0.5;
        let offset = player_x - center_x;
        if offset > half_zone {
            self.scroll_x += offset - half_zone;
        } else if offset < -half_zone {
            self.scroll_x += offset + half_zone;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
