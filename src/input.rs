//! Input snapshot
//!
//! The keyboard is polled once per frame into a plain snapshot; the
//! simulation only ever sees held/pressed booleans, never the device.

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};

/// Held/pressed state for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Start key (space) pressed this frame
    pub start: bool,
}

impl InputSnapshot {
    /// Capture the current keyboard state. Call once per frame.
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            start: is_key_pressed(KeyCode::Space),
        }
    }
}
