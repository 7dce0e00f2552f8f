//! Gameplay tuning values
//!
//! All distances are world units (1 unit = 1 pixel at native resolution),
//! velocities are units per second. The viewport is a fixed 480x640
//! portrait window.

/// Viewport width in world units
pub const VIEW_WIDTH: f32 = 480.0;
/// Viewport height in world units
pub const VIEW_HEIGHT: f32 = 640.0;

/// Downward acceleration applied to the player every second
pub const GRAVITY_Y: f32 = 200.0;

/// Number of platform slots. Fixed for the whole run; platforms are
/// repositioned, never added or removed.
pub const PLATFORM_COUNT: usize = 5;
/// Platform sprite extent
pub const PLATFORM_WIDTH: f32 = 190.0;
pub const PLATFORM_HEIGHT: f32 = 40.0;
/// Vertical spacing between the initial platform rows
pub const PLATFORM_SPACING: f32 = 150.0;
/// Horizontal range the initial platform x positions are drawn from
pub const PLATFORM_X_MIN: f32 = 80.0;
pub const PLATFORM_X_MAX: f32 = 400.0;

/// Distance below the camera top past which an object is off-screen and
/// eligible for recycling
pub const LOOKAHEAD: f32 = 700.0;
/// A recycled object lands this far above the camera top (uniform draw)
pub const RECYCLE_LIFT_MIN: f32 = 50.0;
pub const RECYCLE_LIFT_MAX: f32 = 100.0;

/// Player sprite extent
pub const PLAYER_WIDTH: f32 = 52.0;
pub const PLAYER_HEIGHT: f32 = 66.0;
/// Upward impulse applied on every landing (auto-jump)
pub const JUMP_VELOCITY: f32 = -300.0;
/// Horizontal speed while an arrow key is held in the air
pub const RUN_SPEED: f32 = 200.0;
/// Player spawn position
pub const PLAYER_START_X: f32 = 240.0;
pub const PLAYER_START_Y: f32 = 320.0;

/// Carrot sprite extent
pub const CARROT_WIDTH: f32 = 22.0;
pub const CARROT_HEIGHT: f32 = 30.0;
/// The single carrot seeded at scene start
pub const CARROT_START_X: f32 = 240.0;
pub const CARROT_START_Y: f32 = 320.0;

/// The camera only re-centers horizontally once the player leaves a slack
/// region this many viewport-widths wide
pub const CAMERA_DEADZONE_FACTOR: f32 = 1.5;

/// Falling this far below the bottommost platform ends the run
pub const GAME_OVER_MARGIN: f32 = 200.0;
