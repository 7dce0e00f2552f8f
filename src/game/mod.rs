//! Simulation Core
//!
//! Everything that makes the auto-jumper an auto-jumper lives here:
//! - A fixed pool of platforms recycled from below the view to above it
//! - A growable arena of carrots spawned above recycled platforms
//! - The player state machine (bounce on contact, steer in the air, wrap)
//! - A camera that follows the climb and defines the recycle horizon
//! - Collision-driven scoring and the fell-off-the-bottom game over
//!
//! Design philosophy:
//! - Plain data structs, behavior in systems (no entity hierarchy)
//! - Pools recycle in place; nothing is allocated or freed mid-run
//! - All per-tick context (input, delta time, RNG) is passed in explicitly

pub mod camera;
pub mod carrot;
pub mod constants;
pub mod event;
pub mod physics;
pub mod platform;
pub mod player;
pub mod score;
pub mod world;

// Re-export the types the host layer consumes
pub use event::Events;
pub use player::Pose;
pub use score::Score;
pub use world::World;
