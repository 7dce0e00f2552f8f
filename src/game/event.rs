//! Event System
//!
//! Events decouple the systems that detect something from the systems that
//! react to it:
//! 1. Platform recycler moves a platform → sends PlatformRecycled
//! 2. Carrot spawner reads PlatformRecycled → places a carrot above it
//! 3. Host layer reads Jumped / CarrotCollected → plays a sound
//!
//! Queues are filled during a tick and cleared once the host has consumed
//! them at the end of the frame.

/// A queue for events of a single type.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all simulation events.
pub struct Events {
    /// A platform crossed the recycle horizon and was moved above the view
    pub platform_recycled: EventQueue<PlatformRecycled>,

    /// The player collected a carrot
    pub carrot_collected: EventQueue<CarrotCollected>,

    /// The player landed and bounced
    pub jumped: EventQueue<Jumped>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            platform_recycled: EventQueue::new(),
            carrot_collected: EventQueue::new(),
            jumped: EventQueue::new(),
        }
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.platform_recycled.clear();
        self.carrot_collected.clear();
        self.jumped.clear();
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// A platform was repositioned above the view
#[derive(Debug, Clone, Copy)]
pub struct PlatformRecycled {
    /// Which pool slot was recycled
    pub slot: usize,
    /// The platform's new position
    pub x: f32,
    pub y: f32,
}

/// A carrot was collected by the player
#[derive(Debug, Clone, Copy)]
pub struct CarrotCollected {
    /// Which carrot slot was collected
    pub slot: usize,
    /// Where it was (for pickup feedback)
    pub x: f32,
    pub y: f32,
}

/// The player bounced off a platform
#[derive(Debug, Clone, Copy)]
pub struct Jumped {
    /// Where the bounce happened
    pub x: f32,
    pub y: f32,
}
