//! Sound triggering
//!
//! Loads the jump/collect effects at startup and fires them off the
//! simulation's event queues. Missing asset files degrade to silence.

use macroquad::audio::{load_sound, play_sound_once, Sound};

use crate::game::Events;

pub struct Sounds {
    jump: Option<Sound>,
    collect: Option<Sound>,
}

impl Sounds {
    pub async fn load() -> Self {
        Self {
            jump: load_optional("assets/sfx/jump.ogg").await,
            collect: load_optional("assets/sfx/collect.ogg").await,
        }
    }

    /// React to this frame's events. Call after the tick, before the
    /// queues are cleared.
    pub fn play_for(&self, events: &Events) {
        if !events.jumped.is_empty() {
            if let Some(sound) = &self.jump {
                play_sound_once(sound);
            }
        }
        for _ in events.carrot_collected.iter() {
            if let Some(sound) = &self.collect {
                play_sound_once(sound);
            }
        }
    }
}

async fn load_optional(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            println!("No sound at {}: {} (continuing silent)", path, e);
            None
        }
    }
}
