//! Scene state
//!
//! Fixed set of scenes. The start key moves Start and GameOver into a
//! fresh Game run; the Game scene only leaves through the world's
//! game-over transition, which discards the run state on re-entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Title screen waiting for the start key
    Start,
    /// A live run
    Game,
    /// Terminal screen showing the final score
    GameOver,
}

impl Scene {
    /// The scene reached when the start key fires.
    pub fn after_start_key(self) -> Scene {
        match self {
            Scene::Start | Scene::GameOver => Scene::Game,
            Scene::Game => Scene::Game,
        }
    }

    /// Named destination, as used by the host's transition primitive.
    pub fn label(&self) -> &'static str {
        match self {
            Scene::Start => "start",
            Scene::Game => "game",
            Scene::GameOver => "game-over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_key_transitions() {
        assert_eq!(Scene::Start.after_start_key(), Scene::Game);
        assert_eq!(Scene::GameOver.after_start_key(), Scene::Game);
        assert_eq!(Scene::Game.after_start_key(), Scene::Game);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Scene::Start.label(), "start");
        assert_eq!(Scene::GameOver.label(), "game-over");
    }
}
