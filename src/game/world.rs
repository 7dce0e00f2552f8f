//! Game World
//!
//! The World exclusively owns every pool plus the player, camera and score,
//! and runs the fixed per-tick order:
//!
//! 1. physics contact snapshot (gravity, integration, landing)
//! 2. platform recycler
//! 3. carrot spawner / stray recycler
//! 4. player controller (auto-jump, steering, wrap)
//! 5. camera tracker
//! 6. collision/scoring handler
//! 7. game-over detector
//!
//! Single-threaded by design: each shared pool is mutated only by its own
//! phase, in this order, so no locking exists anywhere in the core. The
//! game-over transition is one-way and one-shot; afterwards `tick` is a
//! no-op.

use rand::Rng;

use super::camera::Camera;
use super::carrot::CarrotPool;
use super::constants::*;
use super::event::{CarrotCollected, Events, Jumped};
use super::physics;
use super::platform::{self, Platform};
use super::player::Player;
use super::score::Score;
use crate::input::InputSnapshot;

pub struct World {
    /// Fixed platform pool; recycled in place, never resized
    pub platforms: [Platform; PLATFORM_COUNT],

    /// Growable carrot arena
    pub carrots: CarrotPool,

    pub player: Player,
    pub camera: Camera,
    pub score: Score,

    /// Event queues filled during the tick, cleared by the host each frame
    pub events: Events,

    game_over: bool,
}

impl World {
    /// Fresh run: seeded platform rows, one carrot, player at the start
    /// position, score at zero.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            platforms: platform::seed_platforms(rng),
            carrots: CarrotPool::with_initial(CARROT_START_X, CARROT_START_Y),
            player: Player::new(),
            camera: Camera::new(),
            score: Score::new(),
            events: Events::new(),
            game_over: false,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Run one frame of simulation.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32, rng: &mut impl Rng) {
        if self.game_over {
            return;
        }

        // Contact state is a snapshot taken once, at the start of the tick
        let contact = physics::step(&mut self.player, &self.platforms, dt);

        // Recyclers read the scroll offset from before this tick's follow
        let scroll_y = self.camera.scroll_y;
        platform::recycle_platforms(&mut self.platforms, scroll_y, rng, &mut self.events);

        // Rule (a): every recycled platform gets a carrot on top.
        // Rule (b): active strays past the horizon come back above the view;
        // the slots spawned by rule (a) this tick are exempt.
        let recycled: Vec<_> = self.events.platform_recycled.drain().collect();
        let spawned: Vec<usize> = recycled
            .iter()
            .map(|ev| self.carrots.spawn_above(ev))
            .collect();
        self.carrots.recycle_strays(scroll_y, &spawned, rng);

        if self.player.control(input, contact.touching_down) {
            self.events.jumped.send(Jumped {
                x: self.player.x,
                y: self.player.y,
            });
        }
        self.player.wrap(VIEW_WIDTH);

        self.camera.follow(self.player.x, self.player.y);

        for slot in physics::player_carrot_overlaps(&self.player, &self.carrots) {
            // deactivate() is one-shot, so a slot can never score twice
            // before the spawner reactivates it
            if self.carrots.deactivate(slot) {
                self.score.increment();
                let carrot = self.carrots.get(slot).copied();
                self.events.carrot_collected.send(CarrotCollected {
                    slot,
                    x: carrot.map_or(self.player.x, |c| c.x),
                    y: carrot.map_or(self.player.y, |c| c.y),
                });
            }
        }

        let bottom = platform::bottommost(&self.platforms);
        if self.player.y > bottom.y + GAME_OVER_MARGIN {
            self.game_over = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn no_input() -> InputSnapshot {
        InputSnapshot::default()
    }

    #[test]
    fn test_fresh_run_seeding() {
        // Scenario A: rows at 0/150/300/450/600, x in [80, 400], one carrot
        // at (240, 320), score text at zero.
        let world = World::new(&mut rng());

        for (i, platform) in world.platforms.iter().enumerate() {
            assert_eq!(platform.y, 150.0 * i as f32);
            assert!(platform.x >= 80.0 && platform.x <= 400.0);
        }

        assert_eq!(world.carrots.len(), 1);
        let carrot = world.carrots.get(0).unwrap();
        assert_eq!((carrot.x, carrot.y), (240.0, 320.0));
        assert!(carrot.active);

        assert_eq!(world.score.collected(), 0);
        assert_eq!(world.score.label(), "Carrots: 0");
        assert!(!world.is_game_over());
    }

    #[test]
    fn test_collecting_the_seeded_carrot() {
        // Scenario B: the player starts on top of the seeded carrot, so the
        // first tick collects it.
        let mut rng = rng();
        let mut world = World::new(&mut rng);

        world.tick(&no_input(), 0.0, &mut rng);

        assert_eq!(world.score.collected(), 1);
        assert_eq!(world.score.label(), "Carrots: 1");
        assert!(!world.carrots.get(0).unwrap().active);
        assert_eq!(world.events.carrot_collected.len(), 1);
    }

    #[test]
    fn test_inactive_carrot_cannot_score_again() {
        let mut rng = rng();
        let mut world = World::new(&mut rng);

        world.tick(&no_input(), 0.0, &mut rng);
        assert_eq!(world.score.collected(), 1);

        // Still overlapping the same (now inactive) slot
        world.tick(&no_input(), 0.0, &mut rng);
        assert_eq!(world.score.collected(), 1);
    }

    #[test]
    fn test_recycle_spawns_carrot_above_platform() {
        // Scenario C: a platform at y 760 with scroll_y 50 recycles into
        // [-50, 0] and a fresh carrot appears one platform-height above it.
        let mut rng = rng();
        let mut world = World::new(&mut rng);
        world.platforms[1].y = 760.0;
        world.camera.scroll_y = 50.0;
        world.player.x = 0.0; // keep the player away from the seeded carrot

        world.tick(&no_input(), 0.0, &mut rng);

        let recycled = world.platforms[1];
        assert!(recycled.y >= -50.0 && recycled.y <= 0.0);

        let spawned = world
            .carrots
            .iter_active()
            .find(|(_, c)| c.x == recycled.x && c.y < 0.0)
            .map(|(_, c)| *c)
            .expect("a carrot should spawn above the recycled platform");
        assert_eq!(spawned.y, recycled.y - PLATFORM_HEIGHT);

        // The recycle events were consumed by the spawner within the tick
        assert!(world.events.platform_recycled.is_empty());
    }

    #[test]
    fn test_game_over_boundary() {
        // Scenario D: exactly margin below the bottommost platform is still
        // alive; one unit further ends the run.
        let mut rng = rng();
        let mut world = World::new(&mut rng);
        let bottom_y = 600.0;
        world.player.x = 0.0;

        world.player.y = bottom_y + 200.0;
        world.tick(&no_input(), 0.0, &mut rng);
        assert!(!world.is_game_over());

        world.player.y = bottom_y + 201.0;
        world.tick(&no_input(), 0.0, &mut rng);
        assert!(world.is_game_over());

        // One-shot: the simulation has stopped for good
        let frozen = world.player;
        world.tick(&no_input(), 1.0, &mut rng);
        assert!(world.is_game_over());
        assert_eq!(world.player.y, frozen.y);
        assert_eq!(world.score.collected(), 0);
    }

    #[test]
    fn test_landing_bounces_and_emits_jump() {
        let mut rng = rng();
        let mut world = World::new(&mut rng);
        world.player.x = 240.0;
        world.player.vy = 100.0;
        // Park a platform top just under the player's feet
        world.platforms[0] = Platform { x: 240.0, y: world.player.bottom() + 21.0 };

        world.tick(&no_input(), 0.05, &mut rng);

        assert_eq!(world.player.vy, JUMP_VELOCITY);
        assert_eq!(world.player.pose, crate::game::Pose::Airborne);
        assert_eq!(world.events.jumped.len(), 1);
    }

    #[test]
    fn test_long_run_invariants() {
        // Platform count is fixed by the type, but the carrot arena must
        // stay bounded: with reuse preferred over growth, a long run never
        // needs more slots than a handful beyond the platform count.
        let mut rng = rng();
        let mut world = World::new(&mut rng);

        for _ in 0..2000 {
            world.tick(&no_input(), 1.0 / 60.0, &mut rng);
            world.events.clear_all();
            if world.is_game_over() {
                break;
            }
        }

        assert_eq!(world.platforms.len(), PLATFORM_COUNT);
        assert!(
            world.carrots.len() <= PLATFORM_COUNT + 2,
            "carrot arena grew without reuse: {} slots",
            world.carrots.len()
        );
    }
}
