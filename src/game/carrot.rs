//! Carrot Arena & Spawner
//!
//! Carrots live in a growable arena of stable slots. "Spawning" acquires an
//! inactive slot (growing only when none is free) and "collecting" flips the
//! active flag; no slot is ever freed mid-run. An inactive carrot is neither
//! rendered nor collidable.
//!
//! Two independent rules run each tick:
//! - spawn-on-recycle: every recycled platform gets a carrot placed on top
//! - passive recycle: active strays past the horizon move back above the view

use rand::Rng;

use super::constants::*;
use super::event::PlatformRecycled;

/// A collectible. Position is the sprite center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carrot {
    pub x: f32,
    pub y: f32,
    /// Inactive carrots have no collision effect and are not rendered
    pub active: bool,
}

/// Arena of carrot slots. Grows when every slot is active, shrinks never.
#[derive(Debug, Default)]
pub struct CarrotPool {
    slots: Vec<Carrot>,
}

impl CarrotPool {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Pool with the single carrot seeded at scene start.
    pub fn with_initial(x: f32, y: f32) -> Self {
        let mut pool = Self::new();
        pool.acquire(x, y);
        pool
    }

    /// Acquire a slot at the given position: reuse an inactive slot if one
    /// exists, otherwise grow the arena by one. Returns the slot index.
    pub fn acquire(&mut self, x: f32, y: f32) -> usize {
        let carrot = Carrot { x, y, active: true };

        if let Some(slot) = self.slots.iter().position(|c| !c.active) {
            self.slots[slot] = carrot;
            slot
        } else {
            self.slots.push(carrot);
            self.slots.len() - 1
        }
    }

    /// Place a carrot directly on top of a freshly recycled platform.
    pub fn spawn_above(&mut self, recycled: &PlatformRecycled) -> usize {
        self.acquire(recycled.x, recycled.y - PLATFORM_HEIGHT)
    }

    /// Deactivate a slot. Returns false if it was already inactive, so a
    /// stale overlap can never count twice.
    pub fn deactivate(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(carrot) if carrot.active => {
                carrot.active = false;
                true
            }
            _ => false,
        }
    }

    /// Move active strays past the recycle horizon back above the view.
    /// Slots spawned this tick sit just above the top already and are
    /// skipped so rule (a) and rule (b) stay independent.
    pub fn recycle_strays(
        &mut self,
        scroll_y: f32,
        spawned_this_tick: &[usize],
        rng: &mut impl Rng,
    ) {
        for (slot, carrot) in self.slots.iter_mut().enumerate() {
            if !carrot.active || spawned_this_tick.contains(&slot) {
                continue;
            }
            if carrot.y >= scroll_y + LOOKAHEAD {
                carrot.y = scroll_y - rng.gen_range(RECYCLE_LIFT_MIN..=RECYCLE_LIFT_MAX);
            }
        }
    }

    pub fn slots(&self) -> &[Carrot] {
        &self.slots
    }

    pub fn get(&self, slot: usize) -> Option<&Carrot> {
        self.slots.get(slot)
    }

    /// Total slots ever allocated (active or not)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|c| c.active).count()
    }

    /// Iterate over (slot, carrot) pairs for the active carrots only.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Carrot)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, c)| c.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn recycled_at(x: f32, y: f32) -> PlatformRecycled {
        PlatformRecycled { slot: 0, x, y }
    }

    #[test]
    fn test_initial_pool() {
        let pool = CarrotPool::with_initial(240.0, 320.0);

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(pool.get(0), Some(&Carrot { x: 240.0, y: 320.0, active: true }));
    }

    #[test]
    fn test_spawn_sits_on_platform_top() {
        let mut pool = CarrotPool::new();
        let slot = pool.spawn_above(&recycled_at(130.0, -60.0));

        let carrot = pool.get(slot).unwrap();
        assert_eq!(carrot.x, 130.0);
        assert_eq!(carrot.y, -60.0 - PLATFORM_HEIGHT);
        assert!(carrot.active);
    }

    #[test]
    fn test_acquire_prefers_reuse_over_growth() {
        let mut pool = CarrotPool::with_initial(240.0, 320.0);
        pool.deactivate(0);

        // With an inactive slot free, spawning must not grow the pool
        let slot = pool.spawn_above(&recycled_at(100.0, 0.0));
        assert_eq!(slot, 0);
        assert_eq!(pool.len(), 1);

        // With every slot active, growth is the only option
        let slot = pool.spawn_above(&recycled_at(200.0, 0.0));
        assert_eq!(slot, 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_deactivate_is_one_shot() {
        let mut pool = CarrotPool::with_initial(240.0, 320.0);

        assert!(pool.deactivate(0));
        assert!(!pool.deactivate(0));
        assert!(!pool.deactivate(99));
    }

    #[test]
    fn test_recycle_strays() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = CarrotPool::new();
        let stray = pool.acquire(100.0, 800.0);
        let fresh = pool.acquire(200.0, 790.0);
        let inactive = pool.acquire(300.0, 900.0);
        pool.deactivate(inactive);

        let scroll_y = 50.0;
        pool.recycle_strays(scroll_y, &[fresh], &mut rng);

        // The stray moved into the band above the view, at its existing x
        let carrot = pool.get(stray).unwrap();
        assert!(carrot.y >= scroll_y - RECYCLE_LIFT_MAX);
        assert!(carrot.y <= scroll_y - RECYCLE_LIFT_MIN);
        assert_eq!(carrot.x, 100.0);

        // Freshly spawned and inactive slots are left alone
        assert_eq!(pool.get(fresh).unwrap().y, 790.0);
        assert_eq!(pool.get(inactive).unwrap().y, 900.0);
    }
}
