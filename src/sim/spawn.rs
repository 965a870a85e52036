//! Timed enemy spawn policy
//!
//! One enemy every `SPAWN_INTERVAL_MS`, at a random horizontal position just
//! above the top edge, elite with fixed probability. The timer is polled from
//! the tick so it can never race the rest of the simulation, and the RNG is
//! seeded so a session's spawn sequence is reproducible in tests.
//!
//! There is deliberately no population cap: pruning of off-screen enemies is
//! what keeps the collection bounded.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Enemy, EnemyKind};
use crate::consts::*;

/// Interval-driven enemy generator
#[derive(Debug, Clone)]
pub struct Spawner {
    interval_ms: f32,
    elapsed_ms: f32,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self::with_interval(seed, SPAWN_INTERVAL_MS)
    }

    /// Custom cadence, used by tests to disable or accelerate spawning
    pub fn with_interval(seed: u64, interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Advance the spawn timer by `dt_ms`; returns a new enemy each time the
    /// interval elapses.
    pub fn poll(&mut self, dt_ms: f32) -> Option<Enemy> {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            Some(self.spawn())
        } else {
            None
        }
    }

    fn spawn(&mut self) -> Enemy {
        let x = self.rng.random_range(0.0..PLAY_WIDTH - ENEMY_WIDTH);
        let kind = if self.rng.random_bool(ELITE_CHANCE) {
            EnemyKind::Elite
        } else {
            EnemyKind::Standard
        };
        log::debug!("spawning {kind:?} enemy at x={x:.1}");
        Enemy::new(x, -ENEMY_HEIGHT, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_cadence() {
        let mut spawner = Spawner::new(42);
        assert!(spawner.poll(1000.0).is_none());
        assert!(spawner.poll(1000.0).is_some());
        // Remainder carries over
        assert!(spawner.poll(1500.0).is_none());
        assert!(spawner.poll(500.0).is_some());
    }

    #[test]
    fn test_spawn_position_and_stats() {
        let mut spawner = Spawner::new(7);
        let mut kinds_seen = (false, false);
        for _ in 0..200 {
            let enemy = spawner.poll(SPAWN_INTERVAL_MS).expect("interval elapsed");
            assert!(enemy.pos.x >= 0.0);
            assert!(enemy.pos.x < PLAY_WIDTH - ENEMY_WIDTH);
            assert_eq!(enemy.pos.y, -ENEMY_HEIGHT);
            assert_eq!(enemy.health, enemy.kind.max_health());
            match enemy.kind {
                EnemyKind::Standard => kinds_seen.0 = true,
                EnemyKind::Elite => kinds_seen.1 = true,
            }
        }
        // At a 0.2 elite rate, 200 spawns see both variants
        assert!(kinds_seen.0 && kinds_seen.1);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Spawner::new(99);
        let mut b = Spawner::new(99);
        for _ in 0..20 {
            let ea = a.poll(SPAWN_INTERVAL_MS).expect("spawn");
            let eb = b.poll(SPAWN_INTERVAL_MS).expect("spawn");
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.kind, eb.kind);
        }
    }

    #[test]
    fn test_disabled_interval_never_spawns() {
        let mut spawner = Spawner::with_interval(1, f32::MAX);
        for _ in 0..10_000 {
            assert!(spawner.poll(TICK_MS).is_none());
        }
    }
}
