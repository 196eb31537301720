//! Falling-object spawner
//!
//! One object per spawn period while the session is running. The RNG is
//! seeded, so a session replays identically from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{FallingObject, ObjectKind};
use crate::consts::*;

/// Creates falling objects with a uniform-random kind and start column
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Spawn a new object at the top of the playfield.
    ///
    /// The start column is drawn from `[0, max(1, width - OBJECT_SIZE))`, so
    /// a playfield narrower than one object still yields a valid range
    /// instead of a negative one.
    pub fn spawn(&mut self, playfield_width: f32, now_ms: u64) -> FallingObject {
        let kind = if self.rng.random_bool(0.5) {
            ObjectKind::Candy
        } else {
            ObjectKind::Bomb
        };
        let max_x = (playfield_width - OBJECT_SIZE).max(1.0);
        let x = self.rng.random_range(0.0..max_x);

        let id = self.next_id;
        self.next_id += 1;

        FallingObject {
            id,
            kind,
            x,
            spawned_at_ms: now_ms,
            alive: true,
        }
    }
}
