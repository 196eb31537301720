//! Deterministic game core
//!
//! All gameplay rules live here. This module must stay pure and deterministic:
//! - Host-sampled time only (the core never reads a real clock)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod timer;

pub use collision::{PollOutcome, Rect, poll};
pub use spawn::Spawner;
pub use state::{Basket, FallingObject, ObjectKind, Playfield, Session};
pub use timer::{Countdown, TimerTick};
