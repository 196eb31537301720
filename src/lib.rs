//! Candy Catch - a falling-object arcade game core
//!
//! The host owns the clock, the input stream, and the rendering; this crate
//! owns the rules. Core modules:
//! - `sim`: deterministic game core (state, spawner, collision, countdown)
//! - `schedule`: cancellable timer queue for the spawn/poll/countdown cadences
//! - `session`: host-facing driver; turns sampled time into game events
//! - `hud`: display strings for the timer and score labels

pub mod hud;
pub mod schedule;
pub mod session;
pub mod sim;

pub use session::{GameEvent, GameSession};

/// Game configuration constants
pub mod consts {
    /// Session length in seconds
    pub const SESSION_SECS: u32 = 30;
    /// Countdown tick period (ms)
    pub const COUNTDOWN_PERIOD_MS: u64 = 1000;
    /// Spawn period (ms) - one new falling object per period while running
    pub const SPAWN_PERIOD_MS: u64 = 1000;
    /// Fall duration (ms) from the top of the playfield to the bottom, linear
    pub const FALL_DURATION_MS: u64 = 3000;
    /// Side length of a falling object (device-independent units)
    pub const OBJECT_SIZE: f32 = 150.0;
    /// Collision poll period per live object (ms), independent of frame rate
    pub const POLL_PERIOD_MS: u64 = 50;
    /// Shrink applied to both boxes before the overlap test
    pub const COLLISION_MARGIN: f32 = 10.0;

    /// Default basket size
    pub const BASKET_WIDTH: f32 = 150.0;
    pub const BASKET_HEIGHT: f32 = 50.0;
}
