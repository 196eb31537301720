//! Session countdown
//!
//! Running(n > 0) -> Running(n - 1) -> Over(0), terminal. There is no pause
//! or resume; a restart tears the whole session down and builds a new one.

use serde::{Deserialize, Serialize};

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerTick {
    pub remaining: u32,
    pub is_over: bool,
}

/// One-way countdown from the session length to zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    over: bool,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining: secs,
            over: secs == 0,
        }
    }

    /// Advance one second. Once over, further ticks are no-ops.
    pub fn tick(&mut self) -> TimerTick {
        if !self.over {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.over = true;
            }
        }
        TimerTick {
            remaining: self.remaining,
            is_over: self.over,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_over(&self) -> bool {
        self.over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_sequence() {
        let mut countdown = Countdown::new(30);
        assert!(!countdown.is_over());

        let ticks: Vec<TimerTick> = (0..30).map(|_| countdown.tick()).collect();

        let remaining: Vec<u32> = ticks.iter().map(|t| t.remaining).collect();
        let expected: Vec<u32> = (0..30).rev().collect();
        assert_eq!(remaining, expected);

        // Over exactly at the 30th tick, not before
        assert!(ticks[..29].iter().all(|t| !t.is_over));
        assert!(ticks[29].is_over);
    }

    #[test]
    fn test_over_is_sticky() {
        let mut countdown = Countdown::new(2);
        countdown.tick();
        countdown.tick();
        assert!(countdown.is_over());

        // Extra ticks change nothing
        let tick = countdown.tick();
        assert_eq!(tick, TimerTick { remaining: 0, is_over: true });
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_zero_length_session_starts_over() {
        let countdown = Countdown::new(0);
        assert!(countdown.is_over());
    }
}
