//! Display strings for the host's timer and score labels
//!
//! The exact text the game shows. Hosts rendering their own HUD can ignore
//! this module and work from the events directly.

use crate::session::GameEvent;

/// Terminal label text; tapping the label is the conventional restart trigger
pub const GAME_OVER_TEXT: &str = "Game Over!\n\nrestart game";

/// Countdown label while the session is running
pub fn timer_text(remaining_secs: u32) -> String {
    format!("Time: {remaining_secs}")
}

/// Score label after a catch
pub fn score_text(score: i32) -> String {
    format!("Score: {score}")
}

/// Label update for an event, if the event changes a label
pub fn line_for(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::TimerTick { remaining } => Some(timer_text(*remaining)),
        GameEvent::Caught { score, .. } => Some(score_text(*score)),
        GameEvent::GameOver => Some(GAME_OVER_TEXT.to_string()),
        _ => None,
    }
}
