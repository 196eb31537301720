//! Core game state types
//!
//! Everything needed to reproduce a session deterministically lives here.
//! Positions are in device-independent units with the origin at the top-left
//! of the playfield, y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::timer::Countdown;
use crate::consts::*;

/// Kind of a falling object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Worth +1 when caught
    Candy,
    /// Worth -1 when caught
    Bomb,
}

/// Playfield geometry, read once from the host after layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

/// A transient entity falling from the top edge of the playfield.
///
/// The vertical position is derived, not stored: a linear animation from 0 to
/// the playfield height over [`FALL_DURATION_MS`], sampled against the host
/// clock. The host drives the matching visual animation on its side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub kind: ObjectKind,
    /// Left edge, fixed at spawn
    pub x: f32,
    /// Host time at spawn (ms)
    pub spawned_at_ms: u64,
    /// Cleared exactly once, on Hit or Missed
    pub alive: bool,
}

impl FallingObject {
    /// Top edge of the object at the sampled time, clamped at the bottom.
    pub fn y_at(&self, now_ms: u64, playfield: &Playfield) -> f32 {
        let elapsed = now_ms.saturating_sub(self.spawned_at_ms);
        if elapsed >= FALL_DURATION_MS {
            return playfield.height;
        }
        playfield.height * (elapsed as f32 / FALL_DURATION_MS as f32)
    }

    /// Bounding box at the sampled time
    pub fn rect_at(&self, now_ms: u64, playfield: &Playfield) -> Rect {
        Rect::from_pos_size(
            Vec2::new(self.x, self.y_at(now_ms, playfield)),
            Vec2::splat(OBJECT_SIZE),
        )
    }
}

/// The player-controlled catcher, dragged horizontally along a fixed row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    /// Left edge; mutated only by drag input
    pub x: f32,
    /// Top edge, fixed for the whole session
    pub y: f32,
    pub size: Vec2,
}

impl Basket {
    pub fn new(x: f32, y: f32, size: Vec2) -> Self {
        Self { x, y, size }
    }

    /// Move to an absolute x reported by the host's drag stream, clamped to
    /// the playfield.
    pub fn drag_to(&mut self, x: f32, playfield: &Playfield) {
        let max_x = (playfield.width - self.size.x).max(0.0);
        self.x = x.clamp(0.0, max_x);
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::new(self.x, self.y), self.size)
    }
}

/// Score and countdown state for one bounded game.
///
/// All mutation funnels through the methods here; catches commute, so the
/// final score never depends on the order polls resolve across objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: i32,
    pub countdown: Countdown,
}

impl Session {
    pub fn new() -> Self {
        Self {
            score: 0,
            countdown: Countdown::new(SESSION_SECS),
        }
    }

    /// Apply one catch and return the score after it.
    pub fn apply_catch(&mut self, kind: ObjectKind) -> i32 {
        match kind {
            ObjectKind::Candy => self.score += 1,
            ObjectKind::Bomb => self.score -= 1,
        }
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn is_over(&self) -> bool {
        self.countdown.is_over()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
