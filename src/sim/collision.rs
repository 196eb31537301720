//! Collision polling between a falling object and the basket
//!
//! Plain axis-aligned boxes. Both boxes are shrunk by [`COLLISION_MARGIN`]
//! before the test and the overlap must be strict on both axes, so grazing
//! contact exactly at the margin does not count as a catch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Basket, FallingObject, ObjectKind, Playfield};
use crate::consts::*;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink by `margin` on all four sides
    pub fn shrink(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Result of one collision poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollOutcome {
    /// Object overlaps the basket; resolve the catch and stop polling
    Hit(ObjectKind),
    /// Object reached the bottom uncaught; remove it and stop polling
    Missed,
    /// Still falling; poll again after [`POLL_PERIOD_MS`]
    Pending,
}

/// Poll one live object against the basket at the sampled time.
///
/// A hit requires the object to still be in flight: once its top edge
/// reaches the playfield bottom the outcome is Missed even if the boxes
/// would overlap.
pub fn poll(
    object: &FallingObject,
    basket: &Basket,
    playfield: &Playfield,
    now_ms: u64,
) -> PollOutcome {
    let y = object.y_at(now_ms, playfield);
    if y >= playfield.height {
        return PollOutcome::Missed;
    }

    let object_box = object.rect_at(now_ms, playfield).shrink(COLLISION_MARGIN);
    let basket_box = basket.rect().shrink(COLLISION_MARGIN);
    if object_box.overlaps(&basket_box) {
        PollOutcome::Hit(object.kind)
    } else {
        PollOutcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Playfield = Playfield {
        width: 1000.0,
        height: 2000.0,
    };

    fn basket() -> Basket {
        Basket::new(400.0, 1900.0, Vec2::new(150.0, 50.0))
    }

    fn candy_at(x: f32) -> FallingObject {
        FallingObject {
            id: 1,
            kind: ObjectKind::Candy,
            x,
            spawned_at_ms: 0,
            alive: true,
        }
    }

    #[test]
    fn test_catch_over_the_basket() {
        // Candy at x=420 reaches y=1900 at 2850 ms (95% of the fall)
        let object = candy_at(420.0);
        assert_eq!(
            poll(&object, &basket(), &FIELD, 2850),
            PollOutcome::Hit(ObjectKind::Candy)
        );
    }

    #[test]
    fn test_bomb_hit_reports_kind() {
        let mut object = candy_at(420.0);
        object.kind = ObjectKind::Bomb;
        assert_eq!(
            poll(&object, &basket(), &FIELD, 2850),
            PollOutcome::Hit(ObjectKind::Bomb)
        );
    }

    #[test]
    fn test_margin_touch_is_not_a_hit() {
        // Shrunk boxes: object [x+10, x+140], basket [410, 540].
        // At x=530 the shrunk edges touch exactly; strict overlap says no.
        let object = Rect::from_pos_size(Vec2::new(530.0, 1800.0), Vec2::splat(150.0)).shrink(10.0);
        let catcher = basket().rect().shrink(10.0);
        assert!(!object.overlaps(&catcher));

        // One unit further in and it counts
        let object = Rect::from_pos_size(Vec2::new(529.0, 1800.0), Vec2::splat(150.0)).shrink(10.0);
        assert!(object.overlaps(&catcher));
    }

    #[test]
    fn test_vertical_margin_touch_is_not_a_hit() {
        // Shrunk object top edge (1930 + 10) meets the shrunk basket bottom
        // edge (1950 - 10) exactly
        let object = Rect::from_pos_size(Vec2::new(420.0, 1930.0), Vec2::splat(150.0)).shrink(10.0);
        let catcher = basket().rect().shrink(10.0);
        assert_eq!(object.min.y, catcher.max.y);
        assert!(!object.overlaps(&catcher));
    }

    #[test]
    fn test_centered_overlap_is_a_hit() {
        let object = Rect::from_pos_size(Vec2::new(400.0, 1850.0), Vec2::splat(150.0)).shrink(10.0);
        let catcher = basket().rect().shrink(10.0);
        assert!(object.overlaps(&catcher));
        assert!(catcher.overlaps(&object));
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        // Horizontally aligned but still high above the basket
        let object = candy_at(420.0);
        assert_eq!(poll(&object, &basket(), &FIELD, 1000), PollOutcome::Pending);

        // At basket height but far off to the side
        let object = candy_at(0.0);
        assert_eq!(poll(&object, &basket(), &FIELD, 2850), PollOutcome::Pending);
    }

    #[test]
    fn test_bottom_of_playfield_is_a_miss() {
        let object = candy_at(420.0);
        assert_eq!(poll(&object, &basket(), &FIELD, 3000), PollOutcome::Missed);
        assert_eq!(poll(&object, &basket(), &FIELD, 3300), PollOutcome::Missed);
    }
}
