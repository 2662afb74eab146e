// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Relational predicates between two dancers.
//!
//! These are the vocabulary every formation rule is built from. Each one
//! is a pure function of the two dancers' poses. Only the first dancer's
//! facing direction matters: `left_of(a, b)` asks whether `b` stands
//! exactly to `a`'s left, whichever way `b` faces.
//!
//! Bearings are compared exactly (see [`Direction`]). Dancers standing on
//! the same spot have no bearing to each other, so every directional
//! predicate is false for them.
//!
//! # Example
//!
//! ```
//! use squaredance::dancer::Dancer;
//! use squaredance::geometry::{Direction, Position};
//! use squaredance::predicates::{in_front_of, right_of};
//!
//! // Facing down the hall, the dancer's right is towards +left.
//! let beau = Dancer::new(0, Position::new(0.0, -0.5), Direction::ZERO);
//! let belle = Dancer::new(1, Position::new(0.0, 0.5), Direction::ZERO);
//! assert!(right_of(&beau, &belle));
//! assert!(!in_front_of(&beau, &belle));
//! ```

use crate::dancer::Dancer;
use crate::geometry::{Direction, COUPLE_DISTANCE, NEAR_FUDGE};

/// The bearing from `from` to `to`, if they are not on the same spot.
fn bearing(from: &Dancer, to: &Dancer) -> Option<Direction> {
    from.position().direction_to(to.position())
}

/// True if `dancer2` is exactly to the left of `dancer1`.
pub fn left_of(dancer1: &Dancer, dancer2: &Dancer) -> bool {
    bearing(dancer1, dancer2) == Some(dancer1.direction().quarter_left())
}

/// True if `dancer2` is exactly to the right of `dancer1`.
pub fn right_of(dancer1: &Dancer, dancer2: &Dancer) -> bool {
    bearing(dancer1, dancer2) == Some(dancer1.direction().quarter_right())
}

/// True if `dancer1` is facing `dancer2`.
pub fn in_front_of(dancer1: &Dancer, dancer2: &Dancer) -> bool {
    bearing(dancer1, dancer2) == Some(dancer1.direction())
}

/// True if `dancer2` is directly behind `dancer1`.
pub fn behind(dancer1: &Dancer, dancer2: &Dancer) -> bool {
    bearing(dancer1, dancer2) == Some(dancer1.direction().opposite())
}

/// True if both dancers face the same way.
pub fn same_direction(dancer1: &Dancer, dancer2: &Dancer) -> bool {
    dancer1.direction() == dancer2.direction()
}

/// The default proximity tolerance: one couple distance plus the fudge.
pub fn near_tolerance() -> f64 {
    COUPLE_DISTANCE * (1.0 + NEAR_FUDGE)
}

/// True if the dancers are no further apart than [`near_tolerance`].
pub fn near(dancer1: &Dancer, dancer2: &Dancer) -> bool {
    near_within(dancer1, dancer2, near_tolerance())
}

/// True if the dancers are no further apart than `tolerance`.
pub fn near_within(dancer1: &Dancer, dancer2: &Dancer, tolerance: f64) -> bool {
    dancer1.position().distance(dancer2.position()) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    fn dancer(ordinal: usize, down: f64, left: f64, quarters: i64) -> Dancer {
        Dancer::new(ordinal, Position::new(down, left), Direction::quarters(quarters))
    }

    #[test]
    fn test_left_and_right() {
        let a = dancer(0, 0.0, 0.0, 0);
        let b = dancer(1, 0.0, 1.0, 2);
        assert!(right_of(&a, &b));
        assert!(!left_of(&a, &b));
        // b faces up the hall, so a (at -left) is on b's right too.
        assert!(right_of(&b, &a));
        assert!(!left_of(&b, &a));
    }

    #[test]
    fn test_in_front_and_behind() {
        let a = dancer(0, 0.0, 0.0, 0);
        let b = dancer(1, 1.0, 0.0, 0);
        assert!(in_front_of(&a, &b));
        assert!(behind(&b, &a));
        assert!(!behind(&a, &b));
        assert!(!in_front_of(&b, &a));
    }

    #[test]
    fn test_only_first_dancer_direction_matters() {
        let a = dancer(0, 0.0, 0.0, 0);
        for q in 0..4 {
            let b = dancer(1, 1.0, 0.0, q);
            assert!(in_front_of(&a, &b));
        }
    }

    #[test]
    fn test_coincident_dancers_relate_to_nothing() {
        let a = dancer(0, 0.0, 0.0, 0);
        let b = dancer(1, 0.0, 0.0, 0);
        assert!(!left_of(&a, &b));
        assert!(!right_of(&a, &b));
        assert!(!in_front_of(&a, &b));
        assert!(!behind(&a, &b));
        assert!(near(&a, &b));
    }

    #[test]
    fn test_diagonal_is_not_beside() {
        let a = dancer(0, 0.0, 0.0, 0);
        let b = dancer(1, 1.0, 1.0, 0);
        assert!(!left_of(&a, &b));
        assert!(!right_of(&a, &b));
        assert!(!in_front_of(&a, &b));
    }

    #[test]
    fn test_near() {
        let a = dancer(0, 0.0, 0.0, 0);
        let b = dancer(1, 0.0, COUPLE_DISTANCE, 0);
        let c = dancer(2, 0.0, 2.0 * COUPLE_DISTANCE, 0);
        assert!(near(&a, &b));
        assert!(!near(&a, &c));
        assert!(near_within(&a, &c, 2.0));
    }
}
