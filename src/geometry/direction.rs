// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direction type for facing directions and bearings.
//!
//! A direction is a circular quantity. Direction zero faces "down the
//! hall", along the +down axis. A quarter turn to the right adds a
//! quarter circle; a quarter turn to the left subtracts one.
//!
//! # Examples
//!
//! ```
//! use squaredance::geometry::Direction;
//!
//! let down = Direction::ZERO;
//! assert_eq!(down.quarter_right().quarter_right(), down.opposite());
//! assert_eq!(down.quarter_left(), Direction::quarters(3));
//! assert_eq!(Direction::quarters(4), down);
//! ```

use crate::geometry::constants::TICKS_PER_CIRCLE;
use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A normalised circular direction.
///
/// Stored as ticks in `0..TICKS_PER_CIRCLE`. Because every constructor and
/// every arithmetic operation normalises, two directions are equal exactly
/// when they denote the same angle; no epsilon comparison is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Direction(u32);

impl Direction {
    /// Facing down the hall.
    pub const ZERO: Direction = Direction(0);

    /// A quarter of the circle.
    pub const QUARTER: Direction = Direction(TICKS_PER_CIRCLE / 4);

    /// Half of the circle.
    pub const HALF: Direction = Direction(TICKS_PER_CIRCLE / 2);

    /// Build a direction from a fraction of a full circle.
    ///
    /// The fraction is rounded to the nearest tick and wrapped, so
    /// `from_fraction(1.0) == from_fraction(0.0)` and negative fractions
    /// count the other way round.
    pub fn from_fraction(fraction: f64) -> Self {
        let ticks = (fraction * TICKS_PER_CIRCLE as f64).round() as i64;
        Self(ticks.rem_euclid(TICKS_PER_CIRCLE as i64) as u32)
    }

    /// Build a direction from an angle in radians.
    pub fn from_radians(radians: f64) -> Self {
        Self::from_fraction(radians / TAU)
    }

    /// A whole number of quarter turns to the right of [`Direction::ZERO`].
    pub fn quarters(count: i64) -> Self {
        let ticks = count * (TICKS_PER_CIRCLE / 4) as i64;
        Self(ticks.rem_euclid(TICKS_PER_CIRCLE as i64) as u32)
    }

    /// The fraction of the full circle, in `0.0..1.0`.
    pub fn fraction(self) -> f64 {
        self.0 as f64 / TICKS_PER_CIRCLE as f64
    }

    /// The angle in radians, in `0.0..TAU`.
    pub fn radians(self) -> f64 {
        self.fraction() * TAU
    }

    /// Raw tick count.
    pub fn ticks(self) -> u32 {
        self.0
    }

    /// The direction a quarter turn to the left.
    pub fn quarter_left(self) -> Self {
        self - Self::QUARTER
    }

    /// The direction a quarter turn to the right.
    pub fn quarter_right(self) -> Self {
        self + Self::QUARTER
    }

    /// The direction facing the other way.
    pub fn opposite(self) -> Self {
        self + Self::HALF
    }

    /// Divide the angle into `parts` equal parts.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero.
    pub fn divide_by(self, parts: u32) -> Self {
        assert!(parts > 0, "cannot divide a direction into zero parts");
        Self(self.0 / parts)
    }

    /// A `parts`-th of the full circle.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero.
    pub fn circle_fraction(parts: u32) -> Self {
        assert!(parts > 0, "cannot divide the circle into zero parts");
        Self::from_fraction(1.0 / parts as f64)
    }

    /// Multiply the angle by a whole number of turns of itself.
    pub fn multiply_by(self, factor: u32) -> Self {
        let ticks = self.0 as u64 * factor as u64;
        Self((ticks % TICKS_PER_CIRCLE as u64) as u32)
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, rhs: Direction) -> Direction {
        Direction(((self.0 as u64 + rhs.0 as u64) % TICKS_PER_CIRCLE as u64) as u32)
    }
}

impl Sub for Direction {
    type Output = Direction;

    fn sub(self, rhs: Direction) -> Direction {
        self + (-rhs)
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction((TICKS_PER_CIRCLE - self.0) % TICKS_PER_CIRCLE)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.fraction() * 360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turns_compose() {
        let d = Direction::quarters(1);
        assert_eq!(d.quarter_left(), Direction::ZERO);
        assert_eq!(d.quarter_right(), Direction::HALF);
        assert_eq!(Direction::ZERO.quarter_left(), Direction::quarters(-1));
        assert_eq!(Direction::quarters(-1), Direction::quarters(3));
    }

    #[test]
    fn test_opposite_is_involution() {
        for q in 0..4 {
            let d = Direction::quarters(q);
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn test_full_circle_normalises_to_zero() {
        assert_eq!(Direction::from_fraction(1.0), Direction::ZERO);
        assert_eq!(Direction::from_fraction(-0.25), Direction::quarters(3));
        let quarter = Direction::circle_fraction(4);
        assert_eq!(quarter.multiply_by(4), Direction::ZERO);
        assert_eq!(quarter, Direction::QUARTER);
    }

    #[test]
    fn test_add_subtract() {
        let a = Direction::from_fraction(0.125);
        let b = Direction::from_fraction(0.375);
        assert_eq!(a + b, Direction::HALF);
        assert_eq!((a + b) - b, a);
        assert_eq!(a - a, Direction::ZERO);
    }

    #[test]
    fn test_radians_round_trip() {
        let d = Direction::from_radians(std::f64::consts::FRAC_PI_2);
        assert_eq!(d, Direction::QUARTER);
        assert_eq!(Direction::from_radians(-std::f64::consts::PI), Direction::HALF);
        assert_eq!(Direction::from_radians(std::f64::consts::PI), Direction::HALF);
    }

    #[test]
    fn test_divide_by() {
        assert_eq!(Direction::HALF.divide_by(2), Direction::QUARTER);
    }

    #[test]
    #[should_panic(expected = "zero parts")]
    fn test_divide_by_zero() {
        Direction::HALF.divide_by(0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::QUARTER.to_string(), "90.0°");
    }
}
