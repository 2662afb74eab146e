// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Positions on the dance floor.
//!
//! A position has two coordinates: `down` (towards the back of the hall)
//! and `left` (towards the caller's left when facing the hall). Bearings
//! between positions use the same convention as [`Direction`]: direction
//! zero points along +down and a quarter turn to the right points along
//! +left.

use crate::geometry::constants::POSITION_GRID;
use crate::geometry::Direction;
use std::fmt;
use std::ops::{Add, Sub};

/// A point (or displacement) on the dance floor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub down: f64,
    pub left: f64,
}

/// Snap a coordinate to the position grid.
fn snap(value: f64) -> f64 {
    let snapped = (value * POSITION_GRID).round() / POSITION_GRID;
    // Normalise -0.0 so that bearings along the axes are stable.
    if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}

impl Position {
    /// The origin.
    pub const ORIGIN: Position = Position { down: 0.0, left: 0.0 };

    pub fn new(down: f64, left: f64) -> Self {
        Self { down, left }
    }

    /// The displacement of `distance` units in `direction`.
    ///
    /// The result is snapped to the position grid, which makes axis
    /// aligned displacements exact.
    pub fn polar(direction: Direction, distance: f64) -> Self {
        let angle = direction.radians();
        Self {
            down: snap(distance * angle.cos()),
            left: snap(distance * angle.sin()),
        }
    }

    /// Euclidean length of this position taken as a vector.
    pub fn magnitude(self) -> f64 {
        self.down.hypot(self.left)
    }

    /// Euclidean distance between two positions.
    pub fn distance(self, other: Position) -> f64 {
        (other - self).magnitude()
    }

    /// The bearing of this position taken as a vector.
    ///
    /// Returns `None` for the zero vector, which has no bearing.
    pub fn angle(self) -> Option<Direction> {
        if self.down == 0.0 && self.left == 0.0 {
            return None;
        }
        Some(Direction::from_radians(self.left.atan2(self.down)))
    }

    /// The bearing from this position to `other`.
    ///
    /// Returns `None` when the two positions coincide.
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        (other - self).angle()
    }

    /// The centroid of a collection of positions.
    ///
    /// The centroid of nothing is the origin.
    pub fn center(positions: &[Position]) -> Position {
        if positions.is_empty() {
            return Position::ORIGIN;
        }
        let count = positions.len() as f64;
        let sum = positions
            .iter()
            .fold(Position::ORIGIN, |acc, &p| acc + p);
        Position {
            down: snap(sum.down / count),
            left: snap(sum.left / count),
        }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            down: self.down + rhs.down,
            left: self.left + rhs.left,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            down: self.down - rhs.down,
            left: self.left - rhs.left,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(down {}, left {})", self.down, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_is_exact_on_axes() {
        assert_eq!(Position::polar(Direction::ZERO, 2.0), Position::new(2.0, 0.0));
        assert_eq!(Position::polar(Direction::QUARTER, 2.0), Position::new(0.0, 2.0));
        assert_eq!(Position::polar(Direction::HALF, 1.5), Position::new(-1.5, 0.0));
        assert_eq!(Position::polar(Direction::quarters(3), 0.5), Position::new(0.0, -0.5));
    }

    #[test]
    fn test_distance() {
        let origin = Position::ORIGIN;
        let p = Position::polar(Direction::QUARTER, 2.0);
        assert_eq!(p.distance(origin), 2.0);
        assert_eq!(Position::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_direction_to() {
        let origin = Position::ORIGIN;
        let p = Position::polar(Direction::QUARTER, 2.0);
        assert_eq!(origin.direction_to(p), Some(Direction::QUARTER));
        assert_eq!(p.direction_to(origin), Some(Direction::QUARTER.opposite()));
        assert_eq!(
            origin.direction_to(Position::new(-1.0, 0.0)),
            Some(Direction::HALF)
        );
    }

    #[test]
    fn test_coincident_positions_have_no_bearing() {
        let p = Position::new(0.5, -0.5);
        assert_eq!(p.direction_to(p), None);
        assert_eq!(Position::ORIGIN.angle(), None);
    }

    #[test]
    fn test_center() {
        let c = Position::center(&[Position::new(0.25, 1.0), Position::new(0.75, -1.0)]);
        assert_eq!(c, Position::new(0.5, 0.0));
        assert_eq!(Position::center(&[]), Position::ORIGIN);
    }

    #[test]
    fn test_add_subtract() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(0.5, -1.0);
        assert_eq!((a + b) - b, a);
    }
}
