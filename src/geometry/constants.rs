// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for dancer geometry.
//!
//! Distances are measured in couple-distance units: two dancers standing
//! side by side as a couple are exactly [`COUPLE_DISTANCE`] apart.

/// Distance between the two dancers of a couple.
pub const COUPLE_DISTANCE: f64 = 1.0;

/// Relative slack allowed by the default proximity test.
///
/// Dancers are "near" when they are no further apart than
/// `COUPLE_DISTANCE * (1.0 + NEAR_FUDGE)`.
pub const NEAR_FUDGE: f64 = 0.05;

/// Number of ticks in one full circle.
///
/// Directions are stored as an integer number of ticks so that
/// equality of normalised directions is exact.
pub const TICKS_PER_CIRCLE: u32 = 1 << 24;

/// Resolution of the grid that positions derived from polar coordinates
/// are snapped to (reciprocal of the grid spacing).
pub const POSITION_GRID: f64 = (1u64 << 20) as f64;

const _: () = assert!(
    TICKS_PER_CIRCLE % 4 == 0,
    "quarter turns must be an exact number of ticks"
);
