// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the dance floor.
//!
//! This module contains the primitives every formation rule is built on:
//! - Direction: circular facing directions and bearings
//! - Position: points and displacements on the floor
//! - constants: couple distance, proximity slack, resolutions

pub mod constants;
pub mod direction;
pub mod position;

// Re-export for convenience
pub use constants::*;
pub use direction::Direction;
pub use position::Position;
