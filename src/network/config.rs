// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runtime configuration of a [`FormationFinder`](crate::network::FormationFinder).

use crate::dancer::Dancer;
use crate::predicates::{near_tolerance, near_within};

/// Settings shared by every rule of one finder.
///
/// The proximity tolerance applies to the side-by-side two dancer
/// formations (Couple and MiniWave). Formations in a line (FaceToFace,
/// BackToBack, Tandem) are recognised at any distance, so that couples
/// facing each other across a squared set are found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderConfig {
    near_tolerance: Option<f64>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            near_tolerance: Some(near_tolerance()),
        }
    }
}

impl FinderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// No proximity test at all: dancers anywhere on the same line relate.
    pub fn unrestricted() -> Self {
        Self {
            near_tolerance: None,
        }
    }

    pub fn with_near_tolerance(mut self, tolerance: f64) -> Self {
        self.near_tolerance = Some(tolerance);
        self
    }

    pub fn near_tolerance(&self) -> Option<f64> {
        self.near_tolerance
    }

    /// True if the dancers are close enough for a side-by-side formation.
    pub fn near(&self, dancer1: &Dancer, dancer2: &Dancer) -> bool {
        match self.near_tolerance {
            Some(tolerance) => near_within(dancer1, dancer2, tolerance),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Direction, Position};

    #[test]
    fn test_tolerances() {
        let a = Dancer::new(0, Position::ORIGIN, Direction::ZERO);
        let b = Dancer::new(1, Position::new(0.0, 3.0), Direction::ZERO);
        assert!(!FinderConfig::default().near(&a, &b));
        assert!(FinderConfig::unrestricted().near(&a, &b));
        assert!(FinderConfig::new().with_near_tolerance(3.0).near(&a, &b));
        assert_eq!(FinderConfig::unrestricted().near_tolerance(), None);
    }
}
