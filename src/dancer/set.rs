// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A set of dancers: the dancers plus the point they dance around.

use crate::dancer::{Dancer, Dancers, Gender};
use crate::geometry::{Direction, Position, COUPLE_DISTANCE};

/// An ordered collection of dancers with a known center.
#[derive(Debug, Clone)]
pub struct Set {
    flagpole_center: Position,
    dancers: Dancers,
}

impl Set {
    /// A set made of the given dancers, centered on their centroid.
    pub fn from_dancers(dancers: Dancers) -> Self {
        Self {
            flagpole_center: dancers.center(),
            dancers,
        }
    }

    /// A squared set with the specified number of couples.
    ///
    /// Couple 1 stands at the head of the hall facing down it; the other
    /// couples follow counter-clockwise, evenly spaced around the flagpole
    /// center and all facing in. In every couple the Guy stands to the
    /// left of the Gal. The Guy of couple `n` has ordinal `2 * (n - 1)`
    /// and the Gal the next ordinal.
    ///
    /// # Panics
    ///
    /// Panics if `couples` is zero.
    pub fn squared(couples: u32) -> Self {
        assert!(couples > 0, "a squared set needs at least one couple");
        let flagpole_center = Position::ORIGIN;
        let step = Direction::circle_fraction(couples);
        let mut dancers = Dancers::new();
        for couple in 0..couples {
            let facing = -step.multiply_by(couple);
            let couple_center =
                flagpole_center + Position::polar(facing.opposite(), 1.5 * COUPLE_DISTANCE);
            for (gender, side) in [
                (Gender::Guy, facing.quarter_left()),
                (Gender::Gal, facing.quarter_right()),
            ] {
                let ordinal = 2 * couple as usize + usize::from(gender == Gender::Gal);
                dancers.insert(Dancer::with_identity(
                    ordinal,
                    gender,
                    Some(couple + 1),
                    couple_center + Position::polar(side, COUPLE_DISTANCE / 2.0),
                    facing,
                ));
            }
        }
        Self {
            flagpole_center,
            dancers,
        }
    }

    /// `count` gender neutral dancers, all at the origin facing down the hall.
    pub fn neutral(count: usize) -> Self {
        let dancers = (0..count)
            .map(|ordinal| Dancer::new(ordinal, Position::ORIGIN, Direction::ZERO))
            .collect();
        Self {
            flagpole_center: Position::ORIGIN,
            dancers,
        }
    }

    pub fn flagpole_center(&self) -> Position {
        self.flagpole_center
    }

    pub fn dancers(&self) -> &Dancers {
        &self.dancers
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        self.dancers.has_dancer(dancer)
    }

    /// The Gal of the same couple as a Guy, or the Guy of a Gal.
    pub fn original_partner(&self, dancer: &Dancer) -> Option<&Dancer> {
        let couple = dancer.couple_number()?;
        self.dancers.iter().find(|d| {
            d != &dancer
                && d.couple_number() == Some(couple)
                && d.gender() == dancer.gender().opposite()
        })
    }
}
