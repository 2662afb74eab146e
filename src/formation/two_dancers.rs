// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two dancer formations, the rules that recognise them from a [`Pair`],
//! and their samples.
//!
//! Every pair of dancers reaches these rules exactly once, with the lower
//! ordinal first. MiniWave, FaceToFace and BackToBack are symmetric in
//! their two dancers, so they test the pair once. Couple and Tandem give
//! the two dancers different roles and test both orientations.

use crate::dancer::{Dancer, Dancers, Gender};
use crate::formation::{FormationKind, Handedness};
use crate::geometry::{Direction, Position};
use crate::network::{Fact, FactKind, FinderConfig, Pair, Rule};
use crate::predicates::{behind, in_front_of, left_of, right_of, same_direction};
use std::fmt;

/// Two dancers side by side, facing the same way.
///
/// The belle stands on the beau's right. Since one dancer is to the right
/// of the other, the same two dancers can only form a couple one way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Couple {
    pub beau: Dancer,
    pub belle: Dancer,
}

impl Couple {
    pub fn new(beau: Dancer, belle: Dancer) -> Self {
        Self { beau, belle }
    }

    pub fn dancers(&self) -> Dancers {
        vec![self.beau.clone(), self.belle.clone()].into()
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        &self.beau == dancer || &self.belle == dancer
    }

    /// Guy on the left, Gal on the right.
    pub fn is_normal(&self) -> bool {
        self.beau.gender() == Gender::Guy && self.belle.gender() == Gender::Gal
    }

    /// Gal on the left, Guy on the right.
    pub fn is_sasheyed(&self) -> bool {
        self.beau.gender() == Gender::Gal && self.belle.gender() == Gender::Guy
    }

    pub fn is_same_gender(&self) -> bool {
        self.beau.gender().matches(self.belle.gender())
    }

    pub fn beaus(&self) -> Dancers {
        vec![self.beau.clone()].into()
    }

    pub fn belles(&self) -> Dancers {
        vec![self.belle.clone()].into()
    }

    /// Beau at `(0, -0.5)` and belle at `(0, 0.5)`, both facing down the hall.
    pub fn sample() -> Self {
        Self::new(
            sample_dancer(0, 0.0, -0.5, 0),
            sample_dancer(1, 0.0, 0.5, 0),
        )
    }
}

impl fmt::Display for Couple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Couple({}, {})", self.beau, self.belle)
    }
}

/// Two dancers side by side, facing opposite ways.
///
/// `dancer1` has the lower ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniWave {
    pub dancer1: Dancer,
    pub dancer2: Dancer,
    pub handedness: Handedness,
}

impl MiniWave {
    pub fn dancers(&self) -> Dancers {
        vec![self.dancer1.clone(), self.dancer2.clone()].into()
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        &self.dancer1 == dancer || &self.dancer2 == dancer
    }

    /// The midpoint between the two dancers.
    pub fn center(&self) -> Position {
        self.dancers().center()
    }

    /// Both dancers of a right handed mini-wave; nobody otherwise.
    pub fn beaus(&self) -> Dancers {
        match self.handedness {
            Handedness::RightHanded => self.dancers(),
            _ => Dancers::new(),
        }
    }

    /// Both dancers of a left handed mini-wave; nobody otherwise.
    pub fn belles(&self) -> Dancers {
        match self.handedness {
            Handedness::LeftHanded => self.dancers(),
            _ => Dancers::new(),
        }
    }

    /// A right handed mini-wave across the hall.
    pub fn sample() -> Self {
        Self {
            dancer1: sample_dancer(0, 0.0, -0.5, 0),
            dancer2: sample_dancer(1, 0.0, 0.5, 2),
            handedness: Handedness::RightHanded,
        }
    }
}

impl fmt::Display for MiniWave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MiniWave({}, {}, {})",
            self.dancer1, self.dancer2, self.handedness
        )
    }
}

/// Two dancers facing each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceToFace {
    pub dancer1: Dancer,
    pub dancer2: Dancer,
}

impl FaceToFace {
    pub fn dancers(&self) -> Dancers {
        vec![self.dancer1.clone(), self.dancer2.clone()].into()
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        &self.dancer1 == dancer || &self.dancer2 == dancer
    }

    /// True if this pair is exactly `a` and `b`, in either order.
    pub fn joins(&self, a: &Dancer, b: &Dancer) -> bool {
        self.has_dancer(a) && self.has_dancer(b) && a != b
    }

    pub fn leaders(&self) -> Dancers {
        Dancers::new()
    }

    pub fn trailers(&self) -> Dancers {
        self.dancers()
    }

    /// Two dancers one couple distance apart, facing each other down the hall.
    pub fn sample() -> Self {
        Self {
            dancer1: sample_dancer(0, 0.0, 0.0, 0),
            dancer2: sample_dancer(1, 1.0, 0.0, 2),
        }
    }
}

impl fmt::Display for FaceToFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FaceToFace({}, {})", self.dancer1, self.dancer2)
    }
}

/// Two dancers with their backs to each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackToBack {
    pub dancer1: Dancer,
    pub dancer2: Dancer,
}

impl BackToBack {
    pub fn dancers(&self) -> Dancers {
        vec![self.dancer1.clone(), self.dancer2.clone()].into()
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        &self.dancer1 == dancer || &self.dancer2 == dancer
    }

    /// True if this pair is exactly `a` and `b`, in either order.
    pub fn joins(&self, a: &Dancer, b: &Dancer) -> bool {
        self.has_dancer(a) && self.has_dancer(b) && a != b
    }

    pub fn leaders(&self) -> Dancers {
        self.dancers()
    }

    pub fn sample() -> Self {
        Self {
            dancer1: sample_dancer(0, 0.0, 0.0, 2),
            dancer2: sample_dancer(1, 1.0, 0.0, 0),
        }
    }
}

impl fmt::Display for BackToBack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BackToBack({}, {})", self.dancer1, self.dancer2)
    }
}

/// One dancer directly behind another, both facing the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tandem {
    pub leader: Dancer,
    pub trailer: Dancer,
}

impl Tandem {
    pub fn new(leader: Dancer, trailer: Dancer) -> Self {
        Self { leader, trailer }
    }

    pub fn dancers(&self) -> Dancers {
        vec![self.leader.clone(), self.trailer.clone()].into()
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        &self.leader == dancer || &self.trailer == dancer
    }

    pub fn leaders(&self) -> Dancers {
        vec![self.leader.clone()].into()
    }

    pub fn trailers(&self) -> Dancers {
        vec![self.trailer.clone()].into()
    }

    pub fn sample() -> Self {
        Self::new(
            sample_dancer(0, 1.0, 0.0, 0),
            sample_dancer(1, 0.0, 0.0, 0),
        )
    }
}

impl fmt::Display for Tandem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tandem({}, {})", self.leader, self.trailer)
    }
}

/// A gender neutral dancer for a sample, facing a whole number of quarter
/// turns right of down the hall.
pub(crate) fn sample_dancer(ordinal: usize, down: f64, left: f64, quarters: i64) -> Dancer {
    Dancer::new(
        ordinal,
        Position::new(down, left),
        Direction::quarters(quarters),
    )
}

pub(crate) const RULES: &[Rule] = &[
    Rule::new(
        "Couple",
        &[FactKind::Pair],
        FactKind::Formation(FormationKind::Couple),
        rule_couple,
    ),
    Rule::new(
        "MiniWave",
        &[FactKind::Pair],
        FactKind::Formation(FormationKind::MiniWave),
        rule_mini_wave,
    ),
    Rule::new(
        "FaceToFace",
        &[FactKind::Pair],
        FactKind::Formation(FormationKind::FaceToFace),
        rule_face_to_face,
    ),
    Rule::new(
        "BackToBack",
        &[FactKind::Pair],
        FactKind::Formation(FormationKind::BackToBack),
        rule_back_to_back,
    ),
    Rule::new(
        "Tandem",
        &[FactKind::Pair],
        FactKind::Formation(FormationKind::Tandem),
        rule_tandem,
    ),
];

fn single_pair<'a>(facts: &'a [&Fact]) -> Option<&'a Pair> {
    match facts {
        [fact] => fact.as_pair(),
        _ => None,
    }
}

fn rule_couple(config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let pair = single_pair(facts)?;
    let (d1, d2) = (pair.dancer1(), pair.dancer2());
    if !config.near(d1, d2) {
        return None;
    }
    [(d1, d2), (d2, d1)]
        .into_iter()
        .find(|(beau, belle)| right_of(beau, belle) && left_of(belle, beau))
        .map(|(beau, belle)| Fact::formation(Couple::new(beau.clone(), belle.clone())))
}

fn rule_mini_wave(config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let pair = single_pair(facts)?;
    let (d1, d2) = (pair.dancer1(), pair.dancer2());
    let handedness = if right_of(d1, d2) && right_of(d2, d1) {
        Handedness::RightHanded
    } else if left_of(d1, d2) && left_of(d2, d1) {
        Handedness::LeftHanded
    } else {
        return None;
    };
    if !config.near(d1, d2) {
        return None;
    }
    Some(Fact::formation(MiniWave {
        dancer1: d1.clone(),
        dancer2: d2.clone(),
        handedness,
    }))
}

fn rule_face_to_face(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let pair = single_pair(facts)?;
    let (d1, d2) = (pair.dancer1(), pair.dancer2());
    (in_front_of(d1, d2) && in_front_of(d2, d1)).then(|| {
        Fact::formation(FaceToFace {
            dancer1: d1.clone(),
            dancer2: d2.clone(),
        })
    })
}

fn rule_back_to_back(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let pair = single_pair(facts)?;
    let (d1, d2) = (pair.dancer1(), pair.dancer2());
    (behind(d1, d2) && behind(d2, d1)).then(|| {
        Fact::formation(BackToBack {
            dancer1: d1.clone(),
            dancer2: d2.clone(),
        })
    })
}

fn rule_tandem(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let pair = single_pair(facts)?;
    let (d1, d2) = (pair.dancer1(), pair.dancer2());
    if !same_direction(d1, d2) {
        return None;
    }
    [(d1, d2), (d2, d1)]
        .into_iter()
        .find(|(leader, trailer)| behind(leader, trailer) && in_front_of(trailer, leader))
        .map(|(leader, trailer)| Fact::formation(Tandem::new(leader.clone(), trailer.clone())))
}
