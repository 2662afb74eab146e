// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Facts: what flows through the rule network.

use crate::dancer::{Dancer, Dancers};
use crate::error::{FormationError, Result};
use crate::formation::{Formation, FormationKind};
use std::fmt;

/// An unordered combination of two distinct dancers.
///
/// The dancer with the lower ordinal is always `dancer1`, so every two
/// dancers make exactly one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    dancer1: Dancer,
    dancer2: Dancer,
}

impl Pair {
    /// Pair two dancers.
    ///
    /// Fails if both handles are the same dancer.
    pub fn new(a: Dancer, b: Dancer) -> Result<Self> {
        if a == b {
            return Err(FormationError::SelfPair {
                ordinal: a.ordinal(),
            });
        }
        if b.ordinal() < a.ordinal() {
            Ok(Self {
                dancer1: b,
                dancer2: a,
            })
        } else {
            Ok(Self {
                dancer1: a,
                dancer2: b,
            })
        }
    }

    /// Pair two dancers already known to be distinct, lower ordinal first.
    pub(crate) fn ordered(dancer1: Dancer, dancer2: Dancer) -> Self {
        debug_assert!(dancer1.ordinal() < dancer2.ordinal());
        Self { dancer1, dancer2 }
    }

    /// Every pair of the dancers, in order of first appearance.
    ///
    /// Fails if the same dancer appears twice.
    pub fn all(dancers: &[Dancer]) -> Result<Vec<Pair>> {
        let mut pairs = Vec::new();
        for (i, a) in dancers.iter().enumerate() {
            for b in &dancers[i + 1..] {
                pairs.push(Pair::new(a.clone(), b.clone())?);
            }
        }
        Ok(pairs)
    }

    pub fn dancer1(&self) -> &Dancer {
        &self.dancer1
    }

    pub fn dancer2(&self) -> &Dancer {
        &self.dancer2
    }

    pub fn dancers(&self) -> Dancers {
        vec![self.dancer1.clone(), self.dancer2.clone()].into()
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        &self.dancer1 == dancer || &self.dancer2 == dancer
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({}, {})", self.dancer1, self.dancer2)
    }
}

/// The type of a fact; each type has its own buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FactKind {
    Pair,
    Formation(FormationKind),
}

impl FactKind {
    pub const DANCER: FactKind = FactKind::Formation(FormationKind::Dancer);
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactKind::Pair => f.write_str("Pair"),
            FactKind::Formation(kind) => write!(f, "{}", kind),
        }
    }
}

/// A single asserted or derived fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    Pair(Pair),
    Formation(Formation),
}

impl Fact {
    pub fn formation(formation: impl Into<Formation>) -> Self {
        Fact::Formation(formation.into())
    }

    pub fn kind(&self) -> FactKind {
        match self {
            Fact::Pair(_) => FactKind::Pair,
            Fact::Formation(f) => FactKind::Formation(f.kind()),
        }
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Fact::Pair(pair) => Some(pair),
            Fact::Formation(_) => None,
        }
    }

    pub fn as_formation(&self) -> Option<&Formation> {
        match self {
            Fact::Formation(f) => Some(f),
            Fact::Pair(_) => None,
        }
    }

    pub fn dancers(&self) -> Dancers {
        match self {
            Fact::Pair(pair) => pair.dancers(),
            Fact::Formation(f) => f.dancers(),
        }
    }

    /// True if the facts are the same up to swapping the dancers of a
    /// relabeling-symmetric formation.
    pub fn same_up_to_relabeling(&self, other: &Fact) -> bool {
        match (self, other) {
            (Fact::Pair(a), Fact::Pair(b)) => a.dancers().same_members(&b.dancers()),
            (Fact::Formation(a), Fact::Formation(b)) => a.same_up_to_relabeling(b),
            _ => false,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fact::Pair(pair) => write!(f, "{}", pair),
            Fact::Formation(formation) => write!(f, "{}", formation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dancer::Set;

    #[test]
    fn test_pair_orders_by_ordinal() {
        let set = Set::squared(2);
        let (d0, d3) = (set.dancers()[0].clone(), set.dancers()[3].clone());
        let pair = Pair::new(d3.clone(), d0.clone()).expect("distinct dancers");
        assert_eq!(pair.dancer1(), &d0);
        assert_eq!(pair.dancer2(), &d3);
        assert!(pair.has_dancer(&d3));
    }

    #[test]
    fn test_self_pair_fails() {
        let set = Set::squared(1);
        let d = set.dancers()[1].clone();
        assert_eq!(
            Pair::new(d.clone(), d),
            Err(FormationError::SelfPair { ordinal: 1 })
        );
    }

    #[test]
    fn test_all_pairs() {
        let set = Set::squared(4);
        let pairs = Pair::all(set.dancers()).expect("distinct dancers");
        assert_eq!(pairs.len(), 8 * 7 / 2);
        assert!(pairs
            .iter()
            .all(|p| p.dancer1().ordinal() < p.dancer2().ordinal()));
    }

    #[test]
    fn test_all_pairs_rejects_repeated_dancer() {
        let set = Set::squared(2);
        let mut dancers = set.dancers().to_vec();
        dancers.push(dancers[2].clone());
        assert_eq!(
            Pair::all(&dancers),
            Err(FormationError::SelfPair { ordinal: 2 })
        );
    }

    #[test]
    fn test_fact_kinds() {
        let set = Set::squared(1);
        let d = set.dancers()[0].clone();
        assert_eq!(Fact::formation(d).kind(), FactKind::DANCER);
        let pair = Pair::new(set.dancers()[0].clone(), set.dancers()[1].clone())
            .expect("distinct dancers");
        let fact = Fact::Pair(pair);
        assert_eq!(fact.kind(), FactKind::Pair);
        assert_eq!(fact.to_string(), "Pair(Dancer_1Guy, Dancer_1Gal)");
    }
}
