// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered collections of dancers.
//!
//! Membership is by identity. Set operations keep the order in which
//! dancers first appear, so results are deterministic.

use crate::dancer::Dancer;
use crate::geometry::Position;
use std::fmt;
use std::ops::Deref;

/// An ordered sequence of dancers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dancers(Vec<Dancer>);

impl Dancers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        self.0.iter().any(|d| d == dancer)
    }

    /// Append a dancer unless it is already present.
    ///
    /// Returns true if the dancer was added.
    pub fn insert(&mut self, dancer: Dancer) -> bool {
        if self.has_dancer(&dancer) {
            return false;
        }
        self.0.push(dancer);
        true
    }

    /// Dancers present in any of the collections, without duplicates.
    pub fn union<'a, I>(collections: I) -> Dancers
    where
        I: IntoIterator<Item = &'a Dancers>,
    {
        let mut result = Dancers::new();
        for collection in collections {
            for d in collection.iter() {
                result.insert(d.clone());
            }
        }
        result
    }

    /// Dancers present in every one of the collections.
    pub fn intersection(collections: &[&Dancers]) -> Dancers {
        let Some((first, rest)) = collections.split_first() else {
            return Dancers::new();
        };
        let mut result = Dancers::new();
        for d in first.iter() {
            if rest.iter().all(|other| other.has_dancer(d)) {
                result.insert(d.clone());
            }
        }
        result
    }

    /// Dancers in `self` that are not in `minus`.
    pub fn difference(&self, minus: &Dancers) -> Dancers {
        self.0
            .iter()
            .filter(|d| !minus.has_dancer(d))
            .cloned()
            .collect()
    }

    /// True if both collections hold the same dancers, in any order.
    pub fn same_members(&self, other: &Dancers) -> bool {
        self.len() == other.len() && self.iter().all(|d| other.has_dancer(d))
    }

    /// Sort by ordinal.
    pub fn ordered(mut self) -> Dancers {
        self.0.sort_by_key(Dancer::ordinal);
        self
    }

    pub fn positions(&self) -> Vec<Position> {
        self.0.iter().map(Dancer::position).collect()
    }

    /// Centroid of the dancers' positions.
    pub fn center(&self) -> Position {
        Position::center(&self.positions())
    }

    /// Move every dancer so that their centroid is the origin.
    pub fn recenter(&self) {
        let center = self.center();
        let delta = Position::ORIGIN - center;
        for d in self.0.iter() {
            d.move_by(delta);
        }
    }

    pub fn into_vec(self) -> Vec<Dancer> {
        self.0
    }
}

impl Deref for Dancers {
    type Target = [Dancer];

    fn deref(&self) -> &[Dancer] {
        &self.0
    }
}

impl From<Vec<Dancer>> for Dancers {
    /// Duplicate handles are dropped, keeping the first occurrence.
    fn from(dancers: Vec<Dancer>) -> Self {
        dancers.into_iter().collect()
    }
}

impl FromIterator<Dancer> for Dancers {
    fn from_iter<T: IntoIterator<Item = Dancer>>(iter: T) -> Self {
        let mut result = Dancers::new();
        for d in iter {
            result.insert(d);
        }
        result
    }
}

impl IntoIterator for Dancers {
    type Item = Dancer;
    type IntoIter = std::vec::IntoIter<Dancer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dancers {
    type Item = &'a Dancer;
    type IntoIter = std::slice::Iter<'a, Dancer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Dancers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dancer::Set;

    fn slice(dancers: &Dancers, from: usize, to: usize) -> Dancers {
        dancers[from..to].iter().cloned().collect()
    }

    #[test]
    fn test_union() {
        let set = Set::squared(4);
        let a = slice(set.dancers(), 1, 4);
        let b = slice(set.dancers(), 2, 6);
        let got = Dancers::union([&a, &b]).ordered();
        assert_eq!(got, slice(set.dancers(), 1, 6));
    }

    #[test]
    fn test_intersection() {
        let set = Set::squared(4);
        let a = slice(set.dancers(), 1, 4);
        let b = slice(set.dancers(), 2, 6);
        let got = Dancers::intersection(&[&a, &b]).ordered();
        assert_eq!(got, slice(set.dancers(), 2, 4));
        assert!(Dancers::intersection(&[]).is_empty());
    }

    #[test]
    fn test_difference() {
        let set = Set::squared(4);
        let a = slice(set.dancers(), 1, 4);
        let b = slice(set.dancers(), 3, 6);
        assert_eq!(a.difference(&b), slice(set.dancers(), 1, 3));
    }

    #[test]
    fn test_no_duplicates() {
        let set = Set::squared(2);
        let d = set.dancers()[0].clone();
        let dancers: Dancers = vec![d.clone(), d.clone(), set.dancers()[1].clone()].into();
        assert_eq!(dancers.len(), 2);
        assert!(dancers.has_dancer(&d));
    }

    #[test]
    fn test_recenter() {
        let set = Set::neutral(2);
        set.dancers()[0].move_by(Position::new(2.0, 1.0));
        set.dancers()[1].move_by(Position::new(4.0, 1.0));
        set.dancers().recenter();
        assert_eq!(set.dancers().center(), Position::ORIGIN);
        assert_eq!(set.dancers()[0].position(), Position::new(-1.0, 0.0));
    }
}
