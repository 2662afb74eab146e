// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use squaredance::dancer::Dancer;
use squaredance::formation::{Formation, FormationKind};
use squaredance::geometry::{Direction, Position};
use squaredance::network::FormationFinder;
use squaredance::registry::Registry;
use std::collections::BTreeMap;

/// A gender neutral dancer facing `quarters` quarter turns right of down
/// the hall.
pub fn dancer(ordinal: usize, down: f64, left: f64, quarters: i64) -> Dancer {
    Dancer::new(
        ordinal,
        Position::new(down, left),
        Direction::quarters(quarters),
    )
}

/// Run a fresh finder over `dancers`.
pub fn find_all(registry: &Registry, dancers: &[Dancer]) -> FormationFinder {
    let mut finder = registry.finder();
    finder
        .ingest(dancers)
        .expect("dancers are distinct and the finder is fresh");
    finder
}

/// How many formations of each kind (including zeros) the finder holds.
pub fn counts(finder: &FormationFinder) -> BTreeMap<FormationKind, usize> {
    FormationKind::all()
        .map(|kind| (kind, finder.count(kind)))
        .collect()
}

/// A label-free description of a formation: its kind, handedness and the
/// sorted poses of its dancers.
pub fn shape(formation: &Formation) -> String {
    let mut poses: Vec<String> = formation
        .dancers()
        .iter()
        .map(|d| format!("{}/{}", d.position(), d.direction().ticks()))
        .collect();
    poses.sort();
    format!(
        "{}[{}]{}",
        formation.kind(),
        formation.handedness(),
        poses.join(";")
    )
}

/// Every formation the finder holds, described without labels, sorted.
pub fn shapes(finder: &FormationFinder) -> Vec<String> {
    let mut all: Vec<String> = FormationKind::all()
        .flat_map(|kind| finder.formations(kind).map(shape).collect::<Vec<_>>())
        .collect();
    all.sort();
    all
}

/// The same poses as `dancers`, as new dancers whose ordinals are given by
/// `ordinals`.
pub fn relabel(dancers: &[Dancer], ordinals: &[usize]) -> Vec<Dancer> {
    dancers
        .iter()
        .zip(ordinals)
        .map(|(d, &ordinal)| Dancer::new(ordinal, d.position(), d.direction()))
        .collect()
}
