// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Properties of recognition over random arrangements on a small grid.
//!
//! Dancers stand on distinct points of a 4x4 unit grid, each facing one of
//! the four walls, so every relation the rules test can occur.

mod common;

use common::{counts, dancer, find_all, relabel, shape, shapes};
use proptest::prelude::*;
use squaredance::dancer::Dancer;
use squaredance::formation::{Formation, FormationKind};
use squaredance::registry::Registry;
use std::collections::HashSet;

const GRID: usize = 4;
const MAX_DANCERS: usize = 6;

/// Dancers on distinct grid cells, plus a shuffled relabeling of them.
fn arrangement() -> impl Strategy<Value = (Vec<Dancer>, Vec<usize>)> {
    (
        proptest::sample::subsequence((0..GRID * GRID).collect::<Vec<_>>(), 2..=MAX_DANCERS),
        proptest::collection::vec(0i64..4, MAX_DANCERS),
        Just((0..MAX_DANCERS).collect::<Vec<usize>>()).prop_shuffle(),
    )
        .prop_map(|(cells, quarters, shuffled)| {
            let dancers: Vec<Dancer> = cells
                .iter()
                .zip(&quarters)
                .enumerate()
                .map(|(ordinal, (cell, q))| {
                    dancer(ordinal, (cell / GRID) as f64, (cell % GRID) as f64, *q)
                })
                .collect();
            let ordinals = shuffled.into_iter().filter(|o| *o < dancers.len()).collect();
            (dancers, ordinals)
        })
}

fn all_formations(finder: &squaredance::FormationFinder) -> Vec<Formation> {
    FormationKind::all()
        .flat_map(|kind| finder.formations(kind).cloned().collect::<Vec<_>>())
        .collect()
}

proptest! {
    /// Property: recognising the same poses twice gives the same result
    #[test]
    fn prop_recognition_is_deterministic((dancers, _) in arrangement()) {
        let registry = Registry::new();
        let first = find_all(&registry, &dancers);
        let second = find_all(&registry, &dancers);
        let render = |f: &Formation| f.to_string();
        prop_assert_eq!(
            all_formations(&first).iter().map(render).collect::<Vec<_>>(),
            all_formations(&second).iter().map(render).collect::<Vec<_>>()
        );
    }

    /// Property: every formation is made of the right number of input dancers
    #[test]
    fn prop_formations_hold_input_dancers((dancers, _) in arrangement()) {
        let registry = Registry::new();
        let finder = find_all(&registry, &dancers);
        for formation in all_formations(&finder) {
            let members = formation.dancers();
            prop_assert_eq!(members.len(), formation.kind().dancer_count());
            for d in members.iter() {
                prop_assert!(dancers.contains(d));
                prop_assert!(formation.has_dancer(d));
            }
            for part in formation.parts() {
                for d in part.dancers().iter() {
                    prop_assert!(formation.has_dancer(d), "{} not in {}", d, formation);
                }
            }
        }
    }

    /// Property: what is found does not depend on how dancers are numbered
    #[test]
    fn prop_relabeling_invariance((dancers, ordinals) in arrangement()) {
        let registry = Registry::new();
        let original = find_all(&registry, &dancers);
        let relabeled = find_all(&registry, &relabel(&dancers, &ordinals));
        prop_assert_eq!(counts(&original), counts(&relabeled));
        prop_assert_eq!(shapes(&original), shapes(&relabeled));
    }

    /// Property: no physical formation is reported twice
    #[test]
    fn prop_no_duplicate_formations((dancers, _) in arrangement()) {
        let registry = Registry::new();
        let finder = find_all(&registry, &dancers);
        let mut seen = HashSet::new();
        for formation in all_formations(&finder) {
            let described = shape(&formation);
            prop_assert!(seen.insert(described.clone()), "{} twice", described);
        }
    }
}
