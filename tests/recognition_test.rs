// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{counts, dancer, find_all, relabel};
use squaredance::dancer::Set;
use squaredance::formation::{FormationKind, Handedness};
use squaredance::geometry::Direction;
use squaredance::network::{Counters, FinderConfig};
use squaredance::registry::Registry;
use squaredance::validate::check_sample;

#[test]
fn test_every_sample_is_found_exactly_once() {
    let registry = Registry::new();
    for kind in registry.kinds() {
        let sample = registry.sample(kind).unwrap();
        let found = registry.find_formations(&sample.dancers(), kind).unwrap();
        assert_eq!(found.len(), 1, "{kind}: {found:?}");
        assert!(found[0].dancers().same_members(&sample.dancers()), "{kind}");
        assert!(check_sample(&registry, kind).is_ok(), "{kind}");
    }
}

#[test]
fn test_found_sample_equals_sample() {
    // The found instance has the same parts in the same slots.
    let registry = Registry::new();
    for kind in registry.kinds() {
        let sample = registry.sample(kind).unwrap();
        let found = registry.find_formations(&sample.dancers(), kind).unwrap();
        assert_eq!(found, vec![sample], "{kind}");
    }
}

/// Every ordering of `items`.
fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            result.push(tail);
        }
    }
    result
}

#[test]
fn test_every_sample_found_once_under_every_labeling() {
    let registry = Registry::new();
    for kind in registry.kinds() {
        let sample = registry.sample(kind).unwrap();
        let dancers = sample.dancers();
        let ordinals: Vec<usize> = dancers.iter().map(|d| d.ordinal()).collect();
        for labeling in permutations(&ordinals) {
            let relabeled = relabel(&dancers, &labeling);
            let found = registry.find_formations(&relabeled, kind).unwrap();
            assert_eq!(found.len(), 1, "{kind} labeled {labeling:?}: {found:?}");
        }
    }
}

#[test]
fn test_facing_couples_in_two_couple_square() {
    let registry = Registry::new();
    let set = Set::squared(2);
    let finder = find_all(&registry, set.dancers());
    let counts = counts(&finder);
    assert_eq!(counts[&FormationKind::FaceToFace], 2);
    assert_eq!(counts[&FormationKind::Couple], 2);
    assert_eq!(counts[&FormationKind::FacingCouples], 1);
    assert_eq!(counts[&FormationKind::MiniWave], 0);

    let f2f: Vec<_> = finder.formations(FormationKind::FaceToFace).collect();
    for d in f2f[0].dancers().iter() {
        assert!(!f2f[1].has_dancer(d));
    }
}

#[test]
fn test_squared_set_of_four_couples() {
    let registry = Registry::new();
    let set = Set::squared(4);
    let finder = find_all(&registry, set.dancers());
    let counts = counts(&finder);
    assert_eq!(counts[&FormationKind::Dancer], 8);
    assert_eq!(finder.pairs().count(), 28);
    assert_eq!(counts[&FormationKind::Couple], 4);
    assert_eq!(counts[&FormationKind::FaceToFace], 4);
    assert_eq!(counts[&FormationKind::FacingCouples], 2);
    assert_eq!(counts[&FormationKind::Tandem], 0);
    assert_eq!(counts[&FormationKind::LineOfFour], 0);
    for couple in finder.formations(FormationKind::Couple) {
        let couple = couple.as_couple().unwrap();
        assert!(couple.is_normal());
    }
}

#[test]
fn test_side_by_side_same_way_is_a_couple() {
    let registry = Registry::new();
    let a = dancer(0, 0.0, 0.0, 0);
    let b = dancer(1, 0.0, 1.0, 0);
    let finder = find_all(&registry, &[a.clone(), b.clone()]);
    let couples: Vec<_> = finder.formations(FormationKind::Couple).collect();
    assert_eq!(couples.len(), 1);
    let couple = couples[0].as_couple().unwrap();
    assert_eq!(couple.beau, a);
    assert_eq!(couple.belle, b);
    assert_eq!(finder.count(FormationKind::MiniWave), 0);
    assert_eq!(finder.count(FormationKind::Tandem), 0);
}

#[test]
fn test_side_by_side_opposite_ways_is_a_mini_wave() {
    let registry = Registry::new();
    let a = dancer(0, 0.0, 0.0, 0);
    let b = dancer(1, 0.0, 1.0, 2);
    let finder = find_all(&registry, &[a, b]);
    let waves: Vec<_> = finder.formations(FormationKind::MiniWave).collect();
    assert_eq!(waves.len(), 1);
    assert_eq!(waves[0].handedness(), Handedness::RightHanded);
    assert_eq!(finder.count(FormationKind::Couple), 0);
}

#[test]
fn test_turning_away_breaks_face_to_face() {
    let registry = Registry::new();
    let a = dancer(0, 0.0, 0.0, 0);
    let b = dancer(1, 1.0, 0.0, 2);
    let dancers = [a.clone(), b.clone()];
    assert_eq!(
        registry
            .find_formations(&dancers, FormationKind::FaceToFace)
            .unwrap()
            .len(),
        1
    );

    a.rotate(Direction::QUARTER);
    assert!(registry
        .find_formations(&dancers, FormationKind::FaceToFace)
        .unwrap()
        .is_empty());

    a.rotate(-Direction::QUARTER);
    b.rotate(Direction::QUARTER);
    assert!(registry
        .find_formations(&dancers, FormationKind::FaceToFace)
        .unwrap()
        .is_empty());
}

#[test]
fn test_far_apart_side_by_side_needs_unrestricted_config() {
    let registry = Registry::new();
    let dancers = [dancer(0, 0.0, 0.0, 0), dancer(1, 0.0, 2.0, 0)];
    assert!(registry
        .find_formations(&dancers, FormationKind::Couple)
        .unwrap()
        .is_empty());

    let mut finder = registry.finder_with_config(FinderConfig::unrestricted());
    finder.ingest(&dancers).unwrap();
    assert_eq!(finder.count(FormationKind::Couple), 1);
}

#[test]
fn test_finder_reuse_after_clear() {
    let registry = Registry::new();
    let mut finder = registry.finder();
    let set = Set::squared(2);
    finder.ingest(set.dancers()).unwrap();
    assert_eq!(finder.count(FormationKind::FacingCouples), 1);

    // A quarter right face turns each couple into a tandem.
    for d in set.dancers().iter() {
        d.rotate(Direction::QUARTER);
    }
    finder.clear();
    finder.ingest(set.dancers()).unwrap();
    assert_eq!(finder.count(FormationKind::FacingCouples), 0);
    assert_eq!(finder.count(FormationKind::Tandem), 2);
    assert_eq!(finder.statistics().get(Counters::Clears), 1);
    assert_eq!(finder.statistics().get(Counters::DancersAsserted), 8);
}
