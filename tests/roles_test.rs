// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::find_all;
use squaredance::dancer::{Dancers, Set};
use squaredance::error::FormationError;
use squaredance::formation::FormationKind;
use squaredance::registry::Registry;
use squaredance::roles::Role;

fn complementary(registry: &Registry, first: Role, second: Role) {
    for kind in registry.kinds() {
        let roles = registry.roles(kind);
        if !(roles.contains(&first) && roles.contains(&second)) {
            continue;
        }
        let sample = registry.sample(kind).unwrap();
        let a = first.apply(&sample).unwrap();
        let b = second.apply(&sample).unwrap();
        let union = Dancers::union([&a, &b]);
        assert!(union.same_members(&sample.dancers()), "{kind}: {first} ∪ {second}");
        assert!(
            Dancers::intersection(&[&a, &b]).is_empty(),
            "{kind}: {first} ∩ {second}"
        );
    }
}

#[test]
fn test_beaus_and_belles_partition_dancers() {
    complementary(&Registry::new(), Role::Beaus, Role::Belles);
}

#[test]
fn test_leaders_and_trailers_partition_dancers() {
    complementary(&Registry::new(), Role::Leaders, Role::Trailers);
}

#[test]
fn test_centers_and_ends_partition_dancers() {
    let registry = Registry::new();
    complementary(&registry, Role::Centers, Role::Ends);
    for kind in [
        FormationKind::LineOfFour,
        FormationKind::WaveOfFour,
        FormationKind::TwoFacedLine,
    ] {
        let sample = registry.sample(kind).unwrap();
        assert_eq!(Role::Centers.apply(&sample).unwrap().len(), 2, "{kind}");
    }
}

#[test]
fn test_undefined_roles_are_errors() {
    let registry = Registry::new();
    for kind in registry.kinds() {
        let sample = registry.sample(kind).unwrap();
        for role in Role::all().filter(|r| !r.is_ubiquitous()) {
            if registry.roles(kind).contains(&role) {
                continue;
            }
            assert_eq!(
                role.apply(&sample),
                Err(FormationError::RoleInapplicable { role, kind }),
                "{role} on {kind}"
            );
        }
    }
}

#[test]
fn test_ubiquitous_roles_in_squared_set() {
    let registry = Registry::new();
    let set = Set::squared(4);
    let finder = find_all(&registry, set.dancers());
    for facing in finder.formations(FormationKind::FacingCouples) {
        let heads = Role::OriginalHeads.apply(facing).unwrap();
        let sides = Role::OriginalSides.apply(facing).unwrap();
        // Heads face heads and sides face sides.
        assert!(heads.len() == 4 || sides.len() == 4);
        assert_eq!(heads.len() + sides.len(), 4);
        assert_eq!(
            Role::CurrentHeads.apply(facing).unwrap().len(),
            heads.len()
        );
        assert_eq!(
            Role::CurrentSides.apply(facing).unwrap().len(),
            sides.len()
        );
    }
}

#[test]
fn test_role_names_round_trip() {
    for role in Role::all() {
        assert_eq!(Role::from_name(role.name()), Ok(role));
    }
    assert!(matches!(
        Role::from_name("Captains"),
        Err(FormationError::UnknownRole(_))
    ));
}
