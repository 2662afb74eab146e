// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Roles: named subsets of a formation's dancers.
//!
//! A *ubiquitous* role applies to any formation and picks dancers by their
//! own attributes: the couple they started in, or the way they face now.
//! A *formation-specific* role (Beaus, Leaders, Centers, ...) is defined
//! by the formation kind, usually as the union of the same role over its
//! sub-formations.
//!
//! Asking for a role a formation does not define is an error. An empty
//! result always means "defined, but nobody is in it".

use crate::dancer::{Dancer, Dancers};
use crate::error::{FormationError, Result};
use crate::formation::{Formation, FormationKind};
use crate::geometry::Direction;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Role {
    Beaus,
    Belles,
    Leaders,
    Trailers,
    Centers,
    Ends,
    /// Dancers who started in an odd numbered couple.
    ///
    /// Only dancers from a squared set carry a couple number; applying this
    /// to a formation with any other dancer is `RoleInapplicable`.
    OriginalHeads,
    /// Dancers who started in an even numbered couple. Needs couple numbers
    /// as for [`Role::OriginalHeads`].
    OriginalSides,
    /// Dancers facing up or down the hall.
    ///
    /// Reads only facing direction, so it applies to dancers from any set.
    /// Dancers on a diagonal are in neither this nor [`Role::CurrentSides`].
    CurrentHeads,
    /// Dancers facing across the hall. Applies to any formation, as for
    /// [`Role::CurrentHeads`].
    CurrentSides,
}

const COUPLE_ROLES: &[Role] = &[Role::Beaus, Role::Belles];
const TANDEM_ROLES: &[Role] = &[Role::Leaders, Role::Trailers];
const BOX_ROLES: &[Role] = &[Role::Beaus, Role::Belles, Role::Leaders, Role::Trailers];
const LINE_ROLES: &[Role] = &[Role::Beaus, Role::Belles, Role::Centers, Role::Ends];

/// The formation-specific roles a kind defines.
pub fn formation_roles(kind: FormationKind) -> &'static [Role] {
    match kind {
        FormationKind::Dancer => &[],
        FormationKind::Couple | FormationKind::MiniWave | FormationKind::Star => COUPLE_ROLES,
        FormationKind::FaceToFace | FormationKind::Tandem => TANDEM_ROLES,
        FormationKind::BackToBack => &[Role::Leaders],
        FormationKind::FacingCouples
        | FormationKind::TandemCouples
        | FormationKind::BackToBackCouples
        | FormationKind::BoxOfFour => BOX_ROLES,
        FormationKind::LineOfFour | FormationKind::WaveOfFour | FormationKind::TwoFacedLine => {
            LINE_ROLES
        }
    }
}

impl Role {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| FormationError::UnknownRole(name.to_string()))
    }

    pub fn all() -> impl Iterator<Item = Role> {
        Self::iter()
    }

    pub fn is_ubiquitous(self) -> bool {
        matches!(
            self,
            Role::OriginalHeads | Role::OriginalSides | Role::CurrentHeads | Role::CurrentSides
        )
    }

    /// True if the role can be applied to formations of this kind.
    pub fn defined_for(self, kind: FormationKind) -> bool {
        self.is_ubiquitous() || formation_roles(kind).contains(&self)
    }

    /// The dancers of `formation` that fill this role, in formation order.
    pub fn apply(self, formation: &Formation) -> Result<Dancers> {
        let inapplicable = || FormationError::RoleInapplicable {
            role: self,
            kind: formation.kind(),
        };
        match self {
            Role::OriginalHeads | Role::OriginalSides => {
                let want_odd = self == Role::OriginalHeads;
                let mut result = Dancers::new();
                for d in formation.dancers() {
                    let couple = d.couple_number().ok_or_else(inapplicable)?;
                    if (couple % 2 == 1) == want_odd {
                        result.insert(d);
                    }
                }
                Ok(result)
            }
            Role::CurrentHeads => Ok(facing(formation, &[Direction::ZERO, Direction::HALF])),
            Role::CurrentSides => Ok(facing(
                formation,
                &[Direction::QUARTER, Direction::quarters(3)],
            )),
            _ => specific(formation, self).ok_or_else(inapplicable),
        }
    }
}

fn facing(formation: &Formation, directions: &[Direction]) -> Dancers {
    formation
        .dancers()
        .into_iter()
        .filter(|d: &Dancer| directions.contains(&d.direction()))
        .collect()
}

fn specific(formation: &Formation, role: Role) -> Option<Dancers> {
    let dancers = match (formation, role) {
        (Formation::Couple(f), Role::Beaus) => f.beaus(),
        (Formation::Couple(f), Role::Belles) => f.belles(),
        (Formation::MiniWave(f), Role::Beaus) => f.beaus(),
        (Formation::MiniWave(f), Role::Belles) => f.belles(),
        (Formation::FaceToFace(f), Role::Leaders) => f.leaders(),
        (Formation::FaceToFace(f), Role::Trailers) => f.trailers(),
        (Formation::BackToBack(f), Role::Leaders) => f.leaders(),
        (Formation::Tandem(f), Role::Leaders) => f.leaders(),
        (Formation::Tandem(f), Role::Trailers) => f.trailers(),
        (Formation::FacingCouples(f), Role::Beaus) => f.beaus(),
        (Formation::FacingCouples(f), Role::Belles) => f.belles(),
        (Formation::FacingCouples(f), Role::Leaders) => f.leaders(),
        (Formation::FacingCouples(f), Role::Trailers) => f.trailers(),
        (Formation::TandemCouples(f), Role::Beaus) => f.beaus(),
        (Formation::TandemCouples(f), Role::Belles) => f.belles(),
        (Formation::TandemCouples(f), Role::Leaders) => f.leaders(),
        (Formation::TandemCouples(f), Role::Trailers) => f.trailers(),
        (Formation::BackToBackCouples(f), Role::Beaus) => f.beaus(),
        (Formation::BackToBackCouples(f), Role::Belles) => f.belles(),
        (Formation::BackToBackCouples(f), Role::Leaders) => f.leaders(),
        (Formation::BackToBackCouples(f), Role::Trailers) => f.trailers(),
        (Formation::BoxOfFour(f), Role::Beaus) => f.beaus(),
        (Formation::BoxOfFour(f), Role::Belles) => f.belles(),
        (Formation::BoxOfFour(f), Role::Leaders) => f.leaders(),
        (Formation::BoxOfFour(f), Role::Trailers) => f.trailers(),
        (Formation::Star(f), Role::Beaus) => f.beaus(),
        (Formation::Star(f), Role::Belles) => f.belles(),
        (Formation::LineOfFour(f), Role::Beaus) => f.beaus(),
        (Formation::LineOfFour(f), Role::Belles) => f.belles(),
        (Formation::LineOfFour(f), Role::Centers) => f.centers(),
        (Formation::LineOfFour(f), Role::Ends) => f.ends(),
        (Formation::WaveOfFour(f), Role::Beaus) => f.beaus(),
        (Formation::WaveOfFour(f), Role::Belles) => f.belles(),
        (Formation::WaveOfFour(f), Role::Centers) => f.centers(),
        (Formation::WaveOfFour(f), Role::Ends) => f.ends(),
        (Formation::TwoFacedLine(f), Role::Beaus) => f.beaus(),
        (Formation::TwoFacedLine(f), Role::Belles) => f.belles(),
        (Formation::TwoFacedLine(f), Role::Centers) => f.centers(),
        (Formation::TwoFacedLine(f), Role::Ends) => f.ends(),
        _ => return None,
    };
    Some(dancers)
}
