// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Formations: named geometric relations between dancers.
//!
//! A formation is either a *leaf*, holding dancers directly, or a
//! *composite* built from two or three sub-formations. Each composite kind
//! has a static [`Slot`] table naming its sub-formations in order. Some
//! slots are *redundant*: they are kept for role queries, but the dancers
//! they hold are already covered by the other slots, so they take no part
//! in [`Formation::dancers`] or [`Formation::has_dancer`].
//!
//! Formations are values. They are produced by a recognition pass and are
//! never changed afterwards.

pub mod four_dancers;
pub mod handedness;
pub mod two_dancers;

// Re-export for convenience
pub use four_dancers::{
    BackToBackCouples, BoxOfFour, FacingCouples, LineOfFour, Star, TandemCouples, TwoFacedLine,
    WaveOfFour,
};
pub use handedness::Handedness;
pub use two_dancers::{BackToBack, Couple, FaceToFace, MiniWave, Tandem};

use crate::dancer::{Dancer, Dancers};
use crate::error::{FormationError, Result};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

/// The tag of every supported formation type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum FormationKind {
    Dancer,
    Couple,
    MiniWave,
    FaceToFace,
    BackToBack,
    Tandem,
    FacingCouples,
    TandemCouples,
    BackToBackCouples,
    BoxOfFour,
    Star,
    LineOfFour,
    WaveOfFour,
    TwoFacedLine,
}

impl FormationKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look a kind up by its name, e.g. `"FaceToFace"`.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| FormationError::UnknownFormationType(name.to_string()))
    }

    /// Every kind, leaves first.
    pub fn all() -> impl Iterator<Item = FormationKind> {
        Self::iter()
    }

    /// The number of distinct dancers in any formation of this kind.
    pub fn dancer_count(self) -> usize {
        match self {
            FormationKind::Dancer => 1,
            FormationKind::Couple
            | FormationKind::MiniWave
            | FormationKind::FaceToFace
            | FormationKind::BackToBack
            | FormationKind::Tandem => 2,
            _ => 4,
        }
    }

    /// The sub-formation slots of a composite kind; empty for leaves.
    pub fn slots(self) -> &'static [Slot] {
        match self {
            FormationKind::FacingCouples => FacingCouples::SLOTS,
            FormationKind::TandemCouples => TandemCouples::SLOTS,
            FormationKind::BackToBackCouples => BackToBackCouples::SLOTS,
            FormationKind::BoxOfFour => BoxOfFour::SLOTS,
            FormationKind::Star => Star::SLOTS,
            FormationKind::LineOfFour => LineOfFour::SLOTS,
            FormationKind::WaveOfFour => WaveOfFour::SLOTS,
            FormationKind::TwoFacedLine => TwoFacedLine::SLOTS,
            _ => &[],
        }
    }

    pub fn is_leaf(self) -> bool {
        self.slots().is_empty()
    }

    /// True for two-dancer kinds where swapping the dancers gives the same
    /// formation.
    pub fn is_relabeling_symmetric(self) -> bool {
        matches!(
            self,
            FormationKind::MiniWave | FormationKind::FaceToFace | FormationKind::BackToBack
        )
    }
}

/// One named sub-formation of a composite formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    pub kind: FormationKind,
    /// Held for role queries only; its dancers are covered by other slots.
    pub redundant: bool,
}

impl Slot {
    pub const fn new(name: &'static str, kind: FormationKind) -> Self {
        Self {
            name,
            kind,
            redundant: false,
        }
    }

    pub const fn redundant(name: &'static str, kind: FormationKind) -> Self {
        Self {
            name,
            kind,
            redundant: true,
        }
    }
}

/// A recognised formation of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formation {
    Dancer(Dancer),
    Couple(Couple),
    MiniWave(MiniWave),
    FaceToFace(FaceToFace),
    BackToBack(BackToBack),
    Tandem(Tandem),
    FacingCouples(FacingCouples),
    TandemCouples(TandemCouples),
    BackToBackCouples(BackToBackCouples),
    BoxOfFour(BoxOfFour),
    Star(Star),
    LineOfFour(LineOfFour),
    WaveOfFour(WaveOfFour),
    TwoFacedLine(TwoFacedLine),
}

impl Formation {
    pub fn kind(&self) -> FormationKind {
        match self {
            Formation::Dancer(_) => FormationKind::Dancer,
            Formation::Couple(_) => FormationKind::Couple,
            Formation::MiniWave(_) => FormationKind::MiniWave,
            Formation::FaceToFace(_) => FormationKind::FaceToFace,
            Formation::BackToBack(_) => FormationKind::BackToBack,
            Formation::Tandem(_) => FormationKind::Tandem,
            Formation::FacingCouples(_) => FormationKind::FacingCouples,
            Formation::TandemCouples(_) => FormationKind::TandemCouples,
            Formation::BackToBackCouples(_) => FormationKind::BackToBackCouples,
            Formation::BoxOfFour(_) => FormationKind::BoxOfFour,
            Formation::Star(_) => FormationKind::Star,
            Formation::LineOfFour(_) => FormationKind::LineOfFour,
            Formation::WaveOfFour(_) => FormationKind::WaveOfFour,
            Formation::TwoFacedLine(_) => FormationKind::TwoFacedLine,
        }
    }

    pub fn dancer_count(&self) -> usize {
        self.kind().dancer_count()
    }

    /// Sub-formations in slot order; empty for leaves.
    pub fn parts(&self) -> Vec<Formation> {
        match self {
            Formation::FacingCouples(f) => f.parts(),
            Formation::TandemCouples(f) => f.parts(),
            Formation::BackToBackCouples(f) => f.parts(),
            Formation::BoxOfFour(f) => f.parts(),
            Formation::Star(f) => f.parts(),
            Formation::LineOfFour(f) => f.parts(),
            Formation::WaveOfFour(f) => f.parts(),
            Formation::TwoFacedLine(f) => f.parts(),
            _ => Vec::new(),
        }
    }

    /// Sub-formations whose slots are not redundant.
    fn contributing_parts(&self) -> impl Iterator<Item = Formation> {
        self.parts()
            .into_iter()
            .zip(self.kind().slots())
            .filter(|(_, slot)| !slot.redundant)
            .map(|(part, _)| part)
    }

    /// The dancers of the formation, each exactly once.
    pub fn dancers(&self) -> Dancers {
        match self {
            Formation::Dancer(d) => vec![d.clone()].into(),
            Formation::Couple(f) => f.dancers(),
            Formation::MiniWave(f) => f.dancers(),
            Formation::FaceToFace(f) => f.dancers(),
            Formation::BackToBack(f) => f.dancers(),
            Formation::Tandem(f) => f.dancers(),
            _ => {
                let contributing: Vec<Dancers> =
                    self.contributing_parts().map(|part| part.dancers()).collect();
                Dancers::union(&contributing)
            }
        }
    }

    pub fn has_dancer(&self, dancer: &Dancer) -> bool {
        match self {
            Formation::Dancer(d) => d == dancer,
            Formation::Couple(f) => f.has_dancer(dancer),
            Formation::MiniWave(f) => f.has_dancer(dancer),
            Formation::FaceToFace(f) => f.has_dancer(dancer),
            Formation::BackToBack(f) => f.has_dancer(dancer),
            Formation::Tandem(f) => f.has_dancer(dancer),
            _ => self.contributing_parts().any(|part| part.has_dancer(dancer)),
        }
    }

    /// Move the formation's dancers so that their centroid is the origin.
    pub fn centred(self) -> Self {
        self.dancers().recenter();
        self
    }

    /// Handedness, for the kinds built from mini-waves.
    pub fn handedness(&self) -> Handedness {
        match self {
            Formation::MiniWave(f) => f.handedness,
            Formation::BoxOfFour(f) => f.handedness(),
            Formation::Star(f) => f.handedness(),
            Formation::WaveOfFour(f) => f.handedness(),
            Formation::TwoFacedLine(f) => f.handedness(),
            _ => Handedness::NoHanded,
        }
    }

    /// True if both formations are the same kind, hold the same dancers in
    /// any order, and agree on handedness.
    pub fn same_up_to_relabeling(&self, other: &Formation) -> bool {
        self.kind() == other.kind()
            && self.handedness() == other.handedness()
            && self.dancers().same_members(&other.dancers())
    }

    pub fn as_dancer(&self) -> Option<&Dancer> {
        match self {
            Formation::Dancer(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_couple(&self) -> Option<&Couple> {
        match self {
            Formation::Couple(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_mini_wave(&self) -> Option<&MiniWave> {
        match self {
            Formation::MiniWave(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_face_to_face(&self) -> Option<&FaceToFace> {
        match self {
            Formation::FaceToFace(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_back_to_back(&self) -> Option<&BackToBack> {
        match self {
            Formation::BackToBack(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_tandem(&self) -> Option<&Tandem> {
        match self {
            Formation::Tandem(f) => Some(f),
            _ => None,
        }
    }
}

macro_rules! formation_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Formation {
                fn from(f: $variant) -> Self {
                    Formation::$variant(f)
                }
            }
        )*
    };
}

formation_from!(
    Dancer,
    Couple,
    MiniWave,
    FaceToFace,
    BackToBack,
    Tandem,
    FacingCouples,
    TandemCouples,
    BackToBackCouples,
    BoxOfFour,
    Star,
    LineOfFour,
    WaveOfFour,
    TwoFacedLine,
);

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formation::Couple(inner) => write!(f, "{}", inner),
            Formation::MiniWave(inner) => write!(f, "{}", inner),
            Formation::FaceToFace(inner) => write!(f, "{}", inner),
            Formation::BackToBack(inner) => write!(f, "{}", inner),
            Formation::Tandem(inner) => write!(f, "{}", inner),
            _ => {
                write!(f, "{}", self.kind())?;
                if self.handedness() != Handedness::NoHanded {
                    write!(f, "[{}]", self.handedness())?;
                }
                write!(f, "({})", self.dancers())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_names_round_trip() {
        for kind in FormationKind::all() {
            assert_eq!(FormationKind::from_name(kind.name()), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(FormationKind::all().count(), FormationKind::COUNT);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            FormationKind::from_name("Squared"),
            Err(FormationError::UnknownFormationType("Squared".to_string()))
        );
    }

    #[test]
    fn test_slot_tables() {
        for kind in FormationKind::all() {
            let slots = kind.slots();
            if kind.dancer_count() == 4 {
                assert!((2..=4).contains(&slots.len()), "{kind}");
                assert!(slots.iter().all(|s| s.kind.is_leaf()), "{kind}");
                let contributed: usize = slots
                    .iter()
                    .filter(|s| !s.redundant)
                    .map(|s| s.kind.dancer_count())
                    .sum();
                // Non-redundant slots never share dancers.
                assert_eq!(contributed, kind.dancer_count(), "{kind}");
            } else {
                assert!(kind.is_leaf(), "{kind}");
            }
        }
    }

    #[test]
    fn test_dancer_formation() {
        let d = Dancer::new(0, Default::default(), Default::default());
        let f = Formation::from(d.clone());
        assert_eq!(f.kind(), FormationKind::Dancer);
        assert_eq!(f.dancer_count(), 1);
        assert!(f.has_dancer(&d));
        assert_eq!(f.as_dancer(), Some(&d));
        assert!(f.parts().is_empty());
        assert_eq!(f.to_string(), "Dancer(Dancer_0)");
    }
}
