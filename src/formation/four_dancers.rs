// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Four dancer formations, built from two dancer formations.
//!
//! Each rule takes already recognised sub-formations, checks how they are
//! linked by shared dancers, and emits the composite. The sub-formations
//! reach a rule in every order, so each rule also carries an ordering
//! guard on one *anchor* dancer per sub-formation. The guard admits
//! exactly one of the orders that describe the same four dancers.

use crate::dancer::Dancers;
use crate::formation::two_dancers::sample_dancer;
use crate::formation::{
    BackToBack, Couple, FaceToFace, Formation, FormationKind, Handedness, MiniWave, Slot, Tandem,
};
use crate::network::{Fact, FactKind, FinderConfig, Rule};

const COUPLE: FactKind = FactKind::Formation(FormationKind::Couple);
const MINI_WAVE: FactKind = FactKind::Formation(FormationKind::MiniWave);
const FACE_TO_FACE: FactKind = FactKind::Formation(FormationKind::FaceToFace);
const BACK_TO_BACK: FactKind = FactKind::Formation(FormationKind::BackToBack);
const TANDEM: FactKind = FactKind::Formation(FormationKind::Tandem);

/// Two couples facing each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacingCouples {
    pub couple1: Couple,
    pub couple2: Couple,
    pub facing1: FaceToFace,
    pub facing2: FaceToFace,
}

impl FacingCouples {
    pub const SLOTS: &'static [Slot] = &[
        Slot::new("couple1", FormationKind::Couple),
        Slot::new("couple2", FormationKind::Couple),
        Slot::redundant("facing1", FormationKind::FaceToFace),
        Slot::redundant("facing2", FormationKind::FaceToFace),
    ];

    pub fn parts(&self) -> Vec<Formation> {
        vec![
            self.couple1.clone().into(),
            self.couple2.clone().into(),
            self.facing1.clone().into(),
            self.facing2.clone().into(),
        ]
    }

    pub fn beaus(&self) -> Dancers {
        Dancers::union([&self.couple1.beaus(), &self.couple2.beaus()])
    }

    pub fn belles(&self) -> Dancers {
        Dancers::union([&self.couple1.belles(), &self.couple2.belles()])
    }

    pub fn leaders(&self) -> Dancers {
        Dancers::union([&self.facing1.leaders(), &self.facing2.leaders()])
    }

    pub fn trailers(&self) -> Dancers {
        Dancers::union([&self.facing1.trailers(), &self.facing2.trailers()])
    }

    pub fn sample() -> Self {
        let couple1 = Couple::new(
            sample_dancer(0, 0.0, -0.5, 0),
            sample_dancer(1, 0.0, 0.5, 0),
        );
        let couple2 = Couple::new(
            sample_dancer(2, 1.0, 0.5, 2),
            sample_dancer(3, 1.0, -0.5, 2),
        );
        Self {
            facing1: FaceToFace {
                dancer1: couple1.beau.clone(),
                dancer2: couple2.belle.clone(),
            },
            facing2: FaceToFace {
                dancer1: couple1.belle.clone(),
                dancer2: couple2.beau.clone(),
            },
            couple1,
            couple2,
        }
    }
}

/// One couple directly behind another, all facing the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TandemCouples {
    pub couple1: Couple,
    pub couple2: Couple,
    pub beaus_tandem: Tandem,
    pub belles_tandem: Tandem,
}

impl TandemCouples {
    pub const SLOTS: &'static [Slot] = &[
        Slot::new("couple1", FormationKind::Couple),
        Slot::new("couple2", FormationKind::Couple),
        Slot::redundant("beaus_tandem", FormationKind::Tandem),
        Slot::redundant("belles_tandem", FormationKind::Tandem),
    ];

    pub fn parts(&self) -> Vec<Formation> {
        vec![
            self.couple1.clone().into(),
            self.couple2.clone().into(),
            self.beaus_tandem.clone().into(),
            self.belles_tandem.clone().into(),
        ]
    }

    pub fn beaus(&self) -> Dancers {
        self.beaus_tandem.dancers()
    }

    pub fn belles(&self) -> Dancers {
        self.belles_tandem.dancers()
    }

    pub fn leaders(&self) -> Dancers {
        Dancers::union([&self.beaus_tandem.leaders(), &self.belles_tandem.leaders()])
    }

    pub fn trailers(&self) -> Dancers {
        Dancers::union([&self.beaus_tandem.trailers(), &self.belles_tandem.trailers()])
    }

    pub fn sample() -> Self {
        let couple1 = Couple::new(
            sample_dancer(0, 0.0, -0.5, 0),
            sample_dancer(1, 0.0, 0.5, 0),
        );
        let couple2 = Couple::new(
            sample_dancer(2, 1.0, -0.5, 0),
            sample_dancer(3, 1.0, 0.5, 0),
        );
        Self {
            beaus_tandem: Tandem::new(couple2.beau.clone(), couple1.beau.clone()),
            belles_tandem: Tandem::new(couple2.belle.clone(), couple1.belle.clone()),
            couple1,
            couple2,
        }
    }
}

/// Two couples with their backs to each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackToBackCouples {
    pub couple1: Couple,
    pub couple2: Couple,
    pub back_to_back1: BackToBack,
    pub back_to_back2: BackToBack,
}

impl BackToBackCouples {
    pub const SLOTS: &'static [Slot] = &[
        Slot::new("couple1", FormationKind::Couple),
        Slot::new("couple2", FormationKind::Couple),
        Slot::redundant("back_to_back1", FormationKind::BackToBack),
        Slot::redundant("back_to_back2", FormationKind::BackToBack),
    ];

    pub fn parts(&self) -> Vec<Formation> {
        vec![
            self.couple1.clone().into(),
            self.couple2.clone().into(),
            self.back_to_back1.clone().into(),
            self.back_to_back2.clone().into(),
        ]
    }

    pub fn beaus(&self) -> Dancers {
        Dancers::union([&self.couple1.beaus(), &self.couple2.beaus()])
    }

    pub fn belles(&self) -> Dancers {
        Dancers::union([&self.couple1.belles(), &self.couple2.belles()])
    }

    /// Everybody leads out of back to back couples.
    pub fn leaders(&self) -> Dancers {
        Dancers::union([&self.couple1.dancers(), &self.couple2.dancers()])
    }

    pub fn trailers(&self) -> Dancers {
        Dancers::new()
    }

    pub fn sample() -> Self {
        let couple1 = Couple::new(
            sample_dancer(0, 0.0, 0.5, 2),
            sample_dancer(1, 0.0, -0.5, 2),
        );
        let couple2 = Couple::new(
            sample_dancer(2, 1.0, -0.5, 0),
            sample_dancer(3, 1.0, 0.5, 0),
        );
        Self {
            back_to_back1: BackToBack {
                dancer1: couple1.beau.clone(),
                dancer2: couple2.belle.clone(),
            },
            back_to_back2: BackToBack {
                dancer1: couple1.belle.clone(),
                dancer2: couple2.beau.clone(),
            },
            couple1,
            couple2,
        }
    }
}

/// Two tandems facing opposite ways, side by side, so that each leader
/// is in a mini-wave with the other tandem's trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOfFour {
    pub mini_wave1: MiniWave,
    pub mini_wave2: MiniWave,
    pub tandem1: Tandem,
    pub tandem2: Tandem,
}

impl BoxOfFour {
    pub const SLOTS: &'static [Slot] = &[
        Slot::new("mini_wave1", FormationKind::MiniWave),
        Slot::new("mini_wave2", FormationKind::MiniWave),
        Slot::redundant("tandem1", FormationKind::Tandem),
        Slot::redundant("tandem2", FormationKind::Tandem),
    ];

    pub fn parts(&self) -> Vec<Formation> {
        vec![
            self.mini_wave1.clone().into(),
            self.mini_wave2.clone().into(),
            self.tandem1.clone().into(),
            self.tandem2.clone().into(),
        ]
    }

    pub fn handedness(&self) -> Handedness {
        self.mini_wave1.handedness
    }

    pub fn beaus(&self) -> Dancers {
        Dancers::union([&self.mini_wave1.beaus(), &self.mini_wave2.beaus()])
    }

    pub fn belles(&self) -> Dancers {
        Dancers::union([&self.mini_wave1.belles(), &self.mini_wave2.belles()])
    }

    pub fn leaders(&self) -> Dancers {
        Dancers::union([&self.tandem1.leaders(), &self.tandem2.leaders()])
    }

    pub fn trailers(&self) -> Dancers {
        Dancers::union([&self.tandem1.trailers(), &self.tandem2.trailers()])
    }

    /// A right handed box.
    pub fn sample() -> Self {
        let tandem1 = Tandem::new(
            sample_dancer(0, 1.0, -0.5, 0),
            sample_dancer(1, 0.0, -0.5, 0),
        );
        let tandem2 = Tandem::new(
            sample_dancer(2, 0.0, 0.5, 2),
            sample_dancer(3, 1.0, 0.5, 2),
        );
        Self {
            mini_wave1: MiniWave {
                dancer1: tandem1.leader.clone(),
                dancer2: tandem2.trailer.clone(),
                handedness: Handedness::RightHanded,
            },
            mini_wave2: MiniWave {
                dancer1: tandem1.trailer.clone(),
                dancer2: tandem2.leader.clone(),
                handedness: Handedness::RightHanded,
            },
            tandem1,
            tandem2,
        }
    }
}

/// Two mini-waves crossing at right angles with a common center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star {
    pub mini_wave1: MiniWave,
    pub mini_wave2: MiniWave,
}

impl Star {
    pub const SLOTS: &'static [Slot] = &[
        Slot::new("mini_wave1", FormationKind::MiniWave),
        Slot::new("mini_wave2", FormationKind::MiniWave),
    ];

    pub fn parts(&self) -> Vec<Formation> {
        vec![self.mini_wave1.clone().into(), self.mini_wave2.clone().into()]
    }

    pub fn handedness(&self) -> Handedness {
        self.mini_wave1.handedness
    }

    pub fn beaus(&self) -> Dancers {
        Dancers::union([&self.mini_wave1.beaus(), &self.mini_wave2.beaus()])
    }

    pub fn belles(&self) -> Dancers {
        Dancers::union([&self.mini_wave1.belles(), &self.mini_wave2.belles()])
    }

    /// A right hand star.
    pub fn sample() -> Self {
        Self {
            mini_wave1: MiniWave {
                dancer1: sample_dancer(0, 0.0, -0.5, 0),
                dancer2: sample_dancer(1, 0.0, 0.5, 2),
                handedness: Handedness::RightHanded,
            },
            mini_wave2: MiniWave {
                dancer1: sample_dancer(2, 0.5, 0.0, 1),
                dancer2: sample_dancer(3, -0.5, 0.0, 3),
                handedness: Handedness::RightHanded,
            },
        }
    }
}

/// Four dancers side by side, all facing the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOfFour {
    pub left_couple: Couple,
    pub center_couple: Couple,
    pub right_couple: Couple,
}

impl LineOfFour {
    pub const SLOTS: &'static [Slot] = &[
        Slot::new("left_couple", FormationKind::Couple),
        Slot::redundant("center_couple", FormationKind::Couple),
        Slot::new("right_couple", FormationKind::Couple),
    ];

    pub fn parts(&self) -> Vec<Formation> {
        vec![
            self.left_couple.clone().into(),
            self.center_couple.clone().into(),
            self.right_couple.clone().into(),
        ]
    }

    pub fn beaus(&self) -> Dancers {
        Dancers::union([&self.left_couple.beaus(), &self.right_couple.beaus()])
    }

    pub fn belles(&self) -> Dancers {
        Dancers::union([&self.left_couple.belles(), &self.right_couple.belles()])
    }

    pub fn centers(&self) -> Dancers {
        self.center_couple.dancers()
    }

    pub fn ends(&self) -> Dancers {
        Dancers::union([&self.left_couple.dancers(), &self.right_couple.dancers()])
            .difference(&self.centers())
    }

    pub fn sample() -> Self {
        let line: Vec<_> = (0..4)
            .map(|i| sample_dancer(i, 0.0, i as f64 - 1.5, 0))
            .collect();
        Self {
            left_couple: Couple::new(line[0].clone(), line[1].clone()),
            center_couple: Couple::new(line[1].clone(), line[2].clone()),
            right_couple: Couple::new(line[2].clone(), line[3].clone()),
        }
    }
}

/// Four dancers side by side, adjacent dancers facing opposite ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveOfFour {
    pub mini_wave1: MiniWave,
    pub center_mini_wave: MiniWave,
    pub mini_wave3: MiniWave,
}

impl WaveOfFour {
    pub const SLOTS: &'static [Slot] = &[
        Slot::new("mini_wave1", FormationKind::MiniWave),
        Slot::redundant("center_mini_wave", FormationKind::MiniWave),
        Slot::new("mini_wave3", FormationKind::MiniWave),
    ];

    pub fn parts(&self) -> Vec<Formation> {
        vec![
            self.mini_wave1.clone().into(),
            self.center_mini_wave.clone().into(),
            self.mini_wave3.clone().into(),
        ]
    }

    /// A wave is named for the hands the ends hold with the centers.
    pub fn handedness(&self) -> Handedness {
        self.mini_wave1.handedness
    }

    pub fn beaus(&self) -> Dancers {
        Dancers::union([&self.mini_wave1.beaus(), &self.mini_wave3.beaus()])
    }

    pub fn belles(&self) -> Dancers {
        Dancers::union([&self.mini_wave1.belles(), &self.mini_wave3.belles()])
    }

    pub fn centers(&self) -> Dancers {
        self.center_mini_wave.dancers()
    }

    pub fn ends(&self) -> Dancers {
        Dancers::union([&self.mini_wave1.dancers(), &self.mini_wave3.dancers()])
            .difference(&self.centers())
    }

    /// A right handed ocean wave across the hall.
    pub fn sample() -> Self {
        let wave: Vec<_> = (0..4)
            .map(|i| sample_dancer(i, 0.0, i as f64 - 1.5, 2 * (i as i64 % 2)))
            .collect();
        let pair = |a: usize, handedness| MiniWave {
            dancer1: wave[a].clone(),
            dancer2: wave[a + 1].clone(),
            handedness,
        };
        Self {
            mini_wave1: pair(0, Handedness::RightHanded),
            center_mini_wave: pair(1, Handedness::LeftHanded),
            mini_wave3: pair(2, Handedness::RightHanded),
        }
    }
}

/// Two couples side by side facing opposite ways, joined by a mini-wave
/// in the middle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoFacedLine {
    pub couple1: Couple,
    pub couple2: Couple,
    pub center_mini_wave: MiniWave,
}

impl TwoFacedLine {
    pub const SLOTS: &'static [Slot] = &[
        Slot::new("couple1", FormationKind::Couple),
        Slot::new("couple2", FormationKind::Couple),
        Slot::redundant("center_mini_wave", FormationKind::MiniWave),
    ];

    pub fn parts(&self) -> Vec<Formation> {
        vec![
            self.couple1.clone().into(),
            self.couple2.clone().into(),
            self.center_mini_wave.clone().into(),
        ]
    }

    /// A two faced line is named for the hands the centers hold.
    pub fn handedness(&self) -> Handedness {
        self.center_mini_wave.handedness
    }

    pub fn beaus(&self) -> Dancers {
        Dancers::union([&self.couple1.beaus(), &self.couple2.beaus()])
    }

    pub fn belles(&self) -> Dancers {
        Dancers::union([&self.couple1.belles(), &self.couple2.belles()])
    }

    pub fn centers(&self) -> Dancers {
        self.center_mini_wave.dancers()
    }

    pub fn ends(&self) -> Dancers {
        Dancers::union([&self.couple1.dancers(), &self.couple2.dancers()])
            .difference(&self.centers())
    }

    /// A right handed two faced line with the belles in the center.
    pub fn sample() -> Self {
        let couple1 = Couple::new(
            sample_dancer(0, 0.0, -1.5, 0),
            sample_dancer(1, 0.0, -0.5, 0),
        );
        let couple2 = Couple::new(
            sample_dancer(3, 0.0, 1.5, 2),
            sample_dancer(2, 0.0, 0.5, 2),
        );
        Self {
            center_mini_wave: MiniWave {
                dancer1: couple1.belle.clone(),
                dancer2: couple2.belle.clone(),
                handedness: Handedness::RightHanded,
            },
            couple1,
            couple2,
        }
    }
}

pub(crate) const RULES: &[Rule] = &[
    Rule::new(
        "FacingCouples",
        &[COUPLE, COUPLE, FACE_TO_FACE, FACE_TO_FACE],
        FactKind::Formation(FormationKind::FacingCouples),
        rule_facing_couples,
    ),
    Rule::new(
        "TandemCouples",
        &[COUPLE, COUPLE, TANDEM, TANDEM],
        FactKind::Formation(FormationKind::TandemCouples),
        rule_tandem_couples,
    ),
    Rule::new(
        "BackToBackCouples",
        &[COUPLE, COUPLE, BACK_TO_BACK, BACK_TO_BACK],
        FactKind::Formation(FormationKind::BackToBackCouples),
        rule_back_to_back_couples,
    ),
    Rule::new(
        "BoxOfFour",
        &[MINI_WAVE, MINI_WAVE, TANDEM, TANDEM],
        FactKind::Formation(FormationKind::BoxOfFour),
        rule_box_of_four,
    ),
    Rule::new(
        "Star",
        &[MINI_WAVE, MINI_WAVE],
        FactKind::Formation(FormationKind::Star),
        rule_star,
    ),
    Rule::new(
        "LineOfFour",
        &[COUPLE, COUPLE, COUPLE],
        FactKind::Formation(FormationKind::LineOfFour),
        rule_line_of_four,
    ),
    Rule::new(
        "WaveOfFour",
        &[MINI_WAVE, MINI_WAVE, MINI_WAVE],
        FactKind::Formation(FormationKind::WaveOfFour),
        rule_wave_of_four,
    ),
    Rule::new(
        "TwoFacedLine",
        &[COUPLE, COUPLE, MINI_WAVE],
        FactKind::Formation(FormationKind::TwoFacedLine),
        rule_two_faced_line,
    ),
];

fn couple(fact: &Fact) -> Option<&Couple> {
    fact.as_formation()?.as_couple()
}

fn mini_wave(fact: &Fact) -> Option<&MiniWave> {
    fact.as_formation()?.as_mini_wave()
}

fn face_to_face(fact: &Fact) -> Option<&FaceToFace> {
    fact.as_formation()?.as_face_to_face()
}

fn back_to_back(fact: &Fact) -> Option<&BackToBack> {
    fact.as_formation()?.as_back_to_back()
}

fn tandem(fact: &Fact) -> Option<&Tandem> {
    fact.as_formation()?.as_tandem()
}

/// Anchor guard shared by the rules that join two couples.
fn couples_in_order(couple1: &Couple, couple2: &Couple) -> bool {
    couple1.beau.ordinal() < couple2.beau.ordinal()
}

fn rule_facing_couples(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [c1, c2, f1, f2] = facts else {
        return None;
    };
    let (c1, c2) = (couple(c1)?, couple(c2)?);
    let (f1, f2) = (face_to_face(f1)?, face_to_face(f2)?);
    if !couples_in_order(c1, c2) {
        return None;
    }
    // Each beau faces the other couple's belle.
    if !(f1.joins(&c1.beau, &c2.belle) && f2.joins(&c1.belle, &c2.beau)) {
        return None;
    }
    Some(Fact::formation(FacingCouples {
        couple1: c1.clone(),
        couple2: c2.clone(),
        facing1: f1.clone(),
        facing2: f2.clone(),
    }))
}

fn rule_tandem_couples(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [c1, c2, t1, t2] = facts else {
        return None;
    };
    let (c1, c2) = (couple(c1)?, couple(c2)?);
    let (beaus, belles) = (tandem(t1)?, tandem(t2)?);
    if !couples_in_order(c1, c2) {
        return None;
    }
    let front_and_back = |front: &Couple, back: &Couple| {
        beaus.leader == front.beau
            && beaus.trailer == back.beau
            && belles.leader == front.belle
            && belles.trailer == back.belle
    };
    if !(front_and_back(c1, c2) || front_and_back(c2, c1)) {
        return None;
    }
    Some(Fact::formation(TandemCouples {
        couple1: c1.clone(),
        couple2: c2.clone(),
        beaus_tandem: beaus.clone(),
        belles_tandem: belles.clone(),
    }))
}

fn rule_back_to_back_couples(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [c1, c2, b1, b2] = facts else {
        return None;
    };
    let (c1, c2) = (couple(c1)?, couple(c2)?);
    let (b1, b2) = (back_to_back(b1)?, back_to_back(b2)?);
    if !couples_in_order(c1, c2) {
        return None;
    }
    if !(b1.joins(&c1.beau, &c2.belle) && b2.joins(&c1.belle, &c2.beau)) {
        return None;
    }
    Some(Fact::formation(BackToBackCouples {
        couple1: c1.clone(),
        couple2: c2.clone(),
        back_to_back1: b1.clone(),
        back_to_back2: b2.clone(),
    }))
}

fn rule_box_of_four(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [mw1, mw2, t1, t2] = facts else {
        return None;
    };
    let (mw1, mw2) = (mini_wave(mw1)?, mini_wave(mw2)?);
    let (t1, t2) = (tandem(t1)?, tandem(t2)?);
    if t1.leader.ordinal() >= t2.leader.ordinal() {
        return None;
    }
    if t1.leader.direction() != t2.leader.direction().opposite() {
        return None;
    }
    // Each leader is in a mini-wave with the other tandem's trailer.
    if !(mw1.has_dancer(&t1.leader) && mw1.has_dancer(&t2.trailer)) {
        return None;
    }
    if !(mw2.has_dancer(&t2.leader) && mw2.has_dancer(&t1.trailer)) {
        return None;
    }
    Some(Fact::formation(BoxOfFour {
        mini_wave1: mw1.clone(),
        mini_wave2: mw2.clone(),
        tandem1: t1.clone(),
        tandem2: t2.clone(),
    }))
}

fn rule_star(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [mw1, mw2] = facts else {
        return None;
    };
    let (mw1, mw2) = (mini_wave(mw1)?, mini_wave(mw2)?);
    if mw1.dancer1.ordinal() >= mw2.dancer1.ordinal() {
        return None;
    }
    if mw1.handedness != mw2.handedness || mw1.center() != mw2.center() {
        return None;
    }
    let crossing = mw1.dancer1.direction().quarter_left();
    if mw2.dancer1.direction() != crossing && mw2.dancer2.direction() != crossing {
        return None;
    }
    Some(Fact::formation(Star {
        mini_wave1: mw1.clone(),
        mini_wave2: mw2.clone(),
    }))
}

fn rule_line_of_four(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [left, center, right] = facts else {
        return None;
    };
    let (left, center, right) = (couple(left)?, couple(center)?, couple(right)?);
    if left.belle != center.beau || center.belle != right.beau {
        return None;
    }
    Some(Fact::formation(LineOfFour {
        left_couple: left.clone(),
        center_couple: center.clone(),
        right_couple: right.clone(),
    }))
}

fn rule_wave_of_four(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [outer1, center, outer3] = facts else {
        return None;
    };
    let (outer1, center, outer3) = (mini_wave(outer1)?, mini_wave(center)?, mini_wave(outer3)?);
    // The center wave's own dancer order decides which end is which.
    if !(outer1.has_dancer(&center.dancer1) && !outer1.has_dancer(&center.dancer2)) {
        return None;
    }
    if !(outer3.has_dancer(&center.dancer2) && !outer3.has_dancer(&center.dancer1)) {
        return None;
    }
    let ends = center.handedness.opposite();
    if outer1.handedness != ends || outer3.handedness != ends {
        return None;
    }
    Some(Fact::formation(WaveOfFour {
        mini_wave1: outer1.clone(),
        center_mini_wave: center.clone(),
        mini_wave3: outer3.clone(),
    }))
}

fn rule_two_faced_line(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [c1, c2, mw] = facts else {
        return None;
    };
    let (c1, c2, mw) = (couple(c1)?, couple(c2)?, mini_wave(mw)?);
    if !couples_in_order(c1, c2) {
        return None;
    }
    let beaus_joined = mw.has_dancer(&c1.beau) && mw.has_dancer(&c2.beau);
    let belles_joined = mw.has_dancer(&c1.belle) && mw.has_dancer(&c2.belle);
    if !(beaus_joined || belles_joined) {
        return None;
    }
    Some(Fact::formation(TwoFacedLine {
        couple1: c1.clone(),
        couple2: c2.clone(),
        center_mini_wave: mw.clone(),
    }))
}
