// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The formation registry.
//!
//! One entry per formation kind: the builder for its canonical sample and
//! the roles it defines. The registry also owns the rule table handed to
//! every [`FormationFinder`] it creates. Build it once at startup and pass
//! it by reference.

use crate::dancer::{Dancer, Dancers, Set};
use crate::error::{FormationError, Result};
use crate::formation::{
    BackToBack, BackToBackCouples, BoxOfFour, Couple, FaceToFace, FacingCouples, Formation,
    FormationKind, LineOfFour, MiniWave, Star, Tandem, TandemCouples, TwoFacedLine, WaveOfFour,
};
use crate::network::{standard_rules, FinderConfig, FormationFinder, Rule};
use crate::roles::{formation_roles, Role};

/// Builds a freshly allocated, centred sample.
pub type SampleFn = fn() -> Formation;

#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub kind: FormationKind,
    pub sample: Option<SampleFn>,
    pub roles: &'static [Role],
}

#[derive(Debug, Clone)]
pub struct Registry {
    registrations: Vec<Registration>,
    rules: Vec<Rule>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_builder(kind: FormationKind) -> SampleFn {
    match kind {
        FormationKind::Dancer => || Formation::Dancer(Set::neutral(1).dancers()[0].clone()),
        FormationKind::Couple => || Formation::from(Couple::sample()).centred(),
        FormationKind::MiniWave => || Formation::from(MiniWave::sample()).centred(),
        FormationKind::FaceToFace => || Formation::from(FaceToFace::sample()).centred(),
        FormationKind::BackToBack => || Formation::from(BackToBack::sample()).centred(),
        FormationKind::Tandem => || Formation::from(Tandem::sample()).centred(),
        FormationKind::FacingCouples => || Formation::from(FacingCouples::sample()).centred(),
        FormationKind::TandemCouples => || Formation::from(TandemCouples::sample()).centred(),
        FormationKind::BackToBackCouples => {
            || Formation::from(BackToBackCouples::sample()).centred()
        }
        FormationKind::BoxOfFour => || Formation::from(BoxOfFour::sample()).centred(),
        FormationKind::Star => || Formation::from(Star::sample()).centred(),
        FormationKind::LineOfFour => || Formation::from(LineOfFour::sample()).centred(),
        FormationKind::WaveOfFour => || Formation::from(WaveOfFour::sample()).centred(),
        FormationKind::TwoFacedLine => || Formation::from(TwoFacedLine::sample()).centred(),
    }
}

impl Registry {
    /// Every formation kind with its sample and roles, and the standard rules.
    pub fn new() -> Self {
        let registrations = FormationKind::all()
            .map(|kind| Registration {
                kind,
                sample: Some(sample_builder(kind)),
                roles: formation_roles(kind),
            })
            .collect();
        Self::from_parts(registrations, standard_rules())
    }

    /// A registry over an explicit table. Kinds missing from
    /// `registrations` are unknown to it.
    pub fn from_parts(registrations: Vec<Registration>, rules: Vec<Rule>) -> Self {
        Self {
            registrations,
            rules,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn kinds(&self) -> impl Iterator<Item = FormationKind> + '_ {
        self.registrations.iter().map(|r| r.kind)
    }

    pub fn registration(&self, kind: FormationKind) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.kind == kind)
    }

    /// The registered kind with this name.
    pub fn lookup(&self, name: &str) -> Result<FormationKind> {
        let kind = FormationKind::from_name(name)?;
        match self.registration(kind) {
            Some(_) => Ok(kind),
            None => Err(FormationError::UnknownFormationType(name.to_string())),
        }
    }

    pub fn has_sample(&self, kind: FormationKind) -> bool {
        self.registration(kind).is_some_and(|r| r.sample.is_some())
    }

    /// A new sample of `kind`. Each call allocates fresh dancers.
    pub fn sample(&self, kind: FormationKind) -> Result<Formation> {
        self.registration(kind)
            .and_then(|r| r.sample)
            .map(|build| build())
            .ok_or(FormationError::NoSample(kind))
    }

    /// The formation-specific roles `kind` defines; empty if unregistered.
    pub fn roles(&self, kind: FormationKind) -> &'static [Role] {
        self.registration(kind).map_or(&[], |r| r.roles)
    }

    /// A role applied to a formation, checked against this registry's role
    /// table as well as the formation itself.
    pub fn apply_role(&self, role: Role, formation: &Formation) -> Result<Dancers> {
        let kind = formation.kind();
        if !role.is_ubiquitous() && !self.roles(kind).contains(&role) {
            return Err(FormationError::RoleInapplicable { role, kind });
        }
        role.apply(formation)
    }

    pub fn finder(&self) -> FormationFinder {
        FormationFinder::new(self)
    }

    pub fn finder_with_config(&self, config: FinderConfig) -> FormationFinder {
        FormationFinder::with_config(self, config)
    }

    /// Every formation of `kind` among `dancers`, using a fresh finder.
    pub fn find_formations(
        &self,
        dancers: &[Dancer],
        kind: FormationKind,
    ) -> Result<Vec<Formation>> {
        if self.registration(kind).is_none() {
            return Err(FormationError::UnknownFormationType(kind.name().to_string()));
        }
        let mut finder = self.finder();
        finder.ingest(dancers)?;
        Ok(finder.formations(kind).cloned().collect())
    }

    /// [`Registry::find_formations`] with the kind given by name.
    pub fn find_formations_named(
        &self,
        dancers: &[Dancer],
        name: &str,
    ) -> Result<Vec<Formation>> {
        let kind = self.lookup(name)?;
        self.find_formations(dancers, kind)
    }
}
