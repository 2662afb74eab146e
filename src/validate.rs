// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sample round-trip validation.
//!
//! Each formation kind's sample is fed through a fresh finder, which must
//! find exactly one formation of that kind. None means a rule is too
//! strict or miswired; more than one means a symmetry guard is missing.

use crate::error::FormationError;
use crate::formation::{Formation, FormationKind};
use crate::registry::Registry;
use thiserror::Error;
use tracing::{info, warn};

/// A sample that did not round-trip, with everything needed to see why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "sample of {kind} was recognised {found} times, expected once\n  buffered: {buffered:?}\n  dancers: {dancers:?}"
)]
pub struct SampleMismatch {
    pub kind: FormationKind,
    pub found: usize,
    /// Every fact the finder buffered, rendered.
    pub buffered: Vec<String>,
    /// Each dancer with its pose.
    pub dancers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Formation(#[from] FormationError),
    #[error(transparent)]
    Mismatch(#[from] SampleMismatch),
}

/// Check one kind. Returns the single formation found.
pub fn check_sample(
    registry: &Registry,
    kind: FormationKind,
) -> Result<Formation, ValidationError> {
    let sample = registry.sample(kind)?;
    let dancers = sample.dancers();
    let mut finder = registry.finder();
    finder.ingest(&dancers)?;
    let mut found: Vec<Formation> = finder.formations(kind).cloned().collect();
    if found.len() == 1 {
        if let Some(formation) = found.pop() {
            return Ok(formation);
        }
    }
    let buffered = finder
        .buffers()
        .into_iter()
        .flat_map(|buffer| buffer.facts())
        .map(ToString::to_string)
        .collect();
    let mismatch = SampleMismatch {
        kind,
        found: found.len(),
        buffered,
        dancers: dancers.iter().map(|d| format!("{d:?}")).collect(),
    };
    warn!(%kind, found = mismatch.found, "sample did not round-trip");
    Err(mismatch.into())
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub passed: Vec<Formation>,
    pub failed: Vec<(FormationKind, ValidationError)>,
    /// Kinds registered without a sample.
    pub skipped: Vec<FormationKind>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Check every registered kind that has a sample.
pub fn validate_all(registry: &Registry) -> ValidationReport {
    validate_kinds(registry, registry.kinds())
}

pub fn validate_kinds<I>(registry: &Registry, kinds: I) -> ValidationReport
where
    I: IntoIterator<Item = FormationKind>,
{
    let mut report = ValidationReport::default();
    for kind in kinds {
        if !registry.has_sample(kind) {
            report.skipped.push(kind);
            continue;
        }
        match check_sample(registry, kind) {
            Ok(formation) => report.passed.push(formation),
            Err(e) => report.failed.push((kind, e)),
        }
    }
    info!(
        passed = report.passed.len(),
        failed = report.failed.len(),
        skipped = report.skipped.len(),
        "validated formation samples"
    );
    report
}
