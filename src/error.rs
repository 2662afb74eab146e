// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors reported by formation recognition.
//!
//! Every failure here is deterministic: the same dancer poses and the same
//! request always produce the same error, so nothing is ever retried.

use crate::formation::FormationKind;
use crate::roles::Role;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormationError {
    /// A formation type was looked up by a name nobody registered.
    #[error("no such formation type: {0}")]
    UnknownFormationType(String),

    /// A role was looked up by a name nobody defined.
    #[error("no such role: {0}")]
    UnknownRole(String),

    /// The role has no meaning for this kind of formation.
    #[error("role {role} is not applicable to {kind}")]
    RoleInapplicable { role: Role, kind: FormationKind },

    /// A pair was requested of a dancer with itself.
    #[error("cannot pair dancer {ordinal} with itself")]
    SelfPair { ordinal: usize },

    /// The same dancer was asserted twice into one snapshot.
    #[error("dancer {ordinal} is already in this snapshot")]
    DuplicateDancer { ordinal: usize },

    /// Dancers cannot be added once a snapshot is stable; clear it first.
    #[error("snapshot is stable; clear the finder before asserting more dancers")]
    SnapshotSealed,

    #[error("formation type {0} has no sample")]
    NoSample(FormationKind),

    /// An action was defined twice in the same catalog.
    #[error("action {0} is already defined")]
    DuplicateAction(String),

    #[error("no such action: {0}")]
    UnknownAction(String),

    /// An action was asked to act on a formation it does not handle.
    #[error("action {action} does not apply to {kind}")]
    ActionInapplicable {
        action: String,
        kind: FormationKind,
    },
}

pub type Result<T> = std::result::Result<T, FormationError>;
