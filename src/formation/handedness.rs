// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Handedness of formations built from mini-waves.

use std::fmt;

/// Which hands the dancers of a formation hold (or would hold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Handedness {
    /// Handedness does not apply.
    #[default]
    NoHanded,
    RightHanded,
    LeftHanded,
}

impl Handedness {
    pub fn opposite(self) -> Handedness {
        match self {
            Handedness::NoHanded => Handedness::NoHanded,
            Handedness::RightHanded => Handedness::LeftHanded,
            Handedness::LeftHanded => Handedness::RightHanded,
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Handedness::NoHanded => "NoHanded",
            Handedness::RightHanded => "RightHanded",
            Handedness::LeftHanded => "LeftHanded",
        };
        f.write_str(name)
    }
}
