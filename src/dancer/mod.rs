// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Square dancers and the sets they dance in.
//!
//! A [`Dancer`] is a cheap, cloneable handle to a single dancer. Two
//! handles are equal only when they refer to the same dancer; two distinct
//! dancers standing in the same place and facing the same way are still
//! different dancers.
//!
//! A dancer's identity (ordinal, gender, couple number) never changes. Its
//! pose (position and facing direction) is updated in place between
//! recognition passes.
//!
//! # Example
//!
//! ```
//! use squaredance::dancer::{Dancer, Gender};
//! use squaredance::geometry::{Direction, Position};
//!
//! let d = Dancer::new(0, Position::ORIGIN, Direction::ZERO);
//! let twin = Dancer::new(1, Position::ORIGIN, Direction::ZERO);
//! assert_eq!(d, d.clone());
//! assert_ne!(d, twin);
//! assert_eq!(d.gender(), Gender::Unspecified);
//! ```

pub mod dancers;
pub mod set;

pub use dancers::Dancers;
pub use set::Set;

use crate::geometry::{Direction, Position};
use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The gender of a square dancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Unknown or irrelevant.
    #[default]
    Unspecified,
    Guy,
    Gal,
}

impl Gender {
    /// The other gender. `Unspecified` stays `Unspecified`.
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Unspecified => Gender::Unspecified,
            Gender::Guy => Gender::Gal,
            Gender::Gal => Gender::Guy,
        }
    }

    /// True if both genders are known and the same.
    ///
    /// Two `Unspecified` genders never match.
    pub fn matches(self, other: Gender) -> bool {
        self != Gender::Unspecified && self == other
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Unspecified => "Unspecified",
            Gender::Guy => "Guy",
            Gender::Gal => "Gal",
        };
        f.write_str(name)
    }
}

/// Where a dancer stands and which way they face.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Position,
    pub direction: Direction,
}

#[derive(Debug)]
struct DancerData {
    ordinal: usize,
    gender: Gender,
    couple_number: Option<u32>,
    pose: Cell<Pose>,
}

/// Handle to a single dancer.
#[derive(Clone)]
pub struct Dancer(Rc<DancerData>);

impl Dancer {
    /// A gender neutral dancer that does not belong to a squared set.
    pub fn new(ordinal: usize, position: Position, direction: Direction) -> Self {
        Self::with_identity(ordinal, Gender::Unspecified, None, position, direction)
    }

    /// A dancer with every identity attribute spelled out.
    ///
    /// `couple_number` is only meaningful for dancers that started in a
    /// squared set; couple 1 is the head couple facing down the hall.
    pub fn with_identity(
        ordinal: usize,
        gender: Gender,
        couple_number: Option<u32>,
        position: Position,
        direction: Direction,
    ) -> Self {
        Self(Rc::new(DancerData {
            ordinal,
            gender,
            couple_number,
            pose: Cell::new(Pose { position, direction }),
        }))
    }

    /// Unique (within a recognition pass) ordinal used to break symmetry.
    pub fn ordinal(&self) -> usize {
        self.0.ordinal
    }

    pub fn gender(&self) -> Gender {
        self.0.gender
    }

    pub fn couple_number(&self) -> Option<u32> {
        self.0.couple_number
    }

    pub fn pose(&self) -> Pose {
        self.0.pose.get()
    }

    pub fn position(&self) -> Position {
        self.pose().position
    }

    pub fn direction(&self) -> Direction {
        self.pose().direction
    }

    /// Set both position and direction.
    pub fn move_to(&self, position: Position, direction: Direction) -> &Self {
        self.0.pose.set(Pose { position, direction });
        self
    }

    /// Displace the dancer without changing their facing direction.
    pub fn move_by(&self, delta: Position) -> &Self {
        let pose = self.pose();
        self.move_to(pose.position + delta, pose.direction)
    }

    /// Turn the dancer by a relative direction.
    pub fn rotate(&self, by: Direction) -> &Self {
        let pose = self.pose();
        self.move_to(pose.position, pose.direction + by)
    }

    /// True if both handles refer to the same dancer.
    pub fn same(&self, other: &Dancer) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Dancer {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Dancer {}

impl Hash for Dancer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state);
    }
}

impl fmt::Display for Dancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.couple_number(), self.gender()) {
            (Some(couple), gender) if gender != Gender::Unspecified => {
                write!(f, "Dancer_{}{}", couple, gender)
            }
            _ => write!(f, "Dancer_{}", self.ordinal()),
        }
    }
}

impl fmt::Debug for Dancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pose = self.pose();
        write!(f, "{}@{} facing {}", self, pose.position, pose.direction)
    }
}
