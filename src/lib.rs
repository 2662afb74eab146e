// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Square dance formation recognition.
//!
//! Given the positions and facing directions of a set of dancers, find
//! every formation (Couple, FaceToFace, WaveOfFour, ...) they currently
//! stand in.
//!
//! # Architecture
//!
//! Recognition is a forward-chaining rule network:
//!
//! 1. Every dancer asserted into a [`FormationFinder`] becomes a fact.
//! 2. Every two dancers form a [`network::Pair`].
//! 3. Two-dancer rules classify pairs: Couple, MiniWave, FaceToFace,
//!    BackToBack, Tandem.
//! 4. Four-dancer rules join two-dancer formations: FacingCouples,
//!    TandemCouples, BackToBackCouples, BoxOfFour, Star, LineOfFour,
//!    WaveOfFour, TwoFacedLine.
//!
//! Each rule is a pure function over one combination of input facts. The
//! network offers each combination exactly once.
//!
//! # Symmetry
//!
//! Many formations look the same after swapping dancers: a FaceToFace of
//! A and B is a FaceToFace of B and A. Two mechanisms stop one physical
//! formation from being reported twice:
//!
//! - symmetric two-dancer kinds are stored in buffers that drop a fact
//!   equal to a stored one up to swapping its dancers
//! - composite rules only accept their parts in one order, comparing the
//!   ordinals of an anchor dancer in each part
//!
//! Every kind has a canonical sample, and [`validate`] checks that each
//! sample is recognised as exactly one formation of its own kind.
//!
//! # Example
//!
//! ```
//! use squaredance::dancer::Set;
//! use squaredance::formation::FormationKind;
//! use squaredance::registry::Registry;
//!
//! let registry = Registry::new();
//! let set = Set::squared(2);
//! let facing = registry
//!     .find_formations(set.dancers(), FormationKind::FacingCouples)
//!     .unwrap();
//! assert_eq!(facing.len(), 1);
//! ```

pub mod action;
pub mod dancer;
pub mod error;
pub mod formation;
pub mod geometry;
pub mod network;
pub mod predicates;
pub mod registry;
pub mod roles;
pub mod validate;

// Re-export commonly used types
pub use dancer::{Dancer, Dancers, Set};
pub use error::{FormationError, Result};
pub use formation::{Formation, FormationKind};
pub use network::FormationFinder;
pub use registry::Registry;
pub use roles::Role;
