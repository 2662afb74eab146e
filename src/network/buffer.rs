// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-type fact buffers.
//!
//! The network keeps one buffer per fact type. Buffers only grow during a
//! recognition pass. Each entry remembers the sequence number it was
//! stored under, which the network uses to offer every combination of
//! facts to a rule exactly once.

use crate::formation::Formation;
use crate::network::{Fact, FactKind};

/// How a buffer treats a fact equal to one it already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferPolicy {
    /// Keep every fact.
    Append,
    /// Drop a fact that is the same as a stored one up to swapping its
    /// dancers (with equal handedness).
    Unique,
}

impl BufferPolicy {
    /// The policy for a fact type: unique for relabeling-symmetric
    /// formations, append for everything else.
    pub fn for_kind(kind: FactKind) -> Self {
        match kind {
            FactKind::Formation(kind) if kind.is_relabeling_symmetric() => BufferPolicy::Unique,
            _ => BufferPolicy::Append,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub seq: u64,
    pub fact: Fact,
}

#[derive(Debug, Clone)]
pub struct TypeBuffer {
    kind: FactKind,
    policy: BufferPolicy,
    entries: Vec<Entry>,
}

impl TypeBuffer {
    pub fn new(kind: FactKind, policy: BufferPolicy) -> Self {
        Self {
            kind,
            policy,
            entries: Vec::new(),
        }
    }

    pub fn for_kind(kind: FactKind) -> Self {
        Self::new(kind, BufferPolicy::for_kind(kind))
    }

    pub fn kind(&self) -> FactKind {
        self.kind
    }

    pub fn policy(&self) -> BufferPolicy {
        self.policy
    }

    /// Store a fact under `seq`.
    ///
    /// Returns false, storing nothing, if the policy coalesces it into a
    /// fact already present.
    pub fn insert(&mut self, seq: u64, fact: Fact) -> bool {
        debug_assert_eq!(fact.kind(), self.kind);
        if self.policy == BufferPolicy::Unique
            && self
                .entries
                .iter()
                .any(|entry| entry.fact.same_up_to_relabeling(&fact))
        {
            return false;
        }
        self.entries.push(Entry { seq, fact });
        true
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.entries.iter().map(|entry| &entry.fact)
    }

    pub fn formations(&self) -> impl Iterator<Item = &Formation> {
        self.facts().filter_map(Fact::as_formation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::{FaceToFace, FormationKind, MiniWave};

    #[test]
    fn test_unique_policy_coalesces_swapped_dancers() {
        let kind = FactKind::Formation(FormationKind::FaceToFace);
        let mut buffer = TypeBuffer::for_kind(kind);
        assert_eq!(buffer.policy(), BufferPolicy::Unique);
        let f = FaceToFace::sample();
        let swapped = FaceToFace {
            dancer1: f.dancer2.clone(),
            dancer2: f.dancer1.clone(),
        };
        assert!(buffer.insert(0, Fact::formation(f)));
        assert!(!buffer.insert(1, Fact::formation(swapped)));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_unique_policy_respects_handedness() {
        let kind = FactKind::Formation(FormationKind::MiniWave);
        let mut buffer = TypeBuffer::for_kind(kind);
        let right = MiniWave::sample();
        let mut left = right.clone();
        left.handedness = right.handedness.opposite();
        assert!(buffer.insert(0, Fact::formation(right)));
        assert!(buffer.insert(1, Fact::formation(left)));
        assert_eq!(buffer.formations().count(), 2);
    }

    #[test]
    fn test_append_policy_keeps_everything() {
        let kind = FactKind::Formation(FormationKind::Couple);
        assert_eq!(BufferPolicy::for_kind(kind), BufferPolicy::Append);
        assert_eq!(BufferPolicy::for_kind(FactKind::Pair), BufferPolicy::Append);
        let mut buffer = TypeBuffer::for_kind(kind);
        let c = crate::formation::Couple::sample();
        assert!(buffer.insert(0, Fact::formation(c.clone())));
        assert!(buffer.insert(1, Fact::formation(c)));
        assert_eq!(buffer.len(), 2);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
