// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The incremental rule network.
//!
//! Dancers are asserted one at a time. Each new fact is stored in the
//! buffer for its type and then offered to every rule that takes that type
//! as an input, combined with the facts already buffered for the rule's
//! other inputs. Facts derived by a rule are queued and processed the same
//! way, so a single assertion runs Dancer → Pair → two dancer formations →
//! four dancer formations to completion before the call returns.
//!
//! The rule graph is acyclic (no rule's output feeds an earlier rule), so
//! every assertion terminates.
//!
//! # Combinations
//!
//! Every fact gets a sequence number when it is stored. When the fact with
//! sequence number `s` is processed in input slot `i` of a rule, slots
//! before `i` only see facts stored before it and slots after `i` see every
//! stored fact, including itself. Each tuple of facts is therefore offered
//! to each rule exactly once, when its newest member is processed.
//!
//! # Example
//!
//! ```
//! use squaredance::dancer::Set;
//! use squaredance::formation::FormationKind;
//! use squaredance::network::FormationFinder;
//! use squaredance::registry::Registry;
//!
//! let registry = Registry::new();
//! let mut finder = FormationFinder::new(&registry);
//! let set = Set::squared(2);
//! finder.ingest(set.dancers()).unwrap();
//! assert_eq!(finder.formations(FormationKind::FaceToFace).count(), 2);
//! ```

pub mod buffer;
pub mod config;
pub mod fact;
pub mod rule;
pub mod statistics;

// Re-export for convenience
pub use buffer::{BufferPolicy, Entry, TypeBuffer};
pub use config::FinderConfig;
pub use fact::{Fact, FactKind, Pair};
pub use rule::{standard_rules, Rule};
pub use statistics::{Counters, Statistics};

use crate::dancer::Dancer;
use crate::error::{FormationError, Result};
use crate::formation::{Formation, FormationKind};
use crate::registry::Registry;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

/// Where a finder is in its recognition pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderState {
    /// Nothing asserted since the last clear.
    Empty,
    /// Dancers are being asserted.
    Ingesting,
    /// The snapshot is complete; queries see every formation.
    Stable,
}

/// The forward-chaining matcher.
///
/// A finder holds no state across snapshots other than its statistics:
/// call [`FormationFinder::clear`] (or make a new finder) before
/// recognising dancers in new positions.
#[derive(Debug)]
pub struct FormationFinder {
    config: FinderConfig,
    rules: Vec<Rule>,
    /// For each fact type, the (rule, slot) pairs it can fill.
    triggers: HashMap<FactKind, Vec<(usize, usize)>>,
    buffers: HashMap<FactKind, TypeBuffer>,
    next_seq: u64,
    state: FinderState,
    statistics: Statistics,
}

impl FormationFinder {
    /// A finder running every rule of the registry with default settings.
    pub fn new(registry: &Registry) -> Self {
        Self::with_config(registry, FinderConfig::default())
    }

    pub fn with_config(registry: &Registry, config: FinderConfig) -> Self {
        Self::with_rules(registry.rules().to_vec(), config)
    }

    /// A finder over an explicit rule table.
    pub fn with_rules(rules: Vec<Rule>, config: FinderConfig) -> Self {
        let mut triggers: HashMap<FactKind, Vec<(usize, usize)>> = HashMap::new();
        let mut buffers = HashMap::new();
        buffers.insert(FactKind::DANCER, TypeBuffer::for_kind(FactKind::DANCER));
        for (rule_index, rule) in rules.iter().enumerate() {
            for (slot, kind) in rule.inputs.iter().enumerate() {
                triggers.entry(*kind).or_default().push((rule_index, slot));
                buffers
                    .entry(*kind)
                    .or_insert_with(|| TypeBuffer::for_kind(*kind));
            }
            buffers
                .entry(rule.output)
                .or_insert_with(|| TypeBuffer::for_kind(rule.output));
        }
        Self {
            config,
            rules,
            triggers,
            buffers,
            next_seq: 0,
            state: FinderState::Empty,
            statistics: Statistics::new(),
        }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn state(&self) -> FinderState {
        self.state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Assert one dancer and derive everything that follows from it.
    ///
    /// Fails if the snapshot is already stable, or if this dancer (or
    /// another dancer with the same ordinal) was already asserted.
    pub fn assert_dancer(&mut self, dancer: &Dancer) -> Result<()> {
        if self.state == FinderState::Stable {
            return Err(FormationError::SnapshotSealed);
        }
        let duplicate = self
            .formations(FormationKind::Dancer)
            .filter_map(Formation::as_dancer)
            .any(|d| d == dancer || d.ordinal() == dancer.ordinal());
        if duplicate {
            return Err(FormationError::DuplicateDancer {
                ordinal: dancer.ordinal(),
            });
        }
        self.state = FinderState::Ingesting;
        self.statistics.increment_counter(Counters::DancersAsserted);
        self.propagate(Fact::formation(dancer.clone()));
        Ok(())
    }

    /// Assert every dancer of a snapshot, then mark it stable.
    pub fn ingest<'a, I>(&mut self, dancers: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Dancer>,
    {
        for dancer in dancers {
            self.assert_dancer(dancer)?;
        }
        self.seal();
        Ok(())
    }

    /// Declare the snapshot complete.
    pub fn seal(&mut self) {
        self.state = FinderState::Stable;
    }

    /// Forget every fact, ready for a new snapshot.
    pub fn clear(&mut self) {
        for buffer in self.buffers.values_mut() {
            buffer.clear();
        }
        self.next_seq = 0;
        self.state = FinderState::Empty;
        self.statistics.increment_counter(Counters::Clears);
        debug!("finder cleared");
    }

    /// Every formation of the given kind found so far, in the order found.
    pub fn formations(&self, kind: FormationKind) -> impl Iterator<Item = &Formation> {
        self.buffers
            .get(&FactKind::Formation(kind))
            .into_iter()
            .flat_map(|buffer| buffer.formations())
    }

    pub fn count(&self, kind: FormationKind) -> usize {
        self.buffer(FactKind::Formation(kind))
            .map_or(0, TypeBuffer::len)
    }

    pub fn pairs(&self) -> impl Iterator<Item = &Pair> {
        self.buffers
            .get(&FactKind::Pair)
            .into_iter()
            .flat_map(|buffer| buffer.facts())
            .filter_map(Fact::as_pair)
    }

    pub fn buffer(&self, kind: FactKind) -> Option<&TypeBuffer> {
        self.buffers.get(&kind)
    }

    /// Every buffer, ordered by fact type.
    pub fn buffers(&self) -> Vec<&TypeBuffer> {
        let mut buffers: Vec<&TypeBuffer> = self.buffers.values().collect();
        buffers.sort_by_key(|buffer| buffer.kind());
        buffers
    }

    fn propagate(&mut self, fact: Fact) {
        let mut agenda = VecDeque::from([fact]);
        while let Some(fact) = agenda.pop_front() {
            let kind = fact.kind();
            let seq = self.next_seq;
            let buffer = self
                .buffers
                .entry(kind)
                .or_insert_with(|| TypeBuffer::for_kind(kind));
            if !buffer.insert(seq, fact) {
                self.statistics.increment_counter(Counters::FactsCoalesced);
                debug!(%kind, "coalesced");
                continue;
            }
            self.next_seq += 1;
            if let Some(entry) = buffer.entries().last() {
                debug!(seq, fact = %entry.fact, "stored");
            }
            let Some(triggers) = self.triggers.get(&kind) else {
                continue;
            };
            for &(rule_index, slot) in triggers {
                let rule = &self.rules[rule_index];
                fire(
                    rule,
                    slot,
                    seq,
                    &self.buffers,
                    &self.config,
                    &mut self.statistics,
                    &mut agenda,
                );
            }
        }
    }
}

/// Offer `rule` every combination that has the fact stored under `seq` in
/// input `slot` and no newer fact anywhere.
fn fire(
    rule: &Rule,
    slot: usize,
    seq: u64,
    buffers: &HashMap<FactKind, TypeBuffer>,
    config: &FinderConfig,
    statistics: &mut Statistics,
    agenda: &mut VecDeque<Fact>,
) {
    let candidates: Vec<Vec<&Fact>> = rule
        .inputs
        .iter()
        .enumerate()
        .map(|(input, kind)| {
            buffers
                .get(kind)
                .map(|buffer| {
                    buffer
                        .entries()
                        .iter()
                        .filter(|entry| match input.cmp(&slot) {
                            std::cmp::Ordering::Less => entry.seq < seq,
                            std::cmp::Ordering::Equal => entry.seq == seq,
                            std::cmp::Ordering::Greater => true,
                        })
                        .map(|entry| &entry.fact)
                        .collect()
                })
                .unwrap_or_default()
        })
        .collect();
    if candidates.iter().any(Vec::is_empty) {
        return;
    }
    let mut index = vec![0; candidates.len()];
    let mut combination: Vec<&Fact> = Vec::with_capacity(candidates.len());
    loop {
        combination.clear();
        combination.extend(index.iter().zip(&candidates).map(|(&i, facts)| facts[i]));
        statistics.increment_counter(Counters::CombinationsTried);
        if let Some(derived) = (rule.fire)(config, &combination) {
            debug_assert_eq!(derived.kind(), rule.output, "rule {}", rule.name);
            trace!(rule = rule.name, derived = %derived, "fired");
            statistics.increment_counter(Counters::FactsEmitted);
            agenda.push_back(derived);
        }
        // Advance the odometer, last input fastest.
        let mut position = index.len();
        loop {
            if position == 0 {
                return;
            }
            position -= 1;
            index[position] += 1;
            if index[position] < candidates[position].len() {
                break;
            }
            index[position] = 0;
        }
    }
}
