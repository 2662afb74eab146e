// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rules: the nodes of the network.
//!
//! A rule names the fact types it consumes, one per input slot, and the
//! fact type it produces. Its body is a plain function that inspects one
//! combination of input facts and returns the derived fact, if any. Rule
//! bodies are pure; the network decides which combinations they see.

use crate::formation::{four_dancers, two_dancers};
use crate::network::{Fact, FactKind, FinderConfig, Pair};
use std::fmt;

/// The body of a rule.
pub type RuleFn = fn(&FinderConfig, &[&Fact]) -> Option<Fact>;

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub inputs: &'static [FactKind],
    pub output: FactKind,
    pub fire: RuleFn,
}

impl Rule {
    pub const fn new(
        name: &'static str,
        inputs: &'static [FactKind],
        output: FactKind,
        fire: RuleFn,
    ) -> Self {
        Self {
            name,
            inputs,
            output,
            fire,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("output", &self.output)
            .finish()
    }
}

/// Joins every two dancers into a [`Pair`].
pub const PAIR_RULE: Rule = Rule::new(
    "Pair",
    &[FactKind::DANCER, FactKind::DANCER],
    FactKind::Pair,
    rule_pair,
);

fn rule_pair(_config: &FinderConfig, facts: &[&Fact]) -> Option<Fact> {
    let [a, b] = facts else {
        return None;
    };
    let a = a.as_formation()?.as_dancer()?;
    let b = b.as_formation()?.as_dancer()?;
    // Both orders arrive; keep one.
    if a.ordinal() >= b.ordinal() {
        return None;
    }
    Some(Fact::Pair(Pair::ordered(a.clone(), b.clone())))
}

/// The full rule table, in dependency order.
pub fn standard_rules() -> Vec<Rule> {
    let mut rules = vec![PAIR_RULE];
    rules.extend_from_slice(two_dancers::RULES);
    rules.extend_from_slice(four_dancers::RULES);
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_graph_is_acyclic() {
        // Every input of a rule is produced by an earlier rule, or is a dancer.
        let rules = standard_rules();
        let mut available: HashSet<FactKind> = HashSet::from([FactKind::DANCER]);
        for rule in &rules {
            for input in rule.inputs {
                assert!(available.contains(input), "{} needs {}", rule.name, input);
            }
            assert!(!rule.inputs.contains(&rule.output), "{}", rule.name);
            available.insert(rule.output);
        }
    }

    #[test]
    fn test_every_formation_kind_has_a_rule() {
        let rules = standard_rules();
        for kind in crate::formation::FormationKind::all() {
            if kind == crate::formation::FormationKind::Dancer {
                continue;
            }
            let produced = rules
                .iter()
                .filter(|r| r.output == FactKind::Formation(kind))
                .count();
            assert_eq!(produced, 1, "{kind}");
        }
    }
}
