// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Actions: what dancers can be told to do.
//!
//! An action (a "call") has one implementation per formation kind it can
//! start from. Callers recognise formations first, then look up the
//! implementation matching a formation's kind. The implementations move
//! dancers through their interior-mutable poses; this module only keeps
//! the table.

use crate::error::{FormationError, Result};
use crate::formation::{Formation, FormationKind};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Dance programs, from the building blocks up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
pub enum Level {
    Primitive,
    Basic1,
    Basic2,
    Mainstream,
    Plus,
    A1,
    A2,
    C1,
    C2,
    C3A,
    C3B,
    C4,
    NotOnList,
}

pub type PerformFn = fn(&Formation);

/// One action, from one formation kind.
#[derive(Clone)]
pub struct FormationAction {
    action: String,
    level: Level,
    kind: FormationKind,
    perform: PerformFn,
}

impl FormationAction {
    pub fn action_name(&self) -> &str {
        &self.action
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn kind(&self) -> FormationKind {
        self.kind
    }

    pub fn applies_to(&self, formation: &Formation) -> bool {
        formation.kind() == self.kind
    }

    /// Perform the action on the dancers of `formation`.
    pub fn perform(&self, formation: &Formation) -> Result<()> {
        if !self.applies_to(formation) {
            return Err(FormationError::ActionInapplicable {
                action: self.action.clone(),
                kind: formation.kind(),
            });
        }
        (self.perform)(formation);
        Ok(())
    }
}

impl fmt::Debug for FormationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormationAction")
            .field("action", &self.action)
            .field("level", &self.level)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for FormationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} ({})", self.action, self.kind, self.level)
    }
}

#[derive(Debug, Clone)]
pub struct Action {
    name: String,
    description: String,
    formation_actions: Vec<FormationAction>,
}

impl Action {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Add the implementation for one starting formation. A later
    /// implementation for the same kind replaces the earlier one.
    pub fn add_formation_action(
        &mut self,
        level: Level,
        kind: FormationKind,
        perform: PerformFn,
    ) -> &mut Self {
        self.formation_actions.retain(|fa| fa.kind != kind);
        self.formation_actions.push(FormationAction {
            action: self.name.clone(),
            level,
            kind,
            perform,
        });
        self
    }

    pub fn formation_actions(&self) -> &[FormationAction] {
        &self.formation_actions
    }

    pub fn formation_action(&self, kind: FormationKind) -> Option<&FormationAction> {
        self.formation_actions.iter().find(|fa| fa.kind == kind)
    }

    pub fn formation_action_for(&self, formation: &Formation) -> Option<&FormationAction> {
        self.formation_action(formation.kind())
    }

    /// The lowest level at which the action is called from any formation.
    pub fn level(&self) -> Option<Level> {
        self.formation_actions.iter().map(|fa| fa.level).min()
    }
}

/// Every defined action, by name.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new action, returning it so implementations can be added.
    pub fn define_action(&mut self, name: &str, description: &str) -> Result<&mut Action> {
        if self.find_action(name).is_some() {
            return Err(FormationError::DuplicateAction(name.to_string()));
        }
        self.actions.push(Action {
            name: name.to_string(),
            description: description.to_string(),
            formation_actions: Vec::new(),
        });
        let index = self.actions.len() - 1;
        Ok(&mut self.actions[index])
    }

    pub fn find_action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn find_action_mut(&mut self, name: &str) -> Option<&mut Action> {
        self.actions.iter_mut().find(|a| a.name == name)
    }

    pub fn action(&self, name: &str) -> Result<&Action> {
        self.find_action(name)
            .ok_or_else(|| FormationError::UnknownAction(name.to_string()))
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Perform the named action on a recognised formation.
    pub fn perform(&self, name: &str, formation: &Formation) -> Result<()> {
        let action = self.action(name)?;
        match action.formation_action_for(formation) {
            Some(fa) => fa.perform(formation),
            None => Err(FormationError::ActionInapplicable {
                action: name.to_string(),
                kind: formation.kind(),
            }),
        }
    }
}
