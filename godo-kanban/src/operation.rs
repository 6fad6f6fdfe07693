//! The command traits every operation implements.
//!
//! Commands are structs where the fields ARE the parameters. Each one names
//! itself with a verb and a noun, and executes synchronously against a
//! [`KanbanContext`].

use crate::context::KanbanContext;
use crate::error::Result;
use crate::types::{Noun, Verb};
use serde_json::Value;

/// What a command did to the model
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The model changed; the value describes what was touched
    Applied(Value),
    /// Nothing matched or the input was rejected; the model is untouched
    Unchanged,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The description of an applied change
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Applied(v) => Some(v),
            Self::Unchanged => None,
        }
    }

    /// Consume into the description of an applied change
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Applied(v) => Some(v),
            Self::Unchanged => None,
        }
    }
}

/// Naming metadata for a command
pub trait Operation {
    fn verb(&self) -> Verb;

    fn noun(&self) -> Noun;

    /// Canonical op string, e.g. "add task"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// A command that mutates the model
pub trait Execute: Operation {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome>;

    /// Whether an applied outcome should be snapshotted right away.
    ///
    /// Commands returning false leave persistence to the caller.
    fn persists(&self) -> bool {
        true
    }
}

/// Implement [`Operation`] for a command struct
macro_rules! operation {
    ($ty:ty, $verb:ident, $noun:ident) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> $crate::types::Verb {
                $crate::types::Verb::$verb
            }

            fn noun(&self) -> $crate::types::Noun {
                $crate::types::Noun::$noun
            }
        }
    };
}

pub(crate) use operation;

/// Trimmed text, or `None` when nothing but whitespace remains
pub(crate) fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
