//! Operation vocabulary: the nouns and verbs that name every command

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a command acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Noun {
    Board,
    Column,
    Task,
    Subtask,
    Theme,
}

/// What a command does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Add,
    Delete,
    Switch,
    Rename,
    Color,
    Sort,
    Clear,
    Star,
    Duplicate,
    Toggle,
    Move,
    Set,
}

impl Noun {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Column => "column",
            Self::Task => "task",
            Self::Subtask => "subtask",
            Self::Theme => "theme",
        }
    }
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Switch => "switch",
            Self::Rename => "rename",
            Self::Color => "color",
            Self::Sort => "sort",
            Self::Clear => "clear",
            Self::Star => "star",
            Self::Duplicate => "duplicate",
            Self::Toggle => "toggle",
            Self::Move => "move",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(Verb::Duplicate.to_string(), "duplicate");
        assert_eq!(
            serde_json::to_string(&Noun::Subtask).unwrap(),
            format!("\"{}\"", Noun::Subtask)
        );
    }
}
