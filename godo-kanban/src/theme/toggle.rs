//! ToggleTheme command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use serde::{Deserialize, Serialize};

/// Switch between light and dark
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToggleTheme;

impl ToggleTheme {
    pub fn new() -> Self {
        Self
    }
}

operation!(ToggleTheme, Toggle, Theme);

impl Execute for ToggleTheme {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let state = ctx.state_mut();
        state.theme = state.theme.toggled();
        Ok(Outcome::Applied(serde_json::json!({ "theme": state.theme })))
    }
}
