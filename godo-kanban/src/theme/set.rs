//! SetTheme command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::types::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetTheme {
    pub theme: Theme,
}

impl SetTheme {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

operation!(SetTheme, Set, Theme);

impl Execute for SetTheme {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let state = ctx.state_mut();
        if state.theme == self.theme {
            return Ok(Outcome::Unchanged);
        }
        state.theme = self.theme;
        Ok(Outcome::Applied(serde_json::json!({ "theme": self.theme })))
    }
}
