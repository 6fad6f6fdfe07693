//! Subtask commands
//!
//! Subtasks are addressed through their owning column and task.

mod add;
mod delete;
mod duplicate;
mod toggle;

pub use add::AddSubtask;
pub use delete::DeleteSubtask;
pub use duplicate::DuplicateSubtask;
pub use toggle::ToggleSubtask;
