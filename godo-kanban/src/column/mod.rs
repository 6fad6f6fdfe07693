//! Column commands

mod add;
mod clear;
mod color;
mod delete;
mod mv;
mod rename;
mod sort;

pub use add::AddColumn;
pub use clear::ClearCompleted;
pub use color::SetColumnColor;
pub use delete::DeleteColumn;
pub use mv::MoveColumn;
pub use rename::RenameColumn;
pub use sort::{SortColumn, SortMode};
