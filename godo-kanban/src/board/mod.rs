//! Board commands

mod add;
mod delete;
mod rename;
mod switch;

pub use add::AddBoard;
pub use delete::DeleteBoard;
pub use rename::RenameBoard;
pub use switch::SwitchBoard;
