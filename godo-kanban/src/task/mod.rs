//! Task commands

mod add;
mod color;
mod delete;
mod duplicate;
mod mv;
mod star;

pub use add::AddTask;
pub use color::SetTaskColor;
pub use delete::DeleteTask;
pub use duplicate::DuplicateTask;
pub use mv::MoveTask;
pub use star::ToggleStar;
