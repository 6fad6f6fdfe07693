//! Theme commands

mod set;
mod toggle;

pub use set::SetTheme;
pub use toggle::ToggleTheme;
