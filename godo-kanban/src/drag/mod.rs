//! Drag-and-drop reordering.
//!
//! [`DragSession`] tracks the single drag in flight. The presentation layer
//! reports where the pointer is and which items sit under it; the geometry
//! functions turn that into an insertion anchor, and a drop yields an
//! ordinary [`MoveTask`](crate::task::MoveTask) or
//! [`MoveColumn`](crate::column::MoveColumn) command.

mod geometry;
mod session;

pub use geometry::{column_drop_target, task_drop_target, ColumnDrop, ItemBox, TaskDrop};
pub use session::{ColumnGrip, DragSession, TaskGrip};
