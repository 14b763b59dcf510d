//! Data models for the board.
//!
//! - [`Task`]: one card on the board
//! - [`TaskStatus`]: workflow state, which also decides the column (todo, inProgress, done)
//! - [`TaskPriority`]: badge level (high, medium, low)

mod task;
mod types;

pub use task::Task;
pub use types::{TaskPriority, TaskStatus};
