//! Data models for tasks, subtasks and the application state.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! Tasks and subtasks have no identity beyond their position. Any index
//! held across a deletion must be re-derived from the current
//! [`AppState`] before it is used again.

pub mod state;
pub mod summary;
pub mod task;
pub mod theme;


pub use state::{AppState, DEFAULT_TASK_TITLE};
pub use summary::TaskSummary;
pub use task::{Subtask, Task};
pub use theme::Theme;
