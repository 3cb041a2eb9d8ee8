//! Application state snapshot.

use super::{Task, Theme};

/// Title given to the task seeded into an empty list.
pub const DEFAULT_TASK_TITLE: &str = "Default Task";

/// The complete state of the task list at one point in time.
///
/// Values of this type are never mutated in place by the store; every
/// transition produces a new snapshot (see [`crate::store::Action`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,

    /// Current visual theme
    pub theme: Theme,

    /// Position of the task awaiting delete confirmation
    pub pending_deletion: Option<usize>,
}

impl AppState {
    /// State with a single default task and the given theme.
    pub fn seeded(theme: Theme) -> Self {
        Self {
            tasks: vec![Task::new(DEFAULT_TASK_TITLE)],
            theme,
            pending_deletion: None,
        }
    }

    /// Builds a state from hydrated parts, seeding the default task when the
    /// list is empty.
    pub fn from_parts(tasks: Vec<Task>, theme: Theme) -> Self {
        if tasks.is_empty() {
            return Self::seeded(theme);
        }
        Self {
            tasks,
            theme,
            pending_deletion: None,
        }
    }

    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// The task awaiting delete confirmation, if any.
    pub fn pending_deletion_task(&self) -> Option<&Task> {
        self.pending_deletion.and_then(|index| self.tasks.get(index))
    }

    /// Persisted projection of the task list.
    pub fn committed_tasks(&self) -> Vec<Task> {
        self.tasks.iter().map(Task::committed).collect()
    }
}
