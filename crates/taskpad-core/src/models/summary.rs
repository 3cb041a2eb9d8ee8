//! Task summary with subtask progress.

use super::Task;

/// Compact view of a task used for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    /// Position of the task in the list
    pub index: usize,
    /// Title of the task
    pub title: String,
    /// Completion flag of the task itself
    pub completed: bool,
    /// Total number of subtasks
    pub total_subtasks: usize,
    /// Number of completed subtasks
    pub completed_subtasks: usize,
}

impl TaskSummary {
    pub fn from_task(index: usize, task: &Task) -> Self {
        Self {
            index,
            title: task.title.clone(),
            completed: task.completed,
            total_subtasks: task.subtasks.len(),
            completed_subtasks: task.completed_subtasks(),
        }
    }
}
