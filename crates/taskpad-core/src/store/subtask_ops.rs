//! Subtask-level transitions.

use log::debug;

use super::task_ops::is_blank;
use crate::models::{AppState, Subtask};

impl AppState {
    /// Clones the state and applies `f` to subtask `index` of task `task`.
    fn with_subtask(&self, task: usize, index: usize, f: impl FnOnce(&mut Subtask)) -> Self {
        self.with_task(task, |parent| {
            debug_assert!(
                index < parent.subtasks.len(),
                "subtask index {index} out of range (len {})",
                parent.subtasks.len()
            );
            if let Some(subtask) = parent.subtasks.get_mut(index) {
                f(subtask);
            }
        })
    }

    /// Replaces the composing buffer of the task at `task`.
    pub fn set_pending_subtask_text(&self, task: usize, text: &str) -> Self {
        self.with_task(task, |parent| parent.pending_subtask_text = text.to_string())
    }

    /// Commits the composing buffer as a new subtask and clears it.
    ///
    /// A blank buffer is left untouched and nothing is appended.
    pub fn add_subtask(&self, task: usize) -> Self {
        if self
            .tasks
            .get(task)
            .is_some_and(|parent| is_blank(&parent.pending_subtask_text))
        {
            debug!("Ignoring blank subtask text for task {task}");
            return self.clone();
        }
        self.with_task(task, |parent| {
            let text = std::mem::take(&mut parent.pending_subtask_text);
            parent.subtasks.push(Subtask::new(text));
        })
    }

    pub fn rename_subtask(&self, task: usize, index: usize, text: &str) -> Self {
        self.with_subtask(task, index, |subtask| subtask.text = text.to_string())
    }

    pub fn toggle_subtask_editing(&self, task: usize, index: usize) -> Self {
        self.with_subtask(task, index, |subtask| subtask.editing = !subtask.editing)
    }

    /// Flips a single subtask. The parent's completion flag is left alone.
    pub fn toggle_subtask_completion(&self, task: usize, index: usize) -> Self {
        self.with_subtask(task, index, |subtask| subtask.completed = !subtask.completed)
    }

    /// Removes a subtask immediately; later subtasks shift down by one.
    pub fn delete_subtask(&self, task: usize, index: usize) -> Self {
        self.with_task(task, |parent| {
            debug_assert!(
                index < parent.subtasks.len(),
                "subtask index {index} out of range (len {})",
                parent.subtasks.len()
            );
            if index < parent.subtasks.len() {
                parent.subtasks.remove(index);
            }
        })
    }
}
