//! Task-level transitions.
//!
//! Each function takes the current snapshot by reference and returns the
//! next one. Indices must come from enumerating the snapshot they are
//! applied to; an out-of-range index trips a debug assertion and otherwise
//! leaves the state as it was.

use log::debug;

use crate::models::{AppState, Task};

/// True when the string is empty or whitespace only.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl AppState {
    /// Clones the state and applies `f` to the task at `index`.
    pub(crate) fn with_task(&self, index: usize, f: impl FnOnce(&mut Task)) -> Self {
        let mut next = self.clone();
        debug_assert!(
            index < next.tasks.len(),
            "task index {index} out of range (len {})",
            next.tasks.len()
        );
        if let Some(task) = next.tasks.get_mut(index) {
            f(task);
        }
        next
    }

    /// Appends a new task. Blank titles are ignored; the title is stored
    /// exactly as given, without trimming.
    pub fn add_task(&self, title: &str) -> Self {
        if is_blank(title) {
            debug!("Ignoring blank task title");
            return self.clone();
        }
        let mut next = self.clone();
        next.tasks.push(Task::new(title));
        next
    }

    /// Replaces the title of the task at `index`.
    pub fn rename_task(&self, index: usize, title: &str) -> Self {
        self.with_task(index, |task| task.title = title.to_string())
    }

    pub fn toggle_task_editing(&self, index: usize) -> Self {
        self.with_task(index, |task| task.editing = !task.editing)
    }

    /// Flips the task's completion and forces every subtask to the new value.
    ///
    /// Completion only cascades downward: toggling subtasks never changes
    /// the parent, so a task may stay open with all subtasks done.
    pub fn toggle_task_completion(&self, index: usize) -> Self {
        self.with_task(index, |task| {
            task.completed = !task.completed;
            let completed = task.completed;
            for subtask in &mut task.subtasks {
                subtask.completed = completed;
            }
        })
    }

    /// Removes the task at `index`; later tasks shift down by one.
    ///
    /// Any outstanding delete request is dropped since its index may no
    /// longer point at the same task.
    pub fn delete_task(&self, index: usize) -> Self {
        let mut next = self.clone();
        debug_assert!(
            index < next.tasks.len(),
            "task index {index} out of range (len {})",
            next.tasks.len()
        );
        if index < next.tasks.len() {
            next.tasks.remove(index);
        }
        next.pending_deletion = None;
        next
    }
}
