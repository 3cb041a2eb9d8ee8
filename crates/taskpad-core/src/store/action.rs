//! Events accepted by the store.

use crate::{
    error::{Result, StoreError},
    models::{AppState, Theme},
};

/// One user event, reduced by [`AppState::apply`].
///
/// Indices are positions in the snapshot the action is dispatched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTask { title: String },
    RenameTask { index: usize, title: String },
    ToggleTaskEditing { index: usize },
    ToggleTaskCompletion { index: usize },
    /// First phase of a task delete
    RequestTaskDeletion { index: usize },
    CancelTaskDeletion,
    ConfirmTaskDeletion,
    AddSubtask { task: usize },
    RenameSubtask { task: usize, index: usize, text: String },
    ToggleSubtaskEditing { task: usize, index: usize },
    ToggleSubtaskCompletion { task: usize, index: usize },
    DeleteSubtask { task: usize, index: usize },
    SetPendingSubtaskText { task: usize, text: String },
    SetTheme(Theme),
    ToggleTheme,
}

impl Action {
    /// Task position this action targets, if any.
    fn task_index(&self) -> Option<usize> {
        match self {
            Action::RenameTask { index, .. }
            | Action::ToggleTaskEditing { index }
            | Action::ToggleTaskCompletion { index }
            | Action::RequestTaskDeletion { index } => Some(*index),
            Action::AddSubtask { task }
            | Action::RenameSubtask { task, .. }
            | Action::ToggleSubtaskEditing { task, .. }
            | Action::ToggleSubtaskCompletion { task, .. }
            | Action::DeleteSubtask { task, .. }
            | Action::SetPendingSubtaskText { task, .. } => Some(*task),
            _ => None,
        }
    }

    /// Subtask position this action targets, if any.
    fn subtask_index(&self) -> Option<usize> {
        match self {
            Action::RenameSubtask { index, .. }
            | Action::ToggleSubtaskEditing { index, .. }
            | Action::ToggleSubtaskCompletion { index, .. }
            | Action::DeleteSubtask { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Checks that every index the action carries exists in `state`.
    pub fn validate(&self, state: &AppState) -> Result<()> {
        let Some(task_index) = self.task_index() else {
            return Ok(());
        };
        let task = state
            .task(task_index)
            .ok_or(StoreError::TaskNotFound { index: task_index })?;
        if let Some(index) = self.subtask_index() {
            if index >= task.subtasks.len() {
                return Err(StoreError::SubtaskNotFound {
                    task: task_index,
                    index,
                });
            }
        }
        Ok(())
    }
}

impl AppState {
    /// Computes the snapshot that follows `action`.
    pub fn apply(&self, action: &Action) -> Self {
        match action {
            Action::AddTask { title } => self.add_task(title),
            Action::RenameTask { index, title } => self.rename_task(*index, title),
            Action::ToggleTaskEditing { index } => self.toggle_task_editing(*index),
            Action::ToggleTaskCompletion { index } => self.toggle_task_completion(*index),
            Action::RequestTaskDeletion { index } => self.request_task_deletion(*index),
            Action::CancelTaskDeletion => self.cancel_task_deletion(),
            Action::ConfirmTaskDeletion => self.confirm_task_deletion(),
            Action::AddSubtask { task } => self.add_subtask(*task),
            Action::RenameSubtask { task, index, text } => self.rename_subtask(*task, *index, text),
            Action::ToggleSubtaskEditing { task, index } => {
                self.toggle_subtask_editing(*task, *index)
            }
            Action::ToggleSubtaskCompletion { task, index } => {
                self.toggle_subtask_completion(*task, *index)
            }
            Action::DeleteSubtask { task, index } => self.delete_subtask(*task, *index),
            Action::SetPendingSubtaskText { task, text } => {
                self.set_pending_subtask_text(*task, text)
            }
            Action::SetTheme(theme) => self.set_theme(*theme),
            Action::ToggleTheme => self.set_theme(self.theme.toggled()),
        }
    }

    pub fn set_theme(&self, theme: Theme) -> Self {
        let mut next = self.clone();
        next.theme = theme;
        next
    }
}
