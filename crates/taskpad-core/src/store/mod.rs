//! The state store: owner of the canonical [`AppState`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Action      │    │   Transition    │    │     Storage     │
//! │ (one UI event)  │───▶│ (AppState::     │───▶│ (save changed   │
//! │                 │    │  apply, pure)   │    │  keys)          │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                                        │
//!                                           commit + notify subscribers
//! ```
//!
//! ## Submodules
//!
//! - [`action`]: the [`Action`] event type and its reducer
//! - [`builder`]: factory for a store backed by on-disk storage
//! - [`task_ops`]: task transitions, including cascading completion
//! - [`subtask_ops`]: subtask transitions and the composing buffer
//! - [`deletion`]: the two-phase task delete
//!
//! `dispatch` takes `&mut self`, so "apply, persist, commit" for one action
//! always finishes before the next one starts. A failed save leaves the
//! in-memory state exactly as it was.
//!
//! # Example
//!
//! ```rust
//! use taskpad_core::{MemoryStorage, Store};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = Store::initialize(MemoryStorage::new())?;
//! assert_eq!(store.state().tasks[0].title, "Default Task");
//!
//! store.add_task("Buy milk")?;
//! store.set_pending_subtask_text(1, "Eggs")?;
//! store.add_subtask(1)?;
//! store.toggle_task_completion(1)?;
//!
//! let task = &store.state().tasks[1];
//! assert!(task.completed && task.subtasks[0].completed);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::{debug, info};

pub mod action;
pub mod builder;
pub mod deletion;
pub mod subtask_ops;
pub mod task_ops;


pub use action::Action;
pub use builder::StoreBuilder;

use crate::{
    error::Result,
    models::{AppState, Theme},
    storage::{
        codec::{decode_tasks, decode_theme, encode_tasks, encode_theme},
        Storage, LEGACY_DARK_MODE_KEY, TASKS_KEY, THEME_KEY,
    },
};

/// Callback invoked with each new snapshot.
type Subscriber = Box<dyn FnMut(&AppState)>;

/// Owns the application state and mirrors it to storage.
pub struct Store<S: Storage> {
    state: AppState,
    storage: S,
    subscribers: Vec<Subscriber>,
}

impl<S: Storage> Store<S> {
    /// Hydrates the state from `storage`.
    ///
    /// Missing, empty or malformed task data seeds a single default task;
    /// a missing or malformed theme falls back to light. A theme is read
    /// from the older dark-mode key when no theme was ever saved. Only
    /// errors from the storage backend itself are returned.
    pub fn initialize(storage: S) -> Result<Self> {
        let tasks = decode_tasks(storage.load(TASKS_KEY)?.as_deref());
        let stored_theme = match storage.load(THEME_KEY)? {
            Some(raw) => Some(raw),
            None => storage.load(LEGACY_DARK_MODE_KEY)?,
        };
        let theme = decode_theme(stored_theme.as_deref());
        let state = AppState::from_parts(tasks, theme);
        info!(
            "Loaded {} task(s) with {} theme",
            state.tasks.len(),
            state.theme.as_str()
        );
        Ok(Self {
            state,
            storage,
            subscribers: Vec::new(),
        })
    }

    /// The current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Registers a callback run after every committed change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies one action: validate, transition, persist, commit, notify.
    ///
    /// Actions that leave the state unchanged (blank input, confirming with
    /// nothing pending) neither save nor notify.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TaskNotFound` / `StoreError::SubtaskNotFound`
    /// for indices outside the current snapshot, or the storage error when
    /// saving fails.
    pub fn dispatch(&mut self, action: Action) -> Result<&AppState> {
        debug!("dispatch: {action:?}");
        action.validate(&self.state)?;

        let next = self.state.apply(&action);
        if next == self.state {
            debug!("No change for {action:?}");
            return Ok(&self.state);
        }

        self.persist(&next)?;
        self.state = next;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        Ok(&self.state)
    }

    /// Saves each key whose persisted value differs between the current
    /// state and `next`.
    fn persist(&mut self, next: &AppState) -> Result<()> {
        let committed = next.committed_tasks();
        if committed != self.state.committed_tasks() {
            debug!("Saving {} task(s)", committed.len());
            self.storage.save(TASKS_KEY, &encode_tasks(&committed)?)?;
        }
        if next.theme != self.state.theme {
            debug!("Saving theme {}", next.theme.as_str());
            self.storage.save(THEME_KEY, &encode_theme(next.theme)?)?;
        }
        Ok(())
    }

    pub fn add_task(&mut self, title: &str) -> Result<&AppState> {
        self.dispatch(Action::AddTask {
            title: title.to_string(),
        })
    }

    pub fn rename_task(&mut self, index: usize, title: &str) -> Result<&AppState> {
        self.dispatch(Action::RenameTask {
            index,
            title: title.to_string(),
        })
    }

    pub fn toggle_task_editing(&mut self, index: usize) -> Result<&AppState> {
        self.dispatch(Action::ToggleTaskEditing { index })
    }

    pub fn toggle_task_completion(&mut self, index: usize) -> Result<&AppState> {
        self.dispatch(Action::ToggleTaskCompletion { index })
    }

    pub fn request_task_deletion(&mut self, index: usize) -> Result<&AppState> {
        self.dispatch(Action::RequestTaskDeletion { index })
    }

    pub fn cancel_task_deletion(&mut self) -> Result<&AppState> {
        self.dispatch(Action::CancelTaskDeletion)
    }

    pub fn confirm_task_deletion(&mut self) -> Result<&AppState> {
        self.dispatch(Action::ConfirmTaskDeletion)
    }

    pub fn add_subtask(&mut self, task: usize) -> Result<&AppState> {
        self.dispatch(Action::AddSubtask { task })
    }

    pub fn rename_subtask(&mut self, task: usize, index: usize, text: &str) -> Result<&AppState> {
        self.dispatch(Action::RenameSubtask {
            task,
            index,
            text: text.to_string(),
        })
    }

    pub fn toggle_subtask_editing(&mut self, task: usize, index: usize) -> Result<&AppState> {
        self.dispatch(Action::ToggleSubtaskEditing { task, index })
    }

    pub fn toggle_subtask_completion(&mut self, task: usize, index: usize) -> Result<&AppState> {
        self.dispatch(Action::ToggleSubtaskCompletion { task, index })
    }

    pub fn delete_subtask(&mut self, task: usize, index: usize) -> Result<&AppState> {
        self.dispatch(Action::DeleteSubtask { task, index })
    }

    pub fn set_pending_subtask_text(&mut self, task: usize, text: &str) -> Result<&AppState> {
        self.dispatch(Action::SetPendingSubtaskText {
            task,
            text: text.to_string(),
        })
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<&AppState> {
        self.dispatch(Action::SetTheme(theme))
    }

    pub fn toggle_theme(&mut self) -> Result<&AppState> {
        self.dispatch(Action::ToggleTheme)
    }
}
