//! Two-phase task deletion.
//!
//! ```text
//! Idle ──request(i)──▶ Pending(i) ──confirm──▶ delete_task(i) ──▶ Idle
//!                          │
//!                          └──cancel──▶ Idle
//! ```
//!
//! Only whole tasks go through confirmation; subtasks are deleted directly.

use log::debug;

use crate::models::AppState;

impl AppState {
    /// Marks the task at `index` as awaiting confirmation. A newer request
    /// replaces an older one.
    pub fn request_task_deletion(&self, index: usize) -> Self {
        debug_assert!(
            index < self.tasks.len(),
            "task index {index} out of range (len {})",
            self.tasks.len()
        );
        if index >= self.tasks.len() {
            return self.clone();
        }
        let mut next = self.clone();
        next.pending_deletion = Some(index);
        next
    }

    /// Drops the pending request without touching the tasks.
    pub fn cancel_task_deletion(&self) -> Self {
        let mut next = self.clone();
        next.pending_deletion = None;
        next
    }

    /// Deletes the task awaiting confirmation. Does nothing when no request
    /// is pending.
    pub fn confirm_task_deletion(&self) -> Self {
        match self.pending_deletion {
            Some(index) => self.delete_task(index),
            None => {
                debug!("No pending deletion to confirm");
                self.clone()
            }
        }
    }
}
