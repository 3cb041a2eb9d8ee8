//! Task and subtask model definitions.

use serde::{Deserialize, Serialize};

/// A top-level to-do item with an ordered list of subtasks.
///
/// Only `title`, `completed` and `subtasks` are persisted. The composing
/// buffer and the editing flag are transient UI state and come back empty
/// after a reload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Task {
    /// Display title; may be empty only while being edited
    pub title: String,

    /// Whether the task is marked complete
    #[serde(default)]
    pub completed: bool,

    /// Subtasks in insertion order
    #[serde(default)]
    pub subtasks: Vec<Subtask>,

    /// Text of the subtask currently being composed
    #[serde(skip)]
    pub pending_subtask_text: String,

    /// True while the title is being edited inline
    #[serde(skip)]
    pub editing: bool,
}

/// A child item that belongs to exactly one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Subtask {
    /// Display text; may be empty only while being edited
    pub text: String,

    /// Whether the subtask is marked complete
    #[serde(default)]
    pub completed: bool,

    /// True while the text is being edited inline
    #[serde(skip)]
    pub editing: bool,
}

impl Task {
    /// Creates an incomplete task with no subtasks.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Number of subtasks marked complete.
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    /// Drops transient UI state, keeping only the committed fields.
    pub fn committed(&self) -> Self {
        Self {
            title: self.title.clone(),
            completed: self.completed,
            subtasks: self.subtasks.iter().map(Subtask::committed).collect(),
            pending_subtask_text: String::new(),
            editing: false,
        }
    }
}

impl Subtask {
    /// Creates an incomplete subtask.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Drops transient UI state, keeping only the committed fields.
    pub fn committed(&self) -> Self {
        Self {
            text: self.text.clone(),
            completed: self.completed,
            editing: false,
        }
    }
}
