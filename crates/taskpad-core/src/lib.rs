//! Core library for the Taskpad task list.
//!
//! This crate holds the task/subtask data model, the pure transitions that
//! move it from one snapshot to the next, and the store that mirrors every
//! change to durable key-value storage.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): `Task`, `Subtask`, `Theme` and the `AppState`
//!   snapshot
//! - **Store** ([`store`]): owns the state, applies [`Action`]s, persists
//!   after each change and notifies subscribers
//! - **Storage** ([`storage`]): the load/save contract plus SQLite and
//!   in-memory backends and the JSON codec
//! - **Display** ([`display`]): markdown formatting for the rendering layer
//!
//! # Quick Start
//!
//! ```rust
//! use taskpad_core::{StoreBuilder, Theme};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::TempDir::new()?;
//! # let path = Some(dir.path().join("taskpad.db"));
//! let mut store = StoreBuilder::new().with_storage_path(path).build()?;
//!
//! store.add_task("Buy milk")?;
//! store.set_theme(Theme::Dark)?;
//!
//! for (index, task) in store.state().tasks.iter().enumerate() {
//!     println!("{index}: {}", task.title);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use display::{OperationStatus, TaskSummaries};
pub use error::{Result, StoreError};
pub use models::{AppState, Subtask, Task, TaskSummary, Theme, DEFAULT_TASK_TITLE};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{Action, Store, StoreBuilder};
