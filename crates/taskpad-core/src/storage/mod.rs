//! Durable key-value storage behind the store.
//!
//! The [`Storage`] trait is the whole contract: load a serialized value by
//! key, save one back. The store is its only caller; it loads once at
//! startup and saves after every change.
//!
//! - [`sqlite`]: on-disk backend used by the CLI
//! - [`memory`]: in-process backend for tests and throwaway sessions
//! - [`codec`]: JSON encoding of the task list and the theme

pub mod codec;
pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::Result;

/// Key holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

/// Key holding the serialized theme.
pub const THEME_KEY: &str = "theme";

/// Key under which older data kept a JSON boolean dark-mode flag. Only
/// read, and only when [`THEME_KEY`] is absent.
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

/// Get/set by string key, values are serialized text.
pub trait Storage {
    /// Returns the stored value, or `None` if the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}
