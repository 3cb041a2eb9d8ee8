//! Builder for creating stores backed by on-disk storage.

use std::path::{Path, PathBuf};

use super::Store;
use crate::{
    error::{Result, StoreError},
    storage::SqliteStorage,
};

/// Builder for creating and configuring [`Store`] instances.
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    storage_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { storage_path: None }
    }

    /// Sets a custom storage file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/taskpad/taskpad.db` or `~/.local/share/taskpad/taskpad.db`
    pub fn with_storage_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the storage and hydrates the store from it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the parent directory cannot be
    /// created, `StoreError::XdgDirectory` if no default location can be
    /// resolved, `StoreError::Database` if the storage cannot be opened.
    pub fn build(self) -> Result<Store<SqliteStorage>> {
        let path = match self.storage_path {
            Some(path) => path,
            None => Self::default_storage_path()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Store::initialize(SqliteStorage::open(&path)?)
    }

    /// Returns the default storage path following XDG Base Directory
    /// specification.
    fn default_storage_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("taskpad")
            .place_data_file("taskpad.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
