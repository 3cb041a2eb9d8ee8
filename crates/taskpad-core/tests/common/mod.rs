use taskpad_core::{SqliteStorage, Store, StoreBuilder};
use tempfile::TempDir;

/// Helper function to create a store backed by a temporary database
pub fn create_test_store() -> (TempDir, Store<SqliteStorage>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    (temp_dir, store)
}

/// Reopens the store in `temp_dir`, as a fresh process would
pub fn open_store(temp_dir: &TempDir) -> Store<SqliteStorage> {
    StoreBuilder::new()
        .with_storage_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to create store")
}
