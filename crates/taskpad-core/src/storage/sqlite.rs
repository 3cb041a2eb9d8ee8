//! SQLite storage backend.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::Storage;
use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value) VALUES (?1, ?2) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// Key-value storage in a single SQLite table.
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Database living only as long as this value.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        let storage = Self { connection };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

impl Storage for SqliteStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value])
            .db_context("Failed to write stored value")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let mut storage = SqliteStorage::open_in_memory().expect("open");
        assert_eq!(storage.load("tasks").expect("load"), None);

        storage.save("tasks", "[1]").expect("save");
        storage.save("tasks", "[2]").expect("overwrite");
        assert_eq!(storage.load("tasks").expect("load").as_deref(), Some("[2]"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("store.db");

        {
            let mut storage = SqliteStorage::open(&path).expect("open");
            storage.save("theme", "\"dark\"").expect("save");
        }

        let storage = SqliteStorage::open(&path).expect("reopen");
        assert_eq!(storage.load("theme").expect("load").as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut storage = SqliteStorage::open_in_memory().expect("open");
        storage.save("tasks", "[]").expect("save");
        storage.save("theme", "\"light\"").expect("save");
        assert_eq!(storage.load("tasks").expect("load").as_deref(), Some("[]"));
        assert_eq!(storage.load("theme").expect("load").as_deref(), Some("\"light\""));
    }
}
