//! Storage layer for the flow tracker.
//!
//! Persists the app state as JSON blobs in a single key-value table using
//! `rusqlite`. Each mutation replaces a whole value; there is no row-level
//! access to individual entries.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT NOT NULL);
//! ```
//!
//! | Key               | Value                                  |
//! |-------------------|----------------------------------------|
//! | `flowEntries`     | JSON array of entries                  |
//! | `customResources` | JSON array of custom resources         |
//! | `darkMode`        | `true` or `false`                      |
//!
//! A missing key reads as its default. Values are not versioned: the entry
//! JSON shape is the one [`FlowEntry`] serializes to.

use std::path::Path;

use ft_core::{CustomResource, FlowEntry};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const ENTRIES_KEY: &str = "flowEntries";
pub const RESOURCES_KEY: &str = "customResources";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored value could not be encoded or decoded.
    #[error("invalid JSON under {key}: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value store wrapper.
///
/// Wraps a `rusqlite::Connection`, so it is `Send` but not `Sync`.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens a store at the given path, creating it if necessary.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init()?;
        tracing::debug!(path = %path.display(), "Opened store");
        Ok(store)
    }

    /// Opens an in-memory store. Useful for testing.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Idempotent.
    fn init(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    // ========== Raw access ==========

    /// Raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.get(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw)
    }

    // ========== Typed access ==========

    /// The entry list in insertion order. Empty if never saved.
    pub fn load_entries(&self) -> Result<Vec<FlowEntry>, StoreError> {
        let entries: Vec<FlowEntry> = self.get_json(ENTRIES_KEY)?.unwrap_or_default();
        tracing::debug!(count = entries.len(), "Loaded entries");
        Ok(entries)
    }

    /// Replaces the stored entry list.
    pub fn save_entries(&self, entries: &[FlowEntry]) -> Result<(), StoreError> {
        self.set_json(ENTRIES_KEY, entries)?;
        tracing::debug!(count = entries.len(), "Saved entries");
        Ok(())
    }

    pub fn load_resources(&self) -> Result<Vec<CustomResource>, StoreError> {
        Ok(self.get_json(RESOURCES_KEY)?.unwrap_or_default())
    }

    pub fn save_resources(&self, resources: &[CustomResource]) -> Result<(), StoreError> {
        self.set_json(RESOURCES_KEY, resources)
    }

    /// Dark mode preference; `false` if never set.
    pub fn dark_mode(&self) -> Result<bool, StoreError> {
        Ok(self.get_json(DARK_MODE_KEY)?.unwrap_or(false))
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), StoreError> {
        self.set_json(DARK_MODE_KEY, &enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};

    fn table_columns(conn: &Connection, table: &str) -> Vec<String> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .expect("prepare table_info");
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .expect("query table_info");
        rows.map(|row| row.expect("table_info row")).collect()
    }

    fn sample_entry() -> FlowEntry {
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 7, 30, 0).unwrap();
        let mut entry = FlowEntry::new(ts, 300.0, 20.0);
        entry.color = Some("Clear".to_string());
        entry.concerns = Some(vec!["Straining".to_string()]);
        entry
    }

    #[test]
    fn open_in_memory_store() {
        assert!(Store::open_in_memory().is_ok());
    }

    #[test]
    fn schema_is_a_single_kv_table() {
        let store = Store::open_in_memory().expect("open in-memory store");
        assert_eq!(table_columns(&store.conn, "kv"), vec!["key", "value"]);
    }

    #[test]
    fn missing_keys_read_as_defaults() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.load_entries().unwrap().is_empty());
        assert!(store.load_resources().unwrap().is_empty());
        assert!(!store.dark_mode().unwrap());
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn entries_roundtrip() {
        let store = Store::open_in_memory().unwrap();
        let entries = vec![sample_entry()];
        store.save_entries(&entries).unwrap();
        assert_eq!(store.load_entries().unwrap(), entries);

        store.save_entries(&[]).unwrap();
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn entries_are_stored_as_camel_case_json() {
        let store = Store::open_in_memory().unwrap();
        store.save_entries(&[sample_entry()]).unwrap();
        let raw = store.get(ENTRIES_KEY).unwrap().unwrap();
        assert!(raw.starts_with(r#"[{"timestamp":"2024-01-05T07:30:00Z""#));
        assert!(raw.contains(r#""flowRate":15.0"#));
    }

    #[test]
    fn resources_roundtrip() {
        let store = Store::open_in_memory().unwrap();
        let resource = CustomResource::create("Guide", "example.com", "Reading").unwrap();
        store.save_resources(std::slice::from_ref(&resource)).unwrap();
        assert_eq!(store.load_resources().unwrap(), vec![resource]);
    }

    #[test]
    fn dark_mode_roundtrip() {
        let store = Store::open_in_memory().unwrap();
        store.set_dark_mode(true).unwrap();
        assert!(store.dark_mode().unwrap());
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        store.set_dark_mode(false).unwrap();
        assert!(!store.dark_mode().unwrap());
    }

    #[test]
    fn corrupt_value_is_an_error() {
        let store = Store::open_in_memory().unwrap();
        store.set(ENTRIES_KEY, "{not json").unwrap();
        let err = store.load_entries().unwrap_err();
        assert!(matches!(err, StoreError::Json { ref key, .. } if key == ENTRIES_KEY));
    }

    #[test]
    fn data_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ft.db");
        {
            let store = Store::open(&path).unwrap();
            store.save_entries(&[sample_entry()]).unwrap();
            store.set_dark_mode(true).unwrap();
        }
        let store = Store::open(&path).unwrap();
        assert_eq!(store.load_entries().unwrap().len(), 1);
        assert!(store.dark_mode().unwrap());
    }
}
