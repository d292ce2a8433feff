// src/util/database.rs
// Durable key/value storage behind the hub's persisted state

use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::{LinkHubError, Result};

/// Local durable key/value storage. Values are plain text.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct Database {
    pub(crate) app_conn: Arc<Mutex<Connection>>,
}

// Manual Debug implementation since Mutex<Connection> doesn't implement Debug
impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("app_conn", &"Arc<Mutex<Connection>>")
            .finish()
    }
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let app_conn = Connection::open(db_path)?;
        Self::from_connection(app_conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let db = Database {
            app_conn: Arc::new(Mutex::new(conn)),
        };
        db.init_core_tables()?;
        Ok(db)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.app_conn
            .lock()
            .map_err(|_| LinkHubError::StorageUnavailable("storage connection poisoned".to_string()))
    }

    fn init_core_tables(&self) -> Result<()> {
        let conn = self.lock()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT value FROM kv_store WHERE key = ?1")?;

        let mut rows = stmt.query_map(rusqlite::params![key], |row| row.get::<_, String>(0))?;

        let value = match rows.next() {
            Some(row) => Some(row?),
            None => None,
        };
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let timestamp = chrono::Utc::now().timestamp();

        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![key, value, timestamp],
        )?;

        Ok(())
    }
}

/// Volatile store, used when the database cannot be opened and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| LinkHubError::StorageUnavailable("memory store poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| LinkHubError::StorageUnavailable("memory store poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
