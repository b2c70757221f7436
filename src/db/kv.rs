//! Durable key-value storage behind the board state.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;

/// Minimal string-to-string store, modelled on a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Key-value store kept in the `kv_store` table of the SQLite database.
pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    /// Open (and migrate) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open_initialized(path)?,
        })
    }

    /// Underlying connection, shared with the audit log.
    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, now])?;
        Ok(())
    }
}

/// In-process store: nothing survives the process. Handy for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like a full browser quota.
    pub fn read_only() -> Self {
        Self {
            entries: HashMap::new(),
            read_only: true,
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::Storage(format!(
                "store is read-only, cannot write '{}'",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store the CLI runs on: the configured database, or an in-process board
/// when that database cannot be opened.
pub enum BoardKv {
    Sqlite(SqliteKv),
    Memory(MemoryKv),
}

impl BoardKv {
    /// Connection for the audit log, absent when running in memory.
    pub fn conn(&self) -> Option<&Connection> {
        match self {
            BoardKv::Sqlite(kv) => Some(kv.conn()),
            BoardKv::Memory(_) => None,
        }
    }
}

impl KeyValueStore for BoardKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            BoardKv::Sqlite(kv) => kv.get(key),
            BoardKv::Memory(kv) => kv.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        match self {
            BoardKv::Sqlite(kv) => kv.set(key, value),
            BoardKv::Memory(kv) => kv.set(key, value),
        }
    }
}
