//! Storage - SQLite backend
//!
//! One `memories` table in a single database file.
//!
//! # Key Points
//! - The store only holds the database path; every operation opens its own
//!   connection and drops it before returning
//! - No UPDATE: memories are inserted, searched and deleted
//! - Substring search uses `instr`, so it is case-sensitive

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OpenFlags};
use tracing::debug;

use super::memory::{normalize_tags, validate_content, Memory};

/// Maximum number of rows returned by [`MemoryStore::search`]
pub const SEARCH_LIMIT: usize = 5;

/// File-backed memory store
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    /// Create a store for the database at `path`
    ///
    /// Nothing is opened here. Call [`MemoryStore::initialize`] before the
    /// first read on a fresh file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Database file this store works on
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection scoped to a single operation
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open database {}", self.path.display()))?;

        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }

    /// Ensure the table exists
    ///
    /// Idempotent. Also creates the parent directory of the database file.
    pub fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS memories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tags TEXT NOT NULL DEFAULT 'general',
                content TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_memories_timestamp ON memories(timestamp);
            "#,
        )?;

        debug!(path = %self.path.display(), "memory table ready");
        Ok(())
    }

    /// Save a new memory and return its id
    ///
    /// `tags` defaults to `general` when `None` or blank.
    pub fn save(&self, content: &str, tags: Option<&str>) -> Result<i64> {
        validate_content(content)?;
        let tags = normalize_tags(tags);
        self.insert(content, &tags, Utc::now())
    }

    fn insert(&self, content: &str, tags: &str, timestamp: DateTime<Utc>) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO memories (tags, content, timestamp) VALUES (?1, ?2, ?3)",
            params![
                tags,
                content,
                timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, tags, "memory saved");
        Ok(id)
    }

    /// Memories whose tags or content contain `query`, newest first
    ///
    /// Returns at most [`SEARCH_LIMIT`] rows. The match is a plain
    /// case-sensitive substring test.
    pub fn search(&self, query: &str) -> Result<Vec<Memory>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, tags, content, timestamp
            FROM memories
            WHERE instr(tags, ?1) > 0 OR instr(content, ?1) > 0
            ORDER BY timestamp DESC, id DESC
            LIMIT ?2
            "#,
        )?;

        let memories = stmt
            .query_map(params![query, SEARCH_LIMIT as i64], Self::row_to_memory)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(query, hits = memories.len(), "search finished");
        Ok(memories)
    }

    /// Most recent memories, newest first
    pub fn recent(&self, limit: usize) -> Result<Vec<Memory>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, tags, content, timestamp FROM memories ORDER BY timestamp DESC, id DESC LIMIT ?1",
        )?;

        let memories = stmt
            .query_map([limit as i64], Self::row_to_memory)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(memories)
    }

    /// Get a memory by id
    pub fn get(&self, id: i64) -> Result<Option<Memory>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, tags, content, timestamp FROM memories WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::row_to_memory);

        match result {
            Ok(memory) => Ok(Some(memory)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a memory by id
    ///
    /// Returns `true` if a row was removed. A missing id is not an error.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM memories WHERE id = ?1", [id])?;
        debug!(id, deleted, "delete finished");
        Ok(deleted > 0)
    }

    /// Delete every memory once `confirm` agrees
    ///
    /// `confirm` receives the current row count. Returns `None` when it
    /// declines (nothing is deleted), otherwise the number of rows removed.
    pub fn wipe_all<F>(&self, confirm: F) -> Result<Option<usize>>
    where
        F: FnOnce(usize) -> Result<bool>,
    {
        let total = self.count()?;
        if !confirm(total)? {
            debug!(total, "wipe declined");
            return Ok(None);
        }

        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM memories", [])?;
        debug!(deleted, "wipe finished");
        Ok(Some(deleted))
    }

    /// Number of stored memories
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM memories", [], |row| row.get(0))?;
        Ok(total as usize)
    }

    /// Convert a database row to a Memory
    fn row_to_memory(row: &rusqlite::Row) -> rusqlite::Result<Memory> {
        let timestamp_str: String = row.get("timestamp")?;
        let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    3,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;

        Ok(Memory {
            id: row.get("id")?,
            tags: row.get("tags")?,
            content: row.get("content")?,
            timestamp,
        })
    }
}
