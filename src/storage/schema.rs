//! Database schema and connection management

use crate::core::cache::cache_root;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Connection to the widget database
pub struct FormDatabase {
    pub(crate) conn: Connection,
}

impl FormDatabase {
    /// Open the database under the user's cache directory, creating it if needed
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path())
    }

    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Fresh in-memory database, mainly for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Path: ~/.cache/pl-form/widgets.db
    pub fn database_path() -> PathBuf {
        cache_root().join("widgets.db")
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS widgets (
                id TEXT PRIMARY KEY,
                team_name TEXT NOT NULL DEFAULT '',
                position INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_widget_position ON widgets(position)",
            [],
        )?;

        Ok(())
    }
}
