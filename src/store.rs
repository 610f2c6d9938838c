//! Local record store: which pull request belongs to which branch.
//!
//! One SQLite table, keyed by branch name. The store is an advisory
//! cache; the hosting service remains authoritative and a record can go
//! stale (PR closed remotely) without prq noticing.

use std::path::PathBuf;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use crate::config::DB_PATH_VAR;
use crate::error::{PrqError, Result};

pub struct PrStore {
    conn: Connection,
}

impl PrStore {
    /// Create or open the store at the default location.
    pub fn open() -> Result<Self> {
        Self::open_at(Self::default_path()?)
    }

    /// Create or open the store at a specific path.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self {
            conn: Connection::open(&path)?,
        };
        store.init()?;
        Ok(store)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init()?;
        Ok(store)
    }

    fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_VAR) {
            return Ok(PathBuf::from(path));
        }
        let data = dirs::data_dir().ok_or_else(|| {
            PrqError::Config("could not determine a data directory for the record store".into())
        })?;
        Ok(data.join("prq").join("prq.sqlite"))
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS pull_requests (
                branch     TEXT PRIMARY KEY,
                number     INTEGER NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// The recorded PR number for a branch, if any.
    pub fn get(&self, branch: &str) -> Result<Option<u64>> {
        let number = self
            .conn
            .query_row(
                "SELECT number FROM pull_requests WHERE branch = ?1",
                [branch],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(number.map(|n| n as u64))
    }

    /// Record the PR number for a branch, replacing any previous record.
    pub fn record(&self, branch: &str, number: u64) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO pull_requests (branch, number, updated_at) VALUES (?1, ?2, ?3)",
            (branch, number as i64, Utc::now().to_rfc3339()),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_count(store: &PrStore, branch: &str) -> i64 {
        store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM pull_requests WHERE branch = ?1",
                [branch],
                |row| row.get(0),
            )
            .unwrap()
    }

    #[test]
    fn test_get_unknown_branch() {
        let store = PrStore::open_in_memory().unwrap();
        assert_eq!(store.get("feature/login").unwrap(), None);
    }

    #[test]
    fn test_record_and_get() {
        let store = PrStore::open_in_memory().unwrap();
        store.record("feature/login", 42).unwrap();
        assert_eq!(store.get("feature/login").unwrap(), Some(42));
    }

    #[test]
    fn test_record_replaces_instead_of_duplicating() {
        let store = PrStore::open_in_memory().unwrap();
        store.record("feature/login", 42).unwrap();
        store.record("feature/login", 43).unwrap();
        assert_eq!(store.get("feature/login").unwrap(), Some(43));
        assert_eq!(row_count(&store, "feature/login"), 1);
    }

    #[test]
    fn test_branches_are_independent() {
        let store = PrStore::open_in_memory().unwrap();
        store.record("feature/login", 1).unwrap();
        store.record("feature/signup", 2).unwrap();
        assert_eq!(store.get("feature/login").unwrap(), Some(1));
        assert_eq!(store.get("feature/signup").unwrap(), Some(2));
    }

    #[test]
    fn test_open_at_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prq.sqlite");
        let store = PrStore::open_at(path.clone()).unwrap();
        store.record("feature/login", 7).unwrap();
        assert!(path.exists());
    }
}
