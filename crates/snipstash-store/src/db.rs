//! SQLite connection handling.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tokio::task::spawn_blocking;

use crate::error::{Result, StoreError};

/// Async-safe handle to the snippets database.
///
/// `rusqlite::Connection` is not `Sync`, so a single connection lives behind
/// `Arc<Mutex<_>>` and every operation runs on `spawn_blocking` while holding
/// the lock. SQLite's atomic single-row inserts plus WAL reads give each
/// operation whole-record atomicity; no further locking is involved.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl Db {
    /// Open or create the database at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self> {
        let path_buf = path.to_path_buf();
        let conn = Connection::open(path).map_err(|e| StoreError::Sqlite {
            path: path_buf.clone(),
            cause: e.to_string(),
        })?;

        // WAL keeps readers unblocked during writes; busy_timeout retries on
        // lock instead of failing immediately.
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| StoreError::Sqlite {
            path: path_buf.clone(),
            cause: format!("pragma init failed: {e}"),
        })?;

        conn.execute_batch(SCHEMA).map_err(|e| StoreError::Sqlite {
            path: path_buf.clone(),
            cause: format!("schema init failed: {e}"),
        })?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: path_buf,
        })
    }

    /// Database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a closure against the connection on the blocking pool.
    pub async fn call<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();
        let path = self.path.clone();

        spawn_blocking(move || {
            // A poisoned mutex means a panic mid-operation; the connection
            // state can no longer be trusted.
            let guard = conn.lock().map_err(|_| StoreError::Sqlite {
                path: path.clone(),
                cause: "mutex poisoned, connection unusable".to_string(),
            })?;
            f(&guard)
        })
        .await
        .map_err(|e| StoreError::Sqlite {
            path: self.path.clone(),
            cause: format!("spawn_blocking failed: {e}"),
        })?
    }
}

/// Snippet records. AUTOINCREMENT keeps ids monotonic and never reused.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    code TEXT NOT NULL,
    language TEXT NOT NULL,
    category TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_snippets_language ON snippets(language);
CREATE INDEX IF NOT EXISTS idx_snippets_category ON snippets(category);
CREATE INDEX IF NOT EXISTS idx_snippets_created_at ON snippets(created_at);
"#;
