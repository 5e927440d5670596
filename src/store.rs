//! SQLite storage for the signature database
//!
//! Two store shapes back resolution:
//!
//! - [`SignatureStore`]: the primary `functions` table, keyed by the
//!   selector's canonical hex rendering. Append-only; one selector may
//!   accumulate multiple rows, each recording a different co-occurrence
//!   context observed during ingestion.
//! - [`CompactStore`]: the simplified variant keyed by the selector's
//!   integer value, one row per selector, no co-occurrence column. Serves
//!   consumers that only ever want a single candidate.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use fourbyte_common::Selector;
use rusqlite::{params, Connection};

/// Storage failure. Lookups propagate this rather than masking a broken
/// store as "no signatures known".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("SQLite Error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Params JSON Error: {0}")]
    Params(#[from] serde_json::Error),
    #[error("bundled snapshot not found at {0}")]
    SnapshotMissing(PathBuf),
}

/// Raw row of the primary `functions` table.
///
/// `params` is the JSON-encoded parameter array; `cooccurs` is the
/// comma-joined list of selector renderings seen together with this one.
#[derive(Debug, Clone)]
pub struct StoredSignature {
    pub hash: String,
    pub name: String,
    pub folded_name: String,
    pub params: String,
    pub cooccurs: String,
}

/// Primary signature store.
pub struct SignatureStore {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SignatureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureStore").finish_non_exhaustive()
    }
}

impl SignatureStore {
    /// Create or open the database and ensure its schema.
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path)?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA busy_timeout=5000;",
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS functions (
                hash TEXT NOT NULL,
                name TEXT NOT NULL,
                folded_name TEXT NOT NULL,
                params TEXT NOT NULL,
                cooccurs TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_functions_hash ON functions(hash)",
            [],
        )?;

        tracing::debug!(
            target: "fourbyte::store",
            path = %db_path.display(),
            "Primary signature store opened"
        );

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// All rows recorded for a selector, in store order.
    pub fn rows_for(&self, selector: Selector) -> Result<Vec<StoredSignature>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "SELECT hash, name, folded_name, params, cooccurs FROM functions WHERE hash = ?1",
        )?;

        let rows = stmt.query_map(params![selector.to_hex()], |row| {
            Ok(StoredSignature {
                hash: row.get(0)?,
                name: row.get(1)?,
                folded_name: row.get(2)?,
                params: row.get(3)?,
                cooccurs: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Whether a row with this exact `(hash, cooccurs)` pair already
    /// exists. Ingestion uses this to keep re-runs idempotent.
    pub fn contains(&self, selector: Selector, cooccurs: &str) -> Result<bool, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare_cached("SELECT 1 FROM functions WHERE hash = ?1 AND cooccurs = ?2 LIMIT 1")?;
        let found = stmt.exists(params![selector.to_hex(), cooccurs])?;
        Ok(found)
    }

    /// Append one row. Never overwrites; callers check [`contains`] first.
    ///
    /// [`contains`]: SignatureStore::contains
    pub fn insert(&self, row: &StoredSignature) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare_cached("INSERT INTO functions VALUES (?1, ?2, ?3, ?4, ?5)")?;
        stmt.execute(params![
            row.hash,
            row.name,
            row.folded_name,
            row.params,
            row.cooccurs
        ])?;
        Ok(())
    }

    /// Total row count (diagnostics and tests).
    pub fn len(&self) -> Result<usize, StoreError> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM functions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Whether the store holds no rows at all.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Simplified single-candidate store (integer-keyed, no co-occurrence).
pub struct CompactStore {
    conn: Arc<Mutex<Connection>>,
}

impl CompactStore {
    /// Create or open the database and ensure its schema.
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path)?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA busy_timeout=5000;",
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS functions (
                hash INTEGER NOT NULL,
                name TEXT NOT NULL,
                folded_name TEXT NOT NULL,
                params TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_functions_hash ON functions(hash)",
            [],
        )?;

        tracing::debug!(
            target: "fourbyte::store",
            path = %db_path.display(),
            "Compact signature store opened"
        );

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Whether any row exists for this selector.
    pub fn contains(&self, selector: Selector) -> Result<bool, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare_cached("SELECT 1 FROM functions WHERE hash = ?1 LIMIT 1")?;
        let found = stmt.exists(params![selector.as_u32()])?;
        Ok(found)
    }

    /// Record the first observed interpretation of a selector. Later
    /// observations for the same selector are not written; callers check
    /// [`contains`] first.
    ///
    /// [`contains`]: CompactStore::contains
    pub fn insert(
        &self,
        selector: Selector,
        name: &str,
        folded_name: &str,
        params_json: &str,
    ) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare_cached("INSERT INTO functions VALUES (?1, ?2, ?3, ?4)")?;
        stmt.execute(params![selector.as_u32(), name, folded_name, params_json])?;
        Ok(())
    }

    /// Total row count (diagnostics and tests).
    pub fn len(&self) -> Result<usize, StoreError> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM functions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Whether the store holds no rows at all.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
