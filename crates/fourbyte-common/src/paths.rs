//! Filesystem locations for the signature database.

use std::path::{Path, PathBuf};

use resolve_path::PathResolveExt;

/// File name of the materialized primary store inside the cache directory.
pub const SNAPSHOT_DB_NAME: &str = "signatures.db";

/// File name of the bundled compressed snapshot inside the package data
/// directory.
pub const SNAPSHOT_BUNDLE_NAME: &str = "signatures.db.zst";

/// Default per-user cache directory, honoring the `FOURBYTE_CACHE_DIR`
/// override.
pub fn default_cache_dir() -> PathBuf {
    match std::env::var_os("FOURBYTE_CACHE_DIR") {
        Some(dir) => resolve_user_path(&dir.to_string_lossy()),
        None => resolve_user_path("~/.cache/fourbyte"),
    }
}

/// Location of the materialized primary store under a cache directory.
pub fn snapshot_db_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join(SNAPSHOT_DB_NAME)
}

/// Expand `~` and relative components of a user-supplied path.
pub fn resolve_user_path(raw: &str) -> PathBuf {
    PathBuf::from(raw).resolve().into_owned()
}
