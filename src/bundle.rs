//! Lazy materialization of the bundled store snapshot
//!
//! The primary store ships as a zstd-compressed SQLite file in the
//! package's `data/` directory. On first use it is streamed (fixed-size
//! chunks) into the per-user cache location. The decompressed content is
//! deterministic, so losing a first-use race to another process is
//! harmless; writes go to a process-unique temporary path and are renamed
//! into place so no partial file is ever observable at the destination.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::store::StoreError;

const CHUNK_SIZE: usize = 1024 * 1024;

/// Location of the compressed snapshot inside the package tree.
pub fn bundled_snapshot_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(fourbyte_common::paths::SNAPSHOT_BUNDLE_NAME)
}

/// Make sure the decompressed store exists at `db_path`, hydrating it
/// from `bundle_path` when absent.
///
/// A missing bundle is only an error when the store itself is missing
/// too; an already-materialized store never touches the bundle.
pub fn ensure_snapshot(db_path: &Path, bundle_path: &Path) -> Result<(), StoreError> {
    if db_path.is_file() {
        return Ok(());
    }
    if !bundle_path.is_file() {
        return Err(StoreError::SnapshotMissing(bundle_path.to_path_buf()));
    }

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }

    tracing::info!(
        target: "fourbyte::bundle",
        bundle = %bundle_path.display(),
        dest = %db_path.display(),
        "Decompressing bundled snapshot"
    );

    let tmp_path = db_path.with_extension(format!("tmp.{}", std::process::id()));

    let mut decoder = zstd::stream::read::Decoder::new(File::open(bundle_path)?)?;
    let mut out = File::create(&tmp_path)?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let read = decoder.read(&mut buf)?;
        if read == 0 {
            break;
        }
        out.write_all(&buf[..read])?;
    }
    out.sync_all()?;
    drop(out);

    fs::rename(&tmp_path, db_path)?;
    Ok(())
}
