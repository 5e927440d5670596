//! Fourbyte Crawl - ABI ingestion job
//!
//! Detached maintenance job that refills the signature database from a
//! directory of pre-fetched contract ABIs. Not part of the interactive
//! resolution path.
//!
//! # Usage
//!
//! ```bash
//! # Ingest ./cache_abis into ./signatures.db + ./signatures-compact.db
//! fourbyte-crawl
//!
//! # Explicit locations
//! fourbyte-crawl --abi-dir /data/abis --db-path /data/signatures.db
//! ```

mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use fourbyte::{CompactStore, Ingestor, SignatureStore};
use fourbyte_common::paths::resolve_user_path;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .init();

    tracing::info!("Starting Fourbyte ABI crawl");
    tracing::info!("ABI directory: {}", config.abi_dir);
    tracing::info!("Primary database: {}", config.db_path);
    tracing::info!("Compact database: {}", config.compact_db_path);

    let primary = SignatureStore::open(&resolve_user_path(&config.db_path))?;
    let compact = CompactStore::open(&resolve_user_path(&config.compact_db_path))?;
    let ingestor = Ingestor::new(primary, compact);

    let summary = ingestor.crawl_dir(&resolve_user_path(&config.abi_dir))?;

    tracing::info!(
        files = summary.files,
        skipped_files = summary.skipped_files,
        functions = summary.report.functions,
        inserted = summary.report.inserted,
        compact_inserted = summary.report.compact_inserted,
        collisions = summary.report.collisions,
        malformed = summary.report.malformed,
        "Crawl finished"
    );

    Ok(())
}
