//! Configuration for the ABI crawler

use clap::Parser;

/// ABI crawler for the Fourbyte signature database
///
/// Walks a directory of pre-fetched contract ABIs (one JSON file per
/// contract address) and merges their function signatures into the
/// primary and compact stores. Safe to re-run: already-known rows are
/// skipped.
#[derive(Parser, Debug)]
#[command(name = "fourbyte-crawl")]
#[command(about = "Refill the signature database from cached contract ABIs", long_about = None)]
pub struct Config {
    /// Directory of ABI files, one `<address>.json` per contract
    #[arg(long, env = "FOURBYTE_ABI_DIR", default_value = "./cache_abis")]
    pub abi_dir: String,

    /// Primary signature database path
    #[arg(long, default_value = "./signatures.db")]
    pub db_path: String,

    /// Compact (single-candidate) database path
    #[arg(long, default_value = "./signatures-compact.db")]
    pub compact_db_path: String,
}
