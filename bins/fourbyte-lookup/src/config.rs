//! Configuration for the lookup tool

use clap::Parser;

/// Selector lookup against the Fourbyte signature database
///
/// Materializes the bundled snapshot into the cache directory on first
/// use, then resolves each given selector.
#[derive(Parser, Debug)]
#[command(name = "fourbyte-lookup")]
#[command(about = "Resolve 4-byte selectors to function signatures", long_about = None)]
pub struct Config {
    /// Selectors to resolve (hex, with or without 0x prefix)
    #[arg(required = true)]
    pub selectors: Vec<String>,

    /// Print every candidate interpretation instead of the best one
    #[arg(long)]
    pub all: bool,

    /// Cache directory holding the materialized database
    #[arg(long, env = "FOURBYTE_CACHE_DIR")]
    pub cache_dir: Option<String>,

    /// Compressed snapshot to materialize the database from
    #[arg(long)]
    pub bundle: Option<String>,
}
