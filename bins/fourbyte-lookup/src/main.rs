//! Fourbyte Lookup - selector resolution tool
//!
//! # Usage
//!
//! ```bash
//! # Best-guess interpretation
//! fourbyte-lookup 0xa9059cbb
//!
//! # Every known candidate, several selectors at once
//! fourbyte-lookup --all 0xa9059cbb 13c30ead
//! ```

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use fourbyte::bundle::bundled_snapshot_path;
use fourbyte::{Resolver, Selector, SignatureRecord};
use fourbyte_common::paths::{default_cache_dir, resolve_user_path, snapshot_db_path};

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let cache_dir = config
        .cache_dir
        .as_deref()
        .map_or_else(default_cache_dir, resolve_user_path);
    let bundle = config
        .bundle
        .as_deref()
        .map_or_else(bundled_snapshot_path, resolve_user_path);

    let resolver = Resolver::open_materialized(&snapshot_db_path(&cache_dir), &bundle)
        .context("opening the signature database")?;

    for raw in &config.selectors {
        let selector: Selector = raw
            .parse()
            .with_context(|| format!("parsing selector '{raw}'"))?;

        if config.all {
            let records = resolver.fetch_all(selector)?;
            if records.is_empty() {
                println!("{selector}: unknown");
            } else {
                for record in &records {
                    print_record(record);
                }
            }
        } else {
            match resolver.fetch_best(selector)? {
                Some(record) => print_record(&record),
                None => println!("{selector}: unknown"),
            }
        }
    }

    Ok(())
}

fn print_record(record: &SignatureRecord) {
    let args: Vec<String> = record
        .params
        .iter()
        .map(|param| format!("{} {}", param.ty, param.name))
        .collect();
    println!(
        "{}: {}({})  [seen with {} selector(s)]",
        record.selector,
        record.name,
        args.join(", "),
        record.cooccurs.len()
    );
}
