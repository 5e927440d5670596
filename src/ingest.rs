//! ABI ingestion pipeline
//!
//! The offline half of the database: walks pre-fetched contract ABIs,
//! folds every function into its canonical signature, derives selectors,
//! and upserts the results into the primary and compact stores. Runs as a
//! detached maintenance job; the interactive resolution path never calls
//! into this module.
//!
//! Re-running over the same input is a no-op: the primary store is only
//! appended to when no row with the identical `(selector, cooccurs)` pair
//! exists, and the compact store keeps the first interpretation it saw.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use fourbyte_abi::{canonicalize, selector_of, AbiEntry, CanonicalSignature};
use fourbyte_common::Selector;
use itertools::Itertools;

use crate::store::{CompactStore, SignatureStore, StoreError, StoredSignature};

/// Ingestion failure. Defects scoped to one function or one file are
/// reported and skipped instead of surfacing here.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ABI directory not found: {0}")]
    AbiDirMissing(PathBuf),
}

/// Failure to load one ABI document from disk.
#[derive(Debug, thiserror::Error)]
pub enum AbiFileError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON Deserialize Error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Counters for one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Functions that survived filtering, canonicalization and collision
    /// checks.
    pub functions: usize,
    /// Rows appended to the primary store.
    pub inserted: usize,
    /// Rows appended to the compact store.
    pub compact_inserted: usize,
    /// Within-ABI selector conflicts (later declaration skipped).
    pub collisions: usize,
    /// Descriptors aborted as malformed.
    pub malformed: usize,
}

impl IngestReport {
    fn absorb(&mut self, other: &IngestReport) {
        self.functions += other.functions;
        self.inserted += other.inserted;
        self.compact_inserted += other.compact_inserted;
        self.collisions += other.collisions;
        self.malformed += other.malformed;
    }
}

/// Counters for one directory crawl.
#[derive(Debug, Clone, Default)]
pub struct CrawlSummary {
    /// ABI files ingested.
    pub files: usize,
    /// Files skipped as unreadable or unparseable.
    pub skipped_files: usize,
    /// Accumulated per-ABI counters.
    pub report: IngestReport,
}

struct PendingFunction {
    name: String,
    sig: CanonicalSignature,
}

/// Ingestion pipeline over one primary and one compact store.
pub struct Ingestor {
    primary: SignatureStore,
    compact: CompactStore,
}

impl Ingestor {
    pub fn new(primary: SignatureStore, compact: CompactStore) -> Self {
        Self { primary, compact }
    }

    /// Ingest one parsed ABI document.
    ///
    /// Malformed descriptors abort only the afflicted function; a
    /// within-ABI selector collision keeps the first declaration and
    /// skips the rest. Every surviving function's co-occurrence set is
    /// the full selector list of this ABI, itself included.
    pub fn ingest_abi(&self, abi: &[AbiEntry]) -> Result<IngestReport, StoreError> {
        let mut report = IngestReport::default();
        let mut pending: Vec<(Selector, PendingFunction)> = Vec::new();
        let mut seen: HashSet<Selector> = HashSet::new();

        for entry in abi {
            if !entry.is_function() {
                continue;
            }

            let sig = match canonicalize(&entry.name, &entry.inputs) {
                Ok(sig) => sig,
                Err(err) => {
                    tracing::warn!(
                        target: "fourbyte::ingest",
                        function = %entry.name,
                        error = %err,
                        "Skipping malformed function descriptor"
                    );
                    report.malformed += 1;
                    continue;
                }
            };

            let selector = selector_of(&sig.folded_name);
            if !seen.insert(selector) {
                tracing::warn!(
                    target: "fourbyte::ingest",
                    selector = %selector,
                    folded_name = %sig.folded_name,
                    "Selector collision within one ABI, keeping the first declaration"
                );
                report.collisions += 1;
                continue;
            }

            pending.push((
                selector,
                PendingFunction {
                    name: entry.name.clone(),
                    sig,
                },
            ));
        }

        // Selectors that appeared together in one contract are recorded
        // as seen together, itself included.
        let cooccurs = pending.iter().map(|(sel, _)| sel.to_hex()).join(",");
        report.functions = pending.len();

        for (selector, function) in &pending {
            let params_json = serde_json::to_string(&function.sig.params)?;

            if self.primary.contains(*selector, &cooccurs)? {
                tracing::debug!(
                    target: "fourbyte::ingest",
                    selector = %selector,
                    "Row already present, skipping"
                );
            } else {
                self.primary.insert(&StoredSignature {
                    hash: selector.to_hex(),
                    name: function.name.clone(),
                    folded_name: function.sig.folded_name.clone(),
                    params: params_json.clone(),
                    cooccurs: cooccurs.clone(),
                })?;
                report.inserted += 1;
                tracing::debug!(
                    target: "fourbyte::ingest",
                    selector = %selector,
                    folded_name = %function.sig.folded_name,
                    "Inserted signature"
                );
            }

            if !self.compact.contains(*selector)? {
                self.compact
                    .insert(*selector, &function.name, &function.sig.folded_name, &params_json)?;
                report.compact_inserted += 1;
            }
        }

        Ok(report)
    }

    /// Crawl a directory of per-contract ABI files (`<address>.json`, the
    /// stem being the contract address) and ingest each one. Unreadable
    /// or unparseable files are logged and skipped.
    pub fn crawl_dir(&self, dir: &Path) -> Result<CrawlSummary, IngestError> {
        if !dir.is_dir() {
            return Err(IngestError::AbiDirMissing(dir.to_path_buf()));
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut summary = CrawlSummary::default();

        for (index, path) in paths.iter().enumerate() {
            let address = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            match read_abi_file(path) {
                Ok(abi) => {
                    tracing::info!(
                        target: "fourbyte::ingest",
                        index = index + 1,
                        total = paths.len(),
                        address = %address,
                        "Ingesting ABI"
                    );
                    let report = self.ingest_abi(&abi)?;
                    summary.files += 1;
                    summary.report.absorb(&report);
                }
                Err(err) => {
                    tracing::warn!(
                        target: "fourbyte::ingest",
                        file = %path.display(),
                        error = %err,
                        "Skipping unreadable ABI file"
                    );
                    summary.skipped_files += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// Load one ABI document (a JSON array of function descriptors).
fn read_abi_file(path: &Path) -> Result<Vec<AbiEntry>, AbiFileError> {
    let data = fs::read_to_string(path)?;
    let abi = serde_json::from_str(&data)?;
    Ok(abi)
}
