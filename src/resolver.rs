//! Selector resolution
//!
//! [`Resolver`] owns the store handle and answers the two lookup shapes
//! the decompiler needs: every known interpretation of a selector
//! ([`Resolver::fetch_all`]) or a single best guess
//! ([`Resolver::fetch_best`]). Both fall back to the compiled-in seed
//! table when the store has no rows, and both treat "nothing known" as an
//! ordinary empty answer, never an error. Results are memoized per
//! selector so repeated lookups skip the store entirely.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use fourbyte_abi::Param;
use fourbyte_common::Selector;

use crate::bundle::ensure_snapshot;
use crate::fallback::{seed_lookup, SeedSignature};
use crate::store::{SignatureStore, StoreError, StoredSignature};

/// A resolved interpretation of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRecord {
    pub selector: Selector,
    pub name: String,
    pub folded_name: String,
    pub params: Vec<Param>,
    /// Selector renderings observed together with this one in some
    /// ingested contract. Seed-table records co-occur only with
    /// themselves.
    pub cooccurs: Vec<String>,
}

/// Resolution engine over one signature store.
#[derive(Debug)]
pub struct Resolver {
    store: SignatureStore,
    all_cache: Mutex<HashMap<Selector, Vec<SignatureRecord>>>,
    best_cache: Mutex<HashMap<Selector, Option<SignatureRecord>>>,
}

impl Resolver {
    /// Wrap an already-open store.
    pub fn new(store: SignatureStore) -> Self {
        Self {
            store,
            all_cache: Mutex::new(HashMap::new()),
            best_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Materialize the bundled snapshot into `db_path` if needed, then
    /// open it for resolution.
    pub fn open_materialized(db_path: &Path, bundle_path: &Path) -> Result<Self, StoreError> {
        ensure_snapshot(db_path, bundle_path)?;
        Ok(Self::new(SignatureStore::open(db_path)?))
    }

    /// Every known interpretation of `selector`.
    ///
    /// Zero store rows fall back to the seed table; a selector unknown to
    /// both yields an empty vec. Storage failures propagate and are not
    /// cached.
    pub fn fetch_all(&self, selector: Selector) -> Result<Vec<SignatureRecord>, StoreError> {
        if let Some(hit) = self.all_cache.lock().unwrap().get(&selector) {
            return Ok(hit.clone());
        }

        let rows = self.store.rows_for(selector)?;
        let records = if rows.is_empty() {
            match seed_lookup(selector) {
                Some(seed) => vec![seed_record(selector, seed)?],
                None => {
                    tracing::debug!(
                        target: "fourbyte::resolver",
                        selector = %selector,
                        "Selector unknown to store and seed table"
                    );
                    Vec::new()
                }
            }
        } else {
            rows.iter()
                .map(|row| expand_row(selector, row))
                .collect::<Result<Vec<_>, _>>()?
        };

        self.all_cache
            .lock()
            .unwrap()
            .insert(selector, records.clone());
        Ok(records)
    }

    /// The single most plausible interpretation of `selector`, or `None`.
    ///
    /// When several rows exist, the one whose co-occurrence set has the
    /// greatest cardinality wins: a selector seen alongside many others
    /// across ingested contracts is likelier to be the common
    /// interpretation than a rare alias or hash collision. Equal
    /// cardinality is broken by lexicographically smallest folded name.
    pub fn fetch_best(&self, selector: Selector) -> Result<Option<SignatureRecord>, StoreError> {
        if let Some(hit) = self.best_cache.lock().unwrap().get(&selector) {
            return Ok(hit.clone());
        }

        let rows = self.store.rows_for(selector)?;
        let best = if rows.is_empty() {
            match seed_lookup(selector) {
                Some(seed) => Some(seed_record(selector, seed)?),
                None => {
                    tracing::debug!(
                        target: "fourbyte::resolver",
                        selector = %selector,
                        "Selector unknown to store and seed table"
                    );
                    None
                }
            }
        } else {
            rows.iter()
                .map(|row| expand_row(selector, row))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .max_by(|a, b| {
                    (a.cooccurs.len().cmp(&b.cooccurs.len()))
                        .then_with(|| b.folded_name.cmp(&a.folded_name))
                })
        };

        self.best_cache.lock().unwrap().insert(selector, best.clone());
        Ok(best)
    }
}

/// Expand a raw store row into a record: params out of JSON, cooccurs out
/// of the comma-joined column.
fn expand_row(selector: Selector, row: &StoredSignature) -> Result<SignatureRecord, StoreError> {
    let params: Vec<Param> = serde_json::from_str(&row.params)?;
    let cooccurs = if row.cooccurs.is_empty() {
        Vec::new()
    } else {
        row.cooccurs.split(',').map(str::to_string).collect()
    };

    Ok(SignatureRecord {
        selector,
        name: row.name.clone(),
        folded_name: row.folded_name.clone(),
        params,
        cooccurs,
    })
}

/// Synthesize a record from a seed row. No co-occurrence data exists for
/// curated entries, so each one co-occurs only with itself.
fn seed_record(selector: Selector, seed: &SeedSignature) -> Result<SignatureRecord, StoreError> {
    let params: Vec<Param> = serde_json::from_str(seed.params)?;
    Ok(SignatureRecord {
        selector,
        name: seed.name.to_string(),
        folded_name: seed.folded_name.to_string(),
        params,
        cooccurs: vec![selector.to_hex()],
    })
}
