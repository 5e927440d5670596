//! Fourbyte - Function-selector signature database.
//!
//! Resolves 4-byte EVM function selectors to human-readable signatures
//! and maintains the SQLite database behind that resolution.
//!
//! # Components
//!
//! - [`Resolver`]: lookup engine — all candidate interpretations of a
//!   selector, or a single best guess ranked by co-occurrence
//! - [`Ingestor`]: offline pipeline filling the stores from contract ABIs
//! - [`SignatureStore`] / [`CompactStore`]: the two SQLite store shapes
//! - [`bundle`]: first-use materialization of the shipped snapshot
//! - [`fallback`]: compiled-in seed signatures for not-yet-ingested
//!   selectors
//!
//! # Example
//!
//! ```rust,ignore
//! use fourbyte::Resolver;
//! use fourbyte_common::Selector;
//!
//! let resolver = Resolver::open_materialized(&db_path, &bundle_path)?;
//! if let Some(record) = resolver.fetch_best("0xa9059cbb".parse()?)? {
//!     println!("{}", record.folded_name);
//! }
//! ```

pub mod bundle;
pub mod fallback;
pub mod ingest;
pub mod resolver;
pub mod store;

// Re-export commonly used types for consumers
pub use fourbyte_abi::{AbiEntry, AbiInput, Param};
pub use fourbyte_common::Selector;

pub use ingest::{CrawlSummary, IngestError, IngestReport, Ingestor};
pub use resolver::{Resolver, SignatureRecord};
pub use store::{CompactStore, SignatureStore, StoreError, StoredSignature};
