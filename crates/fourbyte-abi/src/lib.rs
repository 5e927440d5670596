//! ABI canonicalization and selector hashing for Fourbyte
//!
//! This library turns contract ABI function descriptors into the canonical
//! signature form the signature database is keyed by.
//!
//! # Components
//!
//! - [`canonical`]: folds a function descriptor into its canonical
//!   `name(type,type,...)` signature, expanding nested tuple types and
//!   normalizing parameter names
//! - [`selector`]: derives the 4-byte selector from a canonical signature
//!   (first 4 bytes of the Keccak-256 hash)

pub mod canonical;
pub mod selector;

// Re-export main types for convenience
pub use canonical::{canonicalize, AbiEntry, AbiError, AbiInput, CanonicalSignature, Param};
pub use selector::selector_of;
