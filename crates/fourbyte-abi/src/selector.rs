//! Selector derivation from canonical signatures

use alloy_primitives::keccak256;
use fourbyte_common::Selector;

/// Compute the 4-byte selector of a canonical signature: the first 4
/// bytes of the Keccak-256 hash of its UTF-8 bytes.
///
/// Stored selectors are compared against freshly computed ones during
/// ingestion, so this mapping must stay stable across platforms and
/// releases.
pub fn selector_of(folded_name: &str) -> Selector {
    let hash = keccak256(folded_name.as_bytes());
    Selector::from_bytes([hash[0], hash[1], hash[2], hash[3]])
}
