//! Common utilities for Fourbyte
//!
//! Provides the `Selector` value type (4-byte function selector with its
//! canonical hex rendering) and filesystem path helpers shared by the
//! resolver library and the maintenance binaries.

pub mod paths;

use std::fmt;
use std::str::FromStr;

/// Error raised when a selector string cannot be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorParseError {
    #[error("empty selector string")]
    Empty,
    #[error("selector '{0}' is longer than 8 hex digits")]
    TooLong(String),
    #[error("selector '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// A 4-byte function selector.
///
/// Stored selectors are compared as their canonical rendering: lowercase
/// hex, `0x`-prefixed, zero-padded to 8 digits (10 characters total, e.g.
/// `0x13c30ead`). Parsing accepts any case, an optional `0x` prefix, and
/// short forms, which are zero-padded on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(u32);

impl Selector {
    /// Number of characters in the canonical rendering (`0x` + 8 digits).
    pub const CANONICAL_LEN: usize = 10;

    /// Build a selector from its raw integer value.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Build a selector from the first 4 bytes of a hash (big-endian).
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Raw integer value, as stored in the compact table.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Big-endian byte form.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Canonical 10-character rendering, as stored in the primary table.
    pub fn to_hex(self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for Selector {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl FromStr for Selector {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        if digits.is_empty() {
            return Err(SelectorParseError::Empty);
        }
        if digits.len() > 8 {
            return Err(SelectorParseError::TooLong(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Selector)
            .map_err(|_| SelectorParseError::InvalidDigit(s.to_string()))
    }
}
