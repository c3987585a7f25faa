//! # Error Types
//!
//! Errors raised while parsing or deriving wire-level values.

use thiserror::Error;

/// Wire model errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Hash text is not 64 hex characters.
    #[error("Invalid hash length: {length} characters, expected 64")]
    InvalidHashLength { length: usize },

    /// Hash text contains non-hex characters.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Serialization type outside the known range.
    #[error("Unknown transaction serialization type: {0}")]
    UnknownSerType(u16),

    /// A merkle root needs at least one leaf.
    #[error("Cannot derive merkle root of an empty transaction list")]
    EmptyMerkleTree,

    /// Multi-leaf trees are built by the block validator.
    #[error("Merkle tree with {count} leaves is not derived here")]
    MultiLeafMerkleTree { count: usize },
}
