//! # Shared Crypto - Chain Hash Primitive
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | BLAKE-256 (14 rounds) | Transaction ids, merkle roots, block hashes |
//!
//! Every consensus identifier is a BLAKE-256 digest over a bit-exact wire
//! serialization. Swapping the digest forks the network.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;

// Re-exports
pub use hashing::{blake256, blake256_many, Blake256Hasher, Digest256, HASH_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
