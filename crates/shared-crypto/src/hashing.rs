//! # BLAKE-256 Hashing
//!
//! The 14-round BLAKE-256 digest (SHA-3 finalist) that anchors every
//! transaction identifier and block hash on the chain.
//!
//! Output bytes are returned in digest order. Human-readable renderings
//! reverse them; see `shared_types::Hash`.

use blake_hash::{Blake256, Digest};

/// Size of a BLAKE-256 digest in bytes.
pub const HASH_SIZE: usize = 32;

/// BLAKE-256 hash output (256-bit).
pub type Digest256 = [u8; HASH_SIZE];

/// Stateful BLAKE-256 hasher.
pub struct Blake256Hasher {
    inner: Blake256,
}

impl Blake256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Blake256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Digest256 {
        let digest = self.inner.finalize();
        let mut out = [0u8; HASH_SIZE];
        out.copy_from_slice(&digest);
        out
    }
}

impl Default for Blake256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with BLAKE-256 (one-shot).
pub fn blake256(data: &[u8]) -> Digest256 {
    let mut hasher = Blake256Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Hash the concatenation of multiple inputs.
pub fn blake256_many(inputs: &[&[u8]]) -> Digest256 {
    let mut hasher = Blake256Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vector() {
        assert_eq!(
            hex::encode(blake256(b"")),
            "716f6e863f744b9ac22c97ec7b76ea5f5908bc5b2f67c61510bfc4751384ea7a"
        );
    }

    #[test]
    fn test_single_zero_byte_vector() {
        assert_eq!(
            hex::encode(blake256(&[0x00])),
            "0ce8d4ef4dd7cd8d62dfded9d4edb0a774ae6a41929a74da23109e8f11139c87"
        );
    }

    #[test]
    fn test_deterministic() {
        let h1 = blake256(b"test");
        let h2 = blake256(b"test");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_different_inputs() {
        let h1 = blake256(b"input1");
        let h2 = blake256(b"input2");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_streaming() {
        let hash_oneshot = blake256(b"hello world");

        let mut hasher = Blake256Hasher::new();
        hasher.update(b"hello ").update(b"world");
        let hash_streaming = hasher.finalize();

        assert_eq!(hash_oneshot, hash_streaming);
    }

    #[test]
    fn test_many_matches_concatenation() {
        let joined = blake256(b"prefixwitness");
        let parts = blake256_many(&[b"prefix", b"witness"]);
        assert_eq!(joined, parts);
    }
}
