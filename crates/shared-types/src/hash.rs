//! # Chain Hash
//!
//! 32-byte BLAKE-256 digest carried by every identifier on the wire.
//!
//! Bytes are stored in digest order. `Display` and `FromStr` use the
//! byte-reversed hex form that block explorers and published genesis
//! constants use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_crypto::{blake256, HASH_SIZE};

use crate::errors::WireError;

/// Fixed-size chain hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash(pub [u8; HASH_SIZE]);

impl Hash {
    /// Size of a hash in bytes.
    pub const SIZE: usize = HASH_SIZE;

    /// The all-zero hash. Marks "no predecessor".
    pub const ZERO: Hash = Hash([0u8; HASH_SIZE]);

    /// BLAKE-256 of `data`.
    pub fn digest(data: &[u8]) -> Self {
        Hash(blake256(data))
    }

    /// Wraps raw digest-order bytes.
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Raw digest-order bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_SIZE]
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self)
    }
}

impl FromStr for Hash {
    type Err = WireError;

    /// Parses the byte-reversed hex form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HASH_SIZE * 2 {
            return Err(WireError::InvalidHashLength { length: s.len() });
        }
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| WireError::InvalidHex(e.to_string()))?;
        bytes.reverse();
        Ok(Hash(bytes))
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
