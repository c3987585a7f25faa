//! # Shared Types Crate
//!
//! Wire-level transaction and block entities shared by every subsystem that
//! hashes, stores or relays chain data.
//!
//! ## Design Principles
//!
//! - **Bit-exact layouts**: serialization order and widths match the network
//!   wire format. Any deviation changes every derived identifier.
//! - **Pure derivations**: hashing and merkle derivation never mutate and
//!   never fail for well-formed values.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod hash;
pub mod merkle;

pub use entities::*;
pub use errors::*;
pub use hash::Hash;
pub use merkle::merkle_root;
