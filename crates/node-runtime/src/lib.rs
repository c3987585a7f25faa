//! # Node Runtime Library
//!
//! Exposes the genesis table and startup configuration consumed by chain
//! initialization and the peer handshake. The `main.rs` binary prints the
//! active network's genesis block.
//!
//! ## Layout
//!
//! - `genesis/` - Pinned genesis blocks per network, derived hashes cached
//!   for the process lifetime
//! - `container/` - Node configuration and environment overrides

#![warn(missing_docs)]
#![allow(missing_docs)] // TODO: Document the genesis table accessors and entry fields

pub mod container;
pub mod genesis;

pub use container::NodeConfig;
pub use genesis::{genesis, genesis_block, genesis_hash, Genesis, GenesisError, Network};
