//! # Genesis Module
//!
//! Pinned genesis blocks for every network variant.
//!
//! ## Properties
//!
//! - Height: 0
//! - Parent hash: 32 zero bytes
//! - Transactions: exactly one coinbase
//! - Valid by definition; no proof of work or script checks apply
//!
//! Each table is built once on first access and immutable afterwards. Chain
//! initialization seeds local state from [`genesis_block`]; the peer
//! handshake compares [`genesis_hash`] values to reject peers on another
//! network.

mod error;
mod mainnet;
mod network;
mod regnet;
mod simnet;
mod testnet3;

use std::sync::LazyLock;

use serde::Serialize;
use shared_types::{Block, Hash};
use tracing::debug;

pub use error::GenesisError;
pub use network::Network;

/// A network's genesis block with its derived hash.
#[derive(Debug, Clone, Serialize)]
pub struct Genesis {
    pub network: Network,
    pub hash: Hash,
    pub block: Block,
}

impl Genesis {
    fn derive(network: Network, block: Block) -> Self {
        let hash = block.block_hash();
        debug!(
            network = %network,
            hash = %hash,
            merkle_root = %block.header.merkle_root,
            "Derived genesis block hash"
        );
        Self {
            network,
            hash,
            block,
        }
    }
}

static MAINNET: LazyLock<Genesis> =
    LazyLock::new(|| Genesis::derive(Network::MainNet, mainnet::block()));

static TESTNET3: LazyLock<Genesis> =
    LazyLock::new(|| Genesis::derive(Network::TestNet3, testnet3::block()));

static SIMNET: LazyLock<Genesis> =
    LazyLock::new(|| Genesis::derive(Network::SimNet, simnet::block()));

static REGNET: LazyLock<Genesis> =
    LazyLock::new(|| Genesis::derive(Network::RegNet, regnet::block()));

/// The genesis entry for `network`.
pub fn genesis(network: Network) -> &'static Genesis {
    match network {
        Network::MainNet => &*MAINNET,
        Network::TestNet3 => &*TESTNET3,
        Network::SimNet => &*SIMNET,
        Network::RegNet => &*REGNET,
    }
}

pub fn genesis_block(network: Network) -> &'static Block {
    &genesis(network).block
}

pub fn genesis_hash(network: Network) -> Hash {
    genesis(network).hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::merkle_root;

    #[test]
    fn test_every_genesis_has_no_predecessor() {
        for network in Network::ALL {
            let header = &genesis_block(network).header;
            assert!(header.prev_block.is_zero(), "{network}");
            assert_eq!(header.height, 0, "{network}");
        }
    }

    #[test]
    fn test_every_genesis_has_one_coinbase() {
        for network in Network::ALL {
            let block = genesis_block(network);
            assert_eq!(block.transactions.len(), 1, "{network}");
            assert!(block.transactions[0].is_coinbase_shaped(), "{network}");
            assert!(block.stake_transactions.is_empty(), "{network}");
        }
    }

    #[test]
    fn test_derived_merkle_root_matches_header() {
        for network in [Network::MainNet, Network::RegNet] {
            let block = genesis_block(network);
            let derived = merkle_root(&block.tx_hashes_full()).unwrap();
            assert_eq!(block.header.merkle_root, derived, "{network}");
        }
    }

    #[test]
    fn test_mainnet_and_regnet_share_coinbase() {
        let main = genesis_block(Network::MainNet);
        let reg = genesis_block(Network::RegNet);
        assert_eq!(main.transactions, reg.transactions);
        assert_eq!(main.header.merkle_root, reg.header.merkle_root);
    }

    #[test]
    fn test_cached_hash_matches_recomputation() {
        for network in Network::ALL {
            let entry = genesis(network);
            assert_eq!(entry.network, network);
            assert_eq!(entry.hash, entry.block.block_hash());
        }
    }

    #[test]
    fn test_same_reference_on_every_access() {
        assert!(std::ptr::eq(
            genesis(Network::SimNet),
            genesis(Network::SimNet)
        ));
    }

    #[test]
    fn test_hashes_are_distinct() {
        let hashes: std::collections::HashSet<Hash> =
            Network::ALL.into_iter().map(genesis_hash).collect();
        assert_eq!(hashes.len(), Network::ALL.len());
    }
}
