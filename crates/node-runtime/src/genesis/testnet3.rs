//! TestNet3 genesis.
//!
//! Reuses the MainNet coinbase. The header pins the coinbase's reduced
//! (prefix-only) identifier as its merkle root.

use shared_types::{Block, BlockHeader, Hash};

use super::mainnet;

/// 2018-08-06 00:00:00 +0000 UTC
const TIMESTAMP: u32 = 1_533_513_600;

/// Difficulty 1.
const BITS: u32 = 0x1e00_ffff;

const SBITS: i64 = 20_000_000;

const NONCE: u32 = 0x18ae_a41a;

pub(crate) fn block() -> Block {
    let coinbase = mainnet::coinbase_tx();
    Block {
        header: BlockHeader {
            version: 6,
            prev_block: Hash::ZERO,
            merkle_root: coinbase.tx_hash(),
            timestamp: TIMESTAMP,
            bits: BITS,
            sbits: SBITS,
            nonce: NONCE,
            stake_version: 6,
            ..Default::default()
        },
        transactions: vec![coinbase],
        stake_transactions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merkle_root_is_reduced_identifier() {
        let block = block();
        assert_eq!(block.header.merkle_root, block.transactions[0].tx_hash());
        assert_ne!(block.header.merkle_root, mainnet::merkle_root());
    }
}
