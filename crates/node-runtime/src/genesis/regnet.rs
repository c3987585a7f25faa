//! RegNet genesis. Carries its own copy of the MainNet coinbase.

use shared_types::{Block, BlockHeader, Hash};

use super::mainnet;

/// 2018-10-03 00:00:00 +0000 UTC
const TIMESTAMP: u32 = 1_538_524_800;

const BITS: u32 = 0x207f_ffff;

pub(crate) fn block() -> Block {
    Block {
        header: BlockHeader {
            version: 1,
            prev_block: Hash::ZERO,
            merkle_root: mainnet::merkle_root(),
            stake_root: Hash::ZERO,
            timestamp: TIMESTAMP,
            bits: BITS,
            sbits: 0,
            nonce: 0,
            stake_version: 0,
            height: 0,
            ..Default::default()
        },
        transactions: vec![mainnet::coinbase_tx()],
        stake_transactions: Vec::new(),
    }
}
