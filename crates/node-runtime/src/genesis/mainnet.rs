//! MainNet genesis.
//!
//! The genesis block is not evaluated for proof of work. Only its hash (as
//! the first `prev_block`), `bits`, `sbits` and timestamp are used
//! afterwards, as starting points for chain validation and difficulty.

use shared_types::{Block, BlockHeader, Hash, SerType, Transaction, TxIn, TxOut};

const COINBASE_SIGNATURE_SCRIPT: [u8; 2] = [0x00, 0x00];

const COINBASE_PK_SCRIPT: [u8; 32] = [
    0x80, 0x16, 0x79, 0xe9, 0x85, 0x61, 0xad, 0xa9,
    0x6c, 0xae, 0xc2, 0x94, 0x9a, 0x5d, 0x41, 0xc4,
    0xca, 0xb3, 0x85, 0x1e, 0xb7, 0x40, 0xd9, 0x51,
    0xc1, 0x0e, 0xcb, 0xcf, 0x26, 0x5c, 0x1f, 0xd9,
];

/// Mon, 08 Feb 2016 18:00:00 GMT
const TIMESTAMP: u32 = 1_454_954_400;

/// Difficulty 32767.
const BITS: u32 = 0x1b01_ffff;

/// 2 coins.
const SBITS: i64 = 2 * 100_000_000;

/// Coinbase shared by the MainNet and RegNet genesis blocks.
pub(crate) fn coinbase_tx() -> Transaction {
    Transaction {
        ser_type: SerType::Full,
        version: 1,
        inputs: vec![TxIn::null_coinbase(COINBASE_SIGNATURE_SCRIPT.to_vec())],
        outputs: vec![TxOut {
            value: 0,
            version: 0x0000,
            pk_script: COINBASE_PK_SCRIPT.to_vec(),
        }],
        lock_time: 0,
        expiry: 0,
    }
}

/// Full identifier of the MainNet coinbase, the root of its one-leaf tree.
pub(crate) fn merkle_root() -> Hash {
    coinbase_tx().tx_hash_full()
}

pub(crate) fn block() -> Block {
    Block {
        header: BlockHeader {
            version: 1,
            prev_block: Hash::ZERO,
            merkle_root: merkle_root(),
            stake_root: Hash::ZERO,
            timestamp: TIMESTAMP,
            bits: BITS,
            sbits: SBITS,
            nonce: 0x0000_0000,
            stake_version: 0,
            ..Default::default()
        },
        transactions: vec![coinbase_tx()],
        stake_transactions: Vec::new(),
    }
}
