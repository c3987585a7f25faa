//! SimNet genesis.
//!
//! The header pins the MainNet merkle root even though the block carries its
//! own coinbase. The coinbase input leaves its consensus-tracking fields at
//! zero. Both are reproduced as published.

use shared_types::{Block, BlockHeader, Hash, OutPoint, SerType, Transaction, TxIn, TxOut};

use super::mainnet;

const COINBASE_SIGNATURE_SCRIPT: [u8; 77] = [
    0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x45, /* |.......E| */
    0x54, 0x68, 0x65, 0x20, 0x54, 0x69, 0x6d, 0x65, /* |The Time| */
    0x73, 0x20, 0x30, 0x33, 0x2f, 0x4a, 0x61, 0x6e, /* |s 03/Jan| */
    0x2f, 0x32, 0x30, 0x30, 0x39, 0x20, 0x43, 0x68, /* |/2009 Ch| */
    0x61, 0x6e, 0x63, 0x65, 0x6c, 0x6c, 0x6f, 0x72, /* |ancellor| */
    0x20, 0x6f, 0x6e, 0x20, 0x62, 0x72, 0x69, 0x6e, /* | on brin| */
    0x6b, 0x20, 0x6f, 0x66, 0x20, 0x73, 0x65, 0x63, /* |k of sec| */
    0x6f, 0x6e, 0x64, 0x20, 0x62, 0x61, 0x69, 0x6c, /* |ond bail| */
    0x6f, 0x75, 0x74, 0x20, 0x66, 0x6f, 0x72, 0x20, /* |out for | */
    0x62, 0x61, 0x6e, 0x6b, 0x73, /* |banks| */
];

const COINBASE_PK_SCRIPT: [u8; 67] = [
    0x41, 0x04, 0x67, 0x8a, 0xfd, 0xb0, 0xfe, 0x55, /* |A.g....U| */
    0x48, 0x27, 0x19, 0x67, 0xf1, 0xa6, 0x71, 0x30, /* |H'.g..q0| */
    0xb7, 0x10, 0x5c, 0xd6, 0xa8, 0x28, 0xe0, 0x39, /* |..\..(.9| */
    0x09, 0xa6, 0x79, 0x62, 0xe0, 0xea, 0x1f, 0x61, /* |..yb...a| */
    0xde, 0xb6, 0x49, 0xf6, 0xbc, 0x3f, 0x4c, 0xef, /* |..I..?L.| */
    0x38, 0xc4, 0xf3, 0x55, 0x04, 0xe5, 0x1e, 0xc1, /* |8..U....| */
    0x12, 0xde, 0x5c, 0x38, 0x4d, 0xf7, 0xba, 0x0b, /* |..\8M...| */
    0x8d, 0x57, 0x8a, 0x4c, 0x70, 0x2b, 0x6b, 0xf1, /* |.W.Lp+k.| */
    0x1d, 0x5f, 0xac, /* |._.| */
];

const TIMESTAMP: u32 = 1_401_292_357;

/// 545259519
const BITS: u32 = 0x207f_ffff;

pub(crate) fn coinbase_tx() -> Transaction {
    Transaction {
        ser_type: SerType::Full,
        version: 1,
        inputs: vec![TxIn {
            previous_out_point: OutPoint::null(),
            sequence: TxIn::MAX_SEQUENCE,
            value_in: 0,
            block_height: 0,
            block_index: 0,
            signature_script: COINBASE_SIGNATURE_SCRIPT.to_vec(),
        }],
        outputs: vec![TxOut {
            value: 0,
            version: 0,
            pk_script: COINBASE_PK_SCRIPT.to_vec(),
        }],
        lock_time: 0,
        expiry: 0,
    }
}

pub(crate) fn block() -> Block {
    Block {
        header: BlockHeader {
            version: 1,
            prev_block: Hash::ZERO,
            merkle_root: mainnet::merkle_root(),
            stake_root: Hash::ZERO,
            vote_bits: 0,
            final_state: [0x00; 6],
            voters: 0,
            fresh_stake: 0,
            revocations: 0,
            timestamp: TIMESTAMP,
            pool_size: 0,
            bits: BITS,
            sbits: 0,
            nonce: 0,
            stake_version: 0,
            height: 0,
            ..Default::default()
        },
        transactions: vec![coinbase_tx()],
        stake_transactions: Vec::new(),
    }
}
