//! # Core Wire Entities
//!
//! The transaction and block structures whose byte layouts every node on the
//! network must reproduce exactly.
//!
//! ## Clusters
//!
//! - **Transactions**: `OutPoint`, `TxIn`, `TxOut`, `Transaction`, `SerType`
//! - **Blocks**: `BlockHeader`, `Block`
//!
//! All integers are little-endian. Hashes are written as raw 32-byte digests.

use serde::{Deserialize, Serialize};
use shared_crypto::blake256_many;

use crate::codec::{var_bytes_size, varint_size, write_var_bytes, write_varint};
use crate::errors::WireError;
use crate::hash::Hash;

// =============================================================================
// CLUSTER A: TRANSACTIONS
// =============================================================================

/// Transaction tree of regular (non-stake) transactions.
pub const TREE_REGULAR: u8 = 0;

/// Transaction tree of stake transactions (votes, tickets, revocations).
pub const TREE_STAKE: u8 = 1;

/// Which portions of a transaction a serialization carries.
///
/// The tag is packed into the upper 16 bits of the serialized version word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum SerType {
    /// Prefix followed by witness.
    #[default]
    Full = 0,
    /// Prefix only. Excludes every signature script.
    NoWitness = 1,
    /// Witness only.
    OnlyWitness = 2,
}

impl TryFrom<u16> for SerType {
    type Error = WireError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SerType::Full),
            1 => Ok(SerType::NoWitness),
            2 => Ok(SerType::OnlyWitness),
            other => Err(WireError::UnknownSerType(other)),
        }
    }
}

impl SerType {
    fn has_prefix(self) -> bool {
        matches!(self, SerType::Full | SerType::NoWitness)
    }

    fn has_witness(self) -> bool {
        matches!(self, SerType::Full | SerType::OnlyWitness)
    }
}

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the referenced transaction.
    pub hash: Hash,
    /// Output index within that transaction.
    pub index: u32,
    /// Transaction tree the referenced transaction lives in.
    pub tree: u8,
}

impl OutPoint {
    /// Index marking an outpoint with no real predecessor.
    pub const NULL_INDEX: u32 = 0xffff_ffff;

    /// Serialized width: hash, index, tree.
    pub const SERIALIZED_SIZE: usize = Hash::SIZE + 4 + 1;

    /// The coinbase outpoint: zero hash, all-ones index, regular tree.
    pub const fn null() -> Self {
        Self {
            hash: Hash::ZERO,
            index: Self::NULL_INDEX,
            tree: TREE_REGULAR,
        }
    }

    pub fn is_null(&self) -> bool {
        self.index == Self::NULL_INDEX && self.hash.is_zero()
    }

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.hash.as_bytes());
        buf.extend_from_slice(&self.index.to_le_bytes());
        buf.push(self.tree);
    }
}

/// A transaction input.
///
/// `value_in`, `block_height` and `block_index` are consensus-tracking
/// fields that live in the witness. Inputs without a real origin carry the
/// `NULL_*` sentinels instead of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    /// Output being spent.
    pub previous_out_point: OutPoint,
    /// Sequence number.
    pub sequence: u32,
    /// Value of the output being spent, in atoms.
    pub value_in: i64,
    /// Height of the block containing the spent output.
    pub block_height: u32,
    /// Index of the spent transaction within its block.
    pub block_index: u32,
    /// Unlocking script.
    #[serde(with = "hex::serde")]
    pub signature_script: Vec<u8>,
}

impl TxIn {
    /// Unknown input value.
    pub const NULL_VALUE_IN: i64 = -1;
    /// Unknown origin block height.
    pub const NULL_BLOCK_HEIGHT: u32 = 0x0000_0000;
    /// Unknown origin block index.
    pub const NULL_BLOCK_INDEX: u32 = 0xffff_ffff;
    /// Final sequence number.
    pub const MAX_SEQUENCE: u32 = 0xffff_ffff;

    /// Coinbase input spending the null outpoint, with the null sentinels in
    /// every consensus-tracking field.
    pub fn null_coinbase(signature_script: Vec<u8>) -> Self {
        Self {
            previous_out_point: OutPoint::null(),
            sequence: Self::MAX_SEQUENCE,
            value_in: Self::NULL_VALUE_IN,
            block_height: Self::NULL_BLOCK_HEIGHT,
            block_index: Self::NULL_BLOCK_INDEX,
            signature_script,
        }
    }

    fn encode_prefix(&self, buf: &mut Vec<u8>) {
        self.previous_out_point.encode(buf);
        buf.extend_from_slice(&self.sequence.to_le_bytes());
    }

    fn encode_witness(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value_in.to_le_bytes());
        buf.extend_from_slice(&self.block_height.to_le_bytes());
        buf.extend_from_slice(&self.block_index.to_le_bytes());
        write_var_bytes(buf, &self.signature_script);
    }

    fn prefix_size(&self) -> usize {
        OutPoint::SERIALIZED_SIZE + 4
    }

    fn witness_size(&self) -> usize {
        8 + 4 + 4 + var_bytes_size(&self.signature_script)
    }
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in atoms.
    pub value: i64,
    /// Script version.
    pub version: u16,
    /// Locking script.
    #[serde(with = "hex::serde")]
    pub pk_script: Vec<u8>,
}

impl TxOut {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value.to_le_bytes());
        buf.extend_from_slice(&self.version.to_le_bytes());
        write_var_bytes(buf, &self.pk_script);
    }

    fn size(&self) -> usize {
        8 + 2 + var_bytes_size(&self.pk_script)
    }
}

/// A transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Serialization used by [`Transaction::to_bytes`].
    pub ser_type: SerType,
    /// Transaction format version.
    pub version: u16,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
    /// Height after which the transaction cannot be mined.
    pub expiry: u32,
}

impl Transaction {
    /// The 32-bit version word: format version low, serialization type high.
    pub fn serialized_version(&self, mode: SerType) -> u32 {
        u32::from(self.version) | (u32::from(mode as u16) << 16)
    }

    /// Serializes the transaction in the requested mode.
    pub fn serialize(&self, mode: SerType) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.serialize_size(mode));
        buf.extend_from_slice(&self.serialized_version(mode).to_le_bytes());

        if mode.has_prefix() {
            write_varint(&mut buf, self.inputs.len() as u64);
            for input in &self.inputs {
                input.encode_prefix(&mut buf);
            }
            write_varint(&mut buf, self.outputs.len() as u64);
            for output in &self.outputs {
                output.encode(&mut buf);
            }
            buf.extend_from_slice(&self.lock_time.to_le_bytes());
            buf.extend_from_slice(&self.expiry.to_le_bytes());
        }

        if mode.has_witness() {
            write_varint(&mut buf, self.inputs.len() as u64);
            for input in &self.inputs {
                input.encode_witness(&mut buf);
            }
        }

        buf
    }

    /// Serializes using the transaction's own `ser_type`.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.serialize(self.ser_type)
    }

    /// Exact length of `serialize(mode)`.
    pub fn serialize_size(&self, mode: SerType) -> usize {
        let mut size = 4;
        let inputs = self.inputs.len() as u64;

        if mode.has_prefix() {
            size += varint_size(inputs);
            size += self.inputs.iter().map(TxIn::prefix_size).sum::<usize>();
            size += varint_size(self.outputs.len() as u64);
            size += self.outputs.iter().map(TxOut::size).sum::<usize>();
            size += 4 + 4;
        }

        if mode.has_witness() {
            size += varint_size(inputs);
            size += self.inputs.iter().map(TxIn::witness_size).sum::<usize>();
        }

        size
    }

    /// Reduced identifier: hash of the prefix. Signature scripts do not
    /// contribute, so the value is stable under witness malleation.
    pub fn tx_hash(&self) -> Hash {
        Hash::digest(&self.serialize(SerType::NoWitness))
    }

    /// Hash of the witness alone.
    pub fn tx_hash_witness(&self) -> Hash {
        Hash::digest(&self.serialize(SerType::OnlyWitness))
    }

    /// Full identifier: `H(tx_hash || tx_hash_witness)`.
    ///
    /// The two inner serializations carry different version words because the
    /// serialization type lives in the upper 16 bits.
    pub fn tx_hash_full(&self) -> Hash {
        let prefix = self.tx_hash();
        let witness = self.tx_hash_witness();
        Hash(blake256_many(&[prefix.as_bytes(), witness.as_bytes()]))
    }

    pub fn is_coinbase_shaped(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_out_point.is_null()
    }
}

// =============================================================================
// CLUSTER B: BLOCKS
// =============================================================================

/// Serialized width of a block header.
pub const BLOCK_HEADER_LEN: usize = 180;

/// A block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Block format version.
    pub version: i32,
    /// Hash of the previous block. Zero for genesis.
    pub prev_block: Hash,
    /// Merkle root of the regular transaction tree.
    pub merkle_root: Hash,
    /// Merkle root of the stake transaction tree.
    pub stake_root: Hash,
    /// Votes on the previous block and on agendas.
    pub vote_bits: u16,
    /// Final lottery state.
    pub final_state: [u8; 6],
    /// Votes included in this block.
    pub voters: u16,
    /// New tickets purchased in this block.
    pub fresh_stake: u8,
    /// Revocations included in this block.
    pub revocations: u8,
    /// Live ticket pool size.
    pub pool_size: u32,
    /// Compact difficulty target.
    pub bits: u32,
    /// Ticket price, in atoms.
    pub sbits: i64,
    pub height: u32,
    /// Serialized block size in bytes.
    pub size: u32,
    /// Unix seconds.
    pub timestamp: u32,
    pub nonce: u32,
    /// Extra nonce space for miners.
    pub extra_data: [u8; 32],
    /// Highest stake version the miner supports.
    pub stake_version: u32,
}

impl BlockHeader {
    /// Fixed 180-byte wire layout.
    pub fn serialize(&self) -> [u8; BLOCK_HEADER_LEN] {
        let mut buf = Vec::with_capacity(BLOCK_HEADER_LEN);
        buf.extend_from_slice(&self.version.to_le_bytes());
        buf.extend_from_slice(self.prev_block.as_bytes());
        buf.extend_from_slice(self.merkle_root.as_bytes());
        buf.extend_from_slice(self.stake_root.as_bytes());
        buf.extend_from_slice(&self.vote_bits.to_le_bytes());
        buf.extend_from_slice(&self.final_state);
        buf.extend_from_slice(&self.voters.to_le_bytes());
        buf.push(self.fresh_stake);
        buf.push(self.revocations);
        buf.extend_from_slice(&self.pool_size.to_le_bytes());
        buf.extend_from_slice(&self.bits.to_le_bytes());
        buf.extend_from_slice(&self.sbits.to_le_bytes());
        buf.extend_from_slice(&self.height.to_le_bytes());
        buf.extend_from_slice(&self.size.to_le_bytes());
        buf.extend_from_slice(&self.timestamp.to_le_bytes());
        buf.extend_from_slice(&self.nonce.to_le_bytes());
        buf.extend_from_slice(&self.extra_data);
        buf.extend_from_slice(&self.stake_version.to_le_bytes());

        let mut out = [0u8; BLOCK_HEADER_LEN];
        out.copy_from_slice(&buf);
        out
    }

    /// BLAKE-256 of the serialized header.
    pub fn block_hash(&self) -> Hash {
        Hash::digest(&self.serialize())
    }
}

/// A block: header plus regular and stake transaction trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
    pub stake_transactions: Vec<Transaction>,
}

impl Block {
    pub fn block_hash(&self) -> Hash {
        self.header.block_hash()
    }

    /// Full identifiers of the regular transactions, in block order.
    pub fn tx_hashes_full(&self) -> Vec<Hash> {
        self.transactions.iter().map(Transaction::tx_hash_full).collect()
    }

    /// Header, then each tree as a varint count followed by full
    /// transactions.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.header.serialize());
        for tree in [&self.transactions, &self.stake_transactions] {
            write_varint(&mut buf, tree.len() as u64);
            for tx in tree {
                buf.extend_from_slice(&tx.serialize(SerType::Full));
            }
        }
        buf
    }
}
