//! # Merkle Root Derivation
//!
//! A transaction list with a single leaf has that leaf as its root. Trees with
//! more leaves are combined by the block validator, not here.

use crate::errors::WireError;
use crate::hash::Hash;

/// Derives the merkle root of an ordered list of transaction identifiers.
pub fn merkle_root(leaves: &[Hash]) -> Result<Hash, WireError> {
    match leaves {
        [] => Err(WireError::EmptyMerkleTree),
        [only] => Ok(*only),
        _ => Err(WireError::MultiLeafMerkleTree {
            count: leaves.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_leaf_is_root() {
        let leaf = Hash::digest(b"coinbase");
        assert_eq!(merkle_root(&[leaf]).unwrap(), leaf);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(merkle_root(&[]), Err(WireError::EmptyMerkleTree));
    }

    #[test]
    fn test_multi_leaf_rejected() {
        let leaves = [Hash::ZERO, Hash::digest(b"x")];
        assert_eq!(
            merkle_root(&leaves),
            Err(WireError::MultiLeafMerkleTree { count: 2 })
        );
    }
}
