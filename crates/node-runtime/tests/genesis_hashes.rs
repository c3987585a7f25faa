//! Published genesis identifiers for every network.
//!
//! A mismatch here means this node would reject every honest peer.

use node_runtime::{genesis, genesis_block, genesis_hash, Network};
use shared_types::{BlockHeader, Hash, SerType, BLOCK_HEADER_LEN};

const MAINNET_HASH: &str = "298e5cc3d985bfe7f81dc135f360abe089edd4396b86d2de66b0cef42b21d980";
const TESTNET3_HASH: &str = "a649dce53918caf422e9c711c858837e08d626ecfcd198969b24f7b634a49bac";
const SIMNET_HASH: &str = "5bec7567af40504e0994db3b573c186fffcc4edefe096ff2e58d00523bd7e8a6";
const REGNET_HASH: &str = "2ced94b4ae95bba344cfa043268732d230649c640f92dce2d9518823d3057cb0";
const MAINNET_MERKLE_ROOT: &str =
    "66aa7491b9adce110585ccab7e3fb5fe280de174530cca10eba2c6c3df01c10d";

fn parse(text: &str) -> Hash {
    text.parse().unwrap()
}

#[test]
fn test_mainnet_genesis_hash() {
    assert_eq!(genesis_hash(Network::MainNet), parse(MAINNET_HASH));
}

#[test]
fn test_testnet3_genesis_hash() {
    assert_eq!(genesis_hash(Network::TestNet3), parse(TESTNET3_HASH));
}

#[test]
fn test_simnet_genesis_hash() {
    assert_eq!(genesis_hash(Network::SimNet), parse(SIMNET_HASH));
}

#[test]
fn test_regnet_genesis_hash() {
    assert_eq!(genesis_hash(Network::RegNet), parse(REGNET_HASH));
}

#[test]
fn test_simnet_header_from_published_fields() {
    let header = BlockHeader {
        version: 1,
        prev_block: Hash::ZERO,
        merkle_root: parse(MAINNET_MERKLE_ROOT),
        timestamp: 1_401_292_357,
        bits: 0x207f_ffff,
        nonce: 0,
        ..Default::default()
    };
    assert_eq!(header.block_hash(), parse(SIMNET_HASH));
    assert_eq!(&header, &genesis_block(Network::SimNet).header);
}

#[test]
fn test_mainnet_header_bytes() {
    let bytes = genesis_block(Network::MainNet).header.serialize();
    assert_eq!(bytes.len(), BLOCK_HEADER_LEN);
    assert_eq!(&bytes[0..4], &[0x01, 0x00, 0x00, 0x00]);
    assert_eq!(
        hex::encode(&bytes[36..68]),
        "0dc101dfc3c6a2eb10ca0c5374e10d28feb53f7eabcc850511ceadb99174aa66"
    );
}

#[test]
fn test_mainnet_coinbase_prefix_bytes() {
    let tx = &genesis_block(Network::MainNet).transactions[0];
    let prefix = tx.serialize(SerType::NoWitness);
    let expected = concat!(
        "01000100",                                                         // version 1, no witness
        "01",                                                               // one input
        "0000000000000000000000000000000000000000000000000000000000000000", // null hash
        "ffffffff",                                                         // null index
        "00",                                                               // regular tree
        "ffffffff",                                                         // sequence
        "01",                                                               // one output
        "0000000000000000",                                                 // value
        "0000",                                                             // script version
        "20",                                                               // script length
        "801679e98561ada96caec2949a5d41c4cab3851eb740d951c10ecbcf265c1fd9", // pk script
        "00000000",                                                         // lock time
        "00000000",                                                         // expiry
    );
    assert_eq!(hex::encode(prefix), expected);
}

#[test]
fn test_every_header_has_no_predecessor() {
    for network in Network::ALL {
        assert_eq!(genesis_block(network).header.prev_block, Hash::ZERO);
    }
}

#[test]
fn test_mainnet_and_regnet_merkle_roots_are_equal() {
    let main = genesis(Network::MainNet);
    let reg = genesis(Network::RegNet);
    assert_eq!(main.block.header.merkle_root, parse(MAINNET_MERKLE_ROOT));
    assert_eq!(main.block.header.merkle_root, reg.block.header.merkle_root);
    assert_ne!(main.hash, reg.hash);
}

#[test]
fn test_concurrent_first_access_agrees() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || genesis_hash(Network::ALL[i % 4])))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), genesis_hash(Network::ALL[i % 4]));
    }
}
