use thiserror::Error;

/// Genesis lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    /// Network name does not match any variant.
    #[error("Unknown network: {0:?} (expected mainnet, testnet3, simnet or regnet)")]
    UnknownNetwork(String),
}
