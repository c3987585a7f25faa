//! Network variants sharing code but not chain state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared_types::Hash;

use super::error::GenesisError;

/// A chain configuration with its own genesis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network.
    #[default]
    MainNet,
    /// Public test network, version 3.
    TestNet3,
    /// Private simulation network.
    SimNet,
    /// Regression test network.
    RegNet,
}

impl Network {
    /// Every network, in declaration order.
    pub const ALL: [Network; 4] = [
        Network::MainNet,
        Network::TestNet3,
        Network::SimNet,
        Network::RegNet,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Network::MainNet => "mainnet",
            Network::TestNet3 => "testnet3",
            Network::SimNet => "simnet",
            Network::RegNet => "regnet",
        }
    }

    /// Identifies the network a remote peer announced by its genesis hash.
    pub fn from_genesis_hash(hash: &Hash) -> Option<Network> {
        Network::ALL
            .into_iter()
            .find(|network| super::genesis_hash(*network) == *hash)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::MainNet),
            "testnet3" | "test3" | "testnet" => Ok(Network::TestNet3),
            "simnet" | "sim" => Ok(Network::SimNet),
            "regnet" | "regtest" => Ok(Network::RegNet),
            _ => Err(GenesisError::UnknownNetwork(s.to_string())),
        }
    }
}
