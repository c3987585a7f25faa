//! # Node Configuration
//!
//! The only runtime choice this node makes at startup is which network's
//! genesis block anchors the chain.
//!
//! ## Environment
//!
//! - `QC_NETWORK`: `mainnet` (default), `testnet3`, `simnet` or `regnet`

use thiserror::Error;
use tracing::{info, warn};

use crate::genesis::{GenesisError, Network};

/// Environment variable selecting the active network.
pub const NETWORK_ENV: &str = "QC_NETWORK";

/// Complete node configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// Active network variant.
    pub network: Network,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid network selection: {0}")]
    InvalidNetwork(#[from] GenesisError),
}

impl NodeConfig {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    /// Strict parse for programmatic callers.
    pub fn from_network_str(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.parse()?))
    }

    /// Load configuration from the environment, keeping defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(NETWORK_ENV) {
            Ok(value) => config.with_network_override(&value),
            Err(_) => config,
        }
    }

    /// Applies a network override, logging and ignoring invalid values.
    pub fn with_network_override(mut self, value: &str) -> Self {
        match value.parse::<Network>() {
            Ok(network) => {
                info!(network = %network, "Loaded network from environment");
                self.network = network;
            }
            Err(e) => {
                warn!("{NETWORK_ENV} ignored: {e}");
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NodeConfig::default();
        assert_eq!(config.network, Network::MainNet);
    }

    #[test]
    fn test_override_applies_valid_network() {
        let config = NodeConfig::default().with_network_override("simnet");
        assert_eq!(config.network, Network::SimNet);
    }

    #[test]
    fn test_override_keeps_default_on_invalid_value() {
        let config = NodeConfig::new(Network::RegNet).with_network_override("nope");
        assert_eq!(config.network, Network::RegNet);
    }

    #[test]
    fn test_from_network_str_rejects_unknown() {
        let result = NodeConfig::from_network_str("devnet");
        assert!(matches!(result, Err(ConfigError::InvalidNetwork(_))));
        assert_eq!(
            NodeConfig::from_network_str("test3").unwrap().network,
            Network::TestNet3
        );
    }
}
