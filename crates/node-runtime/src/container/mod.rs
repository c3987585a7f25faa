//! # Node Container
//!
//! Startup configuration for the node runtime.

pub mod config;

pub use config::{ConfigError, NodeConfig, NETWORK_ENV};
