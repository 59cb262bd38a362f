//! Configuration types for the contract toolchain.
//!
//! This crate provides:
//! - Network configurations (endpoint, signing accounts, chain id)
//! - Compiler settings and project paths
//! - Configuration loading from `hardhat.toml`
//! - `.env` loading for signing credentials

pub mod dotenv;
pub mod network;
pub mod toolchain;

pub use dotenv::load_dotenv;
pub use network::{NetworkConfig, SigningKey};
pub use toolchain::{OptimizerConfig, PathsConfig, SolidityConfig, SolidityOptions, ToolchainConfig};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Requested network is not declared
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// Network has no RPC endpoint (e.g. the in-process `hardhat` network)
    #[error("Network {0} has no RPC url")]
    MissingUrl(String),

    /// Network declares no signing accounts
    #[error("Network {0} has no accounts configured")]
    NoAccounts(String),

    /// `.env` file exists but could not be parsed
    #[error("Invalid .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// Credential environment variable is unset or empty
    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),
}
