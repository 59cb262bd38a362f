//! Network configuration for deploy and script targets.
//!
//! Each network names an RPC endpoint, the environment variables holding the
//! signing keys, and the chain id the endpoint is expected to report.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the in-process development network.
pub const HARDHAT_NETWORK: &str = "hardhat";

/// Movement M1 devnet endpoint.
pub const M1_DEVNET_URL: &str = "https://mevm.devnet.imola.movementlabs.xyz";

/// Movement M1 devnet chain id.
pub const M1_DEVNET_CHAIN_ID: u64 = 30732;

/// Environment variable holding the deployer key.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// A single network target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// Network name, taken from its key in the `networks` table
    #[serde(skip)]
    pub name: String,
    /// RPC endpoint url
    #[serde(default)]
    pub url: Option<String>,
    /// Environment variables holding hex private keys, in signer order
    #[serde(default)]
    pub accounts: Vec<String>,
    /// Chain id the endpoint must report
    #[serde(default)]
    pub chain_id: Option<u64>,
}

impl NetworkConfig {
    /// The in-process development network. It has no endpoint and no accounts.
    pub fn hardhat() -> Self {
        Self {
            name: HARDHAT_NETWORK.to_string(),
            ..Default::default()
        }
    }

    /// Movement M1 devnet, signing with the key in `PRIVATE_KEY`.
    pub fn m1_devnet() -> Self {
        Self {
            name: "m1".to_string(),
            url: Some(M1_DEVNET_URL.to_string()),
            accounts: vec![PRIVATE_KEY_ENV.to_string()],
            chain_id: Some(M1_DEVNET_CHAIN_ID),
        }
    }

    /// RPC endpoint of this network.
    pub fn rpc_url(&self) -> Result<&str, ConfigError> {
        self.url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingUrl(self.name.clone()))
    }

    /// Read every configured signing key from the process environment.
    pub fn resolve_accounts(&self) -> Result<Vec<SigningKey>, ConfigError> {
        self.resolve_accounts_with(|var| std::env::var(var).ok())
    }

    /// Read every configured signing key through `lookup`.
    ///
    /// Unset and empty values are both treated as missing.
    pub fn resolve_accounts_with<F>(&self, lookup: F) -> Result<Vec<SigningKey>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.accounts
            .iter()
            .map(|var| match lookup(var.as_str()) {
                Some(value) if !value.trim().is_empty() => Ok(SigningKey(value.trim().to_string())),
                _ => Err(ConfigError::MissingCredential(var.clone())),
            })
            .collect()
    }

    /// Key of the first configured account, the one scripts sign with.
    pub fn deployer_key(&self) -> Result<SigningKey, ConfigError> {
        self.deployer_key_with(|var| std::env::var(var).ok())
    }

    /// Like [`Self::deployer_key`], reading values through `lookup`.
    pub fn deployer_key_with<F>(&self, lookup: F) -> Result<SigningKey, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.resolve_accounts_with(lookup)?
            .into_iter()
            .next()
            .ok_or_else(|| ConfigError::NoAccounts(self.name.clone()))
    }
}

/// Hex-encoded private key read from the environment.
///
/// `Debug` is redacted so the key never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(String);

impl SigningKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}
