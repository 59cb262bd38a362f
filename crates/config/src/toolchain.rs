//! Top-level toolchain configuration (`hardhat.toml`).

use crate::{
    network::{NetworkConfig, HARDHAT_NETWORK},
    ConfigError,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Solidity compiler version used by the shipped configuration.
pub const SOLC_VERSION: &str = "0.8.21";

/// Optimizer run count the compiler assumes when none is given.
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Complete toolchain configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Network used when none is requested explicitly
    #[serde(default = "default_network")]
    pub default_network: String,
    /// Declared networks, keyed by name
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,
    /// Compiler settings
    pub solidity: SolidityConfig,
    /// Project layout, relative to `root`
    #[serde(default)]
    pub paths: PathsConfig,
    /// Directory holding the config file
    #[serde(skip)]
    pub root: PathBuf,
}

/// Compiler version and settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolidityConfig {
    /// solc version string, e.g. "0.8.21"
    pub version: String,
    #[serde(default)]
    pub settings: SolidityOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolidityOptions {
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

/// solc optimizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizerConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_runs")]
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: DEFAULT_OPTIMIZER_RUNS,
        }
    }
}

/// Source, test, cache and artifact directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub sources: PathBuf,
    pub tests: PathBuf,
    pub cache: PathBuf,
    pub artifacts: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: PathBuf::from("./contracts"),
            tests: PathBuf::from("./test"),
            cache: PathBuf::from("./cache"),
            artifacts: PathBuf::from("./artifacts"),
        }
    }
}

impl PathsConfig {
    /// Join every relative path onto `root`. Absolute paths are kept.
    pub fn resolve(&self, root: &Path) -> Self {
        Self {
            sources: root.join(&self.sources),
            tests: root.join(&self.tests),
            cache: root.join(&self.cache),
            artifacts: root.join(&self.artifacts),
        }
    }
}

fn default_network() -> String {
    HARDHAT_NETWORK.to_string()
}

const fn default_runs() -> u32 {
    DEFAULT_OPTIMIZER_RUNS
}

impl ToolchainConfig {
    /// The shipped configuration: Movement M1 devnet as default target,
    /// solc 0.8.21 with the optimizer at 200 runs.
    pub fn m1_devnet() -> Self {
        let m1 = NetworkConfig::m1_devnet();
        let hardhat = NetworkConfig::hardhat();

        Self {
            default_network: m1.name.clone(),
            networks: BTreeMap::from([(hardhat.name.clone(), hardhat), (m1.name.clone(), m1)]),
            solidity: SolidityConfig {
                version: SOLC_VERSION.to_string(),
                settings: SolidityOptions {
                    optimizer: OptimizerConfig {
                        enabled: true,
                        runs: DEFAULT_OPTIMIZER_RUNS,
                    },
                },
            },
            paths: PathsConfig::default(),
            root: PathBuf::from("."),
        }
    }

    /// Load the configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&contents)?;
        config.root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(config)
    }

    /// Parse the configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(contents)?;
        for (name, network) in config.networks.iter_mut() {
            network.name = name.clone();
        }
        config.root = PathBuf::from(".");

        Ok(config)
    }

    /// Select a network by name, or the default network when `name` is `None`.
    ///
    /// The in-process `hardhat` network is always available.
    pub fn network(&self, name: Option<&str>) -> Result<NetworkConfig, ConfigError> {
        let name = name.unwrap_or(&self.default_network);

        match self.networks.get(name) {
            Some(network) => Ok(network.clone()),
            None if name == HARDHAT_NETWORK => Ok(NetworkConfig::hardhat()),
            None => Err(ConfigError::UnknownNetwork(name.to_string())),
        }
    }

    /// Project paths resolved against the config file's directory.
    pub fn resolved_paths(&self) -> PathsConfig {
        self.paths.resolve(&self.root)
    }
}
