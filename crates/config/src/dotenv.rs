//! `.env` loading, so signing keys can live next to the project instead of
//! in the shell environment.

use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Load `dir/.env` into the process environment.
///
/// Variables already set in the environment are left untouched. Returns the
/// loaded file, or `None` when `dir` has no `.env`.
pub fn load_dotenv(dir: impl AsRef<Path>) -> Result<Option<PathBuf>, ConfigError> {
    let path = dir.as_ref().join(".env");

    match dotenvy::from_path(&path) {
        Ok(()) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::Dotenv(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkConfig;

    #[test]
    fn test_key_from_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "CONFIG_DOTENV_TEST_PRIVATE_KEY=0xabc\n",
        )
        .unwrap();

        let loaded = load_dotenv(dir.path()).unwrap();
        assert_eq!(loaded, Some(dir.path().join(".env")));

        let network = NetworkConfig {
            accounts: vec!["CONFIG_DOTENV_TEST_PRIVATE_KEY".to_string()],
            ..NetworkConfig::m1_devnet()
        };
        assert_eq!(network.deployer_key().unwrap().expose(), "0xabc");
    }

    #[test]
    fn test_missing_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_dotenv(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_malformed_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "CONFIG_DOTENV_TEST_BAD='unterminated\n").unwrap();

        let err = load_dotenv(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Dotenv(_)));
    }
}
