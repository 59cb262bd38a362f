use alloy_network::EthereumWallet;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error connecting to the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error with private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Endpoint reports a different chain than configured
    #[error("Chain id mismatch: configured {expected}, endpoint reports {actual}")]
    ChainIdMismatch { expected: u64, actual: u64 },
}

/// Parse a hex private key (with or without 0x prefix) into a local signer.
///
/// When `chain_id` is given the signer is bound to it (EIP-155).
pub fn load_signer(private_key: &str, chain_id: Option<u64>) -> Result<PrivateKeySigner, ClientError> {
    // never echo the key itself back in the error
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|_| ClientError::InvalidPrivateKey("expected 32-byte hex string".to_string()))?;

    Ok(signer.with_chain_id(chain_id))
}

/// Create a provider with wallet signing capability from a signer.
pub fn create_wallet_provider(
    rpc_url: &str,
    signer: PrivateKeySigner,
) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;

    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

    Ok(provider)
}

/// Check that the endpoint serves the expected chain.
pub async fn ensure_chain_id<P>(provider: &P, expected: u64) -> Result<(), ClientError>
where
    P: Provider,
{
    let actual = provider
        .get_chain_id()
        .await
        .map_err(|e| ClientError::Connection(format!("{}", e)))?;

    debug!(expected, actual, "Checked endpoint chain id");

    if actual != expected {
        return Err(ClientError::ChainIdMismatch { expected, actual });
    }

    Ok(())
}
