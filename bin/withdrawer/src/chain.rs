//! The remote-call boundary of the withdrawal script.
//!
//! [`Chain`] is everything the script needs from the network: the signing
//! account, native balances, and a handle to the `Lock` contract whose
//! [`Action::execute`] submits `withdraw()` and waits for confirmation.

use action::{
    withdraw::{Withdraw, WithdrawAction},
    Action,
};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use balance::{monitor::BalanceMonitor, Monitor};
use config::{NetworkConfig, SigningKey};
use std::future::Future;
use tracing::info;

pub trait Chain: Send + Sync {
    /// Contract handle returned by [`Chain::lock_at`].
    type Lock: Action;

    /// Account transactions are signed with.
    fn account(&self) -> Address;

    /// Native balance of `holder`, in wei.
    fn balance(&self, holder: Address) -> impl Future<Output = eyre::Result<U256>> + Send;

    /// Bind the `Lock` interface to the contract at `address`.
    fn lock_at(&self, address: Address) -> eyre::Result<Self::Lock>;
}

/// [`Chain`] backed by a JSON-RPC endpoint and a local signer.
pub struct RpcChain<P> {
    provider: P,
    monitor: BalanceMonitor<P>,
    account: Address,
}

impl<P> RpcChain<P>
where
    P: Provider + Clone,
{
    pub fn new(provider: P, account: Address) -> Self {
        Self {
            monitor: BalanceMonitor::new(provider.clone()),
            provider,
            account,
        }
    }
}

impl<P> Chain for RpcChain<P>
where
    P: Provider + Clone,
{
    type Lock = WithdrawAction<P>;

    fn account(&self) -> Address {
        self.account
    }

    async fn balance(&self, holder: Address) -> eyre::Result<U256> {
        let balance = self.monitor.query_balance(holder).await?;
        Ok(balance.amount)
    }

    fn lock_at(&self, address: Address) -> eyre::Result<Self::Lock> {
        Ok(WithdrawAction::new(
            self.provider.clone(),
            Withdraw::new(address),
        ))
    }
}

/// Connect to `network`, signing with the key named by its first account.
///
/// The credential is resolved before anything touches the network.
pub async fn connect(network: &NetworkConfig) -> eyre::Result<RpcChain<impl Provider + Clone>> {
    let key = network.deployer_key()?;
    connect_with_key(network, &key).await
}

/// Connect to `network`, signing with `key`.
pub async fn connect_with_key(
    network: &NetworkConfig,
    key: &SigningKey,
) -> eyre::Result<RpcChain<impl Provider + Clone>> {
    let signer = client::load_signer(key.expose(), network.chain_id)?;
    let account = signer.address();

    let url = network.rpc_url()?;
    let provider = client::create_wallet_provider(url, signer)?;

    if let Some(chain_id) = network.chain_id {
        client::ensure_chain_id(&provider, chain_id).await?;
    }

    info!(network = %network.name, %account, "Connected");

    Ok(RpcChain::new(provider, account))
}
