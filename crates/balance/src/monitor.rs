use crate::{Balance, Monitor};
use alloy_primitives::Address;
use alloy_provider::Provider;
use eyre::Result;
use tracing::debug;

/// [`Monitor`] reading native balances through an RPC provider.
pub struct BalanceMonitor<P> {
    provider: P,
}

impl<P> BalanceMonitor<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P> Monitor for BalanceMonitor<P>
where
    P: Provider + Clone,
{
    async fn query_balance(&self, holder: Address) -> Result<Balance> {
        debug!("Querying native balance: address={}", holder);

        let amount = self.provider.get_balance(holder).await?;

        Ok(Balance { holder, amount })
    }
}
