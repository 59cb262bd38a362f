use crate::{Action, Outcome};
use alloy_network::ReceiptResponse as _;
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;
use binding::lock::Lock;
use tracing::{info, warn};

/// Withdraw input data.
#[derive(Debug, Clone)]
pub struct Withdraw {
    /// `Lock` contract address
    pub lock: Address,
    /// Confirmations to wait for before the withdrawal counts as done
    pub confirmations: u64,
}

impl Withdraw {
    /// Withdraw from `lock`, waiting for a single confirmation.
    pub const fn new(lock: Address) -> Self {
        Self {
            lock,
            confirmations: 1,
        }
    }
}

pub struct WithdrawAction<P> {
    provider: P,
    action: Withdraw,
}

impl<P: Provider + Clone> WithdrawAction<P> {
    pub const fn new(provider: P, action: Withdraw) -> Self {
        Self { provider, action }
    }

    pub const fn lock(&self) -> Address {
        self.action.lock
    }
}

impl<P> Action for WithdrawAction<P>
where
    P: Provider + Clone,
{
    async fn execute(&self) -> eyre::Result<Outcome> {
        let contract = Lock::new(self.action.lock, &self.provider);

        let tx = contract.withdraw().send().await?;
        info!(tx_hash = %tx.tx_hash(), lock = %self.action.lock, "Withdraw transaction submitted.");

        let receipt = tx
            .with_required_confirmations(self.action.confirmations)
            .get_receipt()
            .await?;

        let amount = withdrawn_amount(
            self.action.lock,
            receipt.transaction_hash,
            receipt.status(),
            receipt.logs(),
        )?;

        info!(
            tx_hash = %receipt.transaction_hash,
            block_number = receipt.block_number,
            gas_used = receipt.gas_used,
            amount = ?amount,
            "Withdrawal confirmed."
        );

        Ok(Outcome {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: Some(U256::from(receipt.gas_used)),
            amount,
        })
    }

    fn description(&self) -> String {
        format!("Withdrawing locked balance of {}", self.action.lock)
    }
}

/// Amount reported by a confirmed withdraw transaction.
///
/// A failed status is a revert. A missing `Withdrawal` event is not an error:
/// the contract interface is assumed, not guaranteed.
fn withdrawn_amount(
    lock: Address,
    tx_hash: TxHash,
    succeeded: bool,
    logs: &[Log],
) -> eyre::Result<Option<U256>> {
    if !succeeded {
        eyre::bail!("Withdraw transaction {} reverted", tx_hash);
    }

    match parse_withdrawal_event(lock, logs) {
        Ok(amount) => Ok(Some(amount)),
        Err(e) => {
            warn!(tx_hash = %tx_hash, "{}", e);
            Ok(None)
        }
    }
}

fn parse_withdrawal_event(lock: Address, logs: &[Log]) -> eyre::Result<U256> {
    for log in logs.iter().filter(|log| log.inner.address == lock) {
        if let Ok(event) = Lock::Withdrawal::decode_log(&log.inner) {
            return Ok(event.amount);
        }
    }

    eyre::bail!("Withdrawal event not found in receipt")
}
