//! Withdraw the balance held by a deployed `Lock` contract.

pub mod chain;

use action::{Action, Outcome};
use alloy_primitives::{Address, U256};
use balance::units::format_ether;
use chain::Chain;
use std::io::Write;
use tracing::{debug, info};

/// Values observed during one withdrawal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lock: Address,
    pub account: Address,
    /// Contract balance before the withdrawal
    pub locked: U256,
    /// Account balance before the withdrawal
    pub balance_before: U256,
    /// Account balance after the withdrawal
    pub balance_after: U256,
    pub outcome: Outcome,
}

impl Report {
    /// Balance the account should hold if it received the whole lock and paid
    /// no gas. `None` on overflow.
    pub fn expected_balance(&self) -> Option<U256> {
        self.balance_before.checked_add(self.locked)
    }
}

/// Withdraw everything held by the `Lock` contract at `lock` into the signing
/// account, printing progress to `out`.
///
/// Any failure is returned as is; once the withdraw transaction fails nothing
/// else is queried or printed.
pub async fn run<C, W>(chain: &C, lock: Address, out: &mut W) -> eyre::Result<Report>
where
    C: Chain,
    W: Write,
{
    let account = chain.account();
    writeln!(out, "Lock address: {lock}")?;
    writeln!(out, "Deployer address: {account}")?;

    let locked = chain.balance(lock).await?;
    let balance_before = chain.balance(account).await?;
    debug!(%locked, %balance_before, "Balances before withdrawal");
    writeln!(
        out,
        "Current balance of {account} is {}ETH",
        format_ether(balance_before)
    )?;

    let contract = chain.lock_at(lock)?;
    info!("{}", contract.description());

    let outcome = contract.execute().await?;
    writeln!(
        out,
        "Withdrawn {}ETH from {lock} to {account}",
        format_ether(locked)
    )?;

    let balance_after = chain.balance(account).await?;
    writeln!(
        out,
        "Balance after withdrawal of {account} is {}ETH",
        format_ether(balance_after)
    )?;

    let report = Report {
        lock,
        account,
        locked,
        balance_before,
        balance_after,
        outcome,
    };

    let expected = report
        .expected_balance()
        .ok_or_else(|| eyre::eyre!("Balance overflow: {} + {}", balance_before, locked))?;
    writeln!(
        out,
        "sum of previous balance and withdrawn value: {}",
        format_ether(expected)
    )?;

    Ok(report)
}
