//! Balance monitoring for blockchain accounts and contracts.
//!
//! This crate provides a narrow interface for querying native balances from
//! blockchain providers, and formatting of base-unit amounts for display.

pub mod monitor;
pub mod units;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Represents a native balance at a specific point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The address holding the balance (account or contract)
    pub holder: Address,
    /// The balance amount in wei
    pub amount: U256,
}

/// Trait for monitoring balances on a blockchain.
pub trait Monitor: Send + Sync {
    /// Query the native balance of `holder` at the latest block.
    fn query_balance(&self, holder: Address) -> impl Future<Output = eyre::Result<Balance>> + Send;
}
