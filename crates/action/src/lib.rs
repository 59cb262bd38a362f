pub mod withdraw;

use alloy_primitives::{TxHash, U256};
use std::future::Future;

/// Trait for executable onchain actions.
pub trait Action: Send + Sync {
    /// Submit the action's transaction and wait until it is confirmed.
    ///
    /// A transaction that is mined but reverted is an error.
    fn execute(&self) -> impl Future<Output = eyre::Result<Outcome>> + Send;

    /// Get a human-readable description of this action.
    fn description(&self) -> String;
}

/// Outcome of a confirmed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: Option<U256>,
    /// Amount the contract reported as transferred, if it emitted one
    pub amount: Option<U256>,
}

#[cfg(test)]
pub(crate) mod test_utils {
    use alloy_provider::{network::Ethereum, Provider, RootProvider};

    /// Mock provider for unit tests.
    #[derive(Clone)]
    pub struct MockProvider;

    impl Provider for MockProvider {
        fn root(&self) -> &RootProvider<Ethereum> {
            todo!()
        }
    }
}
