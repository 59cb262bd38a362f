//! `Lock` contract bindings.
//!
//! The contract holds ether until `unlockTime`; afterwards its owner can
//! withdraw the full balance.

use alloy_primitives::{address, Address};
use alloy_sol_types::sol;

/// Deployed `Lock` instance on the M1 devnet.
pub const LOCK_ADDRESS: Address = address!("0x5B97bddC875379c58d96bc810Da8712D39B0d348");

sol! {
    /// Time-locked ether vault
    #[sol(rpc)]
    interface Lock {
        /// Emitted when the owner withdraws the locked balance
        event Withdrawal(uint amount, uint when);

        /// Timestamp after which withdrawal is allowed
        function unlockTime() external view returns (uint);

        /// Account allowed to withdraw
        function owner() external view returns (address payable);

        /// Transfer the whole balance to the owner.
        /// Reverts before `unlockTime` or when called by anyone but the owner.
        function withdraw() external;
    }
}
