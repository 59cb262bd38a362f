//! Contract bindings for the deployed contracts the scripts talk to.
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod lock;
