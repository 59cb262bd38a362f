//! Withdrawal script against an in-memory chain.


use alloy_primitives::U256;
use binding::lock::LOCK_ADDRESS;
use setup::{ether, SimulatedChain, DEPLOYER};
use withdrawer::run;

fn funded_chain(locked: u64, balance: u64) -> SimulatedChain {
    let chain = SimulatedChain::new(DEPLOYER);
    chain.fund(LOCK_ADDRESS, ether(locked));
    chain.fund(DEPLOYER, ether(balance));
    chain
}

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_prints_progress_and_reconciliation() {
    let chain = funded_chain(2, 10);
    let mut out = Vec::new();

    run(&chain, LOCK_ADDRESS, &mut out).await.unwrap();

    assert_eq!(
        lines(&out),
        vec![
            format!("Lock address: {LOCK_ADDRESS}"),
            format!("Deployer address: {DEPLOYER}"),
            format!("Current balance of {DEPLOYER} is 10.0ETH"),
            format!("Withdrawn 2.0ETH from {LOCK_ADDRESS} to {DEPLOYER}"),
            format!("Balance after withdrawal of {DEPLOYER} is 12.0ETH"),
            "sum of previous balance and withdrawn value: 12.0".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_reconciliation_is_before_plus_locked() {
    let chain = funded_chain(2, 10);
    chain.charge_gas(U256::from(1_000_000_000_000_000u64));
    let mut out = Vec::new();

    let report = run(&chain, LOCK_ADDRESS, &mut out).await.unwrap();

    assert_eq!(report.locked, ether(2));
    assert_eq!(report.balance_before, ether(10));
    assert_eq!(report.expected_balance(), Some(ether(12)));
    // gas is paid out of the withdrawal, the sum line ignores it
    assert_eq!(
        lines(&out).last().unwrap(),
        "sum of previous balance and withdrawn value: 12.0"
    );
    assert_eq!(
        lines(&out)[4],
        format!("Balance after withdrawal of {DEPLOYER} is 11.999ETH")
    );
}

#[tokio::test]
async fn test_balance_increases_without_gas() {
    let chain = funded_chain(2, 10);
    let mut out = Vec::new();

    let report = run(&chain, LOCK_ADDRESS, &mut out).await.unwrap();

    assert!(report.balance_after > report.balance_before);
    assert_eq!(report.balance_after, ether(12));
    assert_eq!(report.outcome.amount, Some(ether(2)));
    assert_eq!(chain.balance_of(LOCK_ADDRESS), U256::ZERO);
}

#[tokio::test]
async fn test_revert_stops_before_final_balance() {
    let chain = funded_chain(2, 10);
    chain.revert_with("You can't withdraw yet");
    let mut out = Vec::new();

    let err = run(&chain, LOCK_ADDRESS, &mut out).await.unwrap_err();

    assert!(err.to_string().contains("You can't withdraw yet"));
    assert_eq!(chain.submitted(), 1);

    let printed = lines(&out);
    assert_eq!(printed.len(), 3);
    assert!(printed.iter().all(|line| !line.starts_with("Balance after withdrawal")));
    assert!(printed.iter().all(|line| !line.starts_with("sum of previous balance")));

    // nothing moved
    assert_eq!(chain.balance_of(LOCK_ADDRESS), ether(2));
    assert_eq!(chain.balance_of(DEPLOYER), ether(10));
}

#[tokio::test]
async fn test_second_run_against_empty_lock() {
    let chain = funded_chain(2, 10);

    let mut first = Vec::new();
    run(&chain, LOCK_ADDRESS, &mut first).await.unwrap();

    let mut second = Vec::new();
    let report = run(&chain, LOCK_ADDRESS, &mut second).await.unwrap();

    assert_eq!(report.locked, U256::ZERO);
    assert_eq!(report.balance_before, ether(12));
    assert_eq!(report.balance_after, ether(12));
    assert_eq!(
        lines(&second)[3],
        format!("Withdrawn 0.0ETH from {LOCK_ADDRESS} to {DEPLOYER}")
    );
    assert_eq!(chain.submitted(), 2);
}

#[tokio::test]
async fn test_empty_lock_that_reverts() {
    let chain = funded_chain(0, 10);
    chain.revert_with("nothing to withdraw");
    let mut out = Vec::new();

    // balance queries of zero succeed; the failure comes from withdraw()
    let err = run(&chain, LOCK_ADDRESS, &mut out).await.unwrap_err();

    assert!(err.to_string().contains("nothing to withdraw"));
    assert_eq!(
        lines(&out)[2],
        format!("Current balance of {DEPLOYER} is 10.0ETH")
    );
}

#[tokio::test]
async fn test_single_withdrawal_per_run() {
    let chain = funded_chain(1, 1);
    let mut out = Vec::new();

    run(&chain, LOCK_ADDRESS, &mut out).await.unwrap();

    assert_eq!(chain.submitted(), 1);
}
