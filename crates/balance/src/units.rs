//! Base-unit (wei) to ether conversion for display.

use alloy_primitives::{utils, U256};

/// Format a wei amount as ether.
///
/// Trailing fractional zeros are trimmed, keeping at least one digit after
/// the point: `10^18` wei is `"1.0"`, one wei is `"0.000000000000000001"`.
pub fn format_ether(amount: U256) -> String {
    let formatted = utils::format_ether(amount);

    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => format!("{formatted}.0"),
    }
}
