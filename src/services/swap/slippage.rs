// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::constants::INITIAL_ALLOWED_SLIPPAGE;
use crate::domain::trade::SlippageTolerance;
use alloy::primitives::U256;

/// User slippage in bips, falling back to [`INITIAL_ALLOWED_SLIPPAGE`].
pub fn resolve_slippage(allowed_slippage_bips: Option<u32>) -> SlippageTolerance {
    SlippageTolerance::from_bips(allowed_slippage_bips.unwrap_or(INITIAL_ALLOWED_SLIPPAGE))
}

/// Absolute deadline `ttl_secs` after the latest block, or `None` while the
/// block timestamp is unknown.
pub fn transaction_deadline(block_timestamp: Option<u64>, ttl_secs: u64) -> Option<U256> {
    block_timestamp.map(|ts| U256::from(ts).saturating_add(U256::from(ttl_secs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::DEFAULT_DEADLINE_FROM_NOW;

    #[test]
    fn missing_slippage_uses_initial_allowance() {
        assert_eq!(resolve_slippage(None).bips(), INITIAL_ALLOWED_SLIPPAGE);
        assert_eq!(resolve_slippage(Some(0)).bips(), 0);
        assert_eq!(resolve_slippage(Some(300)).bips(), 300);
    }

    #[test]
    fn deadline_follows_block_timestamp() {
        assert_eq!(
            transaction_deadline(Some(1_700_000_000), DEFAULT_DEADLINE_FROM_NOW),
            Some(U256::from(1_700_001_200u64))
        );
        assert_eq!(transaction_deadline(None, DEFAULT_DEADLINE_FROM_NOW), None);
    }
}
