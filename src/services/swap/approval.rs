// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::domain::trade::{SlippageTolerance, Trade};
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Whether the router may spend the trade's input token on the sender's behalf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    #[default]
    Unknown,
    NotApproved,
    Pending,
    Approved,
}

/// Approval needed for `trade`, judged against the router allowance the
/// allowance tracker last observed (`None` while the read is in flight).
pub fn approval_state_for_trade(
    trade: &Trade,
    slippage: SlippageTolerance,
    allowance: Option<U256>,
    approval_pending: bool,
) -> ApprovalState {
    if trade.input_amount().currency.is_native() {
        return ApprovalState::Approved;
    }
    let Some(allowance) = allowance else {
        return ApprovalState::Unknown;
    };
    // A maximum input beyond uint256 is never covered by an allowance.
    let covered = trade
        .maximum_amount_in(slippage)
        .is_ok_and(|max_in| allowance >= max_in);
    match (covered, approval_pending) {
        (true, _) => ApprovalState::Approved,
        (false, true) => ApprovalState::Pending,
        (false, false) => ApprovalState::NotApproved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::{Currency, CurrencyAmount, TradeType};
    use alloy::primitives::Address;

    fn trade(input: Currency, trade_type: TradeType) -> Trade {
        let a = Address::from([0xa1; 20]);
        let b = Address::from([0xb2; 20]);
        Trade::new(
            trade_type,
            CurrencyAmount::new(input, U256::from(1_000u64)),
            CurrencyAmount::new(Currency::Token(b), U256::from(2_000u64)),
            vec![a, b],
        )
        .expect("trade")
    }

    #[test]
    fn native_input_never_needs_approval() {
        let t = trade(Currency::Native, TradeType::ExactInput);
        let slippage = SlippageTolerance::from_bips(50);
        assert_eq!(
            approval_state_for_trade(&t, slippage, None, false),
            ApprovalState::Approved
        );
    }

    #[test]
    fn unknown_allowance_is_unknown() {
        let t = trade(Currency::Token(Address::from([0xa1; 20])), TradeType::ExactInput);
        assert_eq!(
            approval_state_for_trade(&t, SlippageTolerance::from_bips(50), None, true),
            ApprovalState::Unknown
        );
    }

    #[test]
    fn short_allowance_is_not_approved_or_pending() {
        let t = trade(Currency::Token(Address::from([0xa1; 20])), TradeType::ExactInput);
        let slippage = SlippageTolerance::from_bips(50);
        let short = Some(U256::from(999u64));
        assert_eq!(
            approval_state_for_trade(&t, slippage, short, false),
            ApprovalState::NotApproved
        );
        assert_eq!(
            approval_state_for_trade(&t, slippage, short, true),
            ApprovalState::Pending
        );
        assert_eq!(
            approval_state_for_trade(&t, slippage, Some(U256::from(1_000u64)), false),
            ApprovalState::Approved
        );
    }

    #[test]
    fn exact_output_compares_against_widened_input() {
        let t = trade(Currency::Token(Address::from([0xa1; 20])), TradeType::ExactOutput);
        let slippage = SlippageTolerance::from_bips(50);
        // maximum in = 1_005
        assert_eq!(
            approval_state_for_trade(&t, slippage, Some(U256::from(1_004u64)), false),
            ApprovalState::NotApproved
        );
        assert_eq!(
            approval_state_for_trade(&t, slippage, Some(U256::from(1_005u64)), false),
            ApprovalState::Approved
        );
    }

    #[test]
    fn unrepresentable_max_in_is_never_approved() {
        let a = Address::from([0xa1; 20]);
        let b = Address::from([0xb2; 20]);
        let t = Trade::new(
            TradeType::ExactOutput,
            CurrencyAmount::new(Currency::Token(a), U256::MAX),
            CurrencyAmount::new(Currency::Token(b), U256::from(1u64)),
            vec![a, b],
        )
        .expect("trade");
        assert_eq!(
            approval_state_for_trade(&t, SlippageTolerance::from_bips(50), Some(U256::MAX), false),
            ApprovalState::NotApproved
        );
    }
}
