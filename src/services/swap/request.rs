// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::constants::BIPS_BASE;
use crate::common::error::AppError;
use crate::domain::trade::Trade;
use crate::infrastructure::data::contract::ContractHandle;
use crate::network::provider::Connection;
use crate::services::swap::approval::{ApprovalState, approval_state_for_trade};
use crate::services::swap::assembler::SwapCallContext;
use crate::services::swap::recipient::{NameResolver, RecipientSpec};
use crate::services::swap::slippage::{resolve_slippage, transaction_deadline};
use crate::services::swap::smart_wallet::AccountKind;
use alloy::primitives::{Address, U256};
use serde::Deserialize;

/// Snapshot of wallet and trade state, as read from a request file.
///
/// Every field may be absent; absent inputs produce an empty candidate list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SwapRequest {
    pub trade: Option<Trade>,
    pub account: Option<Address>,
    pub chain_id: Option<u64>,
    /// Literal address or a name looked up in the configured name table.
    pub recipient: Option<String>,
    pub allowed_slippage_bps: Option<u32>,
    /// Absolute deadline. Takes precedence over `block_timestamp`.
    pub deadline: Option<U256>,
    pub block_timestamp: Option<u64>,
    /// The account is a contract wallet exposing `tryCatch`.
    pub smart_wallet: bool,
    /// Explicit approval state. Derived from `allowance` when absent.
    pub approval_state: Option<ApprovalState>,
    pub allowance: Option<U256>,
    pub approval_pending: bool,
}

impl SwapRequest {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::InvalidTrade(format!("malformed swap request: {e}")))
    }

    pub fn into_context(
        self,
        resolver: &impl NameResolver,
        connection: Option<Connection>,
        deadline_ttl_secs: u64,
    ) -> Result<SwapCallContext, AppError> {
        if let Some(bips) = self.allowed_slippage_bps
            && u64::from(bips) >= BIPS_BASE
        {
            return Err(AppError::InvalidTrade(format!(
                "allowed slippage {bips} bips must be below {BIPS_BASE}"
            )));
        }

        let recipient = RecipientSpec::lookup(self.recipient.as_deref(), resolver);
        let deadline = self
            .deadline
            .or_else(|| transaction_deadline(self.block_timestamp, deadline_ttl_secs));

        let account_kind = match (self.smart_wallet, self.account, self.chain_id) {
            (true, Some(account), Some(chain_id)) => {
                AccountKind::SmartWallet(ContractHandle::smart_wallet(account, chain_id)?)
            }
            _ => AccountKind::ExternallyOwned,
        };

        let approval_state = match (self.approval_state, self.trade.as_ref()) {
            (Some(state), _) => state,
            (None, Some(trade)) => approval_state_for_trade(
                trade,
                resolve_slippage(self.allowed_slippage_bps),
                self.allowance,
                self.approval_pending,
            ),
            (None, None) => ApprovalState::Unknown,
        };

        Ok(SwapCallContext {
            trade: self.trade,
            allowed_slippage: self.allowed_slippage_bps,
            recipient,
            account: self.account,
            chain_id: self.chain_id,
            connection,
            deadline,
            account_kind,
            approval_state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::swap::recipient::StaticNameResolver;
    use std::collections::HashMap;

    const REQUEST: &str = r#"{
        "trade": {
            "trade_type": "exact_input",
            "input": { "currency": { "token": "0xa1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1" }, "raw": "1000" },
            "output": { "currency": "native", "raw": "2000" },
            "path": [
                "0xa1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1",
                "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c"
            ]
        },
        "account": "0x1111111111111111111111111111111111111111",
        "chain_id": 56,
        "recipient": "treasury",
        "block_timestamp": 1700000000,
        "smart_wallet": true,
        "allowance": "0x0"
    }"#;

    fn resolver() -> StaticNameResolver {
        StaticNameResolver::new(HashMap::from([(
            "Treasury".to_string(),
            Address::from([0x22; 20]),
        )]))
    }

    #[test]
    fn request_fills_derived_context_fields() {
        let request = SwapRequest::from_json(REQUEST).expect("request");
        let ctx = request
            .into_context(&resolver(), None, 1_200)
            .expect("context");

        assert_eq!(ctx.deadline, Some(U256::from(1_700_001_200u64)));
        assert_eq!(
            ctx.recipient,
            RecipientSpec::Named {
                identifier: "treasury".to_string(),
                resolved: Some(Address::from([0x22; 20])),
            }
        );
        assert_eq!(ctx.approval_state, ApprovalState::NotApproved);
        assert_eq!(
            ctx.account_kind.smart_wallet().map(ContractHandle::address),
            Some(Address::from([0x11; 20]))
        );
        assert!(ctx.connection.is_none());
    }

    #[test]
    fn explicit_fields_win_over_derived_ones() {
        let mut request = SwapRequest::from_json(REQUEST).expect("request");
        request.deadline = Some(U256::from(42u64));
        request.approval_state = Some(ApprovalState::Approved);
        let ctx = request
            .into_context(&resolver(), None, 1_200)
            .expect("context");
        assert_eq!(ctx.deadline, Some(U256::from(42u64)));
        assert_eq!(ctx.approval_state, ApprovalState::Approved);
    }

    #[test]
    fn empty_request_is_unready_not_an_error() {
        let ctx = SwapRequest::from_json("{}")
            .expect("request")
            .into_context(&resolver(), None, 1_200)
            .expect("context");
        assert_eq!(ctx, SwapCallContext::default());
    }

    #[test]
    fn rejects_invalid_trade_and_slippage() {
        let mismatched_output = REQUEST.replace(
            r#""currency": "native""#,
            r#""currency": { "token": "0xb2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2" }"#,
        );
        assert!(matches!(
            SwapRequest::from_json(&mismatched_output),
            Err(AppError::InvalidTrade(_))
        ));

        let request = SwapRequest {
            allowed_slippage_bps: Some(10_000),
            ..SwapRequest::default()
        };
        assert!(matches!(
            request.into_context(&resolver(), None, 1_200),
            Err(AppError::InvalidTrade(_))
        ));
    }
}
