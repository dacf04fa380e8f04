// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::error::AppError;
use crate::infrastructure::data::contract::ContractHandle;
use crate::services::swap::approval::ApprovalState;
use crate::services::swap::parameters::{SwapCall, SwapParameters};
use alloy::dyn_abi::DynSolValue;
use alloy::primitives::U256;

/// Wallet method that runs an inner call and absorbs its revert.
pub const SMART_WALLET_EXECUTE_METHOD: &str = "tryCatch";

/// What kind of account is sending the swap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccountKind {
    #[default]
    ExternallyOwned,
    /// Contract wallet able to execute calls on the sender's behalf.
    SmartWallet(ContractHandle),
}

impl AccountKind {
    pub fn smart_wallet(&self) -> Option<&ContractHandle> {
        match self {
            AccountKind::ExternallyOwned => None,
            AccountKind::SmartWallet(handle) => Some(handle),
        }
    }
}

/// The wallet every candidate must be routed through, if any.
///
/// Only a contract wallet whose input token is known to be unapproved gets
/// indirection; an EOA cannot avoid the allowance revert anyway.
pub fn indirection_wallet(
    account_kind: &AccountKind,
    approval_state: ApprovalState,
) -> Option<&ContractHandle> {
    match approval_state {
        ApprovalState::NotApproved => account_kind.smart_wallet(),
        ApprovalState::Unknown | ApprovalState::Pending | ApprovalState::Approved => None,
    }
}

/// Pair `parameters` with the router, or wrap them into a best-effort wallet
/// call when `wallet` is set.
pub fn adapt_swap_call(
    router: &ContractHandle,
    parameters: SwapParameters,
    wallet: Option<&ContractHandle>,
) -> Result<SwapCall, AppError> {
    match wallet {
        Some(wallet) => wrap_in_try_catch(router, wallet, &parameters),
        None => Ok(SwapCall {
            contract: router.clone(),
            parameters,
        }),
    }
}

pub fn wrap_in_try_catch(
    router: &ContractHandle,
    wallet: &ContractHandle,
    parameters: &SwapParameters,
) -> Result<SwapCall, AppError> {
    let swap_data = router.encode_function_data(&parameters.method_name, &parameters.args)?;

    Ok(SwapCall {
        contract: wallet.clone(),
        parameters: SwapParameters {
            method_name: SMART_WALLET_EXECUTE_METHOD.to_string(),
            args: vec![
                DynSolValue::Address(router.address()),
                DynSolValue::Uint(U256::ZERO, 256),
                DynSolValue::Bytes(swap_data.to_vec()),
            ],
            value: U256::ZERO,
        },
    })
}
