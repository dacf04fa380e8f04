// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@on1.no>

use crate::common::error::AppError;
use alloy::dyn_abi::{DynSolValue, JsonAbiExt};
use alloy::json_abi::JsonAbi;
use alloy::primitives::Bytes;

/// Human-readable ABI of the V2-style swap router.
pub const SWAP_ROUTER_V2_ABI: &[&str] = &[
    "function swapExactETHForTokens(uint256 amountOutMin, address[] path, address to, uint256 deadline) payable returns (uint256[] amounts)",
    "function swapETHForExactTokens(uint256 amountOut, address[] path, address to, uint256 deadline) payable returns (uint256[] amounts)",
    "function swapExactTokensForETH(uint256 amountIn, uint256 amountOutMin, address[] path, address to, uint256 deadline) returns (uint256[] amounts)",
    "function swapTokensForExactETH(uint256 amountOut, uint256 amountInMax, address[] path, address to, uint256 deadline) returns (uint256[] amounts)",
    "function swapExactTokensForTokens(uint256 amountIn, uint256 amountOutMin, address[] path, address to, uint256 deadline) returns (uint256[] amounts)",
    "function swapTokensForExactTokens(uint256 amountOut, uint256 amountInMax, address[] path, address to, uint256 deadline) returns (uint256[] amounts)",
    "function swapExactETHForTokensSupportingFeeOnTransferTokens(uint256 amountOutMin, address[] path, address to, uint256 deadline) payable",
    "function swapExactTokensForETHSupportingFeeOnTransferTokens(uint256 amountIn, uint256 amountOutMin, address[] path, address to, uint256 deadline)",
    "function swapExactTokensForTokensSupportingFeeOnTransferTokens(uint256 amountIn, uint256 amountOutMin, address[] path, address to, uint256 deadline)",
];

/// Human-readable ABI of the smart-contract wallet entry points we call.
pub const SMART_WALLET_ABI: &[&str] = &["function tryCatch(address to, uint256 value, bytes data)"];

/// A named contract ABI that can turn `(method, args)` into calldata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInterface {
    name: &'static str,
    abi: JsonAbi,
}

impl ContractInterface {
    pub fn parse(name: &'static str, signatures: &[&str]) -> Result<Self, AppError> {
        let abi = JsonAbi::parse(signatures.iter().copied()).map_err(|e| {
            AppError::Initialization(format!("Failed to parse ABI {}: {}", name, e))
        })?;
        tracing::debug!(target: "abi", name, functions = abi.functions().count(), "Loaded ABI");
        Ok(Self { name, abi })
    }

    pub fn swap_router_v2() -> Result<Self, AppError> {
        Self::parse("swap_router_v2", SWAP_ROUTER_V2_ABI)
    }

    pub fn smart_wallet() -> Result<Self, AppError> {
        Self::parse("smart_wallet", SMART_WALLET_ABI)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub fn has_method(&self, method: &str) -> bool {
        self.abi.function(method).is_some()
    }

    /// Selector-prefixed calldata for `method(args)`.
    ///
    /// Fails on unknown or overloaded method names and on arguments that do
    /// not match the declared parameter types.
    pub fn encode_function_data(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<Bytes, AppError> {
        let encoding_error = |reason: String| AppError::Encoding {
            method: method.to_string(),
            reason,
        };

        let overloads = self
            .abi
            .function(method)
            .ok_or_else(|| encoding_error(format!("no such method on {}", self.name)))?;
        let function = match overloads.as_slice() {
            [single] => single,
            _ => {
                return Err(encoding_error(format!(
                    "{} overloads on {}",
                    overloads.len(),
                    self.name
                )));
            }
        };

        function
            .abi_encode_input(args)
            .map(Bytes::from)
            .map_err(|e| encoding_error(e.to_string()))
    }
}
