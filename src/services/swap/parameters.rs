// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::error::AppError;
use crate::domain::trade::{SlippageTolerance, Trade, TradeType};
use crate::infrastructure::data::contract::ContractHandle;
use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes, U256};

const FEE_ON_TRANSFER_SUFFIX: &str = "SupportingFeeOnTransferTokens";

/// One router method call: method name, ABI arguments and native value.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapParameters {
    pub method_name: String,
    pub args: Vec<DynSolValue>,
    pub value: U256,
}

impl SwapParameters {
    pub fn supports_fee_on_transfer(&self) -> bool {
        self.method_name.ends_with(FEE_ON_TRANSFER_SUFFIX)
    }
}

/// A call candidate: the contract to call and what to call on it.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapCall {
    pub contract: ContractHandle,
    pub parameters: SwapParameters,
}

impl SwapCall {
    pub fn target(&self) -> Address {
        self.contract.address()
    }

    /// Wire calldata for this candidate.
    pub fn calldata(&self) -> Result<Bytes, AppError> {
        self.contract
            .encode_function_data(&self.parameters.method_name, &self.parameters.args)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SwapOptions {
    pub fee_on_transfer: bool,
    pub allowed_slippage: SlippageTolerance,
    pub recipient: Address,
    pub deadline: U256,
}

/// Router call for `trade` under `options`.
///
/// Fee-on-transfer methods only exist for exact-input swaps; asking for one on
/// an exact-output trade is rejected.
pub fn swap_call_parameters(trade: &Trade, options: &SwapOptions) -> Result<SwapParameters, AppError> {
    let native_in = trade.input_amount().currency.is_native();
    let native_out = trade.output_amount().currency.is_native();
    let amount_in = trade.maximum_amount_in(options.allowed_slippage)?;
    let amount_out = trade.minimum_amount_out(options.allowed_slippage)?;

    let uint = |v: U256| DynSolValue::Uint(v, 256);
    let path = DynSolValue::Array(trade.path().iter().copied().map(DynSolValue::Address).collect());
    let to = DynSolValue::Address(options.recipient);
    let deadline = uint(options.deadline);
    let fot = |base: &str| {
        if options.fee_on_transfer {
            format!("{base}{FEE_ON_TRANSFER_SUFFIX}")
        } else {
            base.to_string()
        }
    };

    let (method_name, args, value) = match trade.trade_type() {
        TradeType::ExactInput if native_in => (
            fot("swapExactETHForTokens"),
            vec![uint(amount_out), path, to, deadline],
            amount_in,
        ),
        TradeType::ExactInput if native_out => (
            fot("swapExactTokensForETH"),
            vec![uint(amount_in), uint(amount_out), path, to, deadline],
            U256::ZERO,
        ),
        TradeType::ExactInput => (
            fot("swapExactTokensForTokens"),
            vec![uint(amount_in), uint(amount_out), path, to, deadline],
            U256::ZERO,
        ),
        TradeType::ExactOutput if options.fee_on_transfer => {
            return Err(AppError::InvalidTrade(
                "fee-on-transfer swaps require an exact-input trade".into(),
            ));
        }
        TradeType::ExactOutput if native_in => (
            "swapETHForExactTokens".to_string(),
            vec![uint(amount_out), path, to, deadline],
            amount_in,
        ),
        TradeType::ExactOutput if native_out => (
            "swapTokensForExactETH".to_string(),
            vec![uint(amount_out), uint(amount_in), path, to, deadline],
            U256::ZERO,
        ),
        TradeType::ExactOutput => (
            "swapTokensForExactTokens".to_string(),
            vec![uint(amount_out), uint(amount_in), path, to, deadline],
            U256::ZERO,
        ),
    };

    Ok(SwapParameters {
        method_name,
        args,
        value,
    })
}

/// Baseline call first, then (exact-input only) the fee-on-transfer tolerant one.
pub fn swap_parameter_variants(
    trade: &Trade,
    allowed_slippage: SlippageTolerance,
    recipient: Address,
    deadline: U256,
) -> Result<Vec<SwapParameters>, AppError> {
    let mut options = SwapOptions {
        fee_on_transfer: false,
        allowed_slippage,
        recipient,
        deadline,
    };
    let mut variants = vec![swap_call_parameters(trade, &options)?];

    if trade.trade_type() == TradeType::ExactInput {
        options.fee_on_transfer = true;
        variants.push(swap_call_parameters(trade, &options)?);
    }

    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::{Currency, CurrencyAmount};

    const A: Address = Address::new([0xa1; 20]);
    const B: Address = Address::new([0xb2; 20]);
    const TO: Address = Address::new([0xcc; 20]);

    fn trade(trade_type: TradeType, input: Currency, output: Currency) -> Trade {
        Trade::new(
            trade_type,
            CurrencyAmount::new(input, U256::from(1_000u64)),
            CurrencyAmount::new(output, U256::from(2_010u64)),
            vec![A, B],
        )
        .expect("trade")
    }

    fn options(fee_on_transfer: bool) -> SwapOptions {
        SwapOptions {
            fee_on_transfer,
            allowed_slippage: SlippageTolerance::from_bips(50),
            recipient: TO,
            deadline: U256::from(1_700_000_000u64),
        }
    }

    fn uint(v: u64) -> DynSolValue {
        DynSolValue::Uint(U256::from(v), 256)
    }

    fn path() -> DynSolValue {
        DynSolValue::Array(vec![DynSolValue::Address(A), DynSolValue::Address(B)])
    }

    #[test]
    fn exact_input_token_to_token() {
        let t = trade(TradeType::ExactInput, Currency::Token(A), Currency::Token(B));
        let p = swap_call_parameters(&t, &options(false)).expect("params");
        assert_eq!(p.method_name, "swapExactTokensForTokens");
        assert_eq!(
            p.args,
            vec![
                uint(1_000),
                uint(2_000),
                path(),
                DynSolValue::Address(TO),
                uint(1_700_000_000)
            ]
        );
        assert_eq!(p.value, U256::ZERO);
        assert!(!p.supports_fee_on_transfer());

        let fot = swap_call_parameters(&t, &options(true)).expect("params");
        assert_eq!(fot.method_name, "swapExactTokensForTokensSupportingFeeOnTransferTokens");
        assert_eq!(fot.args, p.args);
        assert!(fot.supports_fee_on_transfer());
    }

    #[test]
    fn exact_input_native_in_pays_value() {
        let t = trade(TradeType::ExactInput, Currency::Native, Currency::Token(B));
        let p = swap_call_parameters(&t, &options(true)).expect("params");
        assert_eq!(p.method_name, "swapExactETHForTokensSupportingFeeOnTransferTokens");
        assert_eq!(p.args.len(), 4);
        assert_eq!(p.args[0], uint(2_000));
        assert_eq!(p.value, U256::from(1_000u64));
    }

    #[test]
    fn exact_input_native_out() {
        let t = trade(TradeType::ExactInput, Currency::Token(A), Currency::Native);
        let p = swap_call_parameters(&t, &options(false)).expect("params");
        assert_eq!(p.method_name, "swapExactTokensForETH");
        assert_eq!(p.value, U256::ZERO);
    }

    #[test]
    fn exact_output_orders_out_before_max_in() {
        let t = trade(TradeType::ExactOutput, Currency::Token(A), Currency::Token(B));
        let p = swap_call_parameters(&t, &options(false)).expect("params");
        assert_eq!(p.method_name, "swapTokensForExactTokens");
        assert_eq!(p.args[0], uint(2_010));
        assert_eq!(p.args[1], uint(1_005));

        let native_in = trade(TradeType::ExactOutput, Currency::Native, Currency::Token(B));
        let p = swap_call_parameters(&native_in, &options(false)).expect("params");
        assert_eq!(p.method_name, "swapETHForExactTokens");
        assert_eq!(p.value, U256::from(1_005u64));

        let native_out = trade(TradeType::ExactOutput, Currency::Token(A), Currency::Native);
        let p = swap_call_parameters(&native_out, &options(false)).expect("params");
        assert_eq!(p.method_name, "swapTokensForExactETH");
    }

    #[test]
    fn exact_output_rejects_fee_on_transfer() {
        let t = trade(TradeType::ExactOutput, Currency::Token(A), Currency::Token(B));
        assert!(matches!(
            swap_call_parameters(&t, &options(true)),
            Err(AppError::InvalidTrade(_))
        ));
    }

    #[test]
    fn unrepresentable_max_in_is_invalid_trade() {
        let t = Trade::new(
            TradeType::ExactOutput,
            CurrencyAmount::new(Currency::Token(A), U256::MAX),
            CurrencyAmount::new(Currency::Token(B), U256::from(1u64)),
            vec![A, B],
        )
        .expect("trade");
        assert!(matches!(
            swap_call_parameters(&t, &options(false)),
            Err(AppError::InvalidTrade(_))
        ));
    }

    #[test]
    fn variants_follow_trade_type() {
        let slippage = SlippageTolerance::from_bips(50);
        let deadline = U256::from(1u64);

        let exact_in = trade(TradeType::ExactInput, Currency::Token(A), Currency::Token(B));
        let variants = swap_parameter_variants(&exact_in, slippage, TO, deadline).expect("variants");
        assert_eq!(variants.len(), 2);
        assert!(!variants[0].supports_fee_on_transfer());
        assert!(variants[1].supports_fee_on_transfer());

        let exact_out = trade(TradeType::ExactOutput, Currency::Token(A), Currency::Token(B));
        let variants = swap_parameter_variants(&exact_out, slippage, TO, deadline).expect("variants");
        assert_eq!(variants.len(), 1);
        assert!(!variants[0].supports_fee_on_transfer());
    }
}
