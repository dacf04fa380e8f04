// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::domain::constants::BIPS_BASE;
use crate::domain::error::AppError;
use alloy::primitives::{Address, U256, U512};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

/// Either the chain's native coin or an ERC20 token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    Native,
    Token(Address),
}

impl Currency {
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub raw: U256,
}

impl CurrencyAmount {
    pub fn new(currency: Currency, raw: U256) -> Self {
        Self { currency, raw }
    }
}

/// Accepted price movement between quote and execution, in bips of [`BIPS_BASE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlippageTolerance {
    bips: u32,
}

impl SlippageTolerance {
    pub fn from_bips(bips: u32) -> Self {
        Self { bips }
    }

    pub fn bips(&self) -> u32 {
        self.bips
    }

    /// `amount * (1 + slippage)`, rounded down. Errors when the bound does
    /// not fit in 256 bits.
    pub fn widen(&self, amount: U256) -> Result<U256, AppError> {
        scale(amount, BIPS_BASE + u64::from(self.bips), BIPS_BASE)
    }

    /// `amount / (1 + slippage)`, rounded down.
    pub fn shrink(&self, amount: U256) -> Result<U256, AppError> {
        scale(amount, BIPS_BASE, BIPS_BASE + u64::from(self.bips))
    }
}

/// `amount * numerator / denominator` with a 512-bit intermediate product.
fn scale(amount: U256, numerator: u64, denominator: u64) -> Result<U256, AppError> {
    let product: U512 = amount.widening_mul(U256::from(numerator));
    let quotient = product / U512::from(denominator);
    U256::checked_from_limbs_slice(quotient.as_limbs()).ok_or_else(|| {
        AppError::InvalidTrade(format!(
            "slippage bound {amount} * {numerator} / {denominator} exceeds uint256"
        ))
    })
}

/// A priced swap produced by the routing engine.
///
/// The route path holds wrapped token addresses; a native leg is expressed by
/// the currency on that side, with the wrapped native token at the path end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TradeFile", into = "TradeFile")]
pub struct Trade {
    trade_type: TradeType,
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
    path: Vec<Address>,
}

#[derive(Serialize, Deserialize)]
struct TradeFile {
    trade_type: TradeType,
    input: CurrencyAmount,
    output: CurrencyAmount,
    path: Vec<Address>,
}

impl TryFrom<TradeFile> for Trade {
    type Error = AppError;

    fn try_from(file: TradeFile) -> Result<Self, Self::Error> {
        Trade::new(file.trade_type, file.input, file.output, file.path)
    }
}

impl From<Trade> for TradeFile {
    fn from(trade: Trade) -> Self {
        TradeFile {
            trade_type: trade.trade_type,
            input: trade.input_amount,
            output: trade.output_amount,
            path: trade.path,
        }
    }
}

impl Trade {
    pub fn new(
        trade_type: TradeType,
        input_amount: CurrencyAmount,
        output_amount: CurrencyAmount,
        path: Vec<Address>,
    ) -> Result<Self, AppError> {
        if path.len() < 2 {
            return Err(AppError::InvalidTrade(format!(
                "route path needs at least two tokens, got {}",
                path.len()
            )));
        }
        if input_amount.currency.is_native() && output_amount.currency.is_native() {
            return Err(AppError::InvalidTrade(
                "native currency on both sides of the swap".into(),
            ));
        }
        if let Currency::Token(token) = input_amount.currency
            && path.first() != Some(&token)
        {
            return Err(AppError::InvalidTrade(format!(
                "input token {token:#x} does not start the route path"
            )));
        }
        if let Currency::Token(token) = output_amount.currency
            && path.last() != Some(&token)
        {
            return Err(AppError::InvalidTrade(format!(
                "output token {token:#x} does not end the route path"
            )));
        }
        if input_amount.raw.is_zero() || output_amount.raw.is_zero() {
            return Err(AppError::InvalidTrade("zero trade amount".into()));
        }

        Ok(Self {
            trade_type,
            input_amount,
            output_amount,
            path,
        })
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    pub fn path(&self) -> &[Address] {
        &self.path
    }

    /// Most the sender may pay: the quoted input for exact-input trades, the
    /// slippage-widened input for exact-output trades.
    pub fn maximum_amount_in(&self, slippage: SlippageTolerance) -> Result<U256, AppError> {
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.raw),
            TradeType::ExactOutput => slippage.widen(self.input_amount.raw),
        }
    }

    /// Least the recipient must receive: the slippage-shrunk output for
    /// exact-input trades, the quoted output for exact-output trades.
    pub fn minimum_amount_out(&self, slippage: SlippageTolerance) -> Result<U256, AppError> {
        match self.trade_type {
            TradeType::ExactInput => slippage.shrink(self.output_amount.raw),
            TradeType::ExactOutput => Ok(self.output_amount.raw),
        }
    }
}
