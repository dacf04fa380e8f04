// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use alloy::primitives::{Address, address};
use lazy_static::lazy_static;
use std::collections::HashMap;

// Common assets
pub const WETH_MAINNET: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
pub const WBNB_BSC: Address = address!("BB4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c");
pub const WBNB_BSC_TESTNET: Address = address!("ae13d989daC2f0dEbFf460aC112a837C89BAa7cd");

// =============================================================================
// NETWORK CONSTANTS
// =============================================================================

pub const CHAIN_ETHEREUM: u64 = 1;
pub const CHAIN_BSC: u64 = 56;
pub const CHAIN_BSC_TESTNET: u64 = 97;

// =============================================================================
// SWAP CONSTANTS
// =============================================================================

/// Denominator for every slippage ratio (parts-per-ten-thousand).
pub const BIPS_BASE: u64 = 10_000;

/// Slippage applied when the caller does not pick one (0.50%).
pub const INITIAL_ALLOWED_SLIPPAGE: u32 = 50;

/// Seconds added to the latest block timestamp to form a transaction deadline.
pub const DEFAULT_DEADLINE_FROM_NOW: u64 = 60 * 20;

lazy_static! {
    // Canonical V2-style router per chain.
    pub static ref SWAP_ROUTERS_BY_CHAIN: HashMap<u64, Address> = {
        let mut m = HashMap::new();

        // PancakeSwap
        m.insert(CHAIN_BSC, address!("10ED43C718714eb63d5aA57B78B54704E256024E"));
        m.insert(CHAIN_BSC_TESTNET, address!("D99D1c33F9fC3444f8101754aBC46c52416550D1"));

        // Uniswap
        m.insert(CHAIN_ETHEREUM, address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D"));

        m
    };

    pub static ref WRAPPED_NATIVE_BY_CHAIN: HashMap<u64, Address> = {
        let mut m = HashMap::new();
        m.insert(CHAIN_ETHEREUM, WETH_MAINNET);
        m.insert(CHAIN_BSC, WBNB_BSC);
        m.insert(CHAIN_BSC_TESTNET, WBNB_BSC_TESTNET);
        m
    };
}

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub fn default_router_for_chain(chain_id: u64) -> Option<Address> {
    SWAP_ROUTERS_BY_CHAIN.get(&chain_id).copied()
}

pub fn wrapped_native_for_chain(chain_id: u64) -> Option<Address> {
    WRAPPED_NATIVE_BY_CHAIN.get(&chain_id).copied()
}
