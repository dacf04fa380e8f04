// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::error::AppError;
use crate::infrastructure::data::abi::ContractInterface;
use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, Bytes};
use std::sync::Arc;

/// A deployed contract on a given chain, together with the ABI used to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractHandle {
    address: Address,
    chain_id: u64,
    interface: Arc<ContractInterface>,
}

impl ContractHandle {
    pub fn new(address: Address, chain_id: u64, interface: Arc<ContractInterface>) -> Self {
        Self {
            address,
            chain_id,
            interface,
        }
    }

    /// Handle for a contract wallet deployed at `account`.
    pub fn smart_wallet(account: Address, chain_id: u64) -> Result<Self, AppError> {
        Ok(Self::new(
            account,
            chain_id,
            Arc::new(ContractInterface::smart_wallet()?),
        ))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn interface(&self) -> &ContractInterface {
        &self.interface
    }

    pub fn encode_function_data(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<Bytes, AppError> {
        self.interface.encode_function_data(method, args)
    }
}
