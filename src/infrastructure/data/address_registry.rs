// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::app::config::GlobalSettings;
use crate::common::constants::SWAP_ROUTERS_BY_CHAIN;
use crate::common::error::AppError;
use crate::infrastructure::data::abi::ContractInterface;
use crate::infrastructure::data::contract::ContractHandle;
use crate::network::provider::Connection;
use alloy::primitives::Address;
use std::collections::HashMap;
use std::sync::Arc;

/// Canonical swap router per chain.
#[derive(Clone, Debug)]
pub struct RouterRegistry {
    routers: HashMap<u64, Address>,
    interface: Arc<ContractInterface>,
}

impl RouterRegistry {
    pub fn empty() -> Result<Self, AppError> {
        Ok(Self {
            routers: HashMap::new(),
            interface: Arc::new(ContractInterface::swap_router_v2()?),
        })
    }

    pub fn with_defaults() -> Result<Self, AppError> {
        let mut registry = Self::empty()?;
        registry.routers.extend(SWAP_ROUTERS_BY_CHAIN.iter());
        Ok(registry)
    }

    /// Built-in routers, overridden by `routers_by_chain` from settings.
    pub fn from_settings(settings: &GlobalSettings) -> Result<Self, AppError> {
        let mut registry = Self::with_defaults()?;
        for (chain_id, router) in settings.router_overrides()? {
            if let Some(previous) = registry.routers.insert(chain_id, router)
                && previous != router
            {
                tracing::info!(
                    target: "registry",
                    chain_id,
                    previous = %format!("{:#x}", previous),
                    router = %format!("{:#x}", router),
                    "Router overridden by config"
                );
            }
        }
        Ok(registry)
    }

    pub fn with_router(mut self, chain_id: u64, router: Address) -> Self {
        self.routers.insert(chain_id, router);
        self
    }

    pub fn router_address(&self, chain_id: u64) -> Option<Address> {
        self.routers.get(&chain_id).copied()
    }

    /// Router contract for `chain_id`, or `None` when the chain has no router
    /// or the connection is not (yet) bound to that chain.
    pub fn router_contract(&self, chain_id: u64, connection: &Connection) -> Option<ContractHandle> {
        if !connection.serves(chain_id) {
            tracing::debug!(
                target: "registry",
                chain_id,
                connection_chain = connection.chain_id(),
                "Connection not bound to requested chain"
            );
            return None;
        }
        let Some(address) = self.router_address(chain_id) else {
            tracing::debug!(target: "registry", chain_id, "No swap router for chain");
            return None;
        };
        Some(ContractHandle::new(address, chain_id, self.interface.clone()))
    }
}
