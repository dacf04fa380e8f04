// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@on1.no>

use crate::common::error::AppError;
use url::Url;

/// An RPC endpoint the wallet session is currently bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    chain_id: u64,
    endpoint: Url,
}

impl Connection {
    pub fn new(chain_id: u64, endpoint: Url) -> Self {
        Self { chain_id, endpoint }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// True once the connection serves `chain_id`; false mid network switch.
    pub fn serves(&self, chain_id: u64) -> bool {
        self.chain_id == chain_id
    }
}

pub struct ConnectionFactory;

impl ConnectionFactory {
    pub fn http(chain_id: u64, rpc_url: &str) -> Result<Connection, AppError> {
        let url =
            Url::parse(rpc_url).map_err(|e| AppError::Config(format!("Invalid RPC URL: {}", e)))?;
        match url.scheme() {
            "http" | "https" => Ok(Connection::new(chain_id, url)),
            other => Err(AppError::Config(format!(
                "Unsupported RPC scheme '{other}' for chain {chain_id}"
            ))),
        }
    }
}
