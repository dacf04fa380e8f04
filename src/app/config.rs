// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::common::parsing::{parse_address_hex, parse_boolish, parse_chain_id};
use crate::domain::constants;
use crate::domain::error::AppError;
use crate::network::provider::{Connection, ConnectionFactory};
use crate::services::swap::recipient::StaticNameResolver;
use alloy::primitives::Address;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct GlobalSettings {
    #[serde(default = "default_debug")]
    pub debug: bool,

    #[serde(default = "default_false")]
    pub log_json: bool,

    /// Slippage applied when the request carries none.
    #[serde(default = "default_slippage_bps")]
    pub allowed_slippage_bps: u32,

    /// Seconds added to the block timestamp to form the swap deadline.
    #[serde(default = "default_deadline_ttl_secs")]
    pub deadline_ttl_secs: u64,

    // Map chain id (as string) -> RPC URL
    pub http_providers: Option<HashMap<String, String>>,

    // Map chain id (as string) -> router address, replacing the built-in router
    pub routers_by_chain: Option<HashMap<String, String>>,

    // Map recipient name -> address
    pub recipient_names: Option<HashMap<String, String>>,
}

fn default_debug() -> bool {
    false
}
fn default_false() -> bool {
    false
}
fn default_slippage_bps() -> u32 {
    constants::INITIAL_ALLOWED_SLIPPAGE
}
fn default_deadline_ttl_secs() -> u64 {
    constants::DEFAULT_DEADLINE_FROM_NOW
}

impl GlobalSettings {
    pub fn load_with_path(path: Option<&str>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let selected_config = resolve_config_path(path);
        let mut builder = Config::builder();

        if let Some(ref selected_path) = selected_config {
            builder = builder.add_source(File::from(Path::new(selected_path)).required(true));
        } else {
            builder = builder.add_source(File::with_name("config").required(false));
        }
        // Precedence: CLI (in main) > env/.env > selected profile file.
        builder = builder.add_source(Environment::default().try_parsing(true));

        let mut settings: GlobalSettings = builder.build()?.try_deserialize()?;

        if let Some(json) = env_bool("LOG_JSON") {
            settings.log_json = json;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if u64::from(self.allowed_slippage_bps) >= constants::BIPS_BASE {
            return Err(AppError::Config(format!(
                "allowed_slippage_bps must be below {}, got {}",
                constants::BIPS_BASE,
                self.allowed_slippage_bps
            )));
        }
        if self.deadline_ttl_secs == 0 {
            return Err(AppError::Config(
                "deadline_ttl_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Helper to get RPC URL for a specific chain
    pub fn get_http_provider(&self, chain_id: u64) -> Result<String, AppError> {
        if let Some(urls) = &self.http_providers
            && let Some(url) = urls.get(&chain_id.to_string())
        {
            return Ok(url.clone());
        }

        // Fallback to env var convention: http_provider_56, then generic http_provider
        let candidates = [
            format!("http_provider_{}", chain_id),
            "http_provider".to_string(),
        ];
        for key in candidates {
            if let Ok(v) = std::env::var(&key) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Ok(trimmed.to_string());
                }
            }
        }

        Err(AppError::Config(format!(
            "No RPC URL found for chain {}",
            chain_id
        )))
    }

    pub fn connection_for_chain(&self, chain_id: u64) -> Result<Connection, AppError> {
        let url = self.get_http_provider(chain_id)?;
        ConnectionFactory::http(chain_id, &url)
    }

    pub fn router_overrides(&self) -> Result<HashMap<u64, Address>, AppError> {
        let Some(raw) = &self.routers_by_chain else {
            return Ok(HashMap::new());
        };
        raw.iter()
            .map(|(chain, router)| {
                let chain_id = parse_chain_id(chain).ok_or_else(|| {
                    AppError::Config(format!("routers_by_chain: invalid chain id {chain}"))
                })?;
                let address = parse_address_hex(router).ok_or_else(|| {
                    AppError::InvalidAddress(format!("routers_by_chain:{chain} -> {router}"))
                })?;
                Ok((chain_id, address))
            })
            .collect()
    }

    pub fn recipient_names(&self) -> Result<HashMap<String, Address>, AppError> {
        match &self.recipient_names {
            Some(raw) => parse_address_map(raw, "recipient_names"),
            None => Ok(HashMap::new()),
        }
    }

    pub fn name_resolver(&self) -> Result<StaticNameResolver, AppError> {
        Ok(StaticNameResolver::new(self.recipient_names()?))
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            constants::DEFAULT_LOG_LEVEL
        }
    }
}

fn env_bool(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?;
    parse_boolish(&value)
}

fn resolve_config_path(path: Option<&str>) -> Option<String> {
    if let Some(path) = path {
        return Some(path.to_string());
    }
    detect_active_config_file()
}

fn detect_active_config_file() -> Option<String> {
    let priority_files = [
        "config.prod.toml",
        "config.dev.toml",
        "config.testnet.toml",
        "config.toml",
    ];

    for file in priority_files.iter() {
        if let Some(true) = config_has_active_flag(file) {
            return Some((*file).to_string());
        }
    }

    // Fallback: scan current dir for config.*.toml with THIS_ACTIVE = true
    if let Ok(entries) = fs::read_dir(".") {
        for entry in entries.flatten() {
            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str())
                && name.starts_with("config.")
                && name.ends_with(".toml")
                && let Some(true) = config_has_active_flag(name)
            {
                return Some(name.to_string());
            }
        }
    }

    None
}

fn config_has_active_flag(path: &str) -> Option<bool> {
    let p = Path::new(path);
    if !p.exists() {
        return None;
    }

    Config::builder()
        .add_source(File::from(p))
        .build()
        .ok()?
        .get_bool("THIS_ACTIVE")
        .ok()
}

fn parse_address_map(
    raw: &HashMap<String, String>,
    field: &str,
) -> Result<HashMap<String, Address>, AppError> {
    raw.iter()
        .map(|(k, v)| {
            parse_address_hex(v)
                .map(|addr| (k.to_lowercase(), addr))
                .ok_or_else(|| AppError::InvalidAddress(format!("{field}:{k} -> {v}")))
        })
        .collect()
}
