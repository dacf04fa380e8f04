// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use alloy::primitives::{Address, Bytes, U256};
use anyhow::Context;
use clap::Parser;
use oxidity_swap_calls::app::config::GlobalSettings;
use oxidity_swap_calls::app::logging::setup_logging;
use oxidity_swap_calls::data::address_registry::RouterRegistry;
use oxidity_swap_calls::domain::constants::BIPS_BASE;
use oxidity_swap_calls::domain::error::AppError;
use oxidity_swap_calls::swap::{SwapCall, SwapRequest, swap_call_arguments};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble router call candidates for a swap")]
struct Cli {
    /// Path to config file (default: config.* detection)
    #[arg(long)]
    config: Option<String>,

    /// Swap request JSON file; `-` reads stdin
    #[arg(long, default_value = "-")]
    request: PathBuf,

    /// Allowed slippage in bips (overrides request and config)
    #[arg(long)]
    slippage_bps: Option<u32>,

    /// Recipient address or name (overrides request)
    #[arg(long)]
    recipient: Option<String>,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

#[derive(Serialize)]
struct CandidateOutput {
    target: Address,
    method: String,
    value: U256,
    calldata: Bytes,
}

impl CandidateOutput {
    fn from_call(call: &SwapCall) -> Result<Self, AppError> {
        Ok(Self {
            target: call.target(),
            method: call.parameters.method_name.clone(),
            value: call.parameters.value,
            calldata: call.calldata()?,
        })
    }
}

fn read_request(path: &PathBuf) -> Result<SwapRequest, AppError> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading swap request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading swap request {}", path.display()))?
    };
    SwapRequest::from_json(&raw)
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let settings = GlobalSettings::load_with_path(cli.config.as_deref())?;
    setup_logging(settings.log_level(), cli.json_logs || settings.log_json);

    if let Some(bps) = cli.slippage_bps
        && u64::from(bps) >= BIPS_BASE
    {
        return Err(AppError::Config(format!(
            "--slippage-bps must be below {BIPS_BASE}, got {bps}"
        )));
    }

    let mut request = read_request(&cli.request)?;
    request.allowed_slippage_bps = cli
        .slippage_bps
        .or(request.allowed_slippage_bps)
        .or(Some(settings.allowed_slippage_bps));
    if cli.recipient.is_some() {
        request.recipient = cli.recipient.clone();
    }

    let routers = RouterRegistry::from_settings(&settings)?;
    let resolver = settings.name_resolver()?;
    let connection = match request.chain_id {
        Some(chain_id) => match settings.connection_for_chain(chain_id) {
            Ok(connection) => Some(connection),
            Err(e) => {
                tracing::warn!(target: "config", chain_id, error = %e, "No usable RPC connection for chain");
                None
            }
        },
        None => None,
    };

    let ctx = request.into_context(&resolver, connection, settings.deadline_ttl_secs)?;
    let calls = swap_call_arguments(&ctx, &routers)?;
    if calls.is_empty() {
        tracing::info!(target: "swap_calls", "No swap call candidates for request");
    }

    let output = calls
        .iter()
        .map(CandidateOutput::from_call)
        .collect::<Result<Vec<_>, _>>()?;
    let json_out = serde_json::to_string_pretty(&output)
        .map_err(|e| AppError::Initialization(format!("Candidate encode failed: {e}")))?;
    println!("{json_out}");

    Ok(())
}
