// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

use crate::common::constants::wrapped_native_for_chain;
use crate::common::error::AppError;
use crate::domain::trade::Trade;
use crate::infrastructure::data::address_registry::RouterRegistry;
use crate::network::provider::Connection;
use crate::services::swap::approval::ApprovalState;
use crate::services::swap::parameters::{SwapCall, swap_parameter_variants};
use crate::services::swap::recipient::{RecipientSpec, resolve_recipient};
use crate::services::swap::slippage::resolve_slippage;
use crate::services::swap::smart_wallet::{AccountKind, adapt_swap_call, indirection_wallet};
use alloy::primitives::{Address, U256};

/// Everything swap-call assembly depends on, as currently observed.
///
/// Unresolved inputs are `None`; a change to any field is a reason to
/// re-assemble.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapCallContext {
    pub trade: Option<Trade>,
    /// User slippage in bips; `None` means the initial default.
    pub allowed_slippage: Option<u32>,
    pub recipient: RecipientSpec,
    pub account: Option<Address>,
    pub chain_id: Option<u64>,
    pub connection: Option<Connection>,
    pub deadline: Option<U256>,
    pub account_kind: AccountKind,
    pub approval_state: ApprovalState,
}

/// Ordered call candidates for executing the context's trade.
///
/// Returns an empty list while any input is unresolved or the chain has no
/// router. Callers try candidates in order and stop at the first that does
/// not revert.
pub fn swap_call_arguments(
    ctx: &SwapCallContext,
    routers: &RouterRegistry,
) -> Result<Vec<SwapCall>, AppError> {
    let recipient = resolve_recipient(&ctx.recipient, ctx.account);

    let (
        Some(trade),
        Some(recipient),
        Some(connection),
        Some(_account),
        Some(chain_id),
        Some(deadline),
    ) = (
        ctx.trade.as_ref(),
        recipient,
        ctx.connection.as_ref(),
        ctx.account,
        ctx.chain_id,
        ctx.deadline,
    )
    else {
        tracing::debug!(
            target: "swap_calls",
            missing = %missing_inputs(ctx, recipient).join(","),
            "Swap call inputs not ready"
        );
        return Ok(Vec::new());
    };

    let Some(router) = routers.router_contract(chain_id, connection) else {
        return Ok(Vec::new());
    };

    if !native_legs_match_chain(trade, chain_id) {
        tracing::debug!(
            target: "swap_calls",
            chain_id,
            "Trade native leg is not routed through this chain's wrapped native token"
        );
        return Ok(Vec::new());
    }

    let slippage = resolve_slippage(ctx.allowed_slippage);
    let variants = swap_parameter_variants(trade, slippage, recipient, deadline)?;

    let wallet = indirection_wallet(&ctx.account_kind, ctx.approval_state);
    let calls = variants
        .into_iter()
        .map(|parameters| adapt_swap_call(&router, parameters, wallet))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        target: "swap_calls",
        chain_id,
        router = %format!("{:#x}", router.address()),
        candidates = calls.len(),
        slippage_bips = slippage.bips(),
        via_wallet = wallet.is_some(),
        "Assembled swap call candidates"
    );

    Ok(calls)
}

fn missing_inputs(ctx: &SwapCallContext, recipient: Option<Address>) -> Vec<&'static str> {
    [
        ("trade", ctx.trade.is_none()),
        ("recipient", recipient.is_none()),
        ("connection", ctx.connection.is_none()),
        ("account", ctx.account.is_none()),
        ("chain_id", ctx.chain_id.is_none()),
        ("deadline", ctx.deadline.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, missing)| missing.then_some(name))
    .collect()
}

/// A trade priced on another chain wraps its native leg through a foreign token.
fn native_legs_match_chain(trade: &Trade, chain_id: u64) -> bool {
    let Some(wrapped) = wrapped_native_for_chain(chain_id) else {
        return true;
    };
    let path = trade.path();
    let input_ok = !trade.input_amount().currency.is_native() || path.first() == Some(&wrapped);
    let output_ok = !trade.output_amount().currency.is_native() || path.last() == Some(&wrapped);
    input_ok && output_ok
}

/// Re-assembles only when the context differs from the previous one.
#[derive(Debug)]
pub struct SwapCallPlanner {
    routers: RouterRegistry,
    last: Option<(SwapCallContext, Vec<SwapCall>)>,
    recomputations: u64,
}

impl SwapCallPlanner {
    pub fn new(routers: RouterRegistry) -> Self {
        Self {
            routers,
            last: None,
            recomputations: 0,
        }
    }

    pub fn plan(&mut self, ctx: &SwapCallContext) -> Result<&[SwapCall], AppError> {
        let fresh = matches!(&self.last, Some((cached, _)) if cached == ctx);
        if !fresh {
            let calls = swap_call_arguments(ctx, &self.routers)?;
            self.recomputations += 1;
            self.last = Some((ctx.clone(), calls));
        }
        Ok(self
            .last
            .as_ref()
            .map(|(_, calls)| calls.as_slice())
            .unwrap_or_default())
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
