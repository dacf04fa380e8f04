// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

pub mod approval;
pub mod assembler;
pub mod parameters;
pub mod recipient;
pub mod request;
pub mod slippage;
pub mod smart_wallet;

pub use assembler::{SwapCallContext, SwapCallPlanner, swap_call_arguments};
pub use parameters::{SwapCall, SwapParameters};
pub use request::SwapRequest;
