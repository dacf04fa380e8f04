// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use alloy::primitives::Address;
use std::str::FromStr;

pub fn parse_boolish(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

pub fn parse_address_hex(s: &str) -> Option<Address> {
    let raw = strip_0x(s);
    if raw.len() != 40 {
        return None;
    }
    Address::from_str(raw).ok()
}

pub fn parse_chain_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        u64::from_str_radix(strip_0x(trimmed), 16).ok()
    } else {
        trimmed.parse().ok()
    }
}
