// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Stdout carries the candidate JSON, so every log line goes to stderr.
pub fn setup_logging(log_level: &str, json_format: bool) {
    // A bare level gets the crate's targets pinned to it; directive strings pass through.
    let normalized = log_level.trim();
    let filter_spec = filter_spec(normalized);
    let filter = EnvFilter::from_str(&filter_spec).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter);

    if json_format {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false);
        subscriber.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact();
        subscriber.with(fmt_layer).init();
    }

    tracing::debug!(
        target: "logging",
        filter = %filter_spec,
        format = if json_format { "json" } else { "compact" },
        "Logging initialized"
    );
}

fn filter_spec(level: &str) -> String {
    if level.contains(',') || level.contains('=') {
        level.to_string()
    } else {
        format!("{level},swap_calls={level},registry={level},config={level}")
    }
}
