// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Progress output written to stdout

use colored::Colorize;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

pub const BANNER_TITLE: &str = "Hello World Demo";

/// The framed green banner printed before the demo starts
pub fn banner() -> String {
    let rule = format!("+{}+", "-".repeat(BANNER_TITLE.len() + 4));
    let title = format!("|  {}  |", BANNER_TITLE);
    format!("{}\n{}\n{}", rule, title, rule)
        .green()
        .bold()
        .to_string()
}

pub fn heading(text: &str) -> String {
    format!("=== {} ===", text)
}

pub fn timestamp(time: Option<&Time>) -> String {
    time.map(|t| t.0.to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}
