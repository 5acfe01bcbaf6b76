//! CLI output formatting.
//!
//! Human-readable output goes through [`field`] and [`lines`]; with `--json`
//! every command prints a single JSON document via [`json_output`] instead.

use std::fmt::Display;
use std::sync::OnceLock;

/// Global output mode, set once from the parsed CLI flags.
static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// Apply output settings from global CLI flags.
pub fn configure(json: bool) {
    let _ = JSON_MODE.set(json);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    JSON_MODE.get().copied().unwrap_or(false)
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    println!();
    println!("skinprice {version}");
    println!();
}

/// Print an aligned `label: value` line.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<12} {}", format!("{label}:"), value);
}

/// Print multi-line content, indented.
pub fn lines(content: &str) {
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a JSON value directly.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}
