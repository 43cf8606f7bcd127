//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so values are baked in from
//! compile-time variables and fall back to defaults when absent or invalid.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Status messages hide this long after being shown.
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix joined in front of every API path. Empty means origin-relative.
    pub api_base: String,
    /// Delay before a shown status message is hidden.
    pub message_timeout_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { api_base: String::new(), message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS }
    }
}

impl BoardConfig {
    /// Build config from compile-time variables.
    ///
    /// Optional:
    /// - `ACTIVITY_BOARD_API_BASE`: absolute API origin, default origin-relative
    /// - `ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS`: default 5000
    pub fn from_env() -> Self {
        Self::from_values(option_env!("ACTIVITY_BOARD_API_BASE"), option_env!("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS"))
    }

    fn from_values(api_base: Option<&str>, timeout: Option<&str>) -> Self {
        Self { api_base: parse_api_base(api_base), message_timeout_ms: parse_timeout_ms(timeout) }
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned()
}

fn parse_timeout_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_MESSAGE_TIMEOUT_MS)
}
