//! Wallet configuration with TOML file support.

use serde::{Deserialize, Serialize};

use coinpay_types::AssetType;

use crate::error::WalletError;
use crate::logging::LogFormat;

/// Configuration for the transfer pipeline and its RPC endpoint.
///
/// Can be loaded from a TOML file via [`WalletConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of the remote signer/executor.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// The asset that pays gas; the only one spend-all applies to.
    #[serde(default = "default_native_asset")]
    pub native_asset: AssetType,

    /// Gas budget used when a request does not name one.
    #[serde(default = "default_gas_budget")]
    pub default_gas_budget: u64,

    /// Whole-request timeout for RPC calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Connection timeout for RPC calls, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_rpc_url() -> String {
    "http://127.0.0.1:9000".to_string()
}

fn default_native_asset() -> AssetType {
    AssetType::new("SUI")
}

fn default_gas_budget() -> u64 {
    10_000_000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, WalletError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            WalletError::Config(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// The configured log format; unknown values fall back to human output.
    pub fn log_format(&self) -> LogFormat {
        match self.log_format.as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Human,
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            native_asset: default_native_asset(),
            default_gas_budget: default_gas_budget(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = WalletConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = WalletConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.rpc_url, config.rpc_url);
        assert_eq!(parsed.native_asset, config.native_asset);
        assert_eq!(parsed.default_gas_budget, config.default_gas_budget);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = WalletConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.native_asset.as_str(), "SUI");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_format(), LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            native_asset = "0x2::sui::SUI"
            log_format = "json"
        "#;
        let config = WalletConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.native_asset.as_str(), "0x2::sui::SUI");
        assert_eq!(config.log_format(), LogFormat::Json);
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rpc_url = \"http://signer:9000\"").unwrap();
        let config = WalletConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.rpc_url, "http://signer:9000");
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = WalletConfig::from_toml_file("/nonexistent/coinpay.toml");
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn malformed_toml_returns_config_error() {
        let result = WalletConfig::from_toml_str("default_gas_budget = \"lots\"");
        assert!(matches!(result, Err(WalletError::Config(_))));
    }
}
