//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub chain: ChainSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Pre-fill the store with demo donations on startup
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_seed_demo() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            seed_demo: default_seed_demo(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Chain integration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChainSettings {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    #[serde(default = "default_contract_address")]
    pub contract_address: String,

    #[serde(default = "default_chain_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_chain_enabled")]
    pub enabled: bool,
}

fn default_rpc_url() -> String {
    "https://sepolia.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161".to_string()
}

fn default_contract_address() -> String {
    "0x1234567890123456789012345678901234567890".to_string()
}

fn default_chain_timeout() -> u64 {
    5000
}

fn default_chain_enabled() -> bool {
    true
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            contract_address: default_contract_address(),
            request_timeout_ms: default_chain_timeout(),
            enabled: default_chain_enabled(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("givechain").join("config.toml")),
            Some(PathBuf::from("/etc/givechain/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(host) = std::env::var("GIVECHAIN_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("GIVECHAIN_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }
        if let Ok(seed) = std::env::var("GIVECHAIN_SEED_DEMO") {
            self.api.seed_demo = seed.to_lowercase() != "false" && seed != "0";
        }

        // Chain overrides
        if let Ok(url) = std::env::var("GIVECHAIN_RPC_URL") {
            self.chain.rpc_url = url;
        }
        if let Ok(address) = std::env::var("GIVECHAIN_CONTRACT_ADDRESS") {
            self.chain.contract_address = address;
        }
        if let Ok(enabled) = std::env::var("GIVECHAIN_CHAIN_ENABLED") {
            self.chain.enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }

        // Logging overrides
        if let Ok(level) = std::env::var("GIVECHAIN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("GIVECHAIN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# GiveChain Configuration
#
# Environment variables override these settings:
# - GIVECHAIN_API_HOST
# - GIVECHAIN_API_PORT
# - GIVECHAIN_SEED_DEMO
# - GIVECHAIN_RPC_URL
# - GIVECHAIN_CONTRACT_ADDRESS
# - GIVECHAIN_CHAIN_ENABLED
# - GIVECHAIN_LOG_LEVEL
# - GIVECHAIN_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 5000

# Allowed CORS origins
cors_origins = ["http://localhost:3000", "http://127.0.0.1:3000"]

# Pre-fill the store with demo donations on startup
seed_demo = true

[chain]
# Sepolia JSON-RPC endpoint
rpc_url = "https://sepolia.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161"

# Donation contract address
contract_address = "0x1234567890123456789012345678901234567890"

# RPC request timeout (ms)
request_timeout_ms = 5000

# Enable the read-only chain integration
enabled = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 5000);
        assert!(config.chain.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.addr(), "0.0.0.0:5000");
        assert!(config.api.seed_demo);
    }

    #[test]
    fn test_partial_section() {
        let config: Config = toml::from_str("[api]\nport = 8080\n").unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.host, "0.0.0.0");
    }
}
