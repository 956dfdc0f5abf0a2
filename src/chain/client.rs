//! JSON-RPC chain client
//!
//! Thin HTTP client for the handful of read calls the backend makes against
//! the Sepolia RPC endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Configuration for the chain client
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL
    pub rpc_url: String,
    /// Donation contract address
    pub contract_address: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://sepolia.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161".to_string(),
            contract_address: "0x1234567890123456789012345678901234567890".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

/// Errors from the chain client
#[derive(Error, Debug)]
pub enum ChainError {
    /// RPC endpoint did not respond in time
    #[error("Chain RPC timeout")]
    Timeout,

    /// RPC endpoint is unreachable
    #[error("Chain RPC unavailable")]
    Unavailable,

    /// Transport-level failure
    #[error("Chain request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The node returned a JSON-RPC error object
    #[error("Chain RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The node returned something we could not interpret
    #[error("Unexpected chain response: {0}")]
    Protocol(String),
}

#[derive(Debug, Serialize)]
struct RpcRequest {
    jsonrpc: &'static str,
    id: u32,
    method: String,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Read-only JSON-RPC client
pub struct ChainClient {
    client: Client,
    config: ChainConfig,
}

impl ChainClient {
    /// Create a new chain client with the given configuration
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Verify the RPC endpoint answers, and that it is actually Sepolia
    pub async fn health_check(&self) -> Result<(), ChainError> {
        let chain_id = self.chain_id().await?;
        if chain_id != crate::chain::SEPOLIA_CHAIN_ID_HEX {
            tracing::warn!(
                "RPC endpoint reports chain id {}, expected Sepolia ({})",
                chain_id,
                crate::chain::SEPOLIA_CHAIN_ID_HEX
            );
        }
        Ok(())
    }

    /// `eth_chainId` as a hex string (e.g. "0xaa36a7")
    pub async fn chain_id(&self) -> Result<String, ChainError> {
        let result = self.call("eth_chainId", json!([])).await?;
        as_hex_string(&result)
    }

    /// `eth_blockNumber` as a block height
    pub async fn block_number(&self) -> Result<u64, ChainError> {
        let result = self.call("eth_blockNumber", json!([])).await?;
        let hex = as_hex_string(&result)?;
        parse_hex_quantity(&hex).map(|v| v as u64)
    }

    /// Contract balance in wei via `eth_getBalance`
    pub async fn contract_balance(&self) -> Result<u128, ChainError> {
        let result = self
            .call(
                "eth_getBalance",
                json!([self.config.contract_address, "latest"]),
            )
            .await?;
        let hex = as_hex_string(&result)?;
        parse_hex_quantity(&hex)
    }

    /// Issue a single JSON-RPC call
    async fn call(&self, method: &str, params: Value) -> Result<Value, ChainError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: method.to_string(),
            params,
        };

        let response = self
            .client
            .post(&self.config.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChainError::Timeout
                } else if e.is_connect() {
                    ChainError::Unavailable
                } else {
                    ChainError::Request(e)
                }
            })?;

        let parsed: RpcResponse = response.json().await?;

        if let Some(err) = parsed.error {
            return Err(ChainError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        parsed
            .result
            .ok_or_else(|| ChainError::Protocol("Response had neither result nor error".into()))
    }
}

fn as_hex_string(value: &Value) -> Result<String, ChainError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ChainError::Protocol(format!("Expected hex string, got {}", value)))
}

/// Parse an `0x`-prefixed hex quantity
pub fn parse_hex_quantity(hex: &str) -> Result<u128, ChainError> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| ChainError::Protocol(format!("Quantity missing 0x prefix: {}", hex)))?;

    u128::from_str_radix(digits, 16)
        .map_err(|e| ChainError::Protocol(format!("Invalid hex quantity {}: {}", hex, e)))
}

/// Format a wei amount as a decimal ETH string
///
/// Trims trailing zeros from the fractional part but always keeps at least
/// two decimal places, matching how amounts appear elsewhere in the API.
pub fn format_eth(wei: u128) -> String {
    const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

    let whole = wei / WEI_PER_ETH;
    let frac = wei % WEI_PER_ETH;

    let mut frac_str = format!("{:018}", frac);
    while frac_str.len() > 2 && frac_str.ends_with('0') {
        frac_str.pop();
    }

    format!("{}.{}", whole, frac_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0xaa36a7").unwrap(), 11155111);
        assert!(parse_hex_quantity("aa36a7").is_err());
        assert!(parse_hex_quantity("0xzz").is_err());
    }

    #[test]
    fn test_format_eth() {
        assert_eq!(format_eth(0), "0.00");
        assert_eq!(format_eth(1_000_000_000_000_000_000), "1.00");
        assert_eq!(format_eth(1_500_000_000_000_000_000), "1.50");
        assert_eq!(format_eth(2_345_600_000_000_000_000), "2.3456");
        assert_eq!(format_eth(1), "0.000000000000000001");
    }

    #[test]
    fn test_rpc_error_deserializes() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#;
        let parsed: RpcResponse = serde_json::from_str(body).unwrap();
        let err = parsed.error.unwrap();
        assert_eq!(err.code, -32601);
        assert!(parsed.result.is_none());
    }
}
