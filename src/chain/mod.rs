//! Chain integration
//!
//! Read-only JSON-RPC access to the Sepolia testnet. The donation contract
//! itself lives on chain and is out of scope here; this module only reads
//! public state (chain id, block number, contract balance) so the API can
//! report on the contract next to the backend-held records.
//!
//! The integration is optional: when no RPC endpoint is configured or the
//! endpoint is unreachable, the rest of the API keeps working and the
//! contract endpoint reports unavailable.

pub mod client;

pub use client::{ChainClient, ChainConfig, ChainError, format_eth};

/// Sepolia testnet chain id (11155111), as the wallet reports it
pub const SEPOLIA_CHAIN_ID_HEX: &str = "0xaa36a7";
