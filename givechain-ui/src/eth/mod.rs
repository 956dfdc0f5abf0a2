//! Ethereum Integration
//!
//! Everything that talks to the chain through the wallet-injected provider:
//!
//! - **provider**: Bindings to `window.ethereum` (request, event listeners)
//! - **units**: Wei/ETH conversions
//! - **abi**: Calldata encoding and return-data decoding for the donation contract
//! - **contract**: High-level donation contract operations
//!
//! The wire format is standard chain RPC/ABI encoding; the contract itself is
//! owned by the EVM and out of scope here.

pub mod abi;
pub mod contract;
pub mod provider;
pub mod units;

pub use contract::{ChainDonation, ChainStatistics, DonationContract};
pub use provider::{Provider, ProviderError};
pub use units::{format_eth, parse_eth};

/// Sepolia testnet chain id (11155111) as the wallet reports it
pub const SEPOLIA_CHAIN_ID: &str = "0xaa36a7";

/// Donation contract address on Sepolia
pub const CONTRACT_ADDRESS: &str = "0x1234567890123456789012345678901234567890";
