//! # GiveChain
//!
//! Blockchain Donation Dashboard - A full-stack Rust application for
//! recording, browsing, and analyzing donations on the Sepolia testnet.
//!
//! ## Features
//!
//! - **Donation store**: Append-only in-memory record store behind a trait,
//!   so persistence can be swapped in without touching request handlers
//! - **REST API**: Axum endpoints for records, donor lookup and statistics
//! - **Chain reads**: Optional JSON-RPC client for contract state
//! - **Dashboard**: Leptos WASM frontend (see `givechain-ui/`)
//!
//! ## Modules
//!
//! - [`store`]: Donation records, drafts and derived statistics
//! - [`chain`]: Read-only Sepolia JSON-RPC client
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use givechain::store::{DonationDraft, DonationStore, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryStore::new();
//!
//!     let record = store
//!         .append(DonationDraft::new(
//!             "0x742d35Cc6634C0532925a3b844Bc9e7595f42e44",
//!             "1.5",
//!             "0x1234",
//!         ))
//!         .await?;
//!
//!     println!("Recorded donation #{}", record.id);
//!
//!     let stats = store.statistics().await;
//!     println!("Total so far: {} ETH", stats.total_donations);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chain;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    DonationDraft, DonationRecord, DonationStatus, DonationStore, MemoryStore, Provenance,
    Statistics, StoreError, StoreResult,
};

pub use chain::{ChainClient, ChainConfig, ChainError, SEPOLIA_CHAIN_ID_HEX};

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{ApiConfig, ChainSettings, Config, ConfigError, LoggingConfig};
