//! GiveChain API Server
//!
//! Run with: cargo run --bin givechain-api
//!
//! # Configuration
//!
//! Loaded from `config.toml` (see `config::generate_default_config`) with
//! environment variable overrides:
//! - `GIVECHAIN_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `GIVECHAIN_API_PORT`: Port to listen on (default: 5000)
//! - `GIVECHAIN_SEED_DEMO`: Pre-fill the store with demo donations (default: true)
//! - `GIVECHAIN_RPC_URL`: Sepolia JSON-RPC endpoint
//! - `GIVECHAIN_CONTRACT_ADDRESS`: Donation contract address
//! - `GIVECHAIN_CHAIN_ENABLED`: Enable the read-only chain integration
//! - `RUST_LOG`: Log level (default: info)

use givechain::api::{serve, AppState};
use givechain::chain::{ChainClient, ChainConfig};
use givechain::config::Config;
use givechain::store::{DonationStore, MemoryStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "givechain=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GiveChain API server v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_default();

    // Initialize the store, optionally seeded so the dashboard has something
    // to show on first launch
    let store: Arc<dyn DonationStore> = if config.api.seed_demo {
        let store = MemoryStore::with_demo_records().await;
        tracing::info!("Seeded {} demo donation records", store.count().await);
        Arc::new(store)
    } else {
        Arc::new(MemoryStore::new())
    };

    // Create app state (with or without the chain integration)
    let state = if config.chain.enabled {
        let chain_config = ChainConfig {
            rpc_url: config.chain.rpc_url.clone(),
            contract_address: config.chain.contract_address.clone(),
            request_timeout_ms: config.chain.request_timeout_ms,
        };
        tracing::info!("Chain integration enabled: {}", chain_config.rpc_url);

        let chain = Arc::new(ChainClient::new(chain_config)?);

        // Verify the RPC endpoint; a dead endpoint degrades the contract
        // route but must not stop the server.
        match chain.health_check().await {
            Ok(_) => tracing::info!("Chain RPC connection verified"),
            Err(e) => tracing::warn!("Chain RPC not available: {} (contract route degraded)", e),
        }

        AppState::with_chain(Arc::clone(&store), config.api.clone(), chain)
    } else {
        tracing::info!("Chain integration disabled (set GIVECHAIN_CHAIN_ENABLED to enable)");
        AppState::new(Arc::clone(&store), config.api.clone())
    };

    // Run server
    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("GiveChain API server stopped");
    Ok(())
}
