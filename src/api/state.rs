//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::chain::ChainClient;
use crate::config::ApiConfig;
use crate::store::DonationStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Donation record store
    pub store: Arc<dyn DonationStore>,
    /// Chain RPC client, present only when the integration is enabled
    pub chain: Option<Arc<ChainClient>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState without the chain integration
    pub fn new(store: Arc<dyn DonationStore>, config: ApiConfig) -> Self {
        Self {
            store,
            chain: None,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create AppState with the chain integration
    pub fn with_chain(
        store: Arc<dyn DonationStore>,
        config: ApiConfig,
        chain: Arc<ChainClient>,
    ) -> Self {
        Self {
            store,
            chain: Some(chain),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Check if the chain integration is available
    pub fn has_chain(&self) -> bool {
        self.chain.is_some()
    }
}
