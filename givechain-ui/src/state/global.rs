//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::client::Statistics;
use crate::state::wallet::WalletSession;

/// Where the dashboard reads donations from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// The REST API's in-memory records
    Backend,
    /// The donation contract, read through the wallet provider
    Chain,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Backend => "Backend",
            DataSource::Chain => "On-chain",
        }
    }
}

/// A donation row as displayed by the dashboard
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Donation {
    pub id: u64,
    pub donor: String,
    /// Decimal ETH string
    pub amount: String,
    /// Milliseconds since epoch
    pub timestamp: i64,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "isAnonymous")]
    pub is_anonymous: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub provenance: Option<String>,
}

impl Donation {
    /// Donor shortened for table display ("0x742d...f44e")
    pub fn short_donor(&self) -> String {
        shorten_address(&self.donor)
    }

    /// Transaction hash shortened for table display
    pub fn short_tx_hash(&self) -> String {
        shorten_address(&self.tx_hash)
    }

    /// Timestamp formatted as a local date-time string
    pub fn formatted_time(&self) -> String {
        use chrono::{Local, TimeZone};
        match Local.timestamp_millis_opt(self.timestamp).single() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => "-".to_string(),
        }
    }
}

/// Shorten a 0x-prefixed identifier to its ends
pub fn shorten_address(value: &str) -> String {
    if value.len() > 12 && value.starts_with("0x") {
        format!("{}...{}", &value[..6], &value[value.len() - 4..])
    } else {
        value.to_string()
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Wallet connection state
    pub wallet: RwSignal<WalletSession>,
    /// Donations from the active data source
    pub donations: RwSignal<Vec<Donation>>,
    /// Aggregate statistics
    pub statistics: RwSignal<Option<Statistics>>,
    /// Which source the dashboard reads from
    pub source: RwSignal<DataSource>,
    /// Bumped to ask the dashboard to refetch
    pub reload: RwSignal<u64>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        wallet: create_rw_signal(WalletSession::Disconnected),
        donations: create_rw_signal(Vec::new()),
        statistics: create_rw_signal(None),
        source: create_rw_signal(DataSource::Backend),
        reload: create_rw_signal(0),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Ask the dashboard to refetch from the active source
    pub fn request_reload(&self) {
        self.reload.update(|n| *n += 1);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x742d35Cc6634C0532925a3b844Bc9e7595f8fA8e"),
            "0x742d...fA8e"
        );
        assert_eq!(shorten_address("Anonymous"), "Anonymous");
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_donation_deserializes_camel_case() {
        let json = r#"{
            "id": 1,
            "donor": "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA8e",
            "amount": "1.5",
            "timestamp": 1700000000000,
            "txHash": "0xabc123",
            "message": "For education",
            "isAnonymous": false,
            "status": "confirmed",
            "provenance": "backend-reported"
        }"#;

        let donation: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.tx_hash, "0xabc123");
        assert!(!donation.is_anonymous);
        assert_eq!(donation.provenance.as_deref(), Some("backend-reported"));
    }

    #[test]
    fn test_data_source_labels() {
        assert_eq!(DataSource::Backend.label(), "Backend");
        assert_eq!(DataSource::Chain.label(), "On-chain");
    }
}
