//! HTTP API Client
//!
//! Functions for communicating with the GiveChain REST API.

use gloo_net::http::Request;

use crate::state::global::Donation;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("givechain_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("givechain_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct DonationListResponse {
    pub success: bool,
    pub data: Vec<Donation>,
    pub count: usize,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CreateDonationResponse {
    pub success: bool,
    pub data: Donation,
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub data: Statistics,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
pub struct Statistics {
    #[serde(rename = "totalDonations")]
    pub total_donations: String,
    #[serde(rename = "donorCount")]
    pub donor_count: u64,
    #[serde(rename = "transactionCount")]
    pub transaction_count: u64,
    #[serde(rename = "avgDonation")]
    pub avg_donation: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub message: Option<String>,
}

// ============ API Functions ============

async fn read_error(response: gloo_net::http::Response) -> String {
    let error: ApiError = response.json().await.unwrap_or(ApiError {
        error: "Unknown error".to_string(),
        message: None,
    });
    error.error
}

/// Fetch all recorded donations
pub async fn fetch_donations() -> Result<Vec<Donation>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/donations", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    let result: DonationListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.data)
}

/// Fetch donations made by one donor address
pub async fn fetch_donations_by_donor(address: &str) -> Result<Vec<Donation>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/donations/{}", api_base, address))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    let result: DonationListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.data)
}

/// Record a donation on the backend
pub async fn submit_donation(
    donor: &str,
    amount: &str,
    tx_hash: &str,
    message: &str,
    anonymous: bool,
    provenance: &str,
) -> Result<Donation, String> {
    #[derive(serde::Serialize)]
    struct CreateDonationRequest {
        donor: String,
        amount: String,
        #[serde(rename = "txHash")]
        tx_hash: String,
        message: String,
        #[serde(rename = "isAnonymous")]
        is_anonymous: bool,
        provenance: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/donations", api_base))
        .json(&CreateDonationRequest {
            donor: donor.to_string(),
            amount: amount.to_string(),
            tx_hash: tx_hash.to_string(),
            message: message.to_string(),
            is_anonymous: anonymous,
            provenance: provenance.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    let result: CreateDonationResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.data)
}

/// Fetch aggregate statistics
pub async fn fetch_statistics() -> Result<Statistics, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/statistics", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    let result: StatisticsResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.data)
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/health", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
