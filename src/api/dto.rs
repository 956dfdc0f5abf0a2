//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::Serialize;

use crate::store::{DonationRecord, Statistics};

// ============================================
// DONATION DTOs
// ============================================

/// Response for list endpoints (`/api/transactions`, `/api/donations`)
#[derive(Debug, Serialize)]
pub struct DonationListResponse {
    pub success: bool,
    pub data: Vec<DonationRecord>,
    pub count: usize,
    /// RFC 3339 server time at which the list was produced
    pub timestamp: String,
}

impl DonationListResponse {
    pub fn new(data: Vec<DonationRecord>) -> Self {
        Self {
            success: true,
            count: data.len(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }
}

/// Response for the donor filter endpoint (`/api/donations/:address`)
#[derive(Debug, Serialize)]
pub struct DonorDonationsResponse {
    pub success: bool,
    pub data: Vec<DonationRecord>,
    pub count: usize,
}

impl DonorDonationsResponse {
    pub fn new(data: Vec<DonationRecord>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Response for a successful donation submission
#[derive(Debug, Serialize)]
pub struct CreateDonationResponse {
    pub success: bool,
    pub data: DonationRecord,
    pub message: String,
}

impl CreateDonationResponse {
    pub fn new(data: DonationRecord) -> Self {
        Self {
            success: true,
            data,
            message: "Donation recorded successfully".to_string(),
        }
    }
}

// ============================================
// STATISTICS DTOs
// ============================================

/// Statistics response
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub data: Statistics,
}

impl StatisticsResponse {
    pub fn new(data: Statistics) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

// ============================================
// CONTRACT DTOs
// ============================================

/// Contract state snapshot from the chain RPC
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    /// Donation contract address
    pub address: String,
    /// Chain id as the node reports it (hex)
    pub chain_id: String,
    /// Latest block height
    pub block_number: u64,
    /// Contract balance as a decimal ETH string
    pub balance_eth: String,
}

/// Contract endpoint response
#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub success: bool,
    pub data: ContractInfo,
}

impl ContractResponse {
    pub fn new(data: ContractInfo) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DonationDraft;

    #[test]
    fn test_list_response_shape() {
        let record = DonationDraft::new("0xabc", "1.0", "0x1").into_record(1);
        let json = serde_json::to_value(DonationListResponse::new(vec![record])).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 1);
        assert!(json["timestamp"].is_string());
        assert_eq!(json["data"][0]["id"], 1);
    }

    #[test]
    fn test_statistics_response_shape() {
        let json = serde_json::to_value(StatisticsResponse::new(Statistics::from_records(&[])))
            .unwrap();
        assert_eq!(json["data"]["totalDonations"], "0.00");
        assert_eq!(json["data"]["transactionCount"], 0);
    }
}
