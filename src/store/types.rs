//! Core data types for the donation store
//!
//! This module defines the fundamental types used throughout the store layer:
//! - `DonationRecord`: A single recorded donation
//! - `DonationDraft`: Client-supplied fields for a new donation
//! - `Statistics`: Aggregates derived from the full record set
//! - `DonationStatus` and `Provenance`: Classification enums

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::store::error::{StoreError, StoreResult};

/// Maximum length of a donation message, in characters.
pub const MAX_MESSAGE_LEN: usize = 200;

/// Donor name stored in place of the real address for anonymous donations.
pub const ANONYMOUS_DONOR: &str = "Anonymous";

/// A single donation held by the store
///
/// Records are append-only: once created they are never updated or deleted,
/// and they live only for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    /// Monotonically increasing id, assigned by the store on insert
    pub id: u64,
    /// Donor address, or the literal "Anonymous"
    pub donor: String,
    /// Donated amount as a decimal string in ETH units
    pub amount: String,
    /// Unix timestamp in milliseconds, stamped at insert
    pub timestamp: i64,
    /// Transaction hash reported by the client
    pub tx_hash: String,
    /// Optional donor message (may be empty)
    pub message: String,
    /// Whether the donor asked to stay anonymous
    pub is_anonymous: bool,
    /// Record status
    pub status: DonationStatus,
    /// Where this record came from
    pub provenance: Provenance,
}

/// Client-supplied fields for a new donation
///
/// `donor`, `amount` and `tx_hash` are required; the store rejects drafts
/// missing any of them without mutating its contents.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationDraft {
    #[serde(default)]
    pub donor: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub provenance: Option<Provenance>,
}

impl DonationDraft {
    /// Create a draft with the three required fields set
    pub fn new(
        donor: impl Into<String>,
        amount: impl Into<String>,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            donor: Some(donor.into()),
            amount: Some(amount.into()),
            tx_hash: Some(tx_hash.into()),
            message: None,
            is_anonymous: false,
            provenance: None,
        }
    }

    /// Builder method: set the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builder method: mark the donation anonymous
    pub fn anonymous(mut self, anonymous: bool) -> Self {
        self.is_anonymous = anonymous;
        self
    }

    /// Builder method: set the provenance tag
    pub fn provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = Some(provenance);
        self
    }

    /// Validate the draft without consuming it
    ///
    /// Checks required fields, that the amount parses to a finite positive
    /// number, and the message length limit.
    pub fn validate(&self) -> StoreResult<()> {
        let mut missing = Vec::new();
        if self.donor.as_deref().map_or(true, str::is_empty) {
            missing.push("donor");
        }
        if self.amount.as_deref().map_or(true, str::is_empty) {
            missing.push("amount");
        }
        if self.tx_hash.as_deref().map_or(true, str::is_empty) {
            missing.push("txHash");
        }
        if !missing.is_empty() {
            return Err(StoreError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let amount = self.amount.as_deref().unwrap_or_default();
        parse_amount(amount)?;

        if let Some(message) = &self.message {
            if message.chars().count() > MAX_MESSAGE_LEN {
                return Err(StoreError::Validation(format!(
                    "Message exceeds maximum length of {} characters",
                    MAX_MESSAGE_LEN
                )));
            }
        }

        Ok(())
    }

    /// Turn a validated draft into a record
    ///
    /// Stamps the current time, assigns the given id and sets the status to
    /// confirmed. For anonymous donations the donor address is discarded and
    /// replaced with [`ANONYMOUS_DONOR`], not merely hidden.
    pub(crate) fn into_record(self, id: u64) -> DonationRecord {
        let donor = if self.is_anonymous {
            ANONYMOUS_DONOR.to_string()
        } else {
            self.donor.unwrap_or_default()
        };

        DonationRecord {
            id,
            donor,
            amount: self.amount.unwrap_or_default(),
            timestamp: Utc::now().timestamp_millis(),
            tx_hash: self.tx_hash.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            is_anonymous: self.is_anonymous,
            status: DonationStatus::Confirmed,
            provenance: self.provenance.unwrap_or(Provenance::BackendReported),
        }
    }
}

/// Status of a donation record
///
/// Records are only created for donations the client reports as settled, so
/// confirmed is currently the only state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Confirmed,
}

/// Where a donation record came from
///
/// The backend path and the on-chain path are independent and never
/// reconciled; the tag makes the split explicit instead of hiding it behind
/// a UI toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// Posted directly to the backend, no on-chain transaction observed
    BackendReported,
    /// Submitted through the wallet and confirmed on chain first
    ChainConfirmed,
}

/// Aggregates derived from the full record set
///
/// Never stored; recomputed on demand. Monetary values are serialized as
/// strings fixed to two decimal places.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_donations: String,
    pub donor_count: usize,
    pub transaction_count: usize,
    pub avg_donation: String,
}

impl Statistics {
    /// Compute statistics over a slice of records
    ///
    /// An empty record set yields explicit zeros rather than dividing by the
    /// record count.
    pub fn from_records(records: &[DonationRecord]) -> Self {
        if records.is_empty() {
            return Self {
                total_donations: "0.00".to_string(),
                donor_count: 0,
                transaction_count: 0,
                avg_donation: "0.00".to_string(),
            };
        }

        // Amounts were validated on append, so unparseable entries cannot
        // occur; treat them as zero rather than failing the whole query.
        let total: f64 = records
            .iter()
            .map(|r| r.amount.parse::<f64>().unwrap_or(0.0))
            .sum();

        let donors: HashSet<&str> = records.iter().map(|r| r.donor.as_str()).collect();

        Self {
            total_donations: format!("{:.2}", total),
            donor_count: donors.len(),
            transaction_count: records.len(),
            avg_donation: format!("{:.2}", total / records.len() as f64),
        }
    }
}

/// Parse a decimal amount string, rejecting non-finite and non-positive values
pub fn parse_amount(amount: &str) -> StoreResult<f64> {
    let value: f64 = amount
        .trim()
        .parse()
        .map_err(|_| StoreError::Validation(format!("Invalid amount: {:?}", amount)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(StoreError::Validation(
            "Amount must be a positive number".to_string(),
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, donor: &str, amount: &str) -> DonationRecord {
        DonationDraft::new(donor, amount, format!("0x{:064x}", id)).into_record(id)
    }

    #[test]
    fn test_validate_requires_all_fields() {
        let draft = DonationDraft {
            donor: None,
            amount: Some("1.0".to_string()),
            tx_hash: None,
            message: None,
            is_anonymous: false,
            provenance: None,
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("donor"));
        assert!(err.to_string().contains("txHash"));
    }

    #[test]
    fn test_validate_rejects_bad_amount() {
        assert!(DonationDraft::new("0xabc", "not-a-number", "0x1")
            .validate()
            .is_err());
        assert!(DonationDraft::new("0xabc", "-1.5", "0x1").validate().is_err());
        assert!(DonationDraft::new("0xabc", "0", "0x1").validate().is_err());
        assert!(DonationDraft::new("0xabc", "1.5", "0x1").validate().is_ok());
    }

    #[test]
    fn test_validate_message_length() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert!(DonationDraft::new("0xabc", "1.0", "0x1")
            .message(long)
            .validate()
            .is_err());

        let exact = "x".repeat(MAX_MESSAGE_LEN);
        assert!(DonationDraft::new("0xabc", "1.0", "0x1")
            .message(exact)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_anonymous_discards_donor() {
        let record = DonationDraft::new("0x742d35Cc6634C0532925a3b844Bc9e7595f42e44", "1.0", "0x1")
            .anonymous(true)
            .into_record(1);
        assert_eq!(record.donor, ANONYMOUS_DONOR);
        assert!(record.is_anonymous);
    }

    #[test]
    fn test_into_record_stamps_time_and_status() {
        let before = Utc::now().timestamp_millis();
        let record = DonationDraft::new("0xabc", "1.0", "0x1").into_record(7);
        assert_eq!(record.id, 7);
        assert!(record.timestamp >= before);
        assert_eq!(record.status, DonationStatus::Confirmed);
        assert_eq!(record.provenance, Provenance::BackendReported);
    }

    #[test]
    fn test_statistics_known_values() {
        let records = vec![record(1, "0xaaa", "1.5"), record(2, "0xbbb", "2.0")];
        let stats = Statistics::from_records(&records);
        assert_eq!(stats.total_donations, "3.50");
        assert_eq!(stats.donor_count, 2);
        assert_eq!(stats.transaction_count, 2);
        assert_eq!(stats.avg_donation, "1.75");
    }

    #[test]
    fn test_statistics_empty_is_zeros() {
        let stats = Statistics::from_records(&[]);
        assert_eq!(stats.total_donations, "0.00");
        assert_eq!(stats.donor_count, 0);
        assert_eq!(stats.transaction_count, 0);
        assert_eq!(stats.avg_donation, "0.00");
    }

    #[test]
    fn test_statistics_repeat_donor_counted_once() {
        let records = vec![
            record(1, "0xaaa", "1.0"),
            record(2, "0xaaa", "2.0"),
            record(3, "0xbbb", "3.0"),
        ];
        let stats = Statistics::from_records(&records);
        assert_eq!(stats.donor_count, 2);
        assert_eq!(stats.transaction_count, 3);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(record(1, "0xaaa", "1.0")).unwrap();
        assert!(json.get("txHash").is_some());
        assert!(json.get("isAnonymous").is_some());
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["provenance"], "backend-reported");
    }
}
