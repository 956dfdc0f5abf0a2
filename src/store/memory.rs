//! In-memory donation store
//!
//! Holds all records in a `Vec` behind a `tokio::sync::RwLock`. Appends take
//! the write lock for the duration of a single synchronous push, so ids stay
//! monotonic without any further coordination.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::types::{DonationDraft, DonationRecord, Statistics};
use crate::store::{DonationStore, StoreResult};

/// In-process store; contents are lost on restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<DonationRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with a couple of demo donations
    ///
    /// Mirrors what a freshly deployed dashboard shows before anyone has
    /// donated, so the UI has something to render.
    pub async fn with_demo_records() -> Self {
        let store = Self::new();

        let seeds = [
            DonationDraft::new(
                "0x742d35Cc6634C0532925a3b844Bc9e7595f42e44",
                "1.5",
                "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
            )
            .message("For education"),
            DonationDraft::new(
                "0x8ba1f109551bD432803012645Ac136ddd64DBA72",
                "2.0",
                "0xabcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890",
            )
            .message("Donation for those in need"),
        ];

        for draft in seeds {
            // Drafts above are statically valid.
            if let Err(e) = store.append(draft).await {
                tracing::warn!("Failed to seed demo record: {}", e);
            }
        }

        store
    }
}

#[async_trait]
impl DonationStore for MemoryStore {
    async fn list_all(&self) -> Vec<DonationRecord> {
        self.records.read().await.clone()
    }

    async fn append(&self, draft: DonationDraft) -> StoreResult<DonationRecord> {
        draft.validate()?;

        let mut records = self.records.write().await;
        let record = draft.into_record(records.len() as u64 + 1);
        records.push(record.clone());

        tracing::debug!(
            id = record.id,
            donor = %record.donor,
            amount = %record.amount,
            "Appended donation record"
        );

        Ok(record)
    }

    async fn find_by_donor(&self, address: &str) -> Vec<DonationRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.donor.eq_ignore_ascii_case(address))
            .cloned()
            .collect()
    }

    async fn statistics(&self) -> Statistics {
        Statistics::from_records(&self.records.read().await)
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::ANONYMOUS_DONOR;

    #[tokio::test]
    async fn test_append_assigns_increasing_ids() {
        let store = MemoryStore::new();

        for expected in 1..=5u64 {
            let record = store
                .append(DonationDraft::new("0xabc", "1.0", "0x1"))
                .await
                .unwrap();
            assert_eq!(record.id, expected);
        }
    }

    #[tokio::test]
    async fn test_append_timestamp_not_before_call() {
        let store = MemoryStore::new();
        let before = chrono::Utc::now().timestamp_millis();
        let record = store
            .append(DonationDraft::new("0xabc", "1.0", "0x1"))
            .await
            .unwrap();
        assert!(record.timestamp >= before);
    }

    #[tokio::test]
    async fn test_invalid_draft_does_not_mutate() {
        let store = MemoryStore::new();

        let draft = DonationDraft {
            donor: Some("0xabc".to_string()),
            amount: None,
            tx_hash: Some("0x1".to_string()),
            message: None,
            is_anonymous: false,
            provenance: None,
        };

        assert!(store.append(draft).await.is_err());
        assert_eq!(store.count().await, 0);
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_donor_is_unrecoverable() {
        let store = MemoryStore::new();
        store
            .append(DonationDraft::new("0xDEADBEEF", "1.0", "0x1").anonymous(true))
            .await
            .unwrap();

        let all = store.list_all().await;
        assert_eq!(all[0].donor, ANONYMOUS_DONOR);

        // The original address is gone from the store entirely.
        assert!(store.find_by_donor("0xDEADBEEF").await.is_empty());
        assert_eq!(store.find_by_donor("anonymous").await.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_donor_case_insensitive() {
        let store = MemoryStore::new();
        store
            .append(DonationDraft::new(
                "0xABCdef0123456789ABCdef0123456789ABCdef01",
                "1.0",
                "0x1",
            ))
            .await
            .unwrap();

        let upper = store
            .find_by_donor("0xABCDEF0123456789ABCDEF0123456789ABCDEF01")
            .await;
        let lower = store
            .find_by_donor("0xabcdef0123456789abcdef0123456789abcdef01")
            .await;

        assert_eq!(upper.len(), 1);
        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for amount in ["1.0", "2.0", "3.0"] {
            store
                .append(DonationDraft::new("0xabc", amount, "0x1"))
                .await
                .unwrap();
        }

        let amounts: Vec<_> = store.list_all().await.into_iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec!["1.0", "2.0", "3.0"]);
    }

    #[tokio::test]
    async fn test_demo_records_seeded() {
        let store = MemoryStore::with_demo_records().await;
        assert_eq!(store.count().await, 2);

        let stats = store.statistics().await;
        assert_eq!(stats.total_donations, "3.50");
        assert_eq!(stats.donor_count, 2);
        assert_eq!(stats.avg_donation, "1.75");
    }
}
