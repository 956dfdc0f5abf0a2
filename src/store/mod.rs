//! GiveChain Donation Store
//!
//! This module provides the donation record store:
//!
//! - **types**: Core data structures (DonationRecord, DonationDraft, Statistics)
//! - **memory**: In-process store backed by a `Vec` behind a `RwLock`
//! - **error**: Error types
//!
//! The store is append-only: records get a monotonically increasing id, are
//! never updated or deleted, and do not survive a restart. Handlers depend on
//! the [`DonationStore`] trait rather than a concrete store, so a persistent
//! implementation can be substituted without touching request handling.
//!
//! # Example
//!
//! ```rust,no_run
//! use givechain::store::{DonationDraft, DonationStore, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryStore::new();
//!
//!     let draft = DonationDraft::new(
//!         "0x742d35Cc6634C0532925a3b844Bc9e7595f42e44",
//!         "1.5",
//!         "0x1234",
//!     )
//!     .message("For the kids");
//!
//!     let record = store.append(draft).await?;
//!     assert_eq!(record.id, 1);
//!
//!     let stats = store.statistics().await;
//!     assert_eq!(stats.transaction_count, 1);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use types::{
    DonationDraft, DonationRecord, DonationStatus, Provenance, Statistics, ANONYMOUS_DONOR,
    MAX_MESSAGE_LEN,
};

use async_trait::async_trait;

/// Interface between request handlers and the record store
///
/// Matches the operations the API exposes: list, append, filter by donor and
/// derive statistics. There is deliberately no update or delete.
#[async_trait]
pub trait DonationStore: Send + Sync {
    /// All records in insertion order
    async fn list_all(&self) -> Vec<DonationRecord>;

    /// Validate and append a draft, returning the stored record
    ///
    /// A failed validation must leave the store untouched.
    async fn append(&self, draft: DonationDraft) -> StoreResult<DonationRecord>;

    /// Records whose donor matches `address` case-insensitively
    async fn find_by_donor(&self, address: &str) -> Vec<DonationRecord>;

    /// Statistics derived from the current record set
    async fn statistics(&self) -> Statistics;

    /// Number of stored records
    async fn count(&self) -> usize;
}
