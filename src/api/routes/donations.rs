//! Donation Routes
//!
//! Endpoints for reading and appending donation records.
//!
//! - GET /api/transactions - All records (kept alongside /api/donations for
//!   compatibility with existing clients)
//! - GET /api/donations - All records
//! - POST /api/donations - Record a new donation
//! - GET /api/donations/:address - Records for one donor

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CreateDonationResponse, DonationListResponse, DonorDonationsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::store::DonationDraft;

/// GET /api/transactions and GET /api/donations
///
/// Returns every record in insertion order. No pagination; the store is a
/// demonstration-sized in-memory list.
pub async fn list_donations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DonationListResponse>> {
    let records = state.store.list_all().await;
    Ok(Json(DonationListResponse::new(records)))
}

/// POST /api/donations
///
/// Validates and appends a draft. Validation failures return 400 and leave
/// the store unchanged; the store enforces that itself.
pub async fn create_donation(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<DonationDraft>,
) -> ApiResult<Json<CreateDonationResponse>> {
    let record = state.store.append(draft).await?;

    tracing::info!(
        id = record.id,
        donor = %record.donor,
        amount = %record.amount,
        provenance = ?record.provenance,
        "Donation recorded"
    );

    Ok(Json(CreateDonationResponse::new(record)))
}

/// GET /api/donations/:address
///
/// Case-insensitive exact match on the donor field. An address with no
/// donations returns an empty list, not a 404.
pub async fn donations_by_donor(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> ApiResult<Json<DonorDonationsResponse>> {
    let records = state.store.find_by_donor(&address).await;
    Ok(Json(DonorDonationsResponse::new(records)))
}
