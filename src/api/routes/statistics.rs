//! Statistics Route
//!
//! - GET /api/statistics - Aggregates over the full record set

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::StatisticsResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/statistics
///
/// Derived on demand, never stored. An empty store yields explicit zeros
/// instead of a division fault.
pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StatisticsResponse>> {
    let stats = state.store.statistics().await;
    Ok(Json(StatisticsResponse::new(stats)))
}
