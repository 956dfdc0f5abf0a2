//! Contract Route
//!
//! - GET /api/contract - Read-only snapshot of the donation contract

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ContractInfo, ContractResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chain::format_eth;

/// GET /api/contract
///
/// Reads chain id, block height and contract balance over JSON-RPC.
/// Returns 503 when the chain integration is disabled or the RPC endpoint
/// cannot be reached; the rest of the API is unaffected.
pub async fn contract_info(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ContractResponse>> {
    let chain = state.chain.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Chain integration is disabled".to_string())
    })?;

    let chain_id = chain.chain_id().await?;
    let block_number = chain.block_number().await?;
    let balance_wei = chain.contract_balance().await?;

    Ok(Json(ContractResponse::new(ContractInfo {
        address: chain.config().contract_address.clone(),
        chain_id,
        block_number,
        balance_eth: format_eth(balance_wei),
    })))
}
