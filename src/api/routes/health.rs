//! Health Route
//!
//! - GET /api/health - Liveness check

use axum::Json;

use crate::api::dto::HealthResponse;

/// GET /api/health
///
/// Returns 200 with a status line whenever the process is alive. The store
/// is in-process memory, so there is no dependency to probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = health().await;
        assert_eq!(response.0.status, "Server is running");
    }
}
