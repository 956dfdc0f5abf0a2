//! GiveChain REST API
//!
//! HTTP API layer for the donation dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Donations
//! - `GET /api/transactions` - All donation records
//! - `GET /api/donations` - All donation records
//! - `POST /api/donations` - Record a new donation
//! - `GET /api/donations/:address` - Records for one donor
//!
//! ## Statistics
//! - `GET /api/statistics` - Aggregates over the record set
//!
//! ## Contract
//! - `GET /api/contract` - Read-only contract snapshot (chain RPC)
//!
//! ## Health
//! - `GET /api/health` - Liveness check
//!
//! # Example
//!
//! ```rust,ignore
//! use givechain::api::{build_router, serve, AppState};
//! use givechain::config::ApiConfig;
//! use givechain::store::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/transactions", get(routes::donations::list_donations))
        .route("/donations", get(routes::donations::list_donations))
        .route("/donations", post(routes::donations::create_donation))
        .route("/donations/:address", get(routes::donations::donations_by_donor))
        .route("/statistics", get(routes::statistics::get_statistics))
        .route("/contract", get(routes::contract::contract_info));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .fallback(endpoint_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Fallback handler for unmatched routes
async fn endpoint_not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("GiveChain API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("GiveChain API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store, ApiConfig::default());
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_donation(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/donations")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_test_app();
        let response = app.oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "Server is running");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let app = create_test_app();
        let response = app.oneshot(get("/api/donations")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 0);
        assert_eq!(json["data"], json!([]));
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_transactions_matches_donations() {
        let app = create_test_app();

        app.clone()
            .oneshot(post_donation(json!({
                "donor": "0xabc", "amount": "1.0", "txHash": "0x1"
            })))
            .await
            .unwrap();

        let donations = body_json(
            app.clone().oneshot(get("/api/donations")).await.unwrap(),
        )
        .await;
        let transactions =
            body_json(app.oneshot(get("/api/transactions")).await.unwrap()).await;

        assert_eq!(donations["count"], transactions["count"]);
        assert_eq!(donations["data"], transactions["data"]);
    }

    #[tokio::test]
    async fn test_post_then_fetch_by_donor() {
        let app = create_test_app();
        let donor = "0x742d35Cc6634C0532925a3b844Bc9e7595f42e44";

        let response = app
            .clone()
            .oneshot(post_donation(json!({
                "donor": donor,
                "amount": "0.75",
                "txHash": "0xfeed",
                "message": "Keep it up",
                "isAnonymous": false
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = body_json(response).await;
        assert_eq!(created["success"], true);
        assert_eq!(created["data"]["id"], 1);
        assert_eq!(created["data"]["status"], "confirmed");

        // Query with a different casing of the same address.
        let response = app
            .oneshot(get(&format!("/api/donations/{}", donor.to_lowercase())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["amount"], "0.75");
        assert_eq!(json["data"][0]["message"], "Keep it up");
    }

    #[tokio::test]
    async fn test_post_missing_fields_is_400() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_donation(json!({ "amount": "1.0" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        let error = json["error"].as_str().unwrap();
        assert!(error.contains("donor"));
        assert!(error.contains("txHash"));

        // The failed request must not have mutated the store.
        let json = body_json(app.oneshot(get("/api/donations")).await.unwrap()).await;
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn test_anonymous_post_discards_donor() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_donation(json!({
                "donor": "0xSECRET",
                "amount": "1.0",
                "txHash": "0x1",
                "isAnonymous": true
            })))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["data"]["donor"], "Anonymous");

        let json = body_json(
            app.oneshot(get("/api/donations/0xSECRET")).await.unwrap(),
        )
        .await;
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn test_statistics_empty_store() {
        let app = create_test_app();
        let response = app.oneshot(get("/api/statistics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["totalDonations"], "0.00");
        assert_eq!(json["data"]["donorCount"], 0);
        assert_eq!(json["data"]["transactionCount"], 0);
        assert_eq!(json["data"]["avgDonation"], "0.00");
    }

    #[tokio::test]
    async fn test_statistics_after_donations() {
        let app = create_test_app();

        for (donor, amount) in [("0xaaa", "1.5"), ("0xbbb", "2.0")] {
            app.clone()
                .oneshot(post_donation(json!({
                    "donor": donor, "amount": amount, "txHash": "0x1"
                })))
                .await
                .unwrap();
        }

        let json = body_json(app.oneshot(get("/api/statistics")).await.unwrap()).await;
        assert_eq!(json["data"]["totalDonations"], "3.50");
        assert_eq!(json["data"]["donorCount"], 2);
        assert_eq!(json["data"]["transactionCount"], 2);
        assert_eq!(json["data"]["avgDonation"], "1.75");
    }

    #[tokio::test]
    async fn test_unmatched_route_is_404_envelope() {
        let app = create_test_app();
        let response = app.oneshot(get("/api/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn test_contract_unavailable_without_chain() {
        let app = create_test_app();
        let response = app.oneshot(get("/api/contract")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_chain_confirmed_provenance_accepted() {
        let app = create_test_app();

        let response = app
            .oneshot(post_donation(json!({
                "donor": "0xabc",
                "amount": "1.0",
                "txHash": "0x1",
                "provenance": "chain-confirmed"
            })))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["data"]["provenance"], "chain-confirmed");
    }
}
