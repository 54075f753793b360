//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Seeding
        .route("/seed", post(handlers::seed_all))
        .route("/dataset/seed", post(handlers::seed_dataset))
        // Dataset queries
        .route("/dataset/summary", get(handlers::dataset_summary))
        .route("/units/{unit_id}/readings", get(handlers::unit_readings))
        // Cost analytics
        .route("/analytics/{period}", post(handlers::generate_analytics))
        .route("/analytics/{period}", get(handlers::get_analytics))
        // Supply chain
        .route("/parts/{part_number}/best-supplier", get(handlers::best_supplier))
        .route("/suppliers", get(handlers::list_suppliers))
        .route("/fleet", get(handlers::list_fleet))
        // Reporting
        .route("/report", get(handlers::system_report));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
