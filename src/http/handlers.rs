//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::dto::{
    FleetResponse, GenerateAnalyticsRequest, HealthResponse, SeedDatasetRequest,
    SeedDatasetResponse, SupplierListResponse, UnitReadingsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::config::GeneratorSettings;
use crate::db::services as db_services;
use crate::db::services::{DatasetSummary, SeedSummary, SystemReport};
use crate::models::{BestSupplier, CostAnalytics};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Dataset
// =============================================================================

/// POST /v1/dataset/seed
///
/// Generate and store the labeled degradation dataset. Request fields
/// override the configured generator settings.
pub async fn seed_dataset(
    State(state): State<AppState>,
    Json(request): Json<SeedDatasetRequest>,
) -> HandlerResult<SeedDatasetResponse> {
    let defaults = state.config.generator;
    let settings = GeneratorSettings {
        unit_count: request.unit_count.unwrap_or(defaults.unit_count),
        min_cycles: request.min_cycles.unwrap_or(defaults.min_cycles),
        max_cycles: request.max_cycles.unwrap_or(defaults.max_cycles),
        seed: request.seed.unwrap_or(defaults.seed),
    };

    let stored = db_services::seed_dataset(state.repository.as_ref(), &settings).await?;

    Ok(Json(SeedDatasetResponse {
        readings_stored: stored,
        unit_count: settings.unit_count,
    }))
}

/// POST /v1/seed
///
/// Seed every table (dataset, supply chain, fleet) and generate the current
/// period's analytics.
pub async fn seed_all(State(state): State<AppState>) -> HandlerResult<SeedSummary> {
    let summary = db_services::seed_all(
        state.repository.as_ref(),
        &state.config,
        Utc::now().date_naive(),
    )
    .await?;
    Ok(Json(summary))
}

/// GET /v1/dataset/summary
///
/// Summary statistics over the stored reading table.
pub async fn dataset_summary(State(state): State<AppState>) -> HandlerResult<DatasetSummary> {
    let summary = db_services::dataset_summary(state.repository.as_ref()).await?;
    Ok(Json(summary))
}

/// GET /v1/units/{unit_id}/readings
///
/// One unit's full reading series, ordered by cycle.
pub async fn unit_readings(
    State(state): State<AppState>,
    Path(unit_id): Path<u32>,
) -> HandlerResult<UnitReadingsResponse> {
    let readings = db_services::unit_readings(state.repository.as_ref(), unit_id).await?;

    Ok(Json(UnitReadingsResponse {
        unit_id,
        total: readings.len(),
        readings,
    }))
}

// =============================================================================
// Analytics
// =============================================================================

/// POST /v1/analytics/{period}
///
/// Synthesize a maintenance history and recompute the period's analytics row.
pub async fn generate_analytics(
    State(state): State<AppState>,
    Path(period): Path<String>,
    Json(request): Json<GenerateAnalyticsRequest>,
) -> HandlerResult<CostAnalytics> {
    let analytics = db_services::generate_cost_analytics(
        state.repository.as_ref(),
        &period,
        request.predictive_count,
        request.reactive_count,
        &state.config.costs,
        Utc::now().date_naive(),
    )
    .await?;
    Ok(Json(analytics))
}

/// GET /v1/analytics/{period}
///
/// Fetch the stored analytics row for a period.
pub async fn get_analytics(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> HandlerResult<CostAnalytics> {
    let analytics =
        db_services::get_cost_analytics(state.repository.as_ref(), &period).await?;
    Ok(Json(analytics))
}

// =============================================================================
// Supply Chain
// =============================================================================

/// GET /v1/parts/{part_number}/best-supplier
///
/// The best-ranked supplier offer for a part; 404 when nobody offers it.
pub async fn best_supplier(
    State(state): State<AppState>,
    Path(part_number): Path<String>,
) -> HandlerResult<BestSupplier> {
    let best = db_services::best_supplier(
        state.repository.as_ref(),
        &part_number,
        &state.config.ranking,
    )
    .await?;

    match best {
        Some(best) => Ok(Json(best)),
        None => Err(AppError::NotFound(format!(
            "No supplier offers found for part {}",
            part_number
        ))),
    }
}

/// GET /v1/suppliers
///
/// List the supplier base.
pub async fn list_suppliers(State(state): State<AppState>) -> HandlerResult<SupplierListResponse> {
    let suppliers = db_services::list_suppliers(state.repository.as_ref()).await?;
    let total = suppliers.len();
    Ok(Json(SupplierListResponse { suppliers, total }))
}

/// GET /v1/fleet
///
/// List the monitored aircraft fleet.
pub async fn list_fleet(State(state): State<AppState>) -> HandlerResult<FleetResponse> {
    let aircraft = db_services::list_fleet(state.repository.as_ref()).await?;
    let total = aircraft.len();
    Ok(Json(FleetResponse { aircraft, total }))
}

// =============================================================================
// Reporting
// =============================================================================

/// GET /v1/report
///
/// The full system report across every table.
pub async fn system_report(State(state): State<AppState>) -> HandlerResult<SystemReport> {
    let report = db_services::build_report(
        state.repository.as_ref(),
        &state.config.costs,
        &state.config.ranking,
    )
    .await?;
    Ok(Json(report))
}
