//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::models::{Aircraft, SensorReading, Supplier};

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub repository: String,
}

/// Request body for dataset seeding. Omitted fields fall back to the
/// configured generator settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedDatasetRequest {
    #[serde(default)]
    pub unit_count: Option<u32>,
    #[serde(default)]
    pub min_cycles: Option<u32>,
    #[serde(default)]
    pub max_cycles: Option<u32>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Response for dataset seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDatasetResponse {
    pub readings_stored: usize,
    pub unit_count: u32,
}

/// Request body for analytics generation. Defaults match the shipped
/// reporting profile (12 predictive, 3 reactive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateAnalyticsRequest {
    #[serde(default = "default_predictive_count")]
    pub predictive_count: usize,
    #[serde(default = "default_reactive_count")]
    pub reactive_count: usize,
}

fn default_predictive_count() -> usize {
    crate::db::services::DEFAULT_PREDICTIVE_EVENTS
}

fn default_reactive_count() -> usize {
    crate::db::services::DEFAULT_REACTIVE_EVENTS
}

impl Default for GenerateAnalyticsRequest {
    fn default() -> Self {
        Self {
            predictive_count: default_predictive_count(),
            reactive_count: default_reactive_count(),
        }
    }
}

/// Response for one unit's reading series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitReadingsResponse {
    pub unit_id: u32,
    pub total: usize,
    pub readings: Vec<SensorReading>,
}

/// Response for the supplier listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierListResponse {
    pub suppliers: Vec<Supplier>,
    pub total: usize,
}

/// Response for the fleet listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetResponse {
    pub aircraft: Vec<Aircraft>,
    pub total: usize,
}
