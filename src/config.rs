//! Application configuration support.
//!
//! This module centralizes the cost model, dataset generation parameters, and
//! supplier ranking weights, and provides utilities for reading them from a
//! TOML configuration file. Every value has a default matching the shipped
//! cost study, so a missing or partial file is never fatal.
//!
//! Components receive these structs by value at construction; nothing here is
//! global or mutable, which lets tests vary cost constants freely.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("No aeropredict.toml found in standard locations")]
    NotFound,
}

/// Fixed maintenance cost profile, in USD and hours.
///
/// Predictive events are planned shop visits; reactive events are emergency
/// failures whose total additionally carries the flight-cancellation penalty.
/// The reactive total is a single policy constant rather than a sum of its
/// parts: the counterfactual savings computation multiplies it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    #[serde(default = "default_predictive_labor_cost")]
    pub predictive_labor_cost: f64,
    #[serde(default = "default_predictive_parts_cost")]
    pub predictive_parts_cost: f64,
    #[serde(default = "default_predictive_downtime_hours")]
    pub predictive_downtime_hours: i64,
    #[serde(default = "default_reactive_labor_cost")]
    pub reactive_labor_cost: f64,
    #[serde(default = "default_reactive_parts_cost")]
    pub reactive_parts_cost: f64,
    #[serde(default = "default_reactive_downtime_hours")]
    pub reactive_downtime_hours: i64,
    /// Full cost of one reactive incident, cancellation penalty included.
    #[serde(default = "default_reactive_total_cost")]
    pub reactive_total_cost: f64,
    /// Flights cancelled by one reactive incident.
    #[serde(default = "default_cancellations_per_reactive")]
    pub cancellations_per_reactive: i64,
}

fn default_predictive_labor_cost() -> f64 {
    2300.0
}

fn default_predictive_parts_cost() -> f64 {
    4200.0
}

fn default_predictive_downtime_hours() -> i64 {
    6
}

fn default_reactive_labor_cost() -> f64 {
    18000.0
}

fn default_reactive_parts_cost() -> f64 {
    12600.0
}

fn default_reactive_downtime_hours() -> i64 {
    48
}

fn default_reactive_total_cost() -> f64 {
    52000.0
}

fn default_cancellations_per_reactive() -> i64 {
    3
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            predictive_labor_cost: default_predictive_labor_cost(),
            predictive_parts_cost: default_predictive_parts_cost(),
            predictive_downtime_hours: default_predictive_downtime_hours(),
            reactive_labor_cost: default_reactive_labor_cost(),
            reactive_parts_cost: default_reactive_parts_cost(),
            reactive_downtime_hours: default_reactive_downtime_hours(),
            reactive_total_cost: default_reactive_total_cost(),
            cancellations_per_reactive: default_cancellations_per_reactive(),
        }
    }
}

impl CostModel {
    /// Total cost of one predictive event (labor + parts, no penalties).
    pub fn predictive_total_cost(&self) -> f64 {
        self.predictive_labor_cost + self.predictive_parts_cost
    }

    /// Residual of the reactive total above labor and parts.
    pub fn cancellation_penalty(&self) -> f64 {
        self.reactive_total_cost - self.reactive_labor_cost - self.reactive_parts_cost
    }

    /// Savings from handling one incident predictively instead of reactively.
    pub fn savings_per_incident(&self) -> f64 {
        self.reactive_total_cost - self.predictive_total_cost()
    }

    /// Savings per incident as a percentage of the reactive total.
    pub fn savings_percentage(&self) -> f64 {
        (self.savings_per_incident() / self.reactive_total_cost) * 100.0
    }
}

/// Parameters for the degradation dataset generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Number of engine units to simulate.
    #[serde(default = "default_unit_count")]
    pub unit_count: u32,
    /// Minimum lifespan in cycles.
    #[serde(default = "default_min_cycles")]
    pub min_cycles: u32,
    /// Maximum lifespan in cycles.
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u32,
    /// Base seed for the per-unit random sub-streams.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_unit_count() -> u32 {
    100
}

fn default_min_cycles() -> u32 {
    150
}

fn default_max_cycles() -> u32 {
    350
}

fn default_seed() -> u64 {
    42
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            unit_count: default_unit_count(),
            min_cycles: default_min_cycles(),
            max_cycles: default_max_cycles(),
            seed: default_seed(),
        }
    }
}

/// Weights and unit-scaling constants for supplier offer scoring.
///
/// The scales bring dollars, days, and rating points to comparable magnitude
/// before the weighted sum. Hand-tuned; changing them changes which supplier
/// wins, so treat them as part of the business contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    #[serde(default = "default_price_weight")]
    pub price_weight: f64,
    #[serde(default = "default_delivery_weight")]
    pub delivery_weight: f64,
    #[serde(default = "default_rating_weight")]
    pub rating_weight: f64,
    /// Dollars-equivalent per delivery day.
    #[serde(default = "default_delivery_scale")]
    pub delivery_scale: f64,
    /// Dollars-equivalent per rating point below the maximum.
    #[serde(default = "default_rating_scale")]
    pub rating_scale: f64,
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
}

fn default_price_weight() -> f64 {
    0.4
}

fn default_delivery_weight() -> f64 {
    0.3
}

fn default_rating_weight() -> f64 {
    0.3
}

fn default_delivery_scale() -> f64 {
    100.0
}

fn default_rating_scale() -> f64 {
    500.0
}

fn default_max_rating() -> f64 {
    5.0
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            price_weight: default_price_weight(),
            delivery_weight: default_delivery_weight(),
            rating_weight: default_rating_weight(),
            delivery_scale: default_delivery_scale(),
            rating_scale: default_rating_scale(),
            max_rating: default_max_rating(),
        }
    }
}

/// Repository backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

fn default_repo_type() -> String {
    "local".to_string()
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

/// Complete application configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub costs: CostModel,
    #[serde(default)]
    pub ranking: RankingWeights,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `aeropredict.toml` in the current directory and the
    /// parent directory. Falls back to built-in defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("aeropredict.toml"),
            PathBuf::from("../aeropredict.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }
}
