//! Aircraft fleet rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One aircraft in the monitored fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub aircraft_id: String,
    pub model: String,
    pub manufacturer: String,
    pub year_manufactured: i32,
    pub total_flight_hours: i64,
    pub status: String,
    pub last_maintenance_date: Option<NaiveDate>,
}

/// One monitored engine component on an aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineComponent {
    pub component_id: String,
    pub aircraft_id: String,
    pub engine_number: u32,
    pub component_name: String,
    pub part_number: String,
    pub operating_hours: i64,
    /// Condition estimate, 0–100.
    pub health_score: f64,
    /// Complement of the health score.
    pub failure_risk: f64,
    /// Model-predicted remaining useful life in cycles.
    pub predicted_rul: i64,
}
