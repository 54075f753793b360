//! Maintenance history rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of maintenance action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceType {
    /// Planned shop visit triggered by a prediction.
    Predictive,
    /// Unplanned emergency repair after a failure.
    Reactive,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Predictive => "Predictive",
            Self::Reactive => "Reactive",
        }
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed maintenance action on a fleet component.
///
/// For reactive events `total_cost` exceeds `labor_cost + parts_cost` by the
/// flight-cancellation penalty; predictive totals are exactly labor + parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    pub aircraft_id: String,
    pub component_id: String,
    pub maintenance_type: MaintenanceType,
    pub date_performed: NaiveDate,
    pub labor_cost: f64,
    pub parts_cost: f64,
    pub total_cost: f64,
    pub downtime_hours: i64,
    pub is_predictive: bool,
}
