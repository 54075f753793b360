//! Cost analytics rows.

use serde::{Deserialize, Serialize};

/// Cost-savings analytics for one reporting period.
///
/// Derived entirely from a set of maintenance events by
/// [`crate::services::cost_analytics::compute_cost_analytics`]; never mutated
/// after creation, only replaced wholesale on recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalytics {
    /// Reporting period label, e.g. `"2024-Q4"`.
    pub period: String,
    pub total_maintenance_events: usize,
    pub predictive_maintenance_count: usize,
    pub reactive_maintenance_count: usize,
    pub total_cost_predictive: f64,
    pub total_cost_reactive: f64,
    /// Counterfactual savings versus handling every predictive incident
    /// reactively at the fixed reactive total cost.
    pub total_savings: f64,
    pub downtime_hours_saved: i64,
    pub flights_cancelled_avoided: i64,
}

impl CostAnalytics {
    /// A zeroed row for a period with no recorded events.
    pub fn empty(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            total_maintenance_events: 0,
            predictive_maintenance_count: 0,
            reactive_maintenance_count: 0,
            total_cost_predictive: 0.0,
            total_cost_reactive: 0.0,
            total_savings: 0.0,
            downtime_hours_saved: 0,
            flights_cancelled_avoided: 0,
        }
    }
}
