//! Cost-savings analytics aggregation.
//!
//! Reduces a set of maintenance events into one analytics row per reporting
//! period. The savings figures are a counterfactual under fixed policy
//! constants: every predictive event is assumed to have replaced one
//! would-be reactive failure at the full reactive cost. These are business
//! constants, not fitted estimates.

use crate::config::CostModel;
use crate::models::{CostAnalytics, MaintenanceEvent};

/// Reduce `events` into the analytics row for `period`.
///
/// A pure, associative reduction: counts and sums per predictive/reactive
/// partition, then the derived counterfactual metrics. An empty event set is
/// a valid input and yields an all-zero row.
pub fn compute_cost_analytics(
    period: &str,
    events: &[MaintenanceEvent],
    costs: &CostModel,
) -> CostAnalytics {
    if events.is_empty() {
        return CostAnalytics::empty(period);
    }

    let mut predictive_count = 0usize;
    let mut reactive_count = 0usize;
    let mut predictive_cost = 0.0f64;
    let mut reactive_cost = 0.0f64;
    let mut predictive_downtime = 0i64;

    for event in events {
        if event.is_predictive {
            predictive_count += 1;
            predictive_cost += event.total_cost;
            predictive_downtime += event.downtime_hours;
        } else {
            reactive_count += 1;
            reactive_cost += event.total_cost;
        }
    }

    // Had every predictive incident instead failed in service, each would
    // have cost the full reactive total.
    let avoided_reactive_cost = predictive_count as f64 * costs.reactive_total_cost;
    let total_savings = avoided_reactive_cost - predictive_cost;
    let downtime_hours_saved =
        predictive_count as i64 * costs.reactive_downtime_hours - predictive_downtime;
    let flights_cancelled_avoided =
        predictive_count as i64 * costs.cancellations_per_reactive;

    CostAnalytics {
        period: period.to_string(),
        total_maintenance_events: events.len(),
        predictive_maintenance_count: predictive_count,
        reactive_maintenance_count: reactive_count,
        total_cost_predictive: predictive_cost,
        total_cost_reactive: reactive_cost,
        total_savings,
        downtime_hours_saved,
        flights_cancelled_avoided,
    }
}
