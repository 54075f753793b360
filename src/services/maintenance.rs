//! Maintenance history synthesis.
//!
//! Builds a labeled mix of predictive and reactive maintenance events with
//! the fixed cost/downtime profiles from the [`CostModel`]. The construction
//! is seed-free: given the counts, the pools, and the anchor date, the output
//! is fully determined.

use chrono::{Duration, NaiveDate};

use super::GenerationError;
use crate::config::CostModel;
use crate::models::{MaintenanceEvent, MaintenanceType};

/// Days between consecutive predictive events, walking backward from the
/// anchor date.
const PREDICTIVE_SPACING_DAYS: i64 = 7;

/// Days between consecutive reactive events.
const REACTIVE_SPACING_DAYS: i64 = 30;

/// Synthesize `predictive_count + reactive_count` maintenance events.
///
/// Predictive events are dated weekly backward from `as_of`, reactive events
/// monthly. Aircraft and component ids cycle through the pools by index
/// modulo pool size; when a count exceeds the pool size the ids simply
/// repeat.
///
/// # Errors
/// `InvalidParameter` when events are requested but either pool is empty.
pub fn synthesize_events(
    predictive_count: usize,
    reactive_count: usize,
    aircraft_pool: &[String],
    component_pool: &[String],
    costs: &CostModel,
    as_of: NaiveDate,
) -> Result<Vec<MaintenanceEvent>, GenerationError> {
    if predictive_count + reactive_count > 0 {
        if aircraft_pool.is_empty() {
            return Err(GenerationError::InvalidParameter(
                "aircraft_pool must not be empty when events are requested".to_string(),
            ));
        }
        if component_pool.is_empty() {
            return Err(GenerationError::InvalidParameter(
                "component_pool must not be empty when events are requested".to_string(),
            ));
        }
    }

    let mut events = Vec::with_capacity(predictive_count + reactive_count);

    for i in 0..predictive_count {
        events.push(MaintenanceEvent {
            aircraft_id: aircraft_pool[i % aircraft_pool.len()].clone(),
            component_id: component_pool[i % component_pool.len()].clone(),
            maintenance_type: MaintenanceType::Predictive,
            date_performed: as_of - Duration::days(i as i64 * PREDICTIVE_SPACING_DAYS),
            labor_cost: costs.predictive_labor_cost,
            parts_cost: costs.predictive_parts_cost,
            total_cost: costs.predictive_total_cost(),
            downtime_hours: costs.predictive_downtime_hours,
            is_predictive: true,
        });
    }

    for i in 0..reactive_count {
        events.push(MaintenanceEvent {
            aircraft_id: aircraft_pool[i % aircraft_pool.len()].clone(),
            component_id: component_pool[i % component_pool.len()].clone(),
            maintenance_type: MaintenanceType::Reactive,
            date_performed: as_of - Duration::days(i as i64 * REACTIVE_SPACING_DAYS),
            labor_cost: costs.reactive_labor_cost,
            parts_cost: costs.reactive_parts_cost,
            // Includes the flight-cancellation penalty above labor + parts.
            total_cost: costs.reactive_total_cost,
            downtime_hours: costs.reactive_downtime_hours,
            is_predictive: false,
        });
    }

    Ok(events)
}
