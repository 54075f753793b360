//! High-level storage service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of the repository traits: dataset, supply-chain, and fleet
//! seeding, cost analytics generation, supplier lookup, and report assembly.
//! Business logic lives here so it stays consistent regardless of the
//! storage backend.

use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::catalog;
use crate::config::{AppConfig, CostModel, GeneratorSettings, RankingWeights};
use crate::models::{
    Aircraft, BestSupplier, CostAnalytics, EngineComponent, SensorReading, Supplier, SupplierPart,
};
use crate::services::{
    compute_cost_analytics, find_best_supplier, generate_readings, synthesize_events,
    GenerationError,
};

/// Predictive events synthesized per reporting period by default.
pub const DEFAULT_PREDICTIVE_EVENTS: usize = 12;

/// Reactive events synthesized per reporting period by default.
pub const DEFAULT_REACTIVE_EVENTS: usize = 3;

/// Part highlighted in the system report's best-supplier example.
pub const FEATURED_PART: &str = "HPT-8472-A";

/// Engines instrumented per aircraft.
const ENGINES_PER_AIRCRAFT: u32 = 4;

impl From<GenerationError> for RepositoryError {
    fn from(err: GenerationError) -> Self {
        RepositoryError::validation(err.to_string())
    }
}

/// Summary statistics over the stored reading table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_readings: usize,
    pub unit_count: usize,
    pub min_rul: u32,
    pub max_rul: u32,
    pub mean_rul: f64,
}

/// Row counts produced by a full seeding pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub readings: usize,
    pub suppliers: usize,
    pub parts: usize,
    pub offers: usize,
    pub aircraft: usize,
    pub components: usize,
    pub analytics_period: String,
}

/// Complete system report assembled from every table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    pub dataset: DatasetSummary,
    pub fleet_size: usize,
    pub total_flight_hours: i64,
    pub supplier_count: usize,
    pub parts_count: usize,
    pub analytics: Option<CostAnalytics>,
    /// Savings as a percentage of the avoided reactive cost, when analytics
    /// with predictive events exist.
    pub cost_reduction_percent: Option<f64>,
    pub featured_part: String,
    pub best_supplier: Option<BestSupplier>,
}

/// Reporting-period label for a date, e.g. `2024-Q4`.
pub fn period_label(date: NaiveDate) -> String {
    format!("{}-Q{}", date.year(), (date.month0() / 3) + 1)
}

// ==================== Health & Connection ====================

/// Check if the storage backend is healthy.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Seeding ====================

/// Generate the labeled degradation dataset and store it, replacing any
/// previous dataset.
///
/// # Returns
/// * `Ok(usize)` - Number of readings stored
/// * `Err(RepositoryError::ValidationError)` - If the generator parameters
///   are invalid; nothing is stored in that case
pub async fn seed_dataset<R: FullRepository + ?Sized>(
    repo: &R,
    settings: &GeneratorSettings,
) -> RepositoryResult<usize> {
    info!(
        "Service layer: seeding dataset ({} units, {}..={} cycles, seed {})",
        settings.unit_count, settings.min_cycles, settings.max_cycles, settings.seed
    );

    let readings = generate_readings(settings)?;
    let count = repo.store_readings(readings).await?;

    info!("Service layer: stored {} sensor readings", count);
    Ok(count)
}

/// Seed the supplier base, parts catalog, and the supplier×part offer matrix.
///
/// Every supplier offers every part; per-offer prices vary around the
/// standard price and delivery around the supplier's average, drawn from a
/// stream seeded with `seed`.
///
/// # Returns
/// * `Ok(usize)` - Number of offer links stored
pub async fn seed_supply_chain<R: FullRepository + ?Sized>(
    repo: &R,
    seed: u64,
) -> RepositoryResult<usize> {
    let suppliers = catalog::default_suppliers();
    let parts = catalog::default_parts();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut links = Vec::with_capacity(suppliers.len() * parts.len());
    for supplier in &suppliers {
        for part in &parts {
            let price_variation = rng.gen_range(0.95..1.05);
            links.push(SupplierPart {
                supplier_id: supplier.supplier_id.clone(),
                part_number: part.part_number.clone(),
                unit_price: part.standard_price * price_variation,
                min_quantity: 1,
                delivery_days: supplier.avg_delivery_days + rng.gen_range(-1..=1),
            });
        }
    }

    let supplier_count = repo.store_suppliers(suppliers).await?;
    let part_count = repo.store_parts(parts).await?;
    let link_count = repo.store_supplier_parts(links).await?;

    info!(
        "Service layer: seeded {} suppliers, {} parts, {} offer links",
        supplier_count, part_count, link_count
    );
    Ok(link_count)
}

/// Seed the aircraft fleet and its monitored engine components.
///
/// Component health, risk, and predicted RUL are drawn from a stream seeded
/// with `seed`; risk is always the complement of health.
///
/// # Returns
/// * `Ok(usize)` - Number of engine components stored
pub async fn seed_fleet<R: FullRepository + ?Sized>(repo: &R, seed: u64) -> RepositoryResult<usize> {
    let aircraft = catalog::default_aircraft();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut components = Vec::with_capacity(aircraft.len() * ENGINES_PER_AIRCRAFT as usize);
    for plane in &aircraft {
        for engine_number in 1..=ENGINES_PER_AIRCRAFT {
            let health_score = rng.gen_range(40.0..98.0);
            components.push(EngineComponent {
                component_id: format!("{}-E{}-TURB", plane.aircraft_id, engine_number),
                aircraft_id: plane.aircraft_id.clone(),
                engine_number,
                component_name: "High-Pressure Turbine".to_string(),
                part_number: FEATURED_PART.to_string(),
                operating_hours: plane.total_flight_hours,
                health_score,
                failure_risk: 100.0 - health_score,
                predicted_rul: rng.gen_range(10..200),
            });
        }
    }

    let aircraft_count = repo.store_aircraft(aircraft).await?;
    let component_count = repo.store_components(components).await?;

    info!(
        "Service layer: seeded {} aircraft with {} engine components",
        aircraft_count, component_count
    );
    Ok(component_count)
}

/// Seed every table and generate the current period's analytics.
pub async fn seed_all<R: FullRepository + ?Sized>(
    repo: &R,
    config: &AppConfig,
    as_of: NaiveDate,
) -> RepositoryResult<SeedSummary> {
    let readings = seed_dataset(repo, &config.generator).await?;
    let offers = seed_supply_chain(repo, config.generator.seed).await?;
    let components = seed_fleet(repo, config.generator.seed).await?;

    let period = period_label(as_of);
    let analytics = generate_cost_analytics(
        repo,
        &period,
        DEFAULT_PREDICTIVE_EVENTS,
        DEFAULT_REACTIVE_EVENTS,
        &config.costs,
        as_of,
    )
    .await?;

    info!(
        "Service layer: setup complete, total savings for {}: ${:.0}",
        analytics.period, analytics.total_savings
    );

    Ok(SeedSummary {
        readings,
        suppliers: repo.list_suppliers().await?.len(),
        parts: repo.list_parts().await?.len(),
        offers,
        aircraft: repo.list_aircraft().await?.len(),
        components,
        analytics_period: period,
    })
}

// ==================== Analytics ====================

/// Synthesize a maintenance history, aggregate it, and upsert the period's
/// analytics row.
///
/// Events cycle through the stored fleet's aircraft and component ids; the
/// aggregate covers the full stored history, so repeated generation for the
/// same period replaces the analytics row with the recomputed totals.
pub async fn generate_cost_analytics<R: FullRepository + ?Sized>(
    repo: &R,
    period: &str,
    predictive_count: usize,
    reactive_count: usize,
    costs: &CostModel,
    as_of: NaiveDate,
) -> RepositoryResult<CostAnalytics> {
    let aircraft_pool: Vec<String> = repo
        .list_aircraft()
        .await?
        .into_iter()
        .map(|a| a.aircraft_id)
        .collect();
    let component_pool: Vec<String> = repo
        .list_components()
        .await?
        .into_iter()
        .map(|c| c.component_id)
        .collect();

    let events = synthesize_events(
        predictive_count,
        reactive_count,
        &aircraft_pool,
        &component_pool,
        costs,
        as_of,
    )?;
    repo.store_maintenance_events(events).await?;

    let history = repo.fetch_maintenance_events().await?;
    let analytics = compute_cost_analytics(period, &history, costs);

    info!(
        "Service layer: {} maintenance events aggregated for {}, savings ${:.0}",
        analytics.total_maintenance_events, period, analytics.total_savings
    );

    repo.upsert_cost_analytics(analytics.clone()).await?;
    Ok(analytics)
}

/// Fetch the analytics row for a period.
pub async fn get_cost_analytics<R: FullRepository + ?Sized>(
    repo: &R,
    period: &str,
) -> RepositoryResult<CostAnalytics> {
    repo.get_cost_analytics(period).await
}

/// Fetch one unit's reading series, ordered by cycle.
///
/// # Returns
/// * `Err(RepositoryError::NotFound)` - If the unit has no readings
pub async fn unit_readings<R: FullRepository + ?Sized>(
    repo: &R,
    unit_id: u32,
) -> RepositoryResult<Vec<SensorReading>> {
    repo.fetch_readings_for_unit(unit_id).await
}

// ==================== Supply Chain ====================

/// Find the best-ranked supplier offer for a part.
///
/// # Returns
/// * `Ok(Some(BestSupplier))` - The winning offer
/// * `Ok(None)` - No supplier offers the part (expected business condition)
pub async fn best_supplier<R: FullRepository + ?Sized>(
    repo: &R,
    part_number: &str,
    weights: &RankingWeights,
) -> RepositoryResult<Option<BestSupplier>> {
    let offers = repo.fetch_offers_for_part(part_number).await?;
    Ok(find_best_supplier(part_number, &offers, weights))
}

/// List the supplier base in stored order.
pub async fn list_suppliers<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Supplier>> {
    repo.list_suppliers().await
}

/// List the monitored aircraft fleet in stored order.
pub async fn list_fleet<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Aircraft>> {
    repo.list_aircraft().await
}

// ==================== Reporting ====================

/// Summarize the stored reading table.
pub async fn dataset_summary<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<DatasetSummary> {
    let readings = repo.fetch_all_readings().await?;
    if readings.is_empty() {
        return Ok(DatasetSummary {
            total_readings: 0,
            unit_count: 0,
            min_rul: 0,
            max_rul: 0,
            mean_rul: 0.0,
        });
    }

    let mut units: Vec<u32> = readings.iter().map(|r| r.unit_id).collect();
    units.sort_unstable();
    units.dedup();

    let min_rul = readings.iter().map(|r| r.rul).min().unwrap_or(0);
    let max_rul = readings.iter().map(|r| r.rul).max().unwrap_or(0);
    let mean_rul =
        readings.iter().map(|r| r.rul as f64).sum::<f64>() / readings.len() as f64;

    Ok(DatasetSummary {
        total_readings: readings.len(),
        unit_count: units.len(),
        min_rul,
        max_rul,
        mean_rul,
    })
}

/// Assemble the full system report.
///
/// Missing analytics are reported as `None` rather than failing: a fresh
/// repository still produces a (mostly empty) report.
pub async fn build_report<R: FullRepository + ?Sized>(
    repo: &R,
    costs: &CostModel,
    weights: &RankingWeights,
) -> RepositoryResult<SystemReport> {
    let dataset = dataset_summary(repo).await?;
    let aircraft = repo.list_aircraft().await?;
    let supplier_count = repo.list_suppliers().await?.len();
    let parts_count = repo.list_parts().await?.len();

    let analytics = match repo.list_cost_analytics().await {
        Ok(rows) => rows.into_iter().last(),
        Err(e) => {
            warn!("Service layer: failed to list analytics for report: {}", e);
            None
        }
    };

    let cost_reduction_percent = analytics.as_ref().and_then(|a| {
        if a.predictive_maintenance_count == 0 {
            return None;
        }
        let avoided = a.predictive_maintenance_count as f64 * costs.reactive_total_cost;
        Some((a.total_savings / avoided) * 100.0)
    });

    let best = best_supplier(repo, FEATURED_PART, weights).await?;

    Ok(SystemReport {
        dataset,
        fleet_size: aircraft.len(),
        total_flight_hours: aircraft.iter().map(|a| a.total_flight_hours).sum(),
        supplier_count,
        parts_count,
        analytics,
        cost_reduction_percent,
        featured_part: FEATURED_PART.to_string(),
        best_supplier: best,
    })
}
