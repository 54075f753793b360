//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap and Vec structures, providing fast, deterministic,
//! and isolated execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::*;
use crate::models::{
    Aircraft, CostAnalytics, EngineComponent, MaintenanceEvent, Part, SensorReading, Supplier,
    SupplierOffer, SupplierPart,
};

/// In-memory local repository.
///
/// Tables live behind a single `RwLock`; `Vec`s keep insertion order so
/// joins and listings come back deterministically.
///
/// # Example
/// ```
/// use aeropredict::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.stored_reading_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    readings: Vec<SensorReading>,
    maintenance_history: Vec<MaintenanceEvent>,
    suppliers: Vec<Supplier>,
    parts: Vec<Part>,
    supplier_parts: Vec<SupplierPart>,
    aircraft: Vec<Aircraft>,
    components: Vec<EngineComponent>,
    cost_analytics: HashMap<String, CostAnalytics>,

    // Connection health
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Number of readings currently stored (synchronous test helper).
    pub fn stored_reading_count(&self) -> usize {
        self.data.read().unwrap().readings.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Repository is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensorDataRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn store_readings(&self, mut readings: Vec<SensorReading>) -> RepositoryResult<usize> {
        self.check_health()?;
        readings.sort_by_key(|r| (r.unit_id, r.cycle));
        let count = readings.len();
        let mut data = self.data.write().unwrap();
        data.readings = readings;
        Ok(count)
    }

    async fn fetch_readings_for_unit(
        &self,
        unit_id: u32,
    ) -> RepositoryResult<Vec<SensorReading>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let unit: Vec<_> = data
            .readings
            .iter()
            .filter(|r| r.unit_id == unit_id)
            .cloned()
            .collect();
        if unit.is_empty() {
            return Err(RepositoryError::not_found_with_context(
                format!("No readings for unit {}", unit_id),
                ErrorContext::new("fetch_readings_for_unit")
                    .with_entity("reading")
                    .with_entity_id(unit_id),
            ));
        }
        Ok(unit)
    }

    async fn fetch_all_readings(&self) -> RepositoryResult<Vec<SensorReading>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.readings.clone())
    }

    async fn reading_count(&self) -> RepositoryResult<usize> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.readings.len())
    }
}

#[async_trait]
impl MaintenanceRepository for LocalRepository {
    async fn store_maintenance_events(
        &self,
        events: Vec<MaintenanceEvent>,
    ) -> RepositoryResult<usize> {
        self.check_health()?;
        let count = events.len();
        let mut data = self.data.write().unwrap();
        data.maintenance_history.extend(events);
        Ok(count)
    }

    async fn fetch_maintenance_events(&self) -> RepositoryResult<Vec<MaintenanceEvent>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.maintenance_history.clone())
    }

    async fn upsert_cost_analytics(&self, analytics: CostAnalytics) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        data.cost_analytics
            .insert(analytics.period.clone(), analytics);
        Ok(())
    }

    async fn get_cost_analytics(&self, period: &str) -> RepositoryResult<CostAnalytics> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        data.cost_analytics.get(period).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("No analytics for period {}", period),
                ErrorContext::new("get_cost_analytics")
                    .with_entity("analytics")
                    .with_entity_id(period),
            )
        })
    }

    async fn list_cost_analytics(&self) -> RepositoryResult<Vec<CostAnalytics>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut rows: Vec<_> = data.cost_analytics.values().cloned().collect();
        rows.sort_by(|a, b| a.period.cmp(&b.period));
        Ok(rows)
    }
}

#[async_trait]
impl SupplyChainRepository for LocalRepository {
    async fn store_suppliers(&self, suppliers: Vec<Supplier>) -> RepositoryResult<usize> {
        self.check_health()?;
        let count = suppliers.len();
        let mut data = self.data.write().unwrap();
        data.suppliers = suppliers;
        Ok(count)
    }

    async fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>> {
        self.check_health()?;
        Ok(self.data.read().unwrap().suppliers.clone())
    }

    async fn store_parts(&self, parts: Vec<Part>) -> RepositoryResult<usize> {
        self.check_health()?;
        let count = parts.len();
        let mut data = self.data.write().unwrap();
        data.parts = parts;
        Ok(count)
    }

    async fn list_parts(&self) -> RepositoryResult<Vec<Part>> {
        self.check_health()?;
        Ok(self.data.read().unwrap().parts.clone())
    }

    async fn store_supplier_parts(&self, links: Vec<SupplierPart>) -> RepositoryResult<usize> {
        self.check_health()?;
        let count = links.len();
        let mut data = self.data.write().unwrap();
        data.supplier_parts = links;
        Ok(count)
    }

    async fn fetch_offers_for_part(
        &self,
        part_number: &str,
    ) -> RepositoryResult<Vec<SupplierOffer>> {
        self.check_health()?;
        let data = self.data.read().unwrap();

        // Inner join against the supplier table; links with an unknown
        // supplier id are dropped, matching relational join semantics.
        let offers = data
            .supplier_parts
            .iter()
            .filter(|link| link.part_number == part_number)
            .filter_map(|link| {
                data.suppliers
                    .iter()
                    .find(|s| s.supplier_id == link.supplier_id)
                    .map(|supplier| SupplierOffer {
                        supplier_id: supplier.supplier_id.clone(),
                        supplier_name: supplier.name.clone(),
                        location: supplier.location.clone(),
                        part_number: link.part_number.clone(),
                        unit_price: link.unit_price,
                        delivery_days: link.delivery_days,
                        rating: supplier.rating,
                        reliability: supplier.reliability_score,
                    })
            })
            .collect();

        Ok(offers)
    }

    async fn store_aircraft(&self, aircraft: Vec<Aircraft>) -> RepositoryResult<usize> {
        self.check_health()?;
        let count = aircraft.len();
        let mut data = self.data.write().unwrap();
        data.aircraft = aircraft;
        Ok(count)
    }

    async fn list_aircraft(&self) -> RepositoryResult<Vec<Aircraft>> {
        self.check_health()?;
        Ok(self.data.read().unwrap().aircraft.clone())
    }

    async fn store_components(
        &self,
        components: Vec<EngineComponent>,
    ) -> RepositoryResult<usize> {
        self.check_health()?;
        let count = components.len();
        let mut data = self.data.write().unwrap();
        data.components = components;
        Ok(count)
    }

    async fn list_components(&self) -> RepositoryResult<Vec<EngineComponent>> {
        self.check_health()?;
        Ok(self.data.read().unwrap().components.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MaintenanceType, SENSOR_CHANNELS};
    use chrono::NaiveDate;

    fn reading(unit_id: u32, cycle: u32) -> SensorReading {
        SensorReading {
            unit_id,
            cycle,
            degradation_factor: 0.5,
            settings: [0.0, 0.0, 100.0],
            sensors: [0.0; SENSOR_CHANNELS],
            rul: 10,
        }
    }

    fn event(is_predictive: bool) -> MaintenanceEvent {
        MaintenanceEvent {
            aircraft_id: "A320-001".to_string(),
            component_id: "A320-001-E1-TURB".to_string(),
            maintenance_type: if is_predictive {
                MaintenanceType::Predictive
            } else {
                MaintenanceType::Reactive
            },
            date_performed: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            labor_cost: 2300.0,
            parts_cost: 4200.0,
            total_cost: 6500.0,
            downtime_hours: 6,
            is_predictive,
        }
    }

    #[tokio::test]
    async fn test_store_readings_replaces_and_sorts() {
        let repo = LocalRepository::new();

        repo.store_readings(vec![reading(2, 1), reading(1, 2), reading(1, 1)])
            .await
            .unwrap();
        let all = repo.fetch_all_readings().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!((all[0].unit_id, all[0].cycle), (1, 1));
        assert_eq!((all[2].unit_id, all[2].cycle), (2, 1));

        // A second store replaces, not appends
        repo.store_readings(vec![reading(5, 1)]).await.unwrap();
        assert_eq!(repo.reading_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fetch_readings_for_missing_unit() {
        let repo = LocalRepository::new();
        repo.store_readings(vec![reading(1, 1)]).await.unwrap();

        let result = repo.fetch_readings_for_unit(9).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_maintenance_history_appends() {
        let repo = LocalRepository::new();
        repo.store_maintenance_events(vec![event(true)]).await.unwrap();
        repo.store_maintenance_events(vec![event(false)]).await.unwrap();

        let history = repo.fetch_maintenance_events().await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].is_predictive);
        assert!(!history[1].is_predictive);
    }

    #[tokio::test]
    async fn test_analytics_upsert_replaces_wholesale() {
        let repo = LocalRepository::new();

        let mut row = CostAnalytics::empty("2024-Q4");
        row.total_maintenance_events = 5;
        repo.upsert_cost_analytics(row).await.unwrap();

        let mut replacement = CostAnalytics::empty("2024-Q4");
        replacement.total_maintenance_events = 15;
        repo.upsert_cost_analytics(replacement.clone()).await.unwrap();

        let fetched = repo.get_cost_analytics("2024-Q4").await.unwrap();
        assert_eq!(fetched, replacement);
        assert_eq!(repo.list_cost_analytics().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_analytics_not_found() {
        let repo = LocalRepository::new();
        let result = repo.get_cost_analytics("1999-Q1").await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_offer_join_skips_unknown_suppliers() {
        let repo = LocalRepository::new();
        repo.store_suppliers(vec![Supplier {
            supplier_id: "SUP-001".to_string(),
            name: "GE Aviation Parts".to_string(),
            location: "Cincinnati, OH".to_string(),
            rating: 4.8,
            avg_delivery_days: 5,
            reliability_score: 0.98,
        }])
        .await
        .unwrap();
        repo.store_supplier_parts(vec![
            SupplierPart {
                supplier_id: "SUP-001".to_string(),
                part_number: "HPT-8472-A".to_string(),
                unit_price: 4200.0,
                min_quantity: 1,
                delivery_days: 5,
            },
            SupplierPart {
                supplier_id: "SUP-MISSING".to_string(),
                part_number: "HPT-8472-A".to_string(),
                unit_price: 1.0,
                min_quantity: 1,
                delivery_days: 1,
            },
        ])
        .await
        .unwrap();

        let offers = repo.fetch_offers_for_part("HPT-8472-A").await.unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].supplier_name, "GE Aviation Parts");
        assert_eq!(offers[0].rating, 4.8);
    }

    #[tokio::test]
    async fn test_unhealthy_repository_rejects_operations() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        let result = repo.fetch_all_readings().await;
        assert!(matches!(result, Err(RepositoryError::ConnectionError { .. })));
    }

    #[tokio::test]
    async fn test_clear_resets_tables_but_not_health() {
        let repo = LocalRepository::new();
        repo.store_readings(vec![reading(1, 1)]).await.unwrap();
        repo.clear();

        assert_eq!(repo.reading_count().await.unwrap(), 0);
        assert!(repo.health_check().await.unwrap());
    }
}
