//! Repository trait definitions for storage operations.
//!
//! This module provides a collection of focused repository traits that
//! abstract the tabular store. By splitting responsibilities across multiple
//! traits, implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`SensorDataRepository`]: the labeled sensor reading table
//! - [`MaintenanceRepository`]: maintenance history and cost analytics rows
//! - [`SupplyChainRepository`]: suppliers, parts, offers, and the fleet
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
//!     repo.store_readings(readings).await?;
//!     repo.upsert_cost_analytics(row).await?;
//!     Ok(())
//! }
//! ```

pub mod error;

use async_trait::async_trait;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::{
    Aircraft, CostAnalytics, EngineComponent, MaintenanceEvent, Part, SensorReading, Supplier,
    SupplierOffer, SupplierPart,
};

/// Repository trait for the labeled sensor reading table.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SensorDataRepository: Send + Sync {
    /// Check if the storage backend is healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a freshly generated reading table, replacing any previous
    /// dataset. Returns the number of rows stored.
    async fn store_readings(&self, readings: Vec<SensorReading>) -> RepositoryResult<usize>;

    /// Fetch one unit's series, ordered by cycle.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the unit has no readings
    async fn fetch_readings_for_unit(&self, unit_id: u32)
        -> RepositoryResult<Vec<SensorReading>>;

    /// Fetch the full reading table, ordered by `(unit_id, cycle)`.
    async fn fetch_all_readings(&self) -> RepositoryResult<Vec<SensorReading>>;

    /// Number of stored readings.
    async fn reading_count(&self) -> RepositoryResult<usize>;
}

/// Repository trait for maintenance history and derived analytics.
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    /// Append maintenance events to the history. Returns the number stored.
    async fn store_maintenance_events(
        &self,
        events: Vec<MaintenanceEvent>,
    ) -> RepositoryResult<usize>;

    /// Fetch the complete maintenance history in insertion order.
    async fn fetch_maintenance_events(&self) -> RepositoryResult<Vec<MaintenanceEvent>>;

    /// Store an analytics row, replacing any existing row for the same
    /// period wholesale.
    async fn upsert_cost_analytics(&self, analytics: CostAnalytics) -> RepositoryResult<()>;

    /// Fetch the analytics row for a period.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the period has no row
    async fn get_cost_analytics(&self, period: &str) -> RepositoryResult<CostAnalytics>;

    /// List all analytics rows, ordered by period label.
    async fn list_cost_analytics(&self) -> RepositoryResult<Vec<CostAnalytics>>;
}

/// Repository trait for supply-chain and fleet data.
#[async_trait]
pub trait SupplyChainRepository: Send + Sync {
    /// Replace the supplier table. Returns the number stored.
    async fn store_suppliers(&self, suppliers: Vec<Supplier>) -> RepositoryResult<usize>;

    /// List suppliers in stored order.
    async fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;

    /// Replace the parts catalog. Returns the number stored.
    async fn store_parts(&self, parts: Vec<Part>) -> RepositoryResult<usize>;

    /// List catalog parts in stored order.
    async fn list_parts(&self) -> RepositoryResult<Vec<Part>>;

    /// Replace the supplier×part link table. Returns the number stored.
    async fn store_supplier_parts(&self, links: Vec<SupplierPart>) -> RepositoryResult<usize>;

    /// Fetch all offers for a part, joined with supplier identity, in stored
    /// link order. An empty result is valid: absence of supplier data is an
    /// expected business condition.
    async fn fetch_offers_for_part(
        &self,
        part_number: &str,
    ) -> RepositoryResult<Vec<SupplierOffer>>;

    /// Replace the aircraft fleet table. Returns the number stored.
    async fn store_aircraft(&self, aircraft: Vec<Aircraft>) -> RepositoryResult<usize>;

    /// List fleet aircraft in stored order.
    async fn list_aircraft(&self) -> RepositoryResult<Vec<Aircraft>>;

    /// Replace the engine component table. Returns the number stored.
    async fn store_components(&self, components: Vec<EngineComponent>)
        -> RepositoryResult<usize>;

    /// List engine components in stored order.
    async fn list_components(&self) -> RepositoryResult<Vec<EngineComponent>>;
}

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements all three
/// repository traits. Use this as a convenient bound when a service needs
/// access to every table.
pub trait FullRepository:
    SensorDataRepository + MaintenanceRepository + SupplyChainRepository
{
}

impl<T> FullRepository for T where
    T: SensorDataRepository + MaintenanceRepository + SupplyChainRepository
{
}
