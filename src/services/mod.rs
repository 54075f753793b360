//! Service layer for the core analytics computations.
//!
//! Each module holds one pure computation kernel: dataset generation, event
//! synthesis, cost aggregation, and supplier ranking. None of them carries
//! state across calls or performs I/O; the seeded generator threads its
//! random source explicitly.

pub mod cost_analytics;
pub mod degradation;
pub mod maintenance;
pub mod supplier_rank;

pub use cost_analytics::compute_cost_analytics;
pub use degradation::{generate_readings, label_rul};
pub use maintenance::synthesize_events;
pub use supplier_rank::{find_best_supplier, score_offer};

/// Error type for data generation inputs.
///
/// Invalid parameters are rejected before any output is produced; there is no
/// partial-failure mode.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
