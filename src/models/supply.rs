//! Supply chain rows: suppliers, parts, and the offer matrix linking them.

use serde::{Deserialize, Serialize};

/// A parts supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: String,
    pub name: String,
    pub location: String,
    /// Quality rating on a 0–5 scale.
    pub rating: f64,
    pub avg_delivery_days: i64,
    /// On-time delivery fraction, 0–1.
    pub reliability_score: f64,
}

/// A catalog part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub part_number: String,
    pub part_name: String,
    pub category: String,
    pub standard_price: f64,
    /// Emergency procurement price.
    pub rush_price: f64,
    pub lead_time_days: i64,
    pub stock_quantity: i64,
}

/// One supplier's terms for one part (stored many-to-many link).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierPart {
    pub supplier_id: String,
    pub part_number: String,
    pub unit_price: f64,
    pub min_quantity: i64,
    pub delivery_days: i64,
}

/// A supplier-part link joined with the supplier's identity, as consumed by
/// the ranker. Each offer is scored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOffer {
    pub supplier_id: String,
    pub supplier_name: String,
    pub location: String,
    pub part_number: String,
    pub unit_price: f64,
    pub delivery_days: i64,
    pub rating: f64,
    pub reliability: f64,
}

/// The winning offer for a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSupplier {
    pub supplier: String,
    pub location: String,
    pub rating: f64,
    pub price: f64,
    pub delivery_days: i64,
    pub reliability: f64,
}
