//! # AeroPredict Backend
//!
//! Predictive-maintenance analytics engine for an aircraft fleet.
//!
//! This crate seeds a synthetic turbofan sensor-degradation dataset in the
//! NASA C-MAPSS layout, labels every reading with its Remaining Useful Life
//! (RUL), synthesizes a predictive/reactive maintenance history, reduces that
//! history into cost-savings analytics, and ranks part suppliers. The backend
//! exposes a REST API via Axum for dashboard clients.
//!
//! ## Features
//!
//! - **Dataset Seeding**: Deterministic per-unit degradation series with
//!   derived RUL labels
//! - **Maintenance History**: Fixed-profile predictive and reactive event
//!   synthesis
//! - **Cost Analytics**: Counterfactual savings, downtime, and cancellation
//!   metrics per reporting period
//! - **Supply Chain**: Weighted supplier ranking over a supplier×part offer
//!   matrix
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`config`]: Immutable cost/generator/ranking configuration with TOML support
//! - [`models`]: Domain row types shared across layers
//! - [`services`]: Pure computation kernels (generation, synthesis, aggregation, ranking)
//! - [`db`]: Repository pattern and persistence abstractions
//! - [`catalog`]: Built-in supplier, parts, and fleet seed data
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod catalog;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
