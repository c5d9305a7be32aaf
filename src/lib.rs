//! Business core for a partner product ordering tool.
//!
//! Partners browse a product catalog, compose an order draft of
//! deduplicated line items, and commit it as a single atomic unit (header
//! plus line rows). A secondary calculator estimates how much raw material
//! is needed to cover a production shortfall for a chosen product, and a
//! synthetic availability heuristic derives a per-partner quantity from the
//! partner's rating.
//!
//! The crate is an in-process library: it exposes no network surface and is
//! meant to be consumed by a presentation layer, which is also responsible
//! for turning [`ServiceError`] kinds into user-facing messages.
//!
//! Layout:
//! - [`services::material_calc`] / [`services::availability`] — pure
//!   calculation, no external state.
//! - [`services::order_draft`] — in-memory order composition.
//! - [`services::orders`] — transactional order persistence.
//! - [`services::catalog`] — read-only partner/product lookups.
//! - [`entities`] — sea-orm models, [`migrator`] — schema.

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod logging;
pub mod migrator;
pub mod services;

pub use config::{load_config, AppConfig};
pub use errors::ServiceError;
pub use services::{
    estimate_available_quantity, required_material, AddItemInput, CatalogService, DraftItem,
    MaterialRequest, OrderDraft, OrderService, OrderWithItems,
};
