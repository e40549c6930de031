//! HTTP exposure for the catalog
//!
//! Thin axum layer over the core: each listing request is one page mount
//! (one fetch, one pipeline run). All filtering and sorting stays in the
//! core query engine.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::CatalogServer;
pub use handlers::{AppState, Facets};
