//! # Rental Catalog
//!
//! Query pipeline and listing state for a vehicle-rental storefront.
//!
//! ## Features
//!
//! - **Criteria Model**: five independent filter/sort dimensions held as one immutable value
//! - **Status Gate**: non-available vehicles never reach a public listing
//! - **Predicate Filters**: text search, brand, category and half-open price buckets
//! - **Stable Sorting**: popular, price-low, price-high, newest, name
//! - **Reproducible Augmentation**: seeded, injectable presentation fields
//! - **Hero Quick-Search**: date-floored hand-off to the listing page
//! - **HTTP Exposure**: axum routes for listing, facets and hero search
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! let records = vec![
//!     VehicleRecord::new("Model 3", "Tesla", 900.0),
//!     VehicleRecord::new("VF8", "VinFast", 1500.0),
//! ];
//!
//! let criteria = Criteria::default()
//!     .with_brand(FacetFilter::only("Tesla"))
//!     .with_sort_key(SortKey::PriceLow);
//!
//! let outcome = QueryEngine::default().run(&records, &criteria);
//! assert_eq!(outcome.count, 1);
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        augment::{Augmenter, LookupAugmenter, SeededAugmenter},
        criteria::{ALL, Criteria, CriteriaModel, FacetFilter, PriceRange, SortKey},
        engine::{QueryEngine, QueryOutcome},
        error::{CatalogError, ConfigError, CriteriaError, FetchError},
        hero::{HeroQuery, HeroSearch},
        listing::{ListingPage, ListingView, LoadState, ViewStatus},
        query::ListingQuery,
        source::VehicleSource,
        vehicle::{Category, DisplayExtras, DisplayVehicle, VehicleRecord, VehicleStatus},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryVehicleSource, JsonVehicleSource};

    // === Config ===
    pub use crate::config::{AugmentationConfig, CatalogConfig, ListingConfig, ServerConfig};

    // === Server ===
    pub use crate::server::CatalogServer;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use uuid::Uuid;
}
