//! Core module containing the catalog data model and query pipeline

pub mod augment;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod filter;
pub mod hero;
pub mod listing;
pub mod query;
pub mod sort;
pub mod source;
pub mod vehicle;

pub use augment::{Augmenter, LookupAugmenter, SeededAugmenter};
pub use criteria::{Criteria, CriteriaModel, FacetFilter, PriceRange, SortKey};
pub use engine::{QueryEngine, QueryOutcome};
pub use error::{CatalogError, ConfigError, CriteriaError, FetchError};
pub use hero::{HeroQuery, HeroSearch};
pub use listing::{ListingPage, ListingView, LoadState, ViewStatus};
pub use query::ListingQuery;
pub use source::VehicleSource;
pub use vehicle::{Category, DisplayExtras, DisplayVehicle, VehicleRecord, VehicleStatus};
