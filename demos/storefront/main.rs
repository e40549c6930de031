//! Storefront demo
//!
//! Serves the catalog over HTTP from a JSON vehicle document.
//!
//! ```text
//! CATALOG_CONFIG=demos/storefront/catalog.yaml \
//! CATALOG_VEHICLES=demos/storefront/vehicles.json \
//! RUST_LOG=catalog=debug,tower_http=info \
//!     cargo run --example storefront
//! ```
//!
//! Then try:
//! - GET /vehicles?brand=Tesla&sort=price-low
//! - GET /vehicles?search=vf
//! - GET /vehicles?priceRange=1000-2000&sort=price-high
//! - GET /vehicles/facets
//! - GET /search?location=Hanoi&startDate=2030-01-10&endDate=2030-01-12

use catalog::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog=info")),
        )
        .init();

    let config = match std::env::var("CATALOG_CONFIG") {
        Ok(path) => CatalogConfig::from_yaml_file(&path)?,
        Err(_) => CatalogConfig::default(),
    };
    let vehicles = std::env::var("CATALOG_VEHICLES")
        .unwrap_or_else(|_| "demos/storefront/vehicles.json".to_string());

    tracing::info!(vehicles = %vehicles, "Starting storefront demo");

    CatalogServer::builder()
        .with_config(config)
        .with_source(JsonVehicleSource::from_file(vehicles))
        .serve()
        .await
}
