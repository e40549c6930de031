//! Route table for the catalog exposure

use super::handlers::{AppState, health_check, hero_search, list_facets, list_vehicles};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the catalog routes
///
/// - GET /vehicles - Listing filtered and sorted by query criteria
/// - GET /vehicles/facets - Brand and category options
/// - GET /search - Hero quick-search, redirects to /vehicles
/// - GET /health, GET /healthz - Liveness
pub fn build_catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/facets", get(list_facets))
        .route("/search", get(hero_search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
