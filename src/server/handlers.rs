//! HTTP handlers for the listing, facet and hero-search routes

use crate::core::augment::SeededAugmenter;
use crate::core::criteria::{Criteria, SortKey};
use crate::core::engine::QueryEngine;
use crate::core::error::{CatalogError, FetchError};
use crate::core::hero::{HeroQuery, HeroSearch};
use crate::core::listing::{ListingPage, ViewStatus};
use crate::core::query::ListingQuery;
use crate::core::source::VehicleSource;
use crate::core::{filter, sort};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Source of "today" for hero date floors
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Shared state for all catalog handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn VehicleSource>,
    pub engine: Arc<QueryEngine<SeededAugmenter>>,
    pub default_sort: SortKey,
    pub clock: Clock,
}

/// Distinct filter options among listed vehicles
#[derive(Debug, Serialize)]
pub struct Facets {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
}

/// GET /vehicles: one listing page mount
///
/// A failed fetch still renders: the body is an empty listing with a retry
/// prompt, served as 503 so clients can tell it apart from "no matches".
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Response, CatalogError> {
    let criteria = query.into_criteria(state.default_sort)?;
    let page = ListingPage::mount(state.source.as_ref(), criteria).await;
    let view = page.view(state.engine.as_ref());

    let status = match view.status {
        ViewStatus::FetchFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };
    Ok((status, Json(view)).into_response())
}

/// GET /vehicles/facets
pub async fn list_facets(State(state): State<AppState>) -> Result<Json<Facets>, CatalogError> {
    let records = state
        .source
        .get_all()
        .await
        .map_err(FetchError::from)?;

    let listed = filter::apply(&records, &Criteria::default());
    let brands = distinct(listed.iter().filter_map(|r| r.brand.as_deref()));
    let categories = distinct(listed.iter().filter_map(|r| r.category_name()));

    Ok(Json(Facets { brands, categories }))
}

/// GET /search: hero hand-off to the listing page
pub async fn hero_search(
    State(state): State<AppState>,
    Query(query): Query<HeroQuery>,
) -> Result<Redirect, CatalogError> {
    let today = (state.clock)();
    let search = HeroSearch::from_query(&query, today)?;
    let target = search.listing_url();

    tracing::debug!(target = %target, "Hero search hand-off");
    Ok(Redirect::to(&target))
}

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "rental-catalog"
    }))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort_by(|a, b| sort::collate(a, b));
    out.dedup();
    out
}
