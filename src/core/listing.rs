//! Listing page state
//!
//! Owns the fetched collection and the criteria model for one page
//! mount. The collection is fetched once and treated as immutable; every
//! view is re-derived from scratch through the query engine.

use crate::core::augment::Augmenter;
use crate::core::criteria::{Criteria, CriteriaModel};
use crate::core::engine::{QueryEngine, QueryOutcome};
use crate::core::error::FetchError;
use crate::core::source::VehicleSource;
use crate::core::vehicle::{DisplayVehicle, VehicleRecord};
use serde::Serialize;

/// Fetch lifecycle of the raw collection
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<VehicleRecord>),
    Failed(FetchError),
}

/// What the renderer should show around the rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewStatus {
    Loading,
    Ready,
    Empty,
    FetchFailed { message: String, retry: bool },
}

/// One rendered listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub vehicles: Vec<DisplayVehicle>,
    pub count: usize,
    pub has_active_filters: bool,
    pub criteria: Criteria,
    pub status: ViewStatus,
}

pub struct ListingPage {
    state: LoadState,
    criteria: CriteriaModel,
}

impl ListingPage {
    /// A page whose fetch has not completed yet
    pub fn new(initial: Criteria) -> Self {
        Self {
            state: LoadState::Loading,
            criteria: CriteriaModel::new(initial),
        }
    }

    /// Mount the page and perform its single fetch
    pub async fn mount(source: &dyn VehicleSource, initial: Criteria) -> Self {
        let mut page = Self::new(initial);
        page.load(source).await;
        page
    }

    /// Fetch the collection, replacing any previous load state
    pub async fn load(&mut self, source: &dyn VehicleSource) {
        self.state = LoadState::Loading;
        self.state = match source.get_all().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Vehicle collection loaded");
                LoadState::Ready(records)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Vehicle fetch failed");
                LoadState::Failed(FetchError::from(e))
            }
        };
    }

    /// Re-fetch after a failed load, keeping the current criteria
    ///
    /// A page that already holds a collection is left untouched.
    pub async fn retry(&mut self, source: &dyn VehicleSource) {
        if matches!(self.state, LoadState::Ready(_)) {
            return;
        }
        self.load(source).await;
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn criteria(&self) -> &CriteriaModel {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut CriteriaModel {
        &mut self.criteria
    }

    /// Raw records; empty unless the fetch succeeded
    pub fn records(&self) -> &[VehicleRecord] {
        match &self.state {
            LoadState::Ready(records) => records,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    pub fn run<A: Augmenter>(&self, engine: &QueryEngine<A>) -> QueryOutcome {
        engine.run(self.records(), self.criteria.criteria())
    }

    pub fn view<A: Augmenter>(&self, engine: &QueryEngine<A>) -> ListingView {
        let outcome = self.run(engine);
        let status = match &self.state {
            LoadState::Loading => ViewStatus::Loading,
            LoadState::Failed(FetchError::Unavailable { message }) => ViewStatus::FetchFailed {
                message: message.clone(),
                retry: true,
            },
            LoadState::Ready(_) if outcome.is_empty() => ViewStatus::Empty,
            LoadState::Ready(_) => ViewStatus::Ready,
        };

        ListingView {
            vehicles: outcome.vehicles,
            count: outcome.count,
            has_active_filters: self.criteria.has_active_filters(),
            criteria: self.criteria.criteria().clone(),
            status,
        }
    }
}
