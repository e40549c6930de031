//! Query engine: status gate → predicates → sort → augmentation

use crate::core::augment::{Augmenter, SeededAugmenter};
use crate::core::criteria::Criteria;
use crate::core::vehicle::{DisplayVehicle, VehicleRecord};
use crate::core::{filter, sort};
use serde::Serialize;

/// Ordered listing rows plus their count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome {
    pub vehicles: Vec<DisplayVehicle>,
    pub count: usize,
}

impl QueryOutcome {
    fn new(vehicles: Vec<DisplayVehicle>) -> Self {
        let count = vehicles.len();
        Self { vehicles, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Pure function from (collection, criteria) to the rendered list
///
/// The engine borrows the raw collection for the duration of a run and
/// returns freshly built rows; nothing is carried between runs.
pub struct QueryEngine<A = SeededAugmenter> {
    augmenter: A,
}

impl<A: Augmenter> QueryEngine<A> {
    pub fn new(augmenter: A) -> Self {
        Self { augmenter }
    }

    pub fn augmenter(&self) -> &A {
        &self.augmenter
    }

    pub fn run(&self, records: &[VehicleRecord], criteria: &Criteria) -> QueryOutcome {
        let mut selected = filter::apply(records, criteria);
        let filtered = selected.len();

        sort::apply(&mut selected, criteria.sort_key);

        let vehicles: Vec<DisplayVehicle> = selected
            .into_iter()
            .map(|record| DisplayVehicle {
                display: self.augmenter.augment(record),
                record: record.clone(),
            })
            .collect();

        tracing::debug!(
            total = records.len(),
            filtered,
            sort_key = %criteria.sort_key,
            active_filters = criteria.has_active_filters(),
            "Vehicle query evaluated"
        );

        QueryOutcome::new(vehicles)
    }
}

impl Default for QueryEngine<SeededAugmenter> {
    fn default() -> Self {
        Self::new(SeededAugmenter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::{FacetFilter, PriceRange, SortKey};
    use crate::core::vehicle::{DisplayExtras, VehicleStatus};

    fn fixed_extras(_: &VehicleRecord) -> DisplayExtras {
        DisplayExtras {
            trip_count: 1,
            location: "Test".to_string(),
            discount: false,
            delivery: false,
        }
    }

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            VehicleRecord::new("Model 3", "Tesla", 900.0),
            VehicleRecord::new("VF8", "VinFast", 1500.0),
            VehicleRecord::new("ID.4", "Tesla", 1200.0).with_status(VehicleStatus::Maintenance),
        ]
    }

    #[test]
    fn test_count_matches_rows() {
        let engine = QueryEngine::new(fixed_extras);
        let outcome = engine.run(&fleet(), &Criteria::default());
        assert_eq!(outcome.count, outcome.vehicles.len());
        assert_eq!(outcome.count, 2);
    }

    #[test]
    fn test_brand_with_status_gate() {
        let engine = QueryEngine::new(fixed_extras);
        let criteria = Criteria::default()
            .with_brand(FacetFilter::only("Tesla"))
            .with_sort_key(SortKey::PriceLow);

        let outcome = engine.run(&fleet(), &criteria);
        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.vehicles[0].record.name_or_empty(), "Model 3");
    }

    #[test]
    fn test_bucket_and_price_high() {
        let engine = QueryEngine::new(fixed_extras);
        let criteria = Criteria::default()
            .with_price_range(PriceRange::From1000To2000)
            .with_sort_key(SortKey::PriceHigh);

        let outcome = engine.run(&fleet(), &criteria);
        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.vehicles[0].record.daily_rate, Some(1500.0));
    }

    #[test]
    fn test_empty_collection() {
        let engine = QueryEngine::default();
        let outcome = engine.run(&[], &Criteria::default());
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_augmentation_does_not_affect_order() {
        // Inverts popularity in the display field; order must still follow the record
        let inverted = |record: &VehicleRecord| DisplayExtras {
            trip_count: 1000 - record.popularity(),
            location: "x".to_string(),
            discount: false,
            delivery: false,
        };
        let engine = QueryEngine::new(inverted);
        let records = vec![
            VehicleRecord::new("Low", "x", 1.0).with_trips(1),
            VehicleRecord::new("High", "x", 1.0).with_trips(500),
        ];

        let outcome = engine.run(&records, &Criteria::default());
        assert_eq!(outcome.vehicles[0].record.name_or_empty(), "High");
        assert_eq!(outcome.vehicles[0].display.trip_count, 500);
    }
}
