//! Display augmentation stage
//!
//! Runs after filtering and sorting and only ever adds presentation
//! fields. Implementations must be deterministic for a given record so
//! repeated renders and snapshot tests see identical output.

use crate::config::AugmentationConfig;
use crate::core::vehicle::{DisplayExtras, VehicleRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use uuid::Uuid;

/// Produces the presentation-only fields for one record
pub trait Augmenter: Send + Sync {
    fn augment(&self, record: &VehicleRecord) -> DisplayExtras;
}

impl<F> Augmenter for F
where
    F: Fn(&VehicleRecord) -> DisplayExtras + Send + Sync,
{
    fn augment(&self, record: &VehicleRecord) -> DisplayExtras {
        self(record)
    }
}

/// Placeholder extras drawn from a per-vehicle seeded generator
///
/// The generator is seeded from the configured seed and the vehicle id,
/// so a vehicle gets the same extras wherever it lands in the list.
#[derive(Debug, Clone)]
pub struct SeededAugmenter {
    seed: u64,
    location_label: String,
    min_trips: u32,
    max_trips: u32,
    discount_probability: f64,
    delivery_probability: f64,
}

impl SeededAugmenter {
    pub fn new(config: &AugmentationConfig, location_label: impl Into<String>) -> Self {
        Self {
            seed: config.seed,
            location_label: location_label.into(),
            min_trips: config.min_trips,
            max_trips: config.max_trips.max(config.min_trips),
            discount_probability: config.discount_probability.clamp(0.0, 1.0),
            delivery_probability: config.delivery_probability.clamp(0.0, 1.0),
        }
    }

    fn rng_for(&self, id: &Uuid) -> StdRng {
        let bits = id.as_u128();
        let folded = (bits as u64) ^ ((bits >> 64) as u64).rotate_left(32);
        StdRng::seed_from_u64(self.seed ^ folded)
    }
}

impl Default for SeededAugmenter {
    fn default() -> Self {
        Self::new(&AugmentationConfig::default(), crate::config::DEFAULT_LOCATION_LABEL)
    }
}

impl Augmenter for SeededAugmenter {
    fn augment(&self, record: &VehicleRecord) -> DisplayExtras {
        let mut rng = self.rng_for(&record.id);
        let placeholder_trips = rng.random_range(self.min_trips..=self.max_trips);
        let discount = rng.random_bool(self.discount_probability);
        let delivery = rng.random_bool(self.delivery_probability);

        DisplayExtras {
            trip_count: match record.trips {
                Some(trips) if trips > 0 => trips,
                _ => placeholder_trips,
            },
            location: self.location_label.clone(),
            discount,
            delivery,
        }
    }
}

/// Pre-computed extras keyed by vehicle id
#[derive(Debug, Clone)]
pub struct LookupAugmenter {
    entries: HashMap<Uuid, DisplayExtras>,
    fallback: DisplayExtras,
}

impl LookupAugmenter {
    pub fn new(fallback: DisplayExtras) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    pub fn with_entry(mut self, id: Uuid, extras: DisplayExtras) -> Self {
        self.entries.insert(id, extras);
        self
    }
}

impl Augmenter for LookupAugmenter {
    fn augment(&self, record: &VehicleRecord) -> DisplayExtras {
        self.entries
            .get(&record.id)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
