//! In-memory vehicle source for testing and development

use crate::core::source::VehicleSource;
use crate::core::vehicle::VehicleRecord;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory vehicle source
///
/// Keeps records in insertion order so listings built from it are
/// reproducible. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryVehicleSource {
    vehicles: Arc<RwLock<Vec<VehicleRecord>>>,
}

impl InMemoryVehicleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(vehicles: Vec<VehicleRecord>) -> Self {
        Self {
            vehicles: Arc::new(RwLock::new(vehicles)),
        }
    }

    pub fn insert(&self, vehicle: VehicleRecord) -> Result<()> {
        let mut vehicles = self
            .vehicles
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        vehicles.push(vehicle);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vehicles.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VehicleSource for InMemoryVehicleSource {
    async fn get_all(&self) -> Result<Vec<VehicleRecord>> {
        let vehicles = self
            .vehicles
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(vehicles.clone())
    }
}
