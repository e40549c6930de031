//! Vehicle source backed by a JSON document
//!
//! The document is a top-level array of vehicle objects. Entries that
//! cannot be read as a vehicle at all (no usable `id`, wrong shape) are
//! skipped with a warning rather than failing the whole fetch.

use crate::core::source::VehicleSource;
use crate::core::vehicle::VehicleRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

enum Origin {
    Inline(String),
    File(PathBuf),
}

pub struct JsonVehicleSource {
    origin: Origin,
}

impl JsonVehicleSource {
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline(json.into()),
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }

    /// Parse a JSON array, dropping entries that are not vehicles
    pub fn parse(json: &str) -> Result<Vec<VehicleRecord>> {
        let entries: Vec<Value> =
            serde_json::from_str(json).context("vehicle document is not a JSON array")?;

        let mut vehicles = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<VehicleRecord>(entry) {
                Ok(vehicle) => vehicles.push(vehicle),
                Err(e) => tracing::warn!(index, error = %e, "Skipping malformed vehicle entry"),
            }
        }
        Ok(vehicles)
    }
}

#[async_trait]
impl VehicleSource for JsonVehicleSource {
    async fn get_all(&self) -> Result<Vec<VehicleRecord>> {
        match &self.origin {
            Origin::Inline(json) => Self::parse(json),
            Origin::File(path) => {
                let json = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Self::parse(&json)
            }
        }
    }
}
