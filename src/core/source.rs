//! Fetch collaborator for the raw vehicle collection

use crate::core::vehicle::VehicleRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Delivers the full, already-deserialized vehicle collection
///
/// Transport, caching and retry policy belong to the implementation. The
/// query pipeline only ever sees the returned records.
#[async_trait]
pub trait VehicleSource: Send + Sync {
    async fn get_all(&self) -> Result<Vec<VehicleRecord>>;
}
