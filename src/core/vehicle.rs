//! Vehicle records as delivered by the fetch collaborator, and the
//! display rows derived from them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Availability status of a vehicle
///
/// Values outside the known set deserialize to [`VehicleStatus::Unknown`]
/// and are treated like any other non-available status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
    Unavailable,
    #[default]
    #[serde(other)]
    Unknown,
}

impl VehicleStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, VehicleStatus::Available)
    }
}

/// Vehicle category as nested in the fetched record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
}

/// A vehicle as fetched from the catalog backend
///
/// Read-only to the query pipeline. Every field except `id` tolerates
/// being absent from the inbound payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: Uuid,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub category: Option<Category>,

    /// Daily rate in thousands ("K")
    ///
    /// Absent, negative and non-finite rates all read as `None`, which
    /// fails every price bucket except `ALL`.
    #[serde(default, deserialize_with = "non_negative_rate")]
    pub daily_rate: Option<f64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub status: VehicleStatus,

    #[serde(default)]
    pub rating: Option<f32>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Completed trips, used as the popularity signal
    #[serde(default)]
    pub trips: Option<u32>,
}

impl VehicleRecord {
    /// Create an available record with only the required fields set
    pub fn new(name: impl Into<String>, brand: impl Into<String>, daily_rate: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.into()),
            brand: Some(brand.into()),
            category: None,
            daily_rate: Some(daily_rate).filter(|r| r.is_finite() && *r >= 0.0),
            created_at: Some(Utc::now()),
            status: VehicleStatus::Available,
            rating: None,
            image_url: None,
            trips: None,
        }
    }

    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(Category {
            id: None,
            name: name.into(),
        });
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_trips(mut self, trips: u32) -> Self {
        self.trips = Some(trips);
        self
    }

    /// Name, or the empty string when missing
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Brand, or the empty string when missing
    pub fn brand_or_empty(&self) -> &str {
        self.brand.as_deref().unwrap_or("")
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Popularity signal; absent and zero are equivalent
    pub fn popularity(&self) -> u32 {
        self.trips.unwrap_or(0)
    }
}

fn non_negative_rate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let rate = Option::<f64>::deserialize(deserializer)?;
    Ok(rate.filter(|r| r.is_finite() && *r >= 0.0))
}

/// Presentation-only fields attached after filtering and sorting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayExtras {
    pub trip_count: u32,
    pub location: String,
    pub discount: bool,
    pub delivery: bool,
}

/// One row of the rendered listing
///
/// Built fresh on every pipeline run and owns its copy of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayVehicle {
    #[serde(flatten)]
    pub record: VehicleRecord,

    pub display: DisplayExtras,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal_record() {
        let id = Uuid::new_v4();
        let record: VehicleRecord = serde_json::from_value(json!({ "id": id })).unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.name_or_empty(), "");
        assert_eq!(record.brand_or_empty(), "");
        assert!(record.category.is_none());
        assert_eq!(record.daily_rate, None);
        assert_eq!(record.status, VehicleStatus::Unknown);
        assert_eq!(record.popularity(), 0);
    }

    #[test]
    fn test_deserialize_full_record() {
        let record: VehicleRecord = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "name": "VF8",
            "brand": "VinFast",
            "category": { "name": "SUV" },
            "dailyRate": 1500.0,
            "createdAt": "2024-05-01T10:00:00Z",
            "status": "AVAILABLE",
            "rating": 4.8,
            "imageUrl": "/img/vf8.png",
            "trips": 42
        }))
        .unwrap();

        assert_eq!(record.name.as_deref(), Some("VF8"));
        assert_eq!(record.category_name(), Some("SUV"));
        assert!(record.status.is_available());
        assert_eq!(record.trips, Some(42));
    }

    #[test]
    fn test_negative_rate_reads_as_missing() {
        let record: VehicleRecord = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "dailyRate": -250.0
        }))
        .unwrap();
        assert_eq!(record.daily_rate, None);

        assert_eq!(VehicleRecord::new("A", "B", -1.0).daily_rate, None);
        assert_eq!(VehicleRecord::new("A", "B", 0.0).daily_rate, Some(0.0));
    }

    #[test]
    fn test_unknown_status_is_not_available() {
        let status: VehicleStatus = serde_json::from_value(json!("DECOMMISSIONED")).unwrap();
        assert_eq!(status, VehicleStatus::Unknown);
        assert!(!status.is_available());
    }

    #[test]
    fn test_display_vehicle_flattens_record() {
        let vehicle = DisplayVehicle {
            record: VehicleRecord::new("Model 3", "Tesla", 900.0),
            display: DisplayExtras {
                trip_count: 12,
                location: "Ho Chi Minh City".to_string(),
                discount: false,
                delivery: true,
            },
        };

        let value = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(value["name"], "Model 3");
        assert_eq!(value["dailyRate"], 900.0);
        assert_eq!(value["display"]["tripCount"], 12);
    }
}
