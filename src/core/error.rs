//! Typed error handling for the catalog
//!
//! - [`CriteriaError`]: a criteria or hero-search value outside its domain
//! - [`FetchError`]: the vehicle source could not deliver the collection
//! - [`ConfigError`]: configuration parsing and validation
//!
//! None of these is fatal. The listing page turns fetch failures into an
//! empty result with a retry prompt, and the HTTP exposure maps the rest
//! to 4xx/5xx responses through [`CatalogError::status_code`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// The main error type for the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Criteria(_) => StatusCode::BAD_REQUEST,
            CatalogError::Fetch(_) => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Criteria(e) => e.error_code(),
            CatalogError::Fetch(_) => "FETCH_FAILED",
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CatalogError::Criteria(CriteriaError::InvalidPriceRange { value }) => {
                Some(serde_json::json!({ "field": "priceRange", "value": value }))
            }
            CatalogError::Criteria(CriteriaError::InvalidSortKey { value }) => {
                Some(serde_json::json!({ "field": "sort", "value": value }))
            }
            CatalogError::Criteria(CriteriaError::DateBeforeFloor {
                field,
                value,
                floor,
            }) => Some(serde_json::json!({
                "field": field,
                "value": value.to_string(),
                "floor": floor.to_string()
            })),
            CatalogError::Fetch(_) => Some(serde_json::json!({ "retry": true })),
            _ => None,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Criteria Errors
// =============================================================================

/// A criteria value outside its declared domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("Unknown price range '{value}'")]
    InvalidPriceRange { value: String },

    #[error("Unknown sort key '{value}'")]
    InvalidSortKey { value: String },

    #[error("Invalid date '{value}' for '{field}'")]
    InvalidDate { field: String, value: String },

    #[error("'{field}' is {value}, earliest allowed is {floor}")]
    DateBeforeFloor {
        field: String,
        value: NaiveDate,
        floor: NaiveDate,
    },
}

impl CriteriaError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CriteriaError::InvalidPriceRange { .. } => "INVALID_PRICE_RANGE",
            CriteriaError::InvalidSortKey { .. } => "INVALID_SORT_KEY",
            CriteriaError::InvalidDate { .. } => "INVALID_DATE",
            CriteriaError::DateBeforeFloor { .. } => "DATE_BEFORE_FLOOR",
        }
    }
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// The vehicle source failed to deliver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Vehicle source unavailable: {message}")]
    Unavailable { message: String },
}

impl From<anyhow::Error> for FetchError {
    fn from(err: anyhow::Error) -> Self {
        FetchError::Unavailable {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_error_is_bad_request() {
        let err = CatalogError::from(CriteriaError::InvalidPriceRange {
            value: "9-99".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_PRICE_RANGE");
        assert_eq!(err.to_string(), "Unknown price range '9-99'");
    }

    #[test]
    fn test_fetch_error_response_offers_retry() {
        let err = CatalogError::from(FetchError::Unavailable {
            message: "timeout".to_string(),
        });
        let response = err.to_response();
        assert_eq!(response.code, "FETCH_FAILED");
        assert_eq!(response.details, Some(serde_json::json!({ "retry": true })));
    }

    #[test]
    fn test_config_parse_error_message() {
        let with_file = ConfigError::ParseError {
            file: Some("catalog.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            with_file.to_string(),
            "Failed to parse config file 'catalog.yaml': bad indent"
        );

        let without_file = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(without_file.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_date_floor_details() {
        let floor = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let value = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let err = CatalogError::from(CriteriaError::DateBeforeFloor {
            field: "endDate".to_string(),
            value,
            floor,
        });
        let details = err.to_response().details.unwrap();
        assert_eq!(details["floor"], "2026-10-16");
        assert_eq!(details["value"], "2026-10-01");
    }
}
