//! Configuration loading and management

use crate::core::criteria::SortKey;
use crate::core::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_LOCATION_LABEL: &str = "Ho Chi Minh City";

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,

    #[validate(range(min = 1))]
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Listing page defaults
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ListingConfig {
    /// Order used when a request carries no sort key
    pub default_sort: SortKey,

    /// Static pickup location shown on every card
    #[validate(length(min = 1))]
    pub location_label: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Popular,
            location_label: DEFAULT_LOCATION_LABEL.to_string(),
        }
    }
}

/// Placeholder generation for presentation-only fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AugmentationConfig {
    pub seed: u64,

    pub min_trips: u32,

    pub max_trips: u32,

    #[validate(range(min = 0.0, max = 1.0))]
    pub discount_probability: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub delivery_probability: f64,
}

impl Default for AugmentationConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            min_trips: 10,
            max_trips: 200,
            discount_probability: 0.3,
            delivery_probability: 0.5,
        }
    }
}

/// Complete catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CatalogConfig {
    #[validate(nested)]
    pub server: ServerConfig,

    #[validate(nested)]
    pub listing: ListingConfig,

    #[validate(nested)]
    pub augmentation: AugmentationConfig,
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.check()?;
        Ok(config)
    }

    /// Field rules plus the cross-field trip range check
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|e| ConfigError::InvalidValue {
            field: e
                .errors()
                .keys()
                .next()
                .map(|k| k.to_string())
                .unwrap_or_default(),
            value: String::new(),
            message: e.to_string(),
        })?;

        if self.augmentation.min_trips > self.augmentation.max_trips {
            return Err(ConfigError::InvalidValue {
                field: "augmentation.min_trips".to_string(),
                value: self.augmentation.min_trips.to_string(),
                message: format!(
                    "must not exceed augmentation.max_trips ({})",
                    self.augmentation.max_trips
                ),
            });
        }

        Ok(())
    }
}
