//! Hero quick-search
//!
//! Collects a pickup location and a rental window and hands off to the
//! listing page as a query string. It performs no filtering itself.

use crate::core::error::CriteriaError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Path of the listing page the hero search navigates to
pub const LISTING_PATH: &str = "/vehicles";

/// Raw hero form input as it arrives in a query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroQuery {
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSearch {
    location: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl HeroSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn min_start_date(today: NaiveDate) -> NaiveDate {
        today
    }

    /// Later of the chosen start date and today
    pub fn min_end_date(&self, today: NaiveDate) -> NaiveDate {
        self.start_date.map_or(today, |start| start.max(today))
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        let location: String = location.into();
        self.location = location.trim().to_string();
    }

    /// Set the start date, clamped to today
    ///
    /// An end date that would fall before the new start is pulled up to it.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>, today: NaiveDate) {
        self.start_date = date.map(|d| d.max(Self::min_start_date(today)));
        if let Some(end) = self.end_date {
            self.end_date = Some(end.max(self.min_end_date(today)));
        }
    }

    /// Set the end date, clamped to [`HeroSearch::min_end_date`]
    pub fn set_end_date(&mut self, date: Option<NaiveDate>, today: NaiveDate) {
        let floor = self.min_end_date(today);
        self.end_date = date.map(|d| d.max(floor));
    }

    /// Build from raw input, rejecting dates before their floor
    pub fn from_query(query: &HeroQuery, today: NaiveDate) -> Result<Self, CriteriaError> {
        let start_date = parse_date("startDate", &query.start_date)?;
        let end_date = parse_date("endDate", &query.end_date)?;

        let search = Self {
            location: query.location.trim().to_string(),
            start_date,
            end_date,
        };

        if let Some(start) = search.start_date {
            let floor = Self::min_start_date(today);
            if start < floor {
                return Err(CriteriaError::DateBeforeFloor {
                    field: "startDate".to_string(),
                    value: start,
                    floor,
                });
            }
        }
        if let Some(end) = search.end_date {
            let floor = search.min_end_date(today);
            if end < floor {
                return Err(CriteriaError::DateBeforeFloor {
                    field: "endDate".to_string(),
                    value: end,
                    floor,
                });
            }
        }

        Ok(search)
    }

    /// `location`, `startDate`, `endDate`, each only when non-empty
    pub fn to_query_string(&self) -> String {
        let start = self.start_date.map(|d| d.format("%Y-%m-%d").to_string());
        let end = self.end_date.map(|d| d.format("%Y-%m-%d").to_string());

        [
            ("location", Some(self.location.as_str())),
            ("startDate", start.as_deref()),
            ("endDate", end.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some(format!("{}={}", key, urlencoding::encode(v))),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("&")
    }

    /// Navigation target on the listing page
    pub fn listing_url(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            LISTING_PATH.to_string()
        } else {
            format!("{}?{}", LISTING_PATH, query)
        }
    }
}

fn parse_date(field: &str, raw: &str) -> Result<Option<NaiveDate>, CriteriaError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| CriteriaError::InvalidDate {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
