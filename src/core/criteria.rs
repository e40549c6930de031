//! Filter and sort criteria for the vehicle listing
//!
//! A [`Criteria`] is an immutable value. Changing any dimension produces a
//! new value, and [`CriteriaModel`] swaps the whole value in one step so a
//! pipeline run never observes a half-applied change.

use crate::core::error::CriteriaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel label meaning "no constraint" for facet and price filters
pub const ALL: &str = "ALL";

/// Brand or category selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetFilter {
    #[default]
    All,
    Only(String),
}

impl FacetFilter {
    pub fn only(value: impl Into<String>) -> Self {
        FacetFilter::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetFilter::All)
    }

    /// Exact, case-sensitive comparison against a stored value
    ///
    /// A missing value never matches a concrete selection.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

impl From<String> for FacetFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL {
            FacetFilter::All
        } else {
            FacetFilter::Only(value)
        }
    }
}

impl From<FacetFilter> for String {
    fn from(filter: FacetFilter) -> Self {
        match filter {
            FacetFilter::All => ALL.to_string(),
            FacetFilter::Only(value) => value,
        }
    }
}

/// Daily-rate bucket
///
/// Buckets are half-open: inclusive low bound, exclusive high bound. The
/// top bucket has no upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceRange {
    #[default]
    All,
    Under1000,
    From1000To2000,
    From2000To3000,
    From3000,
}

impl PriceRange {
    pub const BUCKETS: [PriceRange; 4] = [
        PriceRange::Under1000,
        PriceRange::From1000To2000,
        PriceRange::From2000To3000,
        PriceRange::From3000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => ALL,
            PriceRange::Under1000 => "0-1000",
            PriceRange::From1000To2000 => "1000-2000",
            PriceRange::From2000To3000 => "2000-3000",
            PriceRange::From3000 => "3000+",
        }
    }

    /// `(low, high)` bounds, `None` for the unconstrained range
    pub fn bounds(&self) -> Option<(f64, Option<f64>)> {
        match self {
            PriceRange::All => None,
            PriceRange::Under1000 => Some((0.0, Some(1000.0))),
            PriceRange::From1000To2000 => Some((1000.0, Some(2000.0))),
            PriceRange::From2000To3000 => Some((2000.0, Some(3000.0))),
            PriceRange::From3000 => Some((3000.0, None)),
        }
    }

    /// A missing rate only passes the unconstrained range
    pub fn contains(&self, daily_rate: Option<f64>) -> bool {
        match (self.bounds(), daily_rate) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some((low, Some(high))), Some(rate)) => rate >= low && rate < high,
            (Some((low, None)), Some(rate)) => rate >= low,
        }
    }
}

impl FromStr for PriceRange {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL {
            return Ok(PriceRange::All);
        }
        PriceRange::BUCKETS
            .into_iter()
            .find(|bucket| bucket.label() == s)
            .ok_or_else(|| CriteriaError::InvalidPriceRange {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for PriceRange {
    type Error = CriteriaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriceRange> for String {
    fn from(range: PriceRange) -> Self {
        range.label().to_string()
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Popular,
    PriceLow,
    PriceHigh,
    Newest,
    Name,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
            SortKey::Name => "name",
        }
    }

    /// Parse a sort key, falling back to name ordering for anything unknown
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(sort_key = %s, "Unknown sort key, falling back to name ordering");
            SortKey::Name
        })
    }
}

impl FromStr for SortKey {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortKey::Popular),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "newest" => Ok(SortKey::Newest),
            "name" => Ok(SortKey::Name),
            other => Err(CriteriaError::InvalidSortKey {
                value: other.to_string(),
            }),
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::parse_lenient(&value)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.label().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five user-controlled dimensions driving one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Criteria {
    pub search_term: String,
    pub brand: FacetFilter,
    pub category: FacetFilter,
    pub price_range: PriceRange,
    pub sort_key: SortKey,
}

impl Criteria {
    pub fn with_search_term(self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self
        }
    }

    pub fn with_brand(self, brand: FacetFilter) -> Self {
        Self { brand, ..self }
    }

    pub fn with_category(self, category: FacetFilter) -> Self {
        Self { category, ..self }
    }

    pub fn with_price_range(self, price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..self
        }
    }

    pub fn with_sort_key(self, sort_key: SortKey) -> Self {
        Self { sort_key, ..self }
    }

    /// True when any filter dimension is constrained
    ///
    /// The sort key is not a filter and never counts.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || !self.brand.is_all()
            || !self.category.is_all()
            || self.price_range != PriceRange::All
    }
}

/// Holder of the current criteria for one listing
///
/// Each mutation replaces the whole value and bumps `revision` once,
/// which is what a renderer keys its re-render on.
#[derive(Debug, Clone, Default)]
pub struct CriteriaModel {
    current: Criteria,
    revision: u64,
}

impl CriteriaModel {
    pub fn new(initial: Criteria) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn has_active_filters(&self) -> bool {
        self.current.has_active_filters()
    }

    /// Replace the criteria wholesale
    pub fn set(&mut self, criteria: Criteria) {
        self.current = criteria;
        self.revision += 1;
    }

    /// Derive the next criteria from the current one
    pub fn update(&mut self, f: impl FnOnce(Criteria) -> Criteria) {
        let next = f(std::mem::take(&mut self.current));
        self.set(next);
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.update(|c| c.with_search_term(search_term));
    }

    pub fn set_brand(&mut self, brand: FacetFilter) {
        self.update(|c| c.with_brand(brand));
    }

    pub fn set_category(&mut self, category: FacetFilter) {
        self.update(|c| c.with_category(category));
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) {
        self.update(|c| c.with_price_range(price_range));
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.update(|c| c.with_sort_key(sort_key));
    }

    /// Reset every dimension to its default in a single step
    pub fn clear(&mut self) {
        self.set(Criteria::default());
    }
}
