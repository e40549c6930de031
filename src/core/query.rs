//! Listing query parameters

use crate::core::criteria::{Criteria, FacetFilter, PriceRange, SortKey};
use crate::core::error::CriteriaError;
use serde::Deserialize;

/// Criteria as carried in the listing URL
///
/// Every parameter is optional and defaults to "no constraint". Hero
/// hand-off parameters (`location`, `startDate`, `endDate`) may be present
/// too; they are accepted and ignored here.
///
/// # Example
/// ```text
/// GET /vehicles?search=vf&brand=VinFast
/// GET /vehicles?priceRange=1000-2000&sort=price-high
/// GET /vehicles?category=SUV&sort=newest
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingQuery {
    /// Free-text search over name and brand
    pub search: Option<String>,

    /// Brand, or `ALL`
    pub brand: Option<String>,

    /// Category name, or `ALL`
    pub category: Option<String>,

    /// One of `0-1000`, `1000-2000`, `2000-3000`, `3000+`, or `ALL`
    pub price_range: Option<String>,

    /// One of `popular`, `price-low`, `price-high`, `newest`, `name`
    ///
    /// Anything else orders by name.
    pub sort: Option<String>,
}

impl ListingQuery {
    /// Convert into criteria, falling back to `default_sort` when no sort is given
    pub fn into_criteria(self, default_sort: SortKey) -> Result<Criteria, CriteriaError> {
        let price_range = match self.price_range.as_deref() {
            Some(raw) => raw.parse::<PriceRange>()?,
            None => PriceRange::All,
        };
        let sort_key = self
            .sort
            .as_deref()
            .map_or(default_sort, SortKey::parse_lenient);

        Ok(Criteria {
            search_term: self.search.map(|s| s.trim().to_string()).unwrap_or_default(),
            brand: self.brand.map(FacetFilter::from).unwrap_or_default(),
            category: self.category.map(FacetFilter::from).unwrap_or_default(),
            price_range,
            sort_key,
        })
    }
}
