//! Status gate and predicate filter stage
//!
//! The status gate is unconditional. The four user predicates are a pure
//! conjunction; a record with a missing field simply fails any predicate
//! that constrains that field.

use crate::core::criteria::Criteria;
use crate::core::vehicle::VehicleRecord;

/// Public-listing invariant: only available vehicles are ever shown
pub fn passes_status_gate(record: &VehicleRecord) -> bool {
    record.status.is_available()
}

/// Case-insensitive substring match against name or brand
pub fn matches_search(record: &VehicleRecord, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    record.name_or_empty().to_lowercase().contains(&needle)
        || record.brand_or_empty().to_lowercase().contains(&needle)
}

pub fn matches_brand(record: &VehicleRecord, criteria: &Criteria) -> bool {
    criteria.brand.matches(record.brand.as_deref())
}

pub fn matches_category(record: &VehicleRecord, criteria: &Criteria) -> bool {
    criteria.category.matches(record.category_name())
}

pub fn matches_price(record: &VehicleRecord, criteria: &Criteria) -> bool {
    criteria.price_range.contains(record.daily_rate)
}

/// All four user predicates
pub fn matches(record: &VehicleRecord, criteria: &Criteria) -> bool {
    matches_search(record, &criteria.search_term)
        && matches_brand(record, criteria)
        && matches_category(record, criteria)
        && matches_price(record, criteria)
}

/// Gate then filter, preserving input order
pub fn apply<'a>(records: &'a [VehicleRecord], criteria: &Criteria) -> Vec<&'a VehicleRecord> {
    records
        .iter()
        .filter(|record| passes_status_gate(record))
        .filter(|record| matches(record, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::{FacetFilter, PriceRange};
    use crate::core::vehicle::VehicleStatus;

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            VehicleRecord::new("Model 3", "Tesla", 900.0).with_category("Sedan"),
            VehicleRecord::new("VF8", "VinFast", 1500.0).with_category("SUV"),
            VehicleRecord::new("ID.4", "Tesla", 1200.0).with_status(VehicleStatus::Maintenance),
        ]
    }

    #[test]
    fn test_status_gate_excludes_non_available() {
        let records = fleet();
        let result = apply(&records, &Criteria::default());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.status.is_available()));
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_brand() {
        let records = fleet();
        assert!(matches_search(&records[1], "vf"));
        assert!(matches_search(&records[1], "VINFAST"));
        assert!(matches_search(&records[0], "tes"));
        assert!(!matches_search(&records[0], "vin"));
        assert!(matches_search(&records[0], ""));
    }

    #[test]
    fn test_search_tolerates_missing_fields() {
        let mut record = VehicleRecord::new("x", "y", 10.0);
        record.name = None;
        record.brand = None;
        assert!(matches_search(&record, ""));
        assert!(!matches_search(&record, "x"));
    }

    #[test]
    fn test_brand_is_exact_and_case_sensitive() {
        let records = fleet();
        let tesla = Criteria::default().with_brand(FacetFilter::only("Tesla"));
        let lower = Criteria::default().with_brand(FacetFilter::only("tesla"));
        assert!(matches_brand(&records[0], &tesla));
        assert!(!matches_brand(&records[0], &lower));
    }

    #[test]
    fn test_missing_category_never_matches_concrete_filter() {
        let record = VehicleRecord::new("Bare", "NoName", 100.0);
        let suv = Criteria::default().with_category(FacetFilter::only("SUV"));
        assert!(!matches_category(&record, &suv));
        assert!(matches_category(&record, &Criteria::default()));
    }

    #[test]
    fn test_price_boundary_belongs_to_upper_bucket() {
        let record = VehicleRecord::new("Edge", "Brand", 1000.0);
        let low = Criteria::default().with_price_range(PriceRange::Under1000);
        let mid = Criteria::default().with_price_range(PriceRange::From1000To2000);
        assert!(!matches_price(&record, &low));
        assert!(matches_price(&record, &mid));
    }

    #[test]
    fn test_apply_preserves_input_order() {
        let records = vec![
            VehicleRecord::new("C", "Brand", 300.0),
            VehicleRecord::new("A", "Brand", 100.0),
            VehicleRecord::new("B", "Brand", 200.0),
        ];
        let names: Vec<&str> = apply(&records, &Criteria::default())
            .iter()
            .map(|r| r.name_or_empty())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
