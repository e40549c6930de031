//! Sort stage
//!
//! Exactly one comparator runs per pipeline pass. `slice::sort_by` is
//! stable, so records comparing equal keep their filtered order.

use crate::core::criteria::SortKey;
use crate::core::vehicle::VehicleRecord;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Comparator for the given key
pub fn comparator(key: SortKey) -> fn(&VehicleRecord, &VehicleRecord) -> Ordering {
    match key {
        SortKey::PriceLow => by_price_low,
        SortKey::PriceHigh => by_price_high,
        SortKey::Newest => by_newest,
        SortKey::Popular => by_popularity,
        SortKey::Name => by_name,
    }
}

pub fn apply(records: &mut [&VehicleRecord], key: SortKey) {
    let cmp = comparator(key);
    records.sort_by(|a, b| cmp(a, b));
}

fn by_price_low(a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    by_rate(a, b, false)
}

fn by_price_high(a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    by_rate(a, b, true)
}

// Unpriced records go last in both directions
fn by_rate(a: &VehicleRecord, b: &VehicleRecord, descending: bool) -> Ordering {
    match (a.daily_rate, b.daily_rate) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// `None < Some(_)`, so reversing puts undated records last
fn by_newest(a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

// Zero and absent trip counts share the bottom of the order
fn by_popularity(a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    b.popularity().cmp(&a.popularity())
}

fn by_name(a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    collate(a.name_or_empty(), b.name_or_empty())
}

/// Locale-style string ordering
///
/// Three levels, each consulted only on a tie at the one before:
/// 1. base letters, with accents stripped and case folded, so "Élan"
///    sorts among the E's and "audi" interleaves with "BMW"
/// 2. accents, unaccented first
/// 3. case, lowercase first
pub fn collate(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        // Swapped: 'a' (0x61) must sort before 'A' (0x41)
        .then_with(|| b.cmp(a))
}

fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            // Vietnamese d-bar has no decomposition
            'đ' | 'Đ' => 'd',
            _ => c,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}
