// src/domain/filter.rs

use crate::domain::listing::Listing;

/// Field filters driven by the search form. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredFilters {
    /// Case-insensitive substring of the listing's property type.
    pub property_type: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_beds: Option<u32>,
    pub min_baths: Option<f64>,
    pub min_sqft: Option<u64>,
    pub max_sqft: Option<u64>,
}

impl StructuredFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Keeps the listings that pass every active predicate, in input order.
pub fn filter_listings(
    listings: &[Listing],
    filter_text: &str,
    filters: &StructuredFilters,
) -> Vec<Listing> {
    let needle = filter_text.to_lowercase();
    let type_needle = filters
        .property_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    listings
        .iter()
        .filter(|l| matches_text(l, &needle))
        .filter(|l| matches_type(l, type_needle.as_deref()))
        .filter(|l| matches_filters(l, filters))
        .cloned()
        .collect()
}

/// Free-text match over title, location, type and description.
/// `needle` must already be lowercased; empty matches everything.
pub fn matches_text(listing: &Listing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [
        &listing.title,
        &listing.location,
        &listing.property_type,
        &listing.description,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn matches_type(listing: &Listing, type_needle: Option<&str>) -> bool {
    match type_needle {
        Some(t) => listing.property_type.to_lowercase().contains(t),
        None => true,
    }
}

/// Bound checks. An unknown value never passes an active bound.
pub fn matches_filters(listing: &Listing, f: &StructuredFilters) -> bool {
    at_least(listing.price, f.min_price)
        && at_most(listing.price, f.max_price)
        && at_least(listing.bedrooms, f.min_beds)
        && at_least(listing.bathrooms, f.min_baths)
        && at_least(listing.size_sqft, f.min_sqft)
        && at_most(listing.size_sqft, f.max_sqft)
}

fn at_least<T: PartialOrd>(value: Option<T>, min: Option<T>) -> bool {
    match (value, min) {
        (_, None) => true,
        (Some(v), Some(m)) => v >= m,
        (None, Some(_)) => false,
    }
}

fn at_most<T: PartialOrd>(value: Option<T>, max: Option<T>) -> bool {
    match (value, max) {
        (_, None) => true,
        (Some(v), Some(m)) => v <= m,
        (None, Some(_)) => false,
    }
}
