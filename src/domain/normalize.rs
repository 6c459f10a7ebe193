// src/domain/normalize.rs

use crate::domain::identity::{disambiguate, synthesize_id};
use crate::domain::listing::Listing;
use chrono::{DateTime, Datelike, NaiveDate};
use serde_json::{Map, Value};
use std::collections::HashSet;

// response
//  ├── props[]      (advance search)
//  └── results[]    (extended search)
//
// Some providers skip the wrapper and return the array itself.
const LIST_KEYS: &[&str] = &["props", "results"];

const ID_KEYS: &[&str] = &["zpid", "listingId", "id"];
const TITLE_KEYS: &[&str] = &["title", "address", "streetAddress"];
const ADDRESS_KEYS: &[&str] = &["address", "streetAddress"];
const PRICE_KEYS: &[&str] = &["price", "listPrice"];
const SIZE_KEYS: &[&str] = &["livingArea", "sqft", "buildingSize"];
const BED_KEYS: &[&str] = &["bedrooms", "beds"];
const BATH_KEYS: &[&str] = &["bathrooms", "baths"];
const TYPE_KEYS: &[&str] = &["propertyType", "homeType"];
const DESCRIPTION_KEYS: &[&str] = &["description", "summary"];
const DETAIL_URL_KEYS: &[&str] = &["detailUrl", "url"];
const IMAGE_KEYS: &[&str] = &["imgSrc", "image"];

/// Turns whatever the provider sent into listings.
///
/// An unrecognized shape is not an error: it yields an empty list, which the
/// caller treats as a zero-result search. Entries that aren't JSON objects are
/// skipped.
pub fn normalize_response(data: &Value) -> Vec<Listing> {
    let Some(entries) = find_listing_array(data) else {
        tracing::warn!(
            shape = shape_name(data),
            "unrecognized search response shape, treating as zero results"
        );
        return Vec::new();
    };

    let mut seen_ids = HashSet::new();
    let mut listings = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            tracing::debug!(index, "skipping non-object listing entry");
            continue;
        };

        let mut listing = normalize_listing(obj, index);
        if !seen_ids.insert(listing.id.clone()) {
            // The suffixed form can already be in use.
            let mut suffix = index;
            let mut candidate = disambiguate(&listing.id, suffix);
            while !seen_ids.insert(candidate.clone()) {
                suffix += 1;
                candidate = disambiguate(&listing.id, suffix);
            }
            listing.id = candidate;
        }
        listings.push(listing);
    }

    listings
}

/// Flattens one raw record. `index` is its position in the response and only
/// feeds the synthesized id.
pub fn normalize_listing(obj: &Map<String, Value>, index: usize) -> Listing {
    let title = first_text(obj, TITLE_KEYS).unwrap_or_default();
    let location = first_text(obj, &["location"]).unwrap_or_else(|| full_address(obj));
    let price = first_whole(obj, PRICE_KEYS);

    let id = first_id(obj, ID_KEYS).unwrap_or_else(|| synthesize_id(index, &title, &location, price));

    Listing {
        id,
        title,
        location,
        price,
        size_sqft: first_whole(obj, SIZE_KEYS),
        bedrooms: first_whole(obj, BED_KEYS).map(|n| n as u32),
        bathrooms: first_positive(obj, BATH_KEYS),
        property_type: first_text(obj, TYPE_KEYS).unwrap_or_default(),
        year_built: year_built(obj),
        description: first_text(obj, DESCRIPTION_KEYS).unwrap_or_default(),
        detail_url: first_text(obj, DETAIL_URL_KEYS).filter(|u| u != "#"),
        image_url: first_text(obj, IMAGE_KEYS),
    }
}

fn find_listing_array(data: &Value) -> Option<&Vec<Value>> {
    if let Some(arr) = data.as_array() {
        return Some(arr);
    }
    let obj = data.as_object()?;
    LIST_KEYS.iter().find_map(|k| obj.get(*k)?.as_array())
}

fn shape_name(data: &Value) -> &'static str {
    match data {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// First key holding a non-empty string, trimmed.
fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        obj.get(*k)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Ids come as strings or numbers (zpid is a number on some endpoints).
/// Keys are tried in order whatever the type.
fn first_id(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match obj.get(*k)? {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        Value::Number(n) => n.as_u64().map(|n| n.to_string()),
        _ => None,
    })
}

/// First key whose value coerces to a positive number. Zero, negative or
/// non-numeric values count as missing, so the next key gets a chance.
fn first_positive(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(coerce_number).filter(|n| *n > 0.0))
}

/// Like `first_positive`, but rounded to whole units first. Anything that
/// rounds to zero is missing.
fn first_whole(obj: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    keys.iter()
        .find_map(|k| {
            obj.get(*k)
                .and_then(coerce_number)
                .map(f64::round)
                .filter(|n| *n >= 1.0)
        })
        .map(|n| n as u64)
}

/// Accepts JSON numbers and numeric strings like "$1,250,000" or "25,000 SF".
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .trim_start_matches('$')
                .chars()
                .filter(|c| *c != ',')
                .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };

    (n.is_finite() && n >= 0.0).then_some(n)
}

fn full_address(obj: &Map<String, Value>) -> String {
    let parts = [
        first_text(obj, ADDRESS_KEYS),
        first_text(obj, &["city"]),
        first_text(obj, &["state"]),
        first_text(obj, &["zipcode"]),
    ];

    parts.into_iter().flatten().collect::<Vec<_>>().join(", ")
}

fn year_built(obj: &Map<String, Value>) -> Option<u32> {
    let from_number = first_whole(obj, &["yearBuilt", "year_built"]).map(|y| y as u32);

    // Helper to pull a year out of an optional date string.
    let from_date = || {
        let s = obj.get("builtDate")?.as_str()?.trim();
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.year())
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.year()))
            .ok()
            .filter(|y| *y > 0)
            .map(|y| y as u32)
    };

    from_number.or_else(from_date)
}
