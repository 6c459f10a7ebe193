// src/domain/sort.rs

use crate::domain::listing::Listing;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    SizeDesc,
    Newest,
    #[default]
    None,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::SizeDesc => "sqft_desc",
            SortKey::Newest => "newest",
            SortKey::None => "none",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::SizeDesc => "Size: Largest First",
            SortKey::Newest => "Newest",
            SortKey::None => "Relevance",
        }
    }

    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::SizeDesc,
    ];
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    /// Unrecognized keys mean "leave the order alone".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "sqft_desc" => SortKey::SizeDesc,
            "newest" => SortKey::Newest,
            _ => SortKey::None,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns a reordered copy. `sort_by` is stable, so equal keys keep their
/// input order. `Option` orders `None` first, which puts unknown values at
/// the minimum: first when ascending, last when descending.
pub fn sort_listings(listings: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut out = listings.to_vec();

    match key {
        SortKey::PriceAsc => out.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => out.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::SizeDesc => out.sort_by(|a, b| b.size_sqft.cmp(&a.size_sqft)),
        SortKey::Newest => out.sort_by(|a, b| b.year_built.cmp(&a.year_built)),
        SortKey::None => {}
    }

    out
}
