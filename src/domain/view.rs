// src/domain/view.rs

use crate::domain::filter::{filter_listings, StructuredFilters};
use crate::domain::listing::{Listing, ResultSet};
use crate::domain::paginate::{clamp_page, page_slice, total_pages, DEFAULT_PAGE_SIZE};
use crate::domain::sort::{sort_listings, SortKey};

/// User-controlled parameters driving the visible subset.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub filter_text: String,
    pub structured_filters: StructuredFilters,
    pub sort_key: SortKey,
    /// 1-based.
    pub page_index: usize,
    /// Fixed for the session.
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter_text: String::new(),
            structured_filters: StructuredFilters::default(),
            sort_key: SortKey::default(),
            page_index: 1,
            page_size: page_size.max(1),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Aggregates over the filtered set. Prices and sizes that are unknown are
/// left out of the averages and extremes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceStats {
    pub count: usize,
    pub priced_count: usize,
    pub average_price: Option<u64>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub average_sqft: Option<u64>,
}

impl PriceStats {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let prices: Vec<u64> = listings.iter().filter_map(|l| l.price).collect();
        let sizes: Vec<u64> = listings.iter().filter_map(|l| l.size_sqft).collect();

        Self {
            count: listings.len(),
            priced_count: prices.len(),
            average_price: rounded_mean(&prices),
            min_price: prices.iter().copied().min(),
            max_price: prices.iter().copied().max(),
            average_sqft: rounded_mean(&sizes),
        }
    }
}

fn rounded_mean(values: &[u64]) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let sum: u128 = values.iter().map(|v| *v as u128).sum();
    let n = values.len() as u128;
    Some(((sum + n / 2) / n) as u64)
}

/// What the display sink renders. Always computed from a result set and a
/// view state; never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// Listings on the current page.
    pub listings: Vec<Listing>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub stats: PriceStats,
}

impl DerivedView {
    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Filter, then sort, then slice. The page index is clamped before slicing,
/// so the returned view never points past the last page.
pub fn derive_view(result_set: &ResultSet, state: &ViewState) -> DerivedView {
    let filtered = filter_listings(
        result_set.listings(),
        &state.filter_text,
        &state.structured_filters,
    );
    let sorted = sort_listings(&filtered, state.sort_key);

    let total_pages = total_pages(sorted.len(), state.page_size);
    let page_index = clamp_page(state.page_index, total_pages);

    DerivedView {
        listings: page_slice(&sorted, page_index, state.page_size).to_vec(),
        page_index,
        page_size: state.page_size,
        total_pages,
        filtered_count: sorted.len(),
        total_count: result_set.len(),
        stats: PriceStats::from_listings(&sorted),
    }
}
