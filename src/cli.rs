use crate::controller::{FilterChange, PageDelta};
use crate::domain::{DerivedView, SortKey};
use crate::provider::{SearchProvider, SearchRequest};
use crate::session::SearchSession;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "listing-search",
    about = "Search property listings and print the results page as HTML"
)]
pub struct Cli {
    /// City, state or ZIP
    #[arg(default_value = "")]
    pub location: String,

    /// price_asc, price_desc, sqft_desc, newest or none
    #[arg(long, default_value = "none")]
    pub sort: String,

    /// Narrow the loaded results by free text
    #[arg(long, default_value = "")]
    pub filter: String,

    #[arg(long = "type")]
    pub property_type: Option<String>,

    #[arg(long)]
    pub min_price: Option<u64>,

    #[arg(long)]
    pub max_price: Option<u64>,

    #[arg(long)]
    pub min_sqft: Option<u64>,

    #[arg(long)]
    pub max_sqft: Option<u64>,

    #[arg(long)]
    pub beds: Option<u32>,

    #[arg(long)]
    pub baths: Option<f64>,

    /// 1-based page to show
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl Cli {
    pub fn sort_key(&self) -> SortKey {
        self.sort.parse().unwrap_or_default()
    }

    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            location: self.location.clone(),
            property_type: self.property_type.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_sqft: self.min_sqft,
            max_sqft: self.max_sqft,
            min_beds: self.beds,
            min_baths: self.baths,
            sort: self.sort_key(),
        }
    }

    /// Filter text plus the form bounds, or nothing if neither is set.
    pub fn filter_change(&self) -> Option<FilterChange> {
        let structured = self.request().structured_filters();
        match (self.filter.is_empty(), structured.is_empty()) {
            (true, true) => None,
            (false, true) => Some(FilterChange::text(self.filter.clone())),
            (true, false) => Some(FilterChange::structured(structured)),
            (false, false) => Some(FilterChange {
                filter_text: Some(self.filter.clone()),
                structured_filters: Some(structured),
            }),
        }
    }

    /// Replays the view events a visitor would make after the search lands:
    /// filter, then sort, then step forward to the requested page.
    pub fn apply_view<P: SearchProvider + 'static>(
        &self,
        session: &mut SearchSession<P>,
    ) -> DerivedView {
        let mut view = session.controller().view();

        if let Some(change) = self.filter_change() {
            view = session.on_filter_change(change);
        }
        let sort = self.sort_key();
        if sort != SortKey::None {
            view = session.on_sort_change(sort);
        }
        for _ in 1..self.page {
            let next = session.on_page_change(PageDelta::Next);
            // Stepping past the end leaves the page where it was.
            let stuck = next.page_index == view.page_index;
            view = next;
            if stuck {
                break;
            }
        }

        view
    }
}
