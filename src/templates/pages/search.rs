use crate::controller::{ControllerState, ResultSetController};
use crate::domain::{DerivedView, SortKey};
use crate::errors::SearchError;
use crate::provider::SearchRequest;
use crate::templates::components::{
    busy_indicator, error_panel, listing_grid, no_results_panel, pagination, stats_panel,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Everything the search page needs, captured from the controller at one
/// point in time.
pub struct SearchPageVm {
    pub request: SearchRequest,
    pub view: DerivedView,
    pub sort_key: SortKey,
    pub filter_text: String,
    pub searching: bool,
    pub loaded: bool,
    pub error: Option<SearchError>,
}

impl SearchPageVm {
    pub fn from_controller(controller: &ResultSetController, request: SearchRequest) -> Self {
        let view_state = controller.view_state();
        Self {
            request,
            view: controller.view(),
            sort_key: view_state.sort_key,
            filter_text: view_state.filter_text.clone(),
            searching: controller.is_searching(),
            loaded: matches!(controller.state(), ControllerState::Loaded(_)),
            error: controller.last_error().cloned(),
        }
    }
}

fn opt_value<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn search_form(vm: &SearchPageVm) -> Markup {
    let req = &vm.request;

    html! {
        form class="search-form" method="get" action="" {
            label for="searchLocation" { "Location" }
            input type="text" id="searchLocation" name="location" placeholder="City, State or ZIP"
                value=(req.location) required;

            label for="propertyType" { "Property type" }
            input type="text" id="propertyType" name="property_type"
                value=(req.property_type.as_deref().unwrap_or(""));

            label for="minPrice" { "Min price" }
            input type="number" id="minPrice" name="min_price" min="0" value=(opt_value(req.min_price));
            label for="maxPrice" { "Max price" }
            input type="number" id="maxPrice" name="max_price" min="0" value=(opt_value(req.max_price));

            label for="minSqft" { "Min sqft" }
            input type="number" id="minSqft" name="min_sqft" min="0" value=(opt_value(req.min_sqft));
            label for="maxSqft" { "Max sqft" }
            input type="number" id="maxSqft" name="max_sqft" min="0" value=(opt_value(req.max_sqft));

            label for="bedrooms" { "Beds" }
            input type="number" id="bedrooms" name="bedrooms" min="0" value=(opt_value(req.min_beds));
            label for="bathrooms" { "Baths" }
            input type="number" id="bathrooms" name="bathrooms" min="0" step="0.5"
                value=(opt_value(req.min_baths));

            label for="sortBy" { "Sort by" }
            select id="sortBy" name="sort" {
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[key == vm.sort_key] { (key.label()) }
                }
            }

            label for="filterText" { "Filter results" }
            input type="search" id="filterText" name="q" value=(vm.filter_text);

            button type="submit" id="searchBtn" class="primary" disabled[vm.searching] { "Search" }
        }
    }
}

/// The part of the page that changes on every view event.
pub fn results_section(vm: &SearchPageVm) -> Markup {
    html! {
        section id="results" {
            @if vm.searching {
                (busy_indicator())
            }
            @if let Some(err) = &vm.error {
                (error_panel(err))
            }
            @if vm.loaded {
                @if vm.view.is_empty() {
                    (no_results_panel())
                } @else {
                    (stats_panel(&vm.view))
                    (listing_grid(&vm.view.listings))
                    (pagination(&vm.view))
                }
            }
        }
    }
}

pub fn search_page(vm: &SearchPageVm) -> Markup {
    desktop_layout(
        "Property Search",
        html! {
            main class="container" {
                h1 { "Find Commercial & Residential Properties" }
                (search_form(vm))
                (results_section(vm))
            }
        },
    )
}
