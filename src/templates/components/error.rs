use crate::errors::SearchError;
use maud::{html, Markup};

/// Transient failure message. The results underneath stay as they were.
pub fn error_panel(err: &SearchError) -> Markup {
    let details = err.details();

    html! {
        div class="error" role="alert" {
            h3 { "⚠️ Error" }
            p { strong { (err.title()) } }
            @if !details.is_empty() && details != err.title() {
                p { small { (details) } }
            }
            @if err.is_retryable() {
                p { small { "Please try again in a moment." } }
            } @else {
                p { small { "Please try again with different search parameters." } }
            }
        }
    }
}

pub fn no_results_panel() -> Markup {
    html! {
        div class="no-results" {
            h3 { "🔍 No Properties Found" }
            p { "We couldn't find any properties matching your criteria." }
            div class="suggestions" {
                h4 { "Try adjusting your search:" }
                ul {
                    li { "Expand your price range" }
                    li { "Try a different location" }
                    li { "Reduce the number of bedrooms/bathrooms" }
                    li { "Change the property type" }
                }
            }
        }
    }
}
