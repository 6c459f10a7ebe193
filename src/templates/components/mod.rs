use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod pagination;
pub mod stats;

pub use card::listing_grid;
pub use error::{error_panel, no_results_panel};
pub use pagination::pagination;
pub use stats::stats_panel;

pub fn busy_indicator() -> Markup {
    html! {
        div class="loading" role="status" aria-live="polite" {
            span class="spinner" aria-hidden="true" {}
            " Searching properties…"
        }
    }
}
