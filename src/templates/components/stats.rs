use crate::domain::DerivedView;
use crate::templates::format::format_currency;
use maud::{html, Markup};

fn stat_card(value: &str, label: &str) -> Markup {
    html! {
        div class="stat-card" {
            div class="stat-value" { (value) }
            div class="stat-label" { (label) }
        }
    }
}

/// Totals over the whole filtered set, not just the visible page.
pub fn stats_panel(view: &DerivedView) -> Markup {
    let stats = &view.stats;

    html! {
        div class="stats-section" {
            p class="result-count" {
                strong { (view.filtered_count) } " of " (view.total_count) " properties"
            }
            div class="stats-grid" {
                (stat_card(&view.filtered_count.to_string(), "Properties Found"))
                (stat_card(&format_currency(stats.average_price), "Average Price"))
                (stat_card(&format_currency(stats.min_price), "Lowest Price"))
                (stat_card(&format_currency(stats.max_price), "Highest Price"))
            }
        }
    }
}
