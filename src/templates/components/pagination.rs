use crate::domain::DerivedView;
use maud::{html, Markup};

/// Previous/next controls. The buttons carry the page delta they request;
/// whatever drives the session turns a click into `on_page_change`.
pub fn pagination(view: &DerivedView) -> Markup {
    html! {
        nav class="pagination" aria-label="Results pages" {
            button type="button" class="btn" data-page-delta="-1" disabled[!view.has_previous()] {
                "← Previous"
            }
            span class="page-label" {
                "Page " (view.page_index) " of " (view.total_pages)
            }
            button type="button" class="btn" data-page-delta="1" disabled[!view.has_next()] {
                "Next →"
            }
        }
    }
}
