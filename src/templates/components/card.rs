use crate::domain::Listing;
use crate::templates::format::{format_baths, format_currency, format_number};
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    let type_label = listing.type_label();

    html! {
        div class="property-card" data-listing-id=(listing.id) {
            div class="property-image" {
                @if let Some(src) = &listing.image_url {
                    img src=(src) alt="Property Image" loading="lazy";
                } @else {
                    div class="placeholder" {
                        div class="placeholder-icon" { "🏠" }
                        div { (type_label.to_uppercase()) }
                    }
                }
            }
            div class="property-content" {
                div class="property-title" {
                    @if listing.title.is_empty() { "Address not available" } @else { (listing.title) }
                }
                div class="property-price" { (format_currency(listing.price)) }
                div class="property-details" {
                    @if let Some(beds) = listing.bedrooms {
                        div class="property-detail" { "🛏️ " (beds) " Beds" }
                    }
                    @if let Some(baths) = listing.bathrooms {
                        div class="property-detail" { "🚿 " (format_baths(baths)) " Baths" }
                    }
                    @if listing.size_sqft.is_some() {
                        div class="property-detail" { "📐 " (format_number(listing.size_sqft)) " sqft" }
                    }
                    @if let Some(year) = listing.year_built {
                        div class="property-detail" { "Built " (year) }
                    }
                    span class="badge property-type" { (type_label) }
                }
                @if !listing.location.is_empty() {
                    div class="property-location" { "📍 " (listing.location) }
                }
                @if let Some(url) = &listing.detail_url {
                    div class="property-link" {
                        a href=(url) target="_blank" rel="noopener noreferrer" { "View Details" }
                    }
                }
            }
        }
    }
}

pub fn listing_grid(listings: &[Listing]) -> Markup {
    html! {
        div class="property-grid" {
            @for listing in listings {
                (listing_card(listing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_shows_price_size_and_badge() {
        let mut l = Listing::new("1", "100 Main St");
        l.price = Some(15_000_000);
        l.size_sqft = Some(25_000);
        l.property_type = "Office".into();

        let html = listing_card(&l).into_string();
        assert!(html.contains("$15,000,000"));
        assert!(html.contains("25,000 sqft"));
        assert!(html.contains(r#"<span class="badge property-type">Office</span>"#));
        assert!(!html.contains("View Details"));
    }

    #[test]
    fn card_handles_unknowns() {
        let l = Listing::new("2", "");
        let html = listing_card(&l).into_string();

        assert!(html.contains("Price not available"));
        assert!(html.contains("Address not available"));
        assert!(html.contains("PROPERTY"));
        assert!(!html.contains("sqft"));
        assert!(!html.contains("Beds"));
    }

    #[test]
    fn details_link_only_when_url_present() {
        let mut l = Listing::new("3", "Lot");
        l.detail_url = Some("https://example.com/3".into());

        let html = listing_card(&l).into_string();
        assert!(html.contains(r#"href="https://example.com/3""#));
        assert!(html.contains("View Details"));
    }
}
