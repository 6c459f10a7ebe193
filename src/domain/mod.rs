pub mod filter;
pub mod identity;
pub mod listing;
pub mod normalize;
pub mod paginate;
pub mod sort;
pub mod view;

pub use filter::StructuredFilters;
pub use listing::{Listing, ResultSet};
pub use normalize::normalize_response;
pub use sort::SortKey;
pub use view::{derive_view, DerivedView, ViewState};
