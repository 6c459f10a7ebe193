/// A listing as returned by a search, flattened and normalized.
/// Anything the provider may leave out is an `Option`; `None` means "unknown".
/// Providers send 0 for a missing price or size, so those normalize to `None`
/// as well (see `normalize`).
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Free-text location, e.g. "100 Main St, Austin, TX, 78701"
    pub location: String,

    pub price: Option<u64>,
    pub size_sqft: Option<u64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,

    pub property_type: String,
    pub year_built: Option<u32>,
    pub description: String,

    pub detail_url: Option<String>,
    pub image_url: Option<String>,
}

impl Listing {
    /// A listing with only an id and title set; everything else unknown.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: String::new(),
            price: None,
            size_sqft: None,
            bedrooms: None,
            bathrooms: None,
            property_type: String::new(),
            year_built: None,
            description: String::new(),
            detail_url: None,
            image_url: None,
        }
    }

    /// Label used on the type badge when the provider gave no category.
    pub fn type_label(&self) -> &str {
        if self.property_type.is_empty() {
            "Property"
        } else {
            &self.property_type
        }
    }
}

/// The full outcome of the most recent completed search.
/// Never mutated after creation; a new search replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    listings: Vec<Listing>,
}

impl ResultSet {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
