use crate::domain::{SortKey, StructuredFilters};
use crate::errors::SearchError;

/// What the search form sends to the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    /// City, ZIP or free-text area. Required.
    pub location: String,
    pub property_type: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_sqft: Option<u64>,
    pub max_sqft: Option<u64>,
    pub min_beds: Option<u32>,
    pub min_baths: Option<f64>,
    pub sort: SortKey,
}

impl SearchRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    /// Rejects input that would make a pointless request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.location.trim().is_empty() {
            return Err(SearchError::Validation(
                "Please enter a search location".into(),
            ));
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(SearchError::Validation(format!(
                    "Minimum price ({min}) is above maximum price ({max})"
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min_sqft, self.max_sqft) {
            if min > max {
                return Err(SearchError::Validation(format!(
                    "Minimum size ({min} sqft) is above maximum size ({max} sqft)"
                )));
            }
        }

        Ok(())
    }

    /// The same bounds, applied again to whatever the provider returns.
    /// Providers treat some of these as hints.
    pub fn structured_filters(&self) -> StructuredFilters {
        StructuredFilters {
            property_type: self
                .property_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            min_price: self.min_price,
            max_price: self.max_price,
            min_beds: self.min_beds,
            min_baths: self.min_baths,
            min_sqft: self.min_sqft,
            max_sqft: self.max_sqft,
        }
    }

    /// Query parameters for the provider. Empty values are left out.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let sort = match self.sort {
            SortKey::None => SortKey::Newest,
            other => other,
        };

        let params = [
            ("location", Some(self.location.trim().to_string())),
            (
                "home_type",
                self.property_type
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            ),
            ("minPrice", self.min_price.map(|v| v.to_string())),
            ("maxPrice", self.max_price.map(|v| v.to_string())),
            ("minSqft", self.min_sqft.map(|v| v.to_string())),
            ("maxSqft", self.max_sqft.map(|v| v.to_string())),
            ("bedrooms", self.min_beds.map(|v| v.to_string())),
            ("bathrooms", self.min_baths.map(|v| v.to_string())),
            ("sort", Some(sort.as_str().to_string())),
        ];

        params
            .into_iter()
            .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| (k, v)))
            .collect()
    }
}
