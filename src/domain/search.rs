// src/domain/search.rs
use thiserror::Error;

/// Validation failures of the filter search form. The message is shown inline
/// and the search is not run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterFormError {
    #[error("Please select a city.")]
    MissingCity,
    #[error("Please select at least one amenity.")]
    MissingAmenities,
    #[error("Please select a minimum rating.")]
    MissingRating,
}

/// Raw filter form as submitted by the search page.
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    pub city: Option<String>,
    pub amenities: Vec<String>,
    pub min_rating: Option<f64>,
}

/// A filter search that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub city: String,
    pub amenities: Vec<String>,
    pub min_rating: f64,
}

impl FilterForm {
    /// Checks city, then amenities, then rating; the first missing field wins.
    pub fn validate(&self) -> Result<FilterQuery, FilterFormError> {
        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(FilterFormError::MissingCity)?;

        let amenities: Vec<String> = self
            .amenities
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();
        if amenities.is_empty() {
            return Err(FilterFormError::MissingAmenities);
        }

        let min_rating = self
            .min_rating
            .filter(|r| r.is_finite())
            .ok_or(FilterFormError::MissingRating)?;

        Ok(FilterQuery {
            city: city.to_string(),
            amenities,
            min_rating,
        })
    }
}

/// Splits the API's comma-separated `amenities` parameter.
pub fn split_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
