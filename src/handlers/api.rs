// src/handlers/api.rs

//! JSON Data API. Each handler validates its parameters, runs one read
//! statement and hands the rows back untouched.

use crate::db::{calendar, listings, reviews};
use crate::domain::catalog::{project_author as author_info, AmenityOption, AuthorInfo, CityOption};
use crate::domain::listing::{
    FamilyListing, FilteredListing, InstantListing, ListingDetail, RandomListing, TopRatedListing,
};
use crate::domain::pricing::{
    CheapestDate, CheapestMonth, ChristmasPrice, MonthlyPrice, SuperhostPrice,
};
use crate::domain::review::Review;
use crate::domain::search::{split_amenities, FilterQuery};
use crate::errors::ServerError;
use crate::request::{parse_listing_id, QueryParams};
use crate::responses::{json_error_response, json_response, ResultResp};
use crate::state::AppState;
use serde::Serialize;
use tracing::{error, warn};

const CITY_REQUIRED: &str = "City name is required.";

/// Turn a handler result into a JSON response. 4xx are logged as warnings,
/// 5xx with their cause.
pub fn respond<T: Serialize>(endpoint: &str, result: Result<T, ServerError>) -> ResultResp {
    match result {
        Ok(body) => json_response(200, &body),
        Err(err) => {
            if err.status() >= 500 {
                error!(endpoint, error = %err, "query failed");
            } else {
                warn!(endpoint, error = %err, "rejected request");
            }
            Ok(json_error_response(&err))
        }
    }
}

// GET /high_rated_family_listings?city=
pub fn high_rated_family_listings(
    state: &AppState,
    params: &QueryParams,
) -> Result<Vec<FamilyListing>, ServerError> {
    let city = params.require("city", CITY_REQUIRED)?;
    listings::high_rated_family_listings(&state.db, city)
}

// GET /reviews/{id}?q=
pub fn listing_review_keyword(
    state: &AppState,
    id: &str,
    params: &QueryParams,
) -> Result<Vec<Review>, ServerError> {
    let listing_id = parse_listing_id(id)?;
    let keyword = params.get("q").unwrap_or("");
    reviews::reviews_with_keyword(&state.db, listing_id, keyword)
}

// GET /flexible_instant_listings
pub fn flexible_instant_listings(state: &AppState) -> Result<Vec<InstantListing>, ServerError> {
    listings::flexible_instant_listings(&state.db)
}

// GET /cheapest_dates/{listing_id}
pub fn cheapest_dates(state: &AppState, id: &str) -> Result<Vec<CheapestDate>, ServerError> {
    calendar::cheapest_dates(&state.db, parse_listing_id(id)?)
}

// GET /averageChristmasPrice/{listing_id}
pub fn average_christmas_price(
    state: &AppState,
    id: &str,
) -> Result<Vec<ChristmasPrice>, ServerError> {
    calendar::christmas_price(
        &state.db,
        parse_listing_id(id)?,
        state.config.peak_season_year,
    )
}

// GET /superhost_avg_price/{city}
pub fn superhost_average_price(
    state: &AppState,
    city: &str,
) -> Result<Vec<SuperhostPrice>, ServerError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(ServerError::BadRequest(CITY_REQUIRED.into()));
    }
    calendar::superhost_avg_price(&state.db, city)
}

// GET /filtered_sorted_listings?amenities=a,b&min_rating=&city=
pub fn filtered_sorted_listings(
    state: &AppState,
    params: &QueryParams,
) -> Result<Vec<FilteredListing>, ServerError> {
    let missing = || ServerError::BadRequest("Missing amenities or minimum rating, or city.".into());

    let amenities = params.get("amenities").map(split_amenities).unwrap_or_default();
    let min_rating = params.get("min_rating").ok_or_else(missing)?;
    let city = params.get("city").ok_or_else(missing)?;
    if amenities.is_empty() {
        return Err(missing());
    }

    let min_rating: f64 = min_rating
        .parse()
        .ok()
        .filter(|r: &f64| r.is_finite())
        .ok_or_else(|| ServerError::BadRequest("Minimum rating must be a number.".into()))?;

    let filter = FilterQuery {
        city: city.to_string(),
        amenities,
        min_rating,
    };
    listings::filtered_sorted_listings(&state.db, &filter)
}

// GET /available_amenities
pub fn available_amenities(state: &AppState) -> Result<Vec<AmenityOption>, ServerError> {
    listings::available_amenities(&state.db)
}

// GET /top_rated_with_review?city=
pub fn top_rated_with_review(
    state: &AppState,
    params: &QueryParams,
) -> Result<Vec<TopRatedListing>, ServerError> {
    let city = params.require("city", CITY_REQUIRED)?;
    listings::top_rated_with_review(&state.db, city)
}

// GET /cheapest_months?city=
pub fn cheapest_months(
    state: &AppState,
    params: &QueryParams,
) -> Result<Vec<CheapestMonth>, ServerError> {
    let city = params.require("city", CITY_REQUIRED)?;
    calendar::cheapest_months(&state.db, city)
}

// GET /available_cities
pub fn available_cities(state: &AppState) -> Result<Vec<CityOption>, ServerError> {
    listings::available_cities(&state.db)
}

// GET /monthly_price_trend/{listing_id}
pub fn monthly_price_trend(state: &AppState, id: &str) -> Result<Vec<MonthlyPrice>, ServerError> {
    calendar::monthly_price_trend(&state.db, parse_listing_id(id)?)
}

// GET /random_listing
pub fn random_listing(state: &AppState) -> Result<RandomListing, ServerError> {
    listings::random_listing(&state.db)?.ok_or(ServerError::NotFound)
}

// GET /project_author/{type}
pub fn project_author(kind: &str) -> Result<AuthorInfo, ServerError> {
    author_info(kind).ok_or_else(|| {
        ServerError::BadRequest("Author type must be 'group' or 'names'.".into())
    })
}

// GET /listings/{id}
pub fn listing_details_by_id(state: &AppState, id: &str) -> Result<ListingDetail, ServerError> {
    listings::listing_detail(&state.db, parse_listing_id(id)?)?.ok_or(ServerError::NotFound)
}
