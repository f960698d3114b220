use crate::errors::ServerError;
use crate::handlers::{api, pages};
use crate::request::{path_segments, QueryParams};
use crate::responses::{html_error_response, json_error_response, ResultResp};
use crate::state::AppState;
use astra::{Request, Response};
use tracing::{debug, error, warn};

/// Dispatch one request. Data API routes always answer with JSON, including
/// their errors; view errors are returned for the caller to render.
pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let segments = path_segments(req.uri().path());
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    let params = QueryParams::from_request(&req);

    debug!(method, path = req.uri().path(), "request");

    match (method, segments.as_slice()) {
        // Data API
        ("GET", ["high_rated_family_listings"]) => api::respond(
            "high_rated_family_listings",
            api::high_rated_family_listings(state, &params),
        ),
        ("GET", ["reviews", id]) => api::respond(
            "reviews",
            api::listing_review_keyword(state, id, &params),
        ),
        ("GET", ["flexible_instant_listings"]) => api::respond(
            "flexible_instant_listings",
            api::flexible_instant_listings(state),
        ),
        ("GET", ["cheapest_dates", id]) => {
            api::respond("cheapest_dates", api::cheapest_dates(state, id))
        }
        ("GET", ["averageChristmasPrice", id]) => api::respond(
            "averageChristmasPrice",
            api::average_christmas_price(state, id),
        ),
        ("GET", ["superhost_avg_price", city]) => api::respond(
            "superhost_avg_price",
            api::superhost_average_price(state, city),
        ),
        ("GET", ["filtered_sorted_listings"]) => api::respond(
            "filtered_sorted_listings",
            api::filtered_sorted_listings(state, &params),
        ),
        ("GET", ["available_amenities"]) => {
            api::respond("available_amenities", api::available_amenities(state))
        }
        ("GET", ["top_rated_with_review"]) => api::respond(
            "top_rated_with_review",
            api::top_rated_with_review(state, &params),
        ),
        ("GET", ["cheapest_months"]) => {
            api::respond("cheapest_months", api::cheapest_months(state, &params))
        }
        ("GET", ["available_cities"]) => {
            api::respond("available_cities", api::available_cities(state))
        }
        ("GET", ["monthly_price_trend", id]) => {
            api::respond("monthly_price_trend", api::monthly_price_trend(state, id))
        }
        ("GET", ["random_listing"]) => api::respond("random_listing", api::random_listing(state)),
        ("GET", ["project_author", kind]) => {
            api::respond("project_author", api::project_author(kind))
        }
        ("GET", ["listings", id]) => {
            api::respond("listings", api::listing_details_by_id(state, id))
        }

        // Browsing views
        ("GET", []) => pages::home(None),
        ("GET", ["surprise"]) => pages::surprise(state),
        ("GET", ["city-insights"]) | ("GET", ["search-city"]) => {
            pages::city_insights(state, &params)
        }
        ("GET", ["top-city-listings"]) => pages::top_city_listings(state, &params),
        ("GET", ["search-listings"]) => pages::search_listings(state, &params),
        ("GET", ["listing-details", id]) => pages::listing_details(state, id, &params),
        ("GET", ["best-time", id]) => pages::best_time(state, id),
        ("GET", ["flexible-instant-listings"]) => pages::flexible_instant_listings(state, &params),
        ("GET", ["login"]) => pages::login(state),
        ("GET", ["fragments", "weather"]) => pages::weather_fragment(state),
        ("GET", ["static", "main.css"]) => pages::stylesheet(),

        _ => Err(ServerError::NotFound),
    }
}

/// [`handle`] plus error rendering: JSON for clients asking for it, an HTML
/// page otherwise.
pub fn respond(req: Request, state: &AppState) -> Response {
    let wants_json = req
        .headers()
        .get("Accept")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"));

    let path = req.uri().path().to_string();

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(path = %path, error = %err, "view failed");
            } else {
                warn!(path = %path, error = %err, "view rejected");
            }
            if wants_json {
                json_error_response(&err)
            } else {
                html_error_response(err)
            }
        }
    }
}
