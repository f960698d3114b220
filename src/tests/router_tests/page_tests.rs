use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, get_request, init_test_state};

fn page(uri: &str) -> (u16, String) {
    let state = init_test_state();
    let mut resp = get(&state, uri);
    (resp.status().as_u16(), body_string(&mut resp))
}

#[test]
fn home_page_renders_featured_cities() {
    let (status, body) = page("/");

    assert_eq!(status, 200);
    assert!(body.contains("Featured cities"));
    assert!(body.contains("/city-insights?city=New+York+City"));
    assert!(body.contains("Group 7"));
    assert!(body.contains(r#"hx-get="/fragments/weather""#));
}

#[test]
fn surprise_redirects_to_a_listing() {
    let state = init_test_state();
    let resp = get(&state, "/surprise");

    assert_eq!(resp.status(), 302);
    let location = resp.headers()["Location"].to_str().unwrap();
    assert!(location.starts_with("/listing-details/"));
}

#[test]
fn top_city_listings_without_city_goes_home() {
    let state = init_test_state();
    let resp = get(&state, "/top-city-listings");

    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers()["Location"], "/");
}

#[test]
fn top_city_listings_truncate_names_and_reviews() {
    let (status, body) = page("/top-city-listings?city=Austin");

    assert_eq!(status, 200);
    assert!(body.contains("Zilker treehouse with a very long name that keeps going past the ..."));
    assert!(!body.contains("past the card limit"));
    assert!(body.contains("a map of the nearby trails for us. H..."));
    assert!(!body.contains("Highly recommended."));
    assert!(body.contains("#10"));
}

#[test]
fn city_insights_renders_every_section() {
    let (status, body) = page("/city-insights?city=Austin");

    assert_eq!(status, 200);
    assert!(body.contains("Superhost prices by neighborhood"));
    assert!(body.contains("East Austin"));
    assert!(body.contains("$160.83"));
    assert!(body.contains("2024-01"));
    assert!(body.contains("/listing-details/900000000000000001"));
}

#[test]
fn search_city_is_an_alias() {
    let (status, body) = page("/search-city");

    assert_eq!(status, 200);
    assert!(body.contains("Select a city..."));
    assert!(body.contains(r#"<option value="Chicago">"#));
}

#[test]
fn city_insights_section_failure_stays_local() {
    let state = init_test_state();
    state
        .db
        .with_conn(|conn| {
            conn.execute_batch("DROP VIEW city_monthly_avg;")
                .map_err(ServerError::from)
        })
        .unwrap();

    let mut resp = get(&state, "/city-insights?city=Austin");
    let body = body_string(&mut resp);

    assert_eq!(resp.status(), 200);
    assert!(body.contains("Could not load cheapest months."));
    assert!(body.contains("$160.83"));
}

#[test]
fn family_search_pages_ten_at_a_time() {
    let (status, body) = page("/search-listings?city=Austin");

    assert_eq!(status, 200);
    assert!(body.contains("6 listings found"));
    assert!(body.contains("Zilker family bungalow with yard"));
    // one page only
    assert!(!body.contains(r#"class="pagination""#));
}

#[test]
fn filter_search_reports_the_first_missing_field() {
    let (_, body) = page("/search-listings?search=filter&amenities=Wifi&min_rating=4.0");
    assert!(body.contains("Please select a city."));

    let (_, body) = page("/search-listings?search=filter&f_city=Austin&min_rating=4.0");
    assert!(body.contains("Please select at least one amenity."));

    let (_, body) = page("/search-listings?search=filter&f_city=Austin&amenities=Wifi");
    assert!(body.contains("Please select a minimum rating."));
    assert!(!body.contains("listings found"));
}

#[test]
fn filter_search_runs_when_valid() {
    let (status, body) = page(
        "/search-listings?search=filter&f_city=Austin&amenities=Wifi&amenities=Kitchen&min_rating=4.8",
    );

    assert_eq!(status, 200);
    assert!(body.contains("7 listings found"));
    assert!(body.contains("Zilker garden cottage"));
}

#[test]
fn listing_details_with_reviews() {
    let (status, body) = page("/listing-details/101?reviews=1&q=great");

    assert_eq!(status, 200);
    assert!(body.contains("6 guests · 3 bedrooms · 4 beds"));
    assert!(body.contains("Sunny bungalow<br>five minutes"));
    assert!(body.contains("2 reviews"));
    assert!(body.contains("Quiet street, great host"));
    assert!(!body.contains("Loved the pool nearby"));
}

#[test]
fn listing_details_errors() {
    let state = init_test_state();

    let err = handle(get_request("/listing-details/424242"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(get_request("/listing-details/abc"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn best_time_shows_all_three_sections() {
    let (status, body) = page("/best-time/101");

    assert_eq!(status, 200);
    assert!(body.contains("$90.00"));
    assert!(body.contains("Christmas week 2023"));
    assert!(body.contains("$310.00"));
    assert!(body.contains("2023-12"));
    assert!(body.contains("width: 100%"));
}

#[test]
fn flexible_instant_listings_paginate() {
    let state = init_test_state();

    let mut resp = get(&state, "/flexible-instant-listings");
    let body = body_string(&mut resp);
    assert_eq!(resp.status(), 200);
    assert!(body.contains("3 listings"));
    assert!(body.contains("Lincoln Park brownstone"));

    // per_page outside the choices falls back to 5
    let mut resp = get(&state, "/flexible-instant-listings?per_page=7&page=2");
    let body = body_string(&mut resp);
    assert!(body.contains(r#"<option value="5" selected>"#));
    assert!(body.contains("Zilker family bungalow with yard"));
}

#[test]
fn login_without_provider() {
    let (status, body) = page("/login");

    assert_eq!(status, 200);
    assert!(body.contains("Sign-in is not available right now."));
}

#[test]
fn weather_fragment_without_key_shows_placeholders() {
    let (status, body) = page("/fragments/weather");

    assert_eq!(status, 200);
    assert!(body.contains("Charlotte"));
    assert!(body.contains("--°F N/A"));
    assert!(!body.contains("<html"));
}

#[test]
fn stylesheet_is_served() {
    let state = init_test_state();
    let resp = get(&state, "/static/main.css");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
}
