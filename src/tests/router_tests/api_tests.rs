// src/tests/router_tests/api_tests.rs

use crate::router::{handle, respond};
use crate::tests::utils::{get, get_json, get_request, ids, init_test_state};
use serde_json::json;

const BIG_ID: &str = "900000000000000001";

#[test]
fn family_listings_match_city_rating_and_size() {
    let state = init_test_state();
    let (status, rows) = get_json(&state, "/high_rated_family_listings?city=austin");

    assert_eq!(status, 200);
    assert_eq!(ids(&rows, "id"), vec![BIG_ID, "101", "110", "105", "104", "107"]);
    for row in rows.as_array().unwrap() {
        assert!(row["review_scores_rating"].as_f64().unwrap() > 4.8);
        assert!(row["accommodates"].as_i64().unwrap() >= 4);
    }
}

#[test]
fn family_listings_require_city() {
    let state = init_test_state();

    let (status, body) = get_json(&state, "/high_rated_family_listings");
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "City name is required." }));

    let (status, _) = get_json(&state, "/high_rated_family_listings?city=");
    assert_eq!(status, 400);
}

#[test]
fn api_responses_allow_any_origin() {
    let state = init_test_state();
    let resp = get(&state, "/available_cities");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    assert_eq!(resp.headers()["Content-Type"], "application/json");
}

#[test]
fn reviews_filter_by_keyword_case_insensitively() {
    let state = init_test_state();

    let (status, rows) = get_json(&state, "/reviews/101?q=great");
    assert_eq!(status, 200);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for r in rows {
        assert_eq!(r["listing_id"], "101");
        assert!(r["comments"].as_str().unwrap().to_lowercase().contains("great"));
    }
    // newest first
    assert_eq!(rows[0]["date"], "2023-10-03");

    let (_, all) = get_json(&state, "/reviews/101");
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[test]
fn non_numeric_listing_id_is_rejected() {
    let state = init_test_state();
    for uri in [
        "/reviews/abc",
        "/cheapest_dates/abc",
        "/averageChristmasPrice/abc",
        "/monthly_price_trend/abc",
        "/listings/abc",
    ] {
        let (status, body) = get_json(&state, uri);
        assert_eq!(status, 400, "{uri}");
        assert_eq!(body["error"], "Listing ID must be numeric.");
    }
}

#[test]
fn flexible_instant_listings_are_unique_and_by_price() {
    let state = init_test_state();
    let (status, rows) = get_json(&state, "/flexible_instant_listings");

    assert_eq!(status, 200);
    assert_eq!(ids(&rows, "listing_id"), vec!["201", "102", "101"]);

    let prices: Vec<f64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["overall_avg_price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![390.0, 205.0, 198.57]);
}

#[test]
fn cheapest_dates_are_available_priced_and_ascending() {
    let state = init_test_state();
    let (status, rows) = get_json(&state, "/cheapest_dates/101");

    assert_eq!(status, 200);
    assert_eq!(
        rows,
        json!([
            { "listing_id": "101", "date": "2024-01-05", "price": 90.0 },
            { "listing_id": "101", "date": "2023-11-11", "price": 120.0 },
            { "listing_id": "101", "date": "2023-11-10", "price": 150.0 }
        ])
    );

    let (_, none) = get_json(&state, "/cheapest_dates/12345");
    assert_eq!(none, json!([]));
}

#[test]
fn christmas_price_averages_the_week() {
    let state = init_test_state();
    let (status, rows) = get_json(&state, "/averageChristmasPrice/101");

    assert_eq!(status, 200);
    assert_eq!(
        rows,
        json!([{ "neighbourhood": "Zilker", "avg_price_christmas": 310.0 }])
    );
}

#[test]
fn superhost_prices_per_neighborhood() {
    let state = init_test_state();
    let (status, rows) = get_json(&state, "/superhost_avg_price/austin");

    assert_eq!(status, 200);
    assert_eq!(
        rows,
        json!([
            { "neighbourhood": "East Austin", "avg_price": 500.0 },
            { "neighbourhood": "Zilker", "avg_price": 160.83 }
        ])
    );
}

#[test]
fn filtered_listings_list_matched_amenities() {
    let state = init_test_state();
    let (status, rows) = get_json(
        &state,
        "/filtered_sorted_listings?amenities=Wifi,Kitchen&min_rating=4.8&city=Austin",
    );

    assert_eq!(status, 200);
    assert_eq!(
        ids(&rows, "listing_id"),
        vec![BIG_ID, "102", "110", "101", "105", "104", "107"]
    );

    let rows = rows.as_array().unwrap();
    let bungalow = rows.iter().find(|r| r["listing_id"] == "101").unwrap();
    let list = bungalow["amenities_list"].as_str().unwrap();
    assert!(list.contains("Wifi") && list.contains("Kitchen"));
    assert!(!list.contains("Free parking"));

    for r in rows {
        assert!(r["review_scores_rating"].as_f64().unwrap() >= 4.8);
    }
}

#[test]
fn filtered_listings_validate_parameters() {
    let state = init_test_state();

    let (status, body) = get_json(&state, "/filtered_sorted_listings?min_rating=4&city=Austin");
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing amenities or minimum rating, or city.");

    let (status, _) = get_json(&state, "/filtered_sorted_listings?amenities=Wifi&city=Austin");
    assert_eq!(status, 400);

    let (status, body) = get_json(
        &state,
        "/filtered_sorted_listings?amenities=Wifi&min_rating=high&city=Austin",
    );
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Minimum rating must be a number.");
}

#[test]
fn catalog_lists_are_distinct_and_sorted() {
    let state = init_test_state();

    let (_, cities) = get_json(&state, "/available_cities");
    assert_eq!(cities, json!([{ "city": "Austin" }, { "city": "Chicago" }]));

    let (_, amenities) = get_json(&state, "/available_amenities");
    assert_eq!(
        ids(&amenities, "amenities"),
        vec![
            "Free parking on premises",
            "Free parking on street",
            "Kitchen",
            "Pool",
            "Wifi"
        ]
    );
}

#[test]
fn top_rated_ranks_are_sequential() {
    let state = init_test_state();
    let (status, rows) = get_json(&state, "/top_rated_with_review?city=Austin");

    assert_eq!(status, 200);
    assert_eq!(
        ids(&rows, "id"),
        vec![BIG_ID, "102", "110", "101", "105", "104", "107", "108", "103", "106"]
    );

    for (i, row) in rows.as_array().unwrap().iter().enumerate() {
        assert_eq!(row["rank"], json!(i + 1));
        assert!(row["random_review"].is_string());
    }

    let (_, chicago) = get_json(&state, "/top_rated_with_review?city=chic");
    assert_eq!(ids(&chicago, "id"), vec!["201", "202"]);
}

#[test]
fn cheapest_months_for_city() {
    let state = init_test_state();
    let (status, rows) = get_json(&state, "/cheapest_months?city=AUSTIN");

    assert_eq!(status, 200);
    assert_eq!(
        rows,
        json!([
            { "month": "2024-01", "avg_price": 85.0 },
            { "month": "2024-02", "avg_price": 210.0 },
            { "month": "2023-12", "avg_price": 246.0 }
        ])
    );

    let (status, _) = get_json(&state, "/cheapest_months");
    assert_eq!(status, 400);
}

#[test]
fn monthly_trend_is_chronological() {
    let state = init_test_state();
    let (status, rows) = get_json(&state, "/monthly_price_trend/101");

    assert_eq!(status, 200);
    assert_eq!(
        rows,
        json!([
            { "month": "2023-11", "avg_monthly_price": 135.0, "listing_id": "101" },
            { "month": "2023-12", "avg_monthly_price": 290.0, "listing_id": "101" },
            { "month": "2024-01", "avg_monthly_price": 90.0, "listing_id": "101" }
        ])
    );
}

#[test]
fn random_listing_is_highly_rated() {
    let state = init_test_state();
    let allowed = ["101", "102", "110", BIG_ID, "201", "203"];

    for _ in 0..5 {
        let (status, body) = get_json(&state, "/random_listing");
        assert_eq!(status, 200);
        let id = body["id"].as_str().unwrap();
        assert!(allowed.contains(&id), "unexpected {id}");
    }
}

#[test]
fn project_author_by_type() {
    let state = init_test_state();

    let (status, body) = get_json(&state, "/project_author/group");
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "data": "Group 7" }));

    let (status, body) = get_json(&state, "/project_author/names");
    assert_eq!(status, 200);
    assert!(body["data"].as_str().unwrap().contains("Ting Zhu"));

    let (status, _) = get_json(&state, "/project_author/unknown");
    assert_eq!(status, 400);
}

#[test]
fn listing_detail_keeps_full_precision_id() {
    let state = init_test_state();

    let (status, body) = get_json(&state, &format!("/listings/{BIG_ID}"));
    assert_eq!(status, 200);
    assert_eq!(body["id"], BIG_ID);
    assert_eq!(body["accommodates"], 4);
    assert_eq!(body["instant_bookable"], true);
    assert_eq!(body["review_scores_rating"], 5.0);

    let (status, body) = get_json(&state, "/listings/424242");
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[test]
fn unknown_paths_are_not_found() {
    let state = init_test_state();

    assert!(handle(get_request("/no_such_endpoint"), &state).is_err());

    let mut req = get_request("/no_such_endpoint");
    req.headers_mut()
        .insert("Accept", "application/json".parse().unwrap());
    let resp = respond(req, &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let resp = respond(get_request("/no_such_page"), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
}

#[test]
fn query_failures_hide_the_cause() {
    let state = init_test_state();
    state
        .db
        .with_conn(|conn| {
            conn.execute_batch("DROP VIEW city_monthly_avg;")
                .map_err(crate::errors::ServerError::from)
        })
        .unwrap();

    let (status, body) = get_json(&state, "/cheapest_months?city=Austin");
    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}
