// src/handlers/pages.rs

//! Browsing views. Each view reads the same query functions as the Data API
//! and renders them with maud; independent sections load concurrently.

use crate::db::{calendar, listings, reviews};
use crate::domain::catalog::{project_author, AuthorInfo, PROJECT_GROUP, PROJECT_NAMES};
use crate::domain::pagination::{current_page, page_count, paginate};
use crate::domain::search::FilterForm;
use crate::errors::ServerError;
use crate::request::{parse_listing_id, QueryParams};
use crate::responses::{css_response, html_response, redirect, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{self, CityInsightsVm, Paged, ReviewPanel, SearchListingsVm, Section};
use crate::templates::Pager;
use crate::weather::{ticker_reports, TICKER_CITIES};
use std::thread;
use tracing::{error, warn};

const SUPERHOST_PAGE_SIZE: usize = 5;
const SEARCH_PAGE_SIZE: usize = 10;
const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Log a failed section and turn it into its inline message.
fn section<T>(name: &str, result: Result<T, ServerError>) -> Section<T> {
    result.map_err(|err| {
        if err.status() >= 500 {
            error!(section = name, error = %err, "section failed to load");
        } else {
            warn!(section = name, error = %err, "section rejected");
        }
        format!("Could not load {name}. Please try again.")
    })
}

fn joined<T>(outcome: thread::Result<Result<T, ServerError>>) -> Result<T, ServerError> {
    outcome.unwrap_or(Err(ServerError::InternalError))
}

/// Slice one page out of a loaded section.
fn paged<'a, T>(
    result: &'a Section<Vec<T>>,
    pager: impl FnOnce(usize) -> Pager<'a>,
    page_size: usize,
) -> Paged<'a, T> {
    match result {
        Err(msg) => Paged::Failed(msg),
        Ok(rows) => {
            let pager = pager(page_count(rows.len(), page_size));
            Paged::Loaded {
                rows: paginate(rows, pager.current, page_size),
                total_rows: rows.len(),
                pager,
            }
        }
    }
}

// GET /
pub fn home(notice: Option<&str>) -> ResultResp {
    let group = project_author("group").unwrap_or(AuthorInfo {
        data: PROJECT_GROUP,
    });
    let names = project_author("names").unwrap_or(AuthorInfo {
        data: PROJECT_NAMES,
    });
    html_response(pages::home_page(&group, &names, notice))
}

// GET /surprise
pub fn surprise(state: &AppState) -> ResultResp {
    match listings::random_listing(&state.db)? {
        Some(listing) => redirect(&format!("/listing-details/{}", listing.id)),
        None => {
            warn!("no listing rated above 4.9");
            home(Some("No listing found. Try again."))
        }
    }
}

// GET /city-insights?city=&sh_page=
pub fn city_insights(state: &AppState, params: &QueryParams) -> ResultResp {
    let city = params.get("city");

    let (cities, superhost, months, top) = thread::scope(|s| {
        let cities = s.spawn(|| listings::available_cities(&state.db));
        let per_city = city.map(|city| {
            (
                s.spawn(move || calendar::superhost_avg_price(&state.db, city)),
                s.spawn(move || calendar::cheapest_months(&state.db, city)),
                s.spawn(move || listings::top_rated_with_review(&state.db, city)),
            )
        });

        let cities = section("cities", joined(cities.join()));
        match per_city {
            Some((superhost, months, top)) => (
                cities,
                Some(section("superhost prices", joined(superhost.join()))),
                Some(section("cheapest months", joined(months.join()))),
                Some(section("top-rated listings", joined(top.join()))),
            ),
            None => (cities, None, None, None),
        }
    });

    let superhost = match (&superhost, city) {
        (Some(result), Some(city)) => paged(
            result,
            |total| Pager {
                path: "/city-insights",
                keep: vec![("city", city.to_string())],
                param: "sh_page",
                current: current_page(params.get("sh_page"), total),
                total,
            },
            SUPERHOST_PAGE_SIZE,
        ),
        _ => Paged::Idle,
    };

    html_response(pages::city_insights_page(&CityInsightsVm {
        cities: &cities,
        city,
        superhost,
        cheapest_months: months.as_ref(),
        top_rated: top.as_ref(),
    }))
}

// GET /top-city-listings?city=
pub fn top_city_listings(state: &AppState, params: &QueryParams) -> ResultResp {
    let Some(city) = params.get("city") else {
        return redirect("/");
    };
    let rows = listings::top_rated_with_review(&state.db, city)?;
    html_response(pages::top_city_page(city, &rows))
}

// GET /search-listings
//   family search: city=&page=
//   filter search: search=filter&f_city=&amenities=..&min_rating=&fpage=
pub fn search_listings(state: &AppState, params: &QueryParams) -> ResultResp {
    let family_city = params.get("city");
    let filter_submitted = params.get("search") == Some("filter");

    let form = FilterForm {
        city: params.get("f_city").map(str::to_string),
        amenities: params.all("amenities").into_iter().map(str::to_string).collect(),
        min_rating: params.get("min_rating").and_then(|r| r.parse().ok()),
    };

    // An invalid form is answered inline and never reaches the database.
    let (query, form_error) = if filter_submitted {
        match form.validate() {
            Ok(q) => (Some(q), None),
            Err(e) => (None, Some(e.to_string())),
        }
    } else {
        (None, None)
    };

    let (cities, amenities, family, filtered) = thread::scope(|s| {
        let cities = s.spawn(|| listings::available_cities(&state.db));
        let amenities = s.spawn(|| listings::available_amenities(&state.db));
        let family = family_city
            .map(|city| s.spawn(move || listings::high_rated_family_listings(&state.db, city)));
        let filtered = query
            .as_ref()
            .map(|q| s.spawn(move || listings::filtered_sorted_listings(&state.db, q)));

        (
            section("cities", joined(cities.join())),
            section("amenities", joined(amenities.join())),
            family.map(|h| section("family listings", joined(h.join()))),
            filtered.map(|h| section("filtered listings", joined(h.join()))),
        )
    });

    let family = match (&family, family_city) {
        (Some(result), Some(city)) => paged(
            result,
            |total| Pager {
                path: "/search-listings",
                keep: vec![("city", city.to_string())],
                param: "page",
                current: current_page(params.get("page"), total),
                total,
            },
            SEARCH_PAGE_SIZE,
        ),
        _ => Paged::Idle,
    };

    let filtered = match (&filtered, &query) {
        (Some(result), Some(q)) => paged(
            result,
            |total| {
                let mut keep = vec![
                    ("search", "filter".to_string()),
                    ("f_city", q.city.clone()),
                ];
                keep.extend(q.amenities.iter().map(|a| ("amenities", a.clone())));
                keep.push(("min_rating", q.min_rating.to_string()));
                if let Some(city) = family_city {
                    keep.push(("city", city.to_string()));
                }
                Pager {
                    path: "/search-listings",
                    keep,
                    param: "fpage",
                    current: current_page(params.get("fpage"), total),
                    total,
                }
            },
            SEARCH_PAGE_SIZE,
        ),
        _ => Paged::Idle,
    };

    html_response(pages::search_listings_page(&SearchListingsVm {
        cities: &cities,
        amenities: &amenities,
        family_city,
        family,
        form: &form,
        form_error,
        filtered,
    }))
}

// GET /listing-details/{id}?reviews=1&q=
pub fn listing_details(state: &AppState, id: &str, params: &QueryParams) -> ResultResp {
    let listing_id = parse_listing_id(id)?;
    let detail = listings::listing_detail(&state.db, listing_id)?.ok_or(ServerError::NotFound)?;

    let keyword = params.get("q").unwrap_or("");
    let panel = (params.get("reviews") == Some("1")).then(|| ReviewPanel {
        keyword,
        reviews: section(
            "reviews",
            reviews::reviews_with_keyword(&state.db, listing_id, keyword),
        ),
    });

    html_response(pages::listing_details_page(&detail, panel.as_ref()))
}

// GET /best-time/{listing_id}
pub fn best_time(state: &AppState, id: &str) -> ResultResp {
    let listing_id = parse_listing_id(id)?;
    let year = state.config.peak_season_year;

    let (cheapest, trend, christmas) = thread::scope(|s| {
        let cheapest = s.spawn(|| calendar::cheapest_dates(&state.db, listing_id));
        let trend = s.spawn(|| calendar::monthly_price_trend(&state.db, listing_id));
        let christmas = s.spawn(|| calendar::christmas_price(&state.db, listing_id, year));
        (
            section("cheapest dates", joined(cheapest.join())),
            section("monthly prices", joined(trend.join())),
            section("Christmas prices", joined(christmas.join())),
        )
    });

    html_response(pages::best_time_page(
        &listing_id.to_string(),
        &cheapest,
        &trend,
        &christmas,
        year,
    ))
}

// GET /flexible-instant-listings?page=&per_page=
pub fn flexible_instant_listings(state: &AppState, params: &QueryParams) -> ResultResp {
    let per_page = params
        .get("per_page")
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| pages::PER_PAGE_CHOICES.contains(n))
        .unwrap_or(pages::PER_PAGE_CHOICES[0]);

    let rows = listings::flexible_instant_listings(&state.db)?;
    let total = page_count(rows.len(), per_page);
    let pager = Pager {
        path: "/flexible-instant-listings",
        keep: vec![("per_page", per_page.to_string())],
        param: "page",
        current: current_page(params.get("page"), total),
        total,
    };

    html_response(pages::flexible_instant_page(
        paginate(&rows, pager.current, per_page),
        rows.len(),
        per_page,
        &pager,
    ))
}

// GET /login
pub fn login(state: &AppState) -> ResultResp {
    html_response(pages::login_page(state.config.auth_url.as_deref()))
}

// GET /fragments/weather
pub fn weather_fragment(state: &AppState) -> ResultResp {
    let reports = ticker_reports(state.config.weather_api_key.as_deref(), TICKER_CITIES);
    html_response(pages::weather_ticker(&reports))
}

// GET /static/main.css
pub fn stylesheet() -> ResultResp {
    css_response(MAIN_CSS)
}
