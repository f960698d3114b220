// templates/pages/city_insights.rs

use crate::domain::catalog::CityOption;
use crate::domain::listing::TopRatedListing;
use crate::domain::pricing::{CheapestMonth, SuperhostPrice};
use crate::templates::components::{empty_state, inline_error, pagination_nav};
use crate::templates::desktop_layout;
use crate::templates::pages::{Paged, Section};
use maud::{html, Markup};

pub struct CityInsightsVm<'a> {
    pub cities: &'a Section<Vec<CityOption>>,
    pub city: Option<&'a str>,
    pub superhost: Paged<'a, SuperhostPrice>,
    pub cheapest_months: Option<&'a Section<Vec<CheapestMonth>>>,
    pub top_rated: Option<&'a Section<Vec<TopRatedListing>>>,
}

pub fn city_insights_page(vm: &CityInsightsVm) -> Markup {
    desktop_layout(
        "City Insights",
        html! {
            main class="container" {
                h1 { "City Insights" }

                form method="get" action="/city-insights" class="inline-form" {
                    label for="insights-city" { "City" }
                    @match vm.cities {
                        Ok(cities) => {
                            select id="insights-city" name="city" required {
                                option value="" disabled selected[vm.city.is_none()] { "Select a city..." }
                                @for c in cities {
                                    option value=(c.city) selected[vm.city == Some(c.city.as_str())] { (c.city) }
                                }
                            }
                        },
                        Err(msg) => {
                            input type="text" id="insights-city" name="city" value=[vm.city] required;
                            (inline_error(msg))
                        },
                    }
                    button type="submit" class="primary" { "Show insights" }
                }

                @if let Some(city) = vm.city {
                    h2 { (city) }

                    div class="insights-grid" {
                        section class="card" id="superhost-prices" {
                            h3 { "Superhost prices by neighborhood" }
                            (superhost_table(&vm.superhost))
                        }

                        section class="card" id="cheapest-months" {
                            h3 { "Cheapest months to visit" }
                            @if let Some(months) = vm.cheapest_months {
                                (cheapest_months_list(months))
                            }
                        }
                    }

                    section class="card" id="top-rated" {
                        h3 { "Top-rated listings" }
                        @if let Some(top) = vm.top_rated {
                            (top_rated_list(top))
                        }
                    }
                }
            }
        },
    )
}

fn superhost_table(section: &Paged<SuperhostPrice>) -> Markup {
    html! {
        @match section {
            Paged::Idle => {},
            Paged::Failed(msg) => (inline_error(msg)),
            Paged::Loaded { rows, total_rows, pager } => {
                @if *total_rows == 0 {
                    (empty_state("No superhost prices for this city."))
                } @else {
                    table {
                        thead { tr { th { "Neighborhood" } th { "Average price" } } }
                        tbody {
                            @for row in *rows {
                                tr {
                                    td { (row.neighbourhood) }
                                    td { (money(row.avg_price)) }
                                }
                            }
                        }
                    }
                    (pagination_nav(pager))
                }
            },
        }
    }
}

fn cheapest_months_list(section: &Section<Vec<CheapestMonth>>) -> Markup {
    html! {
        @match section {
            Err(msg) => (inline_error(msg)),
            Ok(months) if months.is_empty() => (empty_state("No pricing data for this city.")),
            Ok(months) => {
                ol {
                    @for m in months {
                        li { strong { (m.month) } " · " (money(Some(m.avg_price))) " per night" }
                    }
                }
            },
        }
    }
}

fn top_rated_list(section: &Section<Vec<TopRatedListing>>) -> Markup {
    html! {
        @match section {
            Err(msg) => (inline_error(msg)),
            Ok(rows) if rows.is_empty() => (empty_state("No rated listings for this city.")),
            Ok(rows) => {
                ol class="top-rated" {
                    @for row in rows {
                        li {
                            a href=(format!("/listing-details/{}", row.id)) { (row.name) }
                            " · " (row.neighborhood)
                            @if let Some(r) = row.review_scores_rating {
                                " · ★ " (format!("{r:.2}"))
                            }
                        }
                    }
                }
            },
        }
    }
}

pub(crate) fn money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => "N/A".to_string(),
    }
}
