// templates/pages/search_listings.rs

use crate::domain::catalog::{AmenityOption, CityOption};
use crate::domain::listing::{FamilyListing, FilteredListing};
use crate::domain::search::FilterForm;
use crate::templates::components::{empty_state, inline_error, pagination_nav};
use crate::templates::desktop_layout;
use crate::templates::pages::{Paged, Section};
use maud::{html, Markup};

const RATING_CHOICES: &[&str] = &["3.0", "3.5", "4.0", "4.5", "4.8"];

pub struct SearchListingsVm<'a> {
    pub cities: &'a Section<Vec<CityOption>>,
    pub amenities: &'a Section<Vec<AmenityOption>>,
    pub family_city: Option<&'a str>,
    pub family: Paged<'a, FamilyListing>,
    pub form: &'a FilterForm,
    pub form_error: Option<String>,
    pub filtered: Paged<'a, FilteredListing>,
}

pub fn search_listings_page(vm: &SearchListingsVm) -> Markup {
    desktop_layout(
        "Search Listings",
        html! {
            main class="container" {
                h1 { "Search Listings" }

                section class="card" id="family-search" {
                    h2 { "Family-friendly stays" }
                    p class="muted" { "Rated above 4.8 and sleeping at least four." }
                    form method="get" action="/search-listings" class="inline-form" {
                        label for="family-city" { "City" }
                        input
                            type="text"
                            id="family-city"
                            name="city"
                            value=[vm.family_city]
                            placeholder="e.g. Austin"
                            required;
                        button type="submit" class="primary" { "Search" }
                    }
                    (family_results(&vm.family))
                }

                section class="card" id="filter-search" {
                    h2 { "Filter by amenities" }
                    (filter_form(vm))
                    @if let Some(msg) = &vm.form_error {
                        (inline_error(msg))
                    }
                    (filtered_results(&vm.filtered))
                }
            }
        },
    )
}

fn filter_form(vm: &SearchListingsVm) -> Markup {
    let selected_rating = vm.form.min_rating.map(|r| format!("{r:.1}"));

    html! {
        form method="get" action="/search-listings" class="filter-form" {
            input type="hidden" name="search" value="filter";

            label for="filter-city" { "City" }
            @match vm.cities {
                Ok(cities) => {
                    select id="filter-city" name="f_city" {
                        option value="" selected[vm.form.city.is_none()] { "Select a city..." }
                        @for c in cities {
                            option value=(c.city) selected[vm.form.city.as_deref() == Some(c.city.as_str())] { (c.city) }
                        }
                    }
                },
                Err(msg) => {
                    input type="text" id="filter-city" name="f_city" value=[vm.form.city.as_deref()];
                    (inline_error(msg))
                },
            }

            fieldset {
                legend { "Amenities" }
                @match vm.amenities {
                    Ok(options) => {
                        div class="amenity-options" {
                            @for a in options {
                                label class="checkbox" {
                                    input
                                        type="checkbox"
                                        name="amenities"
                                        value=(a.amenities)
                                        checked[vm.form.amenities.contains(&a.amenities)];
                                    " " (a.amenities)
                                }
                            }
                        }
                    },
                    Err(msg) => (inline_error(msg)),
                }
            }

            label for="filter-rating" { "Minimum rating" }
            select id="filter-rating" name="min_rating" {
                option value="" selected[selected_rating.is_none()] { "Any..." }
                @for r in RATING_CHOICES {
                    option value=(r) selected[selected_rating.as_deref() == Some(*r)] { (r) "+" }
                }
            }

            button type="submit" class="primary" { "Apply filters" }
        }
    }
}

fn family_results(section: &Paged<FamilyListing>) -> Markup {
    html! {
        @match section {
            Paged::Idle => {},
            Paged::Failed(msg) => (inline_error(msg)),
            Paged::Loaded { total_rows: 0, .. } => (empty_state("No listings match this city.")),
            Paged::Loaded { rows, total_rows, pager } => {
                p class="muted" { (total_rows) " listings found" }
                table {
                    thead {
                        tr { th { "Name" } th { "Neighborhood" } th { "Guests" } th { "Bedrooms" } th { "Beds" } th { "Rating" } }
                    }
                    tbody {
                        @for row in *rows {
                            tr {
                                td { a href=(format!("/listing-details/{}", row.id)) { (row.name) } }
                                td { (row.neighbourhood) }
                                td { (row.accommodates) }
                                td { (opt(row.bedrooms)) }
                                td { (opt(row.beds)) }
                                td { (rating(row.review_scores_rating)) }
                            }
                        }
                    }
                }
                (pagination_nav(pager))
            },
        }
    }
}

fn filtered_results(section: &Paged<FilteredListing>) -> Markup {
    html! {
        @match section {
            Paged::Idle => {},
            Paged::Failed(msg) => (inline_error(msg)),
            Paged::Loaded { total_rows: 0, .. } => (empty_state("No listings match these filters.")),
            Paged::Loaded { rows, total_rows, pager } => {
                p class="muted" { (total_rows) " listings found" }
                table {
                    thead {
                        tr { th { "Name" } th { "Neighborhood" } th { "Rating" } th { "Reviews" } th { "Matching amenities" } }
                    }
                    tbody {
                        @for row in *rows {
                            tr {
                                td { a href=(format!("/listing-details/{}", row.listing_id)) { (row.listing_name) } }
                                td { (row.neighbourhood) }
                                td { (rating(row.review_scores_rating)) }
                                td { (row.number_of_reviews) }
                                td { (row.amenities_list.as_deref().unwrap_or("")) }
                            }
                        }
                    }
                }
                (pagination_nav(pager))
            },
        }
    }
}

fn opt(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn rating(value: Option<f64>) -> String {
    value.map(|r| format!("{r:.2}")).unwrap_or_else(|| "-".to_string())
}
