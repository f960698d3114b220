// templates/pages/home.rs

use crate::domain::catalog::{AuthorInfo, FEATURED_CITIES};
use crate::templates::{
    components::{card, inline_error},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(group: &AuthorInfo, names: &AuthorInfo, notice: Option<&str>) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Find your next stay" }
                    p class="lead" {
                        "Browse top-rated listings, compare prices across the year and find the cheapest time to travel."
                    }

                    form method="get" action="/top-city-listings" class="inline-form" {
                        label for="hero-city" class="sr-only" { "City" }
                        input type="text" id="hero-city" name="city" placeholder="Where to?" required;
                        button type="submit" class="primary" { "Show top listings" }
                    }

                    a href="/surprise" class="button secondary" { "Surprise me" }

                    @if let Some(msg) = notice {
                        (inline_error(msg))
                    }
                }

                section {
                    h2 { "Featured cities" }
                    div class="city-grid" {
                        @for city in FEATURED_CITIES {
                            div class="city-card" {
                                h3 { (city) }
                                a href=(city_href("/city-insights", city)) { "City insights" }
                                " · "
                                a href=(city_href("/top-city-listings", city)) { "Top listings" }
                            }
                        }
                    }
                }

                footer class="site-footer" {
                    (card("About this project", html! {
                        p { strong { (group.data) } }
                        p class="muted" { (names.data) }
                    }))
                }
            }
        },
    )
}

fn city_href(path: &str, city: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("city", city)
        .finish();
    format!("{path}?{query}")
}
