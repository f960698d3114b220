use crate::domain::listing::{truncate, TopRatedListing};
use crate::templates::components::{empty_state, listing_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const NAME_CHARS: usize = 65;
const REVIEW_CHARS: usize = 150;

pub fn top_city_page(city: &str, rows: &[TopRatedListing]) -> Markup {
    desktop_layout(
        &format!("Top listings in {city}"),
        html! {
            main class="container" {
                h1 { "Top-rated stays in " (city) }

                @if rows.is_empty() {
                    (empty_state("No rated listings found for this city."))
                } @else {
                    div class="card-grid" {
                        @for row in rows {
                            (listing_card(
                                &format!("/listing-details/{}", row.id),
                                row.picture_url.as_deref(),
                                &truncate(&row.name, NAME_CHARS),
                                html! {
                                    p class="rank" { "#" (row.rank) }
                                    p class="muted" {
                                        (row.neighborhood)
                                        @if let Some(room) = &row.room_type { " · " (room) }
                                    }
                                    p {
                                        @if let Some(r) = row.review_scores_rating { "★ " (format!("{r:.2}")) }
                                        " (" (row.number_of_reviews) " reviews) · sleeps " (row.accommodates)
                                    }
                                    @if let Some(review) = &row.random_review {
                                        blockquote { (truncate(review, REVIEW_CHARS)) }
                                    }
                                    @if let Some(url) = &row.listing_url {
                                        a href=(url) target="_blank" rel="noopener" { "View on Airbnb" }
                                    }
                                },
                            ))
                        }
                    }
                }
            }
        },
    )
}
