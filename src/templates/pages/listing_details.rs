use crate::domain::listing::ListingDetail;
use crate::domain::review::Review;
use crate::templates::components::{empty_state, inline_error};
use crate::templates::desktop_layout;
use crate::templates::pages::Section;
use maud::{html, Markup, PreEscaped};

/// Review list opened with `?reviews=1&q=`.
pub struct ReviewPanel<'a> {
    pub keyword: &'a str,
    pub reviews: Section<Vec<Review>>,
}

pub fn listing_details_page(detail: &ListingDetail, panel: Option<&ReviewPanel>) -> Markup {
    let self_href = format!("/listing-details/{}", detail.id);

    desktop_layout(
        "Listing details",
        html! {
            main class="container" {
                div class="detail-layout" {
                    @if let Some(src) = &detail.picture_url {
                        img class="detail-photo" src=(src) alt="Listing photo";
                    }

                    div class="detail-body" {
                        h1 { "Listing " (detail.id) }
                        p class="lead" { (detail.basics_line()) }
                        p {
                            @if let Some(r) = detail.review_scores_rating {
                                "★ " (format!("{r:.2}")) " · "
                            }
                            (detail.number_of_reviews) " reviews"
                            @if detail.instant_bookable {
                                " · " span class="badge" { "Instant book" }
                            }
                        }

                        @if let Some(desc) = &detail.description {
                            // descriptions carry the host's own <br /> markup
                            div class="description" { (PreEscaped(sanitize_breaks(desc))) }
                        }

                        p class="actions" {
                            a class="button primary" href=(format!("/best-time/{}", detail.id)) { "Best time to book" }
                            @if let Some(url) = &detail.listing_url {
                                " "
                                a class="button secondary" href=(url) target="_blank" rel="noopener" { "View on Airbnb" }
                            }
                        }
                    }
                }

                section class="card" id="reviews" {
                    h2 { "Reviews" }
                    form method="get" action=(self_href) class="inline-form" {
                        input type="hidden" name="reviews" value="1";
                        label for="review-q" class="sr-only" { "Keyword" }
                        input
                            type="search"
                            id="review-q"
                            name="q"
                            placeholder="Search reviews"
                            value=[panel.map(|p| p.keyword)];
                        button type="submit" { "Show reviews" }
                    }

                    @if let Some(panel) = panel {
                        @match &panel.reviews {
                            Err(msg) => (inline_error(msg)),
                            Ok(reviews) if reviews.is_empty() => (empty_state("No reviews match.")),
                            Ok(reviews) => {
                                p class="muted" { (reviews.len()) " reviews" }
                                ul class="review-list" {
                                    @for r in reviews {
                                        li {
                                            p class="review-meta" {
                                                strong { (r.reviewer_name.as_deref().unwrap_or("Guest")) }
                                                @if let Some(d) = r.date { " · " (d.format("%b %-d, %Y").to_string()) }
                                            }
                                            p { (r.comments.as_deref().unwrap_or("")) }
                                        }
                                    }
                                }
                            },
                        }
                    }
                }
            }
        },
    )
}

/// Escape everything, then restore the line breaks hosts write as `<br />`.
fn sanitize_breaks(text: &str) -> String {
    let escaped = html! { (text) }.into_string();
    escaped
        .replace("&lt;br /&gt;", "<br>")
        .replace("&lt;br/&gt;", "<br>")
        .replace("&lt;br&gt;", "<br>")
}
