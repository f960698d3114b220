use crate::domain::listing::InstantListing;
use crate::templates::components::{empty_state, pagination_nav, Pager};
use crate::templates::desktop_layout;
use crate::templates::pages::city_insights::money;
use maud::{html, Markup};

/// Rows-per-page options; the first is the default.
pub const PER_PAGE_CHOICES: &[usize] = &[5, 10, 25];

pub fn flexible_instant_page(
    rows: &[InstantListing],
    total_rows: usize,
    per_page: usize,
    pager: &Pager,
) -> Markup {
    desktop_layout(
        "Instant Bookables",
        html! {
            main class="container" {
                h1 { "Instant-bookable stays with free parking" }

                form method="get" action="/flexible-instant-listings" class="inline-form" {
                    label for="per-page" { "Rows per page" }
                    select id="per-page" name="per_page" onchange="this.form.submit()" {
                        @for n in PER_PAGE_CHOICES {
                            option value=(n) selected[*n == per_page] { (n) }
                        }
                    }
                    noscript { button type="submit" { "Apply" } }
                }

                @if total_rows == 0 {
                    (empty_state("No instant-bookable listings with free parking."))
                } @else {
                    p class="muted" { (total_rows) " listings" }
                    table {
                        thead {
                            tr { th { "Name" } th { "Neighborhood" } th { "Rating" } th { "Average price" } }
                        }
                        tbody {
                            @for row in rows {
                                tr {
                                    td { a href=(format!("/listing-details/{}", row.listing_id)) { (row.name) } }
                                    td { (row.neighbourhood) }
                                    td {
                                        @match row.review_scores_rating {
                                            Some(r) => (format!("{r:.2}")),
                                            None => "-",
                                        }
                                    }
                                    td { (money(row.overall_avg_price)) }
                                }
                            }
                        }
                    }
                    (pagination_nav(pager))
                }
            }
        },
    )
}
