// templates/pages/best_time.rs

use crate::domain::pricing::{CheapestDate, ChristmasPrice, MonthlyPrice};
use crate::templates::components::{empty_state, inline_error};
use crate::templates::desktop_layout;
use crate::templates::pages::city_insights::money;
use crate::templates::pages::Section;
use maud::{html, Markup};

pub fn best_time_page(
    listing_id: &str,
    cheapest: &Section<Vec<CheapestDate>>,
    trend: &Section<Vec<MonthlyPrice>>,
    christmas: &Section<Vec<ChristmasPrice>>,
    peak_year: i32,
) -> Markup {
    desktop_layout(
        "Best time to book",
        html! {
            main class="container" {
                h1 { "Best time to book" }
                p { a href=(format!("/listing-details/{listing_id}")) { "← Back to listing " (listing_id) } }

                div class="insights-grid" {
                    section class="card" id="cheapest-dates" {
                        h3 { "Cheapest available nights" }
                        @match cheapest {
                            Err(msg) => (inline_error(msg)),
                            Ok(rows) if rows.is_empty() => (empty_state("No available nights with a price.")),
                            Ok(rows) => {
                                ol {
                                    @for d in rows {
                                        li { strong { (d.date.format("%a, %b %-d %Y").to_string()) } " · " (money(Some(d.price))) }
                                    }
                                }
                            },
                        }
                    }

                    section class="card" id="christmas-price" {
                        h3 { "Christmas week " (peak_year) }
                        @match christmas {
                            Err(msg) => (inline_error(msg)),
                            Ok(rows) if rows.is_empty() => (empty_state("No prices for Christmas week.")),
                            Ok(rows) => {
                                @for row in rows {
                                    p { (row.neighbourhood) ": " strong { (money(row.avg_price_christmas)) } " per night" }
                                }
                            },
                        }
                    }
                }

                section class="card" id="monthly-trend" {
                    h3 { "Average price by month" }
                    @match trend {
                        Err(msg) => (inline_error(msg)),
                        Ok(rows) if rows.is_empty() => (empty_state("No monthly prices yet.")),
                        Ok(rows) => (trend_chart(rows)),
                    }
                }
            }
        },
    )
}

fn trend_chart(rows: &[MonthlyPrice]) -> Markup {
    let max = rows
        .iter()
        .map(|r| r.avg_monthly_price)
        .fold(0.0_f64, f64::max);

    html! {
        div class="bar-chart" {
            @for row in rows {
                div class="bar-row" {
                    span class="bar-label" { (row.month) }
                    span class="bar-track" {
                        span class="bar" style=(format!("width: {:.0}%", bar_percent(row.avg_monthly_price, max))) {}
                    }
                    span class="bar-value" { (money(Some(row.avg_monthly_price))) }
                }
            }
        }
    }
}

fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_priciest_month() {
        assert_eq!(bar_percent(145.0, 290.0), 50.0);
        assert_eq!(bar_percent(290.0, 290.0), 100.0);
        assert_eq!(bar_percent(10.0, 0.0), 0.0);
    }
}
