pub mod best_time;
pub mod city_insights;
pub mod flexible_instant;
pub mod home;
pub mod listing_details;
pub mod login;
pub mod search_listings;
pub mod top_city;
pub mod weather;

pub use best_time::best_time_page;
pub use city_insights::{city_insights_page, CityInsightsVm};
pub use flexible_instant::{flexible_instant_page, PER_PAGE_CHOICES};
pub use home::home_page;
pub use listing_details::{listing_details_page, ReviewPanel};
pub use login::login_page;
pub use search_listings::{search_listings_page, SearchListingsVm};
pub use top_city::top_city_page;
pub use weather::weather_ticker;

use crate::templates::components::Pager;

/// One independently loaded part of a page. `Err` holds the inline message.
pub type Section<T> = Result<T, String>;

/// A result table that may not have been requested yet.
pub enum Paged<'a, T> {
    Idle,
    Failed(&'a str),
    Loaded {
        rows: &'a [T],
        total_rows: usize,
        pager: Pager<'a>,
    },
}
