use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CheapestDate {
    pub listing_id: String,
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChristmasPrice {
    pub neighbourhood: String,
    pub avg_price_christmas: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuperhostPrice {
    pub neighbourhood: String,
    pub avg_price: Option<f64>,
}

/// `month` is "YYYY-MM".
#[derive(Debug, Clone, Serialize)]
pub struct CheapestMonth {
    pub month: String,
    pub avg_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyPrice {
    pub month: String,
    pub avg_monthly_price: f64,
    pub listing_id: String,
}

/// Inclusive Dec 20-26 window of `year`.
pub fn christmas_week(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 12, 20)?,
        NaiveDate::from_ymd_opt(year, 12, 26)?,
    ))
}
