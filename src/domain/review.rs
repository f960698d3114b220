use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub review_id: String,
    pub listing_id: String,
    pub comments: Option<String>,
    pub date: Option<NaiveDate>,
    pub reviewer_name: Option<String>,
}
