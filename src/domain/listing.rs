use serde::Serialize;

// Field names follow the dataset's column aliases. Ids are serialised as strings
// to keep all 64 bits.

/// Row of `/high_rated_family_listings`.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyListing {
    pub id: String,
    pub name: String,
    pub neighbourhood: String,
    pub beds: Option<i64>,
    pub bedrooms: Option<i64>,
    pub accommodates: i64,
    pub review_scores_rating: Option<f64>,
}

/// Instant-bookable listing with free parking and its overall average nightly price.
#[derive(Debug, Clone, Serialize)]
pub struct InstantListing {
    pub listing_id: String,
    pub name: String,
    pub neighbourhood: String,
    pub review_scores_rating: Option<f64>,
    pub overall_avg_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilteredListing {
    pub listing_id: String,
    pub listing_name: String,
    pub neighbourhood: String,
    pub review_scores_rating: Option<f64>,
    pub number_of_reviews: i64,
    /// Matched amenity labels joined with ", ".
    pub amenities_list: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopRatedListing {
    pub id: String,
    pub rank: i64,
    pub name: String,
    pub neighborhood: String,
    pub room_type: Option<String>,
    pub listing_url: Option<String>,
    pub picture_url: Option<String>,
    pub accommodates: i64,
    pub review_scores_rating: Option<f64>,
    pub number_of_reviews: i64,
    pub random_review: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RandomListing {
    pub id: String,
}

/// Every column of `listings_detailed`.
#[derive(Debug, Clone, Serialize)]
pub struct ListingDetail {
    pub id: String,
    pub description: Option<String>,
    pub listing_url: Option<String>,
    pub picture_url: Option<String>,
    pub bedrooms: Option<i64>,
    pub beds: Option<i64>,
    pub number_of_reviews: i64,
    pub accommodates: i64,
    pub instant_bookable: bool,
    pub review_scores_rating: Option<f64>,
}

impl ListingDetail {
    /// "4 guests · 2 bedrooms · 1 bed"
    pub fn basics_line(&self) -> String {
        let mut parts = vec![plural(self.accommodates, "guest")];
        if let Some(n) = self.bedrooms {
            parts.push(plural(n, "bedroom"));
        }
        if let Some(n) = self.beds {
            parts.push(plural(n, "bed"));
        }
        parts.join(" · ")
    }
}

fn plural(n: i64, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Cut `text` to at most `max` characters, appending "..." when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
