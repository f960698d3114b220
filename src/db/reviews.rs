use crate::db::connection::Database;
use crate::db::listings::query_rows;
use crate::domain::review::Review;
use crate::errors::ServerError;
use rusqlite::params;

/// Reviews of a listing whose comments contain `keyword` (case-insensitive).
/// An empty keyword returns every review.
pub fn reviews_with_keyword(
    db: &Database,
    listing_id: i64,
    keyword: &str,
) -> Result<Vec<Review>, ServerError> {
    query_rows(
        db,
        r#"
        SELECT
            CAST(r.review_id AS TEXT) AS review_id,
            CAST(r.listing_id AS TEXT) AS listing_id,
            r.comments,
            r.date,
            r.reviewer_name
        FROM reviews r
        WHERE r.listing_id = ?1
          AND r.comments LIKE '%' || ?2 || '%'
        ORDER BY r.date DESC, r.review_id
        "#,
        params![listing_id, keyword],
        |row| {
            Ok(Review {
                review_id: row.get(0)?,
                listing_id: row.get(1)?,
                comments: row.get(2)?,
                date: row.get(3)?,
                reviewer_name: row.get(4)?,
            })
        },
    )
}
