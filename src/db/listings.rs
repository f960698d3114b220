use crate::db::connection::Database;
use crate::domain::catalog::{AmenityOption, CityOption};
use crate::domain::listing::{
    FamilyListing, FilteredListing, InstantListing, ListingDetail, RandomListing, TopRatedListing,
};
use crate::domain::search::FilterQuery;
use crate::errors::ServerError;
use rusqlite::{params, OptionalExtension, Params, Row};

const SQL_TOP_RATED_WITH_REVIEW: &str = include_str!("../../sql/queries/top_rated_with_review.sql");
const SQL_FILTERED_SORTED_LISTINGS: &str =
    include_str!("../../sql/queries/filtered_sorted_listings.sql");

/// Run `sql` and map every row with `map`.
pub(crate) fn query_rows<T, P, F>(
    db: &Database,
    sql: &str,
    params: P,
    map: F,
) -> Result<Vec<T>, ServerError>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

        let rows = stmt
            .query_map(params, map)
            .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}

/// Listings rated above 4.8 that sleep at least four, in cities matching `city`.
pub fn high_rated_family_listings(
    db: &Database,
    city: &str,
) -> Result<Vec<FamilyListing>, ServerError> {
    query_rows(
        db,
        r#"
        SELECT CAST(l.id AS TEXT) AS id, l.name, l.cleaned_neighborhood AS neighbourhood,
               ld.beds, ld.bedrooms, ld.accommodates, ld.review_scores_rating
        FROM listings l
        INNER JOIN listings_detailed ld ON l.id = ld.id
        WHERE ld.review_scores_rating > 4.8
          AND ld.accommodates >= 4
          AND EXISTS (
                SELECT 1 FROM city_neighborhood n
                WHERE n.cleaned_neighborhood = l.cleaned_neighborhood
                  AND n.city LIKE '%' || ?1 || '%'
          )
        ORDER BY ld.review_scores_rating DESC, l.id
        "#,
        params![city],
        |row| {
            Ok(FamilyListing {
                id: row.get(0)?,
                name: row.get(1)?,
                neighbourhood: row.get(2)?,
                beds: row.get(3)?,
                bedrooms: row.get(4)?,
                accommodates: row.get(5)?,
                review_scores_rating: row.get(6)?,
            })
        },
    )
}

/// Instant-bookable listings offering any kind of free parking, priciest first.
pub fn flexible_instant_listings(db: &Database) -> Result<Vec<InstantListing>, ServerError> {
    query_rows(
        db,
        r#"
        WITH free_parking_listings AS (
            SELECT DISTINCT la.id
            FROM listings_amenities la
            JOIN amenities a ON la.amenity_id = a.amenity_id
            WHERE a.amenities LIKE '%free parking%'
        )
        SELECT
            CAST(l.id AS TEXT) AS listing_id,
            l.name,
            l.cleaned_neighborhood AS neighbourhood,
            ld.review_scores_rating,
            o.overall_avg_price
        FROM listings l
        JOIN listings_detailed ld ON l.id = ld.id
        JOIN free_parking_listings fp ON l.id = fp.id
        JOIN listing_overall_avg_price o ON l.id = o.listing_id
        WHERE ld.instant_bookable = 1
        ORDER BY o.overall_avg_price DESC, l.id
        "#,
        [],
        |row| {
            Ok(InstantListing {
                listing_id: row.get(0)?,
                name: row.get(1)?,
                neighbourhood: row.get(2)?,
                review_scores_rating: row.get(3)?,
                overall_avg_price: row.get(4)?,
            })
        },
    )
}

pub fn filtered_sorted_listings(
    db: &Database,
    filter: &FilterQuery,
) -> Result<Vec<FilteredListing>, ServerError> {
    let amenities = serde_json::to_string(&filter.amenities)
        .map_err(|e| ServerError::DbError(format!("Encode amenities failed: {e}")))?;

    query_rows(
        db,
        SQL_FILTERED_SORTED_LISTINGS,
        params![amenities, filter.min_rating, filter.city],
        |row| {
            Ok(FilteredListing {
                listing_id: row.get(0)?,
                listing_name: row.get(1)?,
                neighbourhood: row.get(2)?,
                review_scores_rating: row.get(3)?,
                number_of_reviews: row.get(4)?,
                amenities_list: row.get(5)?,
            })
        },
    )
}

pub fn top_rated_with_review(
    db: &Database,
    city: &str,
) -> Result<Vec<TopRatedListing>, ServerError> {
    query_rows(db, SQL_TOP_RATED_WITH_REVIEW, params![city], |row| {
        Ok(TopRatedListing {
            id: row.get(0)?,
            rank: row.get(1)?,
            name: row.get(2)?,
            neighborhood: row.get(3)?,
            room_type: row.get(4)?,
            listing_url: row.get(5)?,
            picture_url: row.get(6)?,
            accommodates: row.get(7)?,
            review_scores_rating: row.get(8)?,
            number_of_reviews: row.get(9)?,
            random_review: row.get(10)?,
        })
    })
}

/// One listing rated above 4.9, picked at random.
pub fn random_listing(db: &Database) -> Result<Option<RandomListing>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            r#"
            SELECT CAST(ld.id AS TEXT) AS id
            FROM listings AS l
            INNER JOIN listings_detailed AS ld ON l.id = ld.id
            WHERE ld.review_scores_rating > 4.9
            ORDER BY RANDOM()
            LIMIT 1
            "#,
            [],
            |row| Ok(RandomListing { id: row.get(0)? }),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("random listing failed: {e}")))
    })
}

pub fn listing_detail(db: &Database, id: i64) -> Result<Option<ListingDetail>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            r#"
            SELECT CAST(id AS TEXT) AS id, description, listing_url, picture_url,
                   bedrooms, beds, number_of_reviews, accommodates,
                   instant_bookable, review_scores_rating
            FROM listings_detailed
            WHERE id = ?1
            "#,
            params![id],
            |row| {
                Ok(ListingDetail {
                    id: row.get(0)?,
                    description: row.get(1)?,
                    listing_url: row.get(2)?,
                    picture_url: row.get(3)?,
                    bedrooms: row.get(4)?,
                    beds: row.get(5)?,
                    number_of_reviews: row.get(6)?,
                    accommodates: row.get(7)?,
                    instant_bookable: row.get(8)?,
                    review_scores_rating: row.get(9)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("listing detail failed: {e}")))
    })
}

pub fn available_cities(db: &Database) -> Result<Vec<CityOption>, ServerError> {
    query_rows(
        db,
        "SELECT DISTINCT city FROM city_neighborhood ORDER BY city ASC",
        [],
        |row| Ok(CityOption { city: row.get(0)? }),
    )
}

pub fn available_amenities(db: &Database) -> Result<Vec<AmenityOption>, ServerError> {
    query_rows(
        db,
        "SELECT DISTINCT amenities FROM amenities ORDER BY amenities ASC",
        [],
        |row| {
            Ok(AmenityOption {
                amenities: row.get(0)?,
            })
        },
    )
}
