// src/db/calendar.rs
use crate::db::connection::Database;
use crate::db::listings::query_rows;
use crate::domain::pricing::{
    christmas_week, CheapestDate, CheapestMonth, ChristmasPrice, MonthlyPrice, SuperhostPrice,
};
use crate::errors::ServerError;
use rusqlite::params;

/// The three cheapest available, priced nights of a listing.
pub fn cheapest_dates(db: &Database, listing_id: i64) -> Result<Vec<CheapestDate>, ServerError> {
    query_rows(
        db,
        r#"
        SELECT CAST(listing_id AS TEXT) AS listing_id, date, ROUND(price, 2) AS price
        FROM calendar
        WHERE available_boo = 1
          AND listing_id = ?1
          AND price IS NOT NULL
        ORDER BY price ASC, date ASC
        LIMIT 3
        "#,
        params![listing_id],
        |row| {
            Ok(CheapestDate {
                listing_id: row.get(0)?,
                date: row.get(1)?,
                price: row.get(2)?,
            })
        },
    )
}

/// Average nightly price of a listing over Dec 20-26 of `year`, keyed by its neighborhood.
pub fn christmas_price(
    db: &Database,
    listing_id: i64,
    year: i32,
) -> Result<Vec<ChristmasPrice>, ServerError> {
    let (start, end) = christmas_week(year).ok_or(ServerError::InternalError)?;

    query_rows(
        db,
        r#"
        SELECT
            COALESCE(NULLIF(TRIM(l.cleaned_neighborhood), ''), 'Unknown') AS neighbourhood,
            ROUND(AVG(c.price), 2) AS avg_price_christmas
        FROM listings l
        JOIN calendar c ON l.id = c.listing_id
        WHERE l.id = ?1
          AND c.date BETWEEN ?2 AND ?3
          AND c.price IS NOT NULL
        GROUP BY 1
        "#,
        params![listing_id, start, end],
        |row| {
            Ok(ChristmasPrice {
                neighbourhood: row.get(0)?,
                avg_price_christmas: row.get(1)?,
            })
        },
    )
}

/// Superhost average price per neighborhood of `city`.
pub fn superhost_avg_price(db: &Database, city: &str) -> Result<Vec<SuperhostPrice>, ServerError> {
    query_rows(
        db,
        r#"
        SELECT
            cleaned_neighborhood AS neighbourhood,
            ROUND(AVG(avg_price), 2) AS avg_price
        FROM superhost_neighborhood_monthly
        WHERE LOWER(city) = LOWER(?1)
        GROUP BY cleaned_neighborhood
        ORDER BY cleaned_neighborhood
        "#,
        params![city],
        |row| {
            Ok(SuperhostPrice {
                neighbourhood: row.get(0)?,
                avg_price: row.get(1)?,
            })
        },
    )
}

pub fn cheapest_months(db: &Database, city: &str) -> Result<Vec<CheapestMonth>, ServerError> {
    query_rows(
        db,
        r#"
        SELECT month, ROUND(avg_price, 2) AS avg_price
        FROM city_monthly_avg
        WHERE LOWER(city) = LOWER(?1)
        ORDER BY avg_price ASC, month ASC
        LIMIT 3
        "#,
        params![city],
        |row| {
            Ok(CheapestMonth {
                month: row.get(0)?,
                avg_price: row.get(1)?,
            })
        },
    )
}

/// One row per month with available, priced nights, oldest month first.
pub fn monthly_price_trend(
    db: &Database,
    listing_id: i64,
) -> Result<Vec<MonthlyPrice>, ServerError> {
    query_rows(
        db,
        r#"
        SELECT
            strftime('%Y-%m', c.date) AS month,
            ROUND(AVG(c.price), 2) AS avg_monthly_price,
            CAST(c.listing_id AS TEXT) AS listing_id
        FROM calendar c
        WHERE c.listing_id = ?1
          AND c.available_boo = 1
          AND c.price IS NOT NULL
        GROUP BY strftime('%Y-%m', c.date), c.listing_id
        ORDER BY month
        "#,
        params![listing_id],
        |row| {
            Ok(MonthlyPrice {
                month: row.get(0)?,
                avg_monthly_price: row.get(1)?,
                listing_id: row.get(2)?,
            })
        },
    )
}
