pub mod calendar;
pub mod connection;
pub mod listings;
pub mod reviews;

pub use connection::{init_db, Database};
