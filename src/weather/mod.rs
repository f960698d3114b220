mod client;
mod models;
mod weather_error;

pub use client::{ticker_reports, WeatherClient, TICKER_CITIES};
pub use models::WeatherReport;
pub use weather_error::WeatherError;
