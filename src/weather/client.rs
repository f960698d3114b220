// weather/client.rs
use super::models::{CurrentWeather, WeatherReport};
use super::WeatherError;
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;
use tracing::warn;

const API_BASE: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Cities shown in the navbar ticker, in display order.
pub const TICKER_CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "Charlotte",
];

pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: API_BASE.to_string(),
        })
    }

    /// Point the client at another endpoint (a local stub, a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Current weather for one city, in imperial units.
    pub fn fetch_city(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("units", "imperial"), ("appid", self.api_key.as_str())])
            .send()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(WeatherError::Status(resp.status().as_u16()));
        }

        let current: CurrentWeather = resp
            .json()
            .map_err(|e| WeatherError::JsonParse(e.to_string()))?;

        WeatherReport::from_current(city, current)
    }

    /// Fetch every city concurrently. A failing city degrades to its
    /// placeholder without affecting the others.
    pub fn fetch_all(&self, cities: &[&str]) -> Vec<WeatherReport> {
        thread::scope(|s| {
            let handles: Vec<_> = cities
                .iter()
                .map(|city| (*city, s.spawn(move || self.fetch_city(city))))
                .collect();

            handles
                .into_iter()
                .map(|(city, handle)| match handle.join() {
                    Ok(Ok(report)) => report,
                    Ok(Err(e)) => {
                        warn!(city, error = %e, "weather lookup failed");
                        WeatherReport::unavailable(city)
                    }
                    Err(_) => {
                        warn!(city, "weather lookup panicked");
                        WeatherReport::unavailable(city)
                    }
                })
                .collect()
        })
    }
}

/// Ticker entries for `cities`. Without an API key no request is made.
pub fn ticker_reports(api_key: Option<&str>, cities: &[&str]) -> Vec<WeatherReport> {
    let Some(key) = api_key else {
        return cities.iter().map(|c| WeatherReport::unavailable(c)).collect();
    };

    match WeatherClient::new(key) {
        Ok(client) => client.fetch_all(cities),
        Err(e) => {
            warn!(error = %e, "weather client init failed");
            cities.iter().map(|c| WeatherReport::unavailable(c)).collect()
        }
    }
}
