use crate::weather::WeatherError;
use serde::Deserialize;

// current weather payload (only what the ticker reads)
//  ├── main
//  │    └── temp
//  └── weather[]
//       ├── main
//       └── icon

#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub main: String,
    pub icon: String,
}

/// One ticker entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    /// Rounded °F; `None` renders as "--".
    pub temp: Option<i64>,
    pub icon_url: Option<String>,
    pub description: String,
}

impl WeatherReport {
    pub fn unavailable(city: &str) -> Self {
        Self {
            city: city.to_string(),
            temp: None,
            icon_url: None,
            description: "N/A".to_string(),
        }
    }

    pub fn from_current(city: &str, current: CurrentWeather) -> Result<Self, WeatherError> {
        let condition = current
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::UnexpectedShape("empty weather array".into()))?;

        Ok(Self {
            city: city.to_string(),
            temp: Some(current.main.temp.round() as i64),
            icon_url: Some(format!(
                "https://openweathermap.org/img/wn/{}.png",
                condition.icon
            )),
            description: condition.main,
        })
    }

    pub fn temp_label(&self) -> String {
        match self.temp {
            Some(t) => format!("{t}°F"),
            None => "--°F".to_string(),
        }
    }
}
