use serde::{Deserialize, Serialize};

use crate::condition::Condition;

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
    /// ISO 3166-1 alpha-2 code, e.g. "CO".
    pub country: Option<String>,
    pub hours: usize,
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub admin1: Option<String>,
}

/// Forecast payload as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
    pub current: CurrentConditions,
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub time: Option<String>,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    /// m/s, requested with `wind_speed_unit=ms`.
    pub wind_speed_10m: f64,
    pub weather_code: i32,
    /// Meters.
    #[serde(default)]
    pub visibility: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
}

/// Inputs of the apparent-temperature estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawReading {
    pub temperature_c: f64,
    pub relative_humidity_pct: f64,
    pub wind_speed_ms: f64,
}

impl From<&CurrentConditions> for RawReading {
    fn from(current: &CurrentConditions) -> Self {
        Self {
            temperature_c: current.temperature_2m,
            relative_humidity_pct: current.relative_humidity_2m,
            wind_speed_ms: current.wind_speed_10m,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRecord {
    pub time_label: String,
    pub temperature_c: f64,
    pub category: Condition,
}

/// Everything the terminal view needs for one city.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub condition: Condition,
    pub description: String,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub visibility_km: Option<f64>,
    pub hourly: Vec<HourlyRecord>,
}
