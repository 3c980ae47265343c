use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::{
    Config,
    error::LookupError,
    forecast::assemble_report,
    model::{Location, ProviderResponse, WeatherReport, WeatherRequest},
    provider::truncate_body,
};

use super::WeatherProvider;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const GEOCODING_CANDIDATES: &str = "6";
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code,visibility";

/// Open-Meteo geocoding + forecast client. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    forecast_url: String,
    geocoding_url: String,
}

impl OpenMeteoProvider {
    pub fn new(forecast_url: impl Into<String>, geocoding_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            forecast_url: forecast_url.into(),
            geocoding_url: geocoding_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.forecast_url(), config.geocoding_url())
    }

    /// Look `city` up and pick the best match, restricted to `country` when given.
    #[instrument(skip(self))]
    pub async fn resolve_city(&self, city: &str, country: Option<&str>) -> Result<Location> {
        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[
                ("name", city),
                ("count", GEOCODING_CANDIDATES),
                ("language", "es"),
                ("format", "json"),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (geocoding)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo geocoding response body")?;

        if !status.is_success() {
            warn!(%status, "geocoding request failed");
            return Err(anyhow!(
                "Open-Meteo geocoding request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: GeoResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo geocoding JSON")?;

        let location = pick_location(parsed.results.unwrap_or_default(), city, country)?;
        debug!(
            "Resolved {} to {} ({:.4}, {:.4})",
            city, location.name, location.latitude, location.longitude
        );

        Ok(location)
    }

    /// Fetch current conditions, plus `hours` hourly temperatures when non-zero.
    #[instrument(skip(self, location), fields(location = %location.name))]
    pub async fn fetch_forecast(&self, location: &Location, hours: usize) -> Result<ProviderResponse> {
        let mut query: Vec<(&str, String)> = vec![
            ("latitude", format!("{:.5}", location.latitude)),
            ("longitude", format!("{:.5}", location.longitude)),
            ("current", CURRENT_FIELDS.to_string()),
            ("wind_speed_unit", "ms".to_string()),
            ("timezone", "auto".to_string()),
        ];

        if hours > 0 {
            query.push(("hourly", "temperature_2m".to_string()));
            query.push(("forecast_hours", hours.to_string()));
        }

        let res = self
            .http
            .get(&self.forecast_url)
            .query(&query)
            .send()
            .await
            .context("Failed to send request to Open-Meteo (forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo forecast response body")?;

        if !status.is_success() {
            warn!(%status, "forecast request failed");
            return Err(anyhow!(
                "Open-Meteo forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse Open-Meteo forecast JSON")
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    results: Option<Vec<Location>>,
}

/// First candidate, or the first one in `country` when a country code is given.
pub fn pick_location(
    candidates: Vec<Location>,
    city: &str,
    country: Option<&str>,
) -> Result<Location, LookupError> {
    if candidates.is_empty() {
        return Err(LookupError::CityNotFound { city: city.to_string() });
    }

    match country.map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => {
            let wanted = code.to_uppercase();
            candidates
                .into_iter()
                .find(|loc| loc.country_code.as_deref() == Some(wanted.as_str()))
                .ok_or_else(|| LookupError::CityNotInCountry {
                    city: city.to_string(),
                    country: code.to_string(),
                })
        }
        None => candidates
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::CityNotFound { city: city.to_string() }),
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        let location = self.resolve_city(&request.city, request.country.as_deref()).await?;
        let response = self.fetch_forecast(&location, request.hours).await?;

        let report = assemble_report(
            &location.name,
            location.country.as_deref().unwrap_or_default(),
            &response,
            request.hours,
        );

        info!(
            city = %report.city,
            condition = %report.condition,
            hourly = report.hourly.len(),
            "weather lookup finished"
        );

        Ok(report)
    }
}
