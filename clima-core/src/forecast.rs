//! Turns a provider response into the report shown to the user.
//!
//! The provider does not expose per-hour weather codes, so every hourly entry
//! carries the category of the *current* weather code.

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::{
    condition::classify,
    model::{HourlyRecord, ProviderResponse, RawReading, WeatherReport},
};

const TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Pair up hourly timestamps and temperatures, at most `hours` of them.
pub fn assemble_hourly(response: &ProviderResponse, hours: usize) -> Vec<HourlyRecord> {
    let Some(hourly) = &response.hourly else {
        return Vec::new();
    };

    let category = classify(response.current.weather_code).category;

    hourly
        .time
        .iter()
        .zip(&hourly.temperature_2m)
        .take(hours)
        .map(|(time, temperature)| HourlyRecord {
            time_label: time_label(time),
            temperature_c: *temperature,
            category,
        })
        .collect()
}

pub fn assemble_report(
    city: &str,
    country: &str,
    response: &ProviderResponse,
    hours: usize,
) -> WeatherReport {
    let current = &response.current;
    let condition = classify(current.weather_code);
    let reading = RawReading::from(current);

    WeatherReport {
        city: city.to_string(),
        country: country.to_string(),
        temperature_c: current.temperature_2m,
        feels_like_c: reading.feels_like(),
        condition: condition.category,
        description: condition.description.to_string(),
        humidity_pct: current.relative_humidity_2m,
        wind_speed_ms: current.wind_speed_10m,
        visibility_km: current.visibility.map(|m| m / 1000.0),
        hourly: assemble_hourly(response, hours),
    }
}

/// Short Spanish label for a local ISO-8601 timestamp, e.g. "lun 13:00".
/// Anything that does not parse is returned unchanged.
pub fn time_label(raw: &str) -> String {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| format!("{} {}", weekday_es(dt.weekday()), dt.format("%H:%M")))
        .unwrap_or_else(|| raw.to_string())
}

fn weekday_es(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lun",
        Weekday::Tue => "mar",
        Weekday::Wed => "mié",
        Weekday::Thu => "jue",
        Weekday::Fri => "vie",
        Weekday::Sat => "sáb",
        Weekday::Sun => "dom",
    }
}
