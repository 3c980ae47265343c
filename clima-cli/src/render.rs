use std::fmt::Write;

use clima_core::{ConditionResult, FeelsLikeModel, WeatherReport};

pub fn report(report: &WeatherReport) -> String {
    let mut out = String::new();

    let place = if report.country.is_empty() {
        report.city.clone()
    } else {
        format!("{}, {}", report.city, report.country)
    };

    let _ = writeln!(out, "{place}");
    let _ = writeln!(
        out,
        "  {}  {:.1}°C  {}",
        report.condition.icon(),
        report.temperature_c,
        report.description
    );
    let _ = writeln!(out, "  Sensación térmica: {:.1}°C", report.feels_like_c);
    let _ = writeln!(out, "  Humedad: {}%", report.humidity_pct);
    let _ = writeln!(out, "  Viento: {} m/s", report.wind_speed_ms);
    match report.visibility_km {
        Some(km) => {
            let _ = writeln!(out, "  Visibilidad: {km} km");
        }
        None => {
            let _ = writeln!(out, "  Visibilidad: -");
        }
    }

    if !report.hourly.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Pronóstico por horas");
        for hour in &report.hourly {
            let _ = writeln!(
                out,
                "  {:<10} {}  {:.1}°",
                hour.time_label,
                hour.category.icon(),
                hour.temperature_c
            );
        }
    }

    out
}

pub fn classification(code: i32, result: &ConditionResult) -> String {
    let category = match result.category.label() {
        "" => "(none)",
        label => label,
    };
    let description = match result.description {
        "" => "(none)",
        text => text,
    };

    format!("{code}: {category} / {description}")
}

pub fn feels_like(value: f64, model: FeelsLikeModel) -> String {
    format!("{value:.1}°C ({model})")
}
