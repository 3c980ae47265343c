//! Apparent ("feels like") temperature.
//!
//! Three models are tried in order: heat index from 27 °C upwards, wind chill
//! at or below 10 °C when the wind is stronger than 4.8 m/s, otherwise the
//! measured temperature.
//!
//! The heat-index polynomial uses the NOAA (Rothfusz) coefficients, which are
//! calibrated for °F, but it is fed °C and relative humidity in percent. The
//! numbers this produces are what users have always seen, so they are kept
//! as is until the formula is deliberately revisited.

use serde::Serialize;

use crate::model::RawReading;

pub const HEAT_INDEX_MIN_C: f64 = 27.0;
pub const WIND_CHILL_MAX_C: f64 = 10.0;
pub const WIND_CHILL_MIN_WIND_MS: f64 = 4.8;

/// Which model produced an apparent temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeelsLikeModel {
    HeatIndex,
    WindChill,
    Actual,
}

impl FeelsLikeModel {
    /// Pick the model for a reading. Order matters at the boundaries.
    pub fn select(temperature_c: f64, wind_speed_ms: f64) -> Self {
        if temperature_c >= HEAT_INDEX_MIN_C {
            FeelsLikeModel::HeatIndex
        } else if temperature_c <= WIND_CHILL_MAX_C && wind_speed_ms > WIND_CHILL_MIN_WIND_MS {
            FeelsLikeModel::WindChill
        } else {
            FeelsLikeModel::Actual
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeelsLikeModel::HeatIndex => "heat index",
            FeelsLikeModel::WindChill => "wind chill",
            FeelsLikeModel::Actual => "actual temperature",
        }
    }
}

impl std::fmt::Display for FeelsLikeModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apparent temperature in °C, rounded to one decimal.
pub fn estimate(temperature_c: f64, relative_humidity_pct: f64, wind_speed_ms: f64) -> f64 {
    estimate_with_model(temperature_c, relative_humidity_pct, wind_speed_ms).0
}

/// Same as [`estimate`], also reporting which model fired.
pub fn estimate_with_model(
    temperature_c: f64,
    relative_humidity_pct: f64,
    wind_speed_ms: f64,
) -> (f64, FeelsLikeModel) {
    let model = FeelsLikeModel::select(temperature_c, wind_speed_ms);

    let raw = match model {
        FeelsLikeModel::HeatIndex => heat_index(temperature_c, relative_humidity_pct),
        FeelsLikeModel::WindChill => wind_chill(temperature_c, wind_speed_ms),
        FeelsLikeModel::Actual => temperature_c,
    };

    (round_tenth(raw), model)
}

impl RawReading {
    pub fn feels_like(&self) -> f64 {
        estimate(self.temperature_c, self.relative_humidity_pct, self.wind_speed_ms)
    }
}

fn heat_index(t: f64, rh: f64) -> f64 {
    -8.784695 + 1.61139411 * t + 2.338549 * rh
        - 0.14611605 * t * rh
        - 0.012308094 * t * t
        - 0.016424828 * rh * rh
        + 0.002211732 * t * t * rh
        + 0.00072546 * t * rh * rh
        - 0.000003582 * t * t * rh * rh
}

fn wind_chill(t: f64, wind_speed_ms: f64) -> f64 {
    let v = wind_speed_ms.powf(0.16);
    13.12 + 0.6215 * t - 11.37 * v + 0.3965 * t * v
}

/// Round to one decimal with halves going up (towards +inf), so -2.45
/// becomes -2.4 rather than -2.5.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
