//! Mapping from WMO weather codes to a condition category and a Spanish
//! description.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Serialize, Serializer};

/// Canonical condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    PartlyCloudy,
    Fog,
    Drizzle,
    FreezingDrizzle,
    Rain,
    FreezingRain,
    Snowfall,
    RainShowers,
    Thunderstorm,
    Unknown,
    /// Code 77 (snow grains) has no category of its own and renders as an
    /// empty label.
    Unset,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::PartlyCloudy => "Partly cloudy",
            Condition::Fog => "Fog",
            Condition::Drizzle => "Drizzle",
            Condition::FreezingDrizzle => "Freezing Drizzle",
            Condition::Rain => "Rain",
            Condition::FreezingRain => "Freezing Rain",
            Condition::Snowfall => "Snowfall",
            Condition::RainShowers => "Rain showers",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Unknown => "Unknown",
            Condition::Unset => "",
        }
    }

    /// Terminal glyph for the condition.
    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Clear => "\u{2600}",
            Condition::Fog => "\u{1F32B}",
            Condition::Drizzle | Condition::FreezingDrizzle => "\u{1F326}",
            Condition::Rain | Condition::FreezingRain | Condition::RainShowers => "\u{1F327}",
            Condition::Snowfall => "\u{1F328}",
            Condition::Thunderstorm => "\u{26C8}",
            Condition::PartlyCloudy | Condition::Unknown | Condition::Unset => "\u{2601}",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Category plus Spanish description for a single weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionResult {
    pub category: Condition,
    pub description: &'static str,
}

impl ConditionResult {
    const fn new(category: Condition, description: &'static str) -> Self {
        Self { category, description }
    }
}

const UNKNOWN: ConditionResult = ConditionResult::new(Condition::Unknown, "Desconocido");

/// Classify a WMO weather code. Every input yields a result; codes without an
/// entry fall back to `Unknown` / "Desconocido".
pub fn classify(code: i32) -> ConditionResult {
    use Condition::*;

    match code {
        0 => ConditionResult::new(Clear, "Despejado"),
        1 => ConditionResult::new(Clear, "Principalmente despejado"),
        2 => ConditionResult::new(PartlyCloudy, "Parcialmente nublado"),
        // Kept as "Despejado" to match what the app has always shown for overcast.
        3 => ConditionResult::new(PartlyCloudy, "Despejado"),
        45 => ConditionResult::new(Fog, "Neblina"),
        48 => ConditionResult::new(Fog, "Neblina ligera"),
        51 => ConditionResult::new(Drizzle, "Llovizna ligera"),
        53 => ConditionResult::new(Drizzle, "Llovizna moderada"),
        55 => ConditionResult::new(Drizzle, "Llovizna densa"),
        56 => ConditionResult::new(FreezingDrizzle, "Llovizna helada ligera"),
        57 => ConditionResult::new(FreezingDrizzle, "Llovizna helada densa"),
        61 => ConditionResult::new(Rain, "Lluvia ligera"),
        63 => ConditionResult::new(Rain, "Lluvia moderada"),
        65 => ConditionResult::new(Rain, "Lluvia fuerte"),
        66 => ConditionResult::new(FreezingRain, "Lluvia helada ligera"),
        67 => ConditionResult::new(FreezingRain, "Lluvia helada fuerte"),
        71 => ConditionResult::new(Snowfall, "Nieve ligera"),
        73 => ConditionResult::new(Snowfall, "Nieve moderada"),
        75 => ConditionResult::new(Snowfall, "Nieve fuerte"),
        77 => ConditionResult::new(Unset, ""),
        80 => ConditionResult::new(RainShowers, "Chubascos de lluvia ligeros"),
        81 => ConditionResult::new(RainShowers, "Chubascos moderados"),
        82 => ConditionResult::new(RainShowers, "Chubascos violentos"),
        85 => ConditionResult::new(Snowfall, "Nevadas ligeras"),
        86 => ConditionResult::new(Snowfall, "Nevadas fuertes"),
        95 => ConditionResult::new(Thunderstorm, "Tormenta"),
        96 => ConditionResult::new(Thunderstorm, "Tormenta con granizo ligero"),
        99 => ConditionResult::new(Thunderstorm, "Tormenta con granizo fuerte"),
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_handled_code_has_its_literal_pair() {
        let table: &[(i32, &str, &str)] = &[
            (0, "Clear", "Despejado"),
            (1, "Clear", "Principalmente despejado"),
            (2, "Partly cloudy", "Parcialmente nublado"),
            (3, "Partly cloudy", "Despejado"),
            (45, "Fog", "Neblina"),
            (48, "Fog", "Neblina ligera"),
            (51, "Drizzle", "Llovizna ligera"),
            (53, "Drizzle", "Llovizna moderada"),
            (55, "Drizzle", "Llovizna densa"),
            (56, "Freezing Drizzle", "Llovizna helada ligera"),
            (57, "Freezing Drizzle", "Llovizna helada densa"),
            (61, "Rain", "Lluvia ligera"),
            (63, "Rain", "Lluvia moderada"),
            (65, "Rain", "Lluvia fuerte"),
            (66, "Freezing Rain", "Lluvia helada ligera"),
            (67, "Freezing Rain", "Lluvia helada fuerte"),
            (71, "Snowfall", "Nieve ligera"),
            (73, "Snowfall", "Nieve moderada"),
            (75, "Snowfall", "Nieve fuerte"),
            (77, "", ""),
            (80, "Rain showers", "Chubascos de lluvia ligeros"),
            (81, "Rain showers", "Chubascos moderados"),
            (82, "Rain showers", "Chubascos violentos"),
            (85, "Snowfall", "Nevadas ligeras"),
            (86, "Snowfall", "Nevadas fuertes"),
            (95, "Thunderstorm", "Tormenta"),
            (96, "Thunderstorm", "Tormenta con granizo ligero"),
            (99, "Thunderstorm", "Tormenta con granizo fuerte"),
        ];

        for (code, category, description) in table {
            let result = classify(*code);
            assert_eq!(result.category.label(), *category, "category for code {code}");
            assert_eq!(result.description, *description, "description for code {code}");
        }
    }

    #[test]
    fn unhandled_codes_fall_back_to_unknown() {
        for code in [12, 100, -1, 4, 79, 98, i32::MAX, i32::MIN] {
            let result = classify(code);
            assert_eq!(result.category, Condition::Unknown, "code {code}");
            assert_eq!(result.category.label(), "Unknown");
            assert_eq!(result.description, "Desconocido");
        }
    }

    #[test]
    fn snow_grains_yield_empty_strings_not_unknown() {
        let result = classify(77);
        assert_eq!(result.category, Condition::Unset);
        assert_eq!(result.category.label(), "");
        assert_eq!(result.description, "");
    }

    #[test]
    fn condition_serializes_as_label() {
        let json = serde_json::to_string(&classify(2)).unwrap();
        assert_eq!(json, r#"{"category":"Partly cloudy","description":"Parcialmente nublado"}"#);
    }

    #[test]
    fn icons_follow_category() {
        assert_eq!(classify(0).category.icon(), "\u{2600}");
        assert_eq!(classify(3).category.icon(), "\u{2601}");
        assert_eq!(classify(9).category.icon(), "\u{2601}");
        assert_eq!(classify(65).category.icon(), classify(81).category.icon());
    }
}
