//! Weather condition icons mapped from WMO codes
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Icon shown next to a forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    /// Drizzle, light rain and light rain showers
    LightShowers,
    Rain,
    Snow,
    Thunderstorm,
    ThunderstormWithHail,
    /// Code outside the table
    Unknown,
}

const ICON_GROUPS: &[(&[i32], WeatherIcon)] = &[
    (&[0], WeatherIcon::Clear),
    (&[1], WeatherIcon::MainlyClear),
    (&[2], WeatherIcon::PartlyCloudy),
    (&[3], WeatherIcon::Overcast),
    (&[45, 48], WeatherIcon::Fog),
    (&[51, 56, 61, 66, 80], WeatherIcon::LightShowers),
    (&[53, 55, 57, 63, 65, 67, 81, 82], WeatherIcon::Rain),
    (&[71, 73, 75, 77, 85, 86], WeatherIcon::Snow),
    (&[95], WeatherIcon::Thunderstorm),
    (&[96, 99], WeatherIcon::ThunderstormWithHail),
];

static ICON_TABLE: LazyLock<HashMap<i32, WeatherIcon>> = LazyLock::new(|| {
    ICON_GROUPS
        .iter()
        .flat_map(|(codes, icon)| codes.iter().map(move |code| (*code, *icon)))
        .collect()
});

/// Icon for a WMO code, `Unknown` for codes outside the table
#[must_use]
pub fn icon_for(code: i32) -> WeatherIcon {
    ICON_TABLE.get(&code).copied().unwrap_or(WeatherIcon::Unknown)
}

impl WeatherIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::MainlyClear => "🌤",
            Self::PartlyCloudy => "⛅️",
            Self::Overcast => "☁️",
            Self::Fog => "🌫",
            Self::LightShowers => "🌦",
            Self::Rain => "🌧",
            Self::Snow => "🌨",
            Self::Thunderstorm => "🌩",
            Self::ThunderstormWithHail => "⛈",
            Self::Unknown => "NOT FOUND",
        }
    }
}

/// Convert a WMO weather code to a human-readable description
#[must_use]
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, WeatherIcon::Clear)]
    #[case(1, WeatherIcon::MainlyClear)]
    #[case(2, WeatherIcon::PartlyCloudy)]
    #[case(3, WeatherIcon::Overcast)]
    #[case(45, WeatherIcon::Fog)]
    #[case(48, WeatherIcon::Fog)]
    #[case(51, WeatherIcon::LightShowers)]
    #[case(56, WeatherIcon::LightShowers)]
    #[case(80, WeatherIcon::LightShowers)]
    #[case(53, WeatherIcon::Rain)]
    #[case(57, WeatherIcon::Rain)]
    #[case(63, WeatherIcon::Rain)]
    #[case(82, WeatherIcon::Rain)]
    #[case(71, WeatherIcon::Snow)]
    #[case(86, WeatherIcon::Snow)]
    #[case(95, WeatherIcon::Thunderstorm)]
    #[case(96, WeatherIcon::ThunderstormWithHail)]
    #[case(99, WeatherIcon::ThunderstormWithHail)]
    fn test_icon_for_known_codes(#[case] code: i32, #[case] expected: WeatherIcon) {
        assert_eq!(icon_for(code), expected);
    }

    #[rstest]
    #[case(999)]
    #[case(-1)]
    #[case(4)]
    #[case(50)]
    fn test_icon_for_unknown_codes(#[case] code: i32) {
        assert_eq!(icon_for(code), WeatherIcon::Unknown);
    }

    #[test]
    fn test_groups_are_disjoint() {
        let total: usize = ICON_GROUPS.iter().map(|(codes, _)| codes.len()).sum();
        assert_eq!(ICON_TABLE.len(), total);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(icon_for(0).glyph(), "☀️");
        assert_eq!(icon_for(63).glyph(), "🌧");
        assert_eq!(icon_for(999).glyph(), "NOT FOUND");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(99), "Thunderstorm with heavy hail");
        assert_eq!(describe(1234), "Unknown");
    }
}
