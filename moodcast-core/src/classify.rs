//! Classification of vendor condition labels and pollutant concentrations.
//!
//! Both classifiers are total: every input maps to exactly one bucket.

use serde::Serialize;

/// Closed weather category driving the background animation and parts of the
/// outfit/playlist selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Clear,
    Clouds,
    Rain,
    Snow,
    Storm,
}

/// Ordered match rules. Evaluated top to bottom, first hit wins, so "storm"
/// beats a coincidental "rain" substring in the same label.
const CATEGORY_RULES: &[(&[&str], WeatherCategory)] = &[
    (&["thunder"], WeatherCategory::Storm),
    (&["rain", "drizzle"], WeatherCategory::Rain),
    (&["snow"], WeatherCategory::Snow),
    (&["cloud", "mist", "fog", "haze"], WeatherCategory::Clouds),
];

impl WeatherCategory {
    /// Classify a free-text condition label, case-insensitively.
    /// Unrecognized labels fall through to [`WeatherCategory::Clear`].
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();

        for (patterns, category) in CATEGORY_RULES {
            if patterns.iter().any(|p| lower.contains(p)) {
                return *category;
            }
        }

        Self::Clear
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pollutant severity bucket, applied independently to PM2.5 and PM10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AirQualityLevel {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
}

impl AirQualityLevel {
    /// Bucket a concentration by inclusive upper bounds: boundary values
    /// (15, 35, 75) classify into the lower bucket.
    pub fn from_concentration(value: f64) -> Self {
        if value <= 15.0 {
            Self::Good
        } else if value <= 35.0 {
            Self::Moderate
        } else if value <= 75.0 {
            Self::Unhealthy
        } else {
            Self::VeryUnhealthy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
        }
    }

    /// Display color for the dashboard badge.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#34d399",
            Self::Moderate => "#facc15",
            Self::Unhealthy => "#fb923c",
            Self::VeryUnhealthy => "#f87171",
        }
    }
}
