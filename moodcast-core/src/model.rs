use serde::{Deserialize, Serialize};

/// Normalized weather payload served to dashboard clients.
///
/// Produced fresh per request by a [`crate::provider::WeatherProvider`];
/// owned by the caller, never shared mutably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: CurrentWeather,
    pub hourly: Vec<HourlyForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Display temperature, rounded to the nearest integer degree.
    pub temp: i32,
    pub feels_like: i32,
    pub humidity: u8,
    pub wind_speed: f64,
    /// Vendor's primary condition name, e.g. "Clouds".
    pub weather: String,
    pub description: String,
    pub icon: String,
    pub city: String,
    /// PM2.5 concentration; 0 when no pollutant feed contributed.
    pub pm25: f64,
    /// PM10 concentration; 0 when no pollutant feed contributed.
    pub pm10: f64,
    pub temp_min: i32,
    pub temp_max: i32,
    /// Observation time, epoch seconds.
    pub timestamp: i64,
}

/// One forecast slot. A response carries at most 24 of these, ascending by
/// time, truncated (not resampled) from whatever the vendor returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: i64,
    pub temp: f64,
    pub weather: String,
    pub icon: String,
    pub description: String,
}

/// Passthrough projection of one video-search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideo {
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_title: String,
}
