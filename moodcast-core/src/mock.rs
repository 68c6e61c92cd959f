//! Deterministic datasets served when no vendor credential is configured.
//!
//! Demo mode keeps the dashboard fully functional in environments without
//! provisioned API keys; the data is fixed apart from the caller-supplied
//! anchor timestamp.

use chrono::{DateTime, Utc};

use crate::model::{CurrentWeather, HourlyForecast, WeatherData, YoutubeVideo};

/// Step between mock forecast slots (the 3-hourly vendor granularity).
const SLOT_SECS: i64 = 3 * 3600;

/// Fixed (temp, condition, icon) cycle for the mock forecast slots.
const MOCK_SLOTS: [(f64, &str, &str); 8] = [
    (6.0, "Clear", "01d"),
    (8.0, "Clouds", "03d"),
    (10.0, "Clouds", "03d"),
    (12.0, "Rain", "10d"),
    (11.0, "Rain", "10d"),
    (9.0, "Clouds", "03d"),
    (7.0, "Snow", "13d"),
    (5.0, "Clear", "01d"),
];

/// Demo-mode weather for Seoul, anchored at `now`.
pub fn weather_data(now: DateTime<Utc>) -> WeatherData {
    let now = now.timestamp();
    let hourly = MOCK_SLOTS
        .iter()
        .enumerate()
        .map(|(i, (temp, weather, icon))| HourlyForecast {
            time: now + i as i64 * SLOT_SECS,
            temp: *temp,
            weather: (*weather).to_string(),
            icon: (*icon).to_string(),
            description: "mock forecast".to_string(),
        })
        .collect();

    WeatherData {
        current: CurrentWeather {
            temp: 8,
            feels_like: 5,
            humidity: 55,
            wind_speed: 3.2,
            weather: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            icon: "03d".to_string(),
            city: "Seoul".to_string(),
            pm25: 25.0,
            pm10: 45.0,
            temp_min: 3,
            temp_max: 12,
            timestamp: now,
        },
        hourly,
    }
}

/// Demo-mode playlist entries.
pub fn youtube_videos() -> Vec<YoutubeVideo> {
    (0..8)
        .map(|i| YoutubeVideo {
            video_id: format!("mock-video-{i}"),
            title: format!("Weather Playlist {} - Chill Vibes", i + 1),
            thumbnail: format!("https://picsum.photos/seed/yt{i}/320/180"),
            channel_title: format!("Music Channel {}", i + 1),
        })
        .collect()
}
