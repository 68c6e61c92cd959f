use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::ProviderError,
    model::{CurrentWeather, HourlyForecast, WeatherData},
    provider::{ConditionSlot, first_condition, read_json, round_temp},
};

use super::{WeatherProvider, WeatherQuery};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/3.0";

/// Hourly entries are truncated, not resampled, to this cap.
const MAX_HOURLY_ENTRIES: usize = 24;

/// One Call 3.0 integration: one combined current + hourly + daily feed at
/// hourly granularity.
#[derive(Debug, Clone)]
pub struct OneCallProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OneCallProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OneCallProvider {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherData, ProviderError> {
        let url = format!("{}/onecall", self.base_url);
        let lat = query.lat.to_string();
        let lon = query.lon.to_string();

        let mut params = vec![
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("appid", self.api_key.as_str()),
            ("units", query.units.as_str()),
            ("lang", query.lang.as_str()),
        ];
        if let Some(exclude) = query.exclude.as_deref() {
            params.push(("exclude", exclude));
        }

        debug!(lat = query.lat, lon = query.lon, "fetching one call weather");

        let res = self.http.get(&url).query(&params).send().await?;
        let parsed: OneCallResponse = read_json(res).await?;

        normalize(parsed)
    }
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    timezone: String,
    current: Option<OneCallCurrent>,
    #[serde(default)]
    hourly: Vec<OneCallHour>,
    #[serde(default)]
    daily: Vec<OneCallDay>,
}

#[derive(Debug, Deserialize)]
struct OneCallCurrent {
    dt: i64,
    temp: f64,
    feels_like: f64,
    humidity: u8,
    wind_speed: f64,
    #[serde(default)]
    weather: Vec<ConditionSlot>,
}

#[derive(Debug, Deserialize)]
struct OneCallHour {
    dt: i64,
    temp: f64,
    #[serde(default)]
    weather: Vec<ConditionSlot>,
}

#[derive(Debug, Deserialize)]
struct OneCallDay {
    temp: OneCallDayTemp,
}

#[derive(Debug, Deserialize)]
struct OneCallDayTemp {
    min: f64,
    max: f64,
}

/// Project the vendor payload into [`WeatherData`].
///
/// The `current` block is the one section that cannot be defaulted; its
/// absence is unrecoverable and surfaces as [`ProviderError::MalformedResponse`].
fn normalize(response: OneCallResponse) -> Result<WeatherData, ProviderError> {
    let current = response.current.ok_or_else(|| {
        ProviderError::MalformedResponse("missing current weather block".to_string())
    })?;

    let condition = first_condition(&current.weather);

    // "Asia/Seoul" -> "Seoul"; this feed carries no city name of its own.
    let city = response
        .timezone
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown")
        .to_string();

    let (temp_min, temp_max) = response
        .daily
        .first()
        .map_or((current.temp, current.temp), |day| (day.temp.min, day.temp.max));

    let hourly = response
        .hourly
        .into_iter()
        .take(MAX_HOURLY_ENTRIES)
        .map(|hour| {
            let slot = first_condition(&hour.weather);
            HourlyForecast {
                time: hour.dt,
                temp: hour.temp,
                weather: slot.main,
                icon: slot.icon,
                description: slot.description,
            }
        })
        .collect();

    Ok(WeatherData {
        current: CurrentWeather {
            temp: round_temp(current.temp),
            feels_like: round_temp(current.feels_like),
            humidity: current.humidity,
            wind_speed: current.wind_speed,
            weather: condition.main,
            description: condition.description,
            icon: condition.icon,
            city,
            pm25: 0.0,
            pm10: 0.0,
            temp_min: round_temp(temp_min),
            temp_max: round_temp(temp_max),
            timestamp: current.dt,
        },
        hourly,
    })
}
