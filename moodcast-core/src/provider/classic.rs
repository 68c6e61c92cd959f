use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::ProviderError,
    model::{CurrentWeather, HourlyForecast, WeatherData},
    provider::{ConditionSlot, first_condition, read_json, round_temp},
};

use super::{WeatherProvider, WeatherQuery};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// The 5-day/3-hour feed covers 24 hours in its first 8 entries.
const MAX_FORECAST_ENTRIES: usize = 8;

/// Classic 2.5 integration: current weather, 5-day/3-hour forecast and air
/// pollution as three independent reads, merged after all have resolved or
/// individually defaulted.
#[derive(Debug, Clone)]
pub struct ClassicProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl ClassicProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http: Client::new(),
        }
    }

    fn location_params(&self, query: &WeatherQuery) -> Vec<(&'static str, String)> {
        vec![
            ("lat", query.lat.to_string()),
            ("lon", query.lon.to_string()),
            ("appid", self.api_key.clone()),
        ]
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<ClassicCurrentResponse, ProviderError> {
        let mut params = self.location_params(query);
        params.push(("units", query.units.clone()));
        params.push(("lang", query.lang.clone()));

        let res = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&params)
            .send()
            .await?;

        read_json(res).await
    }

    async fn fetch_forecast(&self, query: &WeatherQuery) -> Result<ForecastResponse, ProviderError> {
        let mut params = self.location_params(query);
        params.push(("units", query.units.clone()));
        params.push(("lang", query.lang.clone()));

        let res = self
            .http
            .get(format!("{}/forecast", self.base_url))
            .query(&params)
            .send()
            .await?;

        read_json(res).await
    }

    async fn fetch_air(&self, query: &WeatherQuery) -> Result<(f64, f64), ProviderError> {
        let res = self
            .http
            .get(format!("{}/air_pollution", self.base_url))
            .query(&self.location_params(query))
            .send()
            .await?;

        let parsed: AirPollutionResponse = read_json(res).await?;

        let components = parsed
            .list
            .into_iter()
            .next()
            .map(|entry| entry.components)
            .unwrap_or_default();

        // Concentrations are never negative in the normalized shape.
        Ok((components.pm2_5.max(0.0), components.pm10.max(0.0)))
    }
}

#[async_trait]
impl WeatherProvider for ClassicProvider {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherData, ProviderError> {
        debug!(lat = query.lat, lon = query.lon, "fetching classic weather feeds");

        let (current, forecast, air) = tokio::join!(
            self.fetch_current(query),
            self.fetch_forecast(query),
            self.fetch_air(query),
        );

        let current = current?;
        let forecast = forecast?;

        // The pollutant feed defaults individually; only the weather feeds
        // are required.
        let (pm25, pm10) = match air {
            Ok(values) => values,
            Err(err) => {
                warn!(error = %err, "air pollution feed unavailable, defaulting to 0");
                (0.0, 0.0)
            }
        };

        Ok(normalize(current, forecast, pm25, pm10))
    }
}

#[derive(Debug, Deserialize)]
struct ClassicCurrentResponse {
    name: String,
    dt: i64,
    main: ClassicMain,
    wind: ClassicWind,
    #[serde(default)]
    weather: Vec<ConditionSlot>,
}

#[derive(Debug, Deserialize)]
struct ClassicMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ClassicWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<ConditionSlot>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    components: AirComponents,
}

#[derive(Debug, Default, Deserialize)]
struct AirComponents {
    #[serde(default)]
    pm2_5: f64,
    #[serde(default)]
    pm10: f64,
}

fn normalize(
    current: ClassicCurrentResponse,
    forecast: ForecastResponse,
    pm25: f64,
    pm10: f64,
) -> WeatherData {
    let condition = first_condition(&current.weather);

    let hourly = forecast
        .list
        .into_iter()
        .take(MAX_FORECAST_ENTRIES)
        .map(|entry| {
            let slot = first_condition(&entry.weather);
            HourlyForecast {
                time: entry.dt,
                temp: entry.main.temp,
                weather: slot.main,
                icon: slot.icon,
                description: slot.description,
            }
        })
        .collect();

    WeatherData {
        current: CurrentWeather {
            temp: round_temp(current.main.temp),
            feels_like: round_temp(current.main.feels_like),
            humidity: current.main.humidity,
            wind_speed: current.wind.speed,
            weather: condition.main,
            description: condition.description,
            icon: condition.icon,
            city: current.name,
            pm25,
            pm10,
            temp_min: round_temp(current.main.temp_min),
            temp_max: round_temp(current.main.temp_max),
            timestamp: current.dt,
        },
        hourly,
    }
}
