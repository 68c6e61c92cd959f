use std::{convert::TryFrom, fmt::Debug};

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{Config, WeatherData, error::ProviderError};

pub mod classic;
pub mod onecall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// One Call 3.0: a single combined current + hourly + daily feed.
    OneCall,
    /// Classic 2.5: current weather, 5-day/3-hour forecast and air pollution
    /// as separate feeds.
    Classic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OneCall => "onecall",
            ProviderKind::Classic => "classic",
        }
    }

    pub const fn all() -> &'static [ProviderKind] {
        &[ProviderKind::OneCall, ProviderKind::Classic]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "onecall" => Ok(ProviderKind::OneCall),
            "classic" => Ok(ProviderKind::Classic),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: onecall, classic."
            )),
        }
    }
}

/// One inbound weather request, already validated by the caller.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
    /// Vendor sections to skip, e.g. "minutely,daily,alerts". Forwarded
    /// verbatim; an optimization, not a correctness requirement.
    pub exclude: Option<String>,
    pub units: String,
    pub lang: String,
}

impl WeatherQuery {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            exclude: None,
            units: "metric".to_string(),
            lang: "en".to_string(),
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherData, ProviderError>;
}

/// Construct the configured provider.
///
/// Fails when no vendor credential is present; whether keyless operation
/// falls back to demo mode is the caller's decision, not made here.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let kind = config.provider_kind()?;

    let api_key = config.openweather_api_key.clone().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeatherMap API key configured.\n\
             Hint: set OPENWEATHER_API_KEY or add `openweather_api_key` to the config file."
        )
    })?;

    let base_url = config.weather_base_url.clone();

    let boxed: Box<dyn WeatherProvider> = match kind {
        ProviderKind::OneCall => Box::new(onecall::OneCallProvider::new(api_key, base_url)),
        ProviderKind::Classic => Box::new(classic::ClassicProvider::new(api_key, base_url)),
    };

    Ok(boxed)
}

/// One entry of a vendor `weather` array. Every vendor feed in use carries
/// the same `{main, description, icon}` triple.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ConditionSlot {
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl Default for ConditionSlot {
    /// Documented substitute for an empty `weather` array.
    fn default() -> Self {
        Self {
            main: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
        }
    }
}

pub(crate) fn first_condition(list: &[ConditionSlot]) -> ConditionSlot {
    list.first().cloned().unwrap_or_default()
}

/// Display rounding for temperatures: half away from zero.
pub(crate) fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

/// Read a vendor response body, mapping non-success statuses to
/// [`ProviderError::Upstream`] with the vendor's own message when it sent one.
pub(crate) async fn read_json<T: DeserializeOwned>(
    res: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(ProviderError::Upstream {
            status: status.as_u16(),
            message: vendor_error_message(&body, status),
        });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

fn vendor_error_message(body: &str, status: reqwest::StatusCode) -> String {
    #[derive(Deserialize)]
    struct VendorErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<VendorErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
}
