use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::provider::ProviderKind;

/// What to do when a vendor is unreachable or no credential is configured.
///
/// The strict and permissive deployment variants differ only in this value;
/// there is a single request path either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Surface vendor failures to the client as errors.
    Propagate,
    /// Serve the deterministic demo dataset instead of failing.
    SubstituteMock,
}

impl FallbackPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::Propagate => "propagate",
            FallbackPolicy::SubstituteMock => "mock",
        }
    }
}

impl TryFrom<&str> for FallbackPolicy {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "propagate" => Ok(FallbackPolicy::Propagate),
            "mock" => Ok(FallbackPolicy::SubstituteMock),
            _ => Err(anyhow::anyhow!(
                "Unknown fallback policy '{value}'. Supported policies: propagate, mock."
            )),
        }
    }
}

/// Top-level configuration, optionally read from a TOML file and always
/// overridable through the environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// OpenWeatherMap API key; absent means weather demo mode.
    pub openweather_api_key: Option<String>,

    /// YouTube Data API key; absent means playlist demo mode.
    pub youtube_api_key: Option<String>,

    /// Weather integration, "onecall" or "classic".
    pub provider: Option<String>,

    /// Failure handling, "propagate" or "mock". Defaults per integration.
    pub fallback: Option<String>,

    /// Override for the weather vendor base URL.
    pub weather_base_url: Option<String>,

    /// Override for the video-search vendor base URL.
    pub youtube_base_url: Option<String>,

    /// Listen address for the server, e.g. "0.0.0.0:8787".
    pub bind: Option<String>,
}

impl Config {
    /// Load config from an optional TOML file, then apply environment
    /// overrides. No file and no environment yields a demo-mode default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            }
            None => Self::default(),
        };

        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Ok(v) = env::var("OPENWEATHER_API_KEY") {
            self.openweather_api_key = Some(v);
        }
        if let Ok(v) = env::var("YOUTUBE_API_KEY") {
            self.youtube_api_key = Some(v);
        }
        if let Ok(v) = env::var("MOODCAST_PROVIDER") {
            self.provider = Some(v);
        }
        if let Ok(v) = env::var("MOODCAST_FALLBACK") {
            self.fallback = Some(v);
        }
        if let Ok(v) = env::var("MOODCAST_WEATHER_URL") {
            self.weather_base_url = Some(v);
        }
        if let Ok(v) = env::var("MOODCAST_YOUTUBE_URL") {
            self.youtube_base_url = Some(v);
        }
        if let Ok(v) = env::var("MOODCAST_BIND") {
            self.bind = Some(v);
        }
    }

    /// Return the configured weather integration as a strongly-typed
    /// [`ProviderKind`]; the classic integration is the default.
    pub fn provider_kind(&self) -> Result<ProviderKind> {
        match &self.provider {
            Some(s) => ProviderKind::try_from(s.as_str()),
            None => Ok(ProviderKind::Classic),
        }
    }

    /// Failure handling for the weather endpoint. Unless overridden, the One
    /// Call integration propagates vendor failures while the classic
    /// integration substitutes the demo dataset.
    pub fn fallback_policy(&self) -> Result<FallbackPolicy> {
        match &self.fallback {
            Some(s) => FallbackPolicy::try_from(s.as_str()),
            None => Ok(match self.provider_kind()? {
                ProviderKind::OneCall => FallbackPolicy::Propagate,
                ProviderKind::Classic => FallbackPolicy::SubstituteMock,
            }),
        }
    }

    pub fn bind_addr(&self) -> &str {
        self.bind.as_deref().unwrap_or("0.0.0.0:8787")
    }
}
