use std::sync::Arc;

use anyhow::Result;
use moodcast_core::{Config, FallbackPolicy, WeatherProvider, YoutubeClient, provider};
use tracing::warn;

/// Shared per-request state.
///
/// A `None` integration means no credential was configured; the handlers
/// decide between demo mode and a credential error based on the policy.
#[derive(Debug, Clone)]
pub struct AppState {
    pub weather: Option<Arc<dyn WeatherProvider>>,
    pub youtube: Option<Arc<YoutubeClient>>,
    pub fallback: FallbackPolicy,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let fallback = config.fallback_policy()?;

        let weather = if config.openweather_api_key.is_some() {
            Some(Arc::from(provider::provider_from_config(config)?))
        } else {
            warn!("no OpenWeatherMap API key configured, weather runs in demo mode");
            None
        };

        let youtube = match config.youtube_api_key.clone() {
            Some(key) => Some(Arc::new(YoutubeClient::new(key, config.youtube_base_url.clone()))),
            None => {
                warn!("no YouTube API key configured, playlist runs in demo mode");
                None
            }
        };

        Ok(Self { weather, youtube, fallback })
    }
}
