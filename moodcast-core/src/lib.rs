//! Core library for the `moodcast` weather dashboard.
//!
//! This crate defines:
//! - Configuration handling
//! - Abstraction over weather vendors and normalization into [`WeatherData`]
//! - Pure presentation rules (weather category, air quality, outfit, playlist query)
//! - Deterministic mock datasets for the keyless demo mode
//!
//! It is used by `moodcast-server`, but can also be reused by other binaries or services.

pub mod classify;
pub mod config;
pub mod error;
pub mod mock;
pub mod model;
pub mod outfit;
pub mod playlist;
pub mod provider;
pub mod youtube;

pub use classify::{AirQualityLevel, WeatherCategory};
pub use config::{Config, FallbackPolicy};
pub use error::ProviderError;
pub use model::{CurrentWeather, HourlyForecast, WeatherData, YoutubeVideo};
pub use outfit::Outfit;
pub use provider::{ProviderKind, WeatherProvider, WeatherQuery};
pub use youtube::YoutubeClient;
