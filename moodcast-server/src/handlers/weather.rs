//! Weather endpoint

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use moodcast_core::{FallbackPolicy, WeatherData, WeatherQuery, mock};
use serde::Deserialize;
use tracing::warn;

use crate::{error::ApiError, state::AppState};

/// Default coordinates (Seoul) used by the permissive policy when the client
/// omits or garbles lat/lon.
const DEFAULT_LAT: f64 = 37.5665;
const DEFAULT_LON: f64 = 126.978;

/// Raw query parameters. Coordinates arrive as text so non-numeric input can
/// be answered with a 400 body instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub exclude: Option<String>,
    pub units: Option<String>,
    pub lang: Option<String>,
}

/// `GET /weather?lat&lon[&exclude&units&lang]`
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherData>, ApiError> {
    let query = build_query(&params, state.fallback)?;

    let Some(provider) = &state.weather else {
        return match state.fallback {
            FallbackPolicy::SubstituteMock => Ok(Json(mock::weather_data(Utc::now()))),
            FallbackPolicy::Propagate => Err(ApiError::MissingCredential),
        };
    };

    match provider.fetch(&query).await {
        Ok(data) => Ok(Json(data)),
        Err(err) => match state.fallback {
            FallbackPolicy::SubstituteMock => {
                warn!(error = %err, "vendor call failed, serving mock weather");
                Ok(Json(mock::weather_data(Utc::now())))
            }
            FallbackPolicy::Propagate => Err(err.into()),
        },
    }
}

fn build_query(params: &WeatherParams, fallback: FallbackPolicy) -> Result<WeatherQuery, ApiError> {
    let (lat, lon) = match parse_coordinates(params) {
        Some(coords) => coords,
        None => match fallback {
            FallbackPolicy::SubstituteMock => (DEFAULT_LAT, DEFAULT_LON),
            FallbackPolicy::Propagate => {
                return Err(ApiError::BadRequest("Invalid latitude or longitude".to_string()));
            }
        },
    };

    let mut query = WeatherQuery::new(lat, lon);
    query.exclude = params.exclude.clone();
    if let Some(units) = &params.units {
        query.units = units.clone();
    }
    if let Some(lang) = &params.lang {
        query.lang = lang.clone();
    }

    Ok(query)
}

/// Missing, non-numeric and zero coordinates all count as absent.
fn parse_coordinates(params: &WeatherParams) -> Option<(f64, f64)> {
    let lat: f64 = params.lat.as_deref()?.parse().ok()?;
    let lon: f64 = params.lon.as_deref()?.parse().ok()?;

    if lat == 0.0 || lon == 0.0 {
        return None;
    }

    Some((lat, lon))
}
