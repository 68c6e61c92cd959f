//! Outfit and air-quality advisory endpoints
//!
//! Presentation decisions the dashboard derives from already-fetched weather
//! values: what the character wears and how the pollutant badges read.

use axum::{Json, extract::Query};
use moodcast_core::{AirQualityLevel, Outfit, WeatherCategory, outfit};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct OutfitParams {
    pub temp: Option<String>,
    pub weather: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OutfitResponse {
    pub category: WeatherCategory,
    pub outfit: Outfit,
    pub advice: &'static str,
}

/// `GET /outfit?temp&weather`
pub async fn get_outfit(
    Query(params): Query<OutfitParams>,
) -> Result<Json<OutfitResponse>, ApiError> {
    let temp: f64 = params
        .temp
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("Missing temperature".to_string()))?
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid temperature".to_string()))?;

    let weather = params.weather.as_deref().unwrap_or("Clear");

    Ok(Json(OutfitResponse {
        category: WeatherCategory::from_label(weather),
        outfit: Outfit::select(temp, weather),
        advice: outfit::advice(temp),
    }))
}

#[derive(Debug, Deserialize)]
pub struct AirParams {
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
}

/// One pollutant badge.
#[derive(Debug, Serialize)]
pub struct PollutantReading {
    pub value: f64,
    pub label: &'static str,
    pub color: &'static str,
}

impl PollutantReading {
    fn new(value: f64) -> Self {
        let level = AirQualityLevel::from_concentration(value);
        Self { value, label: level.label(), color: level.color() }
    }
}

#[derive(Debug, Serialize)]
pub struct AirResponse {
    pub pm25: PollutantReading,
    pub pm10: PollutantReading,
}

/// `GET /air?pm25&pm10`; missing values read as 0.
pub async fn get_air_quality(Query(params): Query<AirParams>) -> Json<AirResponse> {
    Json(AirResponse {
        pm25: PollutantReading::new(params.pm25.unwrap_or(0.0)),
        pm10: PollutantReading::new(params.pm10.unwrap_or(0.0)),
    })
}
