//! Playlist endpoint

use axum::{
    Json,
    extract::{Query, State},
};
use moodcast_core::{YoutubeVideo, mock, playlist};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlaylistParams {
    pub weather: Option<String>,
    pub temp: Option<String>,
}

/// Response body: matched videos plus the query that selected them.
#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub items: Vec<YoutubeVideo>,
    pub query: String,
}

/// `GET /youtube?weather&temp`
///
/// This endpoint is always permissive: without a credential, or when the
/// vendor call fails, it serves the deterministic mock list instead.
pub async fn get_playlist(
    State(state): State<AppState>,
    Query(params): Query<PlaylistParams>,
) -> Json<PlaylistResponse> {
    let weather = params.weather.as_deref().unwrap_or("Clear");
    let temp: f64 = params.temp.as_deref().and_then(|t| t.parse().ok()).unwrap_or(20.0);

    let query = playlist::search_query(weather, temp);

    let items = match &state.youtube {
        Some(client) => match client.search(query).await {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "video search failed, serving mock playlist");
                mock::youtube_videos()
            }
        },
        None => mock::youtube_videos(),
    };

    Json(PlaylistResponse { items, query: query.to_string() })
}
