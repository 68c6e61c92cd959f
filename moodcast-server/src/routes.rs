//! Route definitions

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes.
///
/// The dashboard is served cross-origin, so CORS is permissive and preflight
/// `OPTIONS` requests are answered here.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/weather", get(handlers::weather::get_weather))
        .route("/youtube", get(handlers::playlist::get_playlist))
        .route("/outfit", get(handlers::advisory::get_outfit))
        .route("/air", get(handlers::advisory::get_air_quality))
        .layer(cors)
        .with_state(state)
}
