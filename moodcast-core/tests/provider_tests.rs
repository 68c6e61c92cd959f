//! Vendor-path tests for the weather and video integrations.
//!
//! These run the real HTTP clients against a wiremock server to cover the
//! request shapes, status handling and normalization end to end.

use moodcast_core::{
    ProviderError, WeatherProvider, WeatherQuery, YoutubeClient,
    provider::{classic::ClassicProvider, onecall::OneCallProvider},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn onecall_body() -> serde_json::Value {
    json!({
        "lat": 37.5665,
        "lon": 126.978,
        "timezone": "Asia/Seoul",
        "timezone_offset": 32400,
        "current": {
            "dt": 1_700_000_000,
            "temp": 7.6,
            "feels_like": 5.4,
            "humidity": 55,
            "wind_speed": 3.2,
            "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}]
        },
        "hourly": (0..30).map(|i| json!({
            "dt": 1_700_000_000 + i * 3600,
            "temp": 6.0 + f64::from(i) * 0.5,
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]
        })).collect::<Vec<_>>(),
        "daily": [{"temp": {"min": 2.7, "max": 11.2, "day": 8.0, "night": 4.0, "eve": 6.0, "morn": 3.0}}]
    })
}

#[tokio::test]
async fn onecall_normalizes_a_success_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/onecall"))
        .and(query_param("appid", "KEY"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(onecall_body()))
        .mount(&server)
        .await;

    let provider = OneCallProvider::new("KEY".to_string(), Some(server.uri()));
    let data = provider.fetch(&WeatherQuery::new(37.5665, 126.978)).await.unwrap();

    assert_eq!(data.current.city, "Seoul");
    assert_eq!(data.current.temp, 8);
    assert_eq!(data.current.temp_min, 3);
    assert_eq!(data.current.temp_max, 11);
    assert_eq!(data.hourly.len(), 24);
}

#[tokio::test]
async fn onecall_forwards_the_exclude_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/onecall"))
        .and(query_param("exclude", "minutely,daily,alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(onecall_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OneCallProvider::new("KEY".to_string(), Some(server.uri()));
    let mut query = WeatherQuery::new(37.5665, 126.978);
    query.exclude = Some("minutely,daily,alerts".to_string());

    provider.fetch(&query).await.unwrap();
}

#[tokio::test]
async fn onecall_propagates_the_vendor_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/onecall"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"cod": 401, "message": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let provider = OneCallProvider::new("BAD".to_string(), Some(server.uri()));
    let err = provider.fetch(&WeatherQuery::new(37.5665, 126.978)).await.unwrap_err();

    match err {
        ProviderError::Upstream { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

fn classic_current_body() -> serde_json::Value {
    json!({
        "name": "Seoul",
        "dt": 1_700_000_000,
        "main": {"temp": 8.3, "feels_like": 5.2, "temp_min": 3.4, "temp_max": 11.6, "humidity": 55},
        "wind": {"speed": 3.2},
        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}]
    })
}

fn classic_forecast_body(entries: usize) -> serde_json::Value {
    json!({
        "list": (0..entries).map(|i| json!({
            "dt": 1_700_000_000 + i as i64 * 3 * 3600,
            "main": {"temp": 6.0 + i as f64},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]
        })).collect::<Vec<_>>()
    })
}

async fn mount_classic_weather_feeds(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(classic_current_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(classic_forecast_body(12)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn classic_merges_the_pollutant_feed() {
    let server = MockServer::start().await;
    mount_classic_weather_feeds(&server).await;

    Mock::given(method("GET"))
        .and(path("/air_pollution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [{"components": {"pm2_5": 25.3, "pm10": 45.1, "no2": 18.0}}]
        })))
        .mount(&server)
        .await;

    let provider = ClassicProvider::new("KEY".to_string(), Some(server.uri()));
    let data = provider.fetch(&WeatherQuery::new(37.5665, 126.978)).await.unwrap();

    assert_eq!(data.current.city, "Seoul");
    assert_eq!(data.current.pm25, 25.3);
    assert_eq!(data.current.pm10, 45.1);
    assert_eq!(data.hourly.len(), 8);
}

#[tokio::test]
async fn classic_defaults_pollutants_when_the_air_feed_fails() {
    let server = MockServer::start().await;
    mount_classic_weather_feeds(&server).await;

    Mock::given(method("GET"))
        .and(path("/air_pollution"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = ClassicProvider::new("KEY".to_string(), Some(server.uri()));
    let data = provider.fetch(&WeatherQuery::new(37.5665, 126.978)).await.unwrap();

    assert_eq!(data.current.pm25, 0.0);
    assert_eq!(data.current.pm10, 0.0);
}

#[tokio::test]
async fn classic_fails_when_the_current_feed_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "city not found"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(classic_forecast_body(2)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/air_pollution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
        .mount(&server)
        .await;

    let provider = ClassicProvider::new("KEY".to_string(), Some(server.uri()));
    let err = provider.fetch(&WeatherQuery::new(37.5665, 126.978)).await.unwrap_err();

    assert!(matches!(err, ProviderError::Upstream { status: 404, .. }));
}

#[tokio::test]
async fn youtube_search_projects_at_most_eight_items() {
    let server = MockServer::start().await;

    let items: Vec<_> = (0..10)
        .map(|i| {
            json!({
                "id": {"kind": "youtube#video", "videoId": format!("vid-{i}")},
                "snippet": {
                    "title": format!("Video {i}"),
                    "channelTitle": format!("Channel {i}"),
                    "thumbnails": {"medium": {"url": format!("https://img.example/{i}.jpg")}}
                }
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rainy day playlist lofi chill"))
        .and(query_param("maxResults", "8"))
        .and(query_param("videoCategoryId", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": items})))
        .mount(&server)
        .await;

    let client = YoutubeClient::new("KEY".to_string(), Some(server.uri()));
    let videos = client.search("rainy day playlist lofi chill").await.unwrap();

    assert_eq!(videos.len(), 8);
    assert_eq!(videos[0].video_id, "vid-0");
}

#[tokio::test]
async fn youtube_search_surfaces_quota_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "quotaExceeded"})))
        .mount(&server)
        .await;

    let client = YoutubeClient::new("KEY".to_string(), Some(server.uri()));
    let err = client.search("chill relax playlist music").await.unwrap_err();

    assert!(matches!(err, ProviderError::Upstream { status: 403, .. }));
}
