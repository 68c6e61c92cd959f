//! Video-search integration for the weather-matched playlist panel.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::ProviderError, model::YoutubeVideo, provider::read_json};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Music videos per search; the dashboard carousel shows at most this many.
const MAX_RESULTS: usize = 8;

/// YouTube Data API search client.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl YoutubeClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http: Client::new(),
        }
    }

    /// Search music videos for a playlist query, projecting at most 8 results.
    pub async fn search(&self, query: &str) -> Result<Vec<YoutubeVideo>, ProviderError> {
        let url = format!("{}/search", self.base_url);

        debug!(query, "searching playlist videos");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", "8"),
                ("videoCategoryId", "10"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let parsed: SearchResponse = read_json(res).await?;

        Ok(parsed
            .items
            .into_iter()
            .filter_map(project_item)
            .take(MAX_RESULTS)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Non-video results carry no `videoId` and are dropped.
fn project_item(item: SearchItem) -> Option<YoutubeVideo> {
    let video_id = item.id.video_id?;
    let thumbnail = item.snippet.thumbnails.medium.map(|t| t.url).unwrap_or_default();

    Some(YoutubeVideo {
        video_id,
        title: item.snippet.title,
        thumbnail,
        channel_title: item.snippet.channel_title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_keeps_video_results_only() {
        let parsed: SearchResponse = serde_json::from_value(json!({
            "items": [
                {
                    "id": {"kind": "youtube#video", "videoId": "abc123"},
                    "snippet": {
                        "title": "Rainy Lofi",
                        "channelTitle": "Lofi Channel",
                        "thumbnails": {"medium": {"url": "https://img.example/abc.jpg"}}
                    }
                },
                {
                    "id": {"kind": "youtube#channel"},
                    "snippet": {"title": "A Channel", "channelTitle": "A Channel"}
                }
            ]
        }))
        .unwrap();

        let videos: Vec<_> = parsed.items.into_iter().filter_map(project_item).collect();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].video_id, "abc123");
        assert_eq!(videos[0].thumbnail, "https://img.example/abc.jpg");
        assert_eq!(videos[0].channel_title, "Lofi Channel");
    }

    #[test]
    fn missing_thumbnail_projects_to_empty_url() {
        let item: SearchItem = serde_json::from_value(json!({
            "id": {"videoId": "xyz"},
            "snippet": {"title": "T", "channelTitle": "C"}
        }))
        .unwrap();

        let video = project_item(item).unwrap();
        assert_eq!(video.thumbnail, "");
    }
}
