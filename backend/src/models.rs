use rocket::serde::{Deserialize, Serialize};

/// A fully normalized video record as served by the PeerTube fan-out
/// search. Ids are prefixed per source so that merged result lists stay
/// globally unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub uploader: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub upload_date: String,
    pub platform: String,
    pub category: String,
    pub url: String,
    pub duration: String,
}

/// A video entry in a YouTube feed page. Leaner than [`Video`] because
/// the feed endpoints pass the upstream statistics through mostly raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideo {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: String,
    /// Raw view count as reported by the API, not display-formatted.
    pub view_count: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeFeedResponse {
    pub videos: Vec<YoutubeVideo>,
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_query_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_exceeded: Option<bool>,
}

impl YoutubeFeedResponse {
    pub fn page(
        videos: Vec<YoutubeVideo>,
        next_page_token: Option<String>,
        next_query_index: usize,
        current_query: Option<String>,
    ) -> Self {
        YoutubeFeedResponse {
            videos,
            next_page_token,
            next_query_index: Some(next_query_index),
            current_query,
            error: None,
            quota_exceeded: None,
        }
    }

    pub fn failure(message: &str) -> Self {
        YoutubeFeedResponse {
            videos: Vec::new(),
            next_page_token: None,
            next_query_index: None,
            current_query: None,
            error: Some(message.to_string()),
            quota_exceeded: None,
        }
    }

    pub fn quota(message: &str) -> Self {
        YoutubeFeedResponse {
            quota_exceeded: Some(true),
            ..YoutubeFeedResponse::failure(message)
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeSearchResponse {
    pub videos: Vec<YoutubeVideo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerTubeSearchResponse {
    pub videos: Vec<Video>,
    pub total: usize,
    pub instances_queried: usize,
    pub instances_succeeded: usize,
}

impl PeerTubeSearchResponse {
    pub fn empty() -> Self {
        PeerTubeSearchResponse {
            videos: Vec::new(),
            total: 0,
            instances_queried: 0,
            instances_succeeded: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
        }
    }
}
