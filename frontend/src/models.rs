use serde::{Deserialize, Serialize};

/// The normalized video shape every page renders. Ids carry a source
/// prefix (`local-`, `peertube-<instance>-`, bare YouTube id) so merged
/// lists never collide across catalogs. `views` and `likes` stay as
/// display strings; numeric ordering parses them on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail: String,
    pub uploader: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub likes: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub upload_date: String,
    pub platform: String,
    #[serde(default)]
    pub category: String,
    pub url: String,
    #[serde(default)]
    pub duration: String,
}

/// One watch-history record: a video plus watch-specific metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub video: Video,
    pub watched_at: String,
    pub watch_count: u32,
    #[serde(default)]
    pub completion_rate: Option<f64>,
}

/// Wire shape of one video in a `/api/youtube/*` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeFeedVideo {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: String,
    pub view_count: String,
    pub duration: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<YoutubeFeedVideo> for Video {
    fn from(video: YoutubeFeedVideo) -> Self {
        Video {
            url: format!("https://www.youtube.com/watch?v={}", video.id),
            id: video.id,
            title: video.title,
            description: String::new(),
            thumbnail: video.thumbnail,
            uploader: video.channel_title,
            views: video.view_count,
            likes: "0".to_string(),
            comments: "0".to_string(),
            upload_date: video.published_at,
            platform: "YouTube".to_string(),
            category: video.category.unwrap_or_else(|| "Videos".to_string()),
            duration: video.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeFeedResponse {
    #[serde(default)]
    pub videos: Vec<YoutubeFeedVideo>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub next_query_index: Option<usize>,
    #[serde(default)]
    pub current_query: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub quota_exceeded: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeSearchResponse {
    #[serde(default)]
    pub videos: Vec<YoutubeFeedVideo>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Wire shape of one video in a `/api/peertube/search` response; the
/// proxy reports counters as numbers, the UI wants display strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerTubeVideo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail: String,
    pub uploader: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub upload_date: String,
    pub platform: String,
    #[serde(default)]
    pub category: String,
    pub url: String,
    #[serde(default)]
    pub duration: String,
}

impl From<PeerTubeVideo> for Video {
    fn from(video: PeerTubeVideo) -> Self {
        Video {
            id: video.id,
            title: video.title,
            description: video.description,
            thumbnail: video.thumbnail,
            uploader: video.uploader,
            views: video.views.to_string(),
            likes: video.likes.to_string(),
            comments: video.comments.to_string(),
            upload_date: video.upload_date,
            platform: video.platform,
            category: video.category,
            url: video.url,
            duration: video.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerTubeSearchResponse {
    #[serde(default)]
    pub videos: Vec<PeerTubeVideo>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub instances_queried: usize,
    #[serde(default)]
    pub instances_succeeded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_videos_normalize_with_watch_url() {
        let wire = YoutubeFeedVideo {
            id: "dQw4w9WgXcQ".to_string(),
            title: "clip".to_string(),
            thumbnail: "t.jpg".to_string(),
            channel_title: "a channel".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            view_count: "1500".to_string(),
            duration: "5:09".to_string(),
            category: Some("programming".to_string()),
        };

        let video: Video = wire.into();
        assert_eq!(video.url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(video.platform, "YouTube");
        assert_eq!(video.views, "1500");
        assert_eq!(video.category, "programming");
    }

    #[test]
    fn peertube_counters_become_display_strings() {
        let wire = PeerTubeVideo {
            id: "peertube-blender-u1".to_string(),
            title: "Spring".to_string(),
            description: String::new(),
            thumbnail: "t.jpg".to_string(),
            uploader: "Blender Studio".to_string(),
            views: 42000,
            likes: 512,
            comments: 37,
            upload_date: "2019-04-04T10:00:00Z".to_string(),
            platform: "PeerTube - Blender".to_string(),
            category: "Videos".to_string(),
            url: "/peertube/u1".to_string(),
            duration: "7:44".to_string(),
        };

        let video: Video = wire.into();
        assert_eq!(video.views, "42000");
        assert_eq!(video.likes, "512");
        assert_eq!(video.id, "peertube-blender-u1");
    }

    #[test]
    fn history_entries_round_trip_flattened_json() {
        let entry = HistoryEntry {
            video: Video {
                id: "local-1".to_string(),
                title: "t".to_string(),
                description: String::new(),
                thumbnail: String::new(),
                uploader: "u".to_string(),
                views: "10".to_string(),
                likes: "2".to_string(),
                comments: "0".to_string(),
                upload_date: "2024-01-01T00:00:00Z".to_string(),
                platform: "Vidion".to_string(),
                category: "Videos".to_string(),
                url: "/watch/1".to_string(),
                duration: "5:09".to_string(),
            },
            watched_at: "2024-02-02T00:00:00Z".to_string(),
            watch_count: 3,
            completion_rate: Some(80.0),
        };

        let json = serde_json::to_string(&entry).expect("serialize");
        assert!(json.contains("\"watchedAt\""));
        assert!(json.contains("\"uploadDate\""));

        let back: HistoryEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, entry);
    }
}
