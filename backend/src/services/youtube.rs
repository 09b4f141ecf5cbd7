use crate::models::YoutubeVideo;
use crate::services::key_rotation::{KeyPool, RotationError};
use crate::utils::{format_iso8601_duration, is_short_form_duration};
use log::warn;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";

pub const VIDEOS_PER_PAGE: usize = 12;

/// Topics rotated through by the home feed.
pub const SEARCH_QUERIES: &[&str] = &[
    "India",
    "Bollywood",
    "Indian Music",
    "Cricket India",
    "South Asia Travel",
    "Indian Food",
    "Indian Comedy",
    "India News",
];

/// Topics rotated through by the programming feed.
pub const PROGRAMMING_KEYWORDS: &[&str] = &[
    // Core programming & algorithms
    "Programming Fundamentals",
    "Sorting Algorithms",
    "QuickSort",
    "MergeSort",
    "Knapsack Problem",
    "Dynamic Programming",
    "Breadth-First Search BFS",
    "Depth-First Search DFS",
    "Binary Trees",
    "Tree Traversals",
    "Hashing",
    "Hash Tables",
    "AVL Trees",
    "Recursion",
    "Backtracking",
    "Greedy Algorithms",
    "Divide and Conquer",
    "Heap Data Structures",
    "Graph Traversal",
    "N-Queens Problem",
    "Segment Trees",
    "Trie Data Structure",
    "String Processing",
    "Red-Black Trees",
    "B-Trees",
    "Radix Sort",
    "Topological Sort",
    "Kadane's Algorithm",
    "Dijkstra's Algorithm",
    "A* Search Algorithm",
    "Sliding Window Technique",
    "Two-Pointer Technique",
    "Bit Manipulation",
    "KMP Algorithm",
    // Math & problem patterns
    "Number System",
    "Factorial",
    "Check Prime Number",
    "Reverse Integer",
    "Time Complexity",
    "Space Complexity",
    "Pascal's Triangle",
    "Combinatorics",
    "Linear Algebra",
    "Probability",
    // System & Linux
    "Linux Programming",
    "Terminal Commands",
    "Bash Scripting",
    "Git Tutorial",
    "Version Control",
    "Linux Kernel",
    "Docker Tutorial",
    "Kubernetes",
    "Cloud Computing",
    "CI/CD Pipeline",
    "grep command",
    "ssh tutorial",
    "cron jobs",
    // AI/ML & data science
    "Machine Learning",
    "Artificial Intelligence",
    "Deep Learning",
    "Neural Networks",
    "Reinforcement Learning",
    "Natural Language Processing",
    "Computer Vision",
    "PyTorch Tutorial",
    "TensorFlow Tutorial",
    "OpenCV Tutorial",
    // Robotics & hardware
    "Microcontrollers",
    "Arduino",
    "STM32",
    "PCB Design",
    "Kinematics",
    "Motion Planning",
    // Development & ops
    "REST API",
    "GraphQL API",
    "SQL Database",
    "NoSQL Database",
    "Unit Testing",
    "Test-Driven Development",
    "Design Patterns",
    "SOLID Principles",
    "Functional Programming",
    "React Tutorial",
    "Django Tutorial",
    // Miscellaneous
    "Quantum Computing",
    "Blockchain",
    "Internet of Things",
    "Edge Computing",
    "Numerical Methods",
    "Computational Geometry",
];

/// One page of the two-stage search.list -> videos.list pipeline.
pub struct VideoPage {
    pub videos: Vec<YoutubeVideo>,
    pub next_page_token: Option<String>,
    /// True when the current keyword produced nothing joinable and the
    /// caller should rotate to its next keyword regardless of tokens.
    pub exhausted: bool,
}

impl VideoPage {
    fn exhausted(next_page_token: Option<String>) -> Self {
        VideoPage {
            videos: Vec::new(),
            next_page_token,
            exhausted: true,
        }
    }
}

/// Fetch one page of videos for `query`: search.list for candidates,
/// videos.list for details, then join and drop anything that looks
/// like short-form content.
pub async fn fetch_video_page(
    pool: &KeyPool,
    client: &Client,
    query: &str,
    page_token: Option<&str>,
    region: &str,
    order_by_relevance: bool,
    category: Option<&str>,
) -> Result<VideoPage, RotationError> {
    let mut search_params: Vec<(&str, String)> = vec![
        ("part", "snippet".to_string()),
        ("q", query.to_string()),
        ("type", "video".to_string()),
        ("maxResults", VIDEOS_PER_PAGE.to_string()),
        ("regionCode", region.to_string()),
        ("videoDefinition", "high".to_string()),
        ("relevanceLanguage", "en".to_string()),
        ("videoDuration", "medium".to_string()),
        ("videoType", "any".to_string()),
    ];
    if order_by_relevance {
        search_params.push(("order", "relevance".to_string()));
    }
    if let Some(token) = page_token {
        search_params.push(("pageToken", token.to_string()));
    }

    let search_url = Url::parse_with_params(SEARCH_ENDPOINT, &search_params)
        .expect("search endpoint URL is valid");
    let search_data = pool.fetch_json(client, search_url.as_str()).await?;

    let search_items = search_data
        .as_ref()
        .and_then(|data| data.get("items"))
        .and_then(|items| items.as_array())
        .cloned()
        .unwrap_or_default();

    if search_items.is_empty() {
        // Nothing for this keyword; the caller moves on with no token.
        return Ok(VideoPage::exhausted(None));
    }

    let next_page_token = search_data
        .as_ref()
        .and_then(|data| data.get("nextPageToken"))
        .and_then(|token| token.as_str())
        .map(String::from);

    let video_ids: Vec<&str> = search_items
        .iter()
        .filter_map(|item| item.get("id")?.get("videoId")?.as_str())
        .collect();

    if video_ids.is_empty() {
        return Ok(VideoPage::exhausted(next_page_token));
    }

    let details_url = Url::parse_with_params(
        VIDEOS_ENDPOINT,
        &[
            ("part", "snippet,contentDetails,statistics".to_string()),
            ("id", video_ids.join(",")),
            ("maxResults", VIDEOS_PER_PAGE.to_string()),
        ],
    )
    .expect("videos endpoint URL is valid");
    let details_data = pool.fetch_json(client, details_url.as_str()).await?;

    let mut details_by_id: HashMap<String, Value> = HashMap::new();
    if let Some(items) = details_data
        .as_ref()
        .and_then(|data| data.get("items"))
        .and_then(|items| items.as_array())
    {
        for item in items {
            if let Some(id) = item.get("id").and_then(|id| id.as_str()) {
                details_by_id.insert(id.to_string(), item.clone());
            }
        }
    }

    if details_by_id.is_empty() {
        warn!("No details found for video IDs: {}", video_ids.join(","));
        return Ok(VideoPage::exhausted(next_page_token));
    }

    let videos = search_items
        .iter()
        .filter_map(|item| {
            let video_id = item.get("id")?.get("videoId")?.as_str()?;
            // Ids with no detail record are treated as deleted upstream.
            let details = details_by_id.get(video_id)?;
            build_feed_video(video_id, item, details, category)
        })
        .collect();

    Ok(VideoPage {
        videos,
        next_page_token,
        exhausted: false,
    })
}

fn snippet_str<'a>(snippet: Option<&'a Value>, field: &str) -> Option<&'a str> {
    snippet?.get(field)?.as_str()
}

fn thumbnail_field<'a>(snippet: Option<&'a Value>, field: &str) -> Option<&'a Value> {
    snippet?.get("thumbnails")?.get("high")?.get(field)
}

/// Join one search item with its detail record, or return `None` when
/// the video trips either short-form heuristic.
fn build_feed_video(
    video_id: &str,
    search_item: &Value,
    details: &Value,
    category: Option<&str>,
) -> Option<YoutubeVideo> {
    let detail_snippet = details.get("snippet");
    let search_snippet = search_item.get("snippet");

    let thumbnail = thumbnail_field(detail_snippet, "url")
        .or_else(|| thumbnail_field(search_snippet, "url"))
        .and_then(|url| url.as_str())
        .unwrap_or_default();
    let width = thumbnail_field(detail_snippet, "width")
        .or_else(|| thumbnail_field(search_snippet, "width"))
        .and_then(|w| w.as_u64())
        .unwrap_or(0);
    let height = thumbnail_field(detail_snippet, "height")
        .or_else(|| thumbnail_field(search_snippet, "height"))
        .and_then(|h| h.as_u64())
        .unwrap_or(0);

    // Portrait thumbnails are almost always Shorts.
    if height > width {
        warn!("Filtering out portrait video: {video_id}");
        return None;
    }

    let duration = details
        .get("contentDetails")
        .and_then(|content| content.get("duration"))
        .and_then(|duration| duration.as_str())
        .unwrap_or_default();
    if is_short_form_duration(duration) {
        warn!("Filtering out short duration video: {video_id}");
        return None;
    }

    let title = snippet_str(detail_snippet, "title")
        .or_else(|| snippet_str(search_snippet, "title"))
        .unwrap_or("Untitled");
    let channel_title = snippet_str(detail_snippet, "channelTitle")
        .or_else(|| snippet_str(search_snippet, "channelTitle"))
        .unwrap_or("Unknown Channel");
    let published_at = snippet_str(detail_snippet, "publishedAt")
        .or_else(|| snippet_str(search_snippet, "publishedAt"))
        .map(String::from)
        .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());
    let view_count = details
        .get("statistics")
        .and_then(|stats| stats.get("viewCount"))
        .and_then(|count| count.as_str())
        .unwrap_or("0");

    Some(YoutubeVideo {
        id: video_id.to_string(),
        title: title.to_string(),
        thumbnail: thumbnail.to_string(),
        channel_title: channel_title.to_string(),
        published_at,
        view_count: view_count.to_string(),
        duration: format_iso8601_duration(duration),
        category: category.map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_item(id: &str) -> Value {
        json!({
            "id": { "videoId": id },
            "snippet": {
                "title": "search title",
                "channelTitle": "search channel",
                "publishedAt": "2024-03-01T12:00:00Z",
                "thumbnails": { "high": { "url": "s.jpg", "width": 480, "height": 360 } }
            }
        })
    }

    fn detail_item(id: &str, duration: &str, width: u64, height: u64) -> Value {
        json!({
            "id": id,
            "snippet": {
                "title": "detail title",
                "channelTitle": "detail channel",
                "publishedAt": "2024-03-02T12:00:00Z",
                "thumbnails": { "high": { "url": "d.jpg", "width": width, "height": height } }
            },
            "contentDetails": { "duration": duration },
            "statistics": { "viewCount": "12345" }
        })
    }

    #[test]
    fn joins_search_and_detail_records() {
        let search = search_item("abc");
        let details = detail_item("abc", "PT5M9S", 480, 360);

        let video = build_feed_video("abc", &search, &details, Some("programming"))
            .expect("video should survive the join");

        assert_eq!(video.id, "abc");
        assert_eq!(video.title, "detail title");
        assert_eq!(video.channel_title, "detail channel");
        assert_eq!(video.thumbnail, "d.jpg");
        assert_eq!(video.view_count, "12345");
        assert_eq!(video.duration, "5:09");
        assert_eq!(video.category.as_deref(), Some("programming"));
    }

    #[test]
    fn drops_portrait_thumbnails() {
        let search = search_item("abc");
        let details = detail_item("abc", "PT5M9S", 360, 480);

        assert!(build_feed_video("abc", &search, &details, None).is_none());
    }

    #[test]
    fn drops_sub_minute_durations() {
        let search = search_item("abc");
        let details = detail_item("abc", "PT45S", 480, 360);

        assert!(build_feed_video("abc", &search, &details, None).is_none());
    }

    #[test]
    fn keeps_long_videos_with_landscape_thumbnails() {
        let search = search_item("abc");
        let details = detail_item("abc", "PT1H2M3S", 1280, 720);

        let video = build_feed_video("abc", &search, &details, None).expect("video");
        assert_eq!(video.duration, "1:02:03");
        assert_eq!(video.category, None);
    }

    #[test]
    fn falls_back_to_search_snippet_fields() {
        let search = search_item("abc");
        let details = json!({
            "id": "abc",
            "contentDetails": { "duration": "PT5M" },
            "statistics": {}
        });

        let video = build_feed_video("abc", &search, &details, None).expect("video");
        assert_eq!(video.title, "search title");
        assert_eq!(video.channel_title, "search channel");
        assert_eq!(video.thumbnail, "s.jpg");
        assert_eq!(video.view_count, "0");
    }

    #[test]
    fn keyword_lists_are_non_empty() {
        assert!(!SEARCH_QUERIES.is_empty());
        assert!(!PROGRAMMING_KEYWORDS.is_empty());
    }
}
