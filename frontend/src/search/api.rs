use crate::env_variable_utils::BACKEND_URL;
use crate::models::{PeerTubeSearchResponse, Video, YoutubeSearchResponse};
use crate::storage::preferences;
use crate::utils::format_seconds_duration;
use gloo_net::http::Request;
use serde_json::Value;
use yew::prelude::*;

/// Fetch YouTube matches through the proxy. A failed fetch surfaces an
/// error message and flips the source toggle off, but never touches
/// results already collected from other sources.
pub async fn fetch_youtube_results(
    query: String,
    youtube_results: UseStateHandle<Vec<Video>>,
    error_message: UseStateHandle<Option<String>>,
    show_youtube: UseStateHandle<bool>,
    loading: UseStateHandle<bool>,
) {
    let url = format!(
        "{}/api/youtube/search?q={}",
        &*BACKEND_URL,
        urlencoding::encode(&query)
    );

    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<YoutubeSearchResponse>().await {
            Ok(payload) => {
                if let Some(error) = payload.error {
                    log::error!("YouTube proxy error: {error}");
                    youtube_failed(&error_message, &show_youtube);
                } else {
                    youtube_results.set(payload.videos.into_iter().map(Video::from).collect());
                }
            }
            Err(e) => {
                log::error!("Failed to parse YouTube proxy response: {e}");
                youtube_failed(&error_message, &show_youtube);
            }
        },
        Ok(response) => {
            log::error!("YouTube proxy responded with status {}", response.status());
            youtube_failed(&error_message, &show_youtube);
        }
        Err(e) => {
            log::error!("YouTube proxy unreachable: {e}");
            youtube_failed(&error_message, &show_youtube);
        }
    }

    loading.set(false);
}

fn youtube_failed(error_message: &UseStateHandle<Option<String>>, show: &UseStateHandle<bool>) {
    error_message.set(Some(
        "Failed to fetch YouTube videos. Showing local results only.".to_string(),
    ));
    show.set(false);
}

/// Fetch PeerTube matches: the proxy fan-out first, then the
/// user-supplied custom instance, if one is stored. The custom
/// instance failing is logged but never fails the whole source.
pub async fn fetch_peertube_results(
    query: String,
    peertube_results: UseStateHandle<Vec<Video>>,
    error_message: UseStateHandle<Option<String>>,
    show_peertube: UseStateHandle<bool>,
    loading: UseStateHandle<bool>,
) {
    let url = format!(
        "{}/api/peertube/search?q={}",
        &*BACKEND_URL,
        urlencoding::encode(&query)
    );

    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<PeerTubeSearchResponse>().await {
            Ok(payload) => {
                log::info!(
                    "PeerTube proxy: {} videos from {}/{} instances",
                    payload.total,
                    payload.instances_succeeded,
                    payload.instances_queried
                );
                let mut videos: Vec<Video> =
                    payload.videos.into_iter().map(Video::from).collect();

                if let Some(instance) = preferences::peertube_instance() {
                    match search_custom_instance(&instance, &query).await {
                        Ok(mut extra) => videos.append(&mut extra),
                        Err(e) => log::warn!("Custom PeerTube instance failed: {e}"),
                    }
                }

                peertube_results.set(videos);
            }
            Err(e) => {
                log::error!("Failed to parse PeerTube proxy response: {e}");
                peertube_failed(&error_message, &show_peertube);
            }
        },
        Ok(response) => {
            log::error!("PeerTube proxy responded with status {}", response.status());
            peertube_failed(&error_message, &show_peertube);
        }
        Err(e) => {
            log::error!("PeerTube proxy unreachable: {e}");
            peertube_failed(&error_message, &show_peertube);
        }
    }

    loading.set(false);
}

fn peertube_failed(error_message: &UseStateHandle<Option<String>>, show: &UseStateHandle<bool>) {
    error_message.set(Some("Failed to fetch PeerTube results.".to_string()));
    show.set(false);
}

/// Query a user-supplied PeerTube server directly from the browser,
/// the same way the proxy queries its fixed registry.
async fn search_custom_instance(instance_url: &str, query: &str) -> Result<Vec<Video>, String> {
    let url = format!(
        "{instance_url}/api/v1/search/videos?search={}&limit=10",
        urlencoding::encode(query)
    );

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("{instance_url} unreachable: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {} from {instance_url}", response.status()));
    }

    let data = response
        .json::<Value>()
        .await
        .map_err(|e| format!("invalid JSON from {instance_url}: {e}"))?;

    Ok(data
        .get("data")
        .and_then(|videos| videos.as_array())
        .map(|videos| {
            videos
                .iter()
                .map(|video| convert_custom_video(video, instance_url))
                .collect()
        })
        .unwrap_or_default())
}

fn instance_host(instance_url: &str) -> &str {
    instance_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
}

fn convert_custom_video(video: &Value, instance_url: &str) -> Video {
    let uuid = video
        .get("uuid")
        .and_then(|uuid| uuid.as_str())
        .unwrap_or_default();

    let thumbnail = video
        .get("thumbnailUrl")
        .and_then(|url| url.as_str())
        .map(String::from)
        .or_else(|| {
            video
                .get("thumbnailPath")
                .and_then(|path| path.as_str())
                .map(|path| format!("{instance_url}{path}"))
        })
        .or_else(|| {
            video
                .get("previewPath")
                .and_then(|path| path.as_str())
                .map(|path| format!("{instance_url}{path}"))
        })
        .unwrap_or_else(|| "/images/placeholder-poster.jpg".to_string());

    let uploader = video
        .get("channel")
        .and_then(|channel| channel.get("displayName"))
        .and_then(|name| name.as_str())
        .or_else(|| {
            video
                .get("account")
                .and_then(|account| account.get("displayName"))
                .and_then(|name| name.as_str())
        })
        .unwrap_or("PeerTube");

    Video {
        id: format!("peertube-custom-{uuid}"),
        title: video
            .get("name")
            .and_then(|name| name.as_str())
            .unwrap_or_default()
            .to_string(),
        description: video
            .get("description")
            .and_then(|text| text.as_str())
            .unwrap_or_default()
            .to_string(),
        thumbnail,
        uploader: uploader.to_string(),
        views: video
            .get("views")
            .and_then(|v| v.as_u64())
            .unwrap_or(0)
            .to_string(),
        likes: video
            .get("likes")
            .and_then(|v| v.as_u64())
            .unwrap_or(0)
            .to_string(),
        comments: video
            .get("comments")
            .and_then(|v| v.as_u64())
            .unwrap_or(0)
            .to_string(),
        upload_date: video
            .get("publishedAt")
            .and_then(|date| date.as_str())
            .unwrap_or_default()
            .to_string(),
        platform: format!("PeerTube - {}", instance_host(instance_url)),
        category: "Videos".to_string(),
        url: format!(
            "/peertube/{uuid}?instance={}",
            urlencoding::encode(instance_url)
        ),
        duration: video
            .get("duration")
            .and_then(|seconds| seconds.as_u64())
            .map(format_seconds_duration)
            .unwrap_or_else(|| "0:00".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn custom_instance_videos_get_their_own_prefix() {
        let raw = json!({
            "uuid": "u9",
            "name": "clip",
            "views": 12,
            "duration": 321,
            "channel": { "displayName": "chan" },
            "thumbnailPath": "/thumbs/u9.jpg"
        });

        let video = convert_custom_video(&raw, "https://tube.example.org");

        assert_eq!(video.id, "peertube-custom-u9");
        assert_eq!(video.platform, "PeerTube - tube.example.org");
        assert_eq!(video.thumbnail, "https://tube.example.org/thumbs/u9.jpg");
        assert_eq!(video.views, "12");
        assert_eq!(video.duration, "5:21");
    }

    #[test]
    fn host_labels_drop_the_scheme() {
        assert_eq!(instance_host("https://tilvids.com/"), "tilvids.com");
        assert_eq!(instance_host("http://tube.local"), "tube.local");
    }
}
