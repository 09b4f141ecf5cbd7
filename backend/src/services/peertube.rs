use crate::models::Video;
use crate::utils::{format_seconds_duration, slugify_instance_name};
use futures::future::join_all;
use log::error;
use reqwest::Client;
use serde_json::Value;
use url::form_urlencoded;
use url::Url;

pub struct PeerTubeInstance {
    pub url: &'static str,
    pub name: &'static str,
}

pub const PEERTUBE_INSTANCES: &[PeerTubeInstance] = &[
    PeerTubeInstance { url: "https://framatube.org", name: "FramaTube" },
    PeerTubeInstance { url: "https://tilvids.com", name: "TILvids" },
    PeerTubeInstance { url: "https://peertube.fdn.fr", name: "FDN" },
    PeerTubeInstance { url: "https://video.blender.org", name: "Blender" },
    PeerTubeInstance { url: "https://dalek.zone", name: "Dalek Zone" },
    PeerTubeInstance { url: "https://video.causa-arcana.com", name: "Causa Arcana" },
    PeerTubeInstance { url: "https://peertube.cif.su", name: "CiF" },
    PeerTubeInstance { url: "https://video.pizza.ynh.fr", name: "PizzaTube" },
    PeerTubeInstance { url: "https://peer.adalta.social", name: "Ad Alta" },
    PeerTubeInstance { url: "https://tube.fediverse.games", name: "Fediverse Games" },
    PeerTubeInstance { url: "https://peertube.tv", name: "PeerTube.TV" },
];

const RESULTS_PER_INSTANCE: usize = 10;
const PLACEHOLDER_THUMBNAIL: &str = "/images/placeholder-poster.jpg";

/// What a full fan-out produced, including how degraded it was.
pub struct FanOutOutcome {
    pub videos: Vec<Video>,
    pub instances_queried: usize,
    pub instances_succeeded: usize,
}

/// Search every configured instance concurrently and flatten the
/// successful responses. One instance failing never aborts the rest;
/// its error is logged and the outcome counters record the gap.
pub async fn search_all_instances(client: &Client, query: &str) -> FanOutOutcome {
    let searches = PEERTUBE_INSTANCES
        .iter()
        .map(|instance| search_instance(client, instance, query));
    let settled = join_all(searches).await;

    let mut videos = Vec::new();
    let mut instances_succeeded = 0;
    for outcome in settled {
        match outcome {
            Ok(mut found) => {
                instances_succeeded += 1;
                videos.append(&mut found);
            }
            Err(reason) => error!("PeerTube proxy error: {reason}"),
        }
    }

    FanOutOutcome {
        videos,
        instances_queried: PEERTUBE_INSTANCES.len(),
        instances_succeeded,
    }
}

async fn search_instance(
    client: &Client,
    instance: &PeerTubeInstance,
    query: &str,
) -> Result<Vec<Video>, String> {
    let endpoint = format!("{}/api/v1/search/videos", instance.url);
    let limit = RESULTS_PER_INSTANCE.to_string();
    let url = Url::parse_with_params(&endpoint, &[("search", query), ("limit", limit.as_str())])
        .map_err(|e| format!("bad search URL for {}: {e}", instance.name))?;

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("{} unreachable: {e}", instance.name))?;

    if !response.status().is_success() {
        return Err(format!(
            "HTTP {} from {}",
            response.status().as_u16(),
            instance.name
        ));
    }

    let data = response
        .json::<Value>()
        .await
        .map_err(|e| format!("invalid JSON from {}: {e}", instance.name))?;

    let videos = data
        .get("data")
        .and_then(|videos| videos.as_array())
        .map(|videos| {
            videos
                .iter()
                .map(|video| convert_video(video, instance))
                .collect()
        })
        .unwrap_or_default();

    Ok(videos)
}

fn instance_path(instance: &PeerTubeInstance, value: Option<&Value>) -> Option<String> {
    value
        .and_then(|path| path.as_str())
        .map(|path| format!("{}{}", instance.url, path))
}

/// Normalize one raw PeerTube record into the shared [`Video`] shape.
fn convert_video(video: &Value, instance: &PeerTubeInstance) -> Video {
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
                .get("previewUrl")
                .and_then(|url| url.as_str())
                .map(String::from)
        })
        .or_else(|| instance_path(instance, video.get("thumbnailPath")))
        .or_else(|| instance_path(instance, video.get("previewPath")))
        .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());

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

    let upload_date = video
        .get("publishedAt")
        .and_then(|date| date.as_str())
        .or_else(|| video.get("createdAt").and_then(|date| date.as_str()))
        .unwrap_or_default();

    let duration = match video.get("duration") {
        Some(Value::Number(seconds)) => {
            format_seconds_duration(seconds.as_u64().unwrap_or_default())
        }
        Some(Value::String(text)) => text.clone(),
        _ => "0:00".to_string(),
    };

    let encoded_instance: String =
        form_urlencoded::byte_serialize(instance.url.as_bytes()).collect();

    Video {
        id: format!(
            "peertube-{}-{uuid}",
            slugify_instance_name(instance.name)
        ),
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
        views: video.get("views").and_then(|v| v.as_u64()).unwrap_or(0),
        likes: video.get("likes").and_then(|v| v.as_u64()).unwrap_or(0),
        comments: video.get("comments").and_then(|v| v.as_u64()).unwrap_or(0),
        upload_date: upload_date.to_string(),
        platform: format!("PeerTube - {}", instance.name),
        category: "Videos".to_string(),
        url: format!("/peertube/{uuid}?instance={encoded_instance}"),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BLENDER: PeerTubeInstance = PeerTubeInstance {
        url: "https://video.blender.org",
        name: "Blender",
    };

    #[test]
    fn registry_holds_eleven_instances() {
        assert_eq!(PEERTUBE_INSTANCES.len(), 11);
    }

    #[test]
    fn converts_a_full_record() {
        let raw = json!({
            "uuid": "1234-abcd",
            "name": "Spring",
            "description": "An open movie",
            "thumbnailUrl": "https://cdn.example/t.jpg",
            "channel": { "displayName": "Blender Studio" },
            "views": 42000,
            "likes": 512,
            "comments": 37,
            "publishedAt": "2019-04-04T10:00:00.000Z",
            "duration": 464
        });

        let video = convert_video(&raw, &BLENDER);

        assert_eq!(video.id, "peertube-blender-1234-abcd");
        assert_eq!(video.title, "Spring");
        assert_eq!(video.thumbnail, "https://cdn.example/t.jpg");
        assert_eq!(video.uploader, "Blender Studio");
        assert_eq!(video.views, 42000);
        assert_eq!(video.duration, "7:44");
        assert_eq!(video.platform, "PeerTube - Blender");
        assert_eq!(
            video.url,
            "/peertube/1234-abcd?instance=https%3A%2F%2Fvideo.blender.org"
        );
    }

    #[test]
    fn thumbnail_falls_back_to_instance_relative_paths() {
        let raw = json!({
            "uuid": "u1",
            "name": "clip",
            "thumbnailPath": "/static/thumbnails/u1.jpg"
        });

        let video = convert_video(&raw, &BLENDER);
        assert_eq!(
            video.thumbnail,
            "https://video.blender.org/static/thumbnails/u1.jpg"
        );
    }

    #[test]
    fn thumbnail_defaults_to_placeholder() {
        let raw = json!({ "uuid": "u2", "name": "clip" });

        let video = convert_video(&raw, &BLENDER);
        assert_eq!(video.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(video.uploader, "PeerTube");
        assert_eq!(video.duration, "0:00");
        assert_eq!(video.views, 0);
    }

    #[test]
    fn string_durations_pass_through() {
        let raw = json!({ "uuid": "u3", "name": "clip", "duration": "3:21" });

        let video = convert_video(&raw, &BLENDER);
        assert_eq!(video.duration, "3:21");
    }

    #[test]
    fn account_name_backs_up_channel_name() {
        let raw = json!({
            "uuid": "u4",
            "name": "clip",
            "account": { "displayName": "solo uploader" }
        });

        let video = convert_video(&raw, &BLENDER);
        assert_eq!(video.uploader, "solo uploader");
    }
}
