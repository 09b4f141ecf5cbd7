use crate::env_variable_utils::BACKEND_URL;
use crate::models::YoutubeFeedResponse;
use gloo_net::http::Request;

/// Fetch one page of a rotating YouTube feed. The 429 quota response
/// carries the same JSON shape, so the body is parsed regardless of
/// status and the caller reads the `error` field.
pub async fn fetch_feed_page(
    endpoint: &str,
    page_token: Option<String>,
    query_index: usize,
) -> Result<YoutubeFeedResponse, String> {
    let mut url = format!(
        "{}/api/youtube/{endpoint}?queryIndex={query_index}",
        &*BACKEND_URL
    );
    if let Some(token) = page_token {
        url.push_str(&format!("&pageToken={}", urlencoding::encode(&token)));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {e}"))?;

    response
        .json::<YoutubeFeedResponse>()
        .await
        .map_err(|e| format!("Failed to parse feed response: {e}"))
}
