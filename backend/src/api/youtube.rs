use crate::config::YOUTUBE_REGION;
use crate::models::{YoutubeFeedResponse, YoutubeSearchResponse};
use crate::services::key_rotation::RotationError;
use crate::services::youtube::{fetch_video_page, PROGRAMMING_KEYWORDS, SEARCH_QUERIES};
use crate::AppState;
use log::error;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{get, FromForm, State};

#[derive(Debug, FromForm)]
pub struct FeedParams {
    #[field(name = "pageToken")]
    pub page_token: Option<String>,
    #[field(name = "queryIndex")]
    pub query_index: Option<usize>,
    #[field(name = "regionCode")]
    pub region_code: Option<String>,
}

struct FeedOptions {
    keywords: &'static [&'static str],
    order_by_relevance: bool,
    category: Option<&'static str>,
    include_current_query: bool,
    allow_region_override: bool,
}

const HOME_FEED: FeedOptions = FeedOptions {
    keywords: SEARCH_QUERIES,
    order_by_relevance: false,
    category: None,
    include_current_query: false,
    allow_region_override: false,
};

const PROGRAMMING_FEED: FeedOptions = FeedOptions {
    keywords: PROGRAMMING_KEYWORDS,
    order_by_relevance: true,
    category: Some("programming"),
    include_current_query: true,
    allow_region_override: true,
};

type FeedReply = status::Custom<Json<YoutubeFeedResponse>>;

#[get("/home?<params..>")]
pub async fn home_feed(params: FeedParams, state: &State<AppState>) -> FeedReply {
    feed(&params, state, &HOME_FEED).await
}

#[get("/programming?<params..>")]
pub async fn programming_feed(params: FeedParams, state: &State<AppState>) -> FeedReply {
    feed(&params, state, &PROGRAMMING_FEED).await
}

async fn feed(params: &FeedParams, state: &State<AppState>, options: &FeedOptions) -> FeedReply {
    let query_index = params.query_index.unwrap_or(0) % options.keywords.len();
    let current_query = options.keywords[query_index];

    let region = if options.allow_region_override {
        params
            .region_code
            .clone()
            .unwrap_or_else(|| YOUTUBE_REGION.clone())
    } else {
        YOUTUBE_REGION.clone()
    };

    let page = fetch_video_page(
        &state.key_pool,
        &state.http,
        current_query,
        params.page_token.as_deref(),
        &region,
        options.order_by_relevance,
        options.category,
    )
    .await;

    match page {
        Ok(page) => {
            // Rotate to the next keyword only once the current one has
            // no further pages to offer.
            let next_query_index = if page.exhausted || page.next_page_token.is_none() {
                (query_index + 1) % options.keywords.len()
            } else {
                query_index
            };

            let current_query = options
                .include_current_query
                .then(|| current_query.to_string());

            status::Custom(
                Status::Ok,
                Json(YoutubeFeedResponse::page(
                    page.videos,
                    page.next_page_token,
                    next_query_index,
                    current_query,
                )),
            )
        }
        Err(e) => feed_failure(e),
    }
}

fn feed_failure(error: RotationError) -> FeedReply {
    error!("YouTube feed request failed: {error}");
    match error {
        RotationError::NoKeys => status::Custom(
            Status::Ok,
            Json(YoutubeFeedResponse::failure(
                "YouTube API is not configured. Please add API keys to your environment.",
            )),
        ),
        RotationError::QuotaExhausted { .. } => status::Custom(
            Status::TooManyRequests,
            Json(YoutubeFeedResponse::quota(
                "YouTube API quota exceeded for all keys. Please try again later.",
            )),
        ),
        // Hard and mixed failures both degrade to an empty 200 page so
        // the client renders an empty grid instead of an error page.
        RotationError::Upstream { .. } | RotationError::AllKeysFailed { .. } => status::Custom(
            Status::Ok,
            Json(YoutubeFeedResponse::failure(
                "Failed to fetch videos. Please try again later.",
            )),
        ),
    }
}

#[get("/search?<q>")]
pub async fn search_videos(
    q: Option<String>,
    state: &State<AppState>,
) -> status::Custom<Json<YoutubeSearchResponse>> {
    let query = q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return status::Custom(
            Status::BadRequest,
            Json(YoutubeSearchResponse {
                videos: Vec::new(),
                error: Some("Missing search query".to_string()),
            }),
        );
    }

    let page = fetch_video_page(
        &state.key_pool,
        &state.http,
        query,
        None,
        &YOUTUBE_REGION,
        true,
        None,
    )
    .await;

    match page {
        Ok(page) => status::Custom(
            Status::Ok,
            Json(YoutubeSearchResponse {
                videos: page.videos,
                error: None,
            }),
        ),
        Err(e) => {
            error!("YouTube search for \"{query}\" failed: {e}");
            let status_code = match e {
                RotationError::QuotaExhausted { .. } => Status::TooManyRequests,
                _ => Status::Ok,
            };
            status::Custom(
                status_code,
                Json(YoutubeSearchResponse {
                    videos: Vec::new(),
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
