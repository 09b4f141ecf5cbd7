use crate::models::PeerTubeSearchResponse;
use crate::services::peertube::search_all_instances;
use crate::AppState;
use log::info;
use rocket::get;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;

#[get("/search?<q>")]
pub async fn search_instances(
    q: Option<String>,
    state: &State<AppState>,
) -> status::Custom<Json<PeerTubeSearchResponse>> {
    let query = q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return status::Custom(Status::BadRequest, Json(PeerTubeSearchResponse::empty()));
    }

    let outcome = search_all_instances(&state.http, query).await;
    info!(
        "PeerTube search \"{query}\": {} videos from {}/{} instances",
        outcome.videos.len(),
        outcome.instances_succeeded,
        outcome.instances_queried
    );

    status::Custom(
        Status::Ok,
        Json(PeerTubeSearchResponse {
            total: outcome.videos.len(),
            videos: outcome.videos,
            instances_queried: outcome.instances_queried,
            instances_succeeded: outcome.instances_succeeded,
        }),
    )
}
