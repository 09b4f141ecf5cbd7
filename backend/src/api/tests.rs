//! Route-level tests that exercise the HTTP surface without touching
//! the network: empty key pools short-circuit before any upstream
//! call, and the rejection paths never fan out at all.

use crate::services::key_rotation::KeyPool;
use crate::{build_rocket, AppState};
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::Value;

fn keyless_state() -> AppState {
    AppState {
        key_pool: KeyPool::new(Vec::new()),
        http: reqwest::Client::new(),
    }
}

async fn client() -> Client {
    Client::tracked(build_rocket(keyless_state()))
        .await
        .expect("valid rocket instance")
}

async fn body_json(response: rocket::local::asynchronous::LocalResponse<'_>) -> Value {
    let body = response.into_string().await.expect("response body");
    serde_json::from_str(&body).expect("JSON body")
}

#[rocket::async_test]
async fn home_feed_degrades_gracefully_without_keys() {
    let client = client().await;
    let response = client.get("/api/youtube/home").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));

    let payload = body_json(response).await;
    assert_eq!(payload["videos"].as_array().map(Vec::len), Some(0));
    assert!(payload["error"].as_str().is_some());
    assert!(payload.get("quotaExceeded").is_none());
}

#[rocket::async_test]
async fn programming_feed_degrades_gracefully_without_keys() {
    let client = client().await;
    let response = client
        .get("/api/youtube/programming?queryIndex=3&regionCode=US")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);

    let payload = body_json(response).await;
    assert_eq!(payload["videos"].as_array().map(Vec::len), Some(0));
    assert!(payload["error"].as_str().is_some());
}

#[rocket::async_test]
async fn youtube_search_requires_a_query() {
    let client = client().await;

    let missing = client.get("/api/youtube/search").dispatch().await;
    assert_eq!(missing.status(), Status::BadRequest);

    let blank = client.get("/api/youtube/search?q=%20%20").dispatch().await;
    assert_eq!(blank.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn peertube_search_rejects_blank_queries() {
    let client = client().await;
    let response = client.get("/api/peertube/search?q=").dispatch().await;

    assert_eq!(response.status(), Status::BadRequest);

    let payload = body_json(response).await;
    assert_eq!(payload["videos"].as_array().map(Vec::len), Some(0));
    assert_eq!(payload["total"], 0);
    assert_eq!(payload["instancesQueried"], 0);
    assert_eq!(payload["instancesSucceeded"], 0);
}

#[rocket::async_test]
async fn peertube_search_rejects_missing_queries() {
    let client = client().await;
    let response = client.get("/api/peertube/search").dispatch().await;

    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn likes_endpoints_are_client_side_stubs() {
    let client = client().await;

    let get = client.get("/api/likes").dispatch().await;
    assert_eq!(get.status(), Status::BadRequest);
    let payload = body_json(get).await;
    assert!(payload["error"].as_str().is_some());

    let post = client.post("/api/likes").dispatch().await;
    assert_eq!(post.status(), Status::BadRequest);

    let delete = client.delete("/api/likes").dispatch().await;
    assert_eq!(delete.status(), Status::BadRequest);
}
