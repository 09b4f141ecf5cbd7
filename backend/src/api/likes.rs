use crate::models::ErrorResponse;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post};

// Vestigial endpoint family: like state lives exclusively in browser
// storage, so every verb answers with the same redirect-to-client hint.
fn client_side_only() -> status::Custom<Json<ErrorResponse>> {
    status::Custom(
        Status::BadRequest,
        Json(ErrorResponse::new(
            "Likes are stored in the browser; use the client-side library.",
        )),
    )
}

#[get("/")]
pub fn list_likes() -> status::Custom<Json<ErrorResponse>> {
    client_side_only()
}

#[post("/")]
pub fn add_like() -> status::Custom<Json<ErrorResponse>> {
    client_side_only()
}

#[delete("/")]
pub fn remove_like() -> status::Custom<Json<ErrorResponse>> {
    client_side_only()
}
