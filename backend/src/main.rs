#[macro_use]
extern crate rocket;

mod api;
mod config;
mod models;
mod services;
mod utils;

use crate::services::key_rotation::KeyPool;

pub struct AppState {
    pub key_pool: KeyPool,
    pub http: reqwest::Client,
}

pub fn build_rocket(state: AppState) -> rocket::Rocket<rocket::Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/api/youtube",
            routes![api::home_feed, api::programming_feed, api::search_videos],
        )
        .mount("/api/peertube", routes![api::search_instances])
        .mount(
            "/api/likes",
            routes![api::list_likes, api::add_like, api::remove_like],
        )
}

#[launch]
fn rocket() -> _ {
    config::load_environment();
    config::init_logger();

    let state = config::create_app_state();
    let cors = config::create_cors().expect("Failed to create CORS options");

    build_rocket(state).attach(cors)
}
