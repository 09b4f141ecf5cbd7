use crate::services::key_rotation::KeyPool;
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;

lazy_static! {
    pub static ref YOUTUBE_API_KEYS: Vec<String> = env::var("YOUTUBE_API_KEYS")
        .unwrap_or_default()
        .split(',')
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .collect();
    pub static ref YOUTUBE_REGION: String =
        env::var("YOUTUBE_REGION").unwrap_or_else(|_| "IN".to_string());
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_app_state() -> AppState {
    let key_pool = KeyPool::new(YOUTUBE_API_KEYS.clone());
    if key_pool.is_empty() {
        log::warn!("No YouTube API keys configured; YouTube routes will degrade gracefully.");
    } else {
        info!("Loaded {} YouTube API key(s).", key_pool.len());
    }

    AppState {
        key_pool,
        http: reqwest::Client::new(),
    }
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Delete, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(false)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
