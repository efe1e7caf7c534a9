pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod weather;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::weather::WeatherClient;

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let weather = WeatherClient::new(config.geocoding_url.clone(), config.forecast_url.clone());

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        weather,
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
