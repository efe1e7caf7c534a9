pub mod submissions;
pub mod surveys;
pub mod weather;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Weather proxy
        .route("/api/weather", get(weather::forecast))
        // Surveys
        .route("/api/surveys", get(surveys::list))
        .route("/api/surveys/{id}", get(surveys::get))
        .route("/api/surveys/{id}/submit", post(surveys::submit))
        // Submissions
        .route("/api/submissions", get(submissions::grouped))
}
