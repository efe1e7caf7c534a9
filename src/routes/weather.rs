use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}

pub async fn forecast(
    State(state): State<SharedState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let city = params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("City query parameter is required.".to_string()))?;

    let matched = state
        .weather
        .find_city(city)
        .await
        .map_err(|e| AppError::Upstream(format!("Geocoding lookup failed: {e}")))?
        .ok_or_else(|| AppError::NotFound("City not found.".to_string()))?;

    let daily = state
        .weather
        .daily_forecast(matched.latitude, matched.longitude)
        .await
        .map_err(|e| AppError::Upstream(format!("Forecast request failed: {e}")))?;

    Ok(Json(json!({
        "city": matched.name,
        "forecast": daily,
    })))
}
