use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::{SurveyTemplate, TemplateSummary};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct SubmitSurvey {
    pub answers: Option<serde_json::Value>,
}

pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Vec<TemplateSummary>>, AppError> {
    let surveys = db::templates::list_titles(&state.pool).await?;
    Ok(Json(surveys))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<SurveyTemplate>, AppError> {
    let id = parse_survey_id(&id)?;

    let survey = db::templates::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Survey not found.".to_string()))?;

    Ok(Json(survey))
}

pub async fn submit(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<SubmitSurvey>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let id = parse_survey_id(&id)?;

    let answers = req
        .answers
        .ok_or_else(|| AppError::BadRequest("Missing required field: answers.".to_string()))?;

    // Existence check and insert are separate statements; a template deleted
    // in between leaves this submission dangling.
    db::templates::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Survey template not found.".to_string()))?;

    db::submissions::create(&state.pool, id, &answers).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Submission saved successfully." })),
    ))
}

/// The id arrives as a raw path segment; anything that does not parse as a
/// UUID is a client error, not a lookup miss.
fn parse_survey_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::BadRequest("Invalid survey ID format.".to_string()))
}
