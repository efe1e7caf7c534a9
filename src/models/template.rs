use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reusable survey definition. `survey_data` is a consumer-defined schema
/// document (sections, questions, conditional logic) that this system stores
/// and returns without ever inspecting.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyTemplate {
    pub id: Uuid,
    pub title: String,
    pub survey_data: serde_json::Value,
}

/// Listing shape for the survey index: id and title only.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: Uuid,
    pub title: String,
}
