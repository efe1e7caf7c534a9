use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One respondent's completed answer set. `answers` is an opaque key/value
/// map and is never validated against the template's schema.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub id: Uuid,
    pub template_id: Uuid,
    pub answers: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
}

/// A submission joined to its template's title. `template_id` is a weak
/// reference, so `template_title` is `None` when the template has been
/// deleted since the submission was saved.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub template_id: Uuid,
    pub template_title: Option<String>,
    pub answers: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
}
