use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{SubmissionRecord, SurveySubmission};

pub async fn create(
    pool: &PgPool,
    template_id: Uuid,
    answers: &serde_json::Value,
) -> Result<SurveySubmission, sqlx::Error> {
    sqlx::query_as::<_, SurveySubmission>(
        "INSERT INTO survey_submissions (id, template_id, answers)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(template_id)
    .bind(answers)
    .fetch_one(pool)
    .await
}

/// Every submission with its template's title resolved. LEFT JOIN because
/// the reference may dangle; a missing template yields a NULL title.
pub async fn list_all(pool: &PgPool) -> Result<Vec<SubmissionRecord>, sqlx::Error> {
    sqlx::query_as::<_, SubmissionRecord>(
        "SELECT s.id, s.template_id, t.title AS template_title, s.answers, s.submitted_at
         FROM survey_submissions s
         LEFT JOIN survey_templates t ON s.template_id = t.id
         ORDER BY s.submitted_at, s.id",
    )
    .fetch_all(pool)
    .await
}
