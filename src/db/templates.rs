use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{SurveyTemplate, TemplateSummary};

pub async fn list_titles(pool: &PgPool) -> Result<Vec<TemplateSummary>, sqlx::Error> {
    sqlx::query_as::<_, TemplateSummary>("SELECT id, title FROM survey_templates ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<SurveyTemplate>, sqlx::Error> {
    sqlx::query_as::<_, SurveyTemplate>("SELECT * FROM survey_templates WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Seeding only — the API never creates templates.
pub async fn create(
    pool: &PgPool,
    title: &str,
    survey_data: &serde_json::Value,
) -> Result<SurveyTemplate, sqlx::Error> {
    sqlx::query_as::<_, SurveyTemplate>(
        "INSERT INTO survey_templates (id, title, survey_data)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(title)
    .bind(survey_data)
    .fetch_one(pool)
    .await
}

/// Clears the catalog before a bulk reseed. Submissions are left in place,
/// so their references may dangle afterwards.
pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM survey_templates")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
