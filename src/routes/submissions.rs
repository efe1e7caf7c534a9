use axum::extract::State;
use axum::Json;
use indexmap::IndexMap;

use crate::db;
use crate::error::AppError;
use crate::models::SubmissionRecord;
use crate::state::SharedState;

const UNKNOWN_SURVEY: &str = "Unknown Survey";

pub async fn grouped(
    State(state): State<SharedState>,
) -> Result<Json<IndexMap<String, Vec<SubmissionRecord>>>, AppError> {
    let submissions = db::submissions::list_all(&state.pool).await?;
    Ok(Json(group_by_title(submissions)))
}

/// Group submissions under their template's title, keeping submission order
/// within each group and first-seen order across groups. Submissions whose
/// template no longer exists land under "Unknown Survey".
fn group_by_title(submissions: Vec<SubmissionRecord>) -> IndexMap<String, Vec<SubmissionRecord>> {
    let mut grouped: IndexMap<String, Vec<SubmissionRecord>> = IndexMap::new();
    for submission in submissions {
        let title = submission
            .template_title
            .clone()
            .unwrap_or_else(|| UNKNOWN_SURVEY.to_string());
        grouped.entry(title).or_default().push(submission);
    }
    grouped
}
