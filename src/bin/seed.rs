//! One-shot loader for the static survey catalog.
//!
//! Usage: `cargo run --bin seed [path/to/surveys.json]`. Clears every
//! existing survey template and inserts the definitions from the file.
//! Submissions are left untouched, so prior submissions may end up with
//! dangling template references.

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use surveyor::db;

#[derive(serde::Deserialize)]
struct SeedFile {
    surveys: Vec<SeedEntry>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEntry {
    survey_data: serde_json::Value,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "seeds/surveys.json".to_string());
    let raw = std::fs::read_to_string(&path)?;
    let seed: SeedFile = serde_json::from_str(&raw)?;

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "Missing required environment variable: DATABASE_URL")?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cleared = db::templates::delete_all(&pool).await?;
    tracing::info!("Cleared {cleared} old survey templates");

    let mut inserted = 0usize;
    for entry in &seed.surveys {
        let title = entry
            .survey_data
            .get("title")
            .and_then(|t| t.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| format!("Survey entry in {path} has no title"))?;

        db::templates::create(&pool, title, &entry.survey_data).await?;
        inserted += 1;
    }

    tracing::info!("Seeded {inserted} survey templates from {path}");

    pool.close().await;
    Ok(())
}
