use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::Query;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use surveyor::config::Config;
use surveyor::db;
use surveyor::models::SurveyTemplate;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Make a GET request, return (JSON body, status).
    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make a GET request, return the raw body text (for key-order checks).
    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    /// Make a POST request with a JSON body, return (JSON body, status).
    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit an answer set to a survey.
    pub async fn submit(&self, survey_id: &str, answers: &Value) -> (Value, StatusCode) {
        self.post_json(
            &format!("/api/surveys/{survey_id}/submit"),
            &json!({ "answers": answers }),
        )
        .await
    }

    /// Insert a template directly — templates only exist via seeding, there
    /// is no HTTP route that creates them.
    pub async fn seed_template(&self, title: &str, survey_data: &Value) -> SurveyTemplate {
        db::templates::create(&self.pool, title, survey_data)
            .await
            .expect("failed to seed template")
    }

    /// Delete a template out from under its submissions, the way a bulk
    /// reseed would.
    pub async fn delete_template(&self, id: Uuid) {
        sqlx::query("DELETE FROM survey_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .expect("failed to delete template");
    }

    pub async fn submission_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM survey_submissions")
            .fetch_one(&self.pool)
            .await
            .expect("failed to count submissions")
    }
}

/// Spawn a test app with a fresh temporary database. The weather endpoints
/// point at a closed port so an unexpected upstream call fails loudly
/// instead of hitting the real service.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_weather(
        "http://127.0.0.1:1/v1/search".to_string(),
        "http://127.0.0.1:1/v1/forecast".to_string(),
    )
    .await
}

/// Spawn a test app whose weather client talks to the given upstream URLs.
pub async fn spawn_app_with_weather(geocoding_url: String, forecast_url: String) -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("surveyor_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and run migrations
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        geocoding_url,
        forecast_url,
        log_level: "warn".to_string(),
    };

    let app = surveyor::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}

/// Stand-in for the external geocoding + forecast service. City names steer
/// the canned responses:
///   - "Atlantis"   → zero geocoding matches
///   - "Glitchton"  → geocoding endpoint returns 500
///   - "Stormville" → resolves, but the forecast endpoint returns 500
///   - anything else resolves to Berlin with a fixed 3-day forecast
pub async fn spawn_weather_stub() -> SocketAddr {
    let app = Router::new()
        .route("/v1/search", get(stub_search))
        .route("/v1/forecast", get(stub_forecast));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind weather stub");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Weather stub failed");
    });

    addr
}

async fn stub_search(Query(params): Query<HashMap<String, String>>) -> Response {
    let name = params.get("name").map(String::as_str).unwrap_or_default();
    match name {
        "Atlantis" => Json(json!({ "results": [] })).into_response(),
        "Glitchton" => (StatusCode::INTERNAL_SERVER_ERROR, "geocoder down").into_response(),
        "Stormville" => Json(json!({
            "results": [
                { "latitude": 99.99, "longitude": 0.0, "name": "Stormville", "country": "Neverland" }
            ]
        }))
        .into_response(),
        _ => Json(json!({
            "results": [
                { "latitude": 52.52, "longitude": 13.41, "name": "Berlin", "country": "Germany" }
            ]
        }))
        .into_response(),
    }
}

async fn stub_forecast(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("latitude").map(String::as_str) == Some("99.99") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "forecast down").into_response();
    }

    Json(json!({
        "latitude": 52.52,
        "longitude": 13.41,
        "daily_units": {
            "weathercode": "wmo code",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C"
        },
        "daily": {
            "time": ["2026-08-06", "2026-08-07", "2026-08-08"],
            "weathercode": [3, 61, 0],
            "temperature_2m_max": [24.1, 19.6, 22.3],
            "temperature_2m_min": [14.2, 12.8, 11.9]
        }
    }))
    .into_response()
}
