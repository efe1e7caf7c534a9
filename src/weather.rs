use std::time::Duration;

use serde::Deserialize;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the external geocoding and forecast services. One instance is
/// shared across all requests; no results are cached between calls.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
}

/// Best geocoding match for a city name.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeoMatch>>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: serde_json::Value,
}

impl WeatherClient {
    pub fn new(geocoding_url: String, forecast_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build reqwest client"),
            geocoding_url,
            forecast_url,
        }
    }

    /// Resolve a city name to its best (first) geocoding match, if any.
    pub async fn find_city(&self, city: &str) -> Result<Option<GeoMatch>, reqwest::Error> {
        let response: GeocodingResponse = self
            .client
            .get(&self.geocoding_url)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.results.unwrap_or_default().into_iter().next())
    }

    /// Fixed 3-day daily forecast for the given coordinates. The upstream
    /// `daily` block is passed through to the caller untouched.
    pub async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<serde_json::Value, reqwest::Error> {
        let response: ForecastResponse = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "daily",
                    "weathercode,temperature_2m_max,temperature_2m_min".to_string(),
                ),
                ("forecast_days", "3".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.daily)
    }
}
