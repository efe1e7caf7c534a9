use std::net::IpAddr;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub geocoding_url: String,
    pub forecast_url: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("SURVEYOR_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SURVEYOR_HOST: {e}"))?;

        let port: u16 = env_or("SURVEYOR_PORT", "5001")
            .parse()
            .map_err(|e| format!("Invalid SURVEYOR_PORT: {e}"))?;

        let geocoding_url = env_or("SURVEYOR_GEOCODING_URL", DEFAULT_GEOCODING_URL);
        let forecast_url = env_or("SURVEYOR_FORECAST_URL", DEFAULT_FORECAST_URL);

        let log_level = env_or("SURVEYOR_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            geocoding_url,
            forecast_url,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
