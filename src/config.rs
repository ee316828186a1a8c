//! Application configuration loaded from environment variables.

use crate::services::planner::DEFAULT_DAILY_BUDGET_MINUTES;
use std::env;

/// Upper bound on stops accepted in a single request by default.
pub const DEFAULT_MAX_STOPS: usize = 100;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Maximum activity minutes packed into one itinerary day
    pub daily_budget_minutes: u32,
    /// Maximum number of stops accepted per request
    pub max_stops: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            daily_budget_minutes: DEFAULT_DAILY_BUDGET_MINUTES,
            max_stops: DEFAULT_MAX_STOPS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first when present. Every variable is optional;
    /// numeric values that are set but unparseable (or zero) are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            daily_budget_minutes: positive_var("DAILY_BUDGET_MINUTES")?
                .unwrap_or(DEFAULT_DAILY_BUDGET_MINUTES),
            max_stops: positive_var("MAX_STOPS")?.unwrap_or(DEFAULT_MAX_STOPS),
        })
    }

    /// Config for tests.
    pub fn test_default() -> Self {
        Self::default()
    }
}

/// Read an optional strictly positive number.
fn positive_var<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(Some(value)),
        _ => Err(ConfigError::Invalid(name, raw)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
