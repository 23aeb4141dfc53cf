//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use quill_core::generation::{DEFAULT_PREFERRED_MODELS, GenerationSettings};
use quill_infra::database::DatabaseConfig;
use quill_infra::gemini::{DEFAULT_BASE_URL, GeminiConfig};

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is not set.
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:8080", "http://127.0.0.1:8080"];

/// Startup configuration errors. Any of these stops the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub gemini: GeminiConfig,
    pub generation: GenerationSettings,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = DatabaseConfig {
            url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", 20)?,
            min_connections: parse_or(&var, "DB_MIN_CONNECTIONS", 2)?,
        };

        let gemini = GeminiConfig {
            api_key: var("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?,
            base_url: var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        let preferred_models = var("GEMINI_PREFERRED_MODELS")
            .map(|v| split_list(&v))
            .filter(|models| !models.is_empty())
            .unwrap_or_else(|| DEFAULT_PREFERRED_MODELS.iter().map(|m| m.to_string()).collect());

        let generation = GenerationSettings {
            preferred_models,
            cache_selection: var("GEMINI_CACHE_MODEL")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        };

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|v| split_list(&v))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect());

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&var, "PORT", 8080)?,
            database,
            gemini,
            generation,
            cors_allowed_origins,
        })
    }
}

fn parse_or<T, F>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
