//! Configuration management for the Calorix APIs
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CALORIX_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Gemini text generation configuration
    pub gemini: GeminiConfig,

    /// Classification model serving configuration
    pub inference: InferenceConfig,

    /// Profile storage configuration
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Port for the food logging API
    pub food_port: u16,

    /// Port for the diet planner API
    pub planner_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Gemini generateContent endpoint
    pub api_url: String,

    /// Gemini API key
    pub api_key: String,

    /// Request timeout in seconds; expiry is treated as a transport failure
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InferenceConfig {
    /// Model serving endpoint for food image classification.
    /// Empty means no model is available and /predict reports 500.
    pub endpoint: String,

    /// API key for the model serving endpoint
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path where submitted user profiles are written
    pub profile_path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CALORIX_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.food_port", 5001)?
            .set_default("server.planner_port", 5000)?
            .set_default(
                "gemini.api_url",
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent",
            )?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.timeout_secs", 10)?
            .set_default("inference.endpoint", "")?
            .set_default("inference.api_key", "")?
            .set_default("storage.profile_path", "user_profile.json")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CALORIX_ prefix)
            .add_source(
                Environment::with_prefix("CALORIX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
