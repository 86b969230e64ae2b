//! # Application Configuration
//!
//! This module defines the configuration structure for the `ayni-server` and
//! provides the logic for loading it from an optional `config.yml` file and
//! environment variables.

use ayni::providers::ai::openai::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_OPENAI_API_URL, DEFAULT_TEMPERATURE,
};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required setting was not provided.
    Missing(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::Missing(key) => write!(f, "{key} is not configured"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Connection string of the farm database. Loaded from `DATABASE_URL` env var.
    pub database_url: String,
    /// API key of the completion provider. Loaded from `OPENAI_API_KEY` env var.
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// Create the farm tables on startup if they are missing.
    #[serde(default)]
    pub initialize_schema: bool,
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("initialize_schema", &self.initialize_schema)
            .field("completion", &self.completion)
            .finish()
    }
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    8000
}

/// Endpoint and sampling parameters of the completion provider.
#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_OPENAI_API_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

// Helper to read a file, substitute `${VAR}` references, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// Layers, lowest precedence first:
/// - built-in defaults,
/// - `config.yml` next to the crate manifest (or `config_path_override`), if present,
/// - plain environment variables for top-level keys (`PORT`, `DATABASE_URL`,
///   `OPENAI_API_KEY`, `INITIALIZE_SCHEMA`),
/// - `AYNI_`-prefixed variables for nested keys (e.g., `AYNI_COMPLETION__MODEL`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let config_path = match config_path_override {
        Some(path) => path.to_string(),
        None => format!("{}/config.yml", env!("CARGO_MANIFEST_DIR")),
    };

    let mut builder = ConfigBuilder::builder();
    if let Some(content) = read_and_substitute(&config_path)? {
        info!("Loading configuration from '{config_path}'.");
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    } else if config_path_override.is_some() {
        return Err(ConfigError::General(format!(
            "Config file not found at '{config_path}'."
        )));
    }

    let settings = builder
        .add_source(Environment::default().try_parsing(true))
        .add_source(
            Environment::with_prefix("AYNI")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let database_url = settings.get_string("database_url").unwrap_or_default();
    if database_url.trim().is_empty() {
        return Err(ConfigError::Missing("DATABASE_URL".to_string()));
    }

    let mut config: AppConfig = settings.try_deserialize()?;

    // An empty key (e.g. from an unset `${OPENAI_API_KEY}` substitution) means no key.
    if config.openai_api_key.as_deref() == Some("") {
        config.openai_api_key = None;
    }

    Ok(config)
}
