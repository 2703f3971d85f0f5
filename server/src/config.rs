//! Server settings parsed from environment variables.
//!
//! DESIGN
//! ======
//! `Settings::from_env` loads `.env` (if present) and reads variables by
//! upper-case name, so lookups are case-insensitive. Everything funnels
//! through `Settings::from_lookup`, which takes the lookup as a function so
//! tests never touch process state.
//!
//! Settings for ingestion, retrieval, generation and auth are parsed and
//! range-checked now so a bad deployment fails at startup, even though no
//! route reads them yet.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::routes::PKG_PATH;
use crate::routes::system::{DOCS_PATH, HEALTH_PATH};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A required variable is unset or empty.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A variable is set but its value is rejected.
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    /// The `.env` file exists but could not be read or parsed.
    #[error(".env load failed: {0}")]
    DotEnv(String),
}

// =============================================================================
// ENUMS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err("must be one of development, staging, production".into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// `tracing` has no critical level; it folds into error.
    #[must_use]
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err("must be one of DEBUG, INFO, WARNING, ERROR, CRITICAL".into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Console,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "console" => Ok(Self::Console),
            _ => Err("must be json or console".into()),
        }
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

pub const DEFAULT_APP_NAME: &str = "Private RAG Copilot";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

#[derive(Clone, PartialEq)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub debug: bool,
    pub environment: Environment,

    pub api_host: String,
    pub api_port: u16,
    pub api_prefix: String,
    pub cors_origins: Vec<String>,

    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_embedding_model: String,
    pub openai_temperature: f64,
    pub openai_max_tokens: u32,

    pub use_supabase: bool,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,

    pub use_pinecone: bool,
    pub pinecone_api_key: Option<String>,
    pub pinecone_environment: Option<String>,
    pub pinecone_index_name: String,

    pub postgres_host: Option<String>,
    pub postgres_port: u16,
    pub postgres_user: Option<String>,
    pub postgres_password: Option<String>,
    pub postgres_db: String,

    pub chunk_size: u32,
    pub chunk_overlap: u32,

    pub retrieval_top_k: u32,
    pub rerank_top_k: u32,
    pub enable_reranking: bool,
    pub similarity_threshold: f64,

    pub jwt_secret_key: String,
    pub jwt_algorithm: String,
    pub jwt_expiry_minutes: u32,

    pub log_level: LogLevel,
    pub log_format: LogFormat,

    pub rate_limit_enabled: bool,
    pub rate_limit_requests: u32,
    pub rate_limit_window_seconds: u64,

    pub enable_metrics: bool,
    pub metrics_log_queries: bool,
}

impl Settings {
    /// Load `.env` if present, then read settings from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when `.env` is malformed, a required value is
    /// missing, or a value fails validation.
    pub fn from_env() -> Result<Self, SettingsError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(SettingsError::DotEnv(e.to_string()));
            }
        }

        let vars = fold_keys(std::env::vars());
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build settings from an arbitrary upper-case key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a required value is missing or a value
    /// fails validation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let src = Source { lookup: &lookup };

        let debug = src.bool("DEBUG", false)?;
        let api_prefix = src.string("API_PREFIX", "/api/v1");
        check_api_prefix(&api_prefix, debug)?;

        let cors_origins = match src.get("CORS_ORIGINS") {
            Some(raw) => parse_list(&raw).map_err(|reason| invalid("CORS_ORIGINS", reason))?,
            None => vec!["http://localhost:3000".to_owned(), "http://localhost:8000".to_owned()],
        };
        if cors_origins.iter().any(|origin| origin == "*") {
            return Err(invalid("CORS_ORIGINS", "wildcard origin cannot be combined with credentials"));
        }

        Ok(Self {
            app_name: src.string("APP_NAME", DEFAULT_APP_NAME),
            app_version: src.string("APP_VERSION", DEFAULT_APP_VERSION),
            debug,
            environment: src.parse("ENVIRONMENT", Environment::Development)?,

            api_host: src.string("API_HOST", "0.0.0.0"),
            api_port: src.parse("API_PORT", 8000)?,
            api_prefix,
            cors_origins,

            openai_api_key: src.get("OPENAI_API_KEY").ok_or(SettingsError::Missing("OPENAI_API_KEY"))?,
            openai_model: src.string("OPENAI_MODEL", "gpt-4-turbo-preview"),
            openai_embedding_model: src.string("OPENAI_EMBEDDING_MODEL", "text-embedding-3-small"),
            openai_temperature: src.ranged("OPENAI_TEMPERATURE", 0.1, 0.0, 2.0)?,
            openai_max_tokens: src.ranged("OPENAI_MAX_TOKENS", 1000, 1, u32::MAX)?,

            use_supabase: src.bool("USE_SUPABASE", true)?,
            supabase_url: src.get("SUPABASE_URL"),
            supabase_key: src.get("SUPABASE_KEY"),

            use_pinecone: src.bool("USE_PINECONE", false)?,
            pinecone_api_key: src.get("PINECONE_API_KEY"),
            pinecone_environment: src.get("PINECONE_ENVIRONMENT"),
            pinecone_index_name: src.string("PINECONE_INDEX_NAME", "rag-copilot"),

            postgres_host: src.get("POSTGRES_HOST"),
            postgres_port: src.parse("POSTGRES_PORT", 5432)?,
            postgres_user: src.get("POSTGRES_USER"),
            postgres_password: src.get("POSTGRES_PASSWORD"),
            postgres_db: src.string("POSTGRES_DB", "postgres"),

            chunk_size: src.ranged("CHUNK_SIZE", 1000, 100, 4000)?,
            chunk_overlap: src.ranged("CHUNK_OVERLAP", 200, 0, 1000)?,

            retrieval_top_k: src.ranged("RETRIEVAL_TOP_K", 20, 1, 100)?,
            rerank_top_k: src.ranged("RERANK_TOP_K", 3, 1, 20)?,
            enable_reranking: src.bool("ENABLE_RERANKING", false)?,
            similarity_threshold: src.ranged("SIMILARITY_THRESHOLD", 0.7, 0.0, 1.0)?,

            jwt_secret_key: src.string("JWT_SECRET_KEY", DEFAULT_JWT_SECRET),
            jwt_algorithm: src.string("JWT_ALGORITHM", "HS256"),
            jwt_expiry_minutes: src.ranged("JWT_EXPIRY_MINUTES", 1440, 1, u32::MAX)?,

            log_level: src.parse("LOG_LEVEL", LogLevel::Info)?,
            log_format: src.parse("LOG_FORMAT", LogFormat::Json)?,

            rate_limit_enabled: src.bool("RATE_LIMIT_ENABLED", false)?,
            rate_limit_requests: src.parse("RATE_LIMIT_REQUESTS", 100)?,
            rate_limit_window_seconds: src.parse("RATE_LIMIT_WINDOW_SECONDS", 60)?,

            enable_metrics: src.bool("ENABLE_METRICS", true)?,
            metrics_log_queries: src.bool("METRICS_LOG_QUERIES", true)?,
        })
    }

    /// Postgres connection URL, only when host, user and password are all set.
    #[must_use]
    pub fn postgres_url(&self) -> Option<String> {
        let (Some(host), Some(user), Some(password)) = (&self.postgres_host, &self.postgres_user, &self.postgres_password)
        else {
            return None;
        };
        Some(format!("postgresql://{user}:{password}@{host}:{}/{}", self.postgres_port, self.postgres_db))
    }

    /// Socket address string the API binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    #[must_use]
    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt_secret_key == DEFAULT_JWT_SECRET
    }

    /// Emit the effective configuration at debug level. Secrets are reduced
    /// to whether they are set.
    pub fn log_summary(&self) {
        tracing::debug!(
            api_prefix = %self.api_prefix,
            cors_origins = ?self.cors_origins,
            log_level = self.log_level.as_str(),
            openai_model = %self.openai_model,
            openai_embedding_model = %self.openai_embedding_model,
            openai_temperature = self.openai_temperature,
            openai_max_tokens = self.openai_max_tokens,
            openai_api_key_set = !self.openai_api_key.is_empty(),
            "api settings"
        );
        tracing::debug!(
            use_supabase = self.use_supabase,
            supabase_configured = self.supabase_url.is_some() && self.supabase_key.is_some(),
            use_pinecone = self.use_pinecone,
            pinecone_configured = self.pinecone_api_key.is_some() && self.pinecone_environment.is_some(),
            pinecone_index_name = %self.pinecone_index_name,
            postgres_configured = self.postgres_url().is_some(),
            "vector store settings"
        );
        tracing::debug!(
            chunk_size = self.chunk_size,
            chunk_overlap = self.chunk_overlap,
            retrieval_top_k = self.retrieval_top_k,
            rerank_top_k = self.rerank_top_k,
            enable_reranking = self.enable_reranking,
            similarity_threshold = self.similarity_threshold,
            "retrieval settings"
        );
        tracing::debug!(
            jwt_algorithm = %self.jwt_algorithm,
            jwt_expiry_minutes = self.jwt_expiry_minutes,
            rate_limit_enabled = self.rate_limit_enabled,
            rate_limit_requests = self.rate_limit_requests,
            rate_limit_window_seconds = self.rate_limit_window_seconds,
            enable_metrics = self.enable_metrics,
            metrics_log_queries = self.metrics_log_queries,
            "auth and ops settings"
        );
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("environment", &self.environment.as_str())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// PARSING HELPERS
// =============================================================================

struct Source<'a, F: Fn(&str) -> Option<String>> {
    lookup: &'a F,
}

impl<F: Fn(&str) -> Option<String>> Source<'_, F> {
    /// Trimmed value; empty counts as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    }

    fn string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_owned())
    }

    fn bool(&self, key: &'static str, default: bool) -> Result<bool, SettingsError> {
        match self.get(key) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid(key, format!("expected a boolean, got {raw:?}"))),
            None => Ok(default),
        }
    }

    fn parse<T>(&self, key: &'static str, default: T) -> Result<T, SettingsError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw.parse::<T>().map_err(|e| invalid(key, e.to_string())),
            None => Ok(default),
        }
    }

    fn ranged<T>(&self, key: &'static str, default: T, min: T, max: T) -> Result<T, SettingsError>
    where
        T: FromStr + PartialOrd + fmt::Display + Copy,
        T::Err: fmt::Display,
    {
        let value = self.parse(key, default)?;
        let in_range = value >= min && value <= max;
        if !in_range {
            return Err(invalid(key, format!("{value} is outside {min}..={max}")));
        }
        Ok(value)
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid { key, reason: reason.into() }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Accept a JSON array of strings or a comma-separated list.
fn parse_list(raw: &str) -> Result<Vec<String>, String> {
    if raw.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(raw).map_err(|e| format!("expected a JSON string array: {e}"));
    }
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Upper-case every key. A key already written in upper case wins over
/// differently-cased spellings of it, whatever order the environment lists
/// them in.
fn fold_keys(vars: impl IntoIterator<Item = (String, String)>) -> HashMap<String, String> {
    let mut folded = HashMap::new();
    for (key, value) in vars {
        let upper = key.to_ascii_uppercase();
        if key == upper {
            folded.insert(upper, value);
        } else {
            folded.entry(upper).or_insert(value);
        }
    }
    folded
}

/// The prefix is mounted as a literal route next to the fixed system routes,
/// so it must not collide with them or contain router syntax.
fn check_api_prefix(prefix: &str, debug: bool) -> Result<(), SettingsError> {
    if !prefix.starts_with('/') || prefix.len() < 2 || prefix.ends_with('/') {
        return Err(invalid("API_PREFIX", "must be a path like /api/v1"));
    }
    if prefix.contains(['{', '}', '*', ':']) {
        return Err(invalid("API_PREFIX", "must not contain {, }, * or :"));
    }
    let under_pkg = prefix == PKG_PATH || prefix.strip_prefix(PKG_PATH).is_some_and(|rest| rest.starts_with('/'));
    if prefix == HEALTH_PATH || under_pkg || (debug && prefix == DOCS_PATH) {
        return Err(invalid("API_PREFIX", format!("{prefix} is already routed")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
