use serde::Deserialize;

use brewlog_core::config::Config;

fn default_port() -> u16 {
    8000
}

fn default_environment() -> String {
    "development".to_owned()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_owned()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_owned()
}

fn default_cors_origins() -> String {
    "*".to_owned()
}

/// Catalog service configuration, deserialized from environment variables
/// (`DATABASE_URL`, `PORT`, `JWT_SECRET`, ...).
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,
    /// HMAC secret for bearer-token verification.
    pub jwt_secret: String,
    /// Deployment environment label, surfaced by `GET /health`.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// API key for the preference analyzer. Absent ⇒ analysis endpoints
    /// return `ANALYZER_NOT_CONFIGURED`.
    pub openai_api_key: Option<String>,
    /// Base URL of an OpenAI-compatible chat completions API.
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Comma-separated allowed CORS origins, or `*`.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
}

impl Config for CatalogConfig {}

impl CatalogConfig {
    /// Allowed origins split out of the comma-separated form. `*` yields an
    /// empty list, meaning any origin.
    pub fn cors_origin_list(&self) -> Vec<String> {
        if self.cors_origins.trim() == "*" {
            return Vec::new();
        }
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
