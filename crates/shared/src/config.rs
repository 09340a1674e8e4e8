//! Application configuration management.
//!
//! Configuration is loaded once at startup into an explicit `AppConfig`
//! that is passed to each constructed service. There are no ambient
//! singletons; components never read the environment themselves.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
    /// Email configuration.
    #[serde(default)]
    pub email: EmailConfig,
    /// Letter drafting (LLM) configuration.
    #[serde(default)]
    pub draft: DraftConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

/// JWT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in seconds.
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: u64,
}

fn default_access_token_expiry() -> u64 {
    3600 // 1 hour
}

/// Email (SMTP) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// From address for outgoing mail.
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// From display name for outgoing mail.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// When true, log messages instead of sending them.
    #[serde(default = "default_true")]
    pub simulate: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            simulate: true,
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_email() -> String {
    "letters@lexflow.test".to_string()
}

fn default_from_name() -> String {
    "Lexflow".to_string()
}

fn default_true() -> bool {
    true
}

/// Letter drafting (LLM API) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    /// API key for the text-generation service. Absence is a
    /// configuration error reported at call time, not at startup.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the chat-completions endpoint.
    #[serde(default = "default_draft_api_url")]
    pub api_url: String,
    /// Model identifier.
    #[serde(default = "default_draft_model")]
    pub model: String,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_draft_api_url(),
            model: default_draft_model(),
        }
    }
}

fn default_draft_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_draft_model() -> String {
    "gpt-4o-mini".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEXFLOW").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_default() {
        let config = EmailConfig::default();
        assert_eq!(config.smtp_host, "localhost");
        assert_eq!(config.smtp_port, 1025);
        assert!(config.simulate);
    }

    #[test]
    fn test_draft_config_default() {
        let config = DraftConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.api_url.starts_with("https://"));
        assert!(!config.model.is_empty());
    }
}
