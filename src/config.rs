use std::env;
use std::path::PathBuf;

pub const APP_NAME: &str = "dealflow";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info,tower_http=warn")
}

/// Immutable application configuration, built once at startup and passed
/// into component constructors. There is no process-wide settings singleton.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the OpenAI-compatible completion API.
    pub completion_base_url: String,
    /// API key for the completion backend, if configured.
    pub api_key: Option<String>,
    /// Model used for extraction.
    pub primary_model: String,
    /// Completion request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Maximum accepted upload size in megabytes.
    pub max_file_size_mb: u64,
    /// Directory the CSV sheet store writes into.
    pub export_dir: PathBuf,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl AppConfig {
    /// Build configuration from environment variables, with defaults for
    /// everything except the API key.
    pub fn from_env() -> Self {
        Self {
            completion_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            primary_model: env::var("PRIMARY_MODEL")
                .unwrap_or_else(|_| "gpt-4-turbo".to_string()),
            request_timeout_secs: env_u64("REQUEST_TIMEOUT_SECS", 120),
            max_file_size_mb: env_u64("MAX_FILE_SIZE_MB", 10),
            export_dir: env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("exports")),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        }
    }

    /// Warn about missing configuration that degrades functionality.
    /// The server still starts; extraction calls will fail until a key is set.
    pub fn check(&self) {
        if self.api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; extraction requests will fail");
        }
    }

    pub fn max_file_size_bytes(&self) -> usize {
        (self.max_file_size_mb as usize) * 1024 * 1024
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            completion_base_url: "https://api.openai.com/v1".into(),
            api_key: None,
            primary_model: "gpt-4-turbo".into(),
            request_timeout_secs: 120,
            max_file_size_mb: 10,
            export_dir: PathBuf::from("exports"),
            bind_addr: "0.0.0.0:8000".into(),
        }
    }

    #[test]
    fn max_file_size_in_bytes() {
        assert_eq!(base_config().max_file_size_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn env_u64_falls_back_on_garbage() {
        std::env::set_var("DEALFLOW_TEST_U64", "not a number");
        assert_eq!(env_u64("DEALFLOW_TEST_U64", 7), 7);
        std::env::remove_var("DEALFLOW_TEST_U64");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_scopes_to_crate() {
        assert!(default_log_filter().starts_with("dealflow="));
    }
}
