use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Backend used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str =
    "http://a083030-team14-ALB-934362219.ap-northeast-2.elb.amazonaws.com";

/// Environment variable that overrides the backend base URL.
pub const API_BASE_URL_ENV: &str = "SHELFMARK_API_BASE_URL";

/// Configuration for shelfmark.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SHELFMARK_* prefix)
/// 3. Config file (~/.config/shelfmark/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL.
    ///
    /// Can be set via:
    /// - CLI: --api-url http://localhost:8080
    /// - ENV: SHELFMARK_API_BASE_URL
    /// - Config: api_base_url = "..."
    /// - Default: the team14 load balancer
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// File holding the bearer token issued at login.
    ///
    /// Only ever read. Can be set via:
    /// - CLI: --token-file /path/to/token
    /// - ENV: SHELFMARK_TOKEN_PATH
    /// - Config: token_path = "/path/to/token"
    /// - Default: ~/.local/share/shelfmark/token
    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,

    /// Log level: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colour log output.
    #[serde(default = "default_log_coloured")]
    pub log_coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            token_path: default_token_path(),
            log_level: default_log_level(),
            log_coloured: default_log_coloured(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/shelfmark/config.toml
    /// Reads environment variables with SHELFMARK_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("shelfmark");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// The backend base URL after applying the fallback.
    pub fn base_url(&self) -> String {
        resolve_base_url(self.api_base_url.as_deref())
    }
}

/// Pick the backend base URL.
///
/// A non-blank override wins; otherwise the built-in default is used.
/// Trailing slashes are dropped so paths can be appended directly.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    override_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Returns: ~/.local/share/shelfmark/token (or platform equivalent)
fn default_token_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelfmark")
        .join("token")
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_log_coloured() -> bool {
    true
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/shelfmark/config.toml
/// - macOS: ~/Library/Application Support/shelfmark/config.toml
/// - Windows: %APPDATA%\shelfmark\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelfmark")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Shelfmark Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SHELFMARK_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Backend base URL (without the /api/v1 suffix)
#
# Can also be set via:
# - CLI: shelfmark --api-url http://localhost:8080 register ...
# - Environment: SHELFMARK_API_BASE_URL=http://localhost:8080
#
# Default: the team14 load balancer
#api_base_url = "http://localhost:8080"

# File holding the bearer token issued at login.
# Shelfmark only reads it; a missing or empty file means "not logged in".
#
# Default: Platform-specific data directory
#token_path = "/path/to/token"

# Logging
log_level = "info"
log_coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    /// Serializes tests that read or write process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_base_url.is_none());
        assert!(!config.token_path.as_os_str().is_empty());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_prefers_override() {
        assert_eq!(
            resolve_base_url(Some("http://localhost:8080")),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_resolve_base_url_falls_back_when_blank() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_BASE_URL);
        assert_eq!(resolve_base_url(Some("")), DEFAULT_API_BASE_URL);
        assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_strips_trailing_slash() {
        assert_eq!(
            resolve_base_url(Some("http://localhost:8080/")),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "api_base_url": "http://localhost:8080",
        }))
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.log_coloured);
        assert!(config.token_path.ends_with("token"));
    }

    #[test]
    fn test_config_load() {
        let _env = env_lock();
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_env_overrides_base_url() {
        let _env = env_lock();
        let previous = std::env::var(API_BASE_URL_ENV).ok();
        std::env::set_var(API_BASE_URL_ENV, "http://localhost:9090/");

        let config = Config::load();

        match previous {
            Some(value) => std::env::set_var(API_BASE_URL_ENV, value),
            None => std::env::remove_var(API_BASE_URL_ENV),
        }
        let config = config.unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:9090/"));
        assert_eq!(config.base_url(), "http://localhost:9090");
    }
}
