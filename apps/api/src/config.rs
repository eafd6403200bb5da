use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Placeholder shipped in sample `.env` files; treated the same as an unset key.
const GEMINI_KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY_HERE";

/// Application configuration loaded once at startup and passed into `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub suggestion_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != GEMINI_KEY_PLACEHOLDER);

        Ok(Config {
            port: parse_or(&lookup, "PORT", 3000)?,
            gemini_api_key,
            gemini_api_url: lookup("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            suggestion_timeout_secs: parse_or(&lookup, "SUGGESTION_TIMEOUT_SECS", 60)?,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn gemini_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini_api_url, DEFAULT_GEMINI_API_URL);
        assert_eq!(config.suggestion_timeout_secs, 60);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.rust_log, "info");
        assert!(!config.gemini_configured());
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("GEMINI_API_KEY", "secret"),
            ("SUGGESTION_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.suggestion_timeout_secs, 5);
        assert!(config.gemini_configured());
    }

    #[test]
    fn test_placeholder_and_blank_keys_count_as_unconfigured() {
        assert!(!config_from(&[("GEMINI_API_KEY", "   ")])
            .unwrap()
            .gemini_configured());
        assert!(!config_from(&[("GEMINI_API_KEY", GEMINI_KEY_PLACEHOLDER)])
            .unwrap()
            .gemini_configured());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
