use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use std::{path::PathBuf, time::Duration};

use walletwise_api::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub data_dir: PathBuf,
    pub secret_key: Option<String>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("WW_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_ms: u64 = lookup("WW_REQUEST_TIMEOUT_MS")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let data_dir = match lookup("WW_DATA_DIR").filter(|value| !value.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        let secret_key = lookup("WW_SECRET_KEY").filter(|value| !value.trim().is_empty());
        let log_format = match lookup("WW_LOG_FORMAT") {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(value) if value.eq_ignore_ascii_case("text") || value.is_empty() => {
                LogFormat::Text
            }
            Some(other) => return Err(anyhow!("Invalid WW_LOG_FORMAT: {}", other)),
            None => LogFormat::Text,
        };

        Ok(Self {
            api_url,
            request_timeout: Duration::from_millis(timeout_ms),
            data_dir,
            secret_key,
            log_format,
        })
    }
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("app", "Walletwise", "walletwise")
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[("WW_DATA_DIR", "/tmp/ww")]).unwrap();
        assert_eq!(config.api_url, "http://localhost:4000");
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ww"));
        assert!(config.secret_key.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("WW_API_URL", "https://api.example.com"),
            ("WW_REQUEST_TIMEOUT_MS", "1500"),
            ("WW_DATA_DIR", "/var/lib/ww"),
            ("WW_SECRET_KEY", "0123456789abcdef0123456789abcdef"),
            ("WW_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.secret_key.as_deref(), Some("0123456789abcdef0123456789abcdef"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unparsable_timeout_falls_back() {
        let config = config_from(&[("WW_DATA_DIR", "/tmp"), ("WW_REQUEST_TIMEOUT_MS", "soon")])
            .unwrap();
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(config_from(&[("WW_DATA_DIR", "/tmp"), ("WW_LOG_FORMAT", "xml")]).is_err());
    }
}
