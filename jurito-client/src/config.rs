//! Backend endpoint configuration.
//!
//! The reference client hardcoded the backend URL; here it lives in
//! `~/.jurito/config.toml` with sane defaults, so pointing the client at a
//! staging backend is a config edit, not a rebuild.
//!
//! ```toml
//! # ~/.jurito/config.toml
//! base_url = "https://backend.example.com"
//! summarize_path = "/analisar"
//! petition_path = "/gerar-peticao"
//! request_timeout_secs = 30
//! ```
//!
//! `JURITO_BACKEND_URL` overrides `base_url` when set.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Production backend; overridable via config file or JURITO_BACKEND_URL
pub const DEFAULT_BASE_URL: &str = "https://web-production-192c4.up.railway.app";

const DEFAULT_SUMMARIZE_PATH: &str = "/analisar";
const DEFAULT_PETITION_PATH: &str = "/gerar-peticao";

/// Where the remote assistant backend lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_summarize_path")]
    pub summarize_path: String,
    #[serde(default = "default_petition_path")]
    pub petition_path: String,
    /// Per-request timeout. Absent by default: a hung request stays hung,
    /// matching the product's no-timeout posture unless a deployment opts in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_summarize_path() -> String {
    DEFAULT_SUMMARIZE_PATH.to_string()
}

fn default_petition_path() -> String {
    DEFAULT_PETITION_PATH.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            summarize_path: default_summarize_path(),
            petition_path: default_petition_path(),
            request_timeout_secs: None,
        }
    }
}

impl BackendConfig {
    /// Config file path: ~/.jurito/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".jurito/config.toml")
    }

    /// Load from the config file if present, defaults otherwise,
    /// then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content).context("Failed to parse config file (invalid TOML)")?
        } else {
            Self::default()
        };

        if let Ok(url) = env::var("JURITO_BACKEND_URL") {
            config.base_url = url;
        }

        Ok(config)
    }

    pub fn summarize_url(&self) -> String {
        self.join(&self.summarize_path)
    }

    pub fn petition_url(&self) -> String {
        self.join(&self.petition_path)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.summarize_path, "/analisar");
        assert_eq!(config.petition_path, "/gerar-peticao");
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: BackendConfig =
            toml::from_str("base_url = \"http://localhost:8000\"").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.summarize_path, "/analisar");
    }

    #[test]
    fn test_url_join_tolerates_trailing_slash() {
        let config: BackendConfig =
            toml::from_str("base_url = \"http://localhost:8000/\"").unwrap();
        assert_eq!(config.summarize_url(), "http://localhost:8000/analisar");
        assert_eq!(config.petition_url(), "http://localhost:8000/gerar-peticao");
    }
}
