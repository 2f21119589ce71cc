use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Endpoint path overrides (each has a hardcoded default)
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the RAG email backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl BackendConfig {
    /// Base URL with the `RAGDASH_API_URL` environment override applied,
    /// trailing slashes stripped.
    pub fn effective_base_url(&self) -> String {
        std::env::var("RAGDASH_API_URL")
            .unwrap_or_else(|_| self.base_url.clone())
            .trim_end_matches('/')
            .to_string()
    }
}

/// Deployment-time endpoint paths. The defaults mirror the backend's
/// published routes; overriding them is only needed behind rewriting
/// proxies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_fetch_emails")]
    pub fetch_emails: String,
    #[serde(default = "default_login")]
    pub login: String,
    #[serde(default = "default_register")]
    pub register: String,
    #[serde(default = "default_logout")]
    pub logout: String,
    #[serde(default = "default_upload_documents")]
    pub upload_documents: String,
    #[serde(default = "default_process_url")]
    pub process_url: String,
    #[serde(default = "default_query")]
    pub query: String,
    #[serde(default = "default_chat")]
    pub chat: String,
    #[serde(default = "default_analyze_image")]
    pub analyze_image: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            fetch_emails: default_fetch_emails(),
            login: default_login(),
            register: default_register(),
            logout: default_logout(),
            upload_documents: default_upload_documents(),
            process_url: default_process_url(),
            query: default_query(),
            chat: default_chat(),
            analyze_image: default_analyze_image(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per page at startup (must be one of the footer choices)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// strftime format for the received-at column
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            date_format: default_date_format(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_fetch_emails() -> String {
    "/fetch-emails".to_string()
}

fn default_login() -> String {
    "/rag_doc/login".to_string()
}

fn default_register() -> String {
    "/rag_doc/register".to_string()
}

fn default_logout() -> String {
    "/logout".to_string()
}

fn default_upload_documents() -> String {
    "/upload_documents".to_string()
}

fn default_process_url() -> String {
    "/process_url".to_string()
}

fn default_query() -> String {
    "/query".to_string()
}

fn default_chat() -> String {
    "/chat".to_string()
}

fn default_analyze_image() -> String {
    "/analyze_image".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_date_format() -> String {
    "%b %d %H:%M".to_string()
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("ragdash");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::data_local_dir()
            .context("Could not find data directory")?
            .join("ragdash");
        Ok(dir)
    }

    /// Load the config file, falling back to defaults when it does not
    /// exist yet. A missing file is not an error: the backend defaults
    /// point at a local development server.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path
            .parent()
            .context("Config path has no parent directory")?;

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        fs::create_dir_all(Self::data_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [backend]
            base_url = "https://rag.example.com"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "https://rag.example.com");
        assert_eq!(config.endpoints.login, "/rag_doc/login");
        assert_eq!(config.endpoints.fetch_emails, "/fetch-emails");
        assert_eq!(config.ui.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_endpoint_overrides() {
        let toml = r#"
            [endpoints]
            login = "/api/v2/login"
            query = "/api/v2/query"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoints.login, "/api/v2/login");
        assert_eq!(config.endpoints.query, "/api/v2/query");
        // Untouched endpoints keep their defaults
        assert_eq!(config.endpoints.register, "/rag_doc/register");
        assert_eq!(config.endpoints.upload_documents, "/upload_documents");
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.endpoints.analyze_image, "/analyze_image");
        assert_eq!(config.ui.date_format, "%b %d %H:%M");
    }
}
