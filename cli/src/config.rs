use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_ENV: &str = "JOURNALKEEPER_API_URL";

/// Where the auth token is persisted between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStoreKind {
    #[default]
    Keyring,
    File,
}

/// Client settings. Resolved from defaults, `config.toml`, the environment,
/// and finally the `--api-url` flag, later sources winning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    pub token_store: TokenStoreKind,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_store: TokenStoreKind::default(),
        }
    }
}

impl ClientConfig {
    /// Platform config directory, created on first use.
    pub fn dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "journalkeeper", "journalkeeper")
            .context("Could not determine config directory")?;
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    }

    pub fn load(api_url_flag: Option<&str>) -> Result<Self> {
        let path = Self::dir()?.join("config.toml");
        let file = if path.exists() {
            Some(
                fs::read_to_string(&path)
                    .with_context(|| format!("Could not read {}", path.display()))?,
            )
        } else {
            None
        };
        let env_url = std::env::var(API_URL_ENV).ok();
        Self::from_sources(file.as_deref(), env_url.as_deref(), api_url_flag)
    }

    /// Merges the layers without touching the filesystem or process environment.
    pub fn from_sources(
        file: Option<&str>,
        env_url: Option<&str>,
        flag_url: Option<&str>,
    ) -> Result<Self> {
        let mut config: ClientConfig = match file {
            Some(content) => toml::from_str(content).context("Invalid config.toml")?,
            None => Self::default(),
        };

        if let Some(url) = env_url.filter(|u| !u.trim().is_empty()) {
            config.api_url = url.to_string();
        }
        if let Some(url) = flag_url {
            config.api_url = url.to_string();
        }

        config.api_url = normalize_api_url(&config.api_url)?;
        Ok(config)
    }
}

/// Checks the base URL is http(s) and strips the trailing slash so paths can be appended.
fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).with_context(|| format!("Invalid API URL: {}", trimmed))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(anyhow!(
            "API URL must use http or https, got {}",
            parsed.scheme()
        ));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
