use std::path::PathBuf;

/// Overrides the directory holding the SQLite store.
pub const ENV_DATA_DIR: &str = "AI_SHARE_BUTTONS_DATA_DIR";
/// Overrides the public base URL static assets are served from.
pub const ENV_ASSET_URL: &str = "AI_SHARE_BUTTONS_ASSET_URL";

const APP_DIR_NAME: &str = "ai-share-buttons";
const DEFAULT_DB_FILE: &str = "ai-share-buttons.db";
const DEFAULT_ASSET_URL: &str = "/assets/";

/// Process-level configuration for the host binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_file_name: String,
    /// Base URL the stylesheet is served from; always ends with `/`.
    pub asset_base_url: String,
    /// Used as the stylesheet cache buster.
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            db_file_name: DEFAULT_DB_FILE.into(),
            asset_base_url: DEFAULT_ASSET_URL.into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

impl AppConfig {
    /// Build from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir.trim());
        }
        if let Some(url) = lookup(ENV_ASSET_URL).filter(|v| !v.trim().is_empty()) {
            let url = url.trim();
            config.asset_base_url = if url.ends_with('/') {
                url.to_string()
            } else {
                format!("{url}/")
            };
        }

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            asset_base_url = %config.asset_base_url,
            "Configuration resolved"
        );
        config
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    pub fn asset_url(&self, relative: &str) -> String {
        format!("{}{}", self.asset_base_url, relative.trim_start_matches('/'))
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
