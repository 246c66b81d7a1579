use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Settings read from the JSON config file.
///
/// Both keys are optional; a missing key is a normal "not configured" state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(rename = "videoUrl", default)]
    pub video_url: Option<String>,

    #[serde(rename = "apikey", default)]
    pub api_key: Option<String>,
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "config.json";

    /// Load the config at `path`, falling back to an empty config when the file
    /// is missing or is not valid JSON.
    pub fn load(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Could not load config from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn video_url(&self) -> Option<&str> {
        non_blank(self.video_url.as_deref())
    }

    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
