//! Showcase configuration
//!
//! Loaded from TOML. Every field has a default, so a missing file or an
//! empty one yields a working site.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "BUTTON_SHOWCASE_CONFIG";
const CONFIG_FILE: &str = "showcase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Landing page heading; falls back to the locale message
    pub title: Option<String>,
    /// Landing page subtitle; falls back to the locale message
    pub subtitle: Option<String>,
    /// Href of the design-token stylesheet linked from every page
    pub stylesheet: String,
    /// Directory the site is written to
    pub output_dir: PathBuf,
    /// Syntect theme for source snippets
    pub highlight_theme: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            stylesheet: "globals.css".to_string(),
            output_dir: PathBuf::from("storybook-static"),
            highlight_theme: "InspiredGitHub".to_string(),
        }
    }
}

impl ShowcaseConfig {
    /// Resolve the config path: explicit path, then `BUTTON_SHOWCASE_CONFIG`,
    /// then the platform config directory.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Ok(path) = env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        directories::ProjectDirs::from("", "", "button-showcase")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
