use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub analysis: AnalysisConfig,
    pub playback: PlaybackConfig,
    pub share: ShareConfig,
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub saved_limit: usize,
    pub recommended_limit: usize,
    /// Zero disables the timeout; a fetch that never resolves keeps its
    /// collection loading.
    pub fetch_timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            saved_limit: 25,
            recommended_limit: 15,
            fetch_timeout_ms: 0,
        }
    }
}

impl CatalogConfig {
    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.fetch_timeout_ms > 0).then(|| Duration::from_millis(self.fetch_timeout_ms))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    pub timeout_ms: u64,
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlaybackConfig {
    pub redraw_interval_ms: u64,
    pub input_poll_timeout_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            redraw_interval_ms: 33,
            input_poll_timeout_ms: 16,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShareConfig {
    pub swipe_threshold: f32,
    pub url: String,
    pub cell_width_px: u16,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            url: "https://shop.app/recap".to_string(),
            cell_width_px: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.catalog.saved_limit = self.catalog.saved_limit.max(1);
        self.catalog.recommended_limit = self.catalog.recommended_limit.max(1);
        self.playback.redraw_interval_ms = self.playback.redraw_interval_ms.max(1);
        self.playback.input_poll_timeout_ms = self.playback.input_poll_timeout_ms.max(1);
        if !self.share.swipe_threshold.is_finite() || self.share.swipe_threshold <= 0.0 {
            self.share.swipe_threshold = ShareConfig::default().swipe_threshold;
        }
        if self.share.url.trim().is_empty() {
            self.share.url = ShareConfig::default().url;
        }
        self.share.cell_width_px = self.share.cell_width_px.max(1);
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("RECAP_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("recap").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("recap")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("recap").join("config.toml"));
    }
    None
}
