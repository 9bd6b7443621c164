// BiasViz - GPL-3.0-or-later
// This file is part of BiasViz.
//
// Copyright (C) 2025 BiasViz Authors
//
// BiasViz is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// BiasViz is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with BiasViz.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the stored service URL
pub const API_URL_ENV: &str = "BIASVIZ_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Global user configuration stored in config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Base URL of the scoring service
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Origin prepended to share links (`{origin}/#{id}`)
    #[serde(default = "default_share_origin")]
    pub share_origin: String,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_share_origin() -> String {
    DEFAULT_SHARE_ORIGIN.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            share_origin: default_share_origin(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GlobalConfig {
    /// Get the path to the global config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("biasviz").join("config.json"))
    }

    /// Load global config from disk, returning defaults if not found.
    /// `BIASVIZ_API_URL` takes precedence over the stored URL.
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::info!("Using service URL from {API_URL_ENV}: {url}");
                config.api_base_url = url;
            }
        }
        config
    }

    /// Load from an explicit path; unreadable or invalid files give defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("No global config found, using defaults");
            return Self::default();
        }

        tracing::info!("Loading global config from {path:?}");
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|contents| serde_json::from_str::<Self>(&contents).map_err(Into::into))
        {
            Ok(config) => {
                tracing::info!("Service at {}", config.api_base_url);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {path:?}: {e}");
                Self::default()
            }
        }
    }

    /// Save global config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path().context("Could not determine config directory")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {parent:?}"))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {path:?}"))?;

        tracing::info!("Saved global config to {path:?}");
        Ok(())
    }

    /// Apply command line overrides for this session
    pub fn apply_overrides(&mut self, api_url: Option<String>, share_origin: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(origin) = share_origin.filter(|o| !o.trim().is_empty()) {
            self.share_origin = origin;
        }
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = GlobalConfig {
            api_base_url: "https://bias.example".to_string(),
            share_origin: "https://share.example".to_string(),
            request_timeout_secs: 5,
        };

        config.save_to(&path).unwrap();
        assert_eq!(GlobalConfig::load_from(&path), config);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_base_url": "http://10.0.0.2:9000"}"#).unwrap();

        let config = GlobalConfig::load_from(&path);
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");
        assert_eq!(config.share_origin, "http://localhost:5173");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_overrides_persist_when_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = GlobalConfig::default();
        config.apply_overrides(Some("http://scores.lan:9000".to_string()), None);
        assert_eq!(config.api_base_url, "http://scores.lan:9000");
        assert_eq!(config.share_origin, "http://localhost:5173");

        config.save_to(&path).unwrap();
        let reloaded = GlobalConfig::load_from(&path);
        assert_eq!(reloaded.api_base_url, "http://scores.lan:9000");
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let mut config = GlobalConfig::default();
        config.apply_overrides(Some("  ".to_string()), Some(String::new()));
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert_eq!(GlobalConfig::load_from(&path), GlobalConfig::default());
    }
}
