//! # Config Repository
//!
//! Read-only application configuration stored as YAML in the platform
//! config directory.
//!
//! ## File Location
//!
//! ```text
//! <config_dir>/life-in-weeks/config.yaml
//! ```
//!
//! ## YAML Format
//!
//! ```yaml
//! default_age: 25
//! default_lifespan: 90
//! max_years: 150
//! aspect_ratio: Wide
//! milestones:
//!   birth: true
//!   eighteen: true
//!   graduation: true
//!   today: true
//! animation_millis: 1200
//! export:
//!   file_name: life-in-weeks.png
//!   download_dir: /home/me/Pictures
//!   share_title: My Life in Weeks
//!   native_share: true
//! ```
//!
//! Every field is optional. The file is never written by the app: changes
//! made in the UI last only for the current session.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::{AspectRatio, LifeParameters, MilestoneVisibility};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::domain::models::DEFAULT_SNAPSHOT_FILE_NAME;

const DEFAULT_MAX_YEARS: u32 = 150;

/// Snapshot export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name given to exported snapshots
    pub file_name: String,
    /// Where the download fallback saves files (Downloads folder when unset)
    pub download_dir: Option<PathBuf>,
    /// Title passed to the share dialog
    pub share_title: String,
    /// Offer the native share dialog before downloading
    pub native_share: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_SNAPSHOT_FILE_NAME.to_string(),
            download_dir: None,
            share_title: "My Life in Weeks".to_string(),
            native_share: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_age: u32,
    pub default_lifespan: u32,
    /// Upper bound for the age and lifespan inputs
    pub max_years: u32,
    pub aspect_ratio: AspectRatio,
    pub milestones: MilestoneVisibility,
    /// Duration of the lived-weeks reveal animation
    pub animation_millis: u64,
    pub export: ExportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let parameters = LifeParameters::default();
        Self {
            default_age: parameters.age,
            default_lifespan: parameters.lifespan,
            max_years: DEFAULT_MAX_YEARS,
            aspect_ratio: parameters.aspect_ratio,
            milestones: parameters.milestones,
            animation_millis: 1200,
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("life-in-weeks").join("config.yaml"))
    }

    /// Load from the default location. Missing or unreadable files fall back
    /// to defaults; problems are logged, never fatal.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("⚙️ CONFIG: no config directory on this platform, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("⚙️ CONFIG: {:#}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("⚙️ CONFIG: {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig =
            serde_yaml::from_str(&yaml_content).with_context(|| format!("Invalid config file {:?}", path))?;

        info!("⚙️ CONFIG: loaded {:?}", path);
        Ok(config.normalized())
    }

    /// Repair values the app cannot work with
    fn normalized(mut self) -> Self {
        if self.max_years == 0 {
            self.max_years = DEFAULT_MAX_YEARS;
        }
        self.default_age = self.default_age.min(self.max_years);
        self.default_lifespan = self.default_lifespan.min(self.max_years);
        if self.export.file_name.trim().is_empty() {
            self.export.file_name = DEFAULT_SNAPSHOT_FILE_NAME.to_string();
        }
        self
    }

    /// Parameters the calendar starts with
    pub fn initial_parameters(&self) -> LifeParameters {
        LifeParameters {
            age: self.default_age,
            lifespan: self.default_lifespan,
            aspect_ratio: self.aspect_ratio,
            milestones: self.milestones,
        }
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&temp_dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.initial_parameters(), LifeParameters::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(
            &path,
            "default_age: 40\naspect_ratio: Tall\nmilestones:\n  graduation: false\nexport:\n  file_name: weeks.png\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.default_age, 40);
        assert_eq!(config.default_lifespan, 90);
        assert_eq!(config.aspect_ratio, AspectRatio::Tall);
        assert!(!config.milestones.graduation);
        assert!(config.milestones.birth);
        assert_eq!(config.export.file_name, "weeks.png");
        assert!(config.export.native_share);
        assert_eq!(config.animation_duration(), Duration::from_millis(1200));
    }

    #[test]
    fn test_values_are_normalized() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "max_years: 0\ndefault_age: 500\nexport:\n  file_name: '  '\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.max_years, 150);
        assert_eq!(config.default_age, 150);
        assert_eq!(config.export.file_name, DEFAULT_SNAPSHOT_FILE_NAME);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "default_age: [not, a, number]\n").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}
