//! # Backend Module for egui Frontend
//!
//! Wires the domain services to their platform capabilities. Everything here
//! is synchronous; the only background work is snapshot delivery, which the
//! snapshot service runs on its own worker thread.

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod domain;
pub mod io;
pub mod storage;

use domain::{SnapshotExporter, SnapshotSettings};
use io::share::{DownloadTarget, FileDownloadTarget, NativeShareTarget, ShareTarget};
use storage::ExportConfig;
pub use storage::AppConfig;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub config: AppConfig,
    pub snapshot_exporter: SnapshotExporter,
}

impl Backend {
    /// Create a backend from the config file in the platform config directory
    pub fn new() -> Result<Self> {
        Self::with_config(AppConfig::load())
    }

    /// Create a backend with real platform sinks for the given config
    pub fn with_config(config: AppConfig) -> Result<Self> {
        let download_target: Arc<dyn DownloadTarget> = match &config.export.download_dir {
            Some(directory) => Arc::new(FileDownloadTarget::new(directory.clone())),
            None => Arc::new(FileDownloadTarget::default_location()?),
        };

        let share_target: Option<Arc<dyn ShareTarget>> = match native_share_target(&config.export) {
            Some(target) => Some(Arc::new(target)),
            None => {
                info!("📤 SHARE: native share disabled by config");
                None
            }
        };

        Ok(Self::with_targets(config, share_target, download_target))
    }

    /// Create a backend with explicit sinks
    pub fn with_targets(
        config: AppConfig,
        share_target: Option<Arc<dyn ShareTarget>>,
        download_target: Arc<dyn DownloadTarget>,
    ) -> Self {
        let settings = SnapshotSettings {
            file_name: config.export.file_name.clone(),
            share_title: config.export.share_title.clone(),
        };
        let snapshot_exporter = SnapshotExporter::new(settings, share_target, download_target);

        Self {
            config,
            snapshot_exporter,
        }
    }
}

/// Native share dialog for the export settings, opening in the configured
/// download directory when there is one
fn native_share_target(export: &ExportConfig) -> Option<NativeShareTarget> {
    if !export.native_share {
        return None;
    }
    Some(match &export.download_dir {
        Some(directory) => NativeShareTarget::with_initial_directory(directory.clone()),
        None => NativeShareTarget::new(),
    })
}
