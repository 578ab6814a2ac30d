//! Native share capability backed by the system file dialog.
//!
//! On desktop the closest thing to a share sheet is the platform save
//! dialog: the user picks where the snapshot goes (a synced folder, a
//! messaging app's drop folder, a USB stick). Closing the dialog counts as a
//! dismissal, which sends the exporter down the download fallback.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::{ShareOutcome, ShareTarget};
use crate::backend::domain::models::{ShareMetadata, SnapshotFile, PNG_MIME_TYPE};

#[derive(Debug, Clone, Default)]
pub struct NativeShareTarget {
    initial_directory: Option<PathBuf>,
}

impl NativeShareTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            initial_directory: Some(directory.into()),
        }
    }

    /// Directory the dialog opens in, if any
    pub fn initial_directory(&self) -> Option<&Path> {
        self.initial_directory.as_deref()
    }
}

impl ShareTarget for NativeShareTarget {
    fn is_available(&self) -> bool {
        cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux"))
    }

    fn can_share(&self, file: &SnapshotFile) -> bool {
        file.mime_type == PNG_MIME_TYPE && !file.bytes.is_empty()
    }

    fn share(&self, file: &SnapshotFile, metadata: &ShareMetadata) -> Result<ShareOutcome> {
        debug!("📤 SHARE: opening native dialog ({})", metadata.text);

        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title(metadata.title.as_str())
            .set_file_name(file.file_name.as_str())
            .add_filter("PNG image", &["png"]);
        if let Some(directory) = self.initial_directory() {
            dialog = dialog.set_directory(directory);
        }

        // Runs on the snapshot worker thread, never on the UI thread
        let Some(handle) = futures::executor::block_on(dialog.save_file()) else {
            info!("📤 SHARE: dialog dismissed by user");
            return Ok(ShareOutcome::Dismissed);
        };

        let path = handle.path().to_path_buf();
        fs::write(&path, &file.bytes).with_context(|| format!("Failed to write snapshot to {:?}", path))?;
        info!("📤 SHARE: snapshot delivered to {:?}", path);
        Ok(ShareOutcome::Shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(mime_type: &'static str, bytes: &[u8]) -> SnapshotFile {
        SnapshotFile {
            file_name: "life-in-weeks.png".to_string(),
            mime_type,
            bytes: bytes.to_vec(),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn test_only_png_files_are_accepted() {
        let target = NativeShareTarget::new();
        assert!(target.can_share(&snapshot(PNG_MIME_TYPE, b"png")));
        assert!(!target.can_share(&snapshot("text/plain", b"txt")));
        assert!(!target.can_share(&snapshot(PNG_MIME_TYPE, b"")));
    }
}
