//! # Share Capabilities
//!
//! Platform-facing ways of getting a snapshot out of the app.
//!
//! ## Variants
//! - `NativeShareTarget` - the system save/share dialog
//! - `FileDownloadTarget` - silent save into the Downloads directory
//! - `NullSink` - records invocations without touching the platform (tests)
//!
//! The snapshot exporter probes the share target at runtime and falls back
//! to the download target whenever sharing is unavailable, declined, or
//! dismissed by the user.

pub mod file_download;
pub mod native_share;
pub mod null_sink;

use anyhow::Result;
use std::path::PathBuf;

use crate::backend::domain::models::{ShareMetadata, SnapshotFile};

pub use file_download::FileDownloadTarget;
pub use native_share::NativeShareTarget;
pub use null_sink::NullSink;

/// Result of handing a file to a share target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform accepted and delivered the file
    Shared,
    /// The user closed the dialog without sharing
    Dismissed,
}

/// Native file-share capability
pub trait ShareTarget: Send + Sync {
    /// Whether this capability exists on the current platform at all
    fn is_available(&self) -> bool;

    /// Whether this particular file can be shared
    fn can_share(&self, file: &SnapshotFile) -> bool;

    /// Present the file to the user
    fn share(&self, file: &SnapshotFile, metadata: &ShareMetadata) -> Result<ShareOutcome>;
}

/// Local save fallback
pub trait DownloadTarget: Send + Sync {
    /// Save the file and return where it was written
    fn save(&self, file: &SnapshotFile) -> Result<PathBuf>;
}
