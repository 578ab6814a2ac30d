//! Recording share/download sink.
//!
//! Stands in for both platform capabilities without touching the platform.
//! Every call is recorded so callers can assert which route a snapshot took.

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{DownloadTarget, ShareOutcome, ShareTarget};
use crate::backend::domain::models::{ShareMetadata, SnapshotFile};

/// How the sink answers share requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullShareBehavior {
    /// No share capability on this "platform"
    Unavailable,
    /// Capability exists but refuses the file
    Declines,
    /// Dialog shown, user closes it
    Dismisses,
    /// File shared successfully
    Shares,
    /// Platform error while sharing
    Fails,
}

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkInvocation {
    Share { file_name: String, title: String },
    Save { file_name: String, size: usize },
}

#[derive(Debug)]
pub struct NullSink {
    behavior: NullShareBehavior,
    fail_downloads: bool,
    download_directory: PathBuf,
    invocations: Mutex<Vec<SinkInvocation>>,
}

impl NullSink {
    pub fn new(behavior: NullShareBehavior) -> Self {
        Self {
            behavior,
            fail_downloads: false,
            download_directory: PathBuf::from("downloads"),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Make every save fail
    pub fn failing_downloads(mut self) -> Self {
        self.fail_downloads = true;
        self
    }

    pub fn invocations(&self) -> Vec<SinkInvocation> {
        self.invocations.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn share_count(&self) -> usize {
        self.invocations()
            .iter()
            .filter(|i| matches!(i, SinkInvocation::Share { .. }))
            .count()
    }

    pub fn save_count(&self) -> usize {
        self.invocations()
            .iter()
            .filter(|i| matches!(i, SinkInvocation::Save { .. }))
            .count()
    }

    fn record(&self, invocation: SinkInvocation) {
        self.invocations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(invocation);
    }
}

impl ShareTarget for NullSink {
    fn is_available(&self) -> bool {
        self.behavior != NullShareBehavior::Unavailable
    }

    fn can_share(&self, _file: &SnapshotFile) -> bool {
        self.behavior != NullShareBehavior::Declines
    }

    fn share(&self, file: &SnapshotFile, metadata: &ShareMetadata) -> Result<ShareOutcome> {
        self.record(SinkInvocation::Share {
            file_name: file.file_name.clone(),
            title: metadata.title.clone(),
        });
        match self.behavior {
            NullShareBehavior::Fails => Err(anyhow!("share failed")),
            NullShareBehavior::Dismisses => Ok(ShareOutcome::Dismissed),
            _ => Ok(ShareOutcome::Shared),
        }
    }
}

impl DownloadTarget for NullSink {
    fn save(&self, file: &SnapshotFile) -> Result<PathBuf> {
        self.record(SinkInvocation::Save {
            file_name: file.file_name.clone(),
            size: file.bytes.len(),
        });
        if self.fail_downloads {
            return Err(anyhow!("disk full"));
        }
        Ok(self.download_directory.join(&file.file_name))
    }
}
