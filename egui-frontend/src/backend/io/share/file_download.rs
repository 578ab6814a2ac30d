//! Download fallback: writes the snapshot into a local directory.
//!
//! Mirrors browser download behaviour: an existing file is never
//! overwritten, a numbered variant (`life-in-weeks (1).png`) is used instead.

use anyhow::{anyhow, Context, Result};
use log::info;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::DownloadTarget;
use crate::backend::domain::models::SnapshotFile;

/// Highest numbered variant tried before giving up
const MAX_NAME_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct FileDownloadTarget {
    directory: PathBuf,
}

impl FileDownloadTarget {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The user's Downloads folder, falling back to the home directory
    pub fn default_location() -> Result<Self> {
        dirs::download_dir()
            .or_else(dirs::home_dir)
            .map(Self::new)
            .ok_or_else(|| anyhow!("Could not determine a download directory"))
    }

    /// Candidate path for attempt `n` (0 is the plain file name)
    fn candidate_path(&self, file_name: &str, attempt: u32) -> PathBuf {
        if attempt == 0 {
            return self.directory.join(file_name);
        }
        let path = Path::new(file_name);
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(file_name);
        let numbered = match path.extension().and_then(|e| e.to_str()) {
            Some(extension) => format!("{} ({}).{}", stem, attempt, extension),
            None => format!("{} ({})", stem, attempt),
        };
        self.directory.join(numbered)
    }
}

impl DownloadTarget for FileDownloadTarget {
    fn save(&self, file: &SnapshotFile) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory)
            .with_context(|| format!("Failed to create download directory {:?}", self.directory))?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = self.candidate_path(&file.file_name, attempt);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut handle) => {
                    handle
                        .write_all(&file.bytes)
                        .with_context(|| format!("Failed to write snapshot to {:?}", path))?;
                    info!("💾 DOWNLOAD: saved {} bytes to {:?}", file.bytes.len(), path);
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to create {:?}", path));
                }
            }
        }

        Err(anyhow!(
            "No free file name for {} in {:?}",
            file.file_name,
            self.directory
        ))
    }
}
