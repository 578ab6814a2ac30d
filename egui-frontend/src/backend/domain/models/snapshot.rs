use std::path::PathBuf;

/// Default file name of an exported snapshot
pub const DEFAULT_SNAPSHOT_FILE_NAME: &str = "life-in-weeks.png";

pub const PNG_MIME_TYPE: &str = "image/png";

/// An encoded snapshot ready to be shared or saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
    /// Pixel dimensions of the encoded image
    pub width: u32,
    pub height: u32,
}

/// Optional title and text handed to the native share capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMetadata {
    pub title: String,
    pub text: String,
}

/// Where a finished snapshot ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRoute {
    /// Handed to the native share capability
    Shared,
    /// Saved locally by the download fallback
    Downloaded(PathBuf),
}

impl ExportRoute {
    /// Message shown to the user once the export completes
    pub fn success_message(&self) -> String {
        match self {
            ExportRoute::Shared => "Snapshot shared".to_string(),
            ExportRoute::Downloaded(path) => format!("Snapshot saved to {}", path.display()),
        }
    }
}

/// Errors raised while producing or delivering a snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("A snapshot is already being prepared")]
    Busy,
    #[error("Could not capture the grid: {0}")]
    Rasterization(String),
    #[error("Could not encode the snapshot image: {0}")]
    Encoding(String),
    #[error("Could not save the snapshot: {0}")]
    Delivery(String),
}
