//! # UI State Modules
//!
//! Explicit state objects owned by the app:
//! - `grid_state` - parameters, computed cells, animation and hover chrome
//! - `snapshot_state` - snapshot delivery running in the background
//! - `ui_state` - transient toast feedback

pub mod grid_state;
pub mod snapshot_state;
pub mod ui_state;

pub use grid_state::GridViewState;
pub use snapshot_state::SnapshotState;
pub use ui_state::{Toast, ToastKind, UIState};
