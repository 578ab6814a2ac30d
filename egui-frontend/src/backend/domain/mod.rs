//! # Domain Module
//!
//! Contains all non-UI logic of the life calendar.
//!
//! ## Module Organization
//!
//! - **week_grid**: (age, lifespan) → ordered week cells
//! - **milestones**: fixed life events attached to week numbers
//! - **parameter_input**: lenient parsing and stepping of the year inputs
//! - **life_progress**: percentage lived and accessible descriptions
//! - **animated_counter**: eased, frame-driven "weeks lived" counter
//! - **grid_layout** / **cell_style**: geometry and appearance shared by the
//!   renderer and the rasterizer
//! - **rasterizer**: software painting of the grid and PNG encoding
//! - **snapshot_service**: capture, share and download orchestration
//!
//! ## Design Principles
//!
//! - Grid and milestone functions are pure and total over their inputs;
//!   they are recomputed in full on every parameter change
//! - Time is passed in explicitly so animation is testable with a
//!   simulated clock
//! - All failure handling lives in the snapshot service

pub mod animated_counter;
pub mod cell_style;
pub mod grid_layout;
pub mod life_progress;
pub mod milestones;
pub mod models;
pub mod parameter_input;
pub mod rasterizer;
pub mod snapshot_service;
pub mod week_grid;

pub use animated_counter::{AnimatedCounter, FrameHandle, FrameScheduler};
pub use cell_style::{CellAppearance, GridPalette};
pub use grid_layout::GridLayout;
pub use life_progress::LifeProgress;
pub use models::*;
pub use snapshot_service::{CaptureRegion, PendingSnapshot, SnapshotExporter, SnapshotSettings};
