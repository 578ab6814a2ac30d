//! # UI Components Module
//!
//! ## Module Organization:
//! - `theme` - Colors shared by every component and the snapshot
//! - `styling` - Global egui style and common drawing helpers
//! - `header` - Title and snapshot button
//! - `parameter_controls` - Age, lifespan, layout and milestone inputs
//! - `life_progress_bar` - Percentage of life lived
//! - `life_grid` - The week grid itself
//! - `toast` - Transient export feedback

pub mod header;
pub mod life_grid;
pub mod life_progress_bar;
pub mod parameter_controls;
pub mod styling;
pub mod theme;
pub mod toast;

pub use life_grid::{draw_grid_summary, draw_life_grid, frame_time, EguiFrameScheduler};
pub use life_progress_bar::draw_life_progress_bar;
pub use styling::{draw_card_container, setup_life_calendar_style};
pub use theme::*;
pub use toast::draw_toast;
