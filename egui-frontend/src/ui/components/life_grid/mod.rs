//! # Life Grid Component
//!
//! - `renderer` - on-screen painting and hover handling
//! - `frame_scheduler` - repaint-driven scheduling for the lived-weeks animation

pub mod frame_scheduler;
pub mod renderer;

pub use frame_scheduler::{frame_time, EguiFrameScheduler};
pub use renderer::{draw_grid_summary, draw_life_grid};
