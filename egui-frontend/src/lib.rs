//! Your life in weeks: a memento mori calendar drawn with egui, with
//! shareable PNG snapshots.

pub mod backend;
pub mod ui;
