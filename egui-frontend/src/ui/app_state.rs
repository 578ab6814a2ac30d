//! # App State Module
//!
//! Defines the central application state structure and its initialization.
//!
//! ## Key Types:
//! - `LifeInWeeksApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize the app from the config file and platform sinks
//! - `with_backend()` - Initialize the app around an existing backend
//! - `apply_parameters()` - Feed an input change into the grid
//!
//! ## State Management:
//! All state lives in explicit state objects owned by this struct: the grid
//! view, the snapshot delivery in flight, and the toast. Nothing is global.

use eframe::egui;
use log::info;
use shared::LifeParameters;
use std::time::Duration;

use crate::backend::Backend;
use crate::ui::components::life_grid::{frame_time, EguiFrameScheduler};
use crate::ui::components::setup_life_calendar_style;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::{GridViewState, SnapshotState, UIState};

/// Main application struct for the life calendar
pub struct LifeInWeeksApp {
    pub backend: Backend,
    pub grid: GridViewState<EguiFrameScheduler>,
    pub snapshot: SnapshotState,
    pub ui_state: UIState,

    // Raw text of the year inputs
    pub age_input: String,
    pub lifespan_input: String,
}

impl LifeInWeeksApp {
    /// Create the app from the config file in the platform config directory
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing LifeInWeeksApp");

        setup_life_calendar_style(&cc.egui_ctx);
        let backend = Backend::new()?;

        Ok(Self::with_backend(backend, cc.egui_ctx.clone()))
    }

    pub fn with_backend(backend: Backend, ctx: egui::Context) -> Self {
        let now = frame_time(&ctx);
        let config = &backend.config;

        let grid = GridViewState::new(
            config.initial_parameters(),
            config.max_years,
            EguiFrameScheduler::new(ctx),
            config.animation_duration(),
            CURRENT_THEME.grid,
            CURRENT_THEME.layout.card_background,
            now,
        );

        let mut app = Self {
            backend,
            grid,
            snapshot: SnapshotState::new(),
            ui_state: UIState::new(),
            age_input: String::new(),
            lifespan_input: String::new(),
        };
        app.sync_year_inputs();
        app
    }

    /// Apply an input change to the grid
    pub fn apply_parameters(&mut self, parameters: LifeParameters, now: Duration) {
        if parameters != *self.grid.parameters() {
            self.grid.set_parameters(parameters, now);
        }
    }

    /// Show the applied age and lifespan in the text fields
    pub fn sync_year_inputs(&mut self) {
        let parameters = self.grid.parameters();
        self.age_input = parameters.age.to_string();
        self.lifespan_input = parameters.lifespan.to_string();
    }
}
