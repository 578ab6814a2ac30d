//! # Grid State Module
//!
//! View state of the life calendar: current parameters, the computed and
//! annotated week cells, the animated lived boundary and the hover chrome.
//!
//! ## Responsibilities:
//! - Recompute the grid in full whenever a parameter changes
//! - Retarget the weeks-lived counter so the boundary animates to its new place
//! - Expose the grid as a `CaptureRegion` for snapshot export
//!
//! The counter's scheduler is a type parameter so tests can drive the
//! animation with a manual scheduler and simulated time.

use eframe::egui::Color32;
use image::RgbaImage;
use log::info;
use shared::{LifeParameters, WeekCell};
use std::time::Duration;

use crate::backend::domain::life_progress::{self, LifeProgress};
use crate::backend::domain::rasterizer::{self, GridFrame};
use crate::backend::domain::{
    milestones, week_grid, AnimatedCounter, CaptureRegion, FrameScheduler, GridLayout, GridPalette, SnapshotError,
};

/// Grid view state owned by the app
pub struct GridViewState<S: FrameScheduler> {
    parameters: LifeParameters,
    max_years: u32,
    cells: Vec<WeekCell>,
    weeks_lived: u32,
    total_weeks: u32,
    layout: GridLayout,
    palette: GridPalette,
    /// Color the grid was last painted over, reused as the snapshot background
    background: Color32,
    counter: AnimatedCounter<S>,
    hovered: Option<usize>,
    chrome_visible: bool,
}

impl<S: FrameScheduler> GridViewState<S> {
    /// Build the grid for `parameters`. The lived boundary starts at zero and
    /// animates in.
    pub fn new(
        parameters: LifeParameters,
        max_years: u32,
        scheduler: S,
        animation: Duration,
        palette: GridPalette,
        background: Color32,
        now: Duration,
    ) -> Self {
        let mut state = Self {
            parameters,
            max_years,
            cells: Vec::new(),
            weeks_lived: 0,
            total_weeks: 0,
            layout: GridLayout::for_aspect_ratio(parameters.aspect_ratio),
            palette,
            background,
            counter: AnimatedCounter::new(scheduler, animation),
            hovered: None,
            chrome_visible: true,
        };
        state.set_parameters(parameters, now);
        state
    }

    /// Apply new parameters and recompute everything derived from them
    pub fn set_parameters(&mut self, parameters: LifeParameters, now: Duration) {
        let parameters = LifeParameters {
            age: parameters.age.min(self.max_years),
            lifespan: parameters.lifespan.min(self.max_years),
            ..parameters
        };

        let weeks_lived = week_grid::weeks_lived(parameters.age);
        let mut cells = week_grid::compute(parameters.age, parameters.lifespan);
        milestones::annotate_grid(&mut cells, weeks_lived, &parameters.milestones);

        self.parameters = parameters;
        self.weeks_lived = weeks_lived;
        self.total_weeks = week_grid::total_weeks(parameters.lifespan);
        self.layout = GridLayout::for_aspect_ratio(parameters.aspect_ratio);
        self.hovered = self.hovered.filter(|&index| index < cells.len());
        self.cells = cells;
        self.counter.set_target(weeks_lived, now);

        info!(
            "🗓️ GRID: age {} lifespan {} -> {} cells, {} lived ({})",
            parameters.age,
            parameters.lifespan,
            self.cells.len(),
            weeks_lived,
            parameters.aspect_ratio
        );
    }

    /// Advance the lived-boundary animation
    pub fn tick(&mut self, now: Duration) -> u32 {
        self.counter.tick(now)
    }

    pub fn parameters(&self) -> &LifeParameters {
        &self.parameters
    }

    pub fn max_years(&self) -> u32 {
        self.max_years
    }

    pub fn cells(&self) -> &[WeekCell] {
        &self.cells
    }

    pub fn weeks_lived(&self) -> u32 {
        self.weeks_lived
    }

    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn palette(&self) -> &GridPalette {
        &self.palette
    }

    /// Lived boundary as currently drawn
    pub fn displayed_lived(&self) -> u32 {
        self.counter.displayed()
    }

    pub fn is_animating(&self) -> bool {
        self.counter.is_animating()
    }

    pub fn progress(&self) -> LifeProgress {
        LifeProgress::new(self.parameters.age, self.parameters.lifespan)
    }

    /// Accessible one-sentence summary of the whole grid
    pub fn summary(&self) -> String {
        life_progress::grid_summary(self.weeks_lived, self.total_weeks)
    }

    /// Record the fill the grid is being painted over this frame
    pub fn set_background(&mut self, background: Color32) {
        self.background = background;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.cells.len());
    }

    /// Hovered cell together with its description
    pub fn hovered_description(&self) -> Option<String> {
        self.hovered
            .and_then(|index| self.cells.get(index))
            .map(life_progress::cell_description)
    }

    /// The grid as it currently looks, hover highlight included only while
    /// chrome is visible
    pub fn frame(&self) -> GridFrame<'_> {
        GridFrame {
            cells: &self.cells,
            layout: self.layout,
            displayed_lived: self.counter.displayed(),
            highlighted: if self.chrome_visible { self.hovered } else { None },
            palette: self.palette,
        }
    }
}

impl<S: FrameScheduler> CaptureRegion for GridViewState<S> {
    fn chrome_visible(&self) -> bool {
        self.chrome_visible
    }

    fn set_chrome_visible(&mut self, visible: bool) {
        self.chrome_visible = visible;
    }

    fn background_color(&self) -> Color32 {
        self.background
    }

    fn rasterize(&self, scale: f32, background: Color32) -> Result<RgbaImage, SnapshotError> {
        rasterizer::rasterize(&self.frame(), scale, background)
    }
}
