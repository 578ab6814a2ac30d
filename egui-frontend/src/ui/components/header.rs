//! # Header Component
//!
//! App title and the snapshot button.

use eframe::egui;
use log::{debug, warn};

use crate::backend::domain::SnapshotError;
use crate::ui::app_state::LifeInWeeksApp;
use crate::ui::components::life_grid::frame_time;
use crate::ui::components::styling::primary_button;
use crate::ui::components::theme::colors;

impl LifeInWeeksApp {
    /// Draw the header row
    pub fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(egui::RichText::new("Your Life in Weeks").color(colors::HEADING));
                ui.label(
                    egui::RichText::new("Each box is one week. Make them count.").color(colors::TEXT_SECONDARY),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let busy = self.is_exporting();
                let label = if busy { "Preparing snapshot…" } else { "Share snapshot" };

                let button = ui
                    .add_enabled(self.can_snapshot(), primary_button(label))
                    .on_hover_text("Save or share an image of your calendar");
                if button.clicked() {
                    self.start_snapshot(ui.ctx());
                }
                if busy {
                    ui.spinner();
                }
            });
        });
    }

    /// Whether a snapshot is being captured or delivered
    pub fn is_exporting(&self) -> bool {
        self.snapshot.is_in_flight() || self.backend.snapshot_exporter.is_busy()
    }

    /// Whether the snapshot button can be used: something to capture and
    /// no export already running
    pub fn can_snapshot(&self) -> bool {
        !self.grid.cells().is_empty() && !self.is_exporting()
    }

    /// Capture the grid now and deliver it in the background
    pub fn start_snapshot(&mut self, ctx: &egui::Context) {
        let now = frame_time(ctx);
        if self.grid.cells().is_empty() {
            debug!("📸 SNAPSHOT: nothing to capture, the grid is empty");
            return;
        }

        let started = self
            .backend
            .snapshot_exporter
            .begin_capture(&mut self.grid)
            .and_then(|pending| self.snapshot.start(pending, Some(ctx.clone())));

        match started {
            Ok(()) => {}
            Err(SnapshotError::Busy) => warn!("📸 SNAPSHOT: ignoring click while an export is running"),
            Err(e) => self.ui_state.show_error(e.to_string(), now),
        }
    }

    /// Pick up a finished delivery and report it
    pub fn poll_snapshot(&mut self, now: std::time::Duration) {
        match self.snapshot.poll() {
            Some(Ok(route)) => self.ui_state.show_success(route.success_message(), now),
            Some(Err(e)) => self.ui_state.show_error(e.to_string(), now),
            None => {}
        }
    }
}
