//! # App Coordinator Module
//!
//! The main update loop.
//!
//! ## Application Flow (per frame):
//! 1. Pick up a finished snapshot delivery and expire old toasts
//! 2. Advance the lived-weeks animation
//! 3. Render header, inputs, progress bar and grid
//! 4. Render the toast, if any

use eframe::egui;

use crate::ui::app_state::LifeInWeeksApp;
use crate::ui::components::{draw_grid_summary, draw_life_grid, draw_life_progress_bar, draw_toast, frame_time};

impl eframe::App for LifeInWeeksApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = frame_time(ctx);

        self.poll_snapshot(now);
        self.ui_state.expire(now);
        if let Some(remaining) = self.ui_state.toast_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.ui_state.dismiss();
        }

        let displayed = self.grid.tick(now);
        log::trace!("🎞️ COUNTER: displaying {} lived weeks", displayed);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.add_space(8.0);
                self.draw_header(ui);
                ui.separator();

                self.draw_parameter_controls(ui);
                ui.add_space(12.0);

                let progress = self.grid.progress();
                draw_life_progress_bar(ui, &progress);
                ui.add_space(12.0);

                egui::ScrollArea::horizontal().id_source("life_grid_scroll").show(ui, |ui| {
                    draw_life_grid(ui, &mut self.grid);
                });
                draw_grid_summary(ui, &self.grid);
                ui.add_space(16.0);
            });
        });

        if let Some(toast) = self.ui_state.toast(now) {
            draw_toast(ctx, toast);
        }
    }
}
