//! Transient message shown at the bottom of the window.

use eframe::egui;

use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::{Toast, ToastKind};

pub fn draw_toast(ctx: &egui::Context, toast: &Toast) {
    let (icon, color) = match toast.kind {
        ToastKind::Success => ("✅", CURRENT_THEME.typography.success),
        ToastKind::Error => ("❌", CURRENT_THEME.typography.error),
    };

    egui::Area::new(egui::Id::new("snapshot_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(CURRENT_THEME.layout.card_background)
                .stroke(egui::Stroke::new(1.5, color))
                .rounding(egui::Rounding::same(10.0))
                .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(format!("{} {}", icon, toast.message)).color(color));
                });
        });
}
