//! Progress bar showing how much of the expected lifespan has been lived.

use eframe::egui;

use crate::backend::domain::LifeProgress;
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Configuration for progress bar appearance
#[derive(Debug, Clone)]
pub struct LifeProgressBarConfig {
    pub height: f32,
    pub rounding: f32,
    pub max_width: f32,
}

impl Default for LifeProgressBarConfig {
    fn default() -> Self {
        Self {
            height: 14.0,
            rounding: 7.0,
            max_width: 640.0,
        }
    }
}

/// Headline, bar and remaining percentage
pub fn draw_life_progress_bar(ui: &mut egui::Ui, progress: &LifeProgress) {
    let config = LifeProgressBarConfig::default();

    ui.label(
        egui::RichText::new(progress.headline())
            .size(18.0)
            .color(colors::HEADING)
            .strong(),
    );

    let width = ui.available_width().min(config.max_width);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, config.height), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let rounding = egui::Rounding::same(config.rounding);
        painter.rect_filled(rect, rounding, CURRENT_THEME.progress.track);

        let fraction = progress.bar_fraction();
        if fraction > 0.0 {
            let fill_rect = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width() * fraction, rect.height()));
            painter.rect_filled(fill_rect, rounding, CURRENT_THEME.progress.fill);
        }
    }
    response.on_hover_text(format!("{:.1}% lived", progress.percentage_lived));

    ui.label(egui::RichText::new(progress.remaining_text()).color(colors::TEXT_SECONDARY));
}
