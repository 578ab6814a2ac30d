//! # Styling Module
//!
//! Global egui style setup and shared drawing helpers.
//!
//! ## Key Functions:
//! - `setup_life_calendar_style()` - Configure global egui styling
//! - `draw_card_container()` - Card background with a soft shadow
//! - `primary_button()` - Filled button used for the main call to action

use eframe::egui;

use crate::ui::components::theme::CURRENT_THEME;

/// Corner radius of cards
pub const CARD_ROUNDING: f32 = 12.0;

/// Setup the light, calm styling used across the app
pub fn setup_life_calendar_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = CURRENT_THEME.layout.window_background;
        style.visuals.window_fill = CURRENT_THEME.layout.card_background;
        // In egui 0.28 text edits draw on extreme_bg_color
        style.visuals.extreme_bg_color = CURRENT_THEME.interactive.input_background;
        style.visuals.override_text_color = Some(CURRENT_THEME.typography.primary);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
        );

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        style
    });
}

/// Draw a card with a soft drop shadow behind `rect`. The card is filled
/// with the style's window fill.
pub fn draw_card_container(ui: &mut egui::Ui, rect: egui::Rect) {
    let painter = ui.painter();

    let shadow_rect = rect.translate(egui::vec2(0.0, 3.0)).expand(2.0);
    painter.rect_filled(shadow_rect, egui::Rounding::same(CARD_ROUNDING + 2.0), CURRENT_THEME.layout.card_shadow);

    painter.rect_filled(rect, egui::Rounding::same(CARD_ROUNDING), ui.visuals().window_fill);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(CARD_ROUNDING),
        egui::Stroke::new(1.0, CURRENT_THEME.layout.card_border),
    );
}

/// Filled call-to-action button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .color(CURRENT_THEME.interactive.button_text)
            .strong(),
    )
    .fill(CURRENT_THEME.interactive.button_fill)
    .stroke(egui::Stroke::new(1.0, CURRENT_THEME.interactive.button_border))
    .rounding(egui::Rounding::same(8.0))
    .min_size(egui::vec2(150.0, 34.0))
}

/// Small square stepper button ("−" / "+")
pub fn stepper_button(symbol: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(symbol.to_string()).strong())
        .rounding(egui::Rounding::same(6.0))
        .min_size(egui::vec2(28.0, 28.0))
}
