//! # Life Grid Renderer
//!
//! Paints the week grid on a card and handles hover. Cell geometry comes
//! from `GridLayout` and colors from `cell_appearance`, the same sources the
//! snapshot rasterizer uses, so what is exported matches what is on screen.
//!
//! ## Accessibility
//! The grid area carries the grid summary sentence and every visible cell
//! gets its own hover-sensing node labelled with the cell description, so
//! screen readers can walk the cells one by one.

use eframe::egui;

use crate::backend::domain::cell_style::{cell_appearance, highlight_appearance};
use crate::backend::domain::life_progress::cell_description;
use crate::backend::domain::{CaptureRegion, CellAppearance, FrameScheduler};
use crate::ui::components::styling::draw_card_container;
use crate::ui::components::theme::colors;
use crate::ui::state::GridViewState;

/// Draw the grid and update hover state. Returns the response of the grid
/// area.
pub fn draw_life_grid<S: FrameScheduler>(ui: &mut egui::Ui, grid: &mut GridViewState<S>) -> egui::Response {
    let layout = *grid.layout();
    let (width, height) = layout.content_size(grid.cells().len());
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

    let summary = grid.summary();
    response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Other, true, &summary));

    draw_card_container(ui, rect);
    // Snapshots are painted over whatever the card is filled with right now
    grid.set_background(ui.visuals().window_fill);

    // Hit test in grid-local coordinates
    let hovered = if grid.chrome_visible() && ui.rect_contains_pointer(rect) {
        ui.ctx().pointer_hover_pos().and_then(|pos| {
            let local = pos - rect.min;
            layout.index_at(local.x, local.y, grid.cells().len())
        })
    } else {
        None
    };
    grid.set_hovered(hovered);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let frame = grid.frame();
        let clip = ui.clip_rect();

        for (index, cell) in frame.cells.iter().enumerate() {
            let (x, y) = layout.cell_origin(index);
            let cell_rect = egui::Rect::from_min_size(
                rect.min + egui::vec2(x, y),
                egui::vec2(layout.cell_size, layout.cell_size),
            );
            if !clip.intersects(cell_rect) {
                continue;
            }

            let appearance = match frame.highlighted {
                Some(highlighted) if highlighted == index => highlight_appearance(&frame.palette),
                _ => cell_appearance(cell, frame.displayed_lived, &frame.palette),
            };
            paint_cell(&painter, cell_rect, layout.cell_rounding, appearance);

            let cell_response = ui.interact(cell_rect, response.id.with(index), egui::Sense::hover());
            cell_response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Other, true, cell_description(cell)));
            if frame.highlighted == Some(index) {
                if let Some(description) = grid.hovered_description() {
                    cell_response.on_hover_text(description);
                }
            }
        }
    }

    response
}

/// Grid summary caption shown under the card
pub fn draw_grid_summary<S: FrameScheduler>(ui: &mut egui::Ui, grid: &GridViewState<S>) {
    ui.add(
        egui::Label::new(egui::RichText::new(grid.summary()).small().color(colors::TEXT_SECONDARY))
            .selectable(false),
    );
}

fn paint_cell(painter: &egui::Painter, rect: egui::Rect, rounding: f32, appearance: CellAppearance) {
    let rounding = egui::Rounding::same(rounding);
    if appearance.fill != egui::Color32::TRANSPARENT {
        painter.rect_filled(rect, rounding, appearance.fill);
    }
    if let Some(border) = appearance.border {
        painter.rect_stroke(rect.shrink(0.5), rounding, egui::Stroke::new(1.0, border));
    }
}
