//! Visual appearance of week cells.
//!
//! Resolves how a cell is painted from its flags, the animated lived
//! boundary and the palette. Shared by the egui renderer and the snapshot
//! rasterizer so both paint identical cells.

use egui::Color32;
use shared::WeekCell;

/// Colors used to paint the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPalette {
    /// Fill of a lived week
    pub lived: Color32,
    /// Outline of a week still to come
    pub remaining_border: Color32,
    /// Fill of a lived week past the expected lifespan
    pub overrun_lived: Color32,
    /// Outline of a not-yet-revealed week past the expected lifespan
    pub overrun_border: Color32,
    /// Fill of a week carrying a milestone
    pub milestone: Color32,
    /// Hover highlight (interactive chrome, never part of a snapshot)
    pub highlight: Color32,
}

impl GridPalette {
    /// Light palette used on screen and in snapshots
    pub const LIGHT: GridPalette = GridPalette {
        lived: Color32::from_rgb(126, 87, 194),
        remaining_border: Color32::from_rgba_premultiplied(25, 17, 39, 51),
        overrun_lived: Color32::from_rgb(245, 158, 11),
        overrun_border: Color32::from_rgba_premultiplied(98, 63, 4, 102),
        milestone: Color32::from_rgb(232, 150, 199),
        highlight: Color32::from_rgb(135, 206, 235),
    };
}

/// How a single cell is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAppearance {
    pub fill: Color32,
    /// Outline drawn one logical pixel wide inside the cell
    pub border: Option<Color32>,
}

impl CellAppearance {
    fn filled(fill: Color32) -> Self {
        Self { fill, border: None }
    }

    fn outlined(border: Color32) -> Self {
        Self {
            fill: Color32::TRANSPARENT,
            border: Some(border),
        }
    }
}

/// Resolve the appearance of `cell`.
///
/// `displayed_lived` is the animated boundary: cells before it are drawn as
/// lived even while the true value is still being approached. Milestones
/// override the lived/remaining styling.
pub fn cell_appearance(cell: &WeekCell, displayed_lived: u32, palette: &GridPalette) -> CellAppearance {
    if cell.has_milestone() {
        return CellAppearance::filled(palette.milestone);
    }

    let shown_as_lived = (cell.index() as u64) < displayed_lived as u64;
    match (shown_as_lived, cell.is_beyond_lifespan) {
        (true, false) => CellAppearance::filled(palette.lived),
        (true, true) => CellAppearance::filled(palette.overrun_lived),
        (false, false) => CellAppearance::outlined(palette.remaining_border),
        (false, true) => CellAppearance::outlined(palette.overrun_border),
    }
}

/// Appearance of the hovered cell while chrome is visible
pub fn highlight_appearance(palette: &GridPalette) -> CellAppearance {
    CellAppearance::filled(palette.highlight)
}
