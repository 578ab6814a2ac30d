//! # Grid Rasterizer
//!
//! Paints the current visual state of the week grid into an RGBA buffer and
//! encodes it as PNG. Cells are placed with the same `GridLayout` and styled
//! with the same `cell_appearance` the on-screen renderer uses, scaled up for
//! high-density output.

use std::io::Cursor;

use egui::Color32;
use image::{ImageFormat, Rgba, RgbaImage};
use shared::WeekCell;

use crate::backend::domain::cell_style::{cell_appearance, highlight_appearance, CellAppearance, GridPalette};
use crate::backend::domain::grid_layout::GridLayout;
use crate::backend::domain::models::{SnapshotError, SnapshotFile, PNG_MIME_TYPE};

/// Pixel density of exported snapshots relative to logical pixels
pub const SNAPSHOT_SCALE: f32 = 2.0;

/// Largest edge, in pixels, a snapshot may have
pub const MAX_RASTER_DIMENSION: u32 = 16_384;

/// Everything needed to paint the grid as it currently looks
#[derive(Debug, Clone)]
pub struct GridFrame<'a> {
    pub cells: &'a [WeekCell],
    pub layout: GridLayout,
    /// Animated lived boundary (what the user currently sees)
    pub displayed_lived: u32,
    /// Hovered cell, painted only while chrome is visible
    pub highlighted: Option<usize>,
    pub palette: GridPalette,
}

/// Rasterize `frame` at `scale` over a solid `background`
pub fn rasterize(frame: &GridFrame<'_>, scale: f32, background: Color32) -> Result<RgbaImage, SnapshotError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(SnapshotError::Rasterization(format!("invalid scale factor {}", scale)));
    }
    if frame.cells.is_empty() {
        return Err(SnapshotError::Rasterization("the grid is empty".to_string()));
    }

    let (logical_width, logical_height) = frame.layout.content_size(frame.cells.len());
    let width = (logical_width * scale).ceil() as u64;
    let height = (logical_height * scale).ceil() as u64;
    if width > MAX_RASTER_DIMENSION as u64 || height > MAX_RASTER_DIMENSION as u64 {
        return Err(SnapshotError::Rasterization(format!(
            "{}x{} pixels exceeds the {} pixel limit",
            width, height, MAX_RASTER_DIMENSION
        )));
    }

    let mut image = RgbaImage::from_pixel(width as u32, height as u32, to_rgba(background));
    for (index, cell) in frame.cells.iter().enumerate() {
        let appearance = match frame.highlighted {
            Some(highlighted) if highlighted == index => highlight_appearance(&frame.palette),
            _ => cell_appearance(cell, frame.displayed_lived, &frame.palette),
        };
        paint_cell(&mut image, &frame.layout, index, scale, appearance);
    }

    log::debug!(
        "🖼️ RASTER: painted {} cells into {}x{} pixels",
        frame.cells.len(),
        width,
        height
    );
    Ok(image)
}

/// Encode a raster as a named PNG file
pub fn encode_png(image: &RgbaImage, file_name: &str) -> Result<SnapshotFile, SnapshotError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| SnapshotError::Encoding(e.to_string()))?;

    Ok(SnapshotFile {
        file_name: file_name.to_string(),
        mime_type: PNG_MIME_TYPE,
        bytes: buffer.into_inner(),
        width: image.width(),
        height: image.height(),
    })
}

/// Axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy)]
struct PixelRect {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl PixelRect {
    fn inset(&self, amount: f32) -> Self {
        Self {
            x0: self.x0 + amount,
            y0: self.y0 + amount,
            x1: self.x1 - amount,
            y1: self.y1 - amount,
        }
    }

    /// Point-in-rounded-rectangle test
    fn contains(&self, x: f32, y: f32, radius: f32) -> bool {
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return false;
        }
        let corner_x = x.max(self.x0 + radius).min(self.x1 - radius);
        let corner_y = y.max(self.y0 + radius).min(self.y1 - radius);
        let (dx, dy) = (x - corner_x, y - corner_y);
        dx * dx + dy * dy <= radius * radius
    }
}

fn paint_cell(image: &mut RgbaImage, layout: &GridLayout, index: usize, scale: f32, appearance: CellAppearance) {
    if appearance.fill.a() == 0 && appearance.border.is_none() {
        return;
    }

    let (origin_x, origin_y) = layout.cell_origin(index);
    let rect = PixelRect {
        x0: origin_x * scale,
        y0: origin_y * scale,
        x1: (origin_x + layout.cell_size) * scale,
        y1: (origin_y + layout.cell_size) * scale,
    };
    let radius = layout.cell_rounding * scale;
    let border_width = scale;
    let inner = rect.inset(border_width);
    let inner_radius = (radius - border_width).max(0.0);

    let x_end = (rect.x1.ceil() as u32).min(image.width());
    let y_end = (rect.y1.ceil() as u32).min(image.height());
    for py in rect.y0.floor() as u32..y_end {
        for px in rect.x0.floor() as u32..x_end {
            let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
            if !rect.contains(cx, cy, radius) {
                continue;
            }
            let color = match appearance.border {
                Some(border) if !inner.contains(cx, cy, inner_radius) => border,
                _ => appearance.fill,
            };
            if color.a() > 0 {
                blend_over(image.get_pixel_mut(px, py), color);
            }
        }
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Source-over compositing of `color` onto `pixel`
fn blend_over(pixel: &mut Rgba<u8>, color: Color32) {
    let [sr, sg, sb, sa] = color.to_srgba_unmultiplied();
    let src_alpha = sa as f32 / 255.0;
    let dst_alpha = pixel.0[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        *pixel = Rgba([0, 0, 0, 0]);
        return;
    }

    let mix = |src: u8, dst: u8| -> u8 {
        let value = (src as f32 * src_alpha + dst as f32 * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    *pixel = Rgba([
        mix(sr, pixel.0[0]),
        mix(sg, pixel.0[1]),
        mix(sb, pixel.0[2]),
        (out_alpha * 255.0).round() as u8,
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::week_grid;

    const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);

    fn frame(cells: &[WeekCell], displayed_lived: u32, highlighted: Option<usize>) -> GridFrame<'_> {
        GridFrame {
            cells,
            layout: GridLayout::default(),
            displayed_lived,
            highlighted,
            palette: GridPalette::LIGHT,
        }
    }

    /// Pixel at the centre of the cell at `index`, at snapshot scale
    fn cell_center(index: usize) -> (u32, u32) {
        let (x, y) = GridLayout::default().cell_origin(index);
        let half = GridLayout::CELL_SIZE / 2.0;
        (((x + half) * SNAPSHOT_SCALE) as u32, ((y + half) * SNAPSHOT_SCALE) as u32)
    }

    #[test]
    fn test_snapshot_is_double_density() {
        let cells = week_grid::compute(1, 2);
        let image = rasterize(&frame(&cells, 52, None), SNAPSHOT_SCALE, BACKGROUND).unwrap();

        let (width, height) = GridLayout::default().content_size(cells.len());
        assert_eq!(image.width(), (width * 2.0) as u32);
        assert_eq!(image.height(), (height * 2.0) as u32);
    }

    #[test]
    fn test_background_and_cell_colors() {
        let cells = week_grid::compute(1, 2);
        let palette = GridPalette::LIGHT;
        let image = rasterize(&frame(&cells, 52, None), SNAPSHOT_SCALE, BACKGROUND).unwrap();

        assert_eq!(*image.get_pixel(2, 2), to_rgba(BACKGROUND));

        let (x, y) = cell_center(0);
        assert_eq!(*image.get_pixel(x, y), to_rgba(palette.lived));

        // Remaining cells are outlines: centre shows the background...
        let (x, y) = cell_center(60);
        assert_eq!(*image.get_pixel(x, y), to_rgba(BACKGROUND));

        // ...and the left edge shows the tinted border
        let (origin_x, _) = GridLayout::default().cell_origin(60);
        let edge_x = (origin_x * SNAPSHOT_SCALE) as u32 + 1;
        assert_ne!(*image.get_pixel(edge_x, y), to_rgba(BACKGROUND));
    }

    #[test]
    fn test_animated_boundary_is_captured() {
        let cells = week_grid::compute(1, 2);
        let image = rasterize(&frame(&cells, 10, None), SNAPSHOT_SCALE, BACKGROUND).unwrap();

        let (x, y) = cell_center(20);
        assert_eq!(*image.get_pixel(x, y), to_rgba(BACKGROUND));
    }

    #[test]
    fn test_highlight_is_painted_when_present() {
        let cells = week_grid::compute(1, 2);
        let palette = GridPalette::LIGHT;
        let image = rasterize(&frame(&cells, 52, Some(3)), SNAPSHOT_SCALE, BACKGROUND).unwrap();

        let (x, y) = cell_center(3);
        assert_eq!(*image.get_pixel(x, y), to_rgba(palette.highlight));
    }

    #[test]
    fn test_empty_grid_fails() {
        let result = rasterize(&frame(&[], 0, None), SNAPSHOT_SCALE, BACKGROUND);
        assert!(matches!(result, Err(SnapshotError::Rasterization(_))));
    }

    #[test]
    fn test_oversized_grid_fails() {
        let cells = week_grid::compute(0, 1000);
        let result = rasterize(&frame(&cells, 0, None), SNAPSHOT_SCALE, BACKGROUND);
        assert!(matches!(result, Err(SnapshotError::Rasterization(_))));
    }

    #[test]
    fn test_invalid_scale_fails() {
        let cells = week_grid::compute(1, 1);
        assert!(rasterize(&frame(&cells, 0, None), 0.0, BACKGROUND).is_err());
        assert!(rasterize(&frame(&cells, 0, None), f32::NAN, BACKGROUND).is_err());
    }

    #[test]
    fn test_encode_png() {
        let image = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));
        let file = encode_png(&image, "life-in-weeks.png").unwrap();

        assert_eq!(file.file_name, "life-in-weeks.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!((file.width, file.height), (4, 3));
        assert_eq!(&file.bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_blend_over_opaque_and_translucent() {
        let mut pixel = Rgba([0, 0, 0, 255]);
        blend_over(&mut pixel, Color32::from_rgb(200, 100, 50));
        assert_eq!(pixel, Rgba([200, 100, 50, 255]));

        let mut pixel = Rgba([0, 0, 0, 255]);
        blend_over(&mut pixel, Color32::from_rgba_unmultiplied(255, 255, 255, 128));
        assert_eq!(pixel.0[3], 255);
        assert!(pixel.0[0] > 120 && pixel.0[0] < 135);
    }
}
