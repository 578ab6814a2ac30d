//! Cell geometry for the life calendar grid.
//!
//! Both the on-screen renderer and the snapshot rasterizer place cells with
//! this layout, so a snapshot lines up with what the user sees. All values
//! are logical pixels relative to the top-left corner of the grid region.

use shared::AspectRatio;

/// Geometry of the week grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Cells per row
    pub columns: u32,
    /// Edge length of one square cell
    pub cell_size: f32,
    /// Space between neighbouring cells
    pub gap: f32,
    /// Margin around the whole grid
    pub padding: f32,
    /// Corner radius of a cell
    pub cell_rounding: f32,
}

impl GridLayout {
    pub const CELL_SIZE: f32 = 12.0;
    pub const GAP: f32 = 6.0;
    pub const PADDING: f32 = 16.0;
    pub const CELL_ROUNDING: f32 = 2.0;

    pub fn for_aspect_ratio(aspect_ratio: AspectRatio) -> Self {
        Self {
            columns: aspect_ratio.columns(),
            cell_size: Self::CELL_SIZE,
            gap: Self::GAP,
            padding: Self::PADDING,
            cell_rounding: Self::CELL_ROUNDING,
        }
    }

    /// Distance from one cell's origin to the next
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.gap
    }

    pub fn rows(&self, cell_count: usize) -> usize {
        cell_count.div_ceil(self.columns.max(1) as usize)
    }

    /// Columns actually used; a grid shorter than one row is only as wide
    /// as its cells
    pub fn used_columns(&self, cell_count: usize) -> usize {
        cell_count.min(self.columns.max(1) as usize)
    }

    /// Full region size including padding
    pub fn content_size(&self, cell_count: usize) -> (f32, f32) {
        let width = self.span(self.used_columns(cell_count)) + self.padding * 2.0;
        let height = self.span(self.rows(cell_count)) + self.padding * 2.0;
        (width, height)
    }

    /// Top-left corner of the cell at `index`
    pub fn cell_origin(&self, index: usize) -> (f32, f32) {
        let columns = self.columns.max(1) as usize;
        let column = index % columns;
        let row = index / columns;
        (
            self.padding + column as f32 * self.pitch(),
            self.padding + row as f32 * self.pitch(),
        )
    }

    /// Cell under a point, if any. Points in the gaps or padding hit nothing.
    pub fn index_at(&self, x: f32, y: f32, cell_count: usize) -> Option<usize> {
        let local_x = x - self.padding;
        let local_y = y - self.padding;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let column = (local_x / self.pitch()).floor() as usize;
        let row = (local_y / self.pitch()).floor() as usize;
        if column >= self.columns as usize {
            return None;
        }

        let within_x = local_x - column as f32 * self.pitch();
        let within_y = local_y - row as f32 * self.pitch();
        if within_x >= self.cell_size || within_y >= self.cell_size {
            return None;
        }

        let index = row * self.columns as usize + column;
        (index < cell_count).then_some(index)
    }

    fn span(&self, count: usize) -> f32 {
        if count == 0 {
            0.0
        } else {
            count as f32 * self.cell_size + (count - 1) as f32 * self.gap
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::for_aspect_ratio(AspectRatio::default())
    }
}
