//! Maps between the pixel space of a drawing surface & the positions of a grid.

use crate::{GridDimensions, GridPosition};

/// The default edge length of a cell, in pixels.
pub const DEFAULT_CELL_SIZE: f32 = 50.0;

/// The most cells a layout will place. Surfaces that would fit more produce a layout with no cells.
pub const MAX_CELL_COUNT: usize = 1 << 20;

/// An axis aligned rectangle in the pixel space of a drawing surface.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    /// Creates a new [`PixelRect`] with its top left corner at the given x & y.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Gets the centre point of the rectangle.
    pub fn centre(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// How a grid of square cells is placed onto a drawing surface.
///
/// As many whole cells as fit are placed, with the left over space split evenly on either side so the grid is
/// centred. Each margin is therefore always less than one cell.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct BoardLayout {
    cell_size: f32,
    dimensions: GridDimensions,
    margin_x: f32,
    margin_y: f32,
}

impl BoardLayout {
    /// Fits a grid of cells with the given edge length onto a surface of the given size.
    ///
    /// Sizes that are zero, negative or not finite produce a layout with no cells, as do sizes that would fit more than
    /// [`MAX_CELL_COUNT`] cells.
    ///
    /// ```
    /// # use gol_engine::BoardLayout;
    /// let layout = BoardLayout::new(520.0, 330.0, 50.0);
    ///
    /// assert_eq!(layout.dimensions().rows(), 6);
    /// assert_eq!(layout.dimensions().columns(), 10);
    /// assert_eq!(layout.margin_x(), 10.0);
    /// assert_eq!(layout.margin_y(), 15.0);
    /// ```
    pub fn new(surface_width: f32, surface_height: f32, cell_size: f32) -> Self {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Self::default();
        }

        let (columns, margin_x) = fit_cells(surface_width, cell_size);
        let (rows, margin_y) = fit_cells(surface_height, cell_size);

        let fits = rows
            .checked_mul(columns)
            .is_some_and(|count| count <= MAX_CELL_COUNT);
        if !fits {
            return Self::default();
        }

        Self {
            cell_size,
            dimensions: GridDimensions::new(rows, columns),
            margin_x,
            margin_y,
        }
    }

    /// Gets the edge length of each cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Gets the amount of rows & columns that fit on the surface.
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Gets the space left of the grid, which is the same as the space right of it.
    pub fn margin_x(&self) -> f32 {
        self.margin_x
    }

    /// Gets the space above the grid, which is the same as the space below it.
    pub fn margin_y(&self) -> f32 {
        self.margin_y
    }

    /// The area of the surface covered by cells.
    pub fn grid_rect(&self) -> PixelRect {
        PixelRect::new(
            self.margin_x,
            self.margin_y,
            self.dimensions.columns() as f32 * self.cell_size,
            self.dimensions.rows() as f32 * self.cell_size,
        )
    }

    /// The area of the surface covered by the cell at the given position.
    pub fn cell_rect(&self, position: GridPosition) -> PixelRect {
        PixelRect::new(
            self.margin_x + position.column() as f32 * self.cell_size,
            self.margin_y + position.row() as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Converts a point on the surface into the position of the cell under it.
    ///
    /// Returns [`None`] if the point is outside `[margin, margin + cells * cell_size)` on either axis.
    pub fn locate(&self, x: f32, y: f32) -> Option<GridPosition> {
        let column = locate_axis(x, self.margin_x, self.cell_size, self.dimensions.columns())?;
        let row = locate_axis(y, self.margin_y, self.cell_size, self.dimensions.rows())?;

        Some(GridPosition::new(row, column))
    }
}

/// Gets how many whole cells fit along a surface edge & the margin either side of them.
fn fit_cells(surface_length: f32, cell_size: f32) -> (usize, f32) {
    if !(surface_length.is_finite() && surface_length > 0.0) {
        return (0, 0.0);
    }

    let cells = (surface_length / cell_size).floor();
    let margin = (surface_length - cells * cell_size) / 2.0;

    (cells as usize, margin)
}

/// Converts a coordinate along one axis into a cell index along that axis.
fn locate_axis(coordinate: f32, margin: f32, cell_size: f32, cells: usize) -> Option<usize> {
    let grid_length = cells as f32 * cell_size;
    let offset = coordinate - margin;

    // Also rejects NaN.
    if !(offset >= 0.0 && offset < grid_length) {
        return None;
    }

    // Floating point rounding can land exactly on the far edge.
    let index = (offset / cell_size).floor() as usize;
    (index < cells).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// The margins centre the grid & are always smaller than a cell.
    fn margins_centre_grid() {
        for (width, height) in [(520.0, 330.0), (50.0, 50.0), (99.0, 149.5), (1920.0, 1080.0)] {
            let layout = BoardLayout::new(width, height, DEFAULT_CELL_SIZE);
            let grid = layout.grid_rect();

            assert!((0.0..DEFAULT_CELL_SIZE).contains(&layout.margin_x()));
            assert!((0.0..DEFAULT_CELL_SIZE).contains(&layout.margin_y()));
            assert_eq!(grid.x * 2.0 + grid.width, width);
            assert_eq!(grid.y * 2.0 + grid.height, height);
        }
    }

    #[test]
    /// The centre of every cell locates that same cell.
    fn locate_round_trips() {
        let layout = BoardLayout::new(530.0, 345.0, DEFAULT_CELL_SIZE);

        for position in layout.dimensions().positions() {
            let (x, y) = layout.cell_rect(position).centre();
            assert_eq!(layout.locate(x, y), Some(position));
        }
    }

    #[test]
    /// The top left corner of a cell belongs to it, its bottom right edge belongs to the next cell.
    fn locate_edges() {
        let layout = BoardLayout::new(200.0, 200.0, 50.0);

        assert_eq!(layout.locate(0.0, 0.0), Some((0, 0).into()));
        assert_eq!(layout.locate(50.0, 49.9), Some((0, 1).into()));
        assert_eq!(layout.locate(199.9, 199.9), Some((3, 3).into()));
    }

    #[test]
    /// Points in the margins or past the grid have no cell.
    fn locate_outside_grid() {
        // 10 px margin on the x axis, 20 px on the y axis.
        let layout = BoardLayout::new(120.0, 140.0, 50.0);

        assert_eq!(layout.locate(9.9, 60.0), None);
        assert_eq!(layout.locate(110.0, 60.0), None);
        assert_eq!(layout.locate(60.0, 19.9), None);
        assert_eq!(layout.locate(60.0, 120.0), None);
        assert_eq!(layout.locate(-1.0, -1.0), None);
        assert_eq!(layout.locate(f32::NAN, 60.0), None);
        assert_eq!(layout.locate(10.0, 20.0), Some((0, 0).into()));
        assert_eq!(layout.locate(109.9, 119.9), Some((1, 1).into()));
    }

    #[test]
    /// The top margin is checked against the y margin, not the x margin.
    fn locate_uses_y_margin() {
        // No x margin, 20 px y margin.
        let layout = BoardLayout::new(100.0, 140.0, 50.0);
        assert_eq!(layout.margin_x(), 0.0);
        assert_eq!(layout.margin_y(), 20.0);

        assert_eq!(layout.locate(10.0, 5.0), None);
        assert_eq!(layout.locate(10.0, 19.9), None);
        assert_eq!(layout.locate(10.0, 20.0), Some((0, 0).into()));

        // The reverse, 20 px x margin & no y margin.
        let layout = BoardLayout::new(140.0, 100.0, 50.0);
        assert_eq!(layout.locate(5.0, 10.0), None);
        assert_eq!(layout.locate(20.0, 0.0), Some((0, 0).into()));
    }

    #[test]
    /// The largest allowed grid is still placed.
    fn max_cell_count() {
        let layout = BoardLayout::new(1024.0, 1024.0, 1.0);
        assert_eq!(layout.dimensions().cell_count(), MAX_CELL_COUNT);

        let layout = BoardLayout::new(1025.0, 1024.0, 1.0);
        assert!(layout.dimensions().is_empty());
    }

    #[test]
    /// Invalid sizes produce an empty layout instead of failing.
    fn invalid_sizes() {
        for (width, height, size) in [
            (0.0, 100.0, 50.0),
            (100.0, -5.0, 50.0),
            (100.0, 100.0, 0.0),
            (100.0, 100.0, -50.0),
            (f32::INFINITY, 100.0, 50.0),
            (100.0, 100.0, f32::NAN),
            (40.0, 40.0, 50.0),
            (500.0, 500.0, 1e-6),
            (1e30, 1e30, 1.0),
            (f32::MAX, 100.0, f32::MIN_POSITIVE),
        ] {
            let layout = BoardLayout::new(width, height, size);
            assert!(layout.dimensions().is_empty(), "{width} x {height} @ {size}");
            assert_eq!(layout.dimensions().cell_count(), 0);
            assert_eq!(layout.locate(10.0, 10.0), None);
        }
    }
}
