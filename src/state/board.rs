//! Pixel geometry of the board: where the grid lines sit and which cell a click lands in.

use crate::error::GameError;
use crate::model::Cell;

pub const MIN_DIMENSION: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    pub width: f64,
    pub height: f64,
    pub grid_size: usize,
}

impl BoardGeometry {
    pub fn new(width: f64, height: f64, grid_size: usize) -> Self {
        Self {
            width,
            height,
            grid_size,
        }
    }

    /// Number of grid lines along each axis, borders included.
    pub fn grid_lines(&self) -> usize {
        self.grid_size + 1
    }

    pub fn column_width(&self) -> f64 {
        self.width / self.grid_size as f64
    }

    pub fn row_height(&self) -> f64 {
        self.height / self.grid_size as f64
    }

    /// Maps canvas-relative pixel coordinates to the cell containing them.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Cell> {
        let column = bucket(x, self.column_width(), self.grid_size)?;
        let row = bucket(y, self.row_height(), self.grid_size)?;
        Some(Cell::new(row, column))
    }

    pub fn cell_bounds(&self, cell: Cell) -> CellBounds {
        let cw = self.column_width();
        let rh = self.row_height();
        CellBounds {
            top: rh * (cell.row - 1) as f64,
            bottom: rh * cell.row as f64,
            left: cw * (cell.column - 1) as f64,
            right: cw * cell.column as f64,
        }
    }

    /// Applies new canvas dimensions. `None` or zero leaves an axis alone;
    /// width is applied first so a bad width never touches the height.
    pub fn set_dimensions(
        &mut self,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<(), GameError> {
        if let Some(w) = width.filter(|w| *w != 0.0) {
            self.width = checked_dimension("width", w)?;
        }
        if let Some(h) = height.filter(|h| *h != 0.0) {
            self.height = checked_dimension("height", h)?;
        }
        Ok(())
    }

    pub fn set_grid_size(&mut self, grid_size: usize) {
        self.grid_size = grid_size;
    }

    /// Endpoints of the two strokes of an X, inset by a tenth of the cell.
    pub fn x_strokes(&self, cell: Cell) -> [(f64, f64, f64, f64); 2] {
        let b = self.cell_bounds(cell);
        let px = self.column_width() / 10.0;
        let py = self.row_height() / 10.0;
        [
            (b.left + px, b.top + py, b.right - px, b.bottom - py),
            (b.right - px, b.top + py, b.left + px, b.bottom - py),
        ]
    }

    /// Centre and radius of an O, leaving a fifth of the cell as padding.
    pub fn o_circle(&self, cell: Cell) -> (f64, f64, f64) {
        let b = self.cell_bounds(cell);
        let cw = self.column_width();
        let rh = self.row_height();
        let cx = b.right - cw / 2.0;
        let cy = b.bottom - rh / 2.0;
        let horizontal = (cw - cw / 5.0) / 2.0;
        let vertical = (rh - rh / 5.0) / 2.0;
        (cx, cy, horizontal.min(vertical))
    }
}

fn bucket(pos: f64, step: f64, count: usize) -> Option<usize> {
    if pos < 0.0 || !pos.is_finite() {
        return None;
    }
    (1..=count).find(|&i| pos < step * i as f64)
}

fn checked_dimension(axis: &'static str, value: f64) -> Result<f64, GameError> {
    if value < MIN_DIMENSION {
        return Err(GameError::DimensionTooSmall {
            axis,
            requested: value,
            min: MIN_DIMENSION,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_pixels_to_cells() {
        let g = BoardGeometry::new(300.0, 300.0, 3);
        assert_eq!(g.cell_at(0.0, 0.0), Some(Cell::new(1, 1)));
        assert_eq!(g.cell_at(150.0, 10.0), Some(Cell::new(1, 2)));
        assert_eq!(g.cell_at(10.0, 250.0), Some(Cell::new(3, 1)));
        assert_eq!(g.cell_at(299.9, 299.9), Some(Cell::new(3, 3)));
    }

    #[test]
    fn boundaries_belong_to_the_next_cell() {
        let g = BoardGeometry::new(300.0, 300.0, 3);
        assert_eq!(g.cell_at(100.0, 200.0), Some(Cell::new(3, 2)));
    }

    #[test]
    fn outside_the_grid_maps_to_none() {
        let g = BoardGeometry::new(300.0, 300.0, 3);
        assert_eq!(g.cell_at(-1.0, 10.0), None);
        assert_eq!(g.cell_at(10.0, 300.0), None);
        assert_eq!(g.cell_at(f64::NAN, 10.0), None);
    }

    #[test]
    fn non_square_canvas() {
        let g = BoardGeometry::new(400.0, 200.0, 4);
        assert_eq!(g.column_width(), 100.0);
        assert_eq!(g.row_height(), 50.0);
        assert_eq!(g.cell_at(350.0, 60.0), Some(Cell::new(2, 4)));
        assert_eq!(
            g.cell_bounds(Cell::new(2, 4)),
            CellBounds {
                top: 50.0,
                bottom: 100.0,
                left: 300.0,
                right: 400.0
            }
        );
    }

    #[test]
    fn dimensions_skip_missing_and_zero() {
        let mut g = BoardGeometry::new(350.0, 350.0, 3);
        g.set_dimensions(None, Some(0.0)).unwrap();
        assert_eq!((g.width, g.height), (350.0, 350.0));
        g.set_dimensions(Some(500.0), None).unwrap();
        assert_eq!((g.width, g.height), (500.0, 350.0));
    }

    #[test]
    fn small_width_fails_before_height_is_applied() {
        let mut g = BoardGeometry::new(350.0, 350.0, 3);
        let err = g.set_dimensions(Some(20.0), Some(400.0)).unwrap_err();
        assert!(matches!(err, GameError::DimensionTooSmall { axis: "width", .. }));
        assert_eq!((g.width, g.height), (350.0, 350.0));

        let err = g.set_dimensions(Some(400.0), Some(49.0)).unwrap_err();
        assert!(matches!(err, GameError::DimensionTooSmall { axis: "height", .. }));
        assert_eq!((g.width, g.height), (400.0, 350.0));
    }

    #[test]
    fn glyph_geometry_uses_fixed_padding() {
        let g = BoardGeometry::new(300.0, 300.0, 3);
        let [a, b] = g.x_strokes(Cell::new(1, 1));
        assert_eq!(a, (10.0, 10.0, 90.0, 90.0));
        assert_eq!(b, (90.0, 10.0, 10.0, 90.0));
        assert_eq!(g.o_circle(Cell::new(2, 2)), (150.0, 150.0, 40.0));

        let wide = BoardGeometry::new(600.0, 300.0, 3);
        assert_eq!(wide.o_circle(Cell::new(1, 1)).2, 40.0);
    }
}
