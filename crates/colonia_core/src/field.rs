//! Square harshness field that colonies grow on.
//!
//! The field covers the simulated extent `[-N/2, N/2)` on both axes, where
//! `N` is the logical side length, and splits it into `D x D` cells. Cells are
//! stored row-major with the row selected by `y`.

use crate::error::{Result, SimError};
use colonia_data::Vec2;

/// Logical side length of the simulated coordinate space.
pub const DEFAULT_SIDE_LENGTH: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthField {
    cells: Vec<f64>,
    size: usize,
    side_length: f64,
}

impl GrowthField {
    /// Builds a field over the default extent.
    pub fn new(matrix: Vec<Vec<f64>>) -> Result<Self> {
        Self::with_side_length(matrix, DEFAULT_SIDE_LENGTH)
    }

    pub fn with_side_length(matrix: Vec<Vec<f64>>, side_length: f64) -> Result<Self> {
        if !side_length.is_finite() || side_length <= 0.0 {
            return Err(SimError::invalid_config(format!(
                "field side length must be positive, got {side_length}"
            )));
        }

        let size = matrix.len();
        if size == 0 {
            return Err(SimError::invalid_shape("growth field has no rows"));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in matrix.into_iter().enumerate() {
            if row.len() != size {
                return Err(SimError::invalid_shape(format!(
                    "growth field must be square: {size} rows but row {y} has {} columns",
                    row.len()
                )));
            }
            for (x, value) in row.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(SimError::invalid_shape(format!(
                        "cell ({x}, {y}) holds {value}, expected a finite non-negative value"
                    )));
                }
                cells.push(value);
            }
        }

        Ok(Self {
            cells,
            size,
            side_length,
        })
    }

    /// A `size x size` field where every cell holds `value`.
    pub fn uniform(size: usize, value: f64, side_length: f64) -> Result<Self> {
        Self::with_side_length(vec![vec![value; size]; size], side_length)
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Grid cell `(x, y)` covering `position`.
    pub fn cell_of(&self, position: Vec2) -> Result<(usize, usize)> {
        let out_of_bounds = || SimError::OutOfBounds {
            x: position.x,
            y: position.y,
            size: self.size,
        };
        let ix = self.axis_index(position.x).ok_or_else(out_of_bounds)?;
        let iy = self.axis_index(position.y).ok_or_else(out_of_bounds)?;
        Ok((ix, iy))
    }

    fn axis_index(&self, coord: f64) -> Option<usize> {
        let scaled = (coord / self.side_length + 0.5) * self.size as f64;
        if scaled.is_nan() || scaled < 0.0 || scaled >= self.size as f64 {
            return None;
        }
        Some(scaled.floor() as usize)
    }

    /// Harshness at `position`. Fails instead of clamping when the position
    /// lies outside the field.
    pub fn intensity_at(&self, position: Vec2) -> Result<f64> {
        let (ix, iy) = self.cell_of(position)?;
        Ok(self.cells[self.index(ix, iy)])
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.size && y < self.size {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Number of cells along one side.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Value of the cell covering the origin.
    pub fn center(&self) -> f64 {
        let c = self.size / 2;
        self.cells[self.index(c, c)]
    }

    pub fn cells(&self) -> &[f64] {
        &self.cells
    }
}
