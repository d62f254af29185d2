//! Sobel gradient field with per-cell compass direction.
//!
//! - Convolves the 3×3 Sobel pair with zero padding and no renormalization.
//! - Stores `x`, `y`, the derived direction, and two annotation slots that
//!   later stages fill in: `is_local_max` (suppression) and `cluster_id`
//!   (clustering). `x`, `y` and `dir` never change after construction.
//!
//! Complexity: O(rows·cols) per pass.
use crate::angle::{quantize_direction, Direction};
use crate::bands::map_row_bands;
use crate::convolve::convolve_at;
use crate::error::Result;
use crate::image::{Grid, RowBounds};
use crate::kernel::Kernel;
use crate::types::Coordinate;

/// Per-pixel gradient record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientCell {
    /// Horizontal derivative, positive towards increasing column
    pub x: f64,
    /// Vertical derivative, positive towards the top row
    pub y: f64,
    /// Quantized direction of `(x, y)`; `None` for the zero vector
    pub dir: Option<Direction>,
    /// Set by non-maximum suppression
    pub is_local_max: bool,
    /// Set by clustering; 0 means unassigned
    pub cluster_id: u32,
}

impl GradientCell {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            dir: quantize_direction(x, y),
            is_local_max: false,
            cluster_id: 0,
        }
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// 2D array of [`GradientCell`] matching the dimensions of its source grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradientField {
    rows: Vec<Vec<GradientCell>>,
}

impl GradientField {
    pub fn from_rows(rows: Vec<Vec<GradientCell>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[GradientCell] {
        &self.rows[row]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [GradientCell] {
        &mut self.rows[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GradientCell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &GradientCell {
        &self.rows[row][col]
    }

    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut GradientCell {
        &mut self.rows[row][col]
    }

    pub fn get(&self, c: Coordinate) -> Option<&GradientCell> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        self.rows.get(c.row as usize)?.get(c.col as usize)
    }

    /// Coordinates of every cell flagged as a local maximum, row-major.
    pub fn local_maxima(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_local_max)
                .map(move |(c, _)| Coordinate::from((r, c)))
        })
    }
}

impl RowBounds for GradientField {
    #[inline]
    fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn row_len(&self, row: usize) -> usize {
        self.rows[row].len()
    }
}

struct SobelPair {
    gx: Kernel,
    gy: Kernel,
}

impl SobelPair {
    fn new() -> Self {
        Self {
            gx: Kernel::sobel_x(),
            gy: Kernel::sobel_y(),
        }
    }

    #[inline]
    fn at(&self, grid: &Grid, row: usize, col: usize) -> GradientCell {
        GradientCell::new(
            convolve_at(grid, row, col, &self.gx),
            convolve_at(grid, row, col, &self.gy),
        )
    }

    fn row(&self, grid: &Grid, row: usize) -> Vec<GradientCell> {
        (0..grid.row(row).len())
            .map(|col| self.at(grid, row, col))
            .collect()
    }
}

/// Sobel gradient at a single pixel.
pub fn compute_gradient(grid: &Grid, row: usize, col: usize) -> GradientCell {
    SobelPair::new().at(grid, row, col)
}

/// Compute the gradient field of `grid` on the calling thread.
pub fn gradient_field(grid: &Grid) -> GradientField {
    let sobel = SobelPair::new();
    let rows = (0..grid.height()).map(|r| sobel.row(grid, r)).collect();
    GradientField::from_rows(rows)
}

/// Compute the gradient field with `bands` row bands in parallel.
pub fn parallel_gradient_field(grid: &Grid, bands: usize) -> Result<GradientField> {
    let sobel = SobelPair::new();
    let rows = map_row_bands(grid.height(), bands, |r| sobel.row(grid, r))?;
    Ok(GradientField::from_rows(rows))
}
