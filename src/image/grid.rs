//! Owned intensity grid in row-major layout, origin top-left.
//!
//! Rows are stored individually so ragged inputs survive untouched; callers
//! that need a rectangle use [`Grid::width`], the longest row.
use super::traits::RowBounds;
use crate::types::Coordinate;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<f64>>,
}

impl Grid {
    /// Zero-initialized `height × width` grid.
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, 0.0)
    }

    pub fn filled(height: usize, width: usize, value: f64) -> Self {
        Self {
            rows: vec![vec![value; width]; height],
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Value at `c`, or `None` outside the row it addresses.
    #[inline]
    pub fn get(&self, c: Coordinate) -> Option<f64> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        self.rows
            .get(c.row as usize)
            .and_then(|r| r.get(c.col as usize))
            .copied()
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f64) {
        self.rows[row][col] = v;
    }
}

impl RowBounds for Grid {
    #[inline]
    fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn row_len(&self, row: usize) -> usize {
        self.rows[row].len()
    }
}
