//! Zero-padded 2D convolution at a single grid position.
//!
//! Taps that fall outside the grid contribute nothing and no renormalization
//! happens at the border: a pre-normalized kernel darkens edges in proportion
//! to its missing mass, and derivative kernels keep comparable magnitudes
//! everywhere.
use crate::image::{Grid, RowBounds};
use crate::kernel::Kernel;

/// Correlate `kernel` with `grid` centred on `(row, col)`.
///
/// Tap `(i, j)` reads `grid[row + i - offset][col + j - offset]`; each source
/// row bounds its own columns.
pub fn convolve_at(grid: &Grid, row: usize, col: usize, kernel: &Kernel) -> f64 {
    let size = kernel.size();
    let offset = kernel.offset() as isize;
    let rows = grid.num_rows() as isize;

    let mut sum = 0.0;
    for i in 0..size {
        let src_row = row as isize + i as isize - offset;
        if src_row < 0 || src_row >= rows {
            continue;
        }
        let src = grid.row(src_row as usize);
        for j in 0..size {
            let src_col = col as isize + j as isize - offset;
            if src_col < 0 || src_col as usize >= src.len() {
                continue;
            }
            sum += kernel.weight(i, j) * src[src_col as usize];
        }
    }
    sum
}
