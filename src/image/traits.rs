use crate::types::Coordinate;

/// Row-major 2D storage whose rows may differ in length.
///
/// Every bounds check in the pipeline goes through this trait so that a
/// ragged row only ever bounds accesses into itself.
pub trait RowBounds {
    fn num_rows(&self) -> usize;

    fn row_len(&self, row: usize) -> usize;

    #[inline]
    fn contains(&self, c: Coordinate) -> bool {
        if c.row < 0 || c.row as usize >= self.num_rows() {
            return false;
        }
        c.in_bounds(self.num_rows(), self.row_len(c.row as usize))
    }

    fn is_empty(&self) -> bool {
        (0..self.num_rows()).all(|r| self.row_len(r) == 0)
    }
}
