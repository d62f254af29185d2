use serde::{Deserialize, Serialize};

/// Integer grid position, `row` counted downwards from the top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: isize,
    pub col: isize,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// `0 <= row < max_row && 0 <= col < max_col`.
    #[inline]
    pub fn in_bounds(&self, max_row: usize, max_col: usize) -> bool {
        self.row >= 0
            && (self.row as usize) < max_row
            && self.col >= 0
            && (self.col as usize) < max_col
    }

    #[inline]
    pub fn offset(&self, d_row: isize, d_col: isize) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as isize, col as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_is_half_open() {
        let c = Coordinate::new(2, 3);
        assert!(c.in_bounds(3, 4));
        assert!(!c.in_bounds(2, 4));
        assert!(!c.in_bounds(3, 3));
        assert!(!Coordinate::new(-1, 0).in_bounds(3, 3));
        assert!(!Coordinate::new(0, -1).in_bounds(3, 3));
    }
}
