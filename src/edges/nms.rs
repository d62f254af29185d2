//! Directional non-maximum suppression on a [`GradientField`].
//!
//! Each cell is compared with its two neighbours one step forward and one step
//! backward along its quantized direction. It survives only if its magnitude
//! is strictly greater than both and strictly above `threshold`; equal
//! neighbours suppress each other, so plateaus produce no maxima.
//!
//! A cell whose forward or backward neighbour lies outside the grid is always
//! suppressed. A cell without direction compares against itself and is
//! therefore never a maximum.
//!
//! Only `is_local_max` is written. Magnitudes are read from cells whose `x`
//! and `y` never change, so flags are computed first and stored afterwards.
use super::grad::GradientField;
use crate::image::RowBounds;
use crate::types::Coordinate;

/// Flag local maxima of `field` in place.
pub fn non_max_suppress(field: &mut GradientField, threshold: f64) {
    let flags: Vec<Vec<bool>> = (0..field.height())
        .map(|r| {
            (0..field.row_len(r))
                .map(|c| is_local_max(field, r, c, threshold))
                .collect()
        })
        .collect();

    for (r, row_flags) in flags.into_iter().enumerate() {
        for (cell, flag) in field.row_mut(r).iter_mut().zip(row_flags) {
            cell.is_local_max = flag;
        }
    }
}

fn is_local_max(field: &GradientField, row: usize, col: usize, threshold: f64) -> bool {
    let here = Coordinate::from((row, col));
    let cell = field.cell(row, col);
    let (forward, backward) = match cell.dir {
        Some(dir) => {
            let (dr, dc) = dir.step();
            (here.offset(dr, dc), here.offset(-dr, -dc))
        }
        None => (here, here),
    };

    let (Some(fwd), Some(bwd)) = (field.get(forward), field.get(backward)) else {
        return false;
    };

    let mag = cell.magnitude();
    fwd.magnitude() < mag && bwd.magnitude() < mag && mag > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::grad::GradientCell;

    fn field_from(cells: &[&[(f64, f64)]]) -> GradientField {
        GradientField::from_rows(
            cells
                .iter()
                .map(|row| row.iter().map(|&(x, y)| GradientCell::new(x, y)).collect())
                .collect(),
        )
    }

    #[test]
    fn isolated_peak_above_threshold_is_kept() {
        let mut field = field_from(&[
            &[(1.0, 0.0), (1.0, 0.0), (1.0, 0.0)],
            &[(1.0, 0.0), (5.0, 0.0), (1.0, 0.0)],
            &[(1.0, 0.0), (1.0, 0.0), (1.0, 0.0)],
        ]);
        non_max_suppress(&mut field, 2.0);
        let maxima: Vec<_> = field.local_maxima().collect();
        assert_eq!(maxima, vec![Coordinate::new(1, 1)]);
    }

    #[test]
    fn threshold_is_strict() {
        let mut field = field_from(&[&[(1.0, 0.0), (5.0, 0.0), (1.0, 0.0)]]);
        non_max_suppress(&mut field, 5.0);
        assert!(!field.cell(0, 1).is_local_max);
        non_max_suppress(&mut field, 4.9);
        assert!(field.cell(0, 1).is_local_max);
    }

    #[test]
    fn plateaus_are_suppressed() {
        let mut field = field_from(&[&[(1.0, 0.0), (5.0, 0.0), (5.0, 0.0), (1.0, 0.0)]]);
        non_max_suppress(&mut field, 0.0);
        assert_eq!(field.local_maxima().count(), 0);
    }

    #[test]
    fn out_of_bounds_neighbour_forces_false() {
        // Pointing EAST from the last column.
        let mut field = field_from(&[&[(1.0, 0.0), (9.0, 0.0)]]);
        field.cell_mut(0, 1).is_local_max = true;
        non_max_suppress(&mut field, 0.0);
        assert!(!field.cell(0, 1).is_local_max);
    }

    #[test]
    fn direction_selects_compared_neighbours() {
        // NORTH-pointing centre only competes with the cells above and below.
        let mut field = field_from(&[
            &[(0.0, 0.0), (0.0, 1.0), (0.0, 0.0)],
            &[(0.0, 99.0), (0.0, 5.0), (0.0, 99.0)],
            &[(0.0, 0.0), (0.0, 1.0), (0.0, 0.0)],
        ]);
        non_max_suppress(&mut field, 0.0);
        assert!(field.cell(1, 1).is_local_max);
    }

    #[test]
    fn undirected_cells_are_never_maxima() {
        let mut field = field_from(&[
            &[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)],
            &[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)],
            &[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)],
        ]);
        non_max_suppress(&mut field, -1.0);
        assert_eq!(field.local_maxima().count(), 0);
    }

    #[test]
    fn ragged_neighbour_row_counts_as_out_of_bounds() {
        // Centre points SOUTH, but the row below is too short.
        let mut field = GradientField::from_rows(vec![
            vec![GradientCell::new(0.0, 0.0), GradientCell::new(0.0, -1.0)],
            vec![GradientCell::new(0.0, 0.0), GradientCell::new(0.0, -9.0)],
            vec![GradientCell::new(0.0, 0.0)],
        ]);
        non_max_suppress(&mut field, 0.0);
        assert!(!field.cell(1, 1).is_local_max);
    }
}
