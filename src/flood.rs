//! Tolerance flood fill from the top-left corner.
//!
//! Used to dissolve the exterior wall of an occupancy map: every pixel reached
//! from `(0, 0)` is overwritten with [`FLOOD_FILL_VALUE`].
//!
//! The fill is a breadth-first search over a square window. When a queued
//! pixel's original value lies within `src·(1 − tolerance) ..= src·(1 + tolerance)`
//! (where `src` is the seed value), every unvisited pixel in its window of
//! half-width `neighbor_dist` is painted, marked visited and queued, whatever
//! its own value. A painted pixel only spreads further if it passes the
//! tolerance test itself when popped. Pixels never reached keep their value.
//!
//! Each pixel is queued at most once: O(rows·cols·neighbor_dist²).
use crate::error::{KeepoutError, Result};
use crate::image::{Grid, RowBounds};
use crate::types::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Sentinel written into flood-filled pixels.
pub const FLOOD_FILL_VALUE: f64 = 255.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloodFillParams {
    /// Half-width of the square expansion window.
    pub neighbor_dist: usize,
    /// Relative tolerance around the seed value, in `[0, 1]`.
    pub tolerance: f64,
}

impl Default for FloodFillParams {
    fn default() -> Self {
        Self {
            neighbor_dist: 5,
            tolerance: 0.10,
        }
    }
}

/// Flood fill `grid` from `(0, 0)` and return the masked copy.
pub fn flood_fill(grid: &Grid, params: FloodFillParams) -> Result<Grid> {
    if !params.tolerance.is_finite() || !(0.0..=1.0).contains(&params.tolerance) {
        return Err(KeepoutError::InvalidTolerance(params.tolerance));
    }

    let mut mask = grid.clone();
    let seed = Coordinate::new(0, 0);
    let Some(src_val) = grid.get(seed) else {
        return Ok(mask);
    };
    let lo = src_val * (1.0 - params.tolerance);
    let hi = src_val * (1.0 + params.tolerance);
    let dist = params.neighbor_dist as isize;

    let mut visited: Vec<Vec<bool>> = grid.rows().map(|r| vec![false; r.len()]).collect();
    let mut queue = VecDeque::new();
    visited[0][0] = true;
    queue.push_back(seed);

    while let Some(c) = queue.pop_front() {
        let (row, col) = (c.row as usize, c.col as usize);
        let value = grid.at(row, col);
        if !(lo <= value && value <= hi) {
            continue;
        }
        mask.set(row, col, FLOOD_FILL_VALUE);

        for i in (c.row - dist)..=(c.row + dist) {
            for j in (c.col - dist)..=(c.col + dist) {
                let n = Coordinate::new(i, j);
                if !grid.contains(n) {
                    continue;
                }
                let (ni, nj) = (i as usize, j as usize);
                if visited[ni][nj] {
                    continue;
                }
                visited[ni][nj] = true;
                mask.set(ni, nj, FLOOD_FILL_VALUE);
                queue.push_back(n);
            }
        }
    }

    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0-valued exterior, a one-pixel wall of 50 at `wall`, 100 inside.
    fn walled(size: usize, wall: usize) -> Grid {
        let rows = (0..size)
            .map(|r| {
                (0..size)
                    .map(|c| {
                        let ring = r.min(c).min(size - 1 - r).min(size - 1 - c);
                        match ring.cmp(&wall) {
                            std::cmp::Ordering::Less => 0.0,
                            std::cmp::Ordering::Equal => 50.0,
                            std::cmp::Ordering::Greater => 100.0,
                        }
                    })
                    .collect()
            })
            .collect();
        Grid::from_rows(rows)
    }

    #[test]
    fn exterior_and_wall_are_painted_interior_kept() {
        let grid = walled(9, 2);
        let out = flood_fill(
            &grid,
            FloodFillParams {
                neighbor_dist: 1,
                tolerance: 0.0,
            },
        )
        .unwrap();
        for r in 0..9 {
            for c in 0..9 {
                let ring = r.min(c).min(8 - r).min(8 - c);
                let expected = if ring <= 2 { FLOOD_FILL_VALUE } else { 100.0 };
                assert_eq!(out.at(r, c), expected, "({r},{c})");
            }
        }
    }

    #[test]
    fn zero_distance_only_paints_the_seed() {
        let grid = Grid::new(3, 3);
        let out = flood_fill(
            &grid,
            FloodFillParams {
                neighbor_dist: 0,
                tolerance: 0.5,
            },
        )
        .unwrap();
        assert_eq!(out.at(0, 0), FLOOD_FILL_VALUE);
        assert_eq!(out.at(0, 1), 0.0);
        assert_eq!(out.at(1, 1), 0.0);
    }

    #[test]
    fn tolerance_admits_nearby_values() {
        let grid = Grid::from_rows(vec![vec![100.0, 108.0, 120.0, 100.0, 100.0]]);
        let params = FloodFillParams {
            neighbor_dist: 1,
            tolerance: 0.1,
        };
        let out = flood_fill(&grid, params).unwrap();
        // 120 is painted as a neighbour but stops the spread.
        assert_eq!(out.row(0), &[255.0, 255.0, 255.0, 100.0, 100.0]);
    }

    #[test]
    fn wide_window_jumps_thin_gaps() {
        let grid = Grid::from_rows(vec![vec![10.0, 10.0, 90.0, 10.0, 10.0, 90.0, 90.0, 10.0]]);
        let params = FloodFillParams {
            neighbor_dist: 2,
            tolerance: 0.0,
        };
        let out = flood_fill(&grid, params).unwrap();
        assert_eq!(
            out.row(0),
            &[255.0, 255.0, 255.0, 255.0, 255.0, 255.0, 255.0, 10.0]
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let grid = walled(7, 1);
        let before = grid.clone();
        let _ = flood_fill(&grid, FloodFillParams::default()).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn invalid_tolerance_is_rejected() {
        let grid = Grid::new(2, 2);
        for tolerance in [-0.1, 1.5, f64::NAN] {
            let params = FloodFillParams {
                neighbor_dist: 1,
                tolerance,
            };
            assert!(matches!(
                flood_fill(&grid, params),
                Err(KeepoutError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn empty_and_ragged_grids_are_handled() {
        let empty = Grid::default();
        assert_eq!(flood_fill(&empty, FloodFillParams::default()).unwrap(), empty);

        let ragged = Grid::from_rows(vec![vec![0.0, 0.0, 0.0], vec![0.0], vec![0.0, 0.0]]);
        let out = flood_fill(&ragged, FloodFillParams::default()).unwrap();
        let lens: Vec<usize> = out.rows().map(<[f64]>::len).collect();
        assert_eq!(lens, vec![3, 1, 2]);
        assert!(out.rows().flatten().all(|&v| v == FLOOD_FILL_VALUE));
    }
}
