//! Connected-component labelling of local maxima.
//!
//! Two local-maximum cells are adjacent when they lie within a square window
//! of half-width `neighbor_range` of each other, so components separated by
//! gaps narrower than the window merge into one obstacle. Cells that are not
//! local maxima are never visited and keep `cluster_id == 0`.
//!
//! Seeds are taken in row-major order and ids count up from 1 in the order
//! components are found. Expansion uses an explicit stack.
use crate::edges::GradientField;
use crate::image::RowBounds;
use crate::types::Coordinate;
use std::collections::BTreeMap;

/// Assign cluster ids to every local maximum of `field`. Returns the number of
/// clusters found.
pub fn label_clusters(field: &mut GradientField, neighbor_range: usize) -> u32 {
    let mut visited: Vec<Vec<bool>> = field.rows().map(|r| vec![false; r.len()]).collect();
    let mut stack: Vec<Coordinate> = Vec::with_capacity(64);
    let range = neighbor_range as isize;
    let mut next_id = 1u32;

    for r in 0..field.height() {
        for c in 0..field.row_len(r) {
            if visited[r][c] || !field.cell(r, c).is_local_max {
                continue;
            }

            let id = next_id;
            next_id += 1;
            visited[r][c] = true;
            field.cell_mut(r, c).cluster_id = id;
            stack.push(Coordinate::from((r, c)));

            while let Some(p) = stack.pop() {
                for i in (p.row - range)..=(p.row + range) {
                    for j in (p.col - range)..=(p.col + range) {
                        let n = Coordinate::new(i, j);
                        if !field.contains(n) {
                            continue;
                        }
                        let (ni, nj) = (i as usize, j as usize);
                        if visited[ni][nj] || !field.cell(ni, nj).is_local_max {
                            continue;
                        }
                        visited[ni][nj] = true;
                        field.cell_mut(ni, nj).cluster_id = id;
                        stack.push(n);
                    }
                }
            }
        }
    }

    next_id - 1
}

/// Group labelled local maxima by cluster id. Members are listed row-major.
pub fn collect_clusters(field: &GradientField) -> BTreeMap<u32, Vec<Coordinate>> {
    let mut clusters: BTreeMap<u32, Vec<Coordinate>> = BTreeMap::new();
    for c in field.local_maxima() {
        if let Some(cell) = field.get(c) {
            if cell.cluster_id != 0 {
                clusters.entry(cell.cluster_id).or_default().push(c);
            }
        }
    }
    clusters
}
