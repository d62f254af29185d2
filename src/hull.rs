//! Divide-and-conquer convex hull over integer grid points.
//!
//! The two extreme points (smallest and largest `(row, col)`) start the hull
//! and split the remaining points by the sign of their cross product with the
//! `high → low` line. Each side is then refined quickhull-style: the point
//! farthest from the current edge becomes a vertex, points inside the new
//! triangle are dropped, and the points beyond each of the two new edges form
//! the next work items. A side whose points all lie on its edge contributes no
//! vertex.
//!
//! Work items live on an explicit stack; every item either ends or removes at
//! least its farthest point, so the loop runs at most once per input point.
use crate::types::Coordinate;
use std::collections::BTreeMap;

/// A candidate point and whether it has been labelled a hull vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullPoint {
    pub coord: Coordinate,
    pub is_hull_vertex: bool,
}

impl From<Coordinate> for HullPoint {
    fn from(coord: Coordinate) -> Self {
        Self {
            coord,
            is_hull_vertex: false,
        }
    }
}

/// Cross product of `source → target` with `source → point`, using
/// `x = col`, `y = row`.
#[inline]
pub fn cross(source: Coordinate, target: Coordinate, point: Coordinate) -> i64 {
    let (v1x, v1y) = (
        (target.col - source.col) as i64,
        (target.row - source.row) as i64,
    );
    let (v2x, v2y) = (
        (point.col - source.col) as i64,
        (point.row - source.row) as i64,
    );
    v1x * v2y - v1y * v2x
}

/// Distance from `point` to the line through `source` and `target`; 0 when the
/// two line points coincide.
#[inline]
pub fn perpendicular_distance(source: Coordinate, target: Coordinate, point: Coordinate) -> f64 {
    let dx = (target.col - source.col) as f64;
    let dy = (target.row - source.row) as f64;
    let norm = (dx * dx + dy * dy).sqrt();
    if norm == 0.0 {
        return 0.0;
    }
    cross(source, target, point).abs() as f64 / norm
}

/// Projection of `source → point` onto `source → target`, unscaled.
#[inline]
fn along(source: Coordinate, target: Coordinate, point: Coordinate) -> i64 {
    let (dx, dy) = (target.col - source.col, target.row - source.row);
    (dx * (point.col - source.col) + dy * (point.row - source.row)) as i64
}

struct Side {
    members: Vec<usize>,
    source: usize,
    target: usize,
}

/// Flag the hull vertices among `points`. Points are expected to be distinct.
pub fn label_hull_vertices(points: &mut [HullPoint]) {
    if points.is_empty() {
        return;
    }

    let mut high = 0;
    let mut low = 0;
    for (i, p) in points.iter().enumerate() {
        if p.coord < points[high].coord {
            high = i;
        }
        if p.coord > points[low].coord {
            low = i;
        }
    }
    points[high].is_hull_vertex = true;
    points[low].is_hull_vertex = true;
    if high == low {
        return;
    }

    let (hc, lc) = (points[high].coord, points[low].coord);
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (i, p) in points.iter().enumerate() {
        if p.is_hull_vertex {
            continue;
        }
        if cross(hc, lc, p.coord) > 0 {
            right.push(i);
        } else {
            left.push(i);
        }
    }

    let mut work = vec![
        Side {
            members: right,
            source: low,
            target: high,
        },
        Side {
            members: left,
            source: high,
            target: low,
        },
    ];

    while let Some(side) = work.pop() {
        let Some(&first) = side.members.first() else {
            continue;
        };
        let (sc, tc) = (points[side.source].coord, points[side.target].coord);

        let mut farthest = first;
        let mut max_dist = perpendicular_distance(sc, tc, points[first].coord);
        for &i in &side.members {
            let dist = perpendicular_distance(sc, tc, points[i].coord);
            // Equal distances lie on a line parallel to the edge; only the end
            // reached last along the edge is a vertex.
            let further_along = dist == max_dist
                && along(sc, tc, points[i].coord) > along(sc, tc, points[farthest].coord);
            if dist > max_dist || further_along {
                farthest = i;
                max_dist = dist;
            }
        }
        if max_dist <= 0.0 {
            continue;
        }
        points[farthest].is_hull_vertex = true;
        let fc = points[farthest].coord;

        let mut beyond_target = Vec::new();
        let mut beyond_source = Vec::new();
        for &i in &side.members {
            let p = &points[i];
            if p.is_hull_vertex {
                continue;
            }
            if cross(tc, fc, p.coord) > 0 {
                beyond_target.push(i);
            } else if cross(fc, sc, p.coord) > 0 {
                beyond_source.push(i);
            }
        }

        work.push(Side {
            members: beyond_source,
            source: side.source,
            target: farthest,
        });
        work.push(Side {
            members: beyond_target,
            source: farthest,
            target: side.target,
        });
    }
}

/// Hull vertices of `points`, in input order.
pub fn convex_hull(points: &[Coordinate]) -> Vec<Coordinate> {
    let mut labelled: Vec<HullPoint> = points.iter().copied().map(HullPoint::from).collect();
    label_hull_vertices(&mut labelled);
    labelled
        .into_iter()
        .filter(|p| p.is_hull_vertex)
        .map(|p| p.coord)
        .collect()
}

/// One hull per cluster, keyed by cluster id as produced by
/// [`collect_clusters`](crate::cluster::collect_clusters).
pub fn hull_vertices_by_cluster(
    clusters: &BTreeMap<u32, Vec<Coordinate>>,
) -> BTreeMap<u32, Vec<Coordinate>> {
    clusters
        .iter()
        .map(|(&id, members)| (id, convex_hull(members)))
        .collect()
}

/// Order hull vertices by angle around their centroid, giving a closed outline
/// that winds clockwise on screen.
pub fn order_outline(vertices: &[Coordinate]) -> Vec<Coordinate> {
    let mut out = vertices.to_vec();
    if out.len() < 3 {
        return out;
    }
    let n = out.len() as f64;
    let cy = out.iter().map(|c| c.row as f64).sum::<f64>() / n;
    let cx = out.iter().map(|c| c.col as f64).sum::<f64>() / n;
    let angle = |c: &Coordinate| (c.row as f64 - cy).atan2(c.col as f64 - cx);
    out.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn coords(points: &[(isize, isize)]) -> Vec<Coordinate> {
        points.iter().map(|&(r, c)| Coordinate::new(r, c)).collect()
    }

    fn as_set(points: &[Coordinate]) -> BTreeSet<Coordinate> {
        points.iter().copied().collect()
    }

    #[test]
    fn empty_input_gives_empty_hull() {
        assert!(convex_hull(&[]).is_empty());
    }

    #[test]
    fn one_and_two_points_are_their_own_hull() {
        let one = coords(&[(3, 4)]);
        assert_eq!(convex_hull(&one), one);
        let two = coords(&[(3, 4), (1, 9)]);
        assert_eq!(as_set(&convex_hull(&two)), as_set(&two));
    }

    #[test]
    fn collinear_points_keep_only_the_extremes() {
        let diagonal = coords(&[(2, 2), (0, 0), (3, 3), (1, 1)]);
        assert_eq!(
            as_set(&convex_hull(&diagonal)),
            as_set(&coords(&[(0, 0), (3, 3)]))
        );
        let horizontal = coords(&[(5, 3), (5, 1), (5, 7), (5, 4)]);
        assert_eq!(
            as_set(&convex_hull(&horizontal)),
            as_set(&coords(&[(5, 1), (5, 7)]))
        );
        let vertical = coords(&[(0, 2), (1, 2), (2, 2)]);
        assert_eq!(
            as_set(&convex_hull(&vertical)),
            as_set(&coords(&[(0, 2), (2, 2)]))
        );
    }

    #[test]
    fn square_with_interior_and_edge_points() {
        let corners = coords(&[(0, 0), (0, 6), (6, 0), (6, 6)]);
        let mut points = coords(&[(0, 3), (3, 3), (2, 4), (3, 0), (6, 2), (5, 5), (1, 1)]);
        points.extend(corners.iter().copied());
        assert_eq!(as_set(&convex_hull(&points)), as_set(&corners));
    }

    #[test]
    fn hexagon_vertices_are_recovered() {
        let vertices = coords(&[(0, 2), (0, 5), (3, 7), (6, 5), (6, 2), (3, 0)]);
        let mut points = coords(&[(3, 3), (2, 4), (4, 2), (1, 3), (5, 4), (3, 6)]);
        points.extend(vertices.iter().rev().copied());
        assert_eq!(as_set(&convex_hull(&points)), as_set(&vertices));
    }

    #[test]
    fn triangle_with_points_near_edges() {
        let vertices = coords(&[(0, 0), (10, 0), (5, 10)]);
        let mut points = vertices.clone();
        points.extend(coords(&[(5, 9), (5, 1), (2, 2), (8, 3), (5, 5)]));
        assert_eq!(as_set(&convex_hull(&points)), as_set(&vertices));
    }

    #[test]
    fn points_tied_on_a_parallel_line_keep_only_its_ends() {
        let points = coords(&[
            (3, 7), (7, 4), (7, 3), (4, 0), (5, 3), (0, 7), (2, 2), (1, 1),
            (6, 0), (7, 5), (5, 5), (2, 0), (1, 4), (7, 2), (2, 7), (0, 5),
        ]);
        let expected = coords(&[
            (0, 7), (6, 0), (3, 7), (1, 1), (2, 0), (7, 2), (0, 5), (7, 5),
        ]);
        assert_eq!(as_set(&convex_hull(&points)), as_set(&expected));
    }

    #[test]
    fn distance_guards_zero_length_edges() {
        let p = Coordinate::new(1, 1);
        assert_eq!(perpendicular_distance(p, p, Coordinate::new(4, 5)), 0.0);
        let d = perpendicular_distance(Coordinate::new(0, 0), Coordinate::new(0, 4), Coordinate::new(3, 2));
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn outline_orders_vertices_around_centroid() {
        let vertices = coords(&[(0, 0), (4, 4), (0, 4), (4, 0)]);
        let outline = order_outline(&vertices);
        assert_eq!(outline, coords(&[(0, 0), (0, 4), (4, 4), (4, 0)]));
    }

    #[test]
    fn each_cluster_gets_its_own_hull() {
        let mut clusters = BTreeMap::new();
        clusters.insert(1, coords(&[(0, 0), (0, 4), (2, 2), (4, 4), (4, 0)]));
        clusters.insert(2, coords(&[(10, 10), (10, 12)]));
        clusters.insert(3, coords(&[(20, 20), (21, 21), (22, 22)]));

        let hulls = hull_vertices_by_cluster(&clusters);
        assert_eq!(hulls.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(hulls[&1], coords(&[(0, 0), (0, 4), (4, 4), (4, 0)]));
        assert_eq!(hulls[&2], coords(&[(10, 10), (10, 12)]));
        assert_eq!(hulls[&3], coords(&[(20, 20), (22, 22)]));
        assert!(hull_vertices_by_cluster(&BTreeMap::new()).is_empty());
    }
}
