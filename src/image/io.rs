//! I/O helpers for occupancy maps, stage renderings and JSON.
//!
//! - `load_intensity_grid`: decode any image into an intensity [`Grid`].
//! - `render_*` / `save_*`: grayscale and overlay renderings of each stage.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::Grid;
use crate::edges::GradientField;
use crate::error::Result;
use crate::types::Coordinate;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Cluster colors, indexed by `cluster_id % 12`.
pub const PALETTE: [[u8; 3]; 12] = [
    [255, 0, 0],
    [255, 125, 0],
    [255, 255, 0],
    [125, 255, 0],
    [0, 255, 0],
    [0, 255, 125],
    [0, 255, 255],
    [0, 125, 255],
    [0, 0, 255],
    [125, 0, 255],
    [255, 0, 255],
    [255, 0, 125],
];

const EDGE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const HULL_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Hull markers cover `[v - HULL_MARKER_RADIUS, v + HULL_MARKER_RADIUS)` on
/// both axes.
const HULL_MARKER_RADIUS: isize = 2;

/// Luma of a 16-bit RGBA sample after alpha premultiplication, scaled to
/// `[0, 255]`.
pub fn intensity_from_rgba16(r: u16, g: u16, b: u16, a: u16) -> f64 {
    let premul = |c: u16| (c as u32 * a as u32 / 0xffff) as f64;
    (0.299 * premul(r) + 0.587 * premul(g) + 0.114 * premul(b)) / 257.0
}

/// Intensity grid of a decoded image; one row per image row.
pub fn grid_from_image(img: &DynamicImage) -> Grid {
    let rgba = img.to_rgba16();
    let rows = rgba
        .rows()
        .map(|row| {
            row.map(|px| {
                let [r, g, b, a] = px.0;
                intensity_from_rgba16(r, g, b, a)
            })
            .collect()
        })
        .collect();
    Grid::from_rows(rows)
}

/// Load an image from disk as an intensity grid.
pub fn load_intensity_grid(path: &Path) -> Result<Grid> {
    let img = image::open(path)?;
    Ok(grid_from_image(&img))
}

#[inline]
fn gray_level(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Grayscale rendering of `grid`, clamping values to `[0, 255]`. Cells past
/// the end of a short row stay black.
pub fn render_grayscale(grid: &Grid) -> GrayImage {
    let mut out = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([gray_level(v)]));
        }
    }
    out
}

fn render_background(grid: &Grid) -> RgbImage {
    let mut out = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let g = gray_level(v);
            out.put_pixel(x as u32, y as u32, Rgb([g, g, g]));
        }
    }
    out
}

/// `background` in gray with every local maximum of `field` painted by
/// `color`.
fn render_maxima(
    background: &Grid,
    field: &GradientField,
    color: impl Fn(u32) -> Rgb<u8>,
) -> RgbImage {
    let mut out = render_background(background);
    for c in field.local_maxima() {
        let (x, y) = (c.col as u32, c.row as u32);
        if x < out.width() && y < out.height() {
            let id = field.cell(c.row as usize, c.col as usize).cluster_id;
            out.put_pixel(x, y, color(id));
        }
    }
    out
}

/// Local maxima in red over the smoothed grid.
pub fn render_edges(smoothed: &Grid, field: &GradientField) -> RgbImage {
    render_maxima(smoothed, field, |_| EDGE_COLOR)
}

/// Local maxima colored by cluster over the smoothed grid.
pub fn render_clusters(smoothed: &Grid, field: &GradientField) -> RgbImage {
    render_maxima(smoothed, field, |id| Rgb(PALETTE[id as usize % PALETTE.len()]))
}

/// Cluster rendering with a red square marker on every hull vertex.
pub fn render_hulls(
    smoothed: &Grid,
    field: &GradientField,
    hulls: &BTreeMap<u32, Vec<Coordinate>>,
) -> RgbImage {
    let mut out = render_clusters(smoothed, field);
    let (w, h) = (out.width() as isize, out.height() as isize);
    for v in hulls.values().flatten() {
        for y in (v.row - HULL_MARKER_RADIUS)..(v.row + HULL_MARKER_RADIUS) {
            for x in (v.col - HULL_MARKER_RADIUS)..(v.col + HULL_MARKER_RADIUS) {
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    out.put_pixel(x as u32, y as u32, HULL_COLOR);
                }
            }
        }
    }
    out
}

pub fn save_grayscale_grid(grid: &Grid, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    render_grayscale(grid).save(path)?;
    Ok(())
}

pub fn save_edge_overlay(smoothed: &Grid, field: &GradientField, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    render_edges(smoothed, field).save(path)?;
    Ok(())
}

pub fn save_cluster_overlay(smoothed: &Grid, field: &GradientField, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    render_clusters(smoothed, field).save(path)?;
    Ok(())
}

pub fn save_hull_overlay(
    smoothed: &Grid,
    field: &GradientField,
    hulls: &BTreeMap<u32, Vec<Coordinate>>,
    path: &Path,
) -> Result<()> {
    ensure_parent_dir(path)?;
    render_hulls(smoothed, field, hulls).save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
