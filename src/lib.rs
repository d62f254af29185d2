#![doc = include_str!("../README.md")]

// Pipeline entry points and their data model.
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Individual stages, usable on their own.
pub mod angle;
pub mod bands;
pub mod cluster;
pub mod convolve;
pub mod edges;
pub mod flood;
pub mod hull;
pub mod kernel;
pub mod smooth;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{KeepoutDetector, KeepoutOutput, KeepoutParams};
pub use crate::diagnostics::{KeepoutReport, KeepoutZone, TimingBreakdown};
pub use crate::error::{KeepoutError, Result};
pub use crate::image::Grid;
pub use crate::types::Coordinate;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use auto_keepout::prelude::*;
///
/// # fn main() -> auto_keepout::Result<()> {
/// let mut grid = Grid::filled(64, 64, 254.0);
/// for r in 20..30 {
///     for c in 20..40 {
///         grid.set(r, c, 0.0);
///     }
/// }
///
/// let detector = KeepoutDetector::new(KeepoutParams::default());
/// let report = detector.report(&grid)?;
/// println!("zones={} total_ms={:.3}", report.cluster_count, report.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Grid, RowBounds};
    pub use crate::{Coordinate, KeepoutDetector, KeepoutParams, KeepoutReport};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::angle::{quantize_direction, Direction};
    pub use crate::bands::{map_row_bands, row_bands};
    pub use crate::cluster::{collect_clusters, label_clusters};
    pub use crate::convolve::convolve_at;
    pub use crate::edges::{
        compute_gradient, gradient_field, non_max_suppress, parallel_gradient_field,
        GradientCell, GradientField,
    };
    pub use crate::flood::{flood_fill, FloodFillParams, FLOOD_FILL_VALUE};
    pub use crate::hull::{convex_hull, hull_vertices_by_cluster, order_outline};
    pub use crate::kernel::Kernel;
    pub use crate::smooth::{gaussian_smooth, parallel_gaussian_smooth};
}
