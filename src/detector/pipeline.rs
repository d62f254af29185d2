//! Detector pipeline driving keepout detection end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use auto_keepout::{Grid, KeepoutDetector, KeepoutParams};
//!
//! # fn example(grid: Grid) -> auto_keepout::Result<()> {
//! let detector = KeepoutDetector::new(KeepoutParams::default());
//! let output = detector.process(&grid)?;
//! for zone in &output.report.zones {
//!     println!("cluster {} has {} vertices", zone.cluster_id, zone.vertices.len());
//! }
//! # Ok(())
//! # }
//! ```
use super::params::KeepoutParams;
use crate::cluster::{collect_clusters, label_clusters};
use crate::diagnostics::{InputDescriptor, KeepoutReport, KeepoutZone, TimingBreakdown};
use crate::edges::{non_max_suppress, parallel_gradient_field, GradientField};
use crate::error::Result;
use crate::flood::flood_fill;
use crate::hull::{hull_vertices_by_cluster, order_outline};
use crate::image::{Grid, RowBounds};
use crate::smooth::parallel_gaussian_smooth;
use crate::types::Coordinate;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::time::Instant;

/// Every intermediate product of a detector run plus its report.
#[derive(Clone, Debug)]
pub struct KeepoutOutput {
    /// Input with the exterior flood filled.
    pub flood_filled: Grid,
    pub smoothed: Grid,
    /// Gradients with local-maximum flags and cluster ids set.
    pub field: GradientField,
    /// Hull vertices per cluster id.
    pub hulls: BTreeMap<u32, Vec<Coordinate>>,
    pub report: KeepoutReport,
}

/// Runs flood fill, smoothing, gradients, suppression, clustering and hulls.
#[derive(Clone, Debug, Default)]
pub struct KeepoutDetector {
    params: KeepoutParams,
}

impl KeepoutDetector {
    pub fn new(params: KeepoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &KeepoutParams {
        &self.params
    }

    /// Run the detector and return only the report.
    pub fn report(&self, grid: &Grid) -> Result<KeepoutReport> {
        Ok(self.process(grid)?.report)
    }

    /// Run the full pipeline on `grid`. The input is left untouched.
    pub fn process(&self, grid: &Grid) -> Result<KeepoutOutput> {
        let (width, height) = (grid.width(), grid.height());
        let bands = self.params.bands_for(height)?;
        if bands != self.params.bands {
            warn!(
                "KeepoutDetector::process clamped bands {} -> {} for {} rows",
                self.params.bands, bands, height
            );
        }
        debug!(
            "KeepoutDetector::process start w={} h={} bands={}",
            width, height, bands
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let flood_filled = flood_fill(grid, self.params.flood_fill())?;
        timings.push("flood_fill", elapsed_ms(stage));

        if grid.is_empty() {
            warn!("KeepoutDetector::process empty grid -> no keepout zones");
            timings.total_ms = elapsed_ms(total_start);
            return Ok(KeepoutOutput {
                smoothed: flood_filled.clone(),
                flood_filled,
                field: GradientField::default(),
                hulls: BTreeMap::new(),
                report: self.build_report(width, height, bands, 0, Vec::new(), timings),
            });
        }

        let stage = Instant::now();
        let smoothed = parallel_gaussian_smooth(&flood_filled, bands)?;
        timings.push("smoothing", elapsed_ms(stage));

        let stage = Instant::now();
        let mut field = parallel_gradient_field(&smoothed, bands)?;
        timings.push("gradient", elapsed_ms(stage));

        let stage = Instant::now();
        non_max_suppress(&mut field, self.params.nms_threshold);
        let local_max_count = field.local_maxima().count();
        timings.push("suppression", elapsed_ms(stage));
        debug!(
            "KeepoutDetector::process local maxima={} threshold={:.1}",
            local_max_count, self.params.nms_threshold
        );

        let stage = Instant::now();
        let cluster_count = label_clusters(&mut field, self.params.cluster_neighbor_range);
        let clusters = collect_clusters(&field);
        timings.push("clustering", elapsed_ms(stage));
        if cluster_count == 0 {
            warn!("KeepoutDetector::process found no clusters");
        }

        let stage = Instant::now();
        let hulls = hull_vertices_by_cluster(&clusters);
        let zones: Vec<KeepoutZone> = hulls
            .iter()
            .map(|(&cluster_id, vertices)| KeepoutZone {
                cluster_id,
                point_count: clusters.get(&cluster_id).map_or(0, Vec::len),
                vertices: vertices.clone(),
                outline: order_outline(vertices),
            })
            .collect();
        timings.push("hulls", elapsed_ms(stage));

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "KeepoutDetector::process done clusters={} total_ms={:.3}",
            cluster_count, timings.total_ms
        );

        let report = self.build_report(width, height, bands, local_max_count, zones, timings);
        Ok(KeepoutOutput {
            flood_filled,
            smoothed,
            field,
            hulls,
            report,
        })
    }

    fn build_report(
        &self,
        width: usize,
        height: usize,
        bands: usize,
        local_max_count: usize,
        zones: Vec<KeepoutZone>,
        timings: TimingBreakdown,
    ) -> KeepoutReport {
        KeepoutReport {
            input: InputDescriptor {
                width,
                height,
                bands,
            },
            params: self.params,
            local_max_count,
            cluster_count: zones.len(),
            zones,
            timings,
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
