//! Parameter types configuring the keepout stages.
//!
//! Defaults match the production configuration: a 5-pixel flood window with
//! 10% tolerance, four row bands, a suppression threshold of 255 and a
//! clustering range of ten pixels.

use crate::error::{KeepoutError, Result};
use crate::flood::FloodFillParams;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the fixed five-stage pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepoutParams {
    /// Half-width of the square flood-fill window (Chebyshev distance).
    pub flood_neighbor_dist: usize,
    /// Relative tolerance around the seed value at `(0, 0)`: a pixel spreads
    /// the fill when its value lies within `seed·(1 ± flood_tolerance)`.
    pub flood_tolerance: f64,
    /// Number of row bands processed concurrently by the smoothing and
    /// gradient stages.
    pub bands: usize,
    /// Minimum gradient magnitude a local maximum must exceed.
    pub nms_threshold: f64,
    /// Chebyshev radius linking local maxima into one cluster.
    pub cluster_neighbor_range: usize,
}

impl Default for KeepoutParams {
    fn default() -> Self {
        Self {
            flood_neighbor_dist: 5,
            flood_tolerance: 0.10,
            bands: 4,
            nms_threshold: 255.0,
            cluster_neighbor_range: 10,
        }
    }
}

impl KeepoutParams {
    pub fn flood_fill(&self) -> FloodFillParams {
        FloodFillParams {
            neighbor_dist: self.flood_neighbor_dist,
            tolerance: self.flood_tolerance,
        }
    }

    /// Band count for a grid of `rows` rows. Counts above the row count are
    /// clamped to it; a zero count is rejected.
    pub fn bands_for(&self, rows: usize) -> Result<usize> {
        if self.bands == 0 {
            return Err(KeepoutError::InvalidBandCount {
                bands: self.bands,
                rows,
            });
        }
        Ok(self.bands.min(rows.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let params: KeepoutParams = serde_json::from_str(r#"{ "bands": 8 }"#).unwrap();
        assert_eq!(params.bands, 8);
        assert_eq!(params.flood_neighbor_dist, 5);
        assert_eq!(params.cluster_neighbor_range, 10);
        assert!((params.flood_tolerance - 0.10).abs() < 1e-12);
        assert_eq!(params.nms_threshold, 255.0);
    }

    #[test]
    fn band_count_is_clamped_to_rows() {
        let params = KeepoutParams {
            bands: 32,
            ..Default::default()
        };
        assert_eq!(params.bands_for(5).unwrap(), 5);
        assert_eq!(params.bands_for(100).unwrap(), 32);
        assert_eq!(params.bands_for(0).unwrap(), 1);
    }

    #[test]
    fn zero_bands_are_a_configuration_error() {
        let zero: KeepoutParams = serde_json::from_str(r#"{ "bands": 0 }"#).unwrap();
        assert!(matches!(
            zero.bands_for(10),
            Err(KeepoutError::InvalidBandCount { bands: 0, rows: 10 })
        ));
    }

    #[test]
    fn flood_params_follow_detector_params() {
        let params = KeepoutParams {
            flood_neighbor_dist: 2,
            flood_tolerance: 0.3,
            ..Default::default()
        };
        let flood = params.flood_fill();
        assert_eq!(flood.neighbor_dist, 2);
        assert!((flood.tolerance - 0.3).abs() < 1e-12);
    }
}
