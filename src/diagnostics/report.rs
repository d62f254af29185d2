use super::TimingBreakdown;
use crate::detector::KeepoutParams;
use crate::types::Coordinate;
use serde::{Deserialize, Serialize};

/// Summary of a detector run, suitable for writing as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepoutReport {
    pub input: InputDescriptor,
    pub params: KeepoutParams,
    /// Number of cells flagged by non-maximum suppression.
    pub local_max_count: usize,
    pub cluster_count: usize,
    pub zones: Vec<KeepoutZone>,
    pub timings: TimingBreakdown,
}

impl KeepoutReport {
    pub fn zone(&self, cluster_id: u32) -> Option<&KeepoutZone> {
        self.zones.iter().find(|z| z.cluster_id == cluster_id)
    }

    /// Total number of hull vertices across all zones.
    pub fn vertex_count(&self) -> usize {
        self.zones.iter().map(|z| z.vertices.len()).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    /// Row bands actually used by the parallel stages.
    pub bands: usize,
}

/// One keepout polygon: the hull of a single cluster of edge maxima.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepoutZone {
    pub cluster_id: u32,
    /// Number of local maxima in the cluster.
    pub point_count: usize,
    /// Hull vertices in row-major order of the cluster members.
    pub vertices: Vec<Coordinate>,
    /// The same vertices ordered around their centroid.
    pub outline: Vec<Coordinate>,
}
