//! Diagnostics data model returned alongside the keepout zones.
//!
//! [`KeepoutReport`] is the serializable summary of a detector run: grid
//! dimensions, per-stage counts, one [`KeepoutZone`] per cluster and a
//! [`TimingBreakdown`] covering every stage that executed.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, KeepoutReport, KeepoutZone};
pub use timing::{StageTiming, TimingBreakdown};
