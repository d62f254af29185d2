//! Keepout detector running the fixed five-stage pipeline.
//!
//! Overview
//! - Flood fills from the top-left corner to dissolve the exterior wall.
//! - Smooths the masked grid with a 5×5 Gaussian, split into row bands that
//!   run concurrently.
//! - Computes Sobel gradients with the same banding and quantizes each
//!   gradient to one of eight compass directions.
//! - Suppresses every cell that does not dominate both neighbours along its
//!   direction or falls at or below the magnitude threshold.
//! - Links surviving maxima into clusters and builds one convex hull per
//!   cluster.
//!
//! Modules
//! - [`params`] – configuration consumed by the detector and CLI.
//! - `pipeline` – the [`KeepoutDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::KeepoutParams;
pub use pipeline::{KeepoutDetector, KeepoutOutput};
