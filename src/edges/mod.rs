//! Edge processing: Sobel gradients and directional non-maximum suppression.
//!
//! - Gradient computation returns one [`GradientCell`] per pixel holding the
//!   raw `(x, y)` response and its quantized compass direction.
//! - Non-maximum suppression flags cells that dominate both neighbours along
//!   their direction and exceed a magnitude threshold.
//!
//! Borders are zero-padded during convolution; suppression never marks a cell
//! whose directional neighbour falls outside the grid.

pub mod grad;
pub mod nms;

pub use grad::{
    compute_gradient, gradient_field, parallel_gradient_field, GradientCell, GradientField,
};
pub use nms::non_max_suppress;
