//! Square convolution kernels as explicit immutable values.
//!
//! Kernels are built once and passed by reference into the convolution
//! primitive. Construction is the only place a size can be rejected, so a
//! `Kernel` in hand is always odd-sized and square.
use crate::error::{KeepoutError, Result};

/// Unnormalized 5×5 Gaussian weights; they sum to 159.
const GAUSSIAN_5X5: [f64; 25] = [
    2.0, 4.0, 5.0, 4.0, 2.0, //
    4.0, 9.0, 12.0, 9.0, 4.0, //
    5.0, 12.0, 15.0, 12.0, 5.0, //
    4.0, 9.0, 12.0, 9.0, 4.0, //
    2.0, 4.0, 5.0, 4.0, 2.0,
];

const SOBEL_X: [f64; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
// Positive when intensity grows towards the top row.
const SOBEL_Y: [f64; 9] = [1.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -1.0];

#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Build a `size × size` kernel from row-major weights.
    pub fn new(size: usize, weights: Vec<f64>) -> Result<Self> {
        if size % 2 == 0 {
            return Err(KeepoutError::EvenKernelSize { size });
        }
        if weights.len() != size * size {
            return Err(KeepoutError::KernelShape {
                size,
                len: weights.len(),
            });
        }
        Ok(Self { size, weights })
    }

    /// Fixed 5×5 Gaussian, pre-normalized so its weights sum to 1.
    pub fn gaussian_5x5() -> Self {
        Self {
            size: 5,
            weights: GAUSSIAN_5X5.to_vec(),
        }
        .normalized()
    }

    /// Horizontal Sobel operator (unnormalized).
    pub fn sobel_x() -> Self {
        Self {
            size: 3,
            weights: SOBEL_X.to_vec(),
        }
    }

    /// Vertical Sobel operator (unnormalized).
    pub fn sobel_y() -> Self {
        Self {
            size: 3,
            weights: SOBEL_Y.to_vec(),
        }
    }

    /// Scale weights so they sum to 1. Zero-sum kernels are returned as-is.
    pub fn normalized(mut self) -> Self {
        let sum: f64 = self.weights.iter().sum();
        if sum != 0.0 {
            for w in &mut self.weights {
                *w /= sum;
            }
        }
        self
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the centre tap to an edge: `(size - 1) / 2`.
    #[inline]
    pub fn offset(&self) -> usize {
        (self.size - 1) / 2
    }

    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.size + j]
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
