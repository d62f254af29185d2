use thiserror::Error;

/// Errors surfaced by the keepout pipeline and its I/O helpers.
#[derive(Debug, Error)]
pub enum KeepoutError {
    #[error("kernel size must be odd, got {size}")]
    EvenKernelSize { size: usize },
    #[error("kernel weights do not form a {size}x{size} square, got {len} weights")]
    KernelShape { size: usize, len: usize },
    #[error("band count {bands} is invalid for a grid with {rows} rows")]
    InvalidBandCount { bands: usize, rows: usize },
    #[error("flood-fill tolerance must lie in [0, 1], got {0}")]
    InvalidTolerance(f64),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KeepoutError>;
