//! Row-band partitioning for the convolution stages.
//!
//! A grid of `rows` rows is split into `bands` contiguous ranges of
//! `rows / bands` rows each; the last band absorbs the remainder. Bands run on
//! the rayon pool and are gathered by band index, never by completion order,
//! so the output is identical for every valid band count.
use crate::error::{KeepoutError, Result};
use rayon::prelude::*;
use std::ops::Range;

/// Split `0..rows` into `bands` contiguous, non-empty ranges.
pub fn row_bands(rows: usize, bands: usize) -> Result<Vec<Range<usize>>> {
    if bands == 0 || bands > rows {
        return Err(KeepoutError::InvalidBandCount { bands, rows });
    }
    let per_band = rows / bands;
    let ranges = (0..bands)
        .map(|n| {
            let start = n * per_band;
            let end = if n + 1 == bands { rows } else { start + per_band };
            start..end
        })
        .collect();
    Ok(ranges)
}

/// Evaluate `row_fn` for every row, one rayon task per band, and return the
/// per-row results in row order.
pub fn map_row_bands<T, F>(rows: usize, bands: usize, row_fn: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let ranges = row_bands(rows, bands)?;
    let per_band: Vec<Vec<T>> = ranges
        .into_par_iter()
        .map(|range| range.map(&row_fn).collect())
        .collect();
    Ok(per_band.into_iter().flatten().collect())
}
