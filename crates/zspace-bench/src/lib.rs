//! Benchmark profiles for ZSpace range operations.
//!
//! - [`reference_range`]: 100x100 grid (10K points)
//! - [`stress_range`]: 32x32x32x4 box (~131K points, spills past inline coord storage)
//! - [`shifted_windows`]: deterministic overlapping windows for intersection workloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use zspace_core::{Coord, ZSpaceError};
use zspace_range::ZRange;

/// 100x100 origin-anchored grid.
pub fn reference_range() -> Result<ZRange, ZSpaceError> {
    ZRange::from_shape([100, 100])
}

/// Four-axis box at a non-zero offset, sized for stress runs.
pub fn stress_range() -> Result<ZRange, ZSpaceError> {
    ZRange::of([-16, 0, 8, 1], [16, 32, 40, 5])
}

/// `count` copies of `base` translated along a fixed diagonal walk.
///
/// Offsets are derived from the window index, so runs are reproducible
/// without a random source.
pub fn shifted_windows(base: &ZRange, count: usize) -> Result<Vec<ZRange>, ZSpaceError> {
    let ndim = base.ndim();
    (0..count)
        .map(|i| {
            let delta: Coord = (0..ndim)
                .map(|axis| ((i * (axis + 3)) % 17) as i32 - 8)
                .collect();
            base.translate(&delta)
        })
        .collect()
}
