//! Reusable range fixtures.
//!
//! The standard set covers the shapes that exercise distinct code paths:
//!
//! - [`scalar`]: the 0-dim range (one point, no axes).
//! - [`grid_2x3`]: the origin-anchored `[2, 3]` grid.
//! - [`offset_box`]: negative and positive bounds mixed.
//! - [`flat_axis`]: empty because one middle axis has zero extent.
//! - [`deep_5d`]: more axes than a `Coord` stores inline.

use zspace_range::{BlockIndex, ZRange};

pub fn scalar() -> ZRange {
    ZRange::scalar()
}

pub fn grid_2x3() -> ZRange {
    ZRange::from_shape([2, 3]).expect("fixture bounds are valid")
}

pub fn offset_box() -> ZRange {
    ZRange::of([-2, 3], [1, 7]).expect("fixture bounds are valid")
}

pub fn flat_axis() -> ZRange {
    ZRange::of([0, 5, 0], [2, 5, 3]).expect("fixture bounds are valid")
}

pub fn deep_5d() -> ZRange {
    ZRange::of([1, 0, -1, 2, 0], [3, 2, 1, 4, 3]).expect("fixture bounds are valid")
}

/// Every fixture, labelled for assertion messages.
pub fn standard_ranges() -> Vec<(&'static str, ZRange)> {
    vec![
        ("scalar", scalar()),
        ("grid_2x3", grid_2x3()),
        ("offset_box", offset_box()),
        ("flat_axis", flat_axis()),
        ("deep_5d", deep_5d()),
    ]
}

/// Split `range` along `dim` into `chunk`-sized tiles and key them `0..n`.
pub fn tile_blocks(range: &ZRange, dim: isize, chunk: i32) -> Vec<BlockIndex> {
    range
        .split(dim, chunk)
        .expect("fixture split is valid")
        .into_iter()
        .zip(0u64..)
        .map(|(tile, key)| BlockIndex::of(tile, key))
        .collect()
}
