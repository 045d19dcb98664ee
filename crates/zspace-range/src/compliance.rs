//! Range contract test helpers.
//!
//! These functions verify that a [`ZRange`] satisfies the invariants its
//! iteration and indexing contract promises. Reused across the range,
//! iterator, and ops test modules.

use crate::range::ZRange;
use indexmap::IndexSet;
use proptest::prelude::*;
use zspace_core::Coord;

/// Assert that iteration yields exactly `size()` distinct coordinates.
pub fn assert_iteration_complete(range: &ZRange) {
    let coords: Vec<Coord> = range.iter().collect();
    assert_eq!(
        coords.len(),
        range.size(),
        "iteration length ({}) != size ({}) for {range}",
        coords.len(),
        range.size()
    );
    let unique: IndexSet<_> = coords.iter().collect();
    assert_eq!(
        unique.len(),
        range.size(),
        "iteration of {range} has duplicates"
    );
}

/// Assert that every iterated coordinate is contained in the range.
pub fn assert_iteration_contained(range: &ZRange) {
    for coord in range {
        assert!(
            range.contains(&coord),
            "{range} yielded {coord} but does not contain it"
        );
    }
}

/// Assert that iteration is strictly increasing in row-major order.
pub fn assert_iteration_row_major(range: &ZRange) {
    let coords: Vec<Coord> = range.iter().collect();
    for pair in coords.windows(2) {
        assert!(
            pair[0] < pair[1],
            "{range}: {} then {} is not row-major",
            pair[0],
            pair[1]
        );
    }
}

/// Assert that two traversals produce the same sequence.
pub fn assert_iteration_restartable(range: &ZRange) {
    let a: Vec<Coord> = range.iter().collect();
    let b: Vec<Coord> = range.iter().collect();
    assert_eq!(a, b, "iteration of {range} is not repeatable");
}

/// Assert that `coord_at(i)` and `rank_of` agree with iteration.
pub fn assert_random_access_matches_iteration(range: &ZRange) {
    for (i, coord) in range.iter().enumerate() {
        let at = range.coord_at(i).expect("index below size must resolve");
        assert_eq!(at, coord, "{range}: coord_at({i}) disagrees with iteration");
        assert_eq!(range.rank_of(&coord), Some(i));
    }
    assert!(range.coord_at(range.size()).is_err());
}

/// Run all compliance checks on a range.
pub fn run_full_compliance(range: &ZRange) {
    assert_iteration_complete(range);
    assert_iteration_contained(range);
    assert_iteration_row_major(range);
    assert_iteration_restartable(range);
    assert_random_access_matches_iteration(range);
}

fn arb_bounds(n: usize) -> impl Strategy<Value = ZRange> {
    (
        prop::collection::vec(-5i32..5, n),
        prop::collection::vec(0i32..4, n),
    )
        .prop_map(|(start, shape)| {
            let end: Vec<i32> = start.iter().zip(&shape).map(|(s, e)| s + e).collect();
            ZRange::of(start, end).expect("non-negative shape is a valid range")
        })
}

/// Small ranges of up to `max_ndim` axes, including empty and 0-dim ones.
pub fn arb_range(max_ndim: usize) -> impl Strategy<Value = ZRange> {
    (0..=max_ndim).prop_flat_map(arb_bounds)
}

/// Two ranges sharing a dimensionality.
pub fn arb_range_pair(max_ndim: usize) -> impl Strategy<Value = (ZRange, ZRange)> {
    (0..=max_ndim).prop_flat_map(|n| (arb_bounds(n), arb_bounds(n)))
}
