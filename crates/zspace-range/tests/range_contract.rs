use std::borrow::Cow;

use zspace_core::{BufferOwnership, Coord, ErrorKind, Streamable, ZSpaceError};
use zspace_range::{bounding_range, BlockIndex, ZRange};
use zspace_test_utils::{fixtures, init_tracing, standard_ranges, tile_blocks};

#[test]
fn iteration_yields_size_distinct_contained_coords_for_every_fixture() {
    init_tracing();
    for (name, range) in standard_ranges() {
        let coords = range.iter().to_sequence();
        assert_eq!(coords.len(), range.size(), "{name}");
        let groups = coords.iter().group_by_key(|c| (*c).clone());
        assert_eq!(groups.len(), range.size(), "{name} repeats a coordinate");
        assert!(coords.iter().all(|c| range.contains(c)), "{name}");
    }
}

#[test]
fn shape_2x3_iterates_row_major() {
    let got = fixtures::grid_2x3().iter().map_to_sequence(|c| c.to_vec());
    assert_eq!(
        got,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 1],
            vec![1, 2],
        ]
    );
}

#[test]
fn inverted_bounds_and_mismatched_dims_are_typed_failures() {
    init_tracing();
    let err = ZRange::of([2, 0], [1, 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRange);

    let err = ZRange::of([0, 0], [1, 1, 1]).unwrap_err();
    assert!(matches!(
        err,
        ZSpaceError::DimensionMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));
}

#[test]
fn coord_past_size_is_index_out_of_range() {
    let r = fixtures::offset_box();
    let err = r.coord_at(r.size()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
}

#[test]
fn ownership_policy_on_shape_buffer() {
    for (name, range) in standard_ranges() {
        match range.shape_with(BufferOwnership::Reused) {
            Cow::Borrowed(shape) => {
                assert!(std::ptr::eq(shape, range.shape().as_slice()), "{name}")
            }
            Cow::Owned(_) => panic!("{name}: reused shape was copied"),
        }
        let cloned = range.shape_with(BufferOwnership::Cloned);
        assert!(matches!(cloned, Cow::Owned(_)), "{name}");
        assert_eq!(&*cloned, range.shape().as_slice(), "{name}");
    }
}

#[test]
fn intersection_is_commutative_across_fixtures() {
    let all = standard_ranges();
    for (na, a) in &all {
        for (nb, b) in &all {
            match (a.intersect(b), b.intersect(a)) {
                (Ok(ab), Ok(ba)) => assert_eq!(ab, ba, "{na} ∩ {nb}"),
                (Err(e1), Err(e2)) => {
                    assert_eq!(e1.kind(), ErrorKind::DimensionMismatch);
                    assert_eq!(e2.kind(), ErrorKind::DimensionMismatch);
                }
                (l, r) => panic!("{na} ∩ {nb}: asymmetric result {l:?} vs {r:?}"),
            }
        }
    }
}

#[test]
fn tiles_partition_the_range() {
    let range = fixtures::deep_5d();
    let tiles = tile_blocks(&range, -1, 2);
    assert_eq!(tiles.len(), 2);

    let covered: usize = tiles.iter().map(|b| b.range().size()).sum();
    assert_eq!(covered, range.size());

    let refs: Vec<&ZRange> = tiles.iter().map(BlockIndex::range).collect();
    assert_eq!(bounding_range(refs.iter().copied()).unwrap(), range);

    for (i, a) in refs.iter().enumerate() {
        for b in &refs[i + 1..] {
            assert!(!a.overlaps(b));
        }
    }

    for coord in &range {
        let owners = tiles.iter().filter(|b| b.range().contains(&coord)).count();
        assert_eq!(owners, 1, "{coord} owned by {owners} tiles");
    }
}

#[test]
fn block_index_survives_json_inside_a_larger_document() {
    let blocks = tile_blocks(&fixtures::grid_2x3(), 0, 1);
    let doc = serde_json::json!({ "tensor": "x", "blocks": blocks });
    let text = serde_json::to_string(&doc).unwrap();
    let back: serde_json::Value = serde_json::from_str(&text).unwrap();
    let parsed: Vec<BlockIndex> = serde_json::from_value(back["blocks"].clone()).unwrap();
    assert_eq!(parsed, blocks);
}

#[test]
fn text_form_round_trips_for_fixtures() {
    for (name, range) in standard_ranges() {
        let text = range.to_string();
        assert_eq!(text.parse::<ZRange>().unwrap(), range, "{name}: {text}");
    }
}

#[test]
fn reused_visitor_matches_cloned_iteration() {
    for (name, range) in standard_ranges() {
        let mut reused = Vec::new();
        range.for_each_coord(BufferOwnership::Reused, |c| reused.push(Coord::from_slice(&c)));
        assert_eq!(reused, range.coords(), "{name}");
    }
}
