use std::sync::Barrier;
use std::thread;

use crossbeam_channel::unbounded;
use zspace_core::Coord;
use zspace_range::ZRange;
use zspace_test_utils::{fixtures, init_tracing};

const READERS: usize = 8;

#[test]
fn concurrent_iterations_each_see_the_full_sequence() {
    init_tracing();
    let range = ZRange::from_shape([7, 5, 3]).unwrap();
    let expected = range.coords();
    let barrier = Barrier::new(READERS);
    let (tx, rx) = unbounded::<(usize, Vec<Coord>)>();

    thread::scope(|s| {
        for reader in 0..READERS {
            let tx = tx.clone();
            let range = &range;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                let mut seen = Vec::with_capacity(range.size());
                for coord in range.iter() {
                    seen.push(coord);
                    thread::yield_now();
                }
                tx.send((reader, seen)).unwrap();
            });
        }
    });
    drop(tx);

    let results: Vec<_> = rx.iter().collect();
    assert_eq!(results.len(), READERS);
    for (reader, seen) in results {
        assert_eq!(seen, expected, "reader {reader} diverged");
    }
}

#[test]
fn iterators_interleaved_on_one_thread_do_not_share_state() {
    let range = fixtures::offset_box();
    let mut a = range.iter();
    let mut b = range.iter();
    let mut from_a = Vec::new();
    let mut from_b = Vec::new();

    b.next();
    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (x, y) => {
                from_a.extend(x);
                from_b.extend(y);
            }
        }
    }

    let all = range.coords();
    assert_eq!(from_a, all);
    assert_eq!(from_b, all[1..]);
}
