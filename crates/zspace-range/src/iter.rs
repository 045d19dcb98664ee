//! Row-major coordinate iteration.

use crate::range::ZRange;
use std::iter::FusedIterator;
use zspace_core::{Coord, CoordBuf};

/// Lazy row-major iterator over the points of a [`ZRange`].
///
/// Created by [`ZRange::iter`]. The last axis varies fastest. Each iterator
/// owns its cursor, so any number of iterators over the same range can run
/// concurrently without coordination.
#[derive(Clone, Debug)]
pub struct CoordIter<'a> {
    range: &'a ZRange,
    cursor: Option<CoordBuf>,
    remaining: usize,
}

impl<'a> CoordIter<'a> {
    pub(crate) fn new(range: &'a ZRange) -> Self {
        Self {
            range,
            cursor: None,
            remaining: range.size(),
        }
    }

    /// The range being traversed.
    pub fn range(&self) -> &'a ZRange {
        self.range
    }
}

impl Iterator for CoordIter<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let range = self.range;
        match self.cursor.as_mut() {
            Some(cursor) => advance_row_major(cursor, range.start(), range.end()),
            None => self.cursor = Some(range.start().clone().into_buf()),
        }
        self.cursor.as_deref().map(Coord::from_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Coord> {
        if n >= self.remaining {
            self.remaining = 0;
            return None;
        }
        let index = self.range.size() - self.remaining + n;
        let coord = self.range.coord_at(index).ok()?;
        self.remaining -= n + 1;
        self.cursor = Some(CoordBuf::from_slice(&coord));
        Some(coord)
    }
}

impl ExactSizeIterator for CoordIter<'_> {}

impl FusedIterator for CoordIter<'_> {}

/// Step `cursor` to the next point of `[start, end)` in row-major order.
///
/// The cursor must not be the last point of the range.
pub(crate) fn advance_row_major(cursor: &mut [i32], start: &[i32], end: &[i32]) {
    for axis in (0..cursor.len()).rev() {
        cursor[axis] += 1;
        if cursor[axis] < end[axis] {
            return;
        }
        cursor[axis] = start[axis];
    }
}
