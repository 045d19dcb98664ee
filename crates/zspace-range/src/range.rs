//! Half-open axis-aligned ranges over the integer lattice.

use crate::iter::{advance_row_major, CoordIter};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;
use zspace_core::{resolve_dim, BufferOwnership, Coord, CoordBuf, ZSpaceError};

/// A box `[start, end)` of lattice points.
///
/// Every axis satisfies `start[i] <= end[i]`; the lower bound is inclusive
/// and the upper bound exclusive. A range with `start[i] == end[i]` on any
/// axis is empty: it has size zero and contains no point, but it is still a
/// valid value (it can describe a partition surface). A 0-dim range holds
/// exactly one point, the 0-dim coordinate.
///
/// Ranges are immutable. `shape` and `size` are computed once at
/// construction. Equality and hashing are structural.
///
/// Serializes as `{"start": [...], "end": [...]}`; deserialization runs the
/// same validation as [`ZRange::of`].
///
/// # Examples
///
/// ```
/// use zspace_core::Coord;
/// use zspace_range::ZRange;
///
/// let r = ZRange::of([0, 0], [2, 3]).unwrap();
/// assert_eq!(r.shape().as_slice(), &[2, 3]);
/// assert_eq!(r.size(), 6);
/// assert!(r.contains(&[1, 2]));
/// assert!(!r.contains(&[2, 0]));
///
/// let coords: Vec<Coord> = r.iter().collect();
/// assert_eq!(coords[1], Coord::from([0, 1]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds", into = "RangeBounds")]
pub struct ZRange {
    start: Coord,
    end: Coord,
    shape: Coord,
    size: usize,
}

/// Canonical field layout for (de)serialization. Not yet validated.
#[derive(Serialize, Deserialize)]
pub(crate) struct RangeBounds {
    pub(crate) start: Coord,
    pub(crate) end: Coord,
}

impl TryFrom<RangeBounds> for ZRange {
    type Error = ZSpaceError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        ZRange::of(bounds.start, bounds.end)
    }
}

impl From<ZRange> for RangeBounds {
    fn from(range: ZRange) -> Self {
        RangeBounds {
            start: range.start,
            end: range.end,
        }
    }
}

impl ZRange {
    /// Construct `[start, end)`.
    ///
    /// Fails with [`ZSpaceError::DimensionMismatch`] if `start` and `end`
    /// have different dimensionality, and with
    /// [`ZSpaceError::InvalidRange`] if `start[i] > end[i]` on any axis or
    /// the size does not fit in `usize`.
    pub fn of(start: impl Into<Coord>, end: impl Into<Coord>) -> Result<Self, ZSpaceError> {
        let start = start.into();
        let end = end.into();
        start
            .check_same_ndim(&end, "ZRange::of")
            .inspect_err(|err| debug!(%err, "rejected range bounds"))?;

        match measure(&start, &end) {
            Ok((shape, size)) => Ok(Self {
                start,
                end,
                shape: Coord::new(shape),
                size,
            }),
            Err(reason) => {
                debug!(%start, %end, %reason, "rejected range bounds");
                Err(ZSpaceError::InvalidRange { start, end, reason })
            }
        }
    }

    /// Alias for [`ZRange::of`].
    pub fn new(start: impl Into<Coord>, end: impl Into<Coord>) -> Result<Self, ZSpaceError> {
        Self::of(start, end)
    }

    /// The range `[0, shape)`.
    ///
    /// Fails with [`ZSpaceError::InvalidRange`] if any axis is negative.
    pub fn from_shape(shape: impl Into<Coord>) -> Result<Self, ZSpaceError> {
        let end = shape.into();
        Self::of(Coord::zeros(end.ndim()), end)
    }

    /// The 0-dim range. It has size one.
    pub fn scalar() -> Self {
        Self {
            start: Coord::scalar(),
            end: Coord::scalar(),
            shape: Coord::scalar(),
            size: 1,
        }
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> &Coord {
        &self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> &Coord {
        &self.end
    }

    /// Per-axis extent, `end[i] - start[i]`.
    pub fn shape(&self) -> &Coord {
        &self.shape
    }

    /// The shape as a caller-visible buffer under the given ownership
    /// policy: [`Reused`](BufferOwnership::Reused) lends the range's own
    /// storage, [`Cloned`](BufferOwnership::Cloned) returns a fresh copy.
    pub fn shape_with(&self, ownership: BufferOwnership) -> Cow<'_, [i32]> {
        ownership.apply_slice(self.shape.as_slice())
    }

    /// Number of lattice points in the range.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.start.ndim()
    }

    /// `true` if the range holds no points.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Resolve a possibly-negative axis index against this range.
    pub fn resolve_dim(&self, dim: isize) -> Result<usize, ZSpaceError> {
        resolve_dim(dim, self.ndim())
    }

    /// `true` iff `coord` has this range's dimensionality and
    /// `start[i] <= coord[i] < end[i]` on every axis.
    ///
    /// An empty range contains nothing; a 0-dim range contains the 0-dim
    /// coordinate.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.ndim()
            && self
                .start
                .iter()
                .zip(self.end.iter())
                .zip(coord)
                .all(|((s, e), c)| s <= c && c < e)
    }

    /// `true` if every point of `other` lies in `self`, taken as
    /// `start <= other.start && other.end <= end`.
    ///
    /// Empty ranges whose bounds fit are contained. All 0-dim ranges
    /// contain each other, since the comparisons are vacuous on zero axes.
    ///
    /// A dimensionality mismatch answers `false` rather than failing: no
    /// point of one lattice lies in a range of another, so this stays a
    /// plain predicate. Use [`intersect`](Self::intersect) when the mismatch
    /// should surface as [`ZSpaceError::DimensionMismatch`].
    pub fn contains_range(&self, other: &ZRange) -> bool {
        if self.ndim() != other.ndim() {
            return false;
        }
        self.start
            .iter()
            .zip(other.start.iter())
            .all(|(s, o)| s <= o)
            && other.end.iter().zip(self.end.iter()).all(|(o, e)| o <= e)
    }

    /// The greatest point in the range, `end - 1` on every axis.
    ///
    /// Fails with [`ZSpaceError::IndexOutOfRange`] on an empty range.
    pub fn inclusive_end(&self) -> Result<Coord, ZSpaceError> {
        if self.is_empty() {
            return Err(ZSpaceError::IndexOutOfRange {
                context: "ZRange::inclusive_end",
                index: 0,
                size: 0,
            });
        }
        Ok(self.end.iter().map(|e| e - 1).collect())
    }

    /// The `index`-th point in row-major order.
    ///
    /// Fails with [`ZSpaceError::IndexOutOfRange`] if `index >= size()`.
    pub fn coord_at(&self, index: usize) -> Result<Coord, ZSpaceError> {
        if index >= self.size {
            return Err(ZSpaceError::IndexOutOfRange {
                context: "ZRange::coord_at",
                index: index as i128,
                size: self.size,
            });
        }
        let mut out = CoordBuf::from_elem(0, self.ndim());
        let mut rem = index;
        for axis in (0..self.ndim()).rev() {
            let extent = self.shape[axis] as usize;
            out[axis] = self.start[axis] + (rem % extent) as i32;
            rem /= extent;
        }
        Ok(Coord::new(out))
    }

    /// Row-major position of `coord`, the inverse of
    /// [`coord_at`](Self::coord_at). `None` if the range does not contain it.
    pub fn rank_of(&self, coord: &[i32]) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let mut rank = 0usize;
        for axis in 0..self.ndim() {
            let extent = self.shape[axis] as usize;
            rank = rank * extent + (coord[axis] - self.start[axis]) as usize;
        }
        Some(rank)
    }

    /// Lazy row-major iterator over the points of the range.
    ///
    /// Each call starts a fresh traversal; iterators never share state.
    pub fn iter(&self) -> CoordIter<'_> {
        CoordIter::new(self)
    }

    /// All points in row-major order.
    pub fn coords(&self) -> Vec<Coord> {
        self.iter().collect()
    }

    /// Visit every point in row-major order without allocating per point.
    ///
    /// With [`BufferOwnership::Reused`] the visitor is lent the same cursor
    /// buffer on every call, overwritten between calls; it must copy out
    /// anything it keeps. With [`BufferOwnership::Cloned`] every call
    /// receives an independently owned buffer.
    pub fn for_each_coord<F>(&self, ownership: BufferOwnership, mut visitor: F)
    where
        F: FnMut(Cow<'_, [i32]>),
    {
        let mut cursor: CoordBuf = self.start.clone().into_buf();
        for step in 0..self.size {
            if step > 0 {
                advance_row_major(&mut cursor, &self.start, &self.end);
            }
            visitor(ownership.apply_slice(cursor.as_slice()));
        }
    }
}

impl<'a> IntoIterator for &'a ZRange {
    type Item = Coord;
    type IntoIter = CoordIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compute `(shape, size)` or the reason the bounds are invalid.
fn measure(start: &Coord, end: &Coord) -> Result<(CoordBuf, usize), String> {
    let mut shape = CoordBuf::with_capacity(start.ndim());
    let mut size = 1usize;
    for (axis, (&s, &e)) in start.iter().zip(end.iter()).enumerate() {
        if s > e {
            return Err(format!("start ({s}) > end ({e}) on axis {axis}"));
        }
        let extent = e
            .checked_sub(s)
            .ok_or_else(|| format!("extent on axis {axis} overflows i32"))?;
        size = size
            .checked_mul(extent as usize)
            .ok_or_else(|| "size overflows usize".to_string())?;
        shape.push(extent);
    }
    Ok((shape, size))
}
