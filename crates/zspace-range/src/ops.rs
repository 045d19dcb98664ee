//! Range algebra: intersection, bounding, translation, splitting, and
//! axis rearrangement.
//!
//! Every operation returns a new [`ZRange`]; inputs are never modified.

use crate::range::ZRange;
use tracing::trace;
use zspace_core::{Coord, ZSpaceError};

impl ZRange {
    /// The overlap of `self` and `other`.
    ///
    /// When the ranges are disjoint the result is an explicit empty range:
    /// its start is the per-axis maximum of the two starts and its end is
    /// clamped up to that start. The result depends only on the two inputs,
    /// not their order, so `a.intersect(&b) == b.intersect(&a)`.
    ///
    /// Fails with [`ZSpaceError::DimensionMismatch`] if the ranges have
    /// different dimensionality.
    ///
    /// # Examples
    ///
    /// ```
    /// use zspace_range::ZRange;
    ///
    /// let a = ZRange::of([0, 0], [4, 4]).unwrap();
    /// let b = ZRange::of([2, 3], [6, 9]).unwrap();
    /// assert_eq!(a.intersect(&b).unwrap(), ZRange::of([2, 3], [4, 4]).unwrap());
    ///
    /// let far = ZRange::of([10, 10], [12, 12]).unwrap();
    /// assert!(a.intersect(&far).unwrap().is_empty());
    /// ```
    pub fn intersect(&self, other: &ZRange) -> Result<ZRange, ZSpaceError> {
        self.start()
            .check_same_ndim(other.start(), "ZRange::intersect")?;
        let start = self.start().maximum(other.start())?;
        let end = self.end().minimum(other.end())?.maximum(&start)?;
        ZRange::of(start, end)
    }

    /// `true` if the ranges share at least one point.
    pub fn overlaps(&self, other: &ZRange) -> bool {
        self.intersect(other).is_ok_and(|r| !r.is_empty())
    }

    /// Shift the whole range by `delta`.
    ///
    /// Fails on dimensionality mismatch or if a bound overflows `i32`.
    pub fn translate(&self, delta: &Coord) -> Result<ZRange, ZSpaceError> {
        ZRange::of(
            self.start().checked_add(delta)?,
            self.end().checked_add(delta)?,
        )
    }

    /// Reorder axes: axis `i` of the result is axis `perm[i]` of `self`.
    pub fn permute(&self, perm: &[usize]) -> Result<ZRange, ZSpaceError> {
        ZRange::of(self.start().permute(perm)?, self.end().permute(perm)?)
    }

    /// The range over `self.ndim() + other.ndim()` axes whose points are
    /// every `self` point followed by every `other` point.
    pub fn cartesian_product(&self, other: &ZRange) -> Result<ZRange, ZSpaceError> {
        ZRange::of(
            self.start().concat(other.start()),
            self.end().concat(other.end()),
        )
    }

    /// Split along axis `dim` into chunks of `chunk_size`; the last chunk
    /// takes the remainder.
    ///
    /// The chunks are non-overlapping and cover `self` exactly. A chunk
    /// size at least as large as the axis yields `[self]`. `dim` may be
    /// negative. Fails with [`ZSpaceError::InvalidArgument`] if
    /// `chunk_size <= 0`.
    pub fn split(&self, dim: isize, chunk_size: i32) -> Result<Vec<ZRange>, ZSpaceError> {
        let dim = self.resolve_dim(dim)?;
        if chunk_size <= 0 {
            return Err(ZSpaceError::InvalidArgument {
                reason: format!("chunk size must be > 0, got {chunk_size}"),
            });
        }
        let extent = self.shape()[dim];
        if chunk_size >= extent {
            return Ok(vec![self.clone()]);
        }
        let mut chunks = vec![chunk_size; (extent / chunk_size) as usize];
        if extent % chunk_size != 0 {
            chunks.push(extent % chunk_size);
        }
        self.split_unchecked(dim, &chunks)
    }

    /// Split along axis `dim` into chunks of the given sizes.
    ///
    /// Every chunk must be positive and the sizes must sum to the axis
    /// extent, otherwise [`ZSpaceError::InvalidArgument`]. On a zero-extent
    /// axis the only valid list is empty, and the result is `[self]`, the
    /// same as [`split`](Self::split).
    pub fn split_chunks(&self, dim: isize, chunks: &[i32]) -> Result<Vec<ZRange>, ZSpaceError> {
        let dim = self.resolve_dim(dim)?;
        if let Some(bad) = chunks.iter().find(|&&k| k <= 0) {
            return Err(ZSpaceError::InvalidArgument {
                reason: format!("chunk size must be > 0, got {bad} in {chunks:?}"),
            });
        }
        let extent = self.shape()[dim];
        let total: i64 = chunks.iter().map(|&k| i64::from(k)).sum();
        if total != i64::from(extent) {
            return Err(ZSpaceError::InvalidArgument {
                reason: format!(
                    "chunk sizes {chunks:?} sum to {total}, expected axis {dim} extent {extent}"
                ),
            });
        }
        self.split_unchecked(dim, chunks)
    }

    fn split_unchecked(&self, dim: usize, chunks: &[i32]) -> Result<Vec<ZRange>, ZSpaceError> {
        if chunks.len() <= 1 {
            return Ok(vec![self.clone()]);
        }
        trace!(range = %self, dim, chunks = chunks.len(), "splitting range");
        let mut start = self.start().to_vec();
        let mut end = self.end().to_vec();
        let mut out = Vec::with_capacity(chunks.len());
        for &k in chunks {
            end[dim] = start[dim] + k;
            out.push(ZRange::of(start.clone(), end.clone())?);
            start[dim] = end[dim];
        }
        Ok(out)
    }
}

/// The smallest range containing every range in `ranges`.
///
/// Fails with [`ZSpaceError::InvalidArgument`] on an empty input and with
/// [`ZSpaceError::DimensionMismatch`] if the inputs disagree on
/// dimensionality.
pub fn bounding_range<'a, I>(ranges: I) -> Result<ZRange, ZSpaceError>
where
    I: IntoIterator<Item = &'a ZRange>,
{
    let mut iter = ranges.into_iter();
    let first = iter.next().ok_or_else(|| ZSpaceError::InvalidArgument {
        reason: "bounding_range of no ranges".to_string(),
    })?;
    let mut start = first.start().clone();
    let mut end = first.end().clone();
    for r in iter {
        start = start.minimum(r.start())?;
        end = end.maximum(r.end())?;
    }
    ZRange::of(start, end)
}
