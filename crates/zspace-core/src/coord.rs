//! The [`Coord`] lattice point.

use crate::error::ZSpaceError;
use crate::index::{check_permutation, resolve_dim};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Number of axes a [`Coord`] stores without a heap allocation.
pub const INLINE_DIMS: usize = 4;

/// Backing storage for a [`Coord`].
pub type CoordBuf = SmallVec<[i32; INLINE_DIMS]>;

/// An immutable point in an N-dimensional integer lattice.
///
/// The dimensionality `d` is fixed at construction and may be zero (the
/// single point of a 0-dim space). Operations that combine two coordinates
/// require equal dimensionality and report
/// [`ZSpaceError::DimensionMismatch`] otherwise.
///
/// `Ord` is lexicographic, which for equal-length coordinates is row-major
/// order. Use [`dominated_by`](Self::dominated_by) for the per-axis partial
/// order.
///
/// Serializes as a flat integer sequence.
///
/// # Examples
///
/// ```
/// use zspace_core::Coord;
///
/// let a = Coord::from([1, 2]);
/// let b = Coord::from([3, 2]);
/// assert_eq!(a.ndim(), 2);
/// assert!(a.dominated_by(&b).unwrap());
/// assert_eq!(a.checked_add(&b).unwrap(), Coord::from([4, 4]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coord(CoordBuf);

impl Coord {
    /// Wrap an existing buffer.
    pub fn new(buf: CoordBuf) -> Self {
        Self(buf)
    }

    /// Copy a coordinate out of a slice.
    pub fn from_slice(values: &[i32]) -> Self {
        Self(SmallVec::from_slice(values))
    }

    /// The 0-dim coordinate.
    pub fn scalar() -> Self {
        Self(SmallVec::new())
    }

    /// A coordinate of `ndim` zeros.
    pub fn zeros(ndim: usize) -> Self {
        Self::filled(ndim, 0)
    }

    /// A coordinate of `ndim` copies of `value`.
    pub fn filled(ndim: usize, value: i32) -> Self {
        Self(SmallVec::from_elem(value, ndim))
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// The coordinate values.
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Consume the coordinate, returning its buffer.
    pub fn into_buf(self) -> CoordBuf {
        self.0
    }

    /// Value on axis `dim`; negative `dim` counts from the last axis.
    pub fn axis(&self, dim: isize) -> Result<i32, ZSpaceError> {
        let dim = resolve_dim(dim, self.ndim())?;
        Ok(self.0[dim])
    }

    /// Fail with [`ZSpaceError::DimensionMismatch`] unless `other` has the
    /// same number of axes.
    pub fn check_same_ndim(&self, other: &Coord, context: &'static str) -> Result<(), ZSpaceError> {
        if self.ndim() != other.ndim() {
            return Err(ZSpaceError::dimension_mismatch(
                context,
                self.ndim(),
                other.ndim(),
            ));
        }
        Ok(())
    }

    /// `true` if `self[i] <= other[i]` on every axis.
    ///
    /// Vacuously true for 0-dim coordinates.
    pub fn dominated_by(&self, other: &Coord) -> Result<bool, ZSpaceError> {
        self.check_same_ndim(other, "Coord::dominated_by")?;
        Ok(self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b))
    }

    /// `true` if `self[i] < other[i]` on every axis.
    ///
    /// Vacuously true for 0-dim coordinates.
    pub fn strictly_dominated_by(&self, other: &Coord) -> Result<bool, ZSpaceError> {
        self.check_same_ndim(other, "Coord::strictly_dominated_by")?;
        Ok(self.0.iter().zip(other.0.iter()).all(|(a, b)| a < b))
    }

    /// Cell-wise sum. Fails on dimensionality mismatch or `i32` overflow.
    pub fn checked_add(&self, other: &Coord) -> Result<Coord, ZSpaceError> {
        self.zip_checked(other, "Coord::checked_add", i32::checked_add)
    }

    /// Cell-wise difference. Fails on dimensionality mismatch or `i32` overflow.
    pub fn checked_sub(&self, other: &Coord) -> Result<Coord, ZSpaceError> {
        self.zip_checked(other, "Coord::checked_sub", i32::checked_sub)
    }

    /// Cell-wise minimum.
    pub fn minimum(&self, other: &Coord) -> Result<Coord, ZSpaceError> {
        self.zip_checked(other, "Coord::minimum", |a, b| Some(a.min(b)))
    }

    /// Cell-wise maximum.
    pub fn maximum(&self, other: &Coord) -> Result<Coord, ZSpaceError> {
        self.zip_checked(other, "Coord::maximum", |a, b| Some(a.max(b)))
    }

    /// Reorder axes: `result[i] = self[perm[i]]`.
    pub fn permute(&self, perm: &[usize]) -> Result<Coord, ZSpaceError> {
        check_permutation(perm, self.ndim())?;
        Ok(perm.iter().map(|&p| self.0[p]).collect())
    }

    /// Append the axes of `other` after the axes of `self`.
    pub fn concat(&self, other: &Coord) -> Coord {
        self.0.iter().chain(other.0.iter()).copied().collect()
    }

    fn zip_checked(
        &self,
        other: &Coord,
        context: &'static str,
        op: impl Fn(i32, i32) -> Option<i32>,
    ) -> Result<Coord, ZSpaceError> {
        self.check_same_ndim(other, context)?;
        let mut out = CoordBuf::with_capacity(self.ndim());
        for (axis, (&a, &b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            let v = op(a, b).ok_or_else(|| ZSpaceError::InvalidArgument {
                reason: format!("{context}: i32 overflow on axis {axis} ({self} vs {other})"),
            })?;
            out.push(v);
        }
        Ok(Self(out))
    }
}

impl Deref for Coord {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.0
    }
}

impl AsRef<[i32]> for Coord {
    fn as_ref(&self) -> &[i32] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Coord {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<i32> for Coord {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<CoordBuf> for Coord {
    fn from(buf: CoordBuf) -> Self {
        Self(buf)
    }
}

impl From<Vec<i32>> for Coord {
    fn from(v: Vec<i32>) -> Self {
        Self(SmallVec::from_vec(v))
    }
}

impl From<&[i32]> for Coord {
    fn from(v: &[i32]) -> Self {
        Self::from_slice(v)
    }
}

impl<const N: usize> From<[i32; N]> for Coord {
    fn from(v: [i32; N]) -> Self {
        Self::from_slice(&v)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}
