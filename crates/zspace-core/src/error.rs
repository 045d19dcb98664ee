//! Error types for lattice operations.
//!
//! Every failure carries the operands that caused it so that an external
//! validation collector can report it next to unrelated issues. Collectors
//! that only need a category can match on [`ErrorKind`] instead of the
//! full payload.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Category of a [`ZSpaceError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operands have different dimensionality.
    DimensionMismatch,
    /// A range bound is inverted or otherwise unrepresentable.
    InvalidRange,
    /// An index is outside the addressable bounds.
    IndexOutOfRange,
    /// An argument other than a bound was rejected (chunks, permutations).
    InvalidArgument,
    /// Text could not be parsed as a lattice value.
    Parse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DimensionMismatch => "dimension mismatch",
            Self::InvalidRange => "invalid range",
            Self::IndexOutOfRange => "index out of range",
            Self::InvalidArgument => "invalid argument",
            Self::Parse => "parse error",
        };
        f.write_str(name)
    }
}

/// Errors arising from coordinate and range construction or queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ZSpaceError {
    /// Two operands that must share a dimensionality do not.
    DimensionMismatch {
        /// Which operation detected the mismatch.
        context: &'static str,
        /// Dimensionality of the left-hand (reference) operand.
        expected: usize,
        /// Dimensionality of the offending operand.
        actual: usize,
    },
    /// `start[i] > end[i]` on some axis, or the bounds are unrepresentable.
    InvalidRange {
        /// The requested start bound.
        start: Coord,
        /// The requested end bound.
        end: Coord,
        /// What went wrong.
        reason: String,
    },
    /// An index is outside `[0, size)` (or `[-size, size)` where negative
    /// indexing is accepted).
    IndexOutOfRange {
        /// Which operation detected the bad index.
        context: &'static str,
        /// The requested index, wide enough to hold any `usize` position
        /// and any negative axis index without loss.
        index: i128,
        /// The number of addressable positions.
        size: usize,
    },
    /// An argument was rejected for a reason other than its bounds.
    InvalidArgument {
        /// What went wrong.
        reason: String,
    },
    /// Text could not be parsed.
    Parse {
        /// The rejected input.
        input: String,
        /// What went wrong.
        reason: String,
    },
}

impl ZSpaceError {
    /// The payload-free category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }

    /// Shorthand for [`ZSpaceError::DimensionMismatch`].
    pub fn dimension_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            actual,
        }
    }
}

impl fmt::Display for ZSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{context}: dimension mismatch, expected {expected} axes, got {actual}"
                )
            }
            Self::InvalidRange { start, end, reason } => {
                write!(f, "invalid range [{start}, {end}): {reason}")
            }
            Self::IndexOutOfRange {
                context,
                index,
                size,
            } => {
                write!(f, "{context}: index {index} out of range [0, {size})")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Parse { input, reason } => write!(f, "cannot parse {input:?}: {reason}"),
        }
    }
}

impl Error for ZSpaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = ZSpaceError::dimension_mismatch("test", 2, 3);
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);

        let err = ZSpaceError::InvalidRange {
            start: Coord::from([2, 0]),
            end: Coord::from([1, 3]),
            reason: "start > end on axis 0".into(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidRange);

        let err = ZSpaceError::IndexOutOfRange {
            context: "test",
            index: 7,
            size: 6,
        };
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    }

    #[test]
    fn display_carries_operands() {
        let err = ZSpaceError::InvalidRange {
            start: Coord::from([2, 0]),
            end: Coord::from([1, 3]),
            reason: "start > end on axis 0".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid range [[2, 0], [1, 3]): start > end on axis 0"
        );

        let err = ZSpaceError::dimension_mismatch("ZRange::of", 2, 3);
        assert_eq!(
            err.to_string(),
            "ZRange::of: dimension mismatch, expected 2 axes, got 3"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: Error + Send + Sync + 'static>() {}
        assert_error::<ZSpaceError>();
    }
}
