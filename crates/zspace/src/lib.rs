//! ZSpace: integer-lattice coordinates and half-open ranges.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the ZSpace sub-crates. Adding `zspace` as a single dependency is enough
//! for most users.
//!
//! # Quick start
//!
//! ```rust
//! use zspace::prelude::*;
//!
//! let range = ZRange::of([0, 1], [2, 3]).unwrap();
//! assert_eq!(range.shape().as_slice(), &[2, 2]);
//! assert_eq!(range.size(), 4);
//! assert!(range.contains(&[1, 2]));
//!
//! // Row-major: the last axis varies fastest.
//! let coords = range.iter().map_to_sequence(|c| c.to_vec());
//! assert_eq!(coords, vec![vec![0, 1], vec![0, 2], vec![1, 1], vec![1, 2]]);
//!
//! // Inverted bounds are a typed error.
//! let err = ZRange::of([2, 0], [1, 3]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidRange);
//!
//! // Name the lower half as a tensor partition.
//! let halves = range.split(0, 1).unwrap();
//! let block = BlockIndex::of(halves[0].clone(), "lo");
//! assert_eq!(block.to_string(), "lo@zr[0:1, 1:3]");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `zspace-core` | `Coord`, errors, `BufferOwnership`, sequence helpers |
//! | [`range`] | `zspace-range` | `ZRange`, iteration, range algebra, `BlockIndex` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, errors, and buffer ownership (`zspace-core`).
///
/// Contains [`types::Coord`], the [`types::ZSpaceError`] taxonomy, and the
/// [`types::Streamable`] helpers.
pub use zspace_core as types;

/// Ranges, iteration, and block indices (`zspace-range`).
///
/// Provides [`range::ZRange`], its row-major [`range::CoordIter`], and
/// [`range::BlockIndex`].
pub use zspace_range as range;

/// Common imports for typical ZSpace usage.
///
/// ```rust
/// use zspace::prelude::*;
/// ```
pub mod prelude {
    // Core values
    pub use zspace_core::{BufferOwnership, Coord, Streamable};

    // Errors
    pub use zspace_core::{ErrorKind, ZSpaceError};

    // Ranges
    pub use zspace_range::{bounding_range, BlockId, BlockIndex, CoordIter, ZRange};
}
