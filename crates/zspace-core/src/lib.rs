//! Core types for the ZSpace integer-lattice model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental values used throughout the ZSpace workspace:
//! lattice coordinates, the error taxonomy, the buffer-ownership policy,
//! and sequence helpers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod index;
pub mod ownership;
pub mod stream;

pub use coord::{Coord, CoordBuf, INLINE_DIMS};
pub use error::{ErrorKind, ZSpaceError};
pub use index::{check_permutation, resolve_dim};
pub use ownership::BufferOwnership;
pub use stream::{for_each_in_order, to_sequence, Streamable};
