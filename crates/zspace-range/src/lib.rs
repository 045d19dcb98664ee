//! Lattice ranges for ZSpace.
//!
//! This crate defines [`ZRange`], the half-open axis-aligned box through
//! which all coordinate iteration and containment queries flow, along with
//! the range algebra built on it and [`BlockIndex`], which names a range as
//! a tensor partition.
//!
//! # Iteration
//!
//! - [`ZRange::iter`]: lazy row-major [`CoordIter`], one owned
//!   [`Coord`](zspace_core::Coord) per point.
//! - [`ZRange::for_each_coord`]: visitor form that lends or clones a single
//!   cursor buffer according to a [`BufferOwnership`](zspace_core::BufferOwnership).
//!
//! # Text and serde forms
//!
//! Ranges print as `zr[0:2, 1:3]` and parse from that form or from JSON
//! `{"start": [...], "end": [...]}`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod format;
pub mod iter;
pub mod ops;
pub mod range;

#[cfg(test)]
pub(crate) mod compliance;

pub use block::{BlockId, BlockIndex};
pub use iter::CoordIter;
pub use ops::bounding_range;
pub use range::ZRange;
