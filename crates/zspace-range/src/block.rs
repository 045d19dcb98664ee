//! Block indices: a [`ZRange`] named as a tensor partition.

use crate::range::ZRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a block.
///
/// Serializes untagged: a number for [`Key`](Self::Key), a string for
/// [`Name`](Self::Name).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockId {
    /// Numeric key.
    Key(u64),
    /// Human-readable name.
    Name(String),
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => write!(f, "#{k}"),
            Self::Name(n) => f.write_str(n),
        }
    }
}

impl From<u64> for BlockId {
    fn from(v: u64) -> Self {
        Self::Key(v)
    }
}

impl From<&str> for BlockId {
    fn from(v: &str) -> Self {
        Self::Name(v.to_string())
    }
}

impl From<String> for BlockId {
    fn from(v: String) -> Self {
        Self::Name(v)
    }
}

/// A range paired with the identity of the partition it describes.
///
/// Created once when a partition is declared and never mutated. Holds no
/// reference to the tensor it indexes; equality and hashing cover both the
/// range and the identity.
///
/// # Examples
///
/// ```
/// use zspace_range::{BlockIndex, ZRange};
///
/// let range = ZRange::from_shape([4, 8]).unwrap();
/// let block = BlockIndex::of(range.clone(), "lhs");
/// assert_eq!(block.range(), &range);
/// assert_eq!(block.to_string(), "lhs@zr[0:4, 0:8]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockIndex {
    id: BlockId,
    range: ZRange,
}

impl BlockIndex {
    /// Pair `range` with `id`. The range is already valid by construction.
    pub fn of(range: ZRange, id: impl Into<BlockId>) -> Self {
        Self {
            id: id.into(),
            range,
        }
    }

    /// Alias for [`BlockIndex::of`].
    pub fn new(range: ZRange, id: impl Into<BlockId>) -> Self {
        Self::of(range, id)
    }

    /// The indexed range.
    pub fn range(&self) -> &ZRange {
        &self.range
    }

    /// The block identity.
    pub fn id(&self) -> &BlockId {
        &self.id
    }

    /// Split into `(range, id)`.
    pub fn into_parts(self) -> (ZRange, BlockId) {
        (self.range, self.id)
    }
}

impl fmt::Display for BlockIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.range)
    }
}
