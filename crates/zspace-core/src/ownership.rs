//! Buffer ownership policy for array-producing operations.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Whether an operation hands back the backing storage or a defensive copy.
///
/// Operations that would otherwise have to choose between aliasing and
/// copying on the caller's behalf take a `BufferOwnership` instead.
///
/// - [`Reused`](Self::Reused): the caller receives the same storage. No
///   allocation happens; the caller accepts aliasing and must treat the
///   result as read-only.
/// - [`Cloned`](Self::Cloned): the caller receives a fresh, exclusively
///   owned buffer with identical contents (exactly one allocation).
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use zspace_core::BufferOwnership;
///
/// let shape = vec![2, 3];
///
/// let reused = BufferOwnership::Reused.apply_slice(&shape);
/// assert!(matches!(reused, Cow::Borrowed(_)));
/// assert_eq!(reused.as_ptr(), shape.as_ptr());
///
/// let cloned = BufferOwnership::Cloned.apply_slice(&shape);
/// assert!(matches!(cloned, Cow::Owned(_)));
/// assert_eq!(&*cloned, &shape[..]);
/// assert_ne!(cloned.as_ptr(), shape.as_ptr());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BufferOwnership {
    /// Return the input storage unchanged.
    Reused,
    /// Return an independent copy.
    #[default]
    Cloned,
}

impl BufferOwnership {
    /// Apply the policy to `buffer`.
    ///
    /// `Reused` returns `buffer` itself, borrowed or owned as it came in.
    /// `Cloned` always returns a newly allocated `Cow::Owned`, even when
    /// the input was already owned, so the result never shares storage
    /// with the input.
    pub fn apply<'a, T: Clone>(self, buffer: Cow<'a, [T]>) -> Cow<'a, [T]> {
        match self {
            Self::Reused => buffer,
            Self::Cloned => Cow::Owned(buffer.to_vec()),
        }
    }

    /// Apply the policy to a borrowed slice.
    pub fn apply_slice<T: Clone>(self, buffer: &[T]) -> Cow<'_, [T]> {
        self.apply(Cow::Borrowed(buffer))
    }

    /// `true` for [`Reused`](Self::Reused).
    pub fn is_reused(self) -> bool {
        matches!(self, Self::Reused)
    }
}
