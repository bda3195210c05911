//! Error type shared by `CustomList` and its iterators.

use thiserror::Error;

/// Failure of a list or iterator operation.
///
/// Every variant is a programmatic signal: it is returned synchronously and
/// the list is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The index is outside the range accepted by the operation.
    ///
    /// Reads accept `[0, size)`, insertions accept `[0, size]`.
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// A required collection argument was absent.
    #[error("collection argument is absent")]
    NullArgument,

    /// `next` was called on an exhausted iterator.
    #[error("no more elements")]
    NoSuchElement,

    /// Iterator `remove` without a successful `next` since the last `remove`.
    #[error("remove called without a preceding next")]
    IllegalState,

    /// The list was structurally modified after the iterator took its snapshot,
    /// through some channel other than that iterator.
    #[error("list modified during iteration (expected generation {expected}, found {actual})")]
    ConcurrentModification { expected: usize, actual: usize },
}

pub type Result<T, E = ListError> = core::result::Result<T, E>;
