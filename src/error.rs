//! Errors reported by `ContinuousQueue`.

use thiserror::Error;

/// Error value for queue operations that cannot be satisfied.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// A removal or peek was attempted on a queue with no live elements.
    #[error("queue is empty")]
    Empty,

    /// The absolute index is not one the queue will resolve.
    ///
    /// Either the element was already evicted, the index was never assigned,
    /// or the bounds policy excludes it.
    #[error("index {index} must be between the beginning index {beginning} and end index {end} of the queue")]
    IndexOutOfRange {
        /// The requested absolute index.
        index: i64,
        /// The queue's beginning index at the time of the request.
        beginning: i64,
        /// The queue's end index at the time of the request.
        end: i64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QueueError>;
