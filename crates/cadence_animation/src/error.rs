//! Error types for cadence_animation

use thiserror::Error;

use crate::duration::Duration;

/// Errors raised while building or querying an animation tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// An `Assert` strategy was queried outside `[0, duration]`
    #[error("time {time} is out of bounds for animation of duration {duration}")]
    OutOfBounds { time: Duration, duration: Duration },

    /// A combinator that needs at least one child was given none
    #[error("{combinator} requires at least one child animation")]
    EmptyChildren { combinator: &'static str },

    /// A switch start table is not sorted by start time
    #[error("switch start times must be sorted: {previous} comes before {next}")]
    UnsortedStarts { previous: Duration, next: Duration },

    /// A child or padding amount has a negative length
    #[error("{what} must not be negative, got {duration}")]
    NegativeDuration {
        what: &'static str,
        duration: Duration,
    },

    /// A property record declares the same key twice
    #[error("property key {key} is declared more than once")]
    DuplicateKey { key: String },

    /// A window starts before the timeline origin
    #[error("window start must not be negative, got {start}")]
    NegativeStart { start: Duration },
}

/// Result type for cadence_animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
