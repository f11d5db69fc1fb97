//! Error and result types for node split operations.

use thiserror::Error;

/// Errors that can occur while splitting an overflowing node.
///
/// None of these are transient. They indicate that the caller handed the
/// engine an input no valid split exists for, or that a strategy reached a
/// state it cannot continue from. A tree receiving one of these should treat
/// it as a programming or configuration error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    /// Fewer than two entries were supplied.
    #[error("Cannot split {num} entries, at least 2 are required")]
    TooFewEntries { num: usize },

    /// The requested minimum fill cannot be met on both sides.
    #[error("Cannot split {num} entries with a minimum of {min_entries} per node")]
    InfeasibleMinEntries { num: usize, min_entries: usize },

    /// An entry does not have the dimensionality of the first entry.
    #[error("Entry {index} has dimensionality {found}, expected {expected}")]
    DimensionalityMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },

    /// A candidate partition left a side empty where a bounding box is needed.
    #[error("Invalid split state: {0}")]
    InvalidSplitState(String),

    /// A strategy name did not match any known split strategy.
    #[error("Unknown split strategy: {0}")]
    UnknownStrategy(String),

    /// Split settings are out of range.
    #[error("Invalid split settings: {0}")]
    InvalidSettings(String),
}

/// Result type for split operations
pub type SplitResult<T> = Result<T, SplitError>;
