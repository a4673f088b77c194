//! Outline error types
//!
//! Unified error handling for outline editing and engine write-back.

use thiserror::Error;

/// Unified outline error type
#[derive(Debug, Error)]
pub enum OutlineError {
    /// Index does not refer to a position in the current sequence.
    ///
    /// Indices go stale after every structural mutation; callers must
    /// re-fetch them before the next call.
    #[error("Index out of range: {index} (outline has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Insert was given a title that is empty or whitespace-only
    #[error("Outline titles must not be empty")]
    EmptyTitle,

    /// Target page lies beyond the document
    #[error("Page index out of range: {page_index} (document has {page_count} pages)")]
    PageOutOfRange {
        page_index: usize,
        page_count: usize,
    },

    /// Sequence starts below the top level
    #[error("Outline starts at depth {0}, expected a top-level entry")]
    RootDepth(usize),

    /// Depth increases by more than one between adjacent entries
    #[error("Depth jump at position {position}: depth {depth} follows depth {previous}")]
    DepthJump {
        position: usize,
        depth: usize,
        previous: usize,
    },

    /// Document engine failure (load, write-back, navigation)
    #[error("Document engine error: {0}")]
    Engine(String),
}

/// Result type alias for outline operations
pub type Result<T> = std::result::Result<T, OutlineError>;
