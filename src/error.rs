//! Error handling types and utilities.

/// A specialized Result type for doxidex operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned for invalid query arguments.
///
/// Everything else about a query is infallible: a prefix that matches
/// nothing yields an empty result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The caller asked for zero result rows.
    #[error("result limit must be at least 1 (got {0})")]
    InvalidLimit(usize),
}
