//! Error types for the membership engine

use thiserror::Error;

/// Membership engine errors
#[derive(Debug, Error)]
pub enum MembershipError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Include-source lookup failure
    ///
    /// A resolver that surfaced this error holds a partially expanded
    /// frontier and must be discarded, not reused.
    #[error("Group include lookup failed: {0}")]
    LookupFailed(String),
}

/// Result type for membership operations
pub type Result<T> = std::result::Result<T, MembershipError>;
