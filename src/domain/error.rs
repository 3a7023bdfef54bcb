//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed outlines and invalid requests.
/// Unresolved node ids are not errors: edits against them are no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate node id: {0}")]
    DuplicateId(String),

    #[error("node {id} has level {actual}, expected {expected}")]
    LevelMismatch {
        id: String,
        expected: u32,
        actual: u32,
    },

    #[error("invalid outline request: {0}")]
    InvalidRequest(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
