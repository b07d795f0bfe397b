use thiserror::Error;

/// Errors that can occur during member operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberError {
    #[error("Member not found: {0}")]
    NotFound(u64),
}
