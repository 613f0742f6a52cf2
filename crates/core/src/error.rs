//! Domain-level error type shared across the workspace.

use crate::types::DbId;

/// Errors raised by domain operations.
///
/// The HTTP layer maps each variant onto a status code and JSON envelope;
/// see `quickfire-api`'s `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup failed.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation rule.
    #[error("validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}
