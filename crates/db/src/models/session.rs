//! Admin session model.

use quickfire_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An admin session row. Holds only the SHA-256 hex digest of the
/// refresh token, never the token itself.
#[derive(Debug, Clone, FromRow)]
pub struct AdminSession {
    pub id: DbId,
    pub token_hash: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}
