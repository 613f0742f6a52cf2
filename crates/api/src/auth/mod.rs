//! Admin authentication: Argon2id password verification plus JWT access
//! tokens and opaque, hash-stored refresh tokens.

pub mod jwt;
pub mod password;
