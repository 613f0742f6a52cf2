//! Handlers for the `/auth` resource.
//!
//! The admin logs in with the shared password and receives a short-lived
//! access token plus an opaque refresh token backing a server-side
//! session row. This replaces any notion of ambient client-side
//! authentication state: the session is explicit and revocable.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use quickfire_core::error::CoreError;
use quickfire_db::repositories::SessionRepo;
use serde::{Deserialize, Serialize};

use crate::auth::{jwt, password};
use crate::error::{AppError, AppResult};
use crate::middleware::AdminUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub refresh_token: String,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let ok = password::verify_password(&input.password, &state.config.admin_password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !ok {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let access_token = jwt::generate_access_token(&state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_token, token_hash) = jwt::generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(state.config.session_expiry_days);
    SessionRepo::create(&state.pool, &token_hash, expires_at).await?;

    tracing::info!("Admin logged in");

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
    }))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let token_hash = jwt::hash_refresh_token(&input.refresh_token);
    let session = SessionRepo::find_valid(&state.pool, &token_hash).await?;
    if session.is_none() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired session".into(),
        )));
    }

    let access_token = jwt::generate_access_token(&state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    Ok(Json(RefreshResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
    }))
}

/// POST /api/v1/auth/logout
///
/// Idempotent: logging out an already-dead session still returns 204.
pub async fn logout(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(input): Json<LogoutRequest>,
) -> AppResult<StatusCode> {
    let token_hash = jwt::hash_refresh_token(&input.refresh_token);
    SessionRepo::delete(&state.pool, &token_hash).await?;
    tracing::info!(token_id = %admin.token_id, "Admin logged out");
    Ok(StatusCode::NO_CONTENT)
}
