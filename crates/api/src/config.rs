use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Argon2id PHC hash of the admin password.
    pub admin_password_hash: String,
    /// Admin session (refresh token) lifetime in days (default: `7`).
    pub session_expiry_days: i64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

/// Default admin session lifetime in days.
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Required | Default                 |
    /// |-----------------------|----------|-------------------------|
    /// | `HOST`                | no       | `0.0.0.0`               |
    /// | `PORT`                | no       | `3000`                  |
    /// | `CORS_ORIGINS`        | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`| no       | `30`                    |
    /// | `ADMIN_PASSWORD_HASH` | **yes**  | --                      |
    /// | `SESSION_EXPIRY_DAYS` | no       | `7`                     |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a value fails to parse,
    /// which is the desired behaviour -- misconfiguration should fail fast.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set in the environment");
        assert!(
            admin_password_hash.starts_with("$argon2"),
            "ADMIN_PASSWORD_HASH must be an Argon2 PHC string"
        );

        let session_expiry_days: i64 = std::env::var("SESSION_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_DAYS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_DAYS must be a valid i64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_password_hash,
            session_expiry_days,
            jwt,
        }
    }
}
