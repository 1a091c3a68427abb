use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Name of the cookie carrying the admin session token.
pub const ADMIN_COOKIE: &str = "admin_token";

// ============================================================================
// JWT Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Token encoding failed")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

// ============================================================================
// Session Authenticator
// ============================================================================

/// Issues and verifies the admin session credential.
///
/// There is exactly one administrative principal, held in configuration.
/// Verification is stateless: token + secret + clock, nothing stored
/// server-side, and therefore no revocation list — logout is purely a
/// cookie deletion on the client.
pub struct SessionAuthenticator {
    admin_username: String,
    admin_password: String,
    secret: String,
    ttl_seconds: u64,
}

impl SessionAuthenticator {
    pub fn new(
        admin_username: String,
        admin_password: String,
        secret: String,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            admin_username,
            admin_password,
            secret,
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Compare the supplied credentials against the configured pair and
    /// mint a signed token on a match. A single undifferentiated error
    /// covers both a wrong username and a wrong password.
    pub fn issue(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username != self.admin_username || password != self.admin_password {
            return Err(AuthError::InvalidCredentials);
        }

        let now = Utc::now();
        let claims = AdminClaims {
            sub: username.to_owned(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::seconds(self.ttl_seconds as i64)).timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Validate signature, expiry (zero leeway) and the bound username.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AuthError::InvalidOrExpiredToken)?;

        if token_data.claims.sub != self.admin_username {
            return Err(AuthError::InvalidOrExpiredToken);
        }

        Ok(token_data.claims)
    }
}

// ============================================================================
// Login / Logout Routes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/logout", post(logout))
}

/// POST /admin/login
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<serde_json::Value>), AppError> {
    let token = state.sessions.issue(&req.username, &req.password)?;

    let cookie = Cookie::build((ADMIN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(state.secure_cookies)
        .max_age(time::Duration::seconds(state.sessions.ttl_seconds() as i64))
        .build();

    tracing::info!("admin logged in");
    Ok((jar.add(cookie), Json(json!({ "success": true }))))
}

/// POST /admin/logout
async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let mut removal = Cookie::from(ADMIN_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), Json(json!({ "success": true })))
}
