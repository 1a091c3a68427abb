use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::session::{AdminClaims, ADMIN_COOKIE};
use crate::state::AppState;

// ============================================================================
// Admin Session Extractor
// ============================================================================

/// Gate for administrative mutation handlers.
///
/// Pulls the session cookie out of the request, verifies the token, and
/// rejects with 401 before the handler body runs. Handlers that take an
/// `AdminSession` argument therefore never reach the store or the
/// filesystem on an unauthenticated request. Public read routes and the
/// reserve route simply do not take one.
pub struct AdminSession(pub AdminClaims);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Extract token from the session cookie
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(ADMIN_COOKIE)
            .ok_or_else(|| AppError::AuthenticationError("Missing admin session".to_string()))?;

        // 2. Decode and validate JWT
        let claims = state.sessions.verify(token.value())?;

        Ok(AdminSession(claims))
    }
}
