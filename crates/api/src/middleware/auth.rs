//! Bearer-token identity extractors for Axum handlers.
//!
//! Every note operation resolves the caller's identity through one of these
//! two extractors. [`MaybeAuthUser`] never rejects: an absent, malformed,
//! forged, or expired credential all resolve to anonymous, which is a valid
//! outcome for read operations. [`AuthUser`] is the gated variant that turns
//! anonymous into a 401.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tabla_core::error::CoreError;
use tabla_core::types::DbId;

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication; requests without a valid token are rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

/// Optionally-authenticated caller: `Some(user_id)` for a valid Bearer
/// token, `None` for anonymous. Never rejects the request.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<DbId>);

/// Pull the bearer credential out of the `Authorization` header, if any.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = bearer_token(parts).and_then(|token| verify_token(token, &state.config.jwt));
        Ok(MaybeAuthUser(identity))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = bearer_token(parts)
            .and_then(|token| verify_token(token, &state.config.jwt))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Authentication required".into()))
            })?;

        Ok(AuthUser { user_id })
    }
}
