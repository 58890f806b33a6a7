//! Handlers for the `/auth` resource (register, login, user listing).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tabla_core::error::CoreError;
use tabla_db::models::user::{CreateUser, PublicUser};
use tabla_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register` and `POST /auth/login`.
///
/// Fields are optional so a missing key is a 400 validation error rather
/// than a framework-level deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub username: String,
}

/// Response body for `GET /auth/users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<PublicUser>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create a new user and return a fresh identity token. 409 if the username
/// is taken.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    let (username, password) = require_credentials(input)?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username,
        password_hash,
    };
    let user = UserRepo::create(&state.pool, &create)
        .await
        .map_err(classify_register_error)?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token,
            username: user.username,
        }),
    ))
}

/// POST /auth/login
///
/// Authenticate with username + password and return a fresh identity token.
///
/// Unknown username and wrong password both yield the same 401 so the
/// response never reveals whether an account exists.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<TokenResponse>> {
    let (username, password) = require_credentials(input)?;

    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(invalid_credentials());
    }

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse {
        token,
        username: user.username,
    }))
}

/// GET /auth/users
///
/// List all registered users (id and username only), ordered by id.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UsersResponse>> {
    let users = UserRepo::list_public(&state.pool).await?;
    Ok(Json(UsersResponse { users }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate that both credential fields are present and non-empty.
fn require_credentials(input: CredentialsRequest) -> Result<(String, String), AppError> {
    match (input.username, input.password) {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            Ok((username, password))
        }
        _ => Err(AppError::Core(CoreError::Validation(
            "Username and password required".into(),
        ))),
    }
}

/// The single, non-distinguishing login failure.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

/// Map a unique-constraint violation on registration to a 409 with a stable
/// message; everything else passes through the generic classifier.
fn classify_register_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AppError::Core(CoreError::Conflict("Username already exists".into()));
        }
    }
    AppError::Database(err)
}
