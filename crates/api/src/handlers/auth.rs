//! Handlers for the `/auth` resource (demo login, current identity).

use axum::extract::State;
use axum::Json;
use goat_core::auth::authenticate;
use goat_core::error::CoreError;
use goat_core::types::DbId;
use goat_core::validation::require;
use goat_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub designation: String,
}

/// Identity decoded from the bearer token.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: DbId,
    pub role: String,
    pub is_executive: bool,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Accepts only the demo accounts. The matching user row supplies the id
/// baked into the token. Credentials are compared as sent, without trimming.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let email = require(
        "email",
        input.email.as_deref().filter(|e| !e.trim().is_empty()),
    )?;
    let password = require(
        "password",
        input.password.as_deref().filter(|p| !p.is_empty()),
    )?;

    let account = authenticate(email, password).ok_or_else(invalid_credentials)?;

    let user = UserRepo::find_by_email(&state.pool, account.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            access_token,
            token_type: "Bearer",
            expires_in: state.config.jwt.access_token_expiry_mins * 60,
            user: UserInfo {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
                designation: account.designation.to_string(),
            },
        },
    }))
}

/// GET /api/v1/auth/me
pub async fn me(user: AuthUser) -> AppResult<Json<DataResponse<MeResponse>>> {
    Ok(Json(DataResponse {
        data: MeResponse {
            user_id: user.user_id,
            is_executive: user.is_executive(),
            role: user.role,
        },
    }))
}
