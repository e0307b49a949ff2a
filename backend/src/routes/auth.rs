//! Authentication routes
//!
//! Provides endpoints for signup, login, token refresh, and the current
//! user. Password hashing runs on the blocking thread pool and token
//! operations use the pre-computed JWT keys from AppState.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use meal_planner_shared::types::{AuthTokens, LoginRequest, SignupRequest, SignupResponse, UserResponse};
use serde::Deserialize;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/me", axum::routing::get(get_me))
}

/// Register a new user account
///
/// POST /api/v1/auth/signup
///
/// Creates the user and its profile (default biometrics when none are
/// provided) with macro targets computed server-side, and returns the user
/// plus a token pair.
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    let response = UserService::signup(&state.db, state.jwt(), req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::login(&state.db, state.jwt(), &req.email, &req.password).await?;
    Ok(Json(tokens))
}

/// Refresh token request
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Refresh access token
///
/// POST /api/v1/auth/refresh
async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::refresh_token(&state.db, state.jwt(), &req.refresh_token).await?;
    Ok(Json(tokens))
}

/// Get current user with embedded profile (requires authentication)
///
/// GET /api/v1/auth/me
async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::get_me(&state.db, auth_user.user_id).await?;
    Ok(Json(user))
}
