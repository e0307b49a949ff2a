//! User profile API routes
//!
//! GET returns the account with its embedded profile; PUT applies a partial
//! update and recomputes stored macro targets when biometrics or goal
//! indexes change.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use meal_planner_shared::types::{UpdateProfileRequest, UserResponse};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile - Get the current user's profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = ProfileService::get(&state.db, auth.user_id).await?;
    Ok(Json(user))
}

/// PUT /api/v1/profile - Partially update the current user's profile
///
/// Only provided fields change. Macro targets are recalculated when any of
/// weight, height, age, sex, activity index, or goal index is provided.
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = ProfileService::update(&state.db, auth.user_id, req).await?;
    Ok(Json(user))
}
