//! Profile service - business logic for profile reads and updates
//!
//! The update path owns the recomputation gate: stored macro targets are
//! refreshed through `calculate_all_macros` whenever one of its six inputs
//! changes, and only then. Goal weight and preference edits leave the
//! stored targets untouched.

use crate::error::ApiError;
use crate::repositories::{ProfileRepository, UpdateProfile, UserRepository};
use crate::services::user::user_to_response;
use meal_planner_shared::macro_targets::calculate_all_macros;
use meal_planner_shared::types::{UpdateProfileRequest, UserResponse};
use meal_planner_shared::validation;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// Profile service for user profile operations
pub struct ProfileService;

impl ProfileService {
    /// Get the user's account with embedded profile
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let profile = ProfileRepository::find_by_user_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(user_to_response(user, profile))
    }

    /// Validate the fields present on a partial update
    fn validate_update(req: &UpdateProfileRequest) -> Result<(), ApiError> {
        let checks = [
            req.name.as_deref().map(validation::validate_name),
            req.age_years.map(validation::validate_age_years),
            req.height_text.as_deref().map(validation::validate_height_text),
            req.weight_lbs.map(validation::validate_weight_lbs),
            req.goal_weight_lbs.map(validation::validate_weight_lbs),
            req.activity_level_index
                .map(validation::validate_activity_level_index),
            req.goal_type_index.map(validation::validate_goal_type_index),
            req.delivery_method_index
                .map(validation::validate_delivery_method_index),
            req.appearance_index.map(validation::validate_appearance_index),
        ];

        for check in checks.into_iter().flatten() {
            check.map_err(ApiError::Validation)?;
        }

        Ok(())
    }

    /// Apply a partial update; recompute macro targets when biometrics or
    /// goal indexes changed
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<UserResponse, ApiError> {
        Self::validate_update(&req)?;

        let recompute = req.touches_macro_inputs();

        // Update the display name on the account itself
        let user = match req.name {
            Some(ref name) => UserRepository::update_name(pool, user_id, name)
                .await
                .map_err(ApiError::Internal)?,
            None => UserRepository::find_by_id(pool, user_id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?,
        };

        let updates = UpdateProfile {
            age_years: req.age_years,
            height_text: req.height_text,
            weight_lbs: req.weight_lbs,
            goal_weight_lbs: req.goal_weight_lbs,
            is_male: req.is_male,
            activity_level_index: req.activity_level_index,
            goal_type_index: req.goal_type_index,
            selected_vitamins: req.selected_vitamins,
            dietary_restrictions: req.dietary_restrictions,
            disliked_foods: req.disliked_foods,
            selected_dining_halls: req.selected_dining_halls,
            delivery_method_index: req.delivery_method_index,
            appearance_index: req.appearance_index,
        };

        let mut profile = ProfileRepository::update(pool, user_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        if recompute {
            let targets = calculate_all_macros(
                profile.weight_lbs,
                &profile.height_text,
                profile.age_years,
                profile.is_male,
                profile.activity_level_index,
                profile.goal_type_index,
            );
            debug!(
                user_id = %user_id,
                calories = targets.calories,
                "Recomputed macro targets"
            );

            profile = ProfileRepository::set_macro_targets(pool, user_id, targets)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;
        }

        Ok(user_to_response(user, Some(profile)))
    }
}
