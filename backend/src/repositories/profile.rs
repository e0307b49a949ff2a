//! Profile repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use meal_planner_shared::macro_targets::{MacroTargets, DEFAULT_TARGETS};
use sqlx::PgPool;
use uuid::Uuid;

/// Profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub age_years: i32,
    pub height_text: String,
    pub weight_lbs: i32,
    pub goal_weight_lbs: i32,
    pub is_male: bool,
    pub activity_level_index: i32,
    pub goal_type_index: i32,
    pub calories_target: i32,
    pub protein_target: i32,
    pub carbs_target: i32,
    pub fat_target: i32,
    pub selected_vitamins: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub disliked_foods: Vec<String>,
    pub selected_dining_halls: Vec<String>,
    pub delivery_method_index: i32,
    pub appearance_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a profile alongside a new user
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub age_years: i32,
    pub height_text: String,
    pub weight_lbs: i32,
    pub goal_weight_lbs: i32,
    pub is_male: bool,
    pub activity_level_index: i32,
    pub goal_type_index: i32,
    pub calories_target: i32,
    pub protein_target: i32,
    pub carbs_target: i32,
    pub fat_target: i32,
    pub selected_vitamins: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub disliked_foods: Vec<String>,
    pub selected_dining_halls: Vec<String>,
    pub delivery_method_index: i32,
    pub appearance_index: i32,
}

impl Default for NewProfile {
    fn default() -> Self {
        Self {
            age_years: 21,
            height_text: "5'10\"".to_string(),
            weight_lbs: 165,
            goal_weight_lbs: 175,
            is_male: true,
            activity_level_index: 2,
            goal_type_index: 0,
            calories_target: DEFAULT_TARGETS.calories,
            protein_target: DEFAULT_TARGETS.protein_g,
            carbs_target: DEFAULT_TARGETS.carbs_g,
            fat_target: DEFAULT_TARGETS.fat_g,
            selected_vitamins: vec![
                "Vit D".to_string(),
                "B12".to_string(),
                "Iron".to_string(),
                "Calcium".to_string(),
            ],
            dietary_restrictions: Vec::new(),
            disliked_foods: Vec::new(),
            selected_dining_halls: vec![
                "BPlate".to_string(),
                "De Neve".to_string(),
                "Rendezvous".to_string(),
            ],
            delivery_method_index: 0,
            appearance_index: 1,
        }
    }
}

/// Partial profile update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub age_years: Option<i32>,
    pub height_text: Option<String>,
    pub weight_lbs: Option<i32>,
    pub goal_weight_lbs: Option<i32>,
    pub is_male: Option<bool>,
    pub activity_level_index: Option<i32>,
    pub goal_type_index: Option<i32>,
    pub selected_vitamins: Option<Vec<String>>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub disliked_foods: Option<Vec<String>>,
    pub selected_dining_halls: Option<Vec<String>>,
    pub delivery_method_index: Option<i32>,
    pub appearance_index: Option<i32>,
}

const PROFILE_COLUMNS: &str = r#"id, user_id, age_years, height_text, weight_lbs, goal_weight_lbs,
       is_male, activity_level_index, goal_type_index,
       calories_target, protein_target, carbs_target, fat_target,
       selected_vitamins, dietary_restrictions, disliked_foods, selected_dining_halls,
       delivery_method_index, appearance_index, created_at, updated_at"#;

/// Profile repository for database operations
pub struct ProfileRepository;

impl ProfileRepository {
    /// Get a user's profile
    pub async fn find_by_user_id(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRecord>> {
        let profile = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM profiles
            WHERE user_id = $1
            "#
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    /// Apply a partial update and return the resulting record
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        updates: UpdateProfile,
    ) -> Result<Option<ProfileRecord>> {
        let profile = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            UPDATE profiles SET
                age_years = COALESCE($2, age_years),
                height_text = COALESCE($3, height_text),
                weight_lbs = COALESCE($4, weight_lbs),
                goal_weight_lbs = COALESCE($5, goal_weight_lbs),
                is_male = COALESCE($6, is_male),
                activity_level_index = COALESCE($7, activity_level_index),
                goal_type_index = COALESCE($8, goal_type_index),
                selected_vitamins = COALESCE($9, selected_vitamins),
                dietary_restrictions = COALESCE($10, dietary_restrictions),
                disliked_foods = COALESCE($11, disliked_foods),
                selected_dining_halls = COALESCE($12, selected_dining_halls),
                delivery_method_index = COALESCE($13, delivery_method_index),
                appearance_index = COALESCE($14, appearance_index),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(updates.age_years)
        .bind(updates.height_text)
        .bind(updates.weight_lbs)
        .bind(updates.goal_weight_lbs)
        .bind(updates.is_male)
        .bind(updates.activity_level_index)
        .bind(updates.goal_type_index)
        .bind(updates.selected_vitamins)
        .bind(updates.dietary_restrictions)
        .bind(updates.disliked_foods)
        .bind(updates.selected_dining_halls)
        .bind(updates.delivery_method_index)
        .bind(updates.appearance_index)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    /// Persist freshly computed macro targets
    pub async fn set_macro_targets(
        pool: &PgPool,
        user_id: Uuid,
        targets: MacroTargets,
    ) -> Result<Option<ProfileRecord>> {
        let profile = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            UPDATE profiles SET
                calories_target = $2,
                protein_target = $3,
                carbs_target = $4,
                fat_target = $5,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(targets.calories)
        .bind(targets.protein_g)
        .bind(targets.carbs_g)
        .bind(targets.fat_g)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_engine_fallback() {
        let profile = NewProfile::default();
        assert_eq!(profile.calories_target, DEFAULT_TARGETS.calories);
        assert_eq!(profile.protein_target, DEFAULT_TARGETS.protein_g);
        assert_eq!(profile.carbs_target, DEFAULT_TARGETS.carbs_g);
        assert_eq!(profile.fat_target, DEFAULT_TARGETS.fat_g);
    }
}
