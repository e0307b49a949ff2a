//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication Types
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request; profile is optional and defaults server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileInput>,
}

/// Signup response: the created user plus its first token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user: UserResponse,
    pub tokens: AuthTokens,
}

// ============================================================================
// User Profile Types
// ============================================================================

fn default_appearance_index() -> i32 {
    1
}

/// Profile payload supplied at signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub age_years: i32,
    /// Height text, e.g. `5'10"` or `178 cm`
    pub height_text: String,
    pub weight_lbs: i32,
    pub goal_weight_lbs: i32,
    pub is_male: bool,
    /// 0-4: Sedentary .. Very Active
    pub activity_level_index: i32,
    /// 0-3: Lean Muscle, Bulking, Fat Loss, Maintenance
    pub goal_type_index: i32,
    #[serde(default)]
    pub selected_vitamins: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub disliked_foods: Vec<String>,
    #[serde(default)]
    pub selected_dining_halls: Vec<String>,
    /// 0-2: Push, iMessage, Widget
    #[serde(default)]
    pub delivery_method_index: i32,
    /// 0-2: Light, Dark, Auto
    #[serde(default = "default_appearance_index")]
    pub appearance_index: i32,
}

/// Partial profile update; only provided fields change
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_lbs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight_lbs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_male: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_vitamins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disliked_foods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_dining_halls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance_index: Option<i32>,
}

impl UpdateProfileRequest {
    /// True when any field that feeds the macro calculation was provided.
    /// Goal weight and preference/display changes do not retrigger it.
    pub fn touches_macro_inputs(&self) -> bool {
        self.age_years.is_some()
            || self.height_text.is_some()
            || self.weight_lbs.is_some()
            || self.is_male.is_some()
            || self.activity_level_index.is_some()
            || self.goal_type_index.is_some()
    }
}

/// Full profile response, including stored macro targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
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

/// User response with embedded profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub initials: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileResponse>,
}

// ============================================================================
// Menu Types
// ============================================================================

/// Dining hall response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningHallResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub short_name: String,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_active: bool,
}

/// Dining hall list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningHallListResponse {
    pub dining_halls: Vec<DiningHallResponse>,
    pub count: usize,
}

/// Menu item response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemResponse {
    pub id: String,
    pub dining_hall_id: String,
    pub name: String,
    pub description: String,
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
    /// breakfast, lunch, or dinner
    pub meal_period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    pub menu_date: NaiveDate,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
}

/// A dining hall's menu for one date, grouped by meal period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub dining_hall: DiningHallResponse,
    pub date: NaiveDate,
    pub breakfast: Vec<MenuItemResponse>,
    pub lunch: Vec<MenuItemResponse>,
    pub dinner: Vec<MenuItemResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_profile_defaults() {
        let req: SignupRequest = serde_json::from_str(
            r#"{
                "email": "bruin@ucla.edu",
                "password": "hunter2hunter2",
                "name": "Joe Bruin",
                "profile": {
                    "age_years": 21,
                    "height_text": "5'10\"",
                    "weight_lbs": 165,
                    "goal_weight_lbs": 175,
                    "is_male": true,
                    "activity_level_index": 2,
                    "goal_type_index": 0
                }
            }"#,
        )
        .unwrap();

        let profile = req.profile.unwrap();
        assert!(profile.selected_vitamins.is_empty());
        assert_eq!(profile.delivery_method_index, 0);
        assert_eq!(profile.appearance_index, 1);
    }

    #[test]
    fn test_update_request_macro_input_detection() {
        let noop = UpdateProfileRequest::default();
        assert!(!noop.touches_macro_inputs());

        let weight_change = UpdateProfileRequest {
            weight_lbs: Some(170),
            ..Default::default()
        };
        assert!(weight_change.touches_macro_inputs());

        // Goal weight and preferences are cosmetic for macro purposes.
        let cosmetic = UpdateProfileRequest {
            name: Some("Joe".to_string()),
            goal_weight_lbs: Some(180),
            disliked_foods: Some(vec!["olives".to_string()]),
            appearance_index: Some(2),
            ..Default::default()
        };
        assert!(!cosmetic.touches_macro_inputs());
    }
}
