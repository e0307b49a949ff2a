//! User service for authentication and account management
//!
//! Password hashing/verification runs on the blocking thread pool and the
//! JWT service is passed by reference so its pre-computed keys are reused.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{
    NewProfile, ProfileRecord, ProfileRepository, UserRecord, UserRepository,
};
use meal_planner_shared::macro_targets::calculate_all_macros;
use meal_planner_shared::types::{
    AuthTokens, ProfileInput, ProfileResponse, SignupRequest, SignupResponse, UserResponse,
};
use meal_planner_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// Derive display initials from a name, e.g. "Joe Bruin" -> "JB"
pub(crate) fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let first_char = |s: &str| s.chars().next();

    match parts.as_slice() {
        [] => "?".to_string(),
        [only] => first_char(only)
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string()),
        [first, .., last] => match (first_char(first), first_char(last)) {
            (Some(a), Some(b)) => format!("{}{}", a.to_uppercase(), b.to_uppercase()),
            _ => "?".to_string(),
        },
    }
}

/// Convert a profile record to its API representation
pub(crate) fn profile_to_response(profile: ProfileRecord) -> ProfileResponse {
    ProfileResponse {
        id: profile.id.to_string(),
        age_years: profile.age_years,
        height_text: profile.height_text,
        weight_lbs: profile.weight_lbs,
        goal_weight_lbs: profile.goal_weight_lbs,
        is_male: profile.is_male,
        activity_level_index: profile.activity_level_index,
        goal_type_index: profile.goal_type_index,
        calories_target: profile.calories_target,
        protein_target: profile.protein_target,
        carbs_target: profile.carbs_target,
        fat_target: profile.fat_target,
        selected_vitamins: profile.selected_vitamins,
        dietary_restrictions: profile.dietary_restrictions,
        disliked_foods: profile.disliked_foods,
        selected_dining_halls: profile.selected_dining_halls,
        delivery_method_index: profile.delivery_method_index,
        appearance_index: profile.appearance_index,
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    }
}

/// Convert a user record plus optional profile to its API representation
pub(crate) fn user_to_response(user: UserRecord, profile: Option<ProfileRecord>) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        email: user.email,
        initials: initials(&user.name),
        name: user.name,
        created_at: user.created_at,
        updated_at: user.updated_at,
        profile: profile.map(profile_to_response),
    }
}

/// Validate a signup profile payload
fn validate_profile_input(input: &ProfileInput) -> Result<(), ApiError> {
    validation::validate_age_years(input.age_years)
        .and_then(|_| validation::validate_height_text(&input.height_text))
        .and_then(|_| validation::validate_weight_lbs(input.weight_lbs))
        .and_then(|_| validation::validate_weight_lbs(input.goal_weight_lbs))
        .and_then(|_| validation::validate_activity_level_index(input.activity_level_index))
        .and_then(|_| validation::validate_goal_type_index(input.goal_type_index))
        .and_then(|_| validation::validate_delivery_method_index(input.delivery_method_index))
        .and_then(|_| validation::validate_appearance_index(input.appearance_index))
        .map_err(ApiError::Validation)
}

/// Build the profile row for a new user, with macro targets computed from
/// its biometrics through the single engine entry point.
fn new_profile(input: Option<ProfileInput>) -> NewProfile {
    let mut profile = match input {
        Some(input) => NewProfile {
            age_years: input.age_years,
            height_text: input.height_text,
            weight_lbs: input.weight_lbs,
            goal_weight_lbs: input.goal_weight_lbs,
            is_male: input.is_male,
            activity_level_index: input.activity_level_index,
            goal_type_index: input.goal_type_index,
            selected_vitamins: input.selected_vitamins,
            dietary_restrictions: input.dietary_restrictions,
            disliked_foods: input.disliked_foods,
            selected_dining_halls: input.selected_dining_halls,
            delivery_method_index: input.delivery_method_index,
            appearance_index: input.appearance_index,
            ..Default::default()
        },
        None => NewProfile::default(),
    };

    let targets = calculate_all_macros(
        profile.weight_lbs,
        &profile.height_text,
        profile.age_years,
        profile.is_male,
        profile.activity_level_index,
        profile.goal_type_index,
    );
    profile.calories_target = targets.calories;
    profile.protein_target = targets.protein_g;
    profile.carbs_target = targets.carbs_g;
    profile.fat_target = targets.fat_g;

    profile
}

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user with a profile and return it with fresh tokens
    pub async fn signup(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: SignupRequest,
    ) -> Result<SignupResponse, ApiError> {
        // Validate account fields
        if !req.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }
        validation::validate_password(&req.password).map_err(ApiError::Validation)?;
        validation::validate_name(&req.name).map_err(ApiError::Validation)?;

        if let Some(ref profile) = req.profile {
            validate_profile_input(profile)?;
        }

        // Check if email already exists
        if UserRepository::email_exists(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        // Create user and profile in one transaction
        let user = UserRepository::create(
            pool,
            &req.email,
            &password_hash,
            &req.name,
            new_profile(req.profile),
        )
        .await
        .map_err(ApiError::Internal)?;

        let tokens = Self::issue_tokens(jwt_service, user.id)?;

        let profile = ProfileRepository::find_by_user_id(pool, user.id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(SignupResponse {
            user: user_to_response(user, profile),
            tokens,
        })
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        // Find user by email
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        Self::issue_tokens(jwt_service, user.id)
    }

    /// Refresh access token using refresh token
    pub async fn refresh_token(
        pool: &PgPool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthTokens, ApiError> {
        // Validate refresh token
        let claims = jwt_service
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        // Parse user ID
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        // Verify user still exists
        let _user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        Self::issue_tokens(jwt_service, user_id)
    }

    /// Get the authenticated user's account with embedded profile
    pub async fn get_me(pool: &PgPool, user_id: Uuid) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let profile = ProfileRepository::find_by_user_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(user_to_response(user, profile))
    }

    /// Generate an access/refresh token pair (uses pre-computed keys)
    fn issue_tokens(jwt_service: &JwtService, user_id: Uuid) -> Result<AuthTokens, ApiError> {
        let access_token = jwt_service
            .generate_access_token(user_id)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt_service
            .generate_refresh_token(user_id)
            .map_err(ApiError::Internal)?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
        })
    }
}
