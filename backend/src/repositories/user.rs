//! User repository for database operations

use crate::repositories::profile::NewProfile;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user together with its profile, in one transaction
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        name: &str,
        profile: NewProfile,
    ) -> Result<UserRecord> {
        let mut tx = pool.begin().await?;

        // Insert user
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash, name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, name, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        // Insert profile with computed macro targets
        sqlx::query(
            r#"
            INSERT INTO profiles (
                user_id, age_years, height_text, weight_lbs, goal_weight_lbs, is_male,
                activity_level_index, goal_type_index,
                calories_target, protein_target, carbs_target, fat_target,
                selected_vitamins, dietary_restrictions, disliked_foods, selected_dining_halls,
                delivery_method_index, appearance_index
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(user.id)
        .bind(profile.age_years)
        .bind(&profile.height_text)
        .bind(profile.weight_lbs)
        .bind(profile.goal_weight_lbs)
        .bind(profile.is_male)
        .bind(profile.activity_level_index)
        .bind(profile.goal_type_index)
        .bind(profile.calories_target)
        .bind(profile.protein_target)
        .bind(profile.carbs_target)
        .bind(profile.fat_target)
        .bind(&profile.selected_vitamins)
        .bind(&profile.dietary_restrictions)
        .bind(&profile.disliked_foods)
        .bind(&profile.selected_dining_halls)
        .bind(profile.delivery_method_index)
        .bind(profile.appearance_index)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Update the display name
    pub async fn update_name(pool: &PgPool, id: Uuid, name: &str) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, password_hash, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - marked with #[ignore]
    // Run with: cargo test --features integration -- --ignored
}
