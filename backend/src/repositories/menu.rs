//! Menu repository: dining halls and dated menu items

use crate::menu::{DiningHallData, MenuItemData};
use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// Dining hall record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DiningHallRecord {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub short_name: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
}

/// Menu item record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MenuItemRecord {
    pub id: Uuid,
    pub dining_hall_id: Uuid,
    pub name: String,
    pub description: String,
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
    pub meal_period: String,
    pub station: Option<String>,
    pub menu_date: NaiveDate,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub allergens: Option<Vec<String>>,
}

/// Optional filters for menu item queries
#[derive(Debug, Clone, Default)]
pub struct MenuItemFilter {
    pub dining_hall_id: Option<Uuid>,
    pub meal_period: Option<String>,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub min_protein: Option<i32>,
    pub max_calories: Option<i32>,
}

const HALL_COLUMNS: &str =
    "id, code, name, short_name, location, description, image_url, is_active";

const ITEM_COLUMNS: &str = r#"id, dining_hall_id, name, description, calories, protein_g, carbs_g, fat_g,
       meal_period, station, menu_date, is_vegetarian, is_vegan, is_gluten_free, allergens"#;

/// Menu repository for database operations
pub struct MenuRepository;

impl MenuRepository {
    /// Insert or refresh a dining hall, keyed by its provider code
    pub async fn upsert_hall(pool: &PgPool, hall: &DiningHallData) -> Result<DiningHallRecord> {
        let record = sqlx::query_as::<_, DiningHallRecord>(&format!(
            r#"
            INSERT INTO dining_halls (code, name, short_name, location, description, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (code) DO UPDATE SET
                name = EXCLUDED.name,
                short_name = EXCLUDED.short_name,
                location = EXCLUDED.location,
                description = EXCLUDED.description,
                image_url = EXCLUDED.image_url
            RETURNING {HALL_COLUMNS}
            "#
        ))
        .bind(&hall.code)
        .bind(&hall.name)
        .bind(&hall.short_name)
        .bind(&hall.location)
        .bind(&hall.description)
        .bind(&hall.image_url)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Count all dining halls
    pub async fn hall_count(pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dining_halls")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// List active dining halls
    pub async fn list_active_halls(pool: &PgPool) -> Result<Vec<DiningHallRecord>> {
        let halls = sqlx::query_as::<_, DiningHallRecord>(&format!(
            r#"
            SELECT {HALL_COLUMNS}
            FROM dining_halls
            WHERE is_active
            ORDER BY name
            "#
        ))
        .fetch_all(pool)
        .await?;

        Ok(halls)
    }

    /// Find a dining hall by ID
    pub async fn find_hall_by_id(pool: &PgPool, id: Uuid) -> Result<Option<DiningHallRecord>> {
        let hall = sqlx::query_as::<_, DiningHallRecord>(&format!(
            r#"
            SELECT {HALL_COLUMNS}
            FROM dining_halls
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(hall)
    }

    /// Map provider hall codes to database IDs
    pub async fn hall_ids_by_code(pool: &PgPool) -> Result<HashMap<String, Uuid>> {
        let rows = sqlx::query_as::<_, (String, Uuid)>("SELECT code, id FROM dining_halls")
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Count menu items stored for a date
    pub async fn count_items_for_date(pool: &PgPool, menu_date: NaiveDate) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items WHERE menu_date = $1")
                .bind(menu_date)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Replace all menu items for a date with the given provider data.
    ///
    /// `items` pairs each provider item with the database ID of its hall.
    /// Delete-then-insert runs in one transaction so readers never observe a
    /// partially seeded date.
    pub async fn replace_items_for_date(
        pool: &PgPool,
        menu_date: NaiveDate,
        items: &[(Uuid, MenuItemData)],
    ) -> Result<usize> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM menu_items WHERE menu_date = $1")
            .bind(menu_date)
            .execute(&mut *tx)
            .await?;

        for (hall_id, item) in items {
            let allergens = (!item.allergens.is_empty()).then_some(&item.allergens);
            sqlx::query(
                r#"
                INSERT INTO menu_items (
                    dining_hall_id, name, description, calories, protein_g, carbs_g, fat_g,
                    meal_period, station, menu_date, is_vegetarian, is_vegan, is_gluten_free,
                    allergens
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                "#,
            )
            .bind(hall_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.calories)
            .bind(item.protein_g)
            .bind(item.carbs_g)
            .bind(item.fat_g)
            .bind(item.meal_period.as_str())
            .bind(&item.station)
            .bind(menu_date)
            .bind(item.is_vegetarian)
            .bind(item.is_vegan)
            .bind(item.is_gluten_free)
            .bind(allergens)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(items.len())
    }

    /// Menu items for one hall on one date
    pub async fn items_for_hall_date(
        pool: &PgPool,
        dining_hall_id: Uuid,
        menu_date: NaiveDate,
    ) -> Result<Vec<MenuItemRecord>> {
        let items = sqlx::query_as::<_, MenuItemRecord>(&format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM menu_items
            WHERE dining_hall_id = $1 AND menu_date = $2
            ORDER BY name
            "#
        ))
        .bind(dining_hall_id)
        .bind(menu_date)
        .fetch_all(pool)
        .await?;

        Ok(items)
    }

    /// Menu items for a date with optional filters
    pub async fn items_filtered(
        pool: &PgPool,
        menu_date: NaiveDate,
        filter: &MenuItemFilter,
    ) -> Result<Vec<MenuItemRecord>> {
        let items = sqlx::query_as::<_, MenuItemRecord>(&format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM menu_items
            WHERE menu_date = $1
              AND ($2::uuid IS NULL OR dining_hall_id = $2)
              AND ($3::text IS NULL OR meal_period = $3)
              AND (NOT $4 OR is_vegetarian)
              AND (NOT $5 OR is_vegan)
              AND (NOT $6 OR is_gluten_free)
              AND ($7::int IS NULL OR protein_g >= $7)
              AND ($8::int IS NULL OR calories <= $8)
            ORDER BY name
            "#
        ))
        .bind(menu_date)
        .bind(filter.dining_hall_id)
        .bind(&filter.meal_period)
        .bind(filter.vegetarian)
        .bind(filter.vegan)
        .bind(filter.gluten_free)
        .bind(filter.min_protein)
        .bind(filter.max_calories)
        .fetch_all(pool)
        .await?;

        Ok(items)
    }
}
