//! Menu service - dining hall catalog and dated menus
//!
//! Menu data is synced lazily from the injected [`MenuProvider`]: the first
//! request (or first request for a new date) pulls the provider catalog into
//! Postgres, and all reads are then served from the database.

use crate::error::ApiError;
use crate::menu::MenuProvider;
use crate::repositories::{
    DiningHallRecord, MenuItemFilter, MenuItemRecord, MenuRepository,
};
use chrono::NaiveDate;
use meal_planner_shared::types::{
    DiningHallListResponse, DiningHallResponse, MenuItemResponse, MenuResponse,
};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

fn hall_to_response(hall: DiningHallRecord) -> DiningHallResponse {
    DiningHallResponse {
        id: hall.id.to_string(),
        code: hall.code,
        name: hall.name,
        short_name: hall.short_name,
        location: hall.location,
        description: hall.description,
        image_url: hall.image_url,
        is_active: hall.is_active,
    }
}

fn item_to_response(item: MenuItemRecord) -> MenuItemResponse {
    MenuItemResponse {
        id: item.id.to_string(),
        dining_hall_id: item.dining_hall_id.to_string(),
        name: item.name,
        description: item.description,
        calories: item.calories,
        protein_g: item.protein_g,
        carbs_g: item.carbs_g,
        fat_g: item.fat_g,
        meal_period: item.meal_period,
        station: item.station,
        menu_date: item.menu_date,
        is_vegetarian: item.is_vegetarian,
        is_vegan: item.is_vegan,
        is_gluten_free: item.is_gluten_free,
        allergens: item.allergens,
    }
}

/// Menu service for catalog seeding and queries
pub struct MenuService;

impl MenuService {
    /// Sync dining halls from the provider into the database
    pub async fn seed_dining_halls(
        pool: &PgPool,
        provider: &dyn MenuProvider,
    ) -> Result<usize, ApiError> {
        let halls = provider.dining_halls().await.map_err(ApiError::Internal)?;
        let count = halls.len();

        for hall in &halls {
            MenuRepository::upsert_hall(pool, hall)
                .await
                .map_err(ApiError::Internal)?;
        }

        info!(count, "Seeded dining halls");
        Ok(count)
    }

    /// Sync menu items for a date from the provider into the database,
    /// replacing whatever was stored for that date
    pub async fn seed_menu_items(
        pool: &PgPool,
        provider: &dyn MenuProvider,
        menu_date: NaiveDate,
    ) -> Result<usize, ApiError> {
        let hall_ids = MenuRepository::hall_ids_by_code(pool)
            .await
            .map_err(ApiError::Internal)?;

        let mut rows = Vec::new();
        for item in provider
            .menu_items_for_date(menu_date)
            .await
            .map_err(ApiError::Internal)?
        {
            match hall_ids.get(&item.dining_hall_code) {
                Some(&hall_id) => rows.push((hall_id, item)),
                None => {
                    warn!(
                        code = %item.dining_hall_code,
                        item = %item.name,
                        "Skipping menu item for unknown dining hall"
                    );
                }
            }
        }

        let count = MenuRepository::replace_items_for_date(pool, menu_date, &rows)
            .await
            .map_err(ApiError::Internal)?;

        info!(count, date = %menu_date, "Seeded menu items");
        Ok(count)
    }

    /// Ensure halls and the date's menu are present, seeding lazily on the
    /// first request that needs them
    pub async fn ensure_seeded(
        pool: &PgPool,
        provider: &dyn MenuProvider,
        menu_date: NaiveDate,
    ) -> Result<(), ApiError> {
        if MenuRepository::hall_count(pool)
            .await
            .map_err(ApiError::Internal)?
            == 0
        {
            Self::seed_dining_halls(pool, provider).await?;
        }

        if MenuRepository::count_items_for_date(pool, menu_date)
            .await
            .map_err(ApiError::Internal)?
            == 0
        {
            Self::seed_menu_items(pool, provider, menu_date).await?;
        }

        Ok(())
    }

    /// All active dining halls
    pub async fn dining_halls(
        pool: &PgPool,
        provider: &dyn MenuProvider,
        menu_date: NaiveDate,
    ) -> Result<DiningHallListResponse, ApiError> {
        Self::ensure_seeded(pool, provider, menu_date).await?;

        let halls = MenuRepository::list_active_halls(pool)
            .await
            .map_err(ApiError::Internal)?;

        let dining_halls: Vec<DiningHallResponse> =
            halls.into_iter().map(hall_to_response).collect();
        let count = dining_halls.len();

        Ok(DiningHallListResponse { dining_halls, count })
    }

    /// A single dining hall by ID
    pub async fn dining_hall(
        pool: &PgPool,
        provider: &dyn MenuProvider,
        menu_date: NaiveDate,
        hall_id: Uuid,
    ) -> Result<DiningHallResponse, ApiError> {
        Self::ensure_seeded(pool, provider, menu_date).await?;

        let hall = MenuRepository::find_hall_by_id(pool, hall_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Dining hall not found".to_string()))?;

        Ok(hall_to_response(hall))
    }

    /// One hall's menu for a date, grouped by meal period
    pub async fn menu_for_hall(
        pool: &PgPool,
        provider: &dyn MenuProvider,
        hall_id: Uuid,
        menu_date: NaiveDate,
    ) -> Result<MenuResponse, ApiError> {
        Self::ensure_seeded(pool, provider, menu_date).await?;

        let hall = MenuRepository::find_hall_by_id(pool, hall_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Dining hall not found".to_string()))?;

        let items = MenuRepository::items_for_hall_date(pool, hall_id, menu_date)
            .await
            .map_err(ApiError::Internal)?;

        let mut breakfast = Vec::new();
        let mut lunch = Vec::new();
        let mut dinner = Vec::new();
        for item in items {
            let response = item_to_response(item);
            match response.meal_period.as_str() {
                "breakfast" => breakfast.push(response),
                "lunch" => lunch.push(response),
                _ => dinner.push(response),
            }
        }

        Ok(MenuResponse {
            dining_hall: hall_to_response(hall),
            date: menu_date,
            breakfast,
            lunch,
            dinner,
        })
    }

    /// Flat item list for a date with optional filters
    pub async fn items(
        pool: &PgPool,
        provider: &dyn MenuProvider,
        menu_date: NaiveDate,
        filter: MenuItemFilter,
    ) -> Result<Vec<MenuItemResponse>, ApiError> {
        Self::ensure_seeded(pool, provider, menu_date).await?;

        let items = MenuRepository::items_filtered(pool, menu_date, &filter)
            .await
            .map_err(ApiError::Internal)?;

        Ok(items.into_iter().map(item_to_response).collect())
    }
}

#[cfg(test)]
mod tests {
    // Seeding and query behavior is covered by the menus integration tests,
    // which require a database.
}
