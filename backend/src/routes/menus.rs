//! Menu API routes: dining halls and dated menus
//!
//! Catalog data is seeded lazily from the provider in AppState on the first
//! request that needs it; see the menu service.

use crate::error::{ApiError, ApiResult};
use crate::repositories::MenuItemFilter;
use crate::services::MenuService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use meal_planner_shared::types::{
    DiningHallListResponse, DiningHallResponse, MenuItemResponse, MenuResponse,
};
use serde::Deserialize;
use uuid::Uuid;

/// Create menu routes
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_menu))
        .route("/dining-halls", get(get_dining_halls))
        .route("/dining-halls/:hall_id", get(get_dining_hall))
        .route("/items", get(get_menu_items))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// GET /api/v1/menus/dining-halls - All active dining halls
async fn get_dining_halls(
    State(state): State<AppState>,
) -> ApiResult<Json<DiningHallListResponse>> {
    let halls = MenuService::dining_halls(&state.db, state.menu_provider(), today()).await?;
    Ok(Json(halls))
}

/// GET /api/v1/menus/dining-halls/:hall_id - A single dining hall
async fn get_dining_hall(
    State(state): State<AppState>,
    Path(hall_id): Path<Uuid>,
) -> ApiResult<Json<DiningHallResponse>> {
    let hall = MenuService::dining_hall(&state.db, state.menu_provider(), today(), hall_id).await?;
    Ok(Json(hall))
}

/// Query parameters for a hall menu
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Dining hall ID
    pub dining_hall: Uuid,
    /// Menu date (YYYY-MM-DD), defaults to today
    pub date: Option<NaiveDate>,
}

/// GET /api/v1/menus?dining_hall=<id>&date=<date>
///
/// One hall's menu for a date, grouped by meal period.
async fn get_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> ApiResult<Json<MenuResponse>> {
    let menu_date = query.date.unwrap_or_else(today);
    let menu = MenuService::menu_for_hall(
        &state.db,
        state.menu_provider(),
        query.dining_hall,
        menu_date,
    )
    .await?;
    Ok(Json(menu))
}

/// Query parameters for filtered menu items
#[derive(Debug, Deserialize)]
pub struct MenuItemsQuery {
    /// Filter by dining hall ID
    pub dining_hall: Option<Uuid>,
    /// Menu date (YYYY-MM-DD), defaults to today
    pub date: Option<NaiveDate>,
    /// Filter by meal period: breakfast, lunch, dinner
    pub meal_period: Option<String>,
    /// Vegetarian items only
    #[serde(default)]
    pub vegetarian: bool,
    /// Vegan items only
    #[serde(default)]
    pub vegan: bool,
    /// Gluten-free items only
    #[serde(default)]
    pub gluten_free: bool,
    /// Minimum protein (grams)
    pub min_protein: Option<i32>,
    /// Maximum calories
    pub max_calories: Option<i32>,
}

/// GET /api/v1/menus/items - Menu items with optional filters
///
/// Useful for finding items that match dietary requirements or macro goals.
async fn get_menu_items(
    State(state): State<AppState>,
    Query(query): Query<MenuItemsQuery>,
) -> ApiResult<Json<Vec<MenuItemResponse>>> {
    // Normalize the meal period up front so typos 400 instead of matching nothing
    let meal_period = query
        .meal_period
        .map(|p| {
            p.parse::<crate::menu::MealPeriod>()
                .map_err(ApiError::BadRequest)
        })
        .transpose()?;

    let filter = MenuItemFilter {
        dining_hall_id: query.dining_hall,
        meal_period: meal_period.map(|p| p.as_str().to_string()),
        vegetarian: query.vegetarian,
        vegan: query.vegan,
        gluten_free: query.gluten_free,
        min_protein: query.min_protein,
        max_calories: query.max_calories,
    };
    let menu_date = query.date.unwrap_or_else(today);

    let items = MenuService::items(&state.db, state.menu_provider(), menu_date, filter).await?;
    Ok(Json(items))
}
