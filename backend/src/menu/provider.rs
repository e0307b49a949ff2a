//! Menu provider strategy trait and its data transfer types

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Meal period a menu item is served in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "breakfast",
            MealPeriod::Lunch => "lunch",
            MealPeriod::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealPeriod::Breakfast),
            "lunch" => Ok(MealPeriod::Lunch),
            "dinner" => Ok(MealPeriod::Dinner),
            _ => Err(format!("Unknown meal period: {}", s)),
        }
    }
}

/// Dining hall as supplied by a provider, keyed by a stable code slug
#[derive(Debug, Clone)]
pub struct DiningHallData {
    pub code: String,
    pub name: String,
    pub short_name: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Menu item as supplied by a provider; the seeding layer attaches the date
#[derive(Debug, Clone)]
pub struct MenuItemData {
    pub dining_hall_code: String,
    pub name: String,
    pub description: String,
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
    pub meal_period: MealPeriod,
    pub station: Option<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub allergens: Vec<String>,
}

/// Source of dining hall and menu catalog data.
///
/// Implementations may be backed by static data, scrapers, or remote APIs;
/// callers hold one behind `Arc<dyn MenuProvider>` and treat it as a pure
/// data source.
#[async_trait]
pub trait MenuProvider: Send + Sync {
    /// All dining halls this provider knows about
    async fn dining_halls(&self) -> Result<Vec<DiningHallData>>;

    /// All menu items served on the given date, across every hall
    async fn menu_items_for_date(&self, menu_date: NaiveDate) -> Result<Vec<MenuItemData>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_period_round_trip() {
        for period in [MealPeriod::Breakfast, MealPeriod::Lunch, MealPeriod::Dinner] {
            assert_eq!(period.as_str().parse::<MealPeriod>().unwrap(), period);
        }
        assert!("brunch".parse::<MealPeriod>().is_err());
    }
}
