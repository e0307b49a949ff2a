//! Seeded menu provider with a realistic static catalog
//!
//! Returns hardcoded but realistic UCLA dining data for development and
//! testing. The catalog is the same for every date; a live provider would
//! vary it.

use super::provider::{DiningHallData, MealPeriod, MenuItemData, MenuProvider};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Menu provider backed by an in-memory catalog
#[derive(Debug, Default)]
pub struct SeededMenuProvider;

impl SeededMenuProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MenuProvider for SeededMenuProvider {
    async fn dining_halls(&self) -> Result<Vec<DiningHallData>> {
        Ok(dining_halls())
    }

    async fn menu_items_for_date(&self, _menu_date: NaiveDate) -> Result<Vec<MenuItemData>> {
        Ok(menu_items())
    }
}

fn hall(code: &str, name: &str, short_name: &str, location: &str, description: &str) -> DiningHallData {
    DiningHallData {
        code: code.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        image_url: None,
    }
}

fn dining_halls() -> Vec<DiningHallData> {
    vec![
        hall(
            "bplate",
            "Bruin Plate",
            "BPlate",
            "Sproul Landing",
            "Health-conscious dining with fresh, sustainable options",
        ),
        hall(
            "epicuria",
            "Epicuria at Covel",
            "Epicuria",
            "Covel Commons",
            "Mediterranean and Italian inspired cuisine",
        ),
        hall(
            "de_neve",
            "De Neve",
            "De Neve",
            "De Neve Plaza",
            "Classic American comfort food and international options",
        ),
        hall(
            "feast",
            "Feast at Rieber",
            "Feast",
            "Rieber Hall",
            "Asian fusion cuisine with diverse flavors",
        ),
        hall(
            "rendezvous",
            "Rendezvous",
            "Rendezvous",
            "Carnesale Commons",
            "Quick-service dining with varied options",
        ),
        hall(
            "bcafe",
            "Bruin Café",
            "BCafe",
            "Ackerman Union",
            "Café-style dining with grab-and-go options",
        ),
    ]
}

struct ItemSpec {
    hall: &'static str,
    name: &'static str,
    description: &'static str,
    macros: (i32, i32, i32, i32), // calories, protein, carbs, fat
    period: MealPeriod,
    station: &'static str,
    vegetarian: bool,
    vegan: bool,
    gluten_free: bool,
    allergens: &'static [&'static str],
}

impl ItemSpec {
    fn build(&self) -> MenuItemData {
        let (calories, protein_g, carbs_g, fat_g) = self.macros;
        MenuItemData {
            dining_hall_code: self.hall.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            meal_period: self.period,
            station: (!self.station.is_empty()).then(|| self.station.to_string()),
            is_vegetarian: self.vegetarian,
            is_vegan: self.vegan,
            is_gluten_free: self.gluten_free,
            allergens: self.allergens.iter().map(|a| a.to_string()).collect(),
        }
    }
}

macro_rules! items {
    ($($hall:literal : $period:ident / $station:literal :
        $name:literal, $description:literal,
        ($cal:literal, $protein:literal, $carbs:literal, $fat:literal),
        veg = $veg:literal, vegan = $vegan:literal, gf = $gf:literal,
        allergens = [$($allergen:literal),*];
    )*) => {
        vec![
            $(ItemSpec {
                hall: $hall,
                name: $name,
                description: $description,
                macros: ($cal, $protein, $carbs, $fat),
                period: MealPeriod::$period,
                station: $station,
                vegetarian: $veg,
                vegan: $vegan,
                gluten_free: $gf,
                allergens: &[$($allergen),*],
            }.build(),)*
        ]
    };
}

fn menu_items() -> Vec<MenuItemData> {
    items![
        // Bruin Plate: health-focused
        "bplate": Breakfast / "Grill":
            "Egg White Veggie Scramble", "Egg whites with spinach, tomatoes, and mushrooms",
            (180, 18, 8, 9), veg = true, vegan = false, gf = true, allergens = ["egg"];
        "bplate": Breakfast / "Grains":
            "Steel Cut Oatmeal", "Organic oats with fresh berries and honey",
            (220, 8, 42, 4), veg = true, vegan = true, gf = false, allergens = [];
        "bplate": Breakfast / "Cold Bar":
            "Greek Yogurt Parfait", "Non-fat Greek yogurt with granola and mixed berries",
            (240, 15, 38, 4), veg = true, vegan = false, gf = false, allergens = ["milk"];
        "bplate": Lunch / "Grill":
            "Grilled Salmon", "Wild-caught salmon with lemon herb seasoning",
            (320, 34, 2, 19), veg = false, vegan = false, gf = true, allergens = ["fish"];
        "bplate": Lunch / "Bowl Bar":
            "Quinoa Buddha Bowl", "Quinoa with roasted vegetables, chickpeas, and tahini",
            (420, 14, 58, 16), veg = true, vegan = true, gf = true, allergens = ["sesame"];
        "bplate": Dinner / "Grill":
            "Herb Roasted Chicken Breast", "Free-range chicken with rosemary and thyme",
            (280, 42, 1, 11), veg = false, vegan = false, gf = true, allergens = [];
        "bplate": Dinner / "Sides":
            "Roasted Brussels Sprouts", "Charred sprouts with balsamic glaze",
            (110, 4, 14, 5), veg = true, vegan = true, gf = true, allergens = [];

        // Epicuria: Mediterranean
        "epicuria": Breakfast / "Bakery":
            "Spinach Feta Frittata", "Baked eggs with spinach and feta",
            (260, 17, 6, 19), veg = true, vegan = false, gf = true, allergens = ["egg", "milk"];
        "epicuria": Lunch / "Pasta":
            "Chicken Pesto Pasta", "Penne tossed with basil pesto and grilled chicken",
            (620, 35, 62, 24), veg = false, vegan = false, gf = false, allergens = ["wheat", "milk", "tree nuts"];
        "epicuria": Lunch / "Pizza":
            "Margherita Pizza", "Wood-fired pizza with fresh mozzarella and basil",
            (540, 22, 64, 21), veg = true, vegan = false, gf = false, allergens = ["wheat", "milk"];
        "epicuria": Dinner / "Entree":
            "Lamb Kofta", "Spiced lamb skewers with tzatziki",
            (410, 28, 9, 28), veg = false, vegan = false, gf = true, allergens = ["milk"];
        "epicuria": Dinner / "Salad Bar":
            "Greek Salad", "Tomato, cucumber, olives, and feta with oregano vinaigrette",
            (190, 6, 11, 14), veg = true, vegan = false, gf = true, allergens = ["milk"];

        // De Neve: American comfort
        "de_neve": Breakfast / "Grill":
            "Buttermilk Pancakes", "Stack of three with maple syrup",
            (520, 11, 92, 12), veg = true, vegan = false, gf = false, allergens = ["wheat", "egg", "milk"];
        "de_neve": Lunch / "Grill":
            "Classic Cheeseburger", "Quarter-pound patty with cheddar on a brioche bun",
            (680, 34, 48, 38), veg = false, vegan = false, gf = false, allergens = ["wheat", "milk"];
        "de_neve": Lunch / "Salad Bar":
            "Southwest Chicken Salad", "Romaine, grilled chicken, black beans, corn, chipotle ranch",
            (380, 31, 24, 17), veg = false, vegan = false, gf = true, allergens = ["egg", "milk"];
        "de_neve": Dinner / "Entree":
            "Baked Mac and Cheese", "Three-cheese blend with toasted breadcrumbs",
            (560, 21, 58, 27), veg = true, vegan = false, gf = false, allergens = ["wheat", "milk"];
        "de_neve": Dinner / "Entree":
            "BBQ Pulled Pork", "Slow-cooked pork shoulder with house barbecue sauce",
            (450, 33, 31, 20), veg = false, vegan = false, gf = true, allergens = [];

        // Feast: Asian fusion
        "feast": Breakfast / "Grains":
            "Vegetable Congee", "Rice porridge with scallions and pickled vegetables",
            (210, 6, 43, 2), veg = true, vegan = true, gf = true, allergens = ["soy"];
        "feast": Lunch / "Wok":
            "Kung Pao Chicken", "Stir-fried chicken with peanuts and dried chilies",
            (480, 29, 36, 24), veg = false, vegan = false, gf = false, allergens = ["peanuts", "soy", "wheat"];
        "feast": Lunch / "Rice Bar":
            "Tofu Teriyaki Bowl", "Glazed tofu over steamed rice with broccoli",
            (430, 19, 62, 12), veg = true, vegan = true, gf = false, allergens = ["soy", "wheat"];
        "feast": Dinner / "Wok":
            "Beef and Broccoli", "Flank steak in ginger-garlic sauce over jasmine rice",
            (520, 31, 54, 19), veg = false, vegan = false, gf = false, allergens = ["soy", "wheat"];
        "feast": Dinner / "Noodle Bar":
            "Vegetable Pad Thai", "Rice noodles with egg, bean sprouts, and tamarind sauce",
            (490, 14, 72, 16), veg = true, vegan = false, gf = true, allergens = ["egg", "peanuts", "soy"];

        // Rendezvous: quick service
        "rendezvous": Breakfast / "Grill":
            "Breakfast Burrito", "Scrambled eggs, cheese, and potatoes in a flour tortilla",
            (560, 22, 58, 26), veg = true, vegan = false, gf = false, allergens = ["wheat", "egg", "milk"];
        "rendezvous": Lunch / "Taqueria":
            "Carne Asada Tacos", "Three street tacos with onion and cilantro",
            (440, 27, 39, 19), veg = false, vegan = false, gf = true, allergens = [];
        "rendezvous": Lunch / "Taqueria":
            "Veggie Burrito Bowl", "Rice, beans, fajita vegetables, salsa, and guacamole",
            (510, 15, 74, 17), veg = true, vegan = true, gf = true, allergens = [];
        "rendezvous": Dinner / "Grill":
            "Chicken Quesadilla", "Grilled flour tortilla with jack cheese and chicken",
            (590, 33, 44, 30), veg = false, vegan = false, gf = false, allergens = ["wheat", "milk"];

        // Bruin Café: grab-and-go
        "bcafe": Breakfast / "Bakery":
            "Blueberry Muffin", "House-baked with wild blueberries",
            (390, 6, 56, 16), veg = true, vegan = false, gf = false, allergens = ["wheat", "egg", "milk"];
        "bcafe": Lunch / "Deli":
            "Turkey Avocado Sandwich", "Roast turkey, avocado, and sprouts on wheat",
            (470, 28, 46, 19), veg = false, vegan = false, gf = false, allergens = ["wheat"];
        "bcafe": Lunch / "Deli":
            "Caprese Panini", "Mozzarella, tomato, and basil on pressed ciabatta",
            (520, 21, 52, 25), veg = true, vegan = false, gf = false, allergens = ["wheat", "milk"];
        "bcafe": Dinner / "Deli":
            "Chicken Caesar Wrap", "Romaine, parmesan, and grilled chicken in a spinach wrap",
            (540, 32, 45, 25), veg = false, vegan = false, gf = false, allergens = ["wheat", "egg", "milk", "fish"];
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 7).unwrap()
    }

    #[tokio::test]
    async fn test_all_halls_present() {
        let provider = SeededMenuProvider::new();
        let halls = provider.dining_halls().await.unwrap();
        assert_eq!(halls.len(), 6);

        let codes: Vec<&str> = halls.iter().map(|h| h.code.as_str()).collect();
        assert!(codes.contains(&"bplate"));
        assert!(codes.contains(&"epicuria"));
        assert!(codes.contains(&"bcafe"));
    }

    #[tokio::test]
    async fn test_items_reference_known_halls() {
        let provider = SeededMenuProvider::new();
        let halls = provider.dining_halls().await.unwrap();
        let codes: Vec<String> = halls.into_iter().map(|h| h.code).collect();

        for item in provider.menu_items_for_date(test_date()).await.unwrap() {
            assert!(
                codes.contains(&item.dining_hall_code),
                "item {} references unknown hall {}",
                item.name,
                item.dining_hall_code
            );
        }
    }

    #[tokio::test]
    async fn test_every_hall_serves_every_period() {
        let provider = SeededMenuProvider::new();
        let items = provider.menu_items_for_date(test_date()).await.unwrap();

        for hall in ["bplate", "epicuria", "de_neve", "feast", "rendezvous", "bcafe"] {
            for period in [MealPeriod::Breakfast, MealPeriod::Lunch, MealPeriod::Dinner] {
                assert!(
                    items
                        .iter()
                        .any(|i| i.dining_hall_code == hall && i.meal_period == period),
                    "{} has no {} items",
                    hall,
                    period
                );
            }
        }
    }

    #[tokio::test]
    async fn test_vegan_items_are_vegetarian() {
        let provider = SeededMenuProvider::new();
        for item in provider.menu_items_for_date(test_date()).await.unwrap() {
            if item.is_vegan {
                assert!(item.is_vegetarian, "{} is vegan but not vegetarian", item.name);
            }
        }
    }

    #[tokio::test]
    async fn test_macros_are_plausible() {
        let provider = SeededMenuProvider::new();
        for item in provider.menu_items_for_date(test_date()).await.unwrap() {
            assert!(item.calories > 0);
            // 4/4/9 reconstruction should land near the listed calories.
            let computed = item.protein_g * 4 + item.carbs_g * 4 + item.fat_g * 9;
            let delta = (computed - item.calories).abs();
            assert!(
                delta <= item.calories / 4,
                "{}: listed {} kcal vs computed {}",
                item.name,
                item.calories,
                computed
            );
        }
    }
}
