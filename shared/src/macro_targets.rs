//! Macro-nutrient target calculations
//!
//! Parses body metrics, estimates energy expenditure (Mifflin-St Jeor BMR
//! scaled by an activity multiplier), and allocates daily protein, carb, and
//! fat grams for a dieting goal.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Total**: Every input produces a value; invalid biometrics degrade to
//!    [`DEFAULT_TARGETS`] instead of an error
//! 3. **Table-Driven**: Each goal/activity policy is a named constant table
//!    with its own fallback value

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

const KG_PER_LB: f64 = 0.453592;
const CM_PER_FOOT: f64 = 30.48;
const CM_PER_INCH: f64 = 2.54;

const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
const CALORIES_PER_GRAM_CARBS: f64 = 4.0;
const CALORIES_PER_GRAM_FAT: f64 = 9.0;

// ============================================================================
// Policy Tables
// ============================================================================

/// TDEE activity multipliers, indexed Sedentary .. Very Active.
pub const ACTIVITY_MULTIPLIERS: [f64; 5] = [1.20, 1.375, 1.55, 1.725, 1.90];

/// Multiplier used when the activity index is out of range.
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.20;

/// Calorie adjustment per goal: lean muscle (surplus), bulking (larger
/// surplus), fat loss (deficit), maintenance.
pub const CALORIE_ADJUSTMENTS: [f64; 4] = [1.10, 1.20, 0.80, 1.00];

/// Adjustment used when the goal index is out of range.
pub const DEFAULT_CALORIE_ADJUSTMENT: f64 = 1.00;

/// Protein grams per pound of body weight, per goal.
pub const PROTEIN_PER_LB: [f64; 4] = [0.9, 0.8, 1.0, 0.7];

/// Protein grams per pound used when the goal index is out of range.
pub const DEFAULT_PROTEIN_PER_LB: f64 = 0.8;

/// Share of target calories allocated to fat, per goal.
pub const FAT_CALORIE_PERCENT: [f64; 4] = [0.28, 0.28, 0.25, 0.28];

/// Fat share used when the goal index is out of range.
pub const DEFAULT_FAT_CALORIE_PERCENT: f64 = 0.28;

/// Targets returned when biometrics are missing or unusable.
pub const DEFAULT_TARGETS: MacroTargets = MacroTargets {
    calories: 2400,
    protein_g: 180,
    carbs_g: 240,
    fat_g: 70,
};

/// Daily macro-nutrient targets in whole kilocalories and grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

fn table_lookup(table: &[f64], index: i32, default: f64) -> f64 {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(default)
}

// ============================================================================
// Height Parsing and Unit Conversion
// ============================================================================

/// Convert free-text height to centimeters.
///
/// Accepts `5'10"`, a bare feet value (`"6"`), or a centimeter value
/// (`"178 cm"`, `"178"`). A bare number only reads as centimeters when it
/// exceeds 100, so small feet-only entries are not mistaken for cm.
///
/// Returns `0.0` for anything unparseable; that sentinel drives the fallback
/// in [`calculate_all_macros`]. Never panics.
pub fn height_to_cm(height_text: &str) -> f64 {
    let without_cm = height_text.replace("cm", "");
    if let Ok(value) = without_cm.trim().parse::<f64>() {
        if value > 100.0 {
            return value;
        }
    }

    let cleaned = height_text.replace('"', "").replace('\'', " ");
    let mut parts = cleaned.split_whitespace();

    let Some(first) = parts.next() else {
        return 0.0;
    };

    match parts.next() {
        // Single token reads as whole feet.
        None => first
            .parse::<f64>()
            .map(|feet| feet * CM_PER_FOOT)
            .unwrap_or(0.0),
        Some(second) => match (first.parse::<f64>(), second.parse::<f64>()) {
            (Ok(feet), Ok(inches)) => feet * CM_PER_FOOT + inches * CM_PER_INCH,
            _ => 0.0,
        },
    }
}

/// Convert pounds to kilograms.
pub fn lbs_to_kg(lbs: i32) -> f64 {
    f64::from(lbs) * KG_PER_LB
}

// ============================================================================
// Energy Expenditure
// ============================================================================

/// Basal Metabolic Rate via the Mifflin-St Jeor equation.
///
/// `10 x weight(kg) + 6.25 x height(cm) - 5 x age(y)`, then `+5` for males
/// and `-161` otherwise. Inputs are assumed pre-validated; see
/// [`calculate_all_macros`] for the gate.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, is_male: bool) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    if is_male {
        base + 5.0
    } else {
        base - 161.0
    }
}

/// Total Daily Energy Expenditure: BMR scaled by the activity multiplier.
///
/// An out-of-range index uses [`DEFAULT_ACTIVITY_MULTIPLIER`].
pub fn calculate_tdee(bmr: f64, activity_level_index: i32) -> f64 {
    bmr * table_lookup(
        &ACTIVITY_MULTIPLIERS,
        activity_level_index,
        DEFAULT_ACTIVITY_MULTIPLIER,
    )
}

// ============================================================================
// Calorie Target and Macro Allocation
// ============================================================================

/// Goal-adjusted daily calorie target, rounded half away from zero.
pub fn calculate_target_calories(tdee: f64, goal_type_index: i32) -> i32 {
    let adjustment = table_lookup(
        &CALORIE_ADJUSTMENTS,
        goal_type_index,
        DEFAULT_CALORIE_ADJUSTMENT,
    );
    (tdee * adjustment).round() as i32
}

/// Allocate `(protein_g, carbs_g, fat_g)` for a calorie target.
///
/// Protein is anchored to body weight and fat to a share of calories; carbs
/// absorb whatever calories remain, clamped at zero. Fixing protein first
/// keeps the weight-based target intact even on aggressive deficits.
/// All grams round half away from zero.
pub fn calculate_macros(target_calories: i32, weight_lbs: i32, goal_type_index: i32) -> (i32, i32, i32) {
    let protein_per_lb = table_lookup(&PROTEIN_PER_LB, goal_type_index, DEFAULT_PROTEIN_PER_LB);
    let fat_percent = table_lookup(
        &FAT_CALORIE_PERCENT,
        goal_type_index,
        DEFAULT_FAT_CALORIE_PERCENT,
    );

    let protein_g = (f64::from(weight_lbs) * protein_per_lb).round() as i32;
    let fat_g = (f64::from(target_calories) * fat_percent / CALORIES_PER_GRAM_FAT).round() as i32;

    let carb_calories = f64::from(target_calories)
        - f64::from(protein_g) * CALORIES_PER_GRAM_PROTEIN
        - f64::from(fat_g) * CALORIES_PER_GRAM_FAT;
    let carbs_g = ((carb_calories / CALORIES_PER_GRAM_CARBS).round() as i32).max(0);

    (protein_g, carbs_g, fat_g)
}

// ============================================================================
// Pipeline Entry Point
// ============================================================================

/// Compute daily macro targets from raw profile fields.
///
/// This is the single entry point for macro numbers: it converts units, gates
/// on usable biometrics, and runs BMR -> TDEE -> calorie target -> gram
/// allocation. Non-positive weight or age, or a height that fails to parse,
/// short-circuits to [`DEFAULT_TARGETS`]. It never returns an error, so
/// callers can persist the result unconditionally.
pub fn calculate_all_macros(
    weight_lbs: i32,
    height_text: &str,
    age_years: i32,
    is_male: bool,
    activity_level_index: i32,
    goal_type_index: i32,
) -> MacroTargets {
    let weight_kg = lbs_to_kg(weight_lbs);
    let height_cm = height_to_cm(height_text);

    if weight_kg <= 0.0 || height_cm <= 0.0 || age_years <= 0 {
        return DEFAULT_TARGETS;
    }

    let bmr = calculate_bmr(weight_kg, height_cm, age_years, is_male);
    let tdee = calculate_tdee(bmr, activity_level_index);
    let calories = calculate_target_calories(tdee, goal_type_index);
    let (protein_g, carbs_g, fat_g) = calculate_macros(calories, weight_lbs, goal_type_index);

    MacroTargets {
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}
