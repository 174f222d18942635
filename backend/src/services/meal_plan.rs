//! Meal plan assembly from the static menu
//!
//! Distributes daily calories across the four meal slots by fixed shares and
//! attaches up to three candidate meals per slot. Shares are rounded per
//! slot and are not re-normalized, so the slot targets need not re-sum
//! exactly to the daily total.
//!
//! Known limitation: diet type and allergies from the profile are not used
//! to filter the menu.

use shared::{MealOption, MealSlot, Meals};

/// Share of daily calories assigned to each slot. Sums to 1.0.
const BREAKFAST_SHARE: f64 = 0.25;
const LUNCH_SHARE: f64 = 0.35;
const DINNER_SHARE: f64 = 0.30;
const SNACK_SHARE: f64 = 0.10;

/// Candidate meals attached per slot.
const OPTIONS_PER_SLOT: usize = 3;

/// Assemble the four meal slots for a daily calorie target.
pub fn assemble_meals(daily_calories: u32) -> Meals {
    Meals {
        breakfast: slot(daily_calories, BREAKFAST_SHARE, breakfast_menu()),
        lunch: slot(daily_calories, LUNCH_SHARE, lunch_menu()),
        dinner: slot(daily_calories, DINNER_SHARE, dinner_menu()),
        snack: slot(daily_calories, SNACK_SHARE, snack_menu()),
    }
}

fn slot(daily_calories: u32, share: f64, menu: Vec<MealOption>) -> MealSlot {
    MealSlot {
        target_calories: (f64::from(daily_calories) * share).round() as u32,
        options: menu.into_iter().take(OPTIONS_PER_SLOT).collect(),
    }
}

fn option(
    food_name: &str,
    calories: u32,
    protein_g: u32,
    carbs_g: u32,
    fat_g: u32,
    fiber_g: u32,
) -> MealOption {
    MealOption {
        food_name: food_name.to_string(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
    }
}

fn breakfast_menu() -> Vec<MealOption> {
    vec![
        option("Oatmeal with Berries and Nuts", 350, 12, 55, 10, 8),
        option("Greek Yogurt Parfait", 300, 20, 35, 8, 4),
        option("Whole Wheat Toast with Avocado", 320, 10, 38, 15, 9),
    ]
}

fn lunch_menu() -> Vec<MealOption> {
    vec![
        option("Quinoa Buddha Bowl", 500, 18, 65, 18, 10),
        option("Grilled Chicken Salad", 450, 35, 20, 25, 6),
        option("Vegetable Curry with Brown Rice", 480, 15, 70, 15, 8),
    ]
}

fn dinner_menu() -> Vec<MealOption> {
    vec![
        option("Grilled Salmon with Vegetables", 550, 40, 35, 28, 7),
        option("Lentil Pasta with Marinara", 520, 22, 75, 12, 12),
        option("Tofu Stir-Fry with Quinoa", 480, 20, 60, 18, 9),
    ]
}

fn snack_menu() -> Vec<MealOption> {
    vec![
        option("Apple with Almond Butter", 200, 6, 25, 10, 5),
        option("Hummus with Vegetables", 150, 5, 18, 7, 5),
        option("Trail Mix", 180, 5, 15, 12, 3),
    ]
}
