//! Meal plan and daily target models

use serde::{Deserialize, Serialize};

use super::season::Season;

/// One candidate meal from the static menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealOption {
    pub food_name: String,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub fiber_g: u32,
}

/// One meal slot of the daily plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlot {
    pub target_calories: u32,
    pub options: Vec<MealOption>,
}

/// The four meal slots of a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: MealSlot,
    pub lunch: MealSlot,
    pub dinner: MealSlot,
    pub snack: MealSlot,
}

/// Daily calorie, macro and water targets derived from a user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTargets {
    pub daily_calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub water_ml: u32,
    pub water_glasses: u32,
}

/// Complete daily meal plan returned by the planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    pub daily_targets: DailyTargets,
    pub meals: Meals,
    pub current_season: Season,
    pub bmr: u32,
    pub tdee: u32,
}

/// One seasonal food suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalFood {
    pub food_name: String,
    pub calories: u32,
    pub protein_g: u32,
}

/// Seasonal recommendation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalRecommendations {
    pub season: Season,
    pub foods: Vec<SeasonalFood>,
}
