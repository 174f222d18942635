//! Nutrition estimates for classified foods

use serde::{Deserialize, Serialize};

use super::food::CalorieMode;

/// Nutrition estimate for one classified food, keyed by calorie mode.
///
/// Modeled as a sum type so that "all required fields present" is checkable
/// per variant: a piecewise record cannot exist without its per-piece fields,
/// and a serving record cannot carry stray piecewise data. Serialization is
/// untagged so the variant fields flatten directly into API responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NutritionRecord {
    Piece {
        calories_per_piece: u32,
        weight_per_piece: f64,
        total_weight: f64,
        total_calories: u32,
    },
    Serving {
        total_weight: f64,
        total_calories: u32,
        calories_per_100g: u32,
    },
}

impl NutritionRecord {
    pub fn mode(&self) -> CalorieMode {
        match self {
            NutritionRecord::Piece { .. } => CalorieMode::Piece,
            NutritionRecord::Serving { .. } => CalorieMode::Serving,
        }
    }

    /// A record is usable only when every field is positive.
    ///
    /// Records are all-or-nothing: a record failing this check is replaced
    /// wholesale by a fallback record, never partially merged.
    pub fn is_valid(&self) -> bool {
        match *self {
            NutritionRecord::Piece {
                calories_per_piece,
                weight_per_piece,
                total_weight,
                total_calories,
            } => {
                calories_per_piece > 0
                    && weight_per_piece > 0.0
                    && total_weight > 0.0
                    && total_calories > 0
            }
            NutritionRecord::Serving {
                total_weight,
                total_calories,
                calories_per_100g,
            } => total_weight > 0.0 && total_calories > 0 && calories_per_100g > 0,
        }
    }
}
