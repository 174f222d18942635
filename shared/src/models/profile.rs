//! User profile models for the diet planner

use serde::{Deserialize, Serialize};

/// Biological sex used by the Mifflin-St Jeor equation.
///
/// Anything other than an explicit "male" falls to the female constant, so
/// profile submissions with blank or unrecognized values still compute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    Male,
    #[default]
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" => Sex::Male,
            _ => Sex::Female,
        }
    }
}

impl From<Sex> for String {
    fn from(value: Sex) -> Self {
        value.as_str().to_string()
    }
}

/// Self-reported activity level, mapped to a TDEE multiplier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        match value.trim() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            // Unrecognized levels take the moderate multiplier
            _ => ActivityLevel::Moderate,
        }
    }
}

impl From<ActivityLevel> for String {
    fn from(value: ActivityLevel) -> Self {
        value.as_str().to_string()
    }
}

/// Weight goal driving the calorie adjustment and macro split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    LoseWeight,
    #[default]
    Maintain,
    GainWeight,
}

impl Goal {
    /// Daily kcal adjustment applied on top of TDEE.
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::LoseWeight => -500.0,
            Goal::Maintain => 0.0,
            Goal::GainWeight => 300.0,
        }
    }

    /// Macro percentage split for this goal. Always sums to 1.0.
    pub fn macro_split(self) -> MacroSplit {
        match self {
            Goal::LoseWeight => MacroSplit {
                protein: 0.35,
                carbs: 0.30,
                fat: 0.35,
            },
            Goal::Maintain | Goal::GainWeight => MacroSplit {
                protein: 0.30,
                carbs: 0.40,
                fat: 0.30,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::Maintain => "maintain",
            Goal::GainWeight => "gain_weight",
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        match value.trim() {
            "lose_weight" => Goal::LoseWeight,
            "gain_weight" => Goal::GainWeight,
            // Unrecognized goals behave like maintenance
            _ => Goal::Maintain,
        }
    }
}

impl From<Goal> for String {
    fn from(value: Goal) -> Self {
        value.as_str().to_string()
    }
}

/// Macro percentage split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// User profile submitted to the diet planner.
///
/// Missing numeric fields default to zero; enum fields coerce unrecognized
/// values to their documented defaults rather than rejecting the request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub height_cm: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub diet_type: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub cuisines: serde_json::Map<String, serde_json::Value>,
}
