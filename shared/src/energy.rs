//! Energy and macro arithmetic for daily nutrition targets
//!
//! All functions here are total and deterministic: malformed profile values
//! have already been coerced to documented defaults by the model layer, so
//! nothing in this module has a failure path.

use crate::models::{DailyTargets, Goal, Sex, UserProfile};

/// Kcal per gram of protein and carbohydrate.
const KCAL_PER_G_PROTEIN_CARBS: f64 = 4.0;
/// Kcal per gram of fat.
const KCAL_PER_G_FAT: f64 = 9.0;
/// Daily water target in ml per kg of body weight.
const WATER_ML_PER_KG: f64 = 35.0;
/// Volume of one glass of water in ml.
const GLASS_ML: f64 = 250.0;

/// Basal metabolic rate via the Mifflin-St Jeor equation, in kcal/day.
pub fn bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier,
/// rounded to the nearest kcal.
pub fn tdee(bmr: f64, profile: &UserProfile) -> u32 {
    (bmr * profile.activity_level.multiplier()).round().max(0.0) as u32
}

/// Goal-adjusted daily calorie target. Clamped at zero so a deficit can
/// never underflow for very small profiles.
pub fn goal_calories(tdee: u32, goal: Goal) -> u32 {
    (f64::from(tdee) + goal.calorie_adjustment()).round().max(0.0) as u32
}

/// Macro gram targets for a daily calorie total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Macro gram targets from the goal's percentage split at 4/4/9 kcal per gram.
pub fn macro_targets(daily_calories: u32, goal: Goal) -> MacroTargets {
    let split = goal.macro_split();
    let calories = f64::from(daily_calories);
    MacroTargets {
        protein_g: (calories * split.protein / KCAL_PER_G_PROTEIN_CARBS).round() as u32,
        carbs_g: (calories * split.carbs / KCAL_PER_G_PROTEIN_CARBS).round() as u32,
        fat_g: (calories * split.fat / KCAL_PER_G_FAT).round() as u32,
    }
}

/// Daily water target in ml and 250 ml glasses.
pub fn water_targets(weight_kg: f64) -> (u32, u32) {
    let water_ml = (weight_kg * WATER_ML_PER_KG).round().max(0.0) as u32;
    let glasses = (f64::from(water_ml) / GLASS_ML).round() as u32;
    (water_ml, glasses)
}

/// Full set of daily targets for a profile.
pub fn daily_targets(profile: &UserProfile) -> DailyTargets {
    let tdee = tdee(bmr(profile), profile);
    let daily_calories = goal_calories(tdee, profile.goal);
    let macros = macro_targets(daily_calories, profile.goal);
    let (water_ml, water_glasses) = water_targets(profile.weight_kg);
    DailyTargets {
        daily_calories,
        protein_g: macros.protein_g,
        carbs_g: macros.carbs_g,
        fat_g: macros.fat_g,
        water_ml,
        water_glasses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Sex};

    fn reference_profile() -> UserProfile {
        UserProfile {
            age: 30,
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::LoseWeight,
            ..Default::default()
        }
    }

    #[test]
    fn test_bmr_male_reference() {
        let profile = reference_profile();
        assert!((bmr(&profile) - 1673.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female_subtracts_161() {
        let profile = UserProfile {
            sex: Sex::Female,
            ..reference_profile()
        };
        assert!((bmr(&profile) - 1507.75).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_moderate() {
        let profile = reference_profile();
        assert_eq!(tdee(bmr(&profile), &profile), 2594);
    }

    #[test]
    fn test_goal_calories_lose_weight() {
        assert_eq!(goal_calories(2594, Goal::LoseWeight), 2094);
        assert_eq!(goal_calories(2594, Goal::Maintain), 2594);
        assert_eq!(goal_calories(2594, Goal::GainWeight), 2894);
    }

    #[test]
    fn test_goal_calories_never_underflow() {
        assert_eq!(goal_calories(300, Goal::LoseWeight), 0);
    }

    #[test]
    fn test_macro_targets_lose_weight() {
        let macros = macro_targets(2094, Goal::LoseWeight);
        assert_eq!(macros.protein_g, 183);
        assert_eq!(macros.carbs_g, 157);
        assert_eq!(macros.fat_g, 81);
    }

    #[test]
    fn test_water_targets_reference() {
        assert_eq!(water_targets(70.0), (2450, 10));
    }

    #[test]
    fn test_daily_targets_reference_profile() {
        let targets = daily_targets(&reference_profile());
        assert_eq!(
            targets,
            DailyTargets {
                daily_calories: 2094,
                protein_g: 183,
                carbs_g: 157,
                fat_g: 81,
                water_ml: 2450,
                water_glasses: 10,
            }
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Totality: any profile yields finite, non-degenerate targets.
            #[test]
            fn prop_daily_targets_are_total(
                age in 0u32..120,
                weight in 0.0f64..300.0,
                height in 0.0f64..250.0,
            ) {
                let profile = UserProfile {
                    age,
                    weight_kg: weight,
                    height_cm: height,
                    ..Default::default()
                };
                let targets = daily_targets(&profile);
                prop_assert!(targets.water_glasses <= targets.water_ml);
                prop_assert_eq!(
                    targets.water_ml,
                    (weight * WATER_ML_PER_KG).round().max(0.0) as u32
                );
            }

            /// TDEE never falls below BMR for any activity level.
            #[test]
            fn prop_tdee_at_least_bmr(
                age in 18u32..80,
                weight in 40.0f64..150.0,
                height in 140.0f64..210.0,
            ) {
                let profile = UserProfile {
                    age,
                    weight_kg: weight,
                    height_cm: height,
                    ..Default::default()
                };
                let basal = bmr(&profile);
                prop_assert!(f64::from(tdee(basal, &profile)) >= basal.floor());
            }
        }
    }
}
