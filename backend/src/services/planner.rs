//! Daily meal plan generation
//!
//! Uses the ML recommender when one is available and falls back to the
//! rule-based computation on any failure.

use shared::{energy, DailyPlan, Season, SeasonalFood, SeasonalRecommendations, UserProfile};

use crate::services::meal_plan::assemble_meals;
use crate::services::recommender::MealRecommender;

/// Generate a daily plan, preferring the ML recommender when present.
pub async fn generate_daily_plan(
    recommender: Option<&dyn MealRecommender>,
    profile: &UserProfile,
) -> DailyPlan {
    if let Some(recommender) = recommender {
        match recommender.recommend_daily_meals(profile).await {
            Ok(plan) => {
                tracing::info!("Meal plan generated using ML model");
                return plan;
            }
            Err(err) => {
                tracing::error!(error = %err, "ML model failed, using fallback");
            }
        }
    } else {
        tracing::info!("Using fallback meal plan generation");
    }
    rule_based_plan(profile)
}

/// Rule-based daily plan: deterministic nutrition arithmetic plus the static
/// menu, no model involved.
pub fn rule_based_plan(profile: &UserProfile) -> DailyPlan {
    let bmr = energy::bmr(profile);
    let tdee = energy::tdee(bmr, profile);
    let daily_targets = energy::daily_targets(profile);
    let meals = assemble_meals(daily_targets.daily_calories);

    DailyPlan {
        daily_targets,
        meals,
        current_season: Season::current(),
        bmr: bmr.round().max(0.0) as u32,
        tdee,
    }
}

/// Seasonal recommendations, preferring the ML recommender when present.
/// The fallback is a static list of placeholder foods for the season.
pub async fn seasonal_recommendations(
    recommender: Option<&dyn MealRecommender>,
    diet_type: Option<&str>,
    meal_type: Option<&str>,
    cuisines: &[String],
) -> SeasonalRecommendations {
    if let Some(recommender) = recommender {
        match recommender
            .seasonal_recommendations(diet_type, meal_type, cuisines)
            .await
        {
            Ok(recommendations) => return recommendations,
            Err(err) => {
                tracing::error!(error = %err, "ML model seasonal recommendations failed");
            }
        }
    }
    fallback_seasonal(meal_type)
}

fn fallback_seasonal(meal_type: Option<&str>) -> SeasonalRecommendations {
    let meal_type = meal_type.unwrap_or("");
    SeasonalRecommendations {
        season: Season::current(),
        foods: vec![
            SeasonalFood {
                food_name: format!("Seasonal {} Option 1", meal_type),
                calories: 300,
                protein_g: 15,
            },
            SeasonalFood {
                food_name: format!("Seasonal {} Option 2", meal_type),
                calories: 350,
                protein_g: 20,
            },
            SeasonalFood {
                food_name: format!("Seasonal {} Option 3", meal_type),
                calories: 280,
                protein_g: 12,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ActivityLevel, Goal, Sex};

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
    fn test_rule_based_plan_reference_profile() {
        let plan = rule_based_plan(&reference_profile());
        assert_eq!(plan.bmr, 1674);
        assert_eq!(plan.tdee, 2594);
        assert_eq!(plan.daily_targets.daily_calories, 2094);
        assert_eq!(plan.daily_targets.protein_g, 183);
        assert_eq!(plan.daily_targets.carbs_g, 157);
        assert_eq!(plan.daily_targets.fat_g, 81);
        assert_eq!(plan.daily_targets.water_ml, 2450);
        assert_eq!(plan.daily_targets.water_glasses, 10);
        assert_eq!(plan.meals.breakfast.options.len(), 3);
    }

    #[tokio::test]
    async fn test_generate_without_recommender_uses_rules() {
        let plan = generate_daily_plan(None, &reference_profile()).await;
        assert_eq!(plan.daily_targets.daily_calories, 2094);
    }

    #[tokio::test]
    async fn test_seasonal_fallback_shape() {
        let recommendations = seasonal_recommendations(None, None, Some("lunch"), &[]).await;
        assert_eq!(recommendations.foods.len(), 3);
        assert_eq!(recommendations.foods[0].food_name, "Seasonal lunch Option 1");
        assert_eq!(recommendations.foods[1].calories, 350);
    }

    #[tokio::test]
    async fn test_seasonal_fallback_without_meal_type() {
        let recommendations = seasonal_recommendations(None, None, None, &[]).await;
        assert_eq!(recommendations.foods[0].food_name, "Seasonal  Option 1");
    }
}
