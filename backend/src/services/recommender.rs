//! ML meal recommender seam
//!
//! The trained recommender is an opaque collaborator. When it is absent or
//! errors, the planner silently falls back to the rule-based computation;
//! recommender unavailability is never surfaced as an error.

use async_trait::async_trait;
use shared::{DailyPlan, SeasonalRecommendations, UserProfile};

use crate::error::AppResult;

/// Meal recommendation model abstraction
#[async_trait]
pub trait MealRecommender: Send + Sync {
    /// Recommend a full daily meal plan for a profile.
    async fn recommend_daily_meals(&self, profile: &UserProfile) -> AppResult<DailyPlan>;

    /// Recommend seasonal foods, optionally filtered by diet, meal type and
    /// preferred cuisines.
    async fn seasonal_recommendations(
        &self,
        diet_type: Option<&str>,
        meal_type: Option<&str>,
        cuisines: &[String],
    ) -> AppResult<SeasonalRecommendations>;
}
