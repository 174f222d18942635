//! HTTP handlers for the diet planner API

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use shared::{DailyPlan, SeasonalRecommendations, UserProfile};

use crate::error::{AppError, AppResult};
use crate::services::planner;
use crate::PlannerState;

/// Index route payload
#[derive(Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub status: String,
    pub ml_model_available: bool,
}

/// Root endpoint
pub async fn index(State(state): State<PlannerState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Calorix Diet Planner API".to_string(),
        status: "running".to_string(),
        ml_model_available: state.recommender.is_some(),
    })
}

/// Profile submission response: the daily plan plus the profile echoed back
#[derive(Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub plan: DailyPlan,
    pub user_profile: UserProfile,
}

/// Handle a profile submission and generate a meal plan.
///
/// The submitted profile is written to durable storage as a side effect
/// before the plan is computed.
pub async fn submit_profile(
    State(state): State<PlannerState>,
    Json(profile): Json<UserProfile>,
) -> AppResult<Json<ProfileResponse>> {
    tracing::debug!(?profile, "Profile received");

    persist_profile(&state.config.storage.profile_path, &profile).await?;

    let plan = planner::generate_daily_plan(state.recommender.as_deref(), &profile).await;

    Ok(Json(ProfileResponse {
        plan,
        user_profile: profile,
    }))
}

async fn persist_profile(path: &str, profile: &UserProfile) -> AppResult<()> {
    let json = serde_json::to_vec_pretty(profile)
        .map_err(|e| AppError::Internal(format!("Failed to serialize profile: {}", e)))?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to save profile: {}", e)))?;
    tracing::info!(path, "User profile saved");
    Ok(())
}

/// Query parameters for seasonal recommendations
#[derive(Debug, Deserialize)]
pub struct SeasonalQuery {
    pub diet_type: Option<String>,
    pub meal_type: Option<String>,
    /// Comma-separated list of preferred cuisines
    pub cuisines: Option<String>,
}

/// Seasonal food recommendations
pub async fn seasonal(
    State(state): State<PlannerState>,
    Query(query): Query<SeasonalQuery>,
) -> AppResult<Json<SeasonalRecommendations>> {
    let cuisines: Vec<String> = query
        .cuisines
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    let recommendations = planner::seasonal_recommendations(
        state.recommender.as_deref(),
        query.diet_type.as_deref(),
        query.meal_type.as_deref(),
        &cuisines,
    )
    .await;

    Ok(Json(recommendations))
}
