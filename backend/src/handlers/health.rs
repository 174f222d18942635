//! Health check handlers

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::PlannerState;

#[derive(Serialize)]
pub struct FoodHealthResponse {
    pub status: String,
    pub service: String,
}

/// Health check for the food logging API
pub async fn food_health() -> Json<FoodHealthResponse> {
    Json(FoodHealthResponse {
        status: "healthy".to_string(),
        service: "food-logging-api".to_string(),
    })
}

#[derive(Serialize)]
pub struct PlannerHealthResponse {
    pub status: String,
    pub ml_model: String,
    pub timestamp: String,
}

/// Health check for the diet planner API
pub async fn planner_health(State(state): State<PlannerState>) -> Json<PlannerHealthResponse> {
    let ml_model = if state.recommender.is_some() {
        "available"
    } else {
        "using_fallback"
    };

    Json(PlannerHealthResponse {
        status: "healthy".to_string(),
        ml_model: ml_model.to_string(),
        timestamp: chrono::Local::now().to_rfc3339(),
    })
}
