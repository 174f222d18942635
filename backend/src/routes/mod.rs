//! Route definitions for the Calorix APIs

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, FoodState, PlannerState};

/// Routes for the food logging API
pub fn food_routes() -> Router<FoodState> {
    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::food_health))
}

/// Routes for the diet planner API
pub fn planner_routes() -> Router<PlannerState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/profile", post(handlers::submit_profile))
        .route("/seasonal", get(handlers::seasonal))
        .route("/health", get(handlers::planner_health))
}
