//! Calorix - Backend Services
//!
//! Two small HTTP services for nutrition tracking: the food logging API
//! classifies food photos and enriches them with calorie estimates, and the
//! diet planner API computes daily targets and proposes a meal plan.

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod classifier;
pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use classifier::FoodClassifier;
use external::GeminiClient;
use services::MealRecommender;

/// Application state for the food logging API
#[derive(Clone)]
pub struct FoodState {
    /// Image classification model; None when the model failed to initialize
    pub classifier: Option<Arc<dyn FoodClassifier>>,
    pub gemini: GeminiClient,
    pub config: Arc<Config>,
}

/// Application state for the diet planner API
#[derive(Clone)]
pub struct PlannerState {
    /// ML meal recommender; None means the rule-based fallback is used
    pub recommender: Option<Arc<dyn MealRecommender>>,
    pub config: Arc<Config>,
}

/// Create the food logging application router with all middleware
pub fn food_app(state: FoodState) -> Router {
    routes::food_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// Create the diet planner application router with all middleware
pub fn planner_app(state: PlannerState) -> Router {
    routes::planner_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
