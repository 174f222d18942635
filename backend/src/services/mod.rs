//! Business logic services for the Calorix APIs

pub mod enrichment;
pub mod meal_plan;
pub mod planner;
pub mod recommender;

pub use recommender::MealRecommender;
