//! HTTP handlers for the Calorix APIs

pub mod health;
pub mod planner;
pub mod predict;

pub use health::{food_health, planner_health};
pub use planner::{index, seasonal, submit_profile};
pub use predict::predict;
