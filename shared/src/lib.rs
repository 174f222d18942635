//! Shared types and models for the Calorix nutrition platform
//!
//! This crate contains the domain models and pure nutrition arithmetic shared
//! between the food logging API, the diet planner API, and other components.

pub mod energy;
pub mod models;

pub use energy::*;
pub use models::*;
