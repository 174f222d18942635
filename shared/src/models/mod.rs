//! Domain models for the Calorix nutrition platform

mod food;
mod meal_plan;
mod nutrition;
mod profile;
mod season;

pub use food::*;
pub use meal_plan::*;
pub use nutrition::*;
pub use profile::*;
pub use season::*;
