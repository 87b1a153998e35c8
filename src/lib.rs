pub mod cli;
pub mod config;
pub mod error;
pub mod integrations;
pub mod interface;
pub mod models;
pub mod planner;
pub mod service;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{MealPlanResult, PreferenceModel};
pub use planner::generate_meal_plan;
