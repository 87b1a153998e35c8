pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan_json, write_shopping_csv};
pub use prompts::{collect_preferences, prompt_yes_no};
pub use render::{
    display_history, display_meal_plan, display_outcome, display_profile, display_shopping_list,
    display_usage,
};
