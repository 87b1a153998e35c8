pub mod assemble;
pub mod branch;
pub mod constants;
pub mod shopping;
pub mod substitution;
pub mod summary;
pub mod templates;

pub use assemble::assemble_week;
pub use branch::{branch_for, select_branch, AsianStyle, BranchId};
pub use constants::*;
pub use shopping::build_shopping_list;
pub use substitution::{veganize, GrainRule, Resolver};
pub use summary::build_summary;
pub use templates::template_for;

use tracing::debug;

use crate::models::{MealPlanResult, PreferenceModel};

/// Build a complete plan from preferences with the local rule engine.
///
/// Pure and deterministic: equal preferences always give an equal result.
pub fn generate_meal_plan(prefs: &PreferenceModel) -> MealPlanResult {
    let branch = branch_for(prefs);
    debug!(%branch, region = %prefs.region, "assembling rule-based plan");

    MealPlanResult {
        week_plan: assemble_week(template_for(branch), prefs),
        shopping_list: build_shopping_list(prefs),
        nutritional_summary: build_summary(prefs, branch.label()),
    }
}
