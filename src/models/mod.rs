pub mod plan;
pub mod preferences;
pub mod profile;

pub use plan::{
    DayPlan, MealPlanResult, MealSlot, MealType, NutritionalSummary, ShoppingList, WeekPlan,
    Weekday,
};
pub use preferences::{BudgetTier, Cuisine, DietaryRestriction, PreferenceModel, Region, RegionConfig};
pub use profile::{Profile, ProfileUpdate, SavedRecord, User};
