use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::plan::MealPlanResult;
use crate::models::preferences::{BudgetTier, Cuisine, DietaryRestriction, PreferenceModel, Region};
use crate::state::UsageState;

/// Signed-in user as handed over by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

impl User {
    /// A user for single-operator local use, keyed by a plain name.
    pub fn local(name: &str) -> Self {
        Self {
            id: name.to_string(),
            email: format!("{}@localhost", name),
        }
    }
}

/// Stored per-user settings and usage counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    #[serde(default)]
    pub cuisine_preferences: BTreeSet<Cuisine>,
    #[serde(default)]
    pub budget_level: BudgetTier,
    #[serde(default = "default_household_size")]
    pub household_size: u32,
    #[serde(default)]
    pub meal_plans_used_this_week: u32,
    #[serde(default)]
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_household_size() -> u32 {
    2
}

impl Profile {
    /// A fresh profile with default preferences and no usage.
    pub fn new(user_id: &str) -> Self {
        let now = Utc::now();
        let defaults = PreferenceModel::default();
        Self {
            user_id: user_id.to_string(),
            region: defaults.region,
            dietary_restrictions: defaults.dietary_restrictions,
            allergies: defaults.allergies,
            cuisine_preferences: defaults.cuisine_preferences,
            budget_level: defaults.budget_tier,
            household_size: defaults.servings,
            meal_plans_used_this_week: 0,
            is_premium: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stored preferences as the starting point of a new request.
    pub fn preferences(&self) -> PreferenceModel {
        PreferenceModel {
            region: self.region,
            dietary_restrictions: self.dietary_restrictions.clone(),
            cuisine_preferences: self.cuisine_preferences.clone(),
            allergies: self.allergies.clone(),
            servings: self.household_size,
            budget_tier: self.budget_level,
        }
    }

    pub fn usage(&self) -> UsageState {
        UsageState {
            plans_generated_this_period: self.meal_plans_used_this_week,
            is_premium_tier: self.is_premium,
        }
    }

    /// Apply a partial update. Absent fields are left alone.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(prefs) = update.preferences {
            self.region = prefs.region;
            self.dietary_restrictions = prefs.dietary_restrictions;
            self.allergies = prefs.allergies;
            self.cuisine_preferences = prefs.cuisine_preferences;
            self.budget_level = prefs.budget_tier;
            self.household_size = prefs.servings;
        }
        if let Some(used) = update.meal_plans_used_this_week {
            self.meal_plans_used_this_week = used;
        }
        if let Some(premium) = update.is_premium {
            self.is_premium = premium;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial profile update.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub preferences: Option<PreferenceModel>,
    pub meal_plans_used_this_week: Option<u32>,
    pub is_premium: Option<bool>,
}

impl ProfileUpdate {
    pub fn usage(usage: UsageState) -> Self {
        Self {
            meal_plans_used_this_week: Some(usage.plans_generated_this_period),
            ..Default::default()
        }
    }
}

/// A persisted meal plan together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub id: Uuid,
    pub user_id: String,
    pub meal_plan: MealPlanResult,
    pub preferences: PreferenceModel,
    pub created_at: DateTime<Utc>,
}

impl SavedRecord {
    pub fn new(user_id: &str, meal_plan: MealPlanResult, preferences: PreferenceModel) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            meal_plan,
            preferences,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = Profile::new("u1");
        assert_eq!(profile.household_size, 2);
        assert_eq!(profile.budget_level, BudgetTier::Medium);
        assert_eq!(profile.usage().plans_generated_this_period, 0);
        assert!(!profile.usage().is_premium_tier);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut profile = Profile::new("u1");
        profile.apply(ProfileUpdate {
            is_premium: Some(true),
            ..Default::default()
        });
        assert!(profile.is_premium);
        assert_eq!(profile.household_size, 2);

        let prefs = PreferenceModel::new(Region::Usa).with_servings(5);
        profile.apply(ProfileUpdate {
            preferences: Some(prefs.clone()),
            ..Default::default()
        });
        assert_eq!(profile.preferences(), prefs);
        assert!(profile.is_premium);
    }
}
