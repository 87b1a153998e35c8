use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Meal slots of a day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    Breakfast,
    Lunch,
    EveningSnack,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::EveningSnack,
        MealType::Dinner,
    ];

    /// Slots every day must carry regardless of region.
    pub const REQUIRED: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::EveningSnack => "evening-snack",
            MealType::Dinner => "dinner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::EveningSnack => "Evening Snack",
            MealType::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meal of a day.
///
/// The rule engine fills only `name` and `prep_time_minutes`; a completion
/// backend may also supply ingredients and instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    pub prep_time_minutes: u32,
}

impl MealSlot {
    pub fn new(name: impl Into<String>, prep_time_minutes: u32) -> Self {
        Self {
            name: name.into(),
            ingredients: None,
            instructions: None,
            prep_time_minutes,
        }
    }
}

/// Meals of a single day keyed by slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayPlan(BTreeMap<MealType, MealSlot>);

impl DayPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, meal: MealType, slot: MealSlot) {
        self.0.insert(meal, slot);
    }

    pub fn get(&self, meal: MealType) -> Option<&MealSlot> {
        self.0.get(&meal)
    }

    /// Meals in serving order.
    pub fn meals(&self) -> impl Iterator<Item = (MealType, &MealSlot)> {
        self.0.iter().map(|(m, s)| (*m, s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(&self, day: Weekday) -> Result<()> {
        for meal in MealType::REQUIRED {
            if !self.0.contains_key(&meal) {
                return Err(PlanError::InvalidPlan(format!("{} has no {}", day, meal)));
            }
        }
        for (meal, slot) in &self.0 {
            if slot.name.trim().is_empty() {
                return Err(PlanError::InvalidPlan(format!(
                    "{} {} has an empty meal name",
                    day, meal
                )));
            }
        }
        Ok(())
    }
}

/// Seven days of meals, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan(BTreeMap<Weekday, DayPlan>);

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday, plan: DayPlan) {
        self.0.insert(day, plan);
    }

    pub fn get(&self, day: Weekday) -> Option<&DayPlan> {
        self.0.get(&day)
    }

    /// Shorthand for the name of one meal.
    pub fn meal_name(&self, day: Weekday, meal: MealType) -> Option<&str> {
        self.get(day)?.get(meal).map(|s| s.name.as_str())
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> {
        self.0.iter().map(|(d, p)| (*d, p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.0.len() != Weekday::ALL.len() {
            return Err(PlanError::InvalidPlan(format!(
                "expected 7 days, found {}",
                self.0.len()
            )));
        }
        for (day, plan) in &self.0 {
            plan.validate(*day)?;
        }
        Ok(())
    }
}

/// Category name to ingredient list. Items are unique within a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList(BTreeMap<String, Vec<String>>);

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append items to a category, skipping ones already present.
    pub fn add_items<I, S>(&mut self, category: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.0.entry(category.to_string()).or_default();
        for item in items {
            let item = item.into();
            if !entry.contains(&item) {
                entry.push(item);
            }
        }
    }

    /// Drop items of a category matching the predicate.
    pub fn remove_items<F>(&mut self, category: &str, mut predicate: F)
    where
        F: FnMut(&str) -> bool,
    {
        if let Some(items) = self.0.get_mut(category) {
            items.retain(|item| !predicate(item));
        }
    }

    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (category, items) in &self.0 {
            for (i, item) in items.iter().enumerate() {
                if items[..i].contains(item) {
                    return Err(PlanError::InvalidPlan(format!(
                        "duplicate '{}' in {}",
                        item, category
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalSummary {
    pub average_calories_per_day: String,
    pub balance_notes: String,
}

/// A generated plan: the unit that is persisted and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResult {
    pub week_plan: WeekPlan,
    pub shopping_list: ShoppingList,
    pub nutritional_summary: NutritionalSummary,
}

impl MealPlanResult {
    /// Check the plan as a whole before it is accepted downstream.
    pub fn validate(&self) -> Result<()> {
        self.week_plan.validate()?;
        self.shopping_list.validate()?;
        if self.nutritional_summary.average_calories_per_day.trim().is_empty() {
            return Err(PlanError::InvalidPlan("missing calorie estimate".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_week() -> WeekPlan {
        let mut week = WeekPlan::new();
        for day in Weekday::ALL {
            let mut plan = DayPlan::new();
            for meal in MealType::REQUIRED {
                plan.insert(meal, MealSlot::new(format!("{} {}", day, meal), 10));
            }
            week.insert(day, plan);
        }
        week
    }

    fn sample_result() -> MealPlanResult {
        MealPlanResult {
            week_plan: full_week(),
            shopping_list: ShoppingList::new(),
            nutritional_summary: NutritionalSummary {
                average_calories_per_day: "1800-2000 calories".to_string(),
                balance_notes: "Balanced.".to_string(),
            },
        }
    }

    #[test]
    fn test_shopping_list_dedup() {
        let mut list = ShoppingList::new();
        list.add_items("grains", ["rice", "oats"]);
        list.add_items("grains", ["rice", "quinoa"]);
        assert_eq!(list.category("grains").unwrap(), ["rice", "oats", "quinoa"]);
    }

    #[test]
    fn test_remove_items() {
        let mut list = ShoppingList::new();
        list.add_items("proteins", ["dal", "chicken"]);
        list.remove_items("proteins", |i| i == "dal");
        assert_eq!(list.category("proteins").unwrap(), ["chicken"]);
    }

    #[test]
    fn test_validate_accepts_full_week() {
        assert!(sample_result().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_partial_week() {
        let mut result = sample_result();
        result.week_plan.0.remove(&Weekday::Sunday);
        assert!(matches!(result.validate(), Err(PlanError::InvalidPlan(_))));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut result = sample_result();
        let mut day = DayPlan::new();
        for meal in MealType::REQUIRED {
            day.insert(meal, MealSlot::new("  ", 5));
        }
        result.week_plan.insert(Weekday::Friday, day);
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(
            json["weekPlan"]["monday"]["breakfast"]["prepTimeMinutes"],
            10
        );
        assert!(json["weekPlan"]["monday"]["breakfast"].get("ingredients").is_none());
        assert!(json["nutritionalSummary"]["averageCaloriesPerDay"].is_string());
    }
}
