//! Language-model completion as an optional plan source.
//!
//! The backend returns raw text; [`parse_completion`] turns it into a
//! [`MealPlanResult`] or fails, and the caller falls back to the rule engine
//! on any failure.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::preferences::normalize_token;
use crate::models::{
    DayPlan, MealPlanResult, MealSlot, MealType, NutritionalSummary, PreferenceModel,
    ShoppingList, WeekPlan, Weekday,
};

/// Similarity needed to accept a misspelled day or meal key.
const KEY_MATCH_THRESHOLD: f64 = 0.85;

const CANNED_PLAN: &str = include_str!("canned_plan.json");

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Offline backend that always answers with the same seven-day plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedCompletion;

#[async_trait]
impl CompletionBackend for CannedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(CANNED_PLAN.to_string())
    }
}

/// Request text describing the preferences and the expected JSON shape.
pub fn build_prompt(prefs: &PreferenceModel) -> String {
    let config = prefs.region.config();
    let join = |items: Vec<String>| {
        if items.is_empty() {
            "none".to_string()
        } else {
            items.join(", ")
        }
    };

    let restrictions = join(prefs.dietary_restrictions.iter().map(|r| r.to_string()).collect());
    let cuisines = join(prefs.cuisine_preferences.iter().map(|c| c.to_string()).collect());
    let allergies = join(prefs.allergies.iter().cloned().collect());
    let meals = config
        .meal_types
        .iter()
        .map(|m| format!("\"{}\"", m.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a 7-day meal plan for {region} with these preferences:\n\
         - Dietary restrictions: {restrictions}\n\
         - Allergies: {allergies}\n\
         - Budget: {budget} ({band})\n\
         - Servings: {servings}\n\
         - Cuisine preferences: {cuisines}\n\n\
         Reply with JSON only, shaped as:\n\
         {{\"weekPlan\": {{\"monday\": {{{meals}}}, ... \"sunday\": ...}},\n \
         \"shoppingList\": {{\"category\": [\"item\"]}},\n \
         \"nutritionalSummary\": {{\"averageCaloriesPerDay\": \"...\", \"balanceNotes\": \"...\"}}}}\n\
         Each meal is {{\"name\", \"ingredients\", \"instructions\", \"prepTime\"}}.",
        region = prefs.region,
        budget = prefs.budget_tier,
        band = config.budget_band(prefs.budget_tier),
        servings = prefs.effective_servings(),
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlan {
    week_plan: BTreeMap<String, BTreeMap<String, RawMeal>>,
    #[serde(default)]
    shopping_list: BTreeMap<String, Vec<String>>,
    nutritional_summary: NutritionalSummary,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeal {
    name: String,
    #[serde(default)]
    ingredients: Option<Vec<String>>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default, alias = "prepTime")]
    prep_time_minutes: Option<PrepTime>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PrepTime {
    Minutes(u32),
    Text(String),
}

impl PrepTime {
    /// Minutes from `10`, `"10 minutes"` or `"1 hour"`.
    fn minutes(&self) -> Result<u32> {
        let text = match self {
            PrepTime::Minutes(m) => return Ok(*m),
            PrepTime::Text(text) => text.trim().to_lowercase(),
        };
        let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
        let value: u32 = digits
            .parse()
            .map_err(|_| PlanError::MalformedCompletion(format!("unreadable prep time '{}'", text)))?;
        let unit = text[digits.len()..].trim_start();
        if unit.starts_with("hour") || unit.starts_with("hr") {
            Ok(value.saturating_mul(60))
        } else {
            Ok(value)
        }
    }
}

/// Parse a completion into a validated plan.
pub fn parse_completion(raw: &str) -> Result<MealPlanResult> {
    let body = extract_json(raw)?;
    let plan: RawPlan = serde_json::from_str(body)
        .map_err(|e| PlanError::MalformedCompletion(e.to_string()))?;

    let mut week = WeekPlan::new();
    for (day_key, meals) in plan.week_plan {
        let weekday = match_key(&day_key, Weekday::ALL, Weekday::as_str)
            .ok_or_else(|| PlanError::MalformedCompletion(format!("unknown day '{}'", day_key)))?;
        if week.get(weekday).is_some() {
            return Err(PlanError::MalformedCompletion(format!(
                "'{}' repeats {}",
                day_key, weekday
            )));
        }

        let mut day = DayPlan::new();
        for (meal_key, meal) in meals {
            let meal_type = match_key(&meal_key, MealType::ALL, MealType::as_str).ok_or_else(|| {
                PlanError::MalformedCompletion(format!("unknown meal '{}' on {}", meal_key, weekday))
            })?;
            let prep = match &meal.prep_time_minutes {
                Some(p) => p.minutes()?,
                None => 0,
            };
            day.insert(
                meal_type,
                MealSlot {
                    name: meal.name,
                    ingredients: meal.ingredients,
                    instructions: meal.instructions,
                    prep_time_minutes: prep,
                },
            );
        }
        week.insert(weekday, day);
    }

    let mut shopping_list = ShoppingList::new();
    for (category, items) in plan.shopping_list {
        shopping_list.add_items(&category, items);
    }

    let result = MealPlanResult {
        week_plan: week,
        shopping_list,
        nutritional_summary: plan.nutritional_summary,
    };
    result.validate()?;
    Ok(result)
}

/// The JSON object inside a reply, tolerating code fences and chatter.
fn extract_json(raw: &str) -> Result<&str> {
    let start = raw.find('{');
    let end = raw.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&raw[start..=end]),
        _ => Err(PlanError::MalformedCompletion(
            "no JSON object in completion".to_string(),
        )),
    }
}

/// Exact match on the normalized key, else the closest name above the
/// threshold.
fn match_key<T: Copy, const N: usize>(
    key: &str,
    candidates: [T; N],
    name: fn(T) -> &'static str,
) -> Option<T> {
    let key = normalize_token(key);
    if let Some(hit) = candidates.iter().copied().find(|c| normalize_token(name(*c)) == key) {
        return Some(hit);
    }
    candidates
        .iter()
        .copied()
        .map(|c| (c, jaro_winkler(&normalize_token(name(c)), &key)))
        .filter(|(_, score)| *score >= KEY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryRestriction, Region};

    #[tokio::test]
    async fn test_canned_plan_parses() {
        let raw = CannedCompletion.complete("ignored").await.unwrap();
        let plan = parse_completion(&raw).unwrap();
        assert_eq!(plan.week_plan.len(), 7);
        let breakfast = plan
            .week_plan
            .get(Weekday::Monday)
            .and_then(|d| d.get(MealType::Breakfast))
            .unwrap();
        assert_eq!(breakfast.name, "Avocado Toast with Eggs");
        assert_eq!(breakfast.prep_time_minutes, 10);
        assert!(breakfast.ingredients.as_ref().is_some_and(|i| !i.is_empty()));
        assert_eq!(
            plan.week_plan
                .get(Weekday::Sunday)
                .and_then(|d| d.get(MealType::Dinner))
                .map(|m| m.prep_time_minutes),
            Some(90)
        );
    }

    #[test]
    fn test_fenced_and_fuzzy_keys() {
        let mut days = String::new();
        for (i, day) in ["Monday", "tuesday", "wednesdy", "THURSDAY", "friday", "saturday", "sunday"]
            .iter()
            .enumerate()
        {
            if i > 0 {
                days.push(',');
            }
            days.push_str(&format!(
                r#""{day}": {{"Breakfast": {{"name": "Oats", "prepTimeMinutes": 5}},
                   "lunch": {{"name": "Dal", "prepTime": "1 hour"}},
                   "evening_snack": {{"name": "Chai"}},
                   "dinnr": {{"name": "Roti", "prepTime": "20 minutes"}}}}"#
            ));
        }
        let raw = format!(
            "Here is your plan:\n```json\n{{\"weekPlan\": {{{days}}}, \
             \"shoppingList\": {{\"grains\": [\"oats\", \"oats\"]}}, \
             \"nutritionalSummary\": {{\"averageCaloriesPerDay\": \"1800\", \"balanceNotes\": \"ok\"}}}}\n```"
        );

        let plan = parse_completion(&raw).unwrap();
        assert_eq!(plan.week_plan.meal_name(Weekday::Wednesday, MealType::Dinner), Some("Roti"));
        let lunch = plan.week_plan.get(Weekday::Thursday).and_then(|d| d.get(MealType::Lunch));
        assert_eq!(lunch.map(|m| m.prep_time_minutes), Some(60));
        assert!(plan.week_plan.get(Weekday::Friday).unwrap().get(MealType::EveningSnack).is_some());
        assert_eq!(plan.shopping_list.category("grains").unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_completions_rejected() {
        assert!(matches!(
            parse_completion("Sorry, I can't help with that."),
            Err(PlanError::MalformedCompletion(_))
        ));
        assert!(matches!(
            parse_completion(r#"{"weekPlan": {}}"#),
            Err(PlanError::MalformedCompletion(_))
        ));
        // Structurally fine but missing days
        let one_day = r#"{"weekPlan": {"monday": {"breakfast": {"name": "a"}, "lunch": {"name": "b"}, "dinner": {"name": "c"}}},
            "nutritionalSummary": {"averageCaloriesPerDay": "1800", "balanceNotes": ""}}"#;
        assert!(matches!(parse_completion(one_day), Err(PlanError::InvalidPlan(_))));
        let bad_key = one_day.replace("monday", "someday");
        assert!(matches!(
            parse_completion(&bad_key),
            Err(PlanError::MalformedCompletion(_))
        ));
    }

    #[test]
    fn test_prompt_mentions_preferences() {
        let prefs = PreferenceModel::new(Region::India)
            .with_restrictions([DietaryRestriction::Vegan])
            .with_servings(4);
        let prompt = build_prompt(&prefs);
        assert!(prompt.contains("India"));
        assert!(prompt.contains("vegan"));
        assert!(prompt.contains("Servings: 4"));
        assert!(prompt.contains("evening-snack"));
    }
}
