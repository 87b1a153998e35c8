use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{PlanError, Result};
use crate::models::{BudgetTier, Cuisine, DietaryRestriction, PreferenceModel, Region};

const MAX_SERVINGS: u32 = 6;

/// Prompt for the target region.
pub fn prompt_region(default: Region) -> Result<Region> {
    let options: Vec<String> = Region::ALL
        .iter()
        .map(|r| format!("{} ({} {})", r, r.config().currency, r.config().currency_code))
        .collect();
    let default_idx = Region::ALL.iter().position(|r| *r == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Which region are you planning for?")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(Region::ALL[selection])
}

/// Prompt for dietary restrictions.
pub fn prompt_restrictions(current: &BTreeSet<DietaryRestriction>) -> Result<BTreeSet<DietaryRestriction>> {
    let options: Vec<&str> = DietaryRestriction::ALL.iter().map(|r| r.as_str()).collect();
    let defaults: Vec<bool> = DietaryRestriction::ALL
        .iter()
        .map(|r| current.contains(r))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle, enter to confirm)")
        .items(&options)
        .defaults(&defaults)
        .interact()?;

    Ok(picked.into_iter().map(|i| DietaryRestriction::ALL[i]).collect())
}

/// Prompt for cuisines offered in the region.
pub fn prompt_cuisines(region: Region, current: &BTreeSet<Cuisine>) -> Result<BTreeSet<Cuisine>> {
    let offered = region.config().cuisines;
    let options: Vec<String> = offered.iter().map(|c| c.to_string()).collect();
    let defaults: Vec<bool> = offered.iter().map(|c| current.contains(c)).collect();

    let picked = MultiSelect::new()
        .with_prompt(format!("Cuisine preferences for {}", region))
        .items(&options)
        .defaults(&defaults)
        .interact()?;

    Ok(picked.into_iter().map(|i| offered[i]).collect())
}

/// Prompt for household size.
pub fn prompt_servings(default: u32) -> Result<u32> {
    let options: Vec<String> = (1..=MAX_SERVINGS)
        .map(|n| format!("{} {}", n, if n == 1 { "person" } else { "people" }))
        .collect();
    let default_idx = default.clamp(1, MAX_SERVINGS) as usize - 1;

    let selection = Select::new()
        .with_prompt("How many people are you cooking for?")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(selection as u32 + 1)
}

/// Prompt for budget, showing the region's weekly band.
pub fn prompt_budget(region: Region, default: BudgetTier) -> Result<BudgetTier> {
    const TIERS: [BudgetTier; 3] = [BudgetTier::Low, BudgetTier::Medium, BudgetTier::High];
    let config = region.config();
    let options: Vec<String> = TIERS
        .iter()
        .map(|t| format!("{} ({})", t, config.budget_band(*t)))
        .collect();
    let default_idx = TIERS.iter().position(|t| *t == default).unwrap_or(1);

    let selection = Select::new()
        .with_prompt("Weekly budget")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(TIERS[selection])
}

/// Prompt for allergies as a comma-separated list.
pub fn prompt_allergies(current: &BTreeSet<String>) -> Result<BTreeSet<String>> {
    let initial = current.iter().cloned().collect::<Vec<_>>().join(", ");
    let input: String = Input::new()
        .with_prompt("Allergies (comma-separated, optional)")
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;

    let allergies: BTreeSet<String> = input
        .split(',')
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    if allergies.iter().any(|a| a.len() > 64) {
        return Err(PlanError::InvalidInput("Allergy entries must be short".to_string()));
    }
    Ok(allergies)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full preference model, starting from stored defaults.
pub fn collect_preferences(defaults: &PreferenceModel) -> Result<PreferenceModel> {
    let region = prompt_region(defaults.region)?;
    let dietary_restrictions = prompt_restrictions(&defaults.dietary_restrictions)?;
    let cuisine_preferences = prompt_cuisines(region, &defaults.cuisine_preferences)?;
    let servings = prompt_servings(defaults.servings)?;
    let budget_tier = prompt_budget(region, defaults.budget_tier)?;
    let allergies = prompt_allergies(&defaults.allergies)?;

    Ok(PreferenceModel {
        region,
        dietary_restrictions,
        cuisine_preferences,
        allergies,
        servings,
        budget_tier,
    })
}
