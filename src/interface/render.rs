use crate::models::{MealPlanResult, PreferenceModel, Profile, SavedRecord, ShoppingList};
use crate::service::GenerationOutcome;
use crate::state::EntitlementGate;

/// Display a generated plan with its shopping list and summary.
pub fn display_outcome(outcome: &GenerationOutcome, prefs: &PreferenceModel, gate: &EntitlementGate) {
    display_meal_plan(&outcome.plan, prefs);

    println!("Source: {}", outcome.source);
    match gate.remaining(&outcome.usage) {
        Some(left) => println!(
            "Plans used: {} of {} ({} left this week)",
            outcome.usage.plans_generated_this_period,
            gate.limit(),
            left
        ),
        None => println!("Plans used: {} (premium)", outcome.usage.plans_generated_this_period),
    }
    match &outcome.saved {
        Some(record) => println!("Saved as {}", record.id),
        None => println!("Plan was not saved."),
    }
    println!();
}

/// Display a week plan in a formatted table.
pub fn display_meal_plan(plan: &MealPlanResult, prefs: &PreferenceModel) {
    if plan.week_plan.is_empty() {
        println!("No meal plan to show.");
        return;
    }

    let config = prefs.region.config();
    println!();
    println!(
        "=== Meal Plan ({}, {} {}) ===",
        prefs.region,
        prefs.effective_servings(),
        if prefs.effective_servings() == 1 { "person" } else { "people" }
    );

    let label_width = plan
        .week_plan
        .days()
        .flat_map(|(_, day)| day.meals().map(|(meal, _)| meal.label().len()))
        .max()
        .unwrap_or(9);

    for (weekday, day) in plan.week_plan.days() {
        println!();
        println!("{}", weekday);
        for (meal, slot) in day.meals() {
            println!(
                "  {:<width$}  {} ({} min)",
                meal.label(),
                slot.name,
                slot.prep_time_minutes,
                width = label_width
            );
        }
    }

    println!();
    display_shopping_list(&plan.shopping_list);

    println!("--- Summary ---");
    println!("Calories per day: {}", plan.nutritional_summary.average_calories_per_day);
    println!("{}", plan.nutritional_summary.balance_notes);
    println!(
        "Budget: {} ({})",
        prefs.budget_tier,
        config.budget_band(prefs.budget_tier)
    );
    if !prefs.allergies.is_empty() {
        let allergies: Vec<&str> = prefs.allergies.iter().map(String::as_str).collect();
        println!("Check labels for: {}", allergies.join(", "));
    }
    println!();
}

pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list: (empty)");
        return;
    }

    println!("--- Shopping List ({} items) ---", list.len());
    for (category, items) in list.categories() {
        println!("  {}: {}", category, items.join(", "));
    }
    println!();
}

/// Display saved plans, newest first.
pub fn display_history(records: &[SavedRecord]) {
    if records.is_empty() {
        println!("No saved meal plans.");
        return;
    }

    println!();
    println!("=== Saved Meal Plans ({}) ===", records.len());
    println!();
    for record in records {
        let cuisines: Vec<String> = record
            .preferences
            .cuisine_preferences
            .iter()
            .map(|c| c.to_string())
            .collect();
        let restrictions: Vec<&str> = record
            .preferences
            .dietary_restrictions
            .iter()
            .map(|r| r.as_str())
            .collect();
        println!(
            "  {}  {}  {}  cuisines: {}  diet: {}",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.preferences.region,
            if cuisines.is_empty() { "any".to_string() } else { cuisines.join(", ") },
            if restrictions.is_empty() { "none".to_string() } else { restrictions.join(", ") },
        );
    }
    println!();
}

pub fn display_profile(profile: &Profile, gate: &EntitlementGate) {
    let prefs = profile.preferences();
    let config = prefs.region.config();

    println!();
    println!("=== Profile: {} ===", profile.user_id);
    println!("Region: {} ({} {})", prefs.region, config.currency, config.currency_code);
    let restrictions: Vec<&str> = prefs.dietary_restrictions.iter().map(|r| r.as_str()).collect();
    println!(
        "Dietary restrictions: {}",
        if restrictions.is_empty() { "none".to_string() } else { restrictions.join(", ") }
    );
    let cuisines: Vec<String> = prefs.cuisine_preferences.iter().map(|c| c.to_string()).collect();
    println!(
        "Cuisines: {}",
        if cuisines.is_empty() { "any".to_string() } else { cuisines.join(", ") }
    );
    println!("Household size: {}", prefs.servings);
    println!("Budget: {} ({})", prefs.budget_tier, config.budget_band(prefs.budget_tier));
    println!();
    display_usage(profile, gate);
}

pub fn display_usage(profile: &Profile, gate: &EntitlementGate) {
    let usage = profile.usage();
    let config = profile.region.config();
    match gate.remaining(&usage) {
        Some(left) => {
            println!(
                "Free plan: {} of {} used this week, {} left",
                usage.plans_generated_this_period,
                gate.limit(),
                left
            );
            if left == 0 {
                println!("Upgrade to premium for {} per month.", config.premium_price);
            }
        }
        None => println!(
            "Premium: unlimited plans ({} generated this week)",
            usage.plans_generated_this_period
        ),
    }
    println!();
}
