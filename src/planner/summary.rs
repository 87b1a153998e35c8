use crate::models::{DietaryRestriction, NutritionalSummary, PreferenceModel};
use crate::planner::constants::{KETO_CALORIE_RANGE, STANDARD_CALORIE_RANGE};

/// Restrictions named in the notes after the vegan/vegetarian lead.
const ADDITIVE_ORDER: [DietaryRestriction; 5] = [
    DietaryRestriction::GlutenFree,
    DietaryRestriction::DairyFree,
    DietaryRestriction::Keto,
    DietaryRestriction::Paleo,
    DietaryRestriction::LowCarb,
];

/// Calorie range and a descriptive note for a request.
pub fn build_summary(prefs: &PreferenceModel, cuisine_label: &str) -> NutritionalSummary {
    let calories = if prefs.has(DietaryRestriction::Keto) {
        KETO_CALORIE_RANGE
    } else {
        STANDARD_CALORIE_RANGE
    };

    let restrictions = restriction_phrase(prefs);
    let guidelines = if restrictions.is_empty() {
        String::new()
    } else {
        format!(" following {} dietary guidelines", restrictions.join(", "))
    };

    let servings = prefs.effective_servings();
    let noun = if servings == 1 { "person" } else { "people" };

    NutritionalSummary {
        average_calories_per_day: calories.to_string(),
        balance_notes: format!(
            "Well-balanced {cuisine_label} meals{guidelines}. Tailored for {} preferences \
             with appropriate portion sizes for {servings} {noun}.",
            prefs.region
        ),
    }
}

fn restriction_phrase(prefs: &PreferenceModel) -> Vec<&'static str> {
    let lead = if prefs.has(DietaryRestriction::Vegan) {
        Some(DietaryRestriction::Vegan)
    } else if prefs.has(DietaryRestriction::Vegetarian) {
        Some(DietaryRestriction::Vegetarian)
    } else {
        None
    };

    lead.into_iter()
        .chain(ADDITIVE_ORDER.into_iter().filter(|r| prefs.has(*r)))
        .map(DietaryRestriction::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    #[test]
    fn test_keto_range() {
        let prefs = PreferenceModel::new(Region::Usa).with_restrictions([DietaryRestriction::Keto]);
        assert_eq!(build_summary(&prefs, "American").average_calories_per_day, KETO_CALORIE_RANGE);
        let plain = PreferenceModel::new(Region::Usa);
        assert_eq!(build_summary(&plain, "American").average_calories_per_day, STANDARD_CALORIE_RANGE);
    }

    #[test]
    fn test_notes_order_and_lead() {
        let prefs = PreferenceModel::new(Region::India)
            .with_restrictions([
                DietaryRestriction::LowCarb,
                DietaryRestriction::Vegetarian,
                DietaryRestriction::Vegan,
                DietaryRestriction::GlutenFree,
            ])
            .with_servings(3);
        let notes = build_summary(&prefs, "Mixed Indian").balance_notes;
        assert_eq!(
            notes,
            "Well-balanced Mixed Indian meals following vegan, gluten-free, low-carb dietary \
             guidelines. Tailored for India preferences with appropriate portion sizes for 3 people."
        );
        assert!(!notes.contains("vegetarian"));
    }

    #[test]
    fn test_singular_person() {
        let prefs = PreferenceModel::new(Region::Usa).with_servings(1);
        let notes = build_summary(&prefs, "American").balance_notes;
        assert!(notes.contains("for 1 person."));
        assert!(!notes.contains("guidelines"));
    }

    #[test]
    fn test_zero_servings_clamped() {
        let prefs = PreferenceModel::new(Region::Usa).with_servings(0);
        assert!(build_summary(&prefs, "Italian").balance_notes.contains("1 person"));
    }
}
