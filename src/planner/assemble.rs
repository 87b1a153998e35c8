use crate::models::{DayPlan, MealSlot, PreferenceModel, WeekPlan, Weekday};
use crate::planner::substitution::Resolver;
use crate::planner::templates::BranchTemplate;

/// Evaluate every slot of a branch table into a seven-day plan.
///
/// Only name and prep time are filled; ingredients and instructions stay
/// empty for rule-built plans.
pub fn assemble_week(template: &BranchTemplate, prefs: &PreferenceModel) -> WeekPlan {
    let resolver = Resolver::new(prefs);
    let mut week = WeekPlan::new();

    for (weekday, day_template) in Weekday::ALL.into_iter().zip(template.days.iter()) {
        let mut day = DayPlan::new();
        for (meal, slot) in day_template.slots() {
            let name = slot.resolve(&resolver);
            debug_assert!(!name.trim().is_empty(), "{weekday} {meal} resolved empty");
            day.insert(meal, MealSlot::new(name, slot.prep_minutes));
        }
        week.insert(weekday, day);
    }

    week
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryRestriction, MealType, Region};
    use crate::planner::branch::BranchId;
    use crate::planner::templates::template_for;

    #[test]
    fn test_week_has_seven_days() {
        let prefs = PreferenceModel::new(Region::Usa);
        let week = assemble_week(template_for(BranchId::American), &prefs);
        assert_eq!(week.len(), 7);
        assert!(week.validate().is_ok());
        for (_, day) in week.days() {
            assert_eq!(day.len(), 3);
            assert!(day.get(MealType::EveningSnack).is_none());
        }
    }

    #[test]
    fn test_india_days_have_snack() {
        let prefs = PreferenceModel::new(Region::India);
        let week = assemble_week(template_for(BranchId::MixedIndian), &prefs);
        for (_, day) in week.days() {
            assert_eq!(day.len(), 4);
        }
    }

    #[test]
    fn test_slots_carry_no_details() {
        let prefs = PreferenceModel::new(Region::India)
            .with_restrictions([DietaryRestriction::Vegan]);
        let week = assemble_week(template_for(BranchId::SouthIndian), &prefs);
        for (_, day) in week.days() {
            for (_, slot) in day.meals() {
                assert!(slot.ingredients.is_none());
                assert!(slot.instructions.is_none());
                assert!(slot.prep_time_minutes > 0);
            }
        }
    }
}
