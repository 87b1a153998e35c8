//! Seven-day dish tables, one per cuisine branch.
//!
//! Every slot is a plain function of the substitution [`Resolver`], so a
//! table is static data and a plan is produced by evaluating each slot once.

mod indian;
mod international;

use crate::models::MealType;
use crate::planner::branch::{AsianStyle, BranchId};
use crate::planner::substitution::Resolver;

/// Produces the dish name for a slot under the active restrictions.
pub type DishFn = fn(&Resolver) -> String;

#[derive(Debug, Clone, Copy)]
pub struct SlotTemplate {
    pub prep_minutes: u32,
    pub dish: DishFn,
}

impl SlotTemplate {
    pub fn resolve(&self, resolver: &Resolver) -> String {
        (self.dish)(resolver)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DayTemplate {
    pub breakfast: SlotTemplate,
    pub lunch: SlotTemplate,
    pub evening_snack: Option<SlotTemplate>,
    pub dinner: SlotTemplate,
}

impl DayTemplate {
    /// Slots in serving order, skipping an absent snack.
    pub fn slots(&self) -> impl Iterator<Item = (MealType, &SlotTemplate)> {
        [
            (MealType::Breakfast, Some(&self.breakfast)),
            (MealType::Lunch, Some(&self.lunch)),
            (MealType::EveningSnack, self.evening_snack.as_ref()),
            (MealType::Dinner, Some(&self.dinner)),
        ]
        .into_iter()
        .filter_map(|(meal, slot)| slot.map(|s| (meal, s)))
    }
}

#[derive(Debug)]
pub struct BranchTemplate {
    pub branch: BranchId,
    /// Monday first.
    pub days: [DayTemplate; 7],
}

pub const fn slot(prep_minutes: u32, dish: DishFn) -> SlotTemplate {
    SlotTemplate { prep_minutes, dish }
}

pub const fn day(breakfast: SlotTemplate, lunch: SlotTemplate, dinner: SlotTemplate) -> DayTemplate {
    DayTemplate {
        breakfast,
        lunch,
        evening_snack: None,
        dinner,
    }
}

pub const fn day_with_snack(
    breakfast: SlotTemplate,
    lunch: SlotTemplate,
    evening_snack: SlotTemplate,
    dinner: SlotTemplate,
) -> DayTemplate {
    DayTemplate {
        breakfast,
        lunch,
        evening_snack: Some(evening_snack),
        dinner,
    }
}

/// Table for a branch. Generic Asian shares the Chinese table.
pub fn template_for(branch: BranchId) -> &'static BranchTemplate {
    match branch {
        BranchId::SouthIndian => &indian::SOUTH_INDIAN,
        BranchId::NorthIndian => &indian::NORTH_INDIAN,
        BranchId::Punjabi => &indian::PUNJABI,
        BranchId::Gujarati => &indian::GUJARATI,
        BranchId::MixedIndian => &indian::MIXED_INDIAN,
        BranchId::Italian => &international::ITALIAN,
        BranchId::Mexican => &international::MEXICAN,
        BranchId::EastAsian(AsianStyle::Japanese) => &international::JAPANESE,
        BranchId::EastAsian(AsianStyle::Thai) => &international::THAI,
        BranchId::EastAsian(AsianStyle::Chinese | AsianStyle::Asian) => &international::CHINESE,
        BranchId::Mediterranean => &international::MEDITERRANEAN,
        BranchId::American => &international::AMERICAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    #[test]
    fn test_india_tables_carry_snacks() {
        for branch in BranchId::ALL {
            let table = template_for(branch);
            let snacks = table.days.iter().filter(|d| d.evening_snack.is_some()).count();
            match branch.region() {
                Region::India => assert_eq!(snacks, 7, "{branch}"),
                Region::Usa => assert_eq!(snacks, 0, "{branch}"),
            }
        }
    }

    #[test]
    fn test_table_lookup_matches_branch() {
        for branch in BranchId::ALL {
            let table = template_for(branch);
            if branch == BranchId::EastAsian(AsianStyle::Asian) {
                assert_eq!(table.branch, BranchId::EastAsian(AsianStyle::Chinese));
            } else {
                assert_eq!(table.branch, branch);
            }
        }
    }

    #[test]
    fn test_prep_times_positive() {
        for branch in BranchId::ALL {
            for day in &template_for(branch).days {
                assert!(day.slots().all(|(_, s)| s.prep_minutes > 0));
            }
        }
    }
}
