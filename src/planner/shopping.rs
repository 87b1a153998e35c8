//! Categorized shopping list, derived from region and restriction flags only.

use crate::models::{PreferenceModel, Region, ShoppingList};
use crate::planner::constants::*;
use crate::planner::substitution::{GrainRule, Resolver};

pub fn build_shopping_list(prefs: &PreferenceModel) -> ShoppingList {
    let r = Resolver::new(prefs);
    let mut list = ShoppingList::new();

    match prefs.region {
        Region::India => {
            list.add_items(CATEGORY_GRAINS, grain_staples(&r, prefs.region).iter().copied());
            list.add_items(CATEGORY_VEGETABLES, INDIA_VEGETABLES.iter().copied());
            list.add_items(
                CATEGORY_PROTEINS,
                r.protein_list(
                    INDIA_VEGETARIAN_PROTEINS,
                    INDIA_NON_VEGETARIAN_PROTEINS,
                    INDIA_KETO_VEGETARIAN_PROTEINS,
                    INDIA_KETO_NON_VEGETARIAN_PROTEINS,
                ),
            );
            list.add_items(CATEGORY_DAIRY, r.dairy_list(INDIA_DAIRY, INDIA_DAIRY_FREE));
            list.add_items(CATEGORY_SPICES, INDIA_SPICES.iter().copied());
        }
        Region::Usa => {
            let produce = if r.is_keto() { USA_KETO_PRODUCE } else { USA_PRODUCE };
            list.add_items(CATEGORY_PRODUCE, produce.iter().copied());
            list.add_items(
                CATEGORY_PROTEINS,
                r.protein_list(
                    USA_VEGETARIAN_PROTEINS,
                    USA_NON_VEGETARIAN_PROTEINS,
                    USA_KETO_VEGETARIAN_PROTEINS,
                    USA_KETO_NON_VEGETARIAN_PROTEINS,
                ),
            );
            list.add_items(CATEGORY_GRAINS, grain_staples(&r, prefs.region).iter().copied());
            let dairy = if r.is_keto() {
                r.dairy_list(USA_KETO_DAIRY, USA_KETO_DAIRY_FREE)
            } else {
                r.dairy_list(USA_DAIRY, USA_DAIRY_FREE)
            };
            list.add_items(CATEGORY_DAIRY, dairy);
            list.add_items(CATEGORY_OILS, USA_OILS.iter().copied());
            list.add_items(CATEGORY_PANTRY, PANTRY_STAPLES.iter().copied());
        }
    }

    if r.is_paleo() {
        list.remove_items(CATEGORY_PROTEINS, is_legume);
        list.add_items(CATEGORY_PALEO_PANTRY, PALEO_PANTRY.iter().copied());
    }

    if r.is_keto() {
        list.add_items(CATEGORY_KETO_PANTRY, KETO_PANTRY.iter().copied());
        list.add_items(
            CATEGORY_DAIRY,
            r.dairy_list(KETO_HIGH_FAT_DAIRY, KETO_HIGH_FAT_DAIRY_FREE),
        );
    }

    list
}

/// Grain staples, following the grain axis precedence.
fn grain_staples(r: &Resolver, region: Region) -> &'static [&'static str] {
    match (region, r.grain_rule()) {
        (Region::India, GrainRule::LowCarb) => INDIA_LOW_CARB_GRAINS,
        (Region::India, GrainRule::GlutenFree) => INDIA_GLUTEN_FREE_GRAINS,
        (Region::India, GrainRule::Paleo) => INDIA_PALEO_GRAINS,
        (Region::India, GrainRule::Default) => INDIA_GRAINS,
        (Region::Usa, GrainRule::LowCarb) => USA_LOW_CARB_GRAINS,
        (Region::Usa, GrainRule::GlutenFree) => USA_GLUTEN_FREE_GRAINS,
        (Region::Usa, GrainRule::Paleo) => USA_PALEO_GRAINS,
        (Region::Usa, GrainRule::Default) => USA_GRAINS,
    }
}

fn is_legume(item: &str) -> bool {
    LEGUMES.iter().any(|l| l.eq_ignore_ascii_case(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietaryRestriction;

    fn list(region: Region, restrictions: &[DietaryRestriction]) -> ShoppingList {
        let prefs = PreferenceModel::new(region).with_restrictions(restrictions.iter().copied());
        build_shopping_list(&prefs)
    }

    fn items(list: &ShoppingList, category: &str) -> Vec<String> {
        list.category(category).map(<[String]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn test_region_vocabulary() {
        let india = list(Region::India, &[]);
        assert!(india.category(CATEGORY_SPICES).is_some());
        assert!(india.category(CATEGORY_OILS).is_none());

        let usa = list(Region::Usa, &[]);
        assert!(usa.category(CATEGORY_OILS).is_some());
        assert!(usa.category(CATEGORY_SPICES).is_none());
        assert_eq!(items(&usa, CATEGORY_DAIRY), vec!["Greek yogurt", "cheese", "milk"]);
    }

    #[test]
    fn test_keto_dairy_free_usa() {
        let usa = list(Region::Usa, &[DietaryRestriction::Keto, DietaryRestriction::DairyFree]);
        assert_eq!(
            items(&usa, CATEGORY_DAIRY),
            vec!["coconut cream", "nutritional yeast", "coconut oil"]
        );
        assert_eq!(items(&usa, CATEGORY_GRAINS), USA_LOW_CARB_GRAINS);
        assert!(usa.category(CATEGORY_KETO_PANTRY).is_some());
    }

    #[test]
    fn test_keto_extends_dairy() {
        let india = list(Region::India, &[DietaryRestriction::Keto]);
        let dairy = items(&india, CATEGORY_DAIRY);
        assert!(dairy.contains(&"heavy cream".to_string()));
        assert!(dairy.contains(&"ghee".to_string()));
    }

    #[test]
    fn test_paleo_filters_legumes() {
        let india = list(
            Region::India,
            &[DietaryRestriction::Paleo, DietaryRestriction::Vegetarian],
        );
        let proteins = items(&india, CATEGORY_PROTEINS);
        assert_eq!(proteins, vec!["paneer", "coconut"]);
        assert_eq!(items(&india, CATEGORY_GRAINS), INDIA_PALEO_GRAINS);
        assert!(india.category(CATEGORY_PALEO_PANTRY).is_some());

        let usa = list(Region::Usa, &[DietaryRestriction::Paleo, DietaryRestriction::Vegan]);
        assert!(!items(&usa, CATEGORY_PROTEINS).iter().any(|p| p == "black beans" || p == "tofu"));
    }

    #[test]
    fn test_vegan_proteins_rewritten() {
        let india = list(Region::India, &[DietaryRestriction::Vegan]);
        let proteins = items(&india, CATEGORY_PROTEINS);
        assert!(proteins.contains(&"tofu".to_string()));
        assert!(!proteins.contains(&"paneer".to_string()));
        assert_eq!(items(&india, CATEGORY_DAIRY), INDIA_DAIRY_FREE);
    }

    #[test]
    fn test_vegan_usa_dairy_is_plant_based() {
        let usa = list(Region::Usa, &[DietaryRestriction::Vegan]);
        assert_eq!(items(&usa, CATEGORY_DAIRY), USA_DAIRY_FREE);
        assert!(items(&usa, CATEGORY_DAIRY).iter().all(|i| !i.contains("yogurt")));
    }

    #[test]
    fn test_gluten_free_grains() {
        let usa = list(Region::Usa, &[DietaryRestriction::GlutenFree, DietaryRestriction::Paleo]);
        assert_eq!(items(&usa, CATEGORY_GRAINS), USA_GLUTEN_FREE_GRAINS);
    }
}
