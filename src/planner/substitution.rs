//! Restriction-driven ingredient substitution.
//!
//! Each axis checks restrictions in a fixed precedence and falls through to
//! the caller's default, so every combination of flags resolves to a value.

use crate::models::{DietaryRestriction, PreferenceModel};
use crate::planner::constants::{
    GLUTEN_FREE_BREAD, LOW_CARB_BREAD, PALEO_BREAD, PALEO_GRAIN, VEGAN_REPLACEMENTS,
};

/// Which rule decides the grain and bread axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrainRule {
    LowCarb,
    GlutenFree,
    Paleo,
    Default,
}

/// Restriction flags of one request, with the per-axis resolution rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    vegan: bool,
    vegetarian: bool,
    gluten_free: bool,
    dairy_free: bool,
    keto: bool,
    paleo: bool,
    low_carb: bool,
}

impl Resolver {
    pub fn new(prefs: &PreferenceModel) -> Self {
        Self {
            vegan: prefs.has(DietaryRestriction::Vegan),
            vegetarian: prefs.has(DietaryRestriction::Vegetarian),
            gluten_free: prefs.has(DietaryRestriction::GlutenFree),
            dairy_free: prefs.has(DietaryRestriction::DairyFree),
            keto: prefs.has(DietaryRestriction::Keto),
            paleo: prefs.has(DietaryRestriction::Paleo),
            low_carb: prefs.has(DietaryRestriction::LowCarb),
        }
    }

    pub fn is_keto(&self) -> bool {
        self.keto
    }

    pub fn is_vegan(&self) -> bool {
        self.vegan
    }

    pub fn is_gluten_free(&self) -> bool {
        self.gluten_free
    }

    pub fn is_paleo(&self) -> bool {
        self.paleo
    }

    /// Plant-only diet: vegan or vegetarian.
    pub fn is_meatless(&self) -> bool {
        self.vegan || self.vegetarian
    }

    pub fn avoids_dairy(&self) -> bool {
        self.vegan || self.dairy_free
    }

    pub fn if_keto<'a>(&self, keto: &'a str, otherwise: &'a str) -> &'a str {
        if self.keto { keto } else { otherwise }
    }

    pub fn if_gluten_free<'a>(&self, gluten_free: &'a str, otherwise: &'a str) -> &'a str {
        if self.gluten_free { gluten_free } else { otherwise }
    }

    pub fn if_vegan<'a>(&self, vegan: &'a str, otherwise: &'a str) -> &'a str {
        if self.vegan { vegan } else { otherwise }
    }

    /// Protein axis: vegan, then vegetarian, then keto, then the
    /// non-vegetarian default.
    ///
    /// Under vegan rules the vegetarian dish (its keto variant when keto is
    /// also active and one is supplied) is rewritten with plant substitutes.
    pub fn resolve_protein(
        &self,
        vegetarian: &str,
        non_vegetarian: &str,
        keto_vegetarian: Option<&str>,
        keto_non_vegetarian: Option<&str>,
    ) -> String {
        let vegetarian = keto_vegetarian.filter(|_| self.keto).unwrap_or(vegetarian);
        if self.vegan {
            return veganize(vegetarian);
        }
        if self.vegetarian {
            return vegetarian.to_string();
        }
        if self.keto {
            if let Some(dish) = keto_non_vegetarian {
                return dish.to_string();
            }
        }
        non_vegetarian.to_string()
    }

    pub fn protein(&self, vegetarian: &str, non_vegetarian: &str) -> String {
        self.resolve_protein(vegetarian, non_vegetarian, None, None)
    }

    /// Protein with keto variants for both sides.
    pub fn keto_protein(
        &self,
        vegetarian: &str,
        non_vegetarian: &str,
        keto_vegetarian: &str,
        keto_non_vegetarian: &str,
    ) -> String {
        self.resolve_protein(
            vegetarian,
            non_vegetarian,
            Some(keto_vegetarian),
            Some(keto_non_vegetarian),
        )
    }

    /// List form of the protein axis, used for shopping staples.
    pub fn protein_list(
        &self,
        vegetarian: &[&str],
        non_vegetarian: &[&str],
        keto_vegetarian: &[&str],
        keto_non_vegetarian: &[&str],
    ) -> Vec<String> {
        let vegetarian = if self.keto { keto_vegetarian } else { vegetarian };
        let chosen = if self.is_meatless() {
            vegetarian
        } else if self.keto {
            keto_non_vegetarian
        } else {
            non_vegetarian
        };
        chosen
            .iter()
            .map(|item| if self.vegan { veganize(item) } else { item.to_string() })
            .collect()
    }

    /// A dish that is meatless on every diet but may carry dairy or egg.
    pub fn dish(&self, name: &str) -> String {
        if self.vegan {
            veganize(name)
        } else {
            name.to_string()
        }
    }

    pub fn grain_rule(&self) -> GrainRule {
        if self.keto || self.low_carb {
            GrainRule::LowCarb
        } else if self.gluten_free {
            GrainRule::GlutenFree
        } else if self.paleo {
            GrainRule::Paleo
        } else {
            GrainRule::Default
        }
    }

    /// Grain axis: keto/low-carb, then gluten-free, then paleo.
    pub fn grain(&self, default: &str, gluten_free: &str, low_carb: &str) -> String {
        match self.grain_rule() {
            GrainRule::LowCarb => low_carb,
            GrainRule::GlutenFree => gluten_free,
            GrainRule::Paleo => PALEO_GRAIN,
            GrainRule::Default => default,
        }
        .to_string()
    }

    /// Dairy axis: vegan or dairy-free take the alternate.
    pub fn dairy(&self, default: &str, dairy_free: &str) -> String {
        if self.avoids_dairy() {
            dairy_free.to_string()
        } else {
            default.to_string()
        }
    }

    pub fn dairy_list(&self, default: &[&str], dairy_free: &[&str]) -> Vec<String> {
        let chosen = if self.avoids_dairy() { dairy_free } else { default };
        chosen.iter().map(|s| s.to_string()).collect()
    }

    /// Bread axis, same precedence as grain with fixed replacements.
    pub fn bread(&self, default: &str) -> String {
        match self.grain_rule() {
            GrainRule::LowCarb => LOW_CARB_BREAD,
            GrainRule::GlutenFree => GLUTEN_FREE_BREAD,
            GrainRule::Paleo => PALEO_BREAD,
            GrainRule::Default => default,
        }
        .to_string()
    }

    /// Spice axis: ghee or butter based tempering swaps to its plant-fat
    /// version when dairy is excluded.
    pub fn spice(&self, default: &str, plant_based: &str) -> String {
        self.dairy(default, plant_based)
    }
}

/// Replace animal-derived words with plant substitutes.
///
/// Matching is case-insensitive on whole words, plus a plain plural "s".
/// Substitutes are never rescanned, and a leading capital is kept.
pub fn veganize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut word = String::new();

    for c in text.chars() {
        if c.is_alphabetic() {
            word.push(c);
        } else {
            push_word(&mut out, &word);
            word.clear();
            out.push(c);
        }
    }
    push_word(&mut out, &word);
    out
}

fn push_word(out: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }
    let lower = word.to_lowercase();
    let replacement = VEGAN_REPLACEMENTS.iter().find_map(|(term, sub)| {
        let matches = lower == *term || lower.strip_suffix('s') == Some(*term);
        matches.then_some(*sub)
    });

    match replacement {
        Some(sub) if word.starts_with(char::is_uppercase) => {
            let mut chars = sub.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
        Some(sub) => out.push_str(sub),
        None => out.push_str(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    fn resolver(restrictions: &[DietaryRestriction]) -> Resolver {
        let prefs = PreferenceModel::new(Region::India).with_restrictions(restrictions.iter().copied());
        Resolver::new(&prefs)
    }

    #[test]
    fn test_veganize_whole_words() {
        assert_eq!(veganize("Palak Paneer"), "Palak Tofu");
        assert_eq!(veganize("Khichdi with ghee"), "Khichdi with coconut oil");
        assert_eq!(veganize("Scrambled Eggs"), "Scrambled Chickpea flour");
        assert_eq!(veganize("Masala Buttermilk"), "Masala Coconut milk");
        // "milk" inside the substitute is not replaced again
        assert_eq!(veganize("Milk"), "Coconut milk");
        // Not a whole word
        assert_eq!(veganize("Eggless Cake"), "Eggless Cake");
    }

    #[test]
    fn test_protein_precedence() {
        let none = resolver(&[]);
        assert_eq!(none.protein("Dal", "Chicken Curry"), "Chicken Curry");

        let veg = resolver(&[DietaryRestriction::Vegetarian]);
        assert_eq!(veg.protein("Paneer Tikka", "Chicken Tikka"), "Paneer Tikka");

        let vegan = resolver(&[DietaryRestriction::Vegan, DietaryRestriction::Vegetarian]);
        assert_eq!(vegan.protein("Paneer Tikka", "Chicken Tikka"), "Tofu Tikka");

        let keto = resolver(&[DietaryRestriction::Keto]);
        assert_eq!(
            keto.keto_protein("Dal Rice", "Fish Rice", "Palak Paneer", "Fish Fry"),
            "Fish Fry"
        );
        assert_eq!(keto.protein("Dal Rice", "Fish Rice"), "Fish Rice");

        let keto_veg = resolver(&[DietaryRestriction::Keto, DietaryRestriction::Vegetarian]);
        assert_eq!(
            keto_veg.keto_protein("Dal Rice", "Fish Rice", "Palak Paneer", "Fish Fry"),
            "Palak Paneer"
        );

        let keto_vegan = resolver(&[DietaryRestriction::Keto, DietaryRestriction::Vegan]);
        assert_eq!(
            keto_vegan.keto_protein("Dal Rice", "Fish Rice", "Palak Paneer", "Fish Fry"),
            "Palak Tofu"
        );
    }

    #[test]
    fn test_grain_precedence() {
        assert_eq!(resolver(&[]).grain("Roti", "Rice Roti", "Cauliflower Roti"), "Roti");
        assert_eq!(
            resolver(&[DietaryRestriction::GlutenFree, DietaryRestriction::LowCarb])
                .grain("Roti", "Rice Roti", "Cauliflower Roti"),
            "Cauliflower Roti"
        );
        assert_eq!(
            resolver(&[DietaryRestriction::GlutenFree, DietaryRestriction::Paleo])
                .grain("Roti", "Rice Roti", "Cauliflower Roti"),
            "Rice Roti"
        );
        assert_eq!(
            resolver(&[DietaryRestriction::Paleo]).grain("Roti", "Rice Roti", "Cauliflower Roti"),
            PALEO_GRAIN
        );
    }

    #[test]
    fn test_keto_grain_never_starch() {
        let keto = resolver(&[DietaryRestriction::Keto]);
        for (default, gf, low) in [
            ("rice", "rice", "cauliflower rice"),
            ("wheat flour", "rice flour", "almond flour"),
            ("pasta", "rice", "zucchini noodles"),
        ] {
            let grain = keto.grain(default, gf, low);
            assert!(!["rice", "wheat flour", "pasta"].contains(&grain.as_str()));
        }
    }

    #[test]
    fn test_dairy_and_bread() {
        let dairy_free = resolver(&[DietaryRestriction::DairyFree]);
        assert_eq!(dairy_free.dairy("Yogurt", "Coconut Milk"), "Coconut Milk");
        assert_eq!(resolver(&[]).dairy("Yogurt", "Coconut Milk"), "Yogurt");

        assert_eq!(resolver(&[DietaryRestriction::LowCarb]).bread("Naan"), LOW_CARB_BREAD);
        assert_eq!(resolver(&[DietaryRestriction::GlutenFree]).bread("Naan"), GLUTEN_FREE_BREAD);
        assert_eq!(resolver(&[DietaryRestriction::Paleo]).bread("Naan"), PALEO_BREAD);
        assert_eq!(resolver(&[]).bread("Naan"), "Naan");
    }

    #[test]
    fn test_spice_follows_dairy() {
        let vegan = resolver(&[DietaryRestriction::Vegan]);
        assert_eq!(vegan.spice("Ghee Tadka", "Oil Tadka"), "Oil Tadka");
        assert_eq!(resolver(&[]).spice("Ghee Tadka", "Oil Tadka"), "Ghee Tadka");
    }
}
