use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::plan::MealType;

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Lowercase and strip separators so "Gluten Free", "gluten-free" and
/// "glutenFree" all compare equal.
pub(crate) fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The market a plan is generated for. Drives the cuisine universe, the
/// meal types of a day, and currency/budget bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    India,
    #[serde(rename = "USA")]
    Usa,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::India, Region::Usa];

    /// Static configuration for this region.
    pub fn config(self) -> &'static RegionConfig {
        match self {
            Region::India => &INDIA_CONFIG,
            Region::Usa => &USA_CONFIG,
        }
    }

    /// Whether the cuisine appears in this region's selectable list.
    pub fn allows(self, cuisine: Cuisine) -> bool {
        self.config().cuisines.contains(&cuisine)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::India => f.write_str("India"),
            Region::Usa => f.write_str("USA"),
        }
    }
}

impl FromStr for Region {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_token(s).as_str() {
            "india" | "in" => Ok(Region::India),
            "usa" | "us" | "international" => Ok(Region::Usa),
            _ => Err(PlanError::InvalidInput(format!(
                "Unknown region '{}' (expected india or usa)",
                s
            ))),
        }
    }
}

/// Per-region pricing, cuisine list and meal structure.
#[derive(Debug)]
pub struct RegionConfig {
    pub currency: &'static str,
    pub currency_code: &'static str,
    pub premium_price: &'static str,
    pub budget_low: &'static str,
    pub budget_medium: &'static str,
    pub budget_high: &'static str,
    pub cuisines: &'static [Cuisine],
    pub meal_types: &'static [MealType],
}

impl RegionConfig {
    /// Weekly spend band shown next to a budget tier.
    pub fn budget_band(&self, tier: BudgetTier) -> &'static str {
        match tier {
            BudgetTier::Low => self.budget_low,
            BudgetTier::Medium => self.budget_medium,
            BudgetTier::High => self.budget_high,
        }
    }
}

static INDIA_CONFIG: RegionConfig = RegionConfig {
    currency: "₹",
    currency_code: "INR",
    premium_price: "₹299",
    budget_low: "₹500-1000/week",
    budget_medium: "₹1000-2000/week",
    budget_high: "₹2000+/week",
    cuisines: &[
        Cuisine::Indian,
        Cuisine::SouthIndian,
        Cuisine::NorthIndian,
        Cuisine::Gujarati,
        Cuisine::Punjabi,
        Cuisine::Bengali,
        Cuisine::Mediterranean,
        Cuisine::Italian,
        Cuisine::Chinese,
        Cuisine::Continental,
    ],
    meal_types: &[
        MealType::Breakfast,
        MealType::Lunch,
        MealType::EveningSnack,
        MealType::Dinner,
    ],
};

static USA_CONFIG: RegionConfig = RegionConfig {
    currency: "$",
    currency_code: "USD",
    premium_price: "$4.99",
    budget_low: "$20-40/week",
    budget_medium: "$40-70/week",
    budget_high: "$70+/week",
    cuisines: &[
        Cuisine::American,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Asian,
        Cuisine::Chinese,
        Cuisine::Mediterranean,
        Cuisine::French,
        Cuisine::Thai,
        Cuisine::Japanese,
    ],
    meal_types: &[MealType::Breakfast, MealType::Lunch, MealType::Dinner],
};

/// Dietary restriction flags. Declaration order is the fixed enumeration
/// order used when restrictions are listed back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Vegan,
    Vegetarian,
    GlutenFree,
    DairyFree,
    Keto,
    Paleo,
    LowCarb,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 7] = [
        DietaryRestriction::Vegan,
        DietaryRestriction::Vegetarian,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
        DietaryRestriction::Keto,
        DietaryRestriction::Paleo,
        DietaryRestriction::LowCarb,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
            DietaryRestriction::Keto => "keto",
            DietaryRestriction::Paleo => "paleo",
            DietaryRestriction::LowCarb => "low-carb",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryRestriction {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_token(s);
        DietaryRestriction::ALL
            .into_iter()
            .find(|r| normalize_token(r.as_str()) == key)
            .ok_or_else(|| PlanError::InvalidInput(format!("Unknown dietary restriction '{}'", s)))
    }
}

/// Selectable cuisines across both regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cuisine {
    Indian,
    SouthIndian,
    NorthIndian,
    Gujarati,
    Punjabi,
    Bengali,
    Continental,
    American,
    Italian,
    Mexican,
    Asian,
    Chinese,
    Thai,
    Japanese,
    Mediterranean,
    French,
}

impl Cuisine {
    pub const ALL: [Cuisine; 16] = [
        Cuisine::Indian,
        Cuisine::SouthIndian,
        Cuisine::NorthIndian,
        Cuisine::Gujarati,
        Cuisine::Punjabi,
        Cuisine::Bengali,
        Cuisine::Continental,
        Cuisine::American,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Asian,
        Cuisine::Chinese,
        Cuisine::Thai,
        Cuisine::Japanese,
        Cuisine::Mediterranean,
        Cuisine::French,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Cuisine::Indian => "indian",
            Cuisine::SouthIndian => "south-indian",
            Cuisine::NorthIndian => "north-indian",
            Cuisine::Gujarati => "gujarati",
            Cuisine::Punjabi => "punjabi",
            Cuisine::Bengali => "bengali",
            Cuisine::Continental => "continental",
            Cuisine::American => "american",
            Cuisine::Italian => "italian",
            Cuisine::Mexican => "mexican",
            Cuisine::Asian => "asian",
            Cuisine::Chinese => "chinese",
            Cuisine::Thai => "thai",
            Cuisine::Japanese => "japanese",
            Cuisine::Mediterranean => "mediterranean",
            Cuisine::French => "french",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_token(s);
        if let Some(cuisine) = Cuisine::ALL
            .into_iter()
            .find(|c| normalize_token(c.as_str()) == key)
        {
            return Ok(cuisine);
        }

        let suggestion = Cuisine::ALL
            .into_iter()
            .map(|c| (c, jaro_winkler(&normalize_token(c.as_str()), &key)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        Err(PlanError::InvalidInput(match suggestion {
            Some((c, _)) => format!("Unknown cuisine '{}' (did you mean '{}'?)", s, c),
            None => format!("Unknown cuisine '{}'", s),
        }))
    }
}

/// Spend level for the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetTier::Low => f.write_str("low"),
            BudgetTier::Medium => f.write_str("medium"),
            BudgetTier::High => f.write_str("high"),
        }
    }
}

impl FromStr for BudgetTier {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_token(s).as_str() {
            "low" => Ok(BudgetTier::Low),
            "medium" | "moderate" => Ok(BudgetTier::Medium),
            "high" | "premium" => Ok(BudgetTier::High),
            _ => Err(PlanError::InvalidInput(format!("Unknown budget level '{}'", s))),
        }
    }
}

/// Normalized input of one generation request.
///
/// Built fresh for every request from form or profile state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceModel {
    pub region: Region,

    #[serde(default)]
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,

    #[serde(default)]
    pub cuisine_preferences: BTreeSet<Cuisine>,

    /// Collected but not applied to generation.
    #[serde(default)]
    pub allergies: BTreeSet<String>,

    pub servings: u32,

    #[serde(rename = "budget")]
    pub budget_tier: BudgetTier,
}

impl Default for PreferenceModel {
    fn default() -> Self {
        Self {
            region: Region::India,
            dietary_restrictions: BTreeSet::new(),
            cuisine_preferences: BTreeSet::new(),
            allergies: BTreeSet::new(),
            servings: 2,
            budget_tier: BudgetTier::Medium,
        }
    }
}

impl PreferenceModel {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            ..Default::default()
        }
    }

    pub fn with_restrictions<I>(mut self, restrictions: I) -> Self
    where
        I: IntoIterator<Item = DietaryRestriction>,
    {
        self.dietary_restrictions.extend(restrictions);
        self
    }

    pub fn with_cuisines<I>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = Cuisine>,
    {
        self.cuisine_preferences.extend(cuisines);
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_budget(mut self, budget_tier: BudgetTier) -> Self {
        self.budget_tier = budget_tier;
        self
    }

    #[inline]
    pub fn has(&self, restriction: DietaryRestriction) -> bool {
        self.dietary_restrictions.contains(&restriction)
    }

    /// Servings with zero treated as one.
    #[inline]
    pub fn effective_servings(&self) -> u32 {
        self.servings.max(1)
    }

    /// Cuisines that are not offered in the selected region. They are
    /// ignored by branch selection.
    pub fn unsupported_cuisines(&self) -> Vec<Cuisine> {
        self.cuisine_preferences
            .iter()
            .copied()
            .filter(|c| !self.region.allows(*c))
            .collect()
    }

    /// Clamp servings to at least one and tidy allergy entries.
    pub fn normalized(mut self) -> Self {
        self.servings = self.effective_servings();
        self.allergies = self
            .allergies
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restriction_parsing_accepts_spellings() {
        for input in ["gluten-free", "glutenFree", "Gluten Free", "gluten_free"] {
            assert_eq!(
                input.parse::<DietaryRestriction>().unwrap(),
                DietaryRestriction::GlutenFree
            );
        }
        assert!("carnivore".parse::<DietaryRestriction>().is_err());
    }

    #[test]
    fn test_cuisine_parsing_suggests_close_match() {
        assert_eq!("South Indian".parse::<Cuisine>().unwrap(), Cuisine::SouthIndian);

        let err = "italain".parse::<Cuisine>().unwrap_err().to_string();
        assert!(err.contains("did you mean 'italian'"), "{}", err);
    }

    #[test]
    fn test_region_config() {
        assert!(Region::India.allows(Cuisine::Punjabi));
        assert!(!Region::Usa.allows(Cuisine::Punjabi));
        assert!(Region::Usa.allows(Cuisine::Chinese));
        assert_eq!(Region::Usa.config().budget_band(BudgetTier::Low), "$20-40/week");
        assert!(Region::India.config().meal_types.contains(&MealType::EveningSnack));
        assert!(!Region::Usa.config().meal_types.contains(&MealType::EveningSnack));
    }

    #[test]
    fn test_normalized_clamps_servings() {
        let prefs = PreferenceModel::new(Region::Usa).with_servings(0).normalized();
        assert_eq!(prefs.servings, 1);
    }

    #[test]
    fn test_unsupported_cuisines() {
        let prefs = PreferenceModel::new(Region::Usa)
            .with_cuisines([Cuisine::Italian, Cuisine::Gujarati]);
        assert_eq!(prefs.unsupported_cuisines(), vec![Cuisine::Gujarati]);
    }

    #[test]
    fn test_serde_shape() {
        let prefs = PreferenceModel::new(Region::Usa)
            .with_restrictions([DietaryRestriction::DairyFree])
            .with_cuisines([Cuisine::Mexican]);
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["region"], "USA");
        assert_eq!(json["dietaryRestrictions"][0], "dairy-free");
        assert_eq!(json["cuisinePreferences"][0], "mexican");
        assert_eq!(json["budget"], "medium");
    }
}
