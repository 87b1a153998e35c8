use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Cuisine, PreferenceModel, Region};

/// Flavour of the collapsed east-Asian branch. Only dish names and the
/// label differ between styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsianStyle {
    Japanese,
    Thai,
    Chinese,
    Asian,
}

/// A cuisine-specific template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BranchId {
    SouthIndian,
    NorthIndian,
    Punjabi,
    Gujarati,
    MixedIndian,
    Italian,
    Mexican,
    EastAsian(AsianStyle),
    Mediterranean,
    American,
}

impl BranchId {
    /// Every branch, including each east-Asian style.
    pub const ALL: [BranchId; 13] = [
        BranchId::SouthIndian,
        BranchId::NorthIndian,
        BranchId::Punjabi,
        BranchId::Gujarati,
        BranchId::MixedIndian,
        BranchId::Italian,
        BranchId::Mexican,
        BranchId::EastAsian(AsianStyle::Japanese),
        BranchId::EastAsian(AsianStyle::Thai),
        BranchId::EastAsian(AsianStyle::Chinese),
        BranchId::EastAsian(AsianStyle::Asian),
        BranchId::Mediterranean,
        BranchId::American,
    ];

    pub fn region(self) -> Region {
        match self {
            BranchId::SouthIndian
            | BranchId::NorthIndian
            | BranchId::Punjabi
            | BranchId::Gujarati
            | BranchId::MixedIndian => Region::India,
            BranchId::Italian
            | BranchId::Mexican
            | BranchId::EastAsian(_)
            | BranchId::Mediterranean
            | BranchId::American => Region::Usa,
        }
    }

    /// Human-readable cuisine label used in the nutrition notes.
    pub fn label(self) -> &'static str {
        match self {
            BranchId::SouthIndian => "South Indian",
            BranchId::NorthIndian => "North Indian",
            BranchId::Punjabi => "Punjabi",
            BranchId::Gujarati => "Gujarati",
            BranchId::MixedIndian => "Mixed Indian",
            BranchId::Italian => "Italian",
            BranchId::Mexican => "Mexican",
            BranchId::EastAsian(AsianStyle::Japanese) => "Japanese",
            BranchId::EastAsian(AsianStyle::Thai) => "Thai",
            BranchId::EastAsian(AsianStyle::Chinese) => "Chinese",
            BranchId::EastAsian(AsianStyle::Asian) => "Asian",
            BranchId::Mediterranean => "Mediterranean",
            BranchId::American => "American",
        }
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the branch for a region and cuisine selection.
///
/// India: south, north, punjabi, gujarati, else mixed.
/// USA: italian, mexican, east-Asian family, mediterranean, else american.
/// Cuisines the region does not offer are ignored.
pub fn select_branch(region: Region, cuisines: &BTreeSet<Cuisine>) -> BranchId {
    let has = |c: Cuisine| region.allows(c) && cuisines.contains(&c);
    match region {
        Region::India => {
            if has(Cuisine::SouthIndian) {
                BranchId::SouthIndian
            } else if has(Cuisine::NorthIndian) {
                BranchId::NorthIndian
            } else if has(Cuisine::Punjabi) {
                BranchId::Punjabi
            } else if has(Cuisine::Gujarati) {
                BranchId::Gujarati
            } else {
                BranchId::MixedIndian
            }
        }
        Region::Usa => {
            if has(Cuisine::Italian) {
                BranchId::Italian
            } else if has(Cuisine::Mexican) {
                BranchId::Mexican
            } else if let Some(style) = asian_style(has) {
                BranchId::EastAsian(style)
            } else if has(Cuisine::Mediterranean) {
                BranchId::Mediterranean
            } else {
                BranchId::American
            }
        }
    }
}

/// Branch for a full preference model.
pub fn branch_for(prefs: &PreferenceModel) -> BranchId {
    select_branch(prefs.region, &prefs.cuisine_preferences)
}

fn asian_style(has: impl Fn(Cuisine) -> bool) -> Option<AsianStyle> {
    if has(Cuisine::Japanese) {
        Some(AsianStyle::Japanese)
    } else if has(Cuisine::Thai) {
        Some(AsianStyle::Thai)
    } else if has(Cuisine::Chinese) {
        Some(AsianStyle::Chinese)
    } else if has(Cuisine::Asian) {
        Some(AsianStyle::Asian)
    } else {
        None
    }
}
