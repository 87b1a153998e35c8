use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::models::{BudgetTier, Cuisine, DietaryRestriction, Region};

/// MealPlanner: weekly meal plans, shopping lists and nutrition notes from
/// regional dietary preferences.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// TOML settings file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Record store JSON file, or `:memory:`. Overrides the config file.
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// Local user name the session runs as.
    #[arg(short, long, default_value = "local")]
    pub user: String,
}

/// Preference flags for `plan`. Unset flags fall back to the stored profile.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct PlanArgs {
    #[arg(long)]
    pub region: Option<Region>,

    /// Dietary restriction, repeatable (vegetarian, vegan, gluten-free, ...).
    #[arg(long = "diet")]
    pub diets: Vec<DietaryRestriction>,

    /// Cuisine preference, repeatable.
    #[arg(long = "cuisine")]
    pub cuisines: Vec<Cuisine>,

    /// Allergy note, repeatable.
    #[arg(long = "allergy")]
    pub allergies: Vec<String>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub servings: Option<u32>,

    #[arg(long)]
    pub budget: Option<BudgetTier>,

    /// Ask for preferences interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Ask the completion backend first, falling back to the rule engine.
    #[arg(long)]
    pub completion: bool,

    /// Print the plan as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Store these preferences as the profile defaults.
    #[arg(long)]
    pub remember: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan.
    Plan(PlanArgs),

    /// List saved meal plans, newest first.
    History {
        /// Number of plans to list. Defaults to the configured history limit.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete a saved meal plan.
    Delete {
        id: Uuid,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the stored profile.
    Profile,

    /// Show or change the weekly usage counter.
    Usage {
        /// Start a new usage period.
        #[arg(long)]
        reset: bool,

        /// Set or clear the premium flag.
        #[arg(long)]
        premium: Option<bool>,
    },

    /// Write the latest plan's shopping list as CSV, or the whole plan as JSON.
    Export {
        /// Output file. Defaults to shopping_list.csv, or meal_plan.json with --json.
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// List the cuisines offered in a region.
    Cuisines {
        #[arg(long)]
        region: Option<Region>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_flags_parse() {
        let cli = Cli::try_parse_from([
            "meal_planner",
            "--store",
            ":memory:",
            "plan",
            "--region",
            "usa",
            "--diet",
            "keto",
            "--diet",
            "dairy-free",
            "--servings",
            "1",
        ])
        .unwrap();
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.region, Some(Region::Usa));
        assert_eq!(args.diets, vec![DietaryRestriction::Keto, DietaryRestriction::DairyFree]);
        assert_eq!(args.servings, Some(1));
        assert!(args.budget.is_none());
    }

    #[test]
    fn test_unknown_region_rejected() {
        assert!(Cli::try_parse_from(["meal_planner", "plan", "--region", "mars"]).is_err());
        assert!(Cli::try_parse_from(["meal_planner", "plan", "--servings", "0"]).is_err());
    }

    #[test]
    fn test_export_json_flag() {
        let cli = Cli::try_parse_from(["meal_planner", "export", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Export { out: None, json: true })));
    }

    #[test]
    fn test_no_command_defaults_to_plan() {
        let cli = Cli::try_parse_from(["meal_planner"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Plan(_)));
    }
}
