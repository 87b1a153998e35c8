use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use meal_planner::cli::{Cli, Command, PlanArgs};
use meal_planner::config::PlannerConfig;
use meal_planner::error::Result;
use meal_planner::integrations::{CannedCompletion, IdentityProvider, LocalIdentity};
use meal_planner::interface::{
    collect_preferences, display_history, display_outcome, display_profile, display_usage,
    prompt_yes_no, write_plan_json, write_shopping_csv,
};
use meal_planner::models::{PreferenceModel, User};
use meal_planner::service::MealPlanService;
use meal_planner::state::{EntitlementGate, JsonFileStore, MemoryStore, RecordStore};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PlannerConfig::load(cli.config.as_deref())?.with_store_path(cli.store.clone());
    init_tracing(&config.log_filter);
    debug!(?config, "configuration loaded");

    let store: Arc<dyn RecordStore> = if config.uses_memory_store() {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(JsonFileStore::new(config.store_path.clone()))
    };
    let identity = LocalIdentity::with_session(User::local(&cli.user));
    let user = identity.current_user().await?;

    let gate = EntitlementGate::new(config.free_plan_limit);
    let mut service = MealPlanService::new(store, gate);
    let command = cli.command.unwrap_or_default();
    if matches!(&command, Command::Plan(args) if args.completion) {
        service = service.with_completion(Arc::new(CannedCompletion));
    }

    match command {
        Command::Plan(args) => cmd_plan(&service, user, args).await,
        Command::History { limit } => {
            let records = service
                .history(&user, limit.unwrap_or(config.history_limit))
                .await?;
            display_history(&records);
            Ok(())
        }
        Command::Delete { id, yes } => {
            if !yes && !prompt_yes_no(&format!("Delete meal plan {}?", id), false)? {
                return Ok(());
            }
            service.delete(&user, id).await?;
            println!("Deleted {}.", id);
            Ok(())
        }
        Command::Profile => {
            let session = service.session(user).await;
            display_profile(&session.profile, &service.gate());
            Ok(())
        }
        Command::Usage { reset, premium } => cmd_usage(&service, user, reset, premium).await,
        Command::Export { out, json } => {
            let Some(record) = service.latest(&user).await? else {
                println!("No saved meal plan to export. Run 'plan' first.");
                return Ok(());
            };
            if json {
                let out = out.unwrap_or_else(|| PathBuf::from("meal_plan.json"));
                write_plan_json(&record.meal_plan, &out)?;
                println!("Wrote meal plan to {}", out.display());
            } else {
                let out = out.unwrap_or_else(|| PathBuf::from("shopping_list.csv"));
                write_shopping_csv(&record.meal_plan.shopping_list, &out)?;
                println!("Wrote shopping list to {}", out.display());
            }
            Ok(())
        }
        Command::Cuisines { region } => {
            let region = region.unwrap_or_default();
            println!("Cuisines offered in {}:", region);
            for cuisine in region.config().cuisines {
                println!("  {}", cuisine.as_str());
            }
            Ok(())
        }
    }
}

fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

/// Stored profile preferences with command-line overrides applied.
fn merge_preferences(stored: PreferenceModel, args: &PlanArgs) -> PreferenceModel {
    let mut prefs = stored;
    if let Some(region) = args.region {
        if region != prefs.region {
            // Cuisines of the old region would all be unsupported.
            prefs.cuisine_preferences.clear();
        }
        prefs.region = region;
    }
    if !args.diets.is_empty() {
        prefs.dietary_restrictions = args.diets.iter().copied().collect();
    }
    if !args.cuisines.is_empty() {
        prefs.cuisine_preferences = args.cuisines.iter().copied().collect();
    }
    if !args.allergies.is_empty() {
        prefs.allergies = args.allergies.iter().map(|a| a.trim().to_lowercase()).collect();
    }
    if let Some(servings) = args.servings {
        prefs = prefs.with_servings(servings);
    }
    if let Some(budget) = args.budget {
        prefs = prefs.with_budget(budget);
    }
    prefs
}

async fn cmd_plan(service: &MealPlanService, user: User, args: PlanArgs) -> Result<()> {
    let mut session = service.session(user).await;
    let mut prefs = merge_preferences(session.profile.preferences(), &args);
    if args.interactive {
        prefs = collect_preferences(&prefs)?;
    }

    let remember =
        args.remember || (args.interactive && prompt_yes_no("Save these preferences?", true)?);
    if remember && !service.save_preferences(&mut session, prefs.clone()).await {
        println!("Preferences could not be saved. Continuing with this plan.");
    }

    let outcome = service.generate(&mut session, prefs.clone(), args.completion).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.plan)?);
    } else {
        display_outcome(&outcome, &prefs.normalized(), &service.gate());
    }
    Ok(())
}

async fn cmd_usage(
    service: &MealPlanService,
    user: User,
    reset: bool,
    premium: Option<bool>,
) -> Result<()> {
    let mut session = service.session(user).await;
    if reset {
        service.reset_usage(&mut session).await?;
        println!("Usage counter reset.");
    }
    if let Some(premium) = premium {
        service.set_premium(&mut session, premium).await?;
        println!("Premium {}.", if premium { "enabled" } else { "disabled" });
    }
    display_usage(&session.profile, &service.gate());
    Ok(())
}

