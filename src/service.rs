//! Request orchestration: entitlement check, plan source selection,
//! usage counting and best-effort persistence.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{PlanError, Result};
use crate::integrations::completion::{build_prompt, parse_completion, CompletionBackend};
use crate::models::{MealPlanResult, PreferenceModel, Profile, ProfileUpdate, SavedRecord, User};
use crate::planner::generate_meal_plan;
use crate::state::{EntitlementGate, RecordStore, UsageState};

/// Where a generated plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    RuleEngine,
    Completion,
    /// The completion failed and the rule engine stood in.
    Fallback,
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlanSource::RuleEngine => "rule engine",
            PlanSource::Completion => "completion",
            PlanSource::Fallback => "rule engine (completion fallback)",
        })
    }
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub plan: MealPlanResult,
    pub source: PlanSource,
    /// Usage after this generation was counted.
    pub usage: UsageState,
    /// The stored record, `None` when saving failed.
    pub saved: Option<SavedRecord>,
}

/// Signed-in user with their profile, loaded once per command.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user: User,
    pub profile: Profile,
}

impl SessionContext {
    pub fn usage(&self) -> UsageState {
        self.profile.usage()
    }
}

pub struct MealPlanService {
    store: Arc<dyn RecordStore>,
    completion: Option<Arc<dyn CompletionBackend>>,
    gate: EntitlementGate,
}

impl MealPlanService {
    pub fn new(store: Arc<dyn RecordStore>, gate: EntitlementGate) -> Self {
        Self {
            store,
            completion: None,
            gate,
        }
    }

    pub fn with_completion(mut self, backend: Arc<dyn CompletionBackend>) -> Self {
        self.completion = Some(backend);
        self
    }

    pub fn gate(&self) -> EntitlementGate {
        self.gate
    }

    /// Load the user's profile, creating a default one on first use.
    ///
    /// A store that cannot be read or written is logged and the session
    /// continues with an unsaved default profile.
    pub async fn session(&self, user: User) -> SessionContext {
        let profile = match self.store.get_profile(&user.id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => match self.store.create_profile(Profile::new(&user.id)).await {
                Ok(profile) => profile,
                Err(e) => {
                    warn!(user_id = %user.id, error = %e, "could not create profile");
                    Profile::new(&user.id)
                }
            },
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "could not load profile");
                Profile::new(&user.id)
            }
        };
        SessionContext { user, profile }
    }

    /// Generate one plan for the session.
    ///
    /// Fails only when the entitlement gate refuses, in which case nothing
    /// is computed or counted. Save failures are logged and leave the plan
    /// intact.
    pub async fn generate(
        &self,
        session: &mut SessionContext,
        prefs: PreferenceModel,
        use_completion: bool,
    ) -> Result<GenerationOutcome> {
        let usage = session.usage();
        if !self.gate.can_generate(&usage) {
            return Err(PlanError::EntitlementExceeded {
                limit: self.gate.limit(),
            });
        }

        let prefs = prefs.normalized();
        let unsupported = prefs.unsupported_cuisines();
        if !unsupported.is_empty() {
            warn!(region = %prefs.region, ?unsupported, "ignoring cuisines not offered in region");
        }

        let (plan, source) = match (&self.completion, use_completion) {
            (Some(backend), true) => match self.complete(backend.as_ref(), &prefs).await {
                Ok(plan) => (plan, PlanSource::Completion),
                Err(e) => {
                    warn!(error = %e, "completion unusable, falling back to rule engine");
                    (generate_meal_plan(&prefs), PlanSource::Fallback)
                }
            },
            _ => (generate_meal_plan(&prefs), PlanSource::RuleEngine),
        };

        let usage = self.gate.record_generation(usage);
        session.profile.meal_plans_used_this_week = usage.plans_generated_this_period;
        info!(
            user_id = %session.user.id,
            %source,
            used = usage.plans_generated_this_period,
            "meal plan generated"
        );

        let record = SavedRecord::new(&session.user.id, plan.clone(), prefs);
        let saved = match self.store.save_meal_plan(record).await {
            Ok(saved) => Some(saved),
            Err(e) => {
                warn!(user_id = %session.user.id, error = %e, "could not save meal plan");
                None
            }
        };
        if let Err(e) = self
            .store
            .update_profile(&session.user.id, ProfileUpdate::usage(usage))
            .await
        {
            warn!(user_id = %session.user.id, error = %e, "could not store usage counter");
        }

        Ok(GenerationOutcome {
            plan,
            source,
            usage,
            saved,
        })
    }

    async fn complete(
        &self,
        backend: &dyn CompletionBackend,
        prefs: &PreferenceModel,
    ) -> Result<MealPlanResult> {
        let raw = backend.complete(&build_prompt(prefs)).await?;
        parse_completion(&raw)
    }

    /// Store the request as the profile's default preferences.
    ///
    /// The session always takes the new defaults. Returns whether the store
    /// accepted them; a failure is logged.
    pub async fn save_preferences(
        &self,
        session: &mut SessionContext,
        prefs: PreferenceModel,
    ) -> bool {
        let update = ProfileUpdate {
            preferences: Some(prefs.normalized()),
            ..Default::default()
        };
        match self.store.update_profile(&session.user.id, update.clone()).await {
            Ok(profile) => {
                session.profile = profile;
                true
            }
            Err(e) => {
                warn!(user_id = %session.user.id, error = %e, "could not store preferences");
                session.profile.apply(update);
                false
            }
        }
    }

    pub async fn history(&self, user: &User, limit: usize) -> Result<Vec<SavedRecord>> {
        self.store.list_meal_plans(&user.id, limit).await
    }

    pub async fn latest(&self, user: &User) -> Result<Option<SavedRecord>> {
        Ok(self.history(user, 1).await?.into_iter().next())
    }

    pub async fn delete(&self, user: &User, id: Uuid) -> Result<()> {
        self.store.delete_meal_plan(&user.id, id).await?;
        info!(user_id = %user.id, %id, "meal plan deleted");
        Ok(())
    }

    /// Start a new usage period.
    pub async fn reset_usage(&self, session: &mut SessionContext) -> Result<()> {
        let update = ProfileUpdate {
            meal_plans_used_this_week: Some(0),
            ..Default::default()
        };
        session.profile = self.store.update_profile(&session.user.id, update).await?;
        Ok(())
    }

    pub async fn set_premium(&self, session: &mut SessionContext, premium: bool) -> Result<()> {
        let update = ProfileUpdate {
            is_premium: Some(premium),
            ..Default::default()
        };
        session.profile = self.store.update_profile(&session.user.id, update).await?;
        Ok(())
    }
}
