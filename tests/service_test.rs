use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use meal_planner::error::{PlanError, Result};
use meal_planner::integrations::{CannedCompletion, CompletionBackend};
use meal_planner::models::{
    DietaryRestriction, PreferenceModel, Profile, ProfileUpdate, Region, SavedRecord, User,
};
use meal_planner::service::{MealPlanService, PlanSource};
use meal_planner::state::{EntitlementGate, JsonFileStore, MemoryStore, RecordStore};

/// Backend that answers with prose instead of JSON.
struct ChattyCompletion;

#[async_trait]
impl CompletionBackend for ChattyCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok("I'd be happy to help you plan your meals!".to_string())
    }
}

struct UnreachableCompletion;

#[async_trait]
impl CompletionBackend for UnreachableCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(PlanError::Completion("connection refused".to_string()))
    }
}

/// Store that reads fine but refuses every write.
struct ReadOnlyStore;

#[async_trait]
impl RecordStore for ReadOnlyStore {
    async fn create_profile(&self, _profile: Profile) -> Result<Profile> {
        Err(PlanError::Store("read-only".to_string()))
    }

    async fn get_profile(&self, _user_id: &str) -> Result<Option<Profile>> {
        Ok(None)
    }

    async fn update_profile(&self, _user_id: &str, _update: ProfileUpdate) -> Result<Profile> {
        Err(PlanError::Store("read-only".to_string()))
    }

    async fn save_meal_plan(&self, _record: SavedRecord) -> Result<SavedRecord> {
        Err(PlanError::Store("read-only".to_string()))
    }

    async fn list_meal_plans(&self, _user_id: &str, _limit: usize) -> Result<Vec<SavedRecord>> {
        Ok(Vec::new())
    }

    async fn delete_meal_plan(&self, _user_id: &str, _id: Uuid) -> Result<()> {
        Err(PlanError::Store("read-only".to_string()))
    }
}

fn memory_service() -> (Arc<MemoryStore>, MealPlanService) {
    let store = Arc::new(MemoryStore::new());
    let service = MealPlanService::new(store.clone(), EntitlementGate::new(3));
    (store, service)
}

fn india_prefs() -> PreferenceModel {
    PreferenceModel::new(Region::India).with_restrictions([DietaryRestriction::Vegetarian])
}

#[tokio::test]
async fn test_rule_engine_is_default_source() {
    let (_, service) = memory_service();
    let mut session = service.session(User::local("asha")).await;

    let outcome = service.generate(&mut session, india_prefs(), true).await.unwrap();

    // No backend configured, so the completion flag has no effect
    assert_eq!(outcome.source, PlanSource::RuleEngine);
    assert_eq!(outcome.usage.plans_generated_this_period, 1);
    assert!(outcome.saved.is_some());
    assert!(outcome.plan.validate().is_ok());
}

#[tokio::test]
async fn test_canned_completion_used_when_asked() {
    let (_, service) = memory_service();
    let service = service.with_completion(Arc::new(CannedCompletion));
    let mut session = service.session(User::local("asha")).await;

    let outcome = service.generate(&mut session, india_prefs(), true).await.unwrap();
    assert_eq!(outcome.source, PlanSource::Completion);

    let outcome = service.generate(&mut session, india_prefs(), false).await.unwrap();
    assert_eq!(outcome.source, PlanSource::RuleEngine);
}

#[tokio::test]
async fn test_bad_completion_falls_back_to_rules() {
    for backend in [
        Arc::new(ChattyCompletion) as Arc<dyn CompletionBackend>,
        Arc::new(UnreachableCompletion),
    ] {
        let (_, service) = memory_service();
        let service = service.with_completion(backend);
        let mut session = service.session(User::local("asha")).await;

        let outcome = service.generate(&mut session, india_prefs(), true).await.unwrap();
        assert_eq!(outcome.source, PlanSource::Fallback);
        assert_eq!(outcome.plan, meal_planner::generate_meal_plan(&india_prefs()));
        assert_eq!(outcome.usage.plans_generated_this_period, 1);
    }
}

#[tokio::test]
async fn test_limit_reached_changes_nothing() {
    let (store, service) = memory_service();
    let user = User::local("asha");
    let mut session = service.session(user.clone()).await;

    for _ in 0..3 {
        service.generate(&mut session, india_prefs(), false).await.unwrap();
    }
    let err = service.generate(&mut session, india_prefs(), false).await.unwrap_err();
    assert!(matches!(err, PlanError::EntitlementExceeded { limit: 3 }));

    assert_eq!(session.usage().plans_generated_this_period, 3);
    let stored = store.get_profile(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.meal_plans_used_this_week, 3);
    assert_eq!(service.history(&user, 10).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_premium_ignores_limit() {
    let (_, service) = memory_service();
    let mut session = service.session(User::local("asha")).await;
    service.set_premium(&mut session, true).await.unwrap();

    for _ in 0..5 {
        service.generate(&mut session, india_prefs(), false).await.unwrap();
    }
    assert_eq!(session.usage().plans_generated_this_period, 5);
}

#[tokio::test]
async fn test_failed_writes_still_return_plan() {
    let service = MealPlanService::new(Arc::new(ReadOnlyStore), EntitlementGate::default());
    let mut session = service.session(User::local("asha")).await;

    let outcome = service.generate(&mut session, india_prefs(), false).await.unwrap();
    assert!(outcome.saved.is_none());
    assert!(outcome.plan.validate().is_ok());
    assert_eq!(outcome.usage.plans_generated_this_period, 1);
}

#[tokio::test]
async fn test_usage_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plans.json");
    let user = User::local("asha");

    {
        let service = MealPlanService::new(
            Arc::new(JsonFileStore::new(&path)),
            EntitlementGate::default(),
        );
        let mut session = service.session(user.clone()).await;
        service.generate(&mut session, india_prefs(), false).await.unwrap();
        service.generate(&mut session, india_prefs(), false).await.unwrap();
    }

    let service = MealPlanService::new(Arc::new(JsonFileStore::new(&path)), EntitlementGate::default());
    let mut session = service.session(user.clone()).await;
    assert_eq!(session.usage().plans_generated_this_period, 2);

    let history = service.history(&user, 10).await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history[0].created_at >= history[1].created_at);

    service.reset_usage(&mut session).await.unwrap();
    assert_eq!(session.usage().plans_generated_this_period, 0);
}

#[tokio::test]
async fn test_remembered_preferences_prefill_profile() {
    let (_, service) = memory_service();
    let user = User::local("sam");
    let mut session = service.session(user.clone()).await;
    let prefs = PreferenceModel::new(Region::Usa)
        .with_restrictions([DietaryRestriction::Keto])
        .with_servings(0);

    assert!(service.save_preferences(&mut session, prefs).await);

    let session = service.session(user).await;
    let stored = session.profile.preferences();
    assert_eq!(stored.region, Region::Usa);
    assert!(stored.has(DietaryRestriction::Keto));
    assert_eq!(stored.servings, 1);
}

#[tokio::test]
async fn test_delete_only_own_plans() {
    let (_, service) = memory_service();
    let owner = User::local("asha");
    let other = User::local("sam");
    let mut session = service.session(owner.clone()).await;
    let outcome = service.generate(&mut session, india_prefs(), false).await.unwrap();
    let id = outcome.saved.unwrap().id;

    assert!(service.delete(&other, id).await.is_err());
    service.delete(&owner, id).await.unwrap();
    assert!(service.latest(&owner).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unreadable_store_file_still_plans() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plans.json");
    std::fs::write(&path, "{not json").unwrap();
    let service = MealPlanService::new(Arc::new(JsonFileStore::new(&path)), EntitlementGate::default());

    let mut session = service.session(User::local("asha")).await;
    assert_eq!(session.usage().plans_generated_this_period, 0);

    let outcome = service.generate(&mut session, india_prefs(), false).await.unwrap();
    assert!(outcome.plan.validate().is_ok());
    assert!(outcome.saved.is_none());
    // The broken file is left alone
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
}

#[tokio::test]
async fn test_unsaved_preferences_still_apply() {
    let service = MealPlanService::new(Arc::new(ReadOnlyStore), EntitlementGate::default());
    let mut session = service.session(User::local("asha")).await;
    let prefs = PreferenceModel::new(Region::Usa).with_restrictions([DietaryRestriction::Vegan]);

    assert!(!service.save_preferences(&mut session, prefs.clone()).await);
    assert_eq!(session.profile.preferences().region, Region::Usa);

    let outcome = service.generate(&mut session, prefs, false).await.unwrap();
    assert!(outcome.plan.validate().is_ok());
    assert_eq!(outcome.usage.plans_generated_this_period, 1);
}
