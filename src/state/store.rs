use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlanError, Result};
use crate::models::{Profile, ProfileUpdate, SavedRecord};

/// Profile and saved-plan storage.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new profile. Fails if one already exists for the user.
    async fn create_profile(&self, profile: Profile) -> Result<Profile>;

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>>;

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile>;

    async fn save_meal_plan(&self, record: SavedRecord) -> Result<SavedRecord>;

    /// Saved plans of a user, newest first, at most `limit`.
    async fn list_meal_plans(&self, user_id: &str, limit: usize) -> Result<Vec<SavedRecord>>;

    async fn delete_meal_plan(&self, user_id: &str, id: Uuid) -> Result<()>;
}

/// Everything a store holds. Shared by the in-memory and file stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub meal_plans: Vec<SavedRecord>,
}

impl Database {
    pub fn create_profile(&mut self, profile: Profile) -> Result<Profile> {
        if self.get_profile(&profile.user_id).is_some() {
            return Err(PlanError::Store(format!(
                "profile for '{}' already exists",
                profile.user_id
            )));
        }
        self.profiles.push(profile.clone());
        Ok(profile)
    }

    pub fn get_profile(&self, user_id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.user_id == user_id)
    }

    pub fn update_profile(&mut self, user_id: &str, update: ProfileUpdate) -> Result<Profile> {
        let profile = self
            .profiles
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .ok_or_else(|| PlanError::ProfileNotFound(user_id.to_string()))?;
        profile.apply(update);
        Ok(profile.clone())
    }

    pub fn save_meal_plan(&mut self, record: SavedRecord) -> SavedRecord {
        self.meal_plans.push(record.clone());
        record
    }

    pub fn list_meal_plans(&self, user_id: &str, limit: usize) -> Vec<SavedRecord> {
        let mut plans: Vec<&SavedRecord> = self
            .meal_plans
            .iter()
            .filter(|r| r.user_id == user_id)
            .collect();
        // Later inserts first on equal timestamps
        plans.reverse();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        plans.into_iter().take(limit).cloned().collect()
    }

    pub fn delete_meal_plan(&mut self, user_id: &str, id: Uuid) -> Result<()> {
        let before = self.meal_plans.len();
        self.meal_plans
            .retain(|r| !(r.id == id && r.user_id == user_id));
        if self.meal_plans.len() == before {
            return Err(PlanError::InvalidInput(format!("no saved plan with id {}", id)));
        }
        Ok(())
    }
}

/// Process-local store, used in tests and for `--store :memory:`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    db: Mutex<Database>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Database>> {
        self.db
            .lock()
            .map_err(|_| PlanError::Store("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_profile(&self, profile: Profile) -> Result<Profile> {
        self.lock()?.create_profile(profile)
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        Ok(self.lock()?.get_profile(user_id).cloned())
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile> {
        self.lock()?.update_profile(user_id, update)
    }

    async fn save_meal_plan(&self, record: SavedRecord) -> Result<SavedRecord> {
        Ok(self.lock()?.save_meal_plan(record))
    }

    async fn list_meal_plans(&self, user_id: &str, limit: usize) -> Result<Vec<SavedRecord>> {
        Ok(self.lock()?.list_meal_plans(user_id, limit))
    }

    async fn delete_meal_plan(&self, user_id: &str, id: Uuid) -> Result<()> {
        self.lock()?.delete_meal_plan(user_id, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PreferenceModel, Region};
    use crate::planner::generate_meal_plan;
    use chrono::{Duration, Utc};

    fn record(user: &str, minutes_ago: i64) -> SavedRecord {
        let prefs = PreferenceModel::new(Region::Usa);
        let mut record = SavedRecord::new(user, generate_meal_plan(&prefs), prefs);
        record.created_at = Utc::now() - Duration::minutes(minutes_ago);
        record
    }

    #[test]
    fn test_list_newest_first_with_limit() {
        let mut db = Database::default();
        let old = db.save_meal_plan(record("a", 30));
        let new = db.save_meal_plan(record("a", 1));
        let mid = db.save_meal_plan(record("a", 10));
        db.save_meal_plan(record("b", 0));

        let ids: Vec<Uuid> = db.list_meal_plans("a", 10).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![new.id, mid.id, old.id]);
        assert_eq!(db.list_meal_plans("a", 2).len(), 2);
    }

    #[test]
    fn test_delete_scoped_to_user() {
        let mut db = Database::default();
        let saved = db.save_meal_plan(record("a", 0));
        assert!(db.delete_meal_plan("b", saved.id).is_err());
        assert!(db.delete_meal_plan("a", saved.id).is_ok());
        assert!(db.list_meal_plans("a", 10).is_empty());
    }

    #[test]
    fn test_profile_lifecycle() {
        let mut db = Database::default();
        db.create_profile(Profile::new("a")).unwrap();
        assert!(db.create_profile(Profile::new("a")).is_err());
        let updated = db
            .update_profile(
                "a",
                ProfileUpdate {
                    is_premium: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.is_premium);
        assert!(matches!(
            db.update_profile("missing", ProfileUpdate::default()),
            Err(PlanError::ProfileNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.create_profile(Profile::new("u")).await.unwrap();
        assert!(store.get_profile("u").await.unwrap().is_some());
        assert!(store.get_profile("x").await.unwrap().is_none());

        let saved = store.save_meal_plan(record("u", 0)).await.unwrap();
        let listed = store.list_meal_plans("u", 10).await.unwrap();
        assert_eq!(listed[0].id, saved.id);
    }
}
