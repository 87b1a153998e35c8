use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Profile, ProfileUpdate, SavedRecord};
use crate::state::store::{Database, RecordStore};

/// Load a store file.
///
/// A missing file is an empty store. Deduplicates profiles by user id and
/// plans by id (last occurrence wins).
pub fn load_database<P: AsRef<Path>>(path: P) -> Result<Database> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Database::default());
    }
    let content = fs::read_to_string(path)?;
    let db: Database = serde_json::from_str(&content)?;
    Ok(dedup(db))
}

/// Save a store file, deduplicating first.
pub fn save_database<P: AsRef<Path>>(path: P, db: &Database) -> Result<()> {
    let deduped = dedup(db.clone());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

fn dedup(db: Database) -> Database {
    let mut profiles: BTreeMap<String, Profile> = BTreeMap::new();
    for profile in db.profiles {
        profiles.insert(profile.user_id.clone(), profile);
    }

    // Keep first-seen order for plans; a later duplicate replaces in place
    let mut order: Vec<Uuid> = Vec::new();
    let mut plans: BTreeMap<Uuid, SavedRecord> = BTreeMap::new();
    for record in db.meal_plans {
        if plans.insert(record.id, record.clone()).is_none() {
            order.push(record.id);
        }
    }

    Database {
        profiles: profiles.into_values().collect(),
        meal_plans: order.into_iter().filter_map(|id| plans.remove(&id)).collect(),
    }
}

/// Record store backed by one pretty-printed JSON file.
///
/// Every operation reads, changes and rewrites the whole file under an
/// async lock, so operations from one process never interleave.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read<T>(&self, f: impl FnOnce(&Database) -> T) -> Result<T> {
        let _guard = self.lock.lock().await;
        let db = load_database(&self.path)?;
        Ok(f(&db))
    }

    async fn write<T>(&self, f: impl FnOnce(&mut Database) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().await;
        let mut db = load_database(&self.path)?;
        let out = f(&mut db)?;
        save_database(&self.path, &db)?;
        debug!(path = %self.path.display(), "store file written");
        Ok(out)
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn create_profile(&self, profile: Profile) -> Result<Profile> {
        self.write(|db| db.create_profile(profile)).await
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.read(|db| db.get_profile(user_id).cloned()).await
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<Profile> {
        self.write(|db| db.update_profile(user_id, update)).await
    }

    async fn save_meal_plan(&self, record: SavedRecord) -> Result<SavedRecord> {
        self.write(|db| Ok(db.save_meal_plan(record))).await
    }

    async fn list_meal_plans(&self, user_id: &str, limit: usize) -> Result<Vec<SavedRecord>> {
        self.read(|db| db.list_meal_plans(user_id, limit)).await
    }

    async fn delete_meal_plan(&self, user_id: &str, id: Uuid) -> Result<()> {
        self.write(|db| db.delete_meal_plan(user_id, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PreferenceModel, Region};
    use crate::planner::generate_meal_plan;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let db = load_database(dir.path().join("absent.json")).unwrap();
        assert_eq!(db, Database::default());
    }

    #[test]
    fn test_deduplication() {
        let mut first = Profile::new("u");
        first.household_size = 1;
        let mut second = Profile::new("u");
        second.household_size = 5;
        let db = Database {
            profiles: vec![first, second],
            meal_plans: Vec::new(),
        };

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&db).unwrap().as_bytes())
            .unwrap();

        let loaded = load_database(file.path()).unwrap();
        assert_eq!(loaded.profiles.len(), 1);
        // Last occurrence wins
        assert_eq!(loaded.profiles[0].household_size, 5);
    }

    #[test]
    fn test_malformed_file_errors() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(load_database(file.path()).is_err());
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("plans.json"));
        store.create_profile(Profile::new("u")).await.unwrap();

        let prefs = PreferenceModel::new(Region::India);
        let record = SavedRecord::new("u", generate_meal_plan(&prefs), prefs);
        store.save_meal_plan(record.clone()).await.unwrap();

        let reopened = JsonFileStore::new(store.path().to_path_buf());
        let listed = reopened.list_meal_plans("u", 10).await.unwrap();
        assert_eq!(listed, vec![record]);
        assert!(reopened.get_profile("u").await.unwrap().is_some());
    }
}
