//! Favorite tracking, persisted as a JSON list of program ids.
//!
//! The store is read on demand and written back immediately on toggle,
//! so each mutation round-trips through the file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{DongnaeError, DongnaeResult};

/// Persistence seam for the favorites set.
pub trait FavoritesStore {
    fn load(&self) -> DongnaeResult<HashSet<String>>;
    fn save(&self, favorites: &HashSet<String>) -> DongnaeResult<()>;

    /// Flip membership of `id` and persist. Returns the new membership state.
    fn toggle(&self, id: &str) -> DongnaeResult<bool> {
        let mut favorites = self.load()?;
        let now_favorite = if favorites.remove(id) {
            false
        } else {
            favorites.insert(id.to_string());
            true
        };
        self.save(&favorites)?;
        Ok(now_favorite)
    }
}

/// File-backed store at a fixed path; a missing file is an empty set.
pub struct JsonFavorites {
    path: PathBuf,
}

impl JsonFavorites {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFavorites { path: path.into() }
    }

    /// Default location: `<data dir>/dongnae/favorites.json`
    pub fn default_path() -> DongnaeResult<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| DongnaeError::Favorites("Could not determine data directory".into()))?;

        Ok(data_dir.join("dongnae").join("favorites.json"))
    }

    pub fn open_default() -> DongnaeResult<Self> {
        Ok(JsonFavorites::new(Self::default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFavorites {
    fn load(&self) -> DongnaeResult<HashSet<String>> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let ids: Vec<String> = serde_json::from_str(&content)
            .map_err(|e| DongnaeError::Serialization(e.to_string()))?;

        Ok(ids.into_iter().collect())
    }

    fn save(&self, favorites: &HashSet<String>) -> DongnaeResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Sorted so the file content is deterministic
        let mut ids: Vec<&String> = favorites.iter().collect();
        ids.sort();

        let content = serde_json::to_string_pretty(&ids)
            .map_err(|e| DongnaeError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonFavorites) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFavorites::new(dir.path().join("favorites.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty_set() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = temp_store();
        let favorites: HashSet<String> =
            ["a".to_string(), "b".to_string()].into_iter().collect();

        store.save(&favorites).unwrap();
        assert_eq!(store.load().unwrap(), favorites);
    }

    #[test]
    fn test_toggle_twice_restores_original_set() {
        let (_dir, store) = temp_store();
        store.save(&["keep".to_string()].into_iter().collect()).unwrap();

        assert!(store.toggle("new-id").unwrap());
        assert!(store.load().unwrap().contains("new-id"));

        assert!(!store.toggle("new-id").unwrap());
        let after = store.load().unwrap();
        assert!(!after.contains("new-id"));
        assert!(after.contains("keep"));
    }

    #[test]
    fn test_file_is_a_json_list() {
        let (_dir, store) = temp_store();
        store.save(&["b".to_string(), "a".to_string()].into_iter().collect()).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let ids: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }
}
