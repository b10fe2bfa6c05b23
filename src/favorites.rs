//! Bounded, newest-first favorites list kept under a single storage key.
//!
//! Every mutation reads the whole list, changes it and writes the whole list
//! back. The `try_*` methods surface failures as `FavoritesError`; the plain
//! methods log them and fall back to `false` or an empty list so callers never
//! see an error.

use chrono::Utc;
use thiserror::Error;

use crate::models::{Favorite, FavoriteId, NewFavorite};
use crate::storage::{KeyValueStore, StorageError};

pub const STORAGE_KEY: &str = "ideaGenerator_favorites";
pub const MAX_FAVORITES: usize = 20;

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("favorite with id {0} already exists")]
    DuplicateId(FavoriteId),

    #[error("favorite text is empty")]
    EmptyText,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to serialize favorites: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Millisecond id for a new favorite, bumped past the highest numeric id in
/// `existing` so two saves within the same millisecond still differ.
pub fn next_numeric_id(existing: &[Favorite], now_ms: i64) -> FavoriteId {
    let floor = existing
        .iter()
        .filter_map(|f| f.id.as_number())
        .max()
        .map_or(i64::MIN, |n| n.saturating_add(1));
    FavoriteId::Number(now_ms.max(floor))
}

pub struct FavoritesStore<S> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Favorite> {
        self.try_list().unwrap_or_else(|e| {
            tracing::error!(error = %e, "error reading favorites");
            Vec::new()
        })
    }

    pub fn insert(&self, favorite: NewFavorite) -> bool {
        match self.try_insert(favorite) {
            Ok(()) => true,
            Err(FavoritesError::DuplicateId(id)) => {
                tracing::debug!(%id, "favorite already saved");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "error saving favorite");
                false
            }
        }
    }

    /// Returns `true` whenever the write succeeded, even if `id` was not present.
    pub fn remove(&self, id: &FavoriteId) -> bool {
        self.try_remove(id)
            .inspect_err(|e| tracing::error!(error = %e, %id, "error removing favorite"))
            .is_ok()
    }

    pub fn clear(&self) -> bool {
        self.try_clear()
            .inspect_err(|e| tracing::error!(error = %e, "error clearing favorites"))
            .is_ok()
    }

    /// A stored value that does not parse is treated as an empty list; it
    /// gets replaced by the next successful write.
    pub fn try_list(&self) -> Result<Vec<Favorite>, FavoritesError> {
        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                tracing::warn!(error = %e, "stored favorites are unreadable, using an empty list");
                Ok(Vec::new())
            }
        }
    }

    pub fn try_insert(&self, favorite: NewFavorite) -> Result<(), FavoritesError> {
        if favorite.text.trim().is_empty() {
            return Err(FavoritesError::EmptyText);
        }
        let mut favorites = self.try_list()?;
        if favorites.iter().any(|f| f.id == favorite.id) {
            return Err(FavoritesError::DuplicateId(favorite.id));
        }

        let timestamp = favorite
            .timestamp
            .unwrap_or_else(|| Utc::now().timestamp_millis());
        favorites.insert(
            0,
            Favorite {
                id: favorite.id,
                category: favorite.category,
                text: favorite.text,
                timestamp,
            },
        );
        // Eviction follows insertion order, not the timestamp field.
        favorites.truncate(MAX_FAVORITES);

        self.write(&favorites)
    }

    pub fn try_remove(&self, id: &FavoriteId) -> Result<(), FavoritesError> {
        let mut favorites = self.try_list()?;
        favorites.retain(|f| &f.id != id);
        self.write(&favorites)
    }

    pub fn try_clear(&self) -> Result<(), FavoritesError> {
        self.store.remove(STORAGE_KEY)?;
        Ok(())
    }

    fn write(&self, favorites: &[Favorite]) -> Result<(), FavoritesError> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(STORAGE_KEY, &raw)?;
        tracing::debug!(count = favorites.len(), "favorites written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::{FileStore, MemoryStore};
    use std::io;

    fn fresh() -> FavoritesStore<MemoryStore> {
        FavoritesStore::new(MemoryStore::new())
    }

    fn ids(store: &FavoritesStore<impl KeyValueStore>) -> Vec<i64> {
        store
            .list()
            .iter()
            .map(|f| f.id.as_number().unwrap())
            .collect()
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            self.get(key).map(|_| ())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.get(key).map(|_| ())
        }
    }

    #[test]
    fn clear_empties_the_list() {
        let store = fresh();
        store.insert(NewFavorite::new(1, Category::Writing, "a"));
        assert!(store.clear());
        assert!(store.list().is_empty());
        assert!(store.store.get(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn insert_then_list() {
        let store = fresh();
        assert!(store.list().is_empty());
        assert!(store.insert(NewFavorite::new(1, Category::Writing, "Test idea 1")));

        let favorites = store.list();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].text, "Test idea 1");
        assert_eq!(favorites[0].category, Category::Writing);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let store = fresh();
        assert!(store.insert(NewFavorite::new(1, Category::Writing, "Test idea 1")));
        assert!(!store.insert(NewFavorite::new(1, Category::Writing, "Test idea 1")));
        assert_eq!(store.list().len(), 1);

        let err = store
            .try_insert(NewFavorite::new(1, Category::Drawing, "other"))
            .unwrap_err();
        assert!(matches!(err, FavoritesError::DuplicateId(FavoriteId::Number(1))));
    }

    #[test]
    fn newest_first() {
        let store = fresh();
        for id in 1..=3 {
            store.insert(NewFavorite::new(id, Category::Coding, format!("Idea {id}")));
        }
        assert_eq!(ids(&store), vec![3, 2, 1]);
    }

    #[test]
    fn capped_at_twenty_dropping_oldest() {
        let store = fresh();
        for id in 0..25 {
            assert!(store.insert(NewFavorite::new(id, Category::Business, format!("Idea {id}"))));
        }
        let expected: Vec<i64> = (5..25).rev().collect();
        assert_eq!(ids(&store), expected);
    }

    #[test]
    fn eviction_ignores_timestamps() {
        let store = fresh();
        // Oldest insert carries the newest timestamp; it is still evicted first.
        store.insert(NewFavorite::new(0, Category::Writing, "first").with_timestamp(i64::MAX));
        for id in 1..=MAX_FAVORITES as i64 {
            store.insert(NewFavorite::new(id, Category::Writing, "later").with_timestamp(id));
        }
        let kept = ids(&store);
        assert_eq!(kept.len(), MAX_FAVORITES);
        assert!(!kept.contains(&0));
    }

    #[test]
    fn remove_by_id() {
        let store = fresh();
        store.insert(NewFavorite::new(1, Category::Writing, "Test idea 1"));
        store.insert(NewFavorite::new(2, Category::Drawing, "Test idea 2"));
        assert!(store.remove(&FavoriteId::Number(1)));

        let favorites = store.list();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, FavoriteId::Number(2));
    }

    #[test]
    fn remove_missing_id_still_succeeds() {
        let store = fresh();
        store.insert(NewFavorite::new(1, Category::Writing, "a"));
        assert!(store.remove(&FavoriteId::Number(99)));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn round_trip_preserves_fields_and_defaults_timestamp() {
        let store = fresh();
        let before = Utc::now().timestamp_millis();
        store.insert(NewFavorite::new("abc", Category::Drawing, "A dragon having afternoon tea"));
        store.insert(NewFavorite::new(7, Category::Coding, "Pomodoro timer").with_timestamp(1234));
        let after = Utc::now().timestamp_millis();

        let favorites = store.list();
        assert_eq!(favorites[0].id, FavoriteId::Number(7));
        assert_eq!(favorites[0].timestamp, 1234);
        assert_eq!(favorites[1].id, FavoriteId::Text("abc".into()));
        assert_eq!(favorites[1].category, Category::Drawing);
        assert_eq!(favorites[1].text, "A dragon having afternoon tea");
        assert!((before..=after).contains(&favorites[1].timestamp));
    }

    #[test]
    fn blank_text_is_rejected() {
        let store = fresh();
        assert!(!store.insert(NewFavorite::new(1, Category::Writing, "   ")));
        assert!(store.list().is_empty());
    }

    #[test]
    fn corrupt_data_reads_as_empty_and_is_overwritten() {
        let store = fresh();
        store.store.set(STORAGE_KEY, "{not json").unwrap();
        assert!(store.list().is_empty());

        assert!(store.insert(NewFavorite::new(1, Category::Writing, "fresh start")));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn unknown_category_in_storage_reads_as_empty() {
        let store = fresh();
        store
            .store
            .set(STORAGE_KEY, r#"[{"id":1,"category":"test","text":"x","timestamp":1}]"#)
            .unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn quota_failure_reports_false_and_keeps_old_list() {
        let store = FavoritesStore::new(MemoryStore::with_quota(200));
        assert!(store.insert(NewFavorite::new(1, Category::Writing, "short")));
        let long = "x".repeat(300);
        assert!(!store.insert(NewFavorite::new(2, Category::Writing, long)));
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn storage_errors_never_escape() {
        let store = FavoritesStore::new(BrokenStore);
        assert!(store.list().is_empty());
        assert!(!store.insert(NewFavorite::new(1, Category::Writing, "a")));
        assert!(!store.remove(&FavoriteId::Number(1)));
        assert!(!store.clear());
        assert!(matches!(store.try_list(), Err(FavoritesError::Storage(_))));
    }

    #[test]
    fn next_id_skips_past_existing_numbers() {
        let existing = vec![
            Favorite {
                id: FavoriteId::Number(5_000),
                category: Category::Writing,
                text: "x".into(),
                timestamp: 0,
            },
            Favorite {
                id: FavoriteId::Text("text-id".into()),
                category: Category::Writing,
                text: "y".into(),
                timestamp: 0,
            },
        ];
        assert_eq!(next_numeric_id(&existing, 1_000), FavoriteId::Number(5_001));
        assert_eq!(next_numeric_id(&existing, 9_000), FavoriteId::Number(9_000));
        assert_eq!(next_numeric_id(&[], 42), FavoriteId::Number(42));
    }

    #[test]
    fn survives_restart_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FavoritesStore::new(FileStore::new(dir.path()));
            store.insert(NewFavorite::new(1, Category::Writing, "kept"));
        }
        let reopened = FavoritesStore::new(FileStore::new(dir.path()));
        let favorites = reopened.list();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].text, "kept");
    }
}
