//! Generic persisted collection over a single key/value slot.
//!
//! The whole collection is serialized as one JSON array and written back in a
//! single `set`, so readers never observe a partially written collection.
//! Missing or unreadable slots load as an empty collection.

use super::{Clock, KeyValueStore};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;

/// Anything stored in an [`EntityStore`] is addressed by a string id.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> &str;
}

pub struct EntityStore<T> {
    backend: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    key: String,
    _marker: PhantomData<T>,
}

impl<T: Entity> EntityStore<T> {
    pub fn new(
        backend: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            clock,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Items in persisted order. Never fails: absent or corrupt data is empty.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read collection, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Corrupt collection data, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the whole persisted collection.
    pub fn save(&self, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(&self.key, &raw)
    }

    /// Millisecond timestamp, bumped past any numeric id already in use.
    pub fn generate_id(&self, existing: &[T]) -> String {
        let candidate = self.clock.now().timestamp_millis();
        let taken: Vec<i64> = existing
            .iter()
            .filter_map(|item| item.id().parse::<i64>().ok())
            .collect();

        let id = match taken.iter().copied().max() {
            Some(h) if h >= candidate => match h.checked_add(1) {
                Some(next) => next,
                // Top of the id space is occupied; take the lowest free id from now on.
                None => (candidate..=i64::MAX)
                    .find(|id| !taken.contains(id))
                    .unwrap_or(candidate),
            },
            _ => candidate,
        };
        id.to_string()
    }

    /// Append a new item built from a freshly generated id.
    pub fn create<F>(&self, build: F) -> Result<T>
    where
        F: FnOnce(String) -> T,
    {
        let mut items = self.load();
        let id = self.generate_id(&items);
        let item = build(id);
        items.push(item.clone());
        self.save(&items)?;
        Ok(item)
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.load().into_iter().find(|item| item.id() == id)
    }

    /// Apply `f` to the item with `id` in place. Returns the updated item,
    /// or `None` (without writing) when no such item exists.
    pub fn update<F>(&self, id: &str, f: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut T),
    {
        let mut items = self.load();
        let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
            return Ok(None);
        };
        f(item);
        let updated = item.clone();
        self.save(&items)?;
        Ok(Some(updated))
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut items = self.load();
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FixedClock, MemoryStore};
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    impl Entity for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn store() -> (Arc<MemoryStore>, EntityStore<Note>) {
        let backend = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        let store = EntityStore::new(backend.clone(), clock, "notes");
        (backend, store)
    }

    fn note(id: String, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn load_absent_slot_is_empty() {
        let (_, store) = store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_corrupt_slot_is_empty() {
        let (backend, store) = store();
        backend.set("notes", "{not json").unwrap();
        assert!(store.load().is_empty());

        backend.set("notes", r#"{"id":"1"}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn create_preserves_insertion_order() {
        let (_, store) = store();
        store.create(|id| note(id, "first")).unwrap();
        store.create(|id| note(id, "second")).unwrap();
        store.create(|id| note(id, "third")).unwrap();

        let texts: Vec<_> = store.load().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn ids_unique_under_frozen_clock() {
        let (_, store) = store();
        let a = store.create(|id| note(id, "a")).unwrap();
        let b = store.create(|id| note(id, "b")).unwrap();
        let c = store.create(|id| note(id, "c")).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert!(b.id.parse::<i64>().unwrap() > a.id.parse::<i64>().unwrap());
    }

    #[test]
    fn ids_stay_unique_when_max_id_is_stored() {
        let (backend, store) = store();
        backend
            .set("notes", r#"[{"id":"9223372036854775807","text":"imported"}]"#)
            .unwrap();

        let a = store.create(|id| note(id, "a")).unwrap();
        let b = store.create(|id| note(id, "b")).unwrap();

        let ids: Vec<_> = store.load().into_iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 3);
        assert_ne!(a.id, i64::MAX.to_string());
        assert_ne!(b.id, i64::MAX.to_string());
        assert_ne!(a.id, b.id);
        assert!(a.id.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn update_and_delete() {
        let (_, store) = store();
        let a = store.create(|id| note(id, "a")).unwrap();
        let b = store.create(|id| note(id, "b")).unwrap();

        let updated = store.update(&a.id, |n| n.text = "changed".into()).unwrap();
        assert_eq!(updated.unwrap().text, "changed");
        assert_eq!(store.find(&a.id).unwrap().text, "changed");

        assert!(store.update("missing", |n| n.text.clear()).unwrap().is_none());

        assert!(store.delete(&a.id).unwrap());
        assert!(!store.delete(&a.id).unwrap());
        assert_eq!(store.load(), vec![b]);
    }

    #[test]
    fn save_replaces_whole_collection() {
        let (_, store) = store();
        store.create(|id| note(id, "a")).unwrap();
        store.create(|id| note(id, "b")).unwrap();

        store.save(&[note("9".into(), "only")]).unwrap();
        assert_eq!(store.load(), vec![note("9".into(), "only")]);
    }
}
