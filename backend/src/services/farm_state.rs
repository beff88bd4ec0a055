//! Farm state store: the per-session digital twin registry
//!
//! Holds one [`FarmState`] per session for the lifetime of the process.
//! A single read-write lock guards the whole map: reads share it, and each
//! upsert holds it exclusively for one merge, so a reader never sees a
//! half-applied profile.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use shared::{FarmProfileUpdate, FarmState};

/// Process-wide session to farm state mapping
#[derive(Clone, Default)]
pub struct FarmStateStore {
    farms: Arc<RwLock<HashMap<String, FarmState>>>,
}

impl FarmStateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored state for a session, or the empty default
    ///
    /// Reading never creates an entry.
    pub fn get(&self, session_id: &str) -> FarmState {
        let farms = self.farms.read().unwrap_or_else(PoisonError::into_inner);
        farms
            .get(session_id)
            .cloned()
            .unwrap_or_else(|| FarmState::empty(session_id))
    }

    /// Create or merge the state for a session and return the result
    pub fn upsert(&self, session_id: &str, update: FarmProfileUpdate) -> FarmState {
        let mut farms = self.farms.write().unwrap_or_else(PoisonError::into_inner);
        let created = !farms.contains_key(session_id);

        let state = farms
            .entry(session_id.to_string())
            .or_insert_with(|| FarmState::empty(session_id));
        state.apply(update, Utc::now());

        tracing::debug!(session_id, created, crops = state.primary_crops.len(), "Farm state upserted");
        state.clone()
    }

    /// Upsert when a profile came with the request, read otherwise
    pub fn sync_profile(&self, session_id: &str, profile: Option<FarmProfileUpdate>) -> FarmState {
        match profile {
            Some(update) => self.upsert(session_id, update),
            None => self.get(session_id),
        }
    }

    /// Number of sessions with a recorded profile
    pub fn len(&self) -> usize {
        self.farms.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn profile(name: Option<&str>, location: Option<&str>) -> FarmProfileUpdate {
        FarmProfileUpdate {
            name: name.map(String::from),
            location: location.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_get_unknown_session_returns_default_without_inserting() {
        let store = FarmStateStore::new();
        let state = store.get("never-seen-session");

        assert_eq!(state, FarmState::empty("never-seen-session"));
        assert!(!state.is_recorded());
        assert!(store.is_empty());
    }

    #[test]
    fn test_upsert_merges_fields() {
        let store = FarmStateStore::new();
        store.upsert("s1", profile(Some("A"), Some("X")));
        let merged = store.upsert("s1", profile(None, Some("Y")));

        assert_eq!(merged.name.as_deref(), Some("A"));
        assert_eq!(merged.location.as_deref(), Some("Y"));
        assert_eq!(store.get("s1"), merged);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_update_still_records_session() {
        let store = FarmStateStore::new();
        let state = store.upsert("s1", FarmProfileUpdate::default());
        assert!(state.is_recorded());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = FarmStateStore::new();
        store.upsert("a", profile(Some("Alpha"), None));
        store.upsert("b", profile(Some("Beta"), None));

        assert_eq!(store.get("a").name.as_deref(), Some("Alpha"));
        assert_eq!(store.get("b").name.as_deref(), Some("Beta"));
    }

    #[test]
    fn test_any_string_is_a_valid_key() {
        let store = FarmStateStore::new();
        store.upsert("", profile(Some("Blank"), None));
        assert_eq!(store.get("").name.as_deref(), Some("Blank"));
    }

    #[test]
    fn test_sync_profile_reads_without_profile() {
        let store = FarmStateStore::new();
        let state = store.sync_profile("s1", None);
        assert!(!state.is_recorded());
        assert!(store.is_empty());

        let state = store.sync_profile("s1", Some(profile(Some("A"), None)));
        assert_eq!(state.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_concurrent_disjoint_updates_are_not_lost() {
        let store = FarmStateStore::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        if i % 2 == 0 {
                            store.upsert("shared", profile(Some("Name"), None));
                        } else {
                            store.upsert("shared", profile(None, Some("Place")));
                        }
                        let seen = store.get("shared");
                        // A merged state always keeps whatever was already set
                        assert!(seen.name.is_some() || seen.location.is_some());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let state = store.get("shared");
        assert_eq!(state.name.as_deref(), Some("Name"));
        assert_eq!(state.location.as_deref(), Some("Place"));
    }
}
