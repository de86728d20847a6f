//! Persisted progression state and its wire encoding
//!
//! Three independent slices, each under its own storage key: the current
//! step index as decimal text, and the completed-step and awarded-
//! achievement id sets as JSON string arrays. Loading substitutes the
//! documented defaults for anything absent or unparsable, so a wiped or
//! corrupted store never blocks startup.

use std::collections::HashSet;

use crate::storage::{ProgressStore, keys};

/// Mutable progression record, owned exclusively by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressState {
    /// Index into the step catalog, always in bounds
    pub current_index: usize,
    /// Ids of completed steps (membership-only semantics)
    pub completed: HashSet<String>,
    /// Ids of awarded achievements
    pub awarded: HashSet<String>,
}

/// Encode an id set as a sorted JSON array of strings.
///
/// Sorting decouples the output from set iteration order, so equal sets
/// always serialize to identical text.
pub fn encode_id_set(set: &HashSet<String>) -> String {
    let mut ids: Vec<&str> = set.iter().map(String::as_str).collect();
    ids.sort_unstable();
    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a JSON array of strings into a set.
///
/// Accepts any order and collapses duplicates; unparsable input decodes
/// as the empty set.
pub fn decode_id_set(json: &str) -> HashSet<String> {
    serde_json::from_str::<Vec<String>>(json)
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default()
}

impl ProgressState {
    /// Restore saved progress, falling back per-slice to defaults.
    ///
    /// `catalog_len` bounds the restored index: a catalog that shrank
    /// between sessions clamps the saved position to the new last step.
    pub fn load(store: &impl ProgressStore, catalog_len: usize) -> Self {
        let current_index = match store.get(keys::CURRENT_STEP) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(index) => index.min(catalog_len.saturating_sub(1)),
                Err(_) => {
                    log::warn!("unparsable saved step index '{}', starting at 0", raw);
                    0
                }
            },
            None => 0,
        };
        let completed = store
            .get(keys::COMPLETED_STEPS)
            .map(|raw| decode_id_set(&raw))
            .unwrap_or_default();
        let awarded = store
            .get(keys::ACHIEVEMENTS)
            .map(|raw| decode_id_set(&raw))
            .unwrap_or_default();
        Self {
            current_index,
            completed,
            awarded,
        }
    }

    pub fn save_index(&self, store: &mut impl ProgressStore) {
        store.set(keys::CURRENT_STEP, &self.current_index.to_string());
    }

    pub fn save_completed(&self, store: &mut impl ProgressStore) {
        store.set(keys::COMPLETED_STEPS, &encode_id_set(&self.completed));
    }

    pub fn save_awarded(&self, store: &mut impl ProgressStore) {
        store.set(keys::ACHIEVEMENTS, &encode_id_set(&self.awarded));
    }

    /// Remove all three keys so the next load is indistinguishable from
    /// a first run.
    pub fn clear_persisted(store: &mut impl ProgressStore) {
        store.remove(keys::CURRENT_STEP);
        store.remove(keys::COMPLETED_STEPS);
        store.remove(keys::ACHIEVEMENTS);
    }
}
