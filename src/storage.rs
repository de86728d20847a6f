//! Durable key/value persistence for tutorial progress
//!
//! Progress survives page reloads through a synchronous string-keyed
//! store: browser LocalStorage on wasm32, an in-memory map on native
//! and in tests. Absent keys mean first run, never an error. Writes are
//! best-effort: a failed write is logged and the in-memory state stays
//! authoritative for the rest of the session.

use std::collections::HashMap;

/// Fixed keys for the three persisted progress slices.
pub mod keys {
    /// Current step index, stored as decimal text
    pub const CURRENT_STEP: &str = "tutorial_current_step";
    /// Completed step ids, stored as a JSON array of strings
    pub const COMPLETED_STEPS: &str = "tutorial_completed_steps";
    /// Awarded achievement ids, stored as a JSON array of strings
    pub const ACHIEVEMENTS: &str = "tutorial_achievements";
}

/// Synchronous string-keyed durable store.
pub trait ProgressStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// HashMap-backed store for native builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys, used by reset tests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Browser LocalStorage (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Grab the window's LocalStorage. Unavailable storage (private
    /// browsing, sandboxed iframe) degrades to a session-only engine.
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, progress will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl ProgressStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                // Quota exceeded or storage revoked mid-session
                log::warn!("failed to persist {}, continuing in-memory", key);
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
