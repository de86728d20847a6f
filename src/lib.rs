//! Tutor Trail - an interactive tutorial progression engine
//!
//! Core modules:
//! - `catalog`: immutable step and achievement catalogs
//! - `storage`: durable key/value persistence (LocalStorage on web)
//! - `progress`: persisted progression state and its wire encoding
//! - `engine`: step navigation, completion tracking, achievement awards
//! - `notify`: edge-triggered award notification signal
//!
//! The engine is deliberately UI-free: renderers consume its read-only
//! projections and drive it through its operations, so the same core
//! runs under a browser page script or a native harness.

pub mod catalog;
pub mod engine;
pub mod notify;
pub mod progress;
pub mod storage;

pub use catalog::{
    AchievementCatalog, AchievementInfo, CatalogError, ContentBlock, StepCatalog, StepRecord,
};
pub use engine::TutorialEngine;
pub use notify::AwardSignal;
pub use progress::ProgressState;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStore, ProgressStore};
