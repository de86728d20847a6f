//! Tutorial progression engine
//!
//! Owns the mutable progression state, restores it from the injected
//! store at construction, and re-persists each changed slice after
//! every mutation. All operations are synchronous, run to completion,
//! and never fail: out-of-range navigation clamps, repeated completions
//! and awards are no-ops.

use std::collections::HashSet;

use crate::catalog::{StepCatalog, StepRecord};
use crate::notify::AwardSignal;
use crate::progress::ProgressState;
use crate::storage::ProgressStore;

pub struct TutorialEngine<S: ProgressStore> {
    catalog: StepCatalog,
    store: S,
    state: ProgressState,
    signal: AwardSignal,
}

impl<S: ProgressStore> TutorialEngine<S> {
    /// Build an engine over an injected catalog and store, restoring
    /// any saved progress. Absent or corrupt saved entries fall back to
    /// a fresh start instead of failing.
    pub fn new(catalog: StepCatalog, store: S) -> Self {
        let state = ProgressState::load(&store, catalog.len());
        log::info!(
            "tutorial engine ready: step {} of {}, {} completed, {} achievements",
            state.current_index + 1,
            catalog.len(),
            state.completed.len(),
            state.awarded.len()
        );
        Self {
            catalog,
            store,
            state,
            signal: AwardSignal::new(),
        }
    }

    // --- Operations ---

    /// Complete the current step, award its achievement if it declares
    /// one, then move forward one step (clamped at the last step).
    ///
    /// Completion and awarding apply to the step the user is leaving,
    /// so advancing off the last step still marks it complete even
    /// though the index stays put.
    pub fn advance(&mut self) {
        let (step_id, achievement) = match self.catalog.get(self.state.current_index) {
            Some(step) => (step.id.clone(), step.achievement.clone()),
            // current_index is always in bounds
            None => return,
        };
        self.mark_complete(&step_id);
        if let Some(id) = achievement {
            self.award(&id);
        }
        self.state.current_index = (self.state.current_index + 1).min(self.catalog.last_index());
        self.state.save_index(&mut self.store);
    }

    /// Move back one step, clamped at the first. Completion and
    /// achievement sets are untouched: revisiting does not undo.
    pub fn retreat(&mut self) {
        self.state.current_index = self.state.current_index.saturating_sub(1);
        self.state.save_index(&mut self.store);
    }

    /// Jump straight to a step, clamping the target into bounds.
    ///
    /// Jumps neither complete steps nor award achievements; those
    /// side effects are reserved for sequential progression through
    /// `advance`.
    pub fn jump_to(&mut self, target: i64) {
        let clamped = target.clamp(0, self.catalog.last_index() as i64) as usize;
        self.state.current_index = clamped;
        self.state.save_index(&mut self.store);
    }

    /// Record a step as completed. Idempotent; persists only when the
    /// set actually changes. Does not touch achievements.
    pub fn mark_complete(&mut self, step_id: &str) {
        if self.state.completed.insert(step_id.to_string()) {
            self.state.save_completed(&mut self.store);
        }
    }

    /// Grant an achievement at most once per reset cycle. Re-awarding
    /// an already held id neither re-persists nor re-raises the
    /// notification signal.
    pub fn award(&mut self, achievement_id: &str) {
        if self.state.awarded.insert(achievement_id.to_string()) {
            log::info!("achievement unlocked: {}", achievement_id);
            self.state.save_awarded(&mut self.store);
            self.signal.raise(achievement_id);
        }
    }

    /// Wipe all progress, in memory and in the store. The persisted
    /// keys are removed outright, so the next load is indistinguishable
    /// from a first run.
    pub fn reset_progress(&mut self) {
        self.state = ProgressState::default();
        self.signal = AwardSignal::new();
        ProgressState::clear_persisted(&mut self.store);
        log::info!("tutorial progress reset");
    }

    // --- Projections ---

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// The step at the current index. The bounds invariant makes this
    /// effectively infallible; Option mirrors the catalog lookup.
    pub fn current_step(&self) -> Option<&StepRecord> {
        self.catalog.get(self.state.current_index)
    }

    pub fn total_steps(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn completed_steps(&self) -> &HashSet<String> {
        &self.state.completed
    }

    pub fn achievements(&self) -> &HashSet<String> {
        &self.state.awarded
    }

    pub fn is_step_completed(&self, step_id: &str) -> bool {
        self.state.completed.contains(step_id)
    }

    /// Fraction of catalog steps completed, for progress indicators.
    pub fn completion_fraction(&self) -> f32 {
        self.state.completed.len() as f32 / self.catalog.len() as f32
    }

    /// Pending "just awarded" id without acknowledging it.
    pub fn last_awarded(&self) -> Option<&str> {
        self.signal.peek()
    }

    /// Acknowledge and return the pending "just awarded" id, if any.
    /// Returns `None` once acknowledged until the next distinct award.
    pub fn take_last_awarded(&mut self) -> Option<String> {
        self.signal.take()
    }

    /// Read access to the underlying store, for round-trip tests and
    /// consumers that snapshot persisted state.
    pub fn store(&self) -> &S {
        &self.store
    }
}
