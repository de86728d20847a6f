//! Tutor Trail entry point
//!
//! On wasm32 this exposes a `TutorialApp` handle the page script drives;
//! natively it runs a logged walkthrough against an in-memory store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use wasm_bindgen::prelude::*;

    use tutor_trail::{AchievementCatalog, LocalStorage, StepCatalog, TutorialEngine};

    /// JS-facing handle over the progression engine.
    ///
    /// The page constructs one `TutorialApp` from the catalog JSON
    /// bundled with it, wires navigation buttons to the operation
    /// methods, and re-reads the projection getters after each call.
    /// Step data crosses the boundary as JSON text so the page renders
    /// with plain `JSON.parse`.
    #[wasm_bindgen]
    pub struct TutorialApp {
        engine: TutorialEngine<LocalStorage>,
        achievements: AchievementCatalog,
    }

    #[wasm_bindgen]
    impl TutorialApp {
        /// Build the app, restoring any saved progress from
        /// LocalStorage. Fails only on malformed catalog JSON.
        #[wasm_bindgen(constructor)]
        pub fn new(steps_json: &str, achievements_json: &str) -> Result<TutorialApp, JsError> {
            let catalog = StepCatalog::from_json(steps_json)?;
            let achievements = AchievementCatalog::from_json(achievements_json)?;
            achievements.check_references(&catalog);
            let engine = TutorialEngine::new(catalog, LocalStorage::new());
            Ok(TutorialApp {
                engine,
                achievements,
            })
        }

        // --- Operations ---

        pub fn advance(&mut self) {
            self.engine.advance();
        }

        pub fn retreat(&mut self) {
            self.engine.retreat();
        }

        pub fn jump_to(&mut self, index: i64) {
            self.engine.jump_to(index);
        }

        pub fn mark_complete(&mut self, step_id: &str) {
            self.engine.mark_complete(step_id);
        }

        pub fn award(&mut self, achievement_id: &str) {
            self.engine.award(achievement_id);
        }

        pub fn reset_progress(&mut self) {
            self.engine.reset_progress();
        }

        // --- Projections ---

        #[wasm_bindgen(getter)]
        pub fn current_index(&self) -> usize {
            self.engine.current_index()
        }

        #[wasm_bindgen(getter)]
        pub fn total_steps(&self) -> usize {
            self.engine.total_steps()
        }

        #[wasm_bindgen(getter)]
        pub fn completion_fraction(&self) -> f32 {
            self.engine.completion_fraction()
        }

        /// Current step record as JSON text.
        pub fn current_step_json(&self) -> String {
            self.engine
                .current_step()
                .and_then(|step| serde_json::to_string(step).ok())
                .unwrap_or_else(|| "null".to_string())
        }

        /// Full catalog as JSON text, for stepper/outline rendering.
        pub fn steps_json(&self) -> String {
            serde_json::to_string(self.engine.catalog().steps())
                .unwrap_or_else(|_| "[]".to_string())
        }

        pub fn is_step_completed(&self, step_id: &str) -> bool {
            self.engine.is_step_completed(step_id)
        }

        pub fn is_achievement_earned(&self, achievement_id: &str) -> bool {
            self.engine.achievements().contains(achievement_id)
        }

        /// Acknowledge the pending award and return its display
        /// metadata as JSON text for the notifier popup.
        ///
        /// An award whose id has no catalog entry is still recorded in
        /// the earned set; this just returns nothing to display.
        pub fn take_award_notification(&mut self) -> Option<String> {
            let id = self.engine.take_last_awarded()?;
            let info = self.achievements.get(&id)?;
            serde_json::to_string(info).ok()
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Tutor Trail engine loaded");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tutor Trail (native) starting...");
    log::info!("Native mode drives an in-memory store - build for web to persist progress");

    walkthrough();
}

/// Drive the engine through the full demo catalog as a smoke check.
#[cfg(not(target_arch = "wasm32"))]
fn walkthrough() {
    use tutor_trail::{AchievementCatalog, MemoryStore, StepCatalog, TutorialEngine};

    let steps = r#"[
        {
            "id": "welcome",
            "section": "Setup",
            "title": "Welcome to the Interactive Web Dev Tutorial!",
            "content": [
                { "type": "text", "value": "Ready to dive into modern web development?" }
            ]
        },
        {
            "id": "vite-setup-command",
            "section": "Setup",
            "title": "Creating Your First Project (Simulation)",
            "content": [
                { "type": "simulated-terminal",
                  "command": "npm create vite@latest my-react-app -- --template react",
                  "output": ["Scaffolding project...", "Done."] }
            ],
            "achievement": "VITE_INITIATOR"
        },
        {
            "id": "deploy",
            "section": "Deployment",
            "title": "Deploying to Netlify",
            "content": [
                { "type": "text", "value": "Drag the dist folder into Netlify and you are live!" }
            ],
            "achievement": "NETLIFY_DEPLOYER"
        }
    ]"#;
    let achievements = r#"{
        "VITE_INITIATOR": {
            "name": "Vite Initiator",
            "description": "Simulated your first Vite project creation!",
            "icon": "🚀"
        },
        "NETLIFY_DEPLOYER": {
            "name": "Netlify Ninja",
            "description": "Deployed your app to the web (simulation)!",
            "icon": "🌐"
        }
    }"#;

    let catalog = match StepCatalog::from_json(steps) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("demo catalog failed to parse: {}", err);
            return;
        }
    };
    let achievement_catalog = match AchievementCatalog::from_json(achievements) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("demo achievements failed to parse: {}", err);
            return;
        }
    };
    achievement_catalog.check_references(&catalog);

    let total = catalog.len();
    let mut engine = TutorialEngine::new(catalog, MemoryStore::new());

    while engine.current_index() < total - 1 || !engine.is_step_completed("deploy") {
        if let Some(step) = engine.current_step() {
            println!("[{}/{}] {}", engine.current_index() + 1, total, step.title);
        }
        engine.advance();
        if let Some(id) = engine.take_last_awarded() {
            match achievement_catalog.get(&id) {
                Some(info) => println!("  {} {} - {}", info.icon, info.name, info.description),
                None => log::warn!("earned achievement '{}' has no display metadata", id),
            }
        }
    }

    println!(
        "\n✓ Walkthrough finished: {} steps, {} achievements",
        engine.completed_steps().len(),
        engine.achievements().len()
    );
}
