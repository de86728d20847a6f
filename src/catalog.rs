//! Tutorial step and achievement catalogs
//!
//! The step catalog is an ordered, immutable list supplied at startup;
//! its order defines navigation order. Content blocks are opaque to the
//! engine and passed straight through to whatever renders them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One renderable unit of step content.
///
/// Tagged by a `type` field so authored catalog JSON round-trips
/// losslessly. The engine never inspects these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    /// Plain explanatory paragraph
    Text { value: String },
    /// Syntax-highlighted source sample
    Code { language: String, code: String },
    /// Bulleted list of short items
    List { items: Vec<String> },
    /// A command and its canned output, shown as a fake terminal
    SimulatedTerminal { command: String, output: Vec<String> },
    /// Pre-rendered file tree, one line per entry
    FileStructure { structure: Vec<String> },
    /// Embedded video with a display title
    Video { url: String, title: String },
}

/// A single tutorial step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Unique identifier, stable across catalog revisions
    pub id: String,
    /// Grouping label for the stepper sidebar (display-only)
    pub section: String,
    /// Human-readable step title
    pub title: String,
    /// Ordered content blocks, handed to renderers untouched
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Achievement granted when this step is completed via `advance`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
}

/// Display metadata for one achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementInfo {
    pub name: String,
    pub description: String,
    /// Emoji or icon token, renderer's choice how to draw it
    pub icon: String,
}

/// Authoring defects that make a catalog unusable.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("step catalog is empty")]
    Empty,
    #[error("duplicate step id: {0}")]
    DuplicateStepId(String),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, non-empty, immutable step catalog.
#[derive(Debug, Clone)]
pub struct StepCatalog {
    steps: Vec<StepRecord>,
}

impl StepCatalog {
    /// Build a catalog, rejecting empty input and duplicate step ids.
    pub fn new(steps: Vec<StepRecord>) -> Result<Self, CatalogError> {
        if steps.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id.as_str()) {
                return Err(CatalogError::DuplicateStepId(step.id.clone()));
            }
        }
        Ok(Self { steps })
    }

    /// Parse a catalog from its authored JSON array form.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let steps: Vec<StepRecord> = serde_json::from_str(json)?;
        Self::new(steps)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept so `len` has its conventional companion.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step. Safe because the catalog is non-empty.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&StepRecord> {
        self.steps.get(index)
    }

    /// Full step list, for stepper/outline consumers.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }
}

/// Achievement id to display metadata mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementCatalog {
    entries: HashMap<String, AchievementInfo>,
}

impl AchievementCatalog {
    pub fn new(entries: HashMap<String, AchievementInfo>) -> Self {
        Self { entries }
    }

    /// Parse from the authored `{id: {name, description, icon}}` form.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, id: &str) -> Option<&AchievementInfo> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Warn about step achievements with no display metadata.
    ///
    /// A dangling id is an authoring defect, not a runtime error: the
    /// award itself still records, the notifier just has nothing to show.
    pub fn check_references(&self, catalog: &StepCatalog) {
        for step in catalog.steps() {
            if let Some(id) = &step.achievement {
                if !self.entries.contains_key(id) {
                    log::warn!(
                        "step '{}' references unknown achievement '{}'",
                        step.id,
                        id
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str) -> StepRecord {
        StepRecord {
            id: id.to_string(),
            section: "Setup".to_string(),
            title: format!("Step {}", id),
            content: Vec::new(),
            achievement: None,
        }
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(
            StepCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = StepCatalog::new(vec![step("a"), step("b"), step("a")]);
        match result {
            Err(CatalogError::DuplicateStepId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let catalog = StepCatalog::new(vec![step("a"), step("b"), step("c")]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.last_index(), 2);
        assert_eq!(catalog.get(1).unwrap().id, "b");
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_parses_authored_json_shape() {
        let json = r#"[
            {
                "id": "vite-setup-command",
                "section": "Setup",
                "title": "Creating Your First Project (Simulation)",
                "content": [
                    { "type": "text", "value": "Open your terminal and run:" },
                    { "type": "simulated-terminal",
                      "command": "npm create vite@latest my-react-app -- --template react",
                      "output": ["Scaffolding project...", "Done."] },
                    { "type": "list", "items": ["npm create vite@latest", "--template react"] }
                ],
                "achievement": "VITE_INITIATOR"
            },
            {
                "id": "project-structure",
                "section": "Setup",
                "title": "Exploring the Project Structure",
                "content": [
                    { "type": "file-structure", "structure": ["my-react-app/", "├── src/"] },
                    { "type": "code", "language": "html", "code": "<div id=\"root\"></div>" },
                    { "type": "video", "url": "https://example.com/v", "title": "Intro" }
                ]
            }
        ]"#;
        let catalog = StepCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let first = catalog.get(0).unwrap();
        assert_eq!(first.achievement.as_deref(), Some("VITE_INITIATOR"));
        assert_eq!(first.content.len(), 3);
        assert!(matches!(
            first.content[1],
            ContentBlock::SimulatedTerminal { .. }
        ));
        let second = catalog.get(1).unwrap();
        assert_eq!(second.achievement, None);
        assert!(matches!(second.content[0], ContentBlock::FileStructure { .. }));
    }

    #[test]
    fn test_achievement_catalog_lookup() {
        let json = r#"{
            "VITE_INITIATOR": {
                "name": "Vite Initiator",
                "description": "Simulated your first Vite project creation!",
                "icon": "🚀"
            }
        }"#;
        let achievements = AchievementCatalog::from_json(json).unwrap();
        assert_eq!(achievements.len(), 1);
        assert_eq!(achievements.get("VITE_INITIATOR").unwrap().name, "Vite Initiator");
        assert!(achievements.get("UNKNOWN").is_none());
    }

    #[test]
    fn test_dangling_achievement_is_not_fatal() {
        let mut broken = step("a");
        broken.achievement = Some("MISSING".to_string());
        let catalog = StepCatalog::new(vec![broken]).unwrap();
        // Only logs; must not panic or error.
        AchievementCatalog::default().check_references(&catalog);
    }
}
