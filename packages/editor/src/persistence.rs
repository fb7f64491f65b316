//! Project documents
//!
//! A project is saved as one JSON document holding the element tree and the
//! pages. Loading validates the tree, makes it the first history snapshot
//! and resumes the id generator past every id already in use, animation and
//! interaction ids included.

use crate::editor::EditorResult;
use crate::mutations;
use crate::{Editor, EditorConfig, PageIndex};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use weave_common::{IdCollector, Visitor};
use weave_model::{get_project_seed, ElementCollection, IdGenerator, Page, PageId, Theme};

/// Current document format
pub const FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    FORMAT_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Id generator seed; absent in documents written by other tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,

    pub elements: ElementCollection,

    #[serde(default)]
    pub pages: Vec<Page>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<PageId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl ProjectDocument {
    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Editor {
    /// Snapshot of the latest state as a document
    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument {
            version: FORMAT_VERSION,
            seed: Some(self.id_generator().seed().to_string()),
            elements: self.elements().clone(),
            pages: {
                let mut pages = self.pages().clone();
                pages.retain_existing(self.elements());
                pages.pages().to_vec()
            },
            current_page: Some(self.pages().current_page_id().clone()),
            theme: self.theme().cloned(),
            saved_at: None,
        }
    }

    /// Open a document with fresh history
    pub fn from_document(document: ProjectDocument, config: EditorConfig) -> EditorResult<Self> {
        mutations::validate(&document.elements)?;

        let pages = PageIndex::from_pages(document.pages, document.current_page)?;

        let seed = document
            .seed
            .unwrap_or_else(|| get_project_seed("untitled"));
        let mut ids = IdGenerator::from_seed(seed);
        let mut collector = IdCollector::default();
        collector.visit_collection(&document.elements);
        for id in &collector.ids {
            ids.observe(id);
        }
        for page in pages.pages() {
            if let Some(raw) = page.id.as_str().strip_prefix("page-") {
                ids.observe(raw);
            }
        }

        info!(
            elements = document.elements.len(),
            pages = pages.pages().len(),
            "Opened project document"
        );
        Ok(Editor::from_parts(
            document.elements,
            pages,
            document.theme,
            config,
            ids,
        ))
    }

    pub fn to_json(&self) -> EditorResult<String> {
        self.to_document().to_json()
    }

    pub fn from_json(json: &str, config: EditorConfig) -> EditorResult<Self> {
        Self::from_document(ProjectDocument::from_json(json)?, config)
    }

    /// Write the project to `path`, ending any open gesture first
    pub fn save(&mut self, path: impl AsRef<Path>) -> EditorResult<()> {
        self.end_gesture();

        let mut document = self.to_document();
        document.saved_at = Some(Utc::now());
        std::fs::write(path.as_ref(), document.to_json()?)?;

        info!(path = %path.as_ref().display(), "Saved project");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>, config: EditorConfig) -> EditorResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let editor = Self::from_json(&json, config)?;

        info!(path = %path.as_ref().display(), "Loaded project");
        Ok(editor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EditorError;
    use weave_model::{AnimationTrigger, ElementKind, InteractionAction, StyleKey, StyleValue};

    #[test]
    fn test_document_shape() {
        let mut editor = Editor::new("shop");
        editor.create_element(ElementKind::Button, 0.0, 0.0).unwrap();

        let json: serde_json::Value = serde_json::from_str(&editor.to_json().unwrap()).unwrap();
        assert_eq!(json["elements"][0]["type"], "button");
        assert_eq!(json["pages"][0]["id"], "home");
        assert!(json["pages"][0]["elementIds"].is_array());
        assert_eq!(json["currentPage"], "home");
    }

    #[test]
    fn test_reopened_project_has_fresh_history_and_ids() {
        let mut editor = Editor::new("shop");
        let first = editor.create_element(ElementKind::Button, 0.0, 0.0).unwrap();

        let reopened = Editor::from_json(&editor.to_json().unwrap(), EditorConfig::default()).unwrap();
        assert!(!reopened.can_undo());
        assert_eq!(reopened.elements(), editor.elements());

        let mut reopened = reopened;
        let second = reopened.create_element(ElementKind::Button, 0.0, 0.0).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_animations_and_interactions_survive_reopen() {
        let json = r#"{ "elements": [
            { "id": "el-1", "type": "button", "name": "Buy", "x": 0, "y": 0, "width": 120, "height": 44,
              "animations": [
                { "id": "fade", "property": "opacity", "from": 0, "to": 1, "duration": 300,
                  "easing": "ease-in-out", "trigger": "load" }
              ],
              "interactions": [
                { "id": "go", "trigger": "click", "action": "navigate", "target": "/checkout" },
                { "id": "ping", "trigger": "hover", "action": "api", "value": { "method": "POST" } }
              ] }
        ] }"#;

        let editor = Editor::from_json(json, EditorConfig::default()).unwrap();
        let reopened = Editor::from_json(&editor.to_json().unwrap(), EditorConfig::default()).unwrap();
        assert_eq!(reopened.elements(), editor.elements());

        let el = reopened.element(&"el-1".into()).unwrap();
        assert_eq!(el.animations.len(), 1);
        assert_eq!(el.animations[0].property, StyleKey::Opacity);
        assert_eq!(el.animations[0].trigger, AnimationTrigger::Load);
        assert_eq!(el.animations[0].to, StyleValue::Number(1.0));
        assert_eq!(el.interactions.len(), 2);
        assert_eq!(el.interactions[0].action, InteractionAction::Navigate);
        assert_eq!(el.interactions[0].target.as_deref(), Some("/checkout"));
        assert_eq!(el.interactions[1].value, Some(serde_json::json!({ "method": "POST" })));
    }

    #[test]
    fn test_minimal_document_gets_home_page() {
        let json = r#"{ "elements": [
            { "id": "el-1", "type": "text", "name": "Text", "x": 0, "y": 0, "width": 10, "height": 10 }
        ] }"#;

        let editor = Editor::from_json(json, EditorConfig::default()).unwrap();
        assert_eq!(editor.pages().current_page_id().as_str(), "home");
        assert_eq!(editor.elements().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"{ "elements": [
            { "id": "a", "type": "text", "name": "A", "x": 0, "y": 0, "width": 10, "height": 10 },
            { "id": "a", "type": "text", "name": "B", "x": 0, "y": 0, "width": 10, "height": 10 }
        ] }"#;

        assert!(matches!(
            Editor::from_json(json, EditorConfig::default()),
            Err(EditorError::Mutation(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Editor::from_json("{", EditorConfig::default()),
            Err(EditorError::Serialization(_))
        ));
    }
}
