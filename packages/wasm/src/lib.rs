use std::fmt::Display;
use wasm_bindgen::prelude::*;
use weave_editor::{AlignOp, Editor, EditorConfig, ElementPatch, Target};
use weave_linter::lint;
use weave_model::{ElementId, ElementKind, Theme};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(prefix: &str, err: impl Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", prefix, err))
}

/// Editor handle for a browser host
///
/// Elements, patches and documents cross the boundary as JSON strings.
#[wasm_bindgen]
pub struct WasmEditor {
    editor: Editor,
}

#[wasm_bindgen]
impl WasmEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(project: &str) -> WasmEditor {
        WasmEditor {
            editor: Editor::new(project),
        }
    }

    /// Open a saved project document; `config` is optional editor config JSON
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, config: Option<String>) -> Result<WasmEditor, JsValue> {
        let config = match config {
            Some(config) => serde_json::from_str::<EditorConfig>(&config)
                .map_err(|e| js_error("Config error", e))?,
            None => EditorConfig::default(),
        };

        let editor = Editor::from_json(json, config).map_err(|e| js_error("Load error", e))?;
        Ok(WasmEditor { editor })
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.editor
            .to_json()
            .map_err(|e| js_error("Serialization error", e))
    }

    /// The latest element tree as JSON
    pub fn elements(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.editor.elements())
            .map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = createElement)]
    pub fn create_element(&mut self, kind: &str, x: f64, y: f64) -> Result<String, JsValue> {
        let kind: ElementKind = kind.parse().map_err(|e| js_error("Unknown element type", e))?;
        let id = self
            .editor
            .create_element(kind, x, y)
            .map_err(|e| js_error("Create error", e))?;
        Ok(id.to_string())
    }

    /// Apply a JSON `ElementPatch`
    #[wasm_bindgen(js_name = updateElement)]
    pub fn update_element(&mut self, id: &str, patch: &str) -> Result<(), JsValue> {
        let patch: ElementPatch =
            serde_json::from_str(patch).map_err(|e| js_error("Patch error", e))?;
        self.editor
            .update_element(&ElementId::from(id), &patch)
            .map_err(|e| js_error("Update error", e))
    }

    #[wasm_bindgen(js_name = deleteElement)]
    pub fn delete_element(&mut self, id: &str) -> Result<(), JsValue> {
        self.editor
            .delete_element(&ElementId::from(id))
            .map_err(|e| js_error("Delete error", e))
    }

    #[wasm_bindgen(js_name = duplicateElement)]
    pub fn duplicate_element(&mut self, id: &str) -> Result<String, JsValue> {
        let copy = self
            .editor
            .duplicate_element(&ElementId::from(id))
            .map_err(|e| js_error("Duplicate error", e))?;
        Ok(copy.to_string())
    }

    pub fn undo(&mut self) -> Result<(), JsValue> {
        self.editor.undo().map_err(|e| js_error("Undo error", e))
    }

    pub fn redo(&mut self) -> Result<(), JsValue> {
        self.editor.redo().map_err(|e| js_error("Redo error", e))
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    /// Start coalescing edits, e.g. on pointer down
    #[wasm_bindgen(js_name = beginGesture)]
    pub fn begin_gesture(&mut self) {
        self.editor.begin_gesture();
    }

    /// Commit the coalesced edits; false when nothing changed
    #[wasm_bindgen(js_name = endGesture)]
    pub fn end_gesture(&mut self) -> bool {
        self.editor.end_gesture()
    }

    pub fn select(&mut self, id: Option<String>) -> Result<(), JsValue> {
        self.editor
            .select(id.map(ElementId::from))
            .map_err(|e| js_error("Select error", e))
    }

    #[wasm_bindgen(js_name = selectMany)]
    pub fn select_many(&mut self, ids: Vec<String>) {
        self.editor
            .select_many(ids.into_iter().map(ElementId::from).collect());
    }

    #[wasm_bindgen(js_name = selectedIds)]
    pub fn selected_ids(&self) -> Vec<String> {
        self.editor
            .selection()
            .selected_ids()
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    /// Align the selection; `op` is the camelCase operation name
    pub fn align(&mut self, op: &str) -> Result<(), JsValue> {
        let op: AlignOp = serde_json::from_value(serde_json::Value::String(op.to_string()))
            .map_err(|e| js_error("Unknown alignment", e))?;
        self.editor.align(op).map_err(|e| js_error("Align error", e))
    }

    /// Apply a built-in theme by name, or clear it with `None`
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, name: Option<String>) -> Result<(), JsValue> {
        match name {
            Some(name) => {
                let theme = Theme::named(&name)
                    .ok_or_else(|| JsValue::from_str(&format!("Unknown theme: {}", name)))?;
                self.editor.apply_theme(theme);
            }
            None => self.editor.clear_theme(),
        }
        Ok(())
    }

    #[wasm_bindgen(js_name = generateCode)]
    pub fn generate_code(&self, target: &str) -> Result<String, JsValue> {
        let target: Target = target.parse().map_err(|e| js_error("Codegen error", e))?;
        self.editor
            .generate_code(target)
            .map_err(|e| js_error("Codegen error", e))
    }

    /// Lint diagnostics for the latest tree, as JSON
    pub fn lint(&self) -> Result<String, JsValue> {
        serde_json::to_string(&lint(self.editor.elements()))
            .map_err(|e| js_error("Serialization error", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_and_generate() {
        let mut editor = WasmEditor::new("demo");
        let id = editor.create_element("button", 100.0, 80.0).unwrap();

        editor
            .update_element(&id, r#"{ "content": "Buy now", "styles": { "rotate": 45 } }"#)
            .unwrap();
        assert!(editor.can_undo());

        let html = editor.generate_code("html").unwrap();
        assert!(html.contains("Buy now"));
        assert!(html.contains("rotate(45deg)"));

        editor.undo().unwrap();
        assert!(editor.can_redo());
        assert!(!editor.generate_code("html").unwrap().contains("Buy now"));
    }

    #[test]
    fn test_document_round_trip() {
        let mut editor = WasmEditor::new("demo");
        let id = editor.create_element("image", 0.0, 0.0).unwrap();
        let copy = editor.duplicate_element(&id).unwrap();
        assert_ne!(id, copy);

        let lint: serde_json::Value = serde_json::from_str(&editor.lint().unwrap()).unwrap();
        assert_eq!(lint.as_array().map(Vec::len), Some(2));

        let reopened = WasmEditor::from_json(&editor.to_json().unwrap(), None).unwrap();
        assert_eq!(reopened.elements().unwrap(), editor.elements().unwrap());
        assert!(!reopened.can_undo());
    }

    #[test]
    fn test_gesture_and_alignment() {
        let mut editor = WasmEditor::new("demo");
        let a = editor.create_element("text", 0.0, 0.0).unwrap();
        let b = editor.create_element("text", 100.0, 100.0).unwrap();

        editor.begin_gesture();
        editor.update_element(&a, r#"{ "x": 10 }"#).unwrap();
        editor.update_element(&a, r#"{ "x": 30 }"#).unwrap();
        assert!(editor.end_gesture());

        editor.select(Some(a.clone())).unwrap();
        assert_eq!(editor.selected_ids(), vec![a.clone()]);

        editor.select_many(vec![a, b]);
        editor.align("left").unwrap();
        let elements: serde_json::Value = serde_json::from_str(&editor.elements().unwrap()).unwrap();
        assert_eq!(elements[0]["x"], 30.0);
        assert_eq!(elements[1]["x"], 30.0);

        editor.set_theme(Some("Dark Purple".to_string())).unwrap();
        assert!(editor.generate_code("vue").unwrap().contains("<template>"));
    }
}
