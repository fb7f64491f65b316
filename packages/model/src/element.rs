use crate::{template_for, Animation, ElementKind, Interaction, Styles};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type-specific extra attributes (`alt`, `href`, `aria-label`, ...)
pub type Props = BTreeMap<String, serde_json::Value>;

/// Opaque element identifier, unique across the whole collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single placed object on the canvas
///
/// Every element carries its own absolute `x`/`y`, nested or not. Children
/// are owned by their parent: an element appears exactly once in a
/// collection, either at the top level or inside one parent's `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    #[serde(default)]
    pub animations: Vec<Animation>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: Props,
}

impl Element {
    /// Instantiate an element of `kind` from its default template
    pub fn new(id: ElementId, kind: ElementKind, x: f64, y: f64) -> Self {
        let template = template_for(kind);

        Self {
            id,
            kind,
            name: kind.display_name().to_string(),
            locked: false,
            x,
            y,
            width: template.width,
            height: template.height,
            styles: template.styles,
            content: template.content,
            children: Vec::new(),
            animations: Vec::new(),
            interactions: Vec::new(),
            props: template.props,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Find this element or a descendant by id
    pub fn find(&self, id: &ElementId) -> Option<&Element> {
        if &self.id == id {
            return Some(self);
        }

        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        if &self.id == id {
            return Some(self);
        }

        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Text prop lookup (`alt`, `aria-label`, ...)
    pub fn prop_str(&self, name: &str) -> Option<&str> {
        self.props.get(name).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleKey;

    #[test]
    fn test_new_element_uses_template() {
        let button = Element::new("b1".into(), ElementKind::Button, 10.0, 20.0);

        assert_eq!(button.name, "Button");
        assert_eq!(button.content.as_deref(), Some("Click me"));
        assert!(!button.styles.contains(StyleKey::BackgroundColor));
        assert!(button.width > 0.0 && button.height > 0.0);
    }

    #[test]
    fn test_element_document_shape() {
        let el = Element::new("t1".into(), ElementKind::Text, 0.0, 0.0);
        let json = serde_json::to_value(&el).unwrap();

        assert_eq!(json["type"], "text");
        assert_eq!(json["id"], "t1");
        assert!(json.get("locked").is_none());
        assert!(json.get("children").is_none());

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, el);
    }

    #[test]
    fn test_find_descends_into_children() {
        let parent = Element::new("p".into(), ElementKind::Container, 0.0, 0.0)
            .with_child(Element::new("c".into(), ElementKind::Text, 5.0, 5.0)
                .with_child(Element::new("g".into(), ElementKind::Icon, 6.0, 6.0)));

        assert_eq!(parent.find(&"g".into()).map(|e| e.kind), Some(ElementKind::Icon));
        assert!(parent.find(&"missing".into()).is_none());
    }
}
