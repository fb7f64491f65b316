//! Partial element updates
//!
//! Every field is optional; an absent field leaves the element alone.
//! `styles` and `props` merge key by key, everything else replaces.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use weave_model::{Animation, Element, Interaction, StyleKey, StylePatch, StyleValue};

/// `Some(None)` for an explicit `null`, `None` for an absent field
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Option<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: StylePatch,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, Option<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Element>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<Vec<Animation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactions: Option<Vec<Interaction>>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn position(self, x: f64, y: f64) -> Self {
        self.x(x).y(y)
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(self, width: f64, height: f64) -> Self {
        self.width(width).height(height)
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn content(mut self, content: Option<String>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn style(mut self, key: StyleKey, value: impl Into<StyleValue>) -> Self {
        self.styles.insert(key, Some(value.into()));
        self
    }

    pub fn remove_style(mut self, key: StyleKey) -> Self {
        self.styles.insert(key, None);
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(name.into(), Some(value.into()));
        self
    }

    pub fn remove_prop(mut self, name: impl Into<String>) -> Self {
        self.props.insert(name.into(), None);
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn animations(mut self, animations: Vec<Animation>) -> Self {
        self.animations = Some(animations);
        self
    }

    pub fn interactions(mut self, interactions: Vec<Interaction>) -> Self {
        self.interactions = Some(interactions);
        self
    }

    /// Whether the patch touches anything besides `locked`
    pub fn touches_content(&self) -> bool {
        self.name.is_some()
            || self.geometry().iter().any(|(_, v)| v.is_some())
            || self.content.is_some()
            || !self.styles.is_empty()
            || !self.props.is_empty()
            || self.children.is_some()
            || self.animations.is_some()
            || self.interactions.is_some()
    }

    /// Only toggles the lock (or is empty); allowed on locked elements
    pub fn is_lock_only(&self) -> bool {
        !self.touches_content()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_none() && !self.touches_content()
    }

    pub(crate) fn geometry(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ]
    }

    /// Shallow merge into `element`
    pub(crate) fn apply_to(&self, element: &mut Element) {
        if let Some(name) = &self.name {
            element.name = name.clone();
        }
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if let Some(locked) = self.locked {
            element.locked = locked;
        }
        if let Some(content) = &self.content {
            element.content = content.clone();
        }

        element.styles.merge(&self.styles);

        for (name, value) in &self.props {
            match value {
                Some(value) => {
                    element.props.insert(name.clone(), value.clone());
                }
                None => {
                    element.props.remove(name);
                }
            }
        }

        if let Some(children) = &self.children {
            element.children = children.clone();
        }
        if let Some(animations) = &self.animations {
            element.animations = animations.clone();
        }
        if let Some(interactions) = &self.interactions {
            element.interactions = interactions.clone();
        }
    }
}
