use crate::{StyleKey, StyleValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationTrigger {
    Load,
    Hover,
    Click,
    Scroll,
}

/// Animation owned by a single element; no cross-element references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub id: String,
    /// Style key driven by the animation
    pub property: StyleKey,
    pub from: StyleValue,
    pub to: StyleValue,
    /// Milliseconds
    pub duration: f64,
    /// Named curve (`ease-in-out`) or `cubic-bezier(...)`
    pub easing: String,
    pub trigger: AnimationTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionTrigger {
    Click,
    Hover,
    Scroll,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionAction {
    Navigate,
    Toggle,
    Animate,
    Api,
}

/// Interaction record; `target` is a URL, element id or selector depending
/// on the action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub trigger: InteractionTrigger,
    pub action: InteractionAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
