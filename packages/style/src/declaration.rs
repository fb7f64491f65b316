use serde::Serialize;
use std::fmt;
use weave_model::StyleKey;

/// Inline-style (script) form of a resolved value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Number(f64),
    Text(String),
}

impl ScriptValue {
    /// Render as a script literal: numbers bare, text as a quoted string
    pub fn to_literal(&self) -> String {
        match self {
            ScriptValue::Number(n) => crate::format_number(*n),
            ScriptValue::Text(s) => {
                serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
            }
        }
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedValue {
    pub css: String,
    pub script: ScriptValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub key: StyleKey,
    pub value: ResolvedValue,
}

impl Declaration {
    pub fn new(key: StyleKey, css: impl Into<String>, script: ScriptValue) -> Self {
        Self {
            key,
            value: ResolvedValue {
                css: css.into(),
                script,
            },
        }
    }

    /// kebab-case property name
    pub fn css_name(&self) -> &'static str {
        self.key.css_name()
    }

    /// camelCase property name
    pub fn script_name(&self) -> &'static str {
        self.key.as_str()
    }

    /// `name: value;`
    pub fn to_css(&self) -> String {
        format!("{}: {};", self.css_name(), self.value.css)
    }
}

/// Ordered declarations for one element
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    declarations: Vec<Declaration>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration, or replace the value in place when the key is
    /// already present (its position is kept)
    pub fn push(&mut self, declaration: Declaration) {
        match self
            .declarations
            .iter_mut()
            .find(|existing| existing.key == declaration.key)
        {
            Some(existing) => existing.value = declaration.value,
            None => self.declarations.push(declaration),
        }
    }

    pub fn get(&self, key: StyleKey) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.key == key)
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Single-line `a: b; c: d;` form for `style="..."` attributes
    pub fn to_inline_css(&self) -> String {
        self.declarations
            .iter()
            .map(Declaration::to_css)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a ResolvedStyle {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
