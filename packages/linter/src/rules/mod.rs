mod a11y;
mod no_important;
mod no_negative_spacing;
mod no_viewport_units;

pub use a11y::A11yRule;
pub use no_important::NoImportantRule;
pub use no_negative_spacing::NoNegativeSpacingRule;
pub use no_viewport_units::NoViewportUnitsRule;

use crate::diagnostic::Diagnostic;
use regex::Regex;
use std::sync::OnceLock;
use weave_model::{Element, StyleKey};

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check one element; children are visited separately
    fn check_element(&self, element: &Element) -> Vec<Diagnostic>;
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(A11yRule),
                Box::new(NoImportantRule),
                Box::new(NoViewportUnitsRule),
                Box::new(NoNegativeSpacingRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}

/// Text-valued styles of an element, with their stylesheet names
fn text_styles(element: &Element) -> impl Iterator<Item = (StyleKey, &str)> + '_ {
    element
        .styles
        .iter()
        .filter_map(|(key, value)| value.as_text().map(|text| (key, text)))
}

/// Compile a fixed pattern once; `None` only if the pattern itself is bad
fn cached_regex(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}
