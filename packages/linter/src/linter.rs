use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use crate::rules::RuleRegistry;
use tracing::debug;
use weave_model::{Element, ElementCollection};

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint with the built-in rules
pub fn lint(collection: &ElementCollection) -> Vec<Diagnostic> {
    lint_collection(collection, LintOptions::default())
}

/// Lint every element, parents before children
pub fn lint_collection(collection: &ElementCollection, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for element in collection {
        lint_element(element, &registry, &mut diagnostics);
    }

    debug!(
        elements = collection.ids().len(),
        diagnostics = diagnostics.len(),
        "Linted collection"
    );
    diagnostics
}

fn lint_element(element: &Element, registry: &RuleRegistry, diagnostics: &mut Vec<Diagnostic>) {
    for rule in registry.rules() {
        diagnostics.extend(rule.check_element(element));
    }

    for child in &element.children {
        lint_element(child, registry, diagnostics);
    }
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics
        .iter()
        .any(|d| d.level == DiagnosticLevel::Error)
}
