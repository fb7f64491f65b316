//! Accessibility and style checks over an element collection
//!
//! Rules implement [`LintRule`] and are collected in a [`RuleRegistry`];
//! [`lint_collection`] walks every element, nested ones included, and asks
//! each rule about it.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use linter::{has_errors, lint, lint_collection, LintOptions};
pub use rules::{
    A11yRule, LintRule, NoImportantRule, NoNegativeSpacingRule, NoViewportUnitsRule, RuleRegistry,
};
