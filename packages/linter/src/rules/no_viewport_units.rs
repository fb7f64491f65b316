use crate::diagnostic::Diagnostic;
use crate::rules::{cached_regex, text_styles, LintRule};
use regex::Regex;
use std::sync::OnceLock;
use weave_model::{Element, StyleKey};

/// Lint rule that prevents use of vw and vh units in sizing
pub struct NoViewportUnitsRule;

const SIZING_KEYS: &[StyleKey] = &[
    StyleKey::Width,
    StyleKey::Height,
    StyleKey::MinWidth,
    StyleKey::MaxWidth,
    StyleKey::MinHeight,
    StyleKey::MaxHeight,
    StyleKey::FontSize,
];

fn viewport_unit() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    cached_regex(&RE, r"\b\d+(\.\d+)?(vw|vh)\b")
}

impl LintRule for NoViewportUnitsRule {
    fn name(&self) -> &'static str {
        "no-viewport-units"
    }

    fn description(&self) -> &'static str {
        "Disallow vw and vh units in sizing values"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let Some(re) = viewport_unit() else {
            return diagnostics;
        };

        for (key, value) in text_styles(element) {
            if !SIZING_KEYS.contains(&key) {
                continue;
            }

            if let Some(matched) = re.find(value) {
                let unit = if matched.as_str().ends_with("vw") {
                    "vw"
                } else {
                    "vh"
                };
                let property = key.css_name();

                diagnostics.push(
                    Diagnostic::error(
                        "no-viewport-units",
                        format!(
                            "Avoid using {} units in '{}'. Viewport units can cause layout issues on mobile devices.",
                            unit, property
                        ),
                        &element.id,
                    )
                    .with_suggestion(format!(
                        "Consider using percentages, rem, or em units instead of {} in '{}'",
                        unit, property
                    )),
                );
            }
        }

        diagnostics
    }
}
