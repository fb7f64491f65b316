use crate::diagnostic::Diagnostic;
use crate::rules::{cached_regex, LintRule};
use regex::Regex;
use std::sync::OnceLock;
use weave_model::{Element, StyleKey, StyleValue};

/// Lint rule that prevents negative margins and padding
pub struct NoNegativeSpacingRule;

/// Keys checked for negative values
const SPACING_KEYS: &[StyleKey] = &[
    StyleKey::Margin,
    StyleKey::MarginTop,
    StyleKey::MarginRight,
    StyleKey::MarginBottom,
    StyleKey::MarginLeft,
    StyleKey::Padding,
    StyleKey::PaddingTop,
    StyleKey::PaddingRight,
    StyleKey::PaddingBottom,
    StyleKey::PaddingLeft,
];

// Negative lengths: -10px, -1rem, -5%
fn negative_length() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    cached_regex(
        &RE,
        r"(^|[\s(,])-\d+(\.\d+)?(%|px|rem|em|vh|vw|pt|pc|in|cm|mm|ex|ch|vmin|vmax)?\b",
    )
}

impl LintRule for NoNegativeSpacingRule {
    fn name(&self) -> &'static str {
        "no-negative-spacing"
    }

    fn description(&self) -> &'static str {
        "Disallow negative values for margin and padding"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for key in SPACING_KEYS {
            let negative = match element.styles.get(*key) {
                Some(StyleValue::Number(n)) => *n < 0.0,
                Some(StyleValue::Text(text)) => {
                    negative_length().map(|re| re.is_match(text)).unwrap_or(false)
                }
                None => false,
            };

            if negative {
                let property = key.css_name();
                let property_type = if property.starts_with("margin") {
                    "margin"
                } else {
                    "padding"
                };

                diagnostics.push(
                    Diagnostic::error(
                        "no-negative-spacing",
                        format!(
                            "Avoid using negative values for '{}'. Negative {} can cause unexpected layout behavior.",
                            property, property_type
                        ),
                        &element.id,
                    )
                    .with_suggestion(format!(
                        "Move the element instead of using negative {} in '{}'",
                        property_type, property
                    )),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_model::{ElementKind, Styles};

    fn element(styles: Styles) -> Element {
        Element::new("e".into(), ElementKind::Container, 0.0, 0.0).with_styles(styles)
    }

    #[test]
    fn test_detects_negative_margin_number() {
        let diagnostics =
            NoNegativeSpacingRule.check_element(&element(Styles::new().with(StyleKey::MarginTop, -10)));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "no-negative-spacing");
        assert!(diagnostics[0].message.contains("margin-top"));
    }

    #[test]
    fn test_detects_negative_padding_text() {
        let diagnostics = NoNegativeSpacingRule
            .check_element(&element(Styles::new().with(StyleKey::Padding, "4px -5px")));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("padding"));
    }

    #[test]
    fn test_allows_positive_spacing() {
        let el = element(
            Styles::new()
                .with(StyleKey::Margin, 10)
                .with(StyleKey::Padding, "8px 16px"),
        );
        assert!(NoNegativeSpacingRule.check_element(&el).is_empty());
    }

    #[test]
    fn test_allows_negative_in_non_spacing_properties() {
        let el = element(
            Styles::new()
                .with(StyleKey::TranslateX, -10)
                .with(StyleKey::LetterSpacing, -1),
        );
        assert!(NoNegativeSpacingRule.check_element(&el).is_empty());
    }
}
