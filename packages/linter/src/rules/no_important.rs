use crate::diagnostic::Diagnostic;
use crate::rules::{text_styles, LintRule};
use weave_model::Element;

/// Lint rule that prevents use of !important in style values
pub struct NoImportantRule;

impl LintRule for NoImportantRule {
    fn name(&self) -> &'static str {
        "no-important"
    }

    fn description(&self) -> &'static str {
        "Disallow !important in style values"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (key, value) in text_styles(element) {
            if value.contains("!important") {
                let property = key.css_name();
                diagnostics.push(
                    Diagnostic::error(
                        "no-important",
                        format!(
                            "Avoid using !important in '{}'. It makes styles harder to override and maintain.",
                            property
                        ),
                        &element.id,
                    )
                    .with_suggestion(format!(
                        "Remove !important from '{}'; element rules are already unique per element",
                        property
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
    use weave_model::{ElementKind, StyleKey, Styles};

    fn element(styles: Styles) -> Element {
        Element::new("e".into(), ElementKind::Container, 0.0, 0.0).with_styles(styles)
    }

    #[test]
    fn test_detects_important() {
        let el = element(Styles::new().with(StyleKey::Color, "red !important"));

        let diagnostics = NoImportantRule.check_element(&el);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "no-important");
        assert!(diagnostics[0].message.contains("'color'"));
    }

    #[test]
    fn test_allows_normal_styles() {
        let el = element(
            Styles::new()
                .with(StyleKey::Color, "red")
                .with(StyleKey::Opacity, 0.5),
        );

        assert!(NoImportantRule.check_element(&el).is_empty());
    }
}
