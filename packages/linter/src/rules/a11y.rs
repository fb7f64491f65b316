use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use weave_model::{Element, ElementKind};

/// Accessibility lint rules
pub struct A11yRule;

impl LintRule for A11yRule {
    fn name(&self) -> &'static str {
        "a11y"
    }

    fn description(&self) -> &'static str {
        "Require accessible names on buttons, images and inputs"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        match element.kind {
            // Buttons need visible text or a label
            ElementKind::Button => {
                if !has_text(element.content.as_deref()) && !has_label(element) {
                    diagnostics.push(
                        Diagnostic::error(
                            "a11y-button-text",
                            format!("Button \"{}\" is missing text content", element.name),
                            &element.id,
                        )
                        .with_suggestion(
                            "Add text content to the button, or use 'aria-label' to provide a label",
                        ),
                    );
                }
            }

            // An empty alt counts as missing
            ElementKind::Image => {
                if !has_text(element.prop_str("alt")) && !has_label(element) {
                    diagnostics.push(
                        Diagnostic::error(
                            "a11y-img-alt",
                            format!("Image \"{}\" is missing alt text", element.name),
                            &element.id,
                        )
                        .with_suggestion(
                            "Add an 'alt' prop describing the image content",
                        ),
                    );
                }
            }

            ElementKind::Input | ElementKind::Search | ElementKind::DatePicker => {
                if !has_label(element) && element.prop_str("type") != Some("hidden") {
                    diagnostics.push(
                        Diagnostic::warning(
                            "a11y-input-label",
                            format!("Input \"{}\" is missing an ARIA label", element.name),
                            &element.id,
                        )
                        .with_suggestion("Add an 'aria-label' prop to the input"),
                    );
                }
            }

            ElementKind::Link => {
                if !has_text(element.content.as_deref()) && !has_label(element) {
                    diagnostics.push(
                        Diagnostic::error(
                            "a11y-link-text",
                            format!("Link \"{}\" is missing text content", element.name),
                            &element.id,
                        )
                        .with_suggestion(
                            "Add text content to the link, or use 'aria-label' to provide a label",
                        ),
                    );
                }
            }

            _ => {}
        }

        diagnostics
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.map(|s| !s.trim().is_empty()).unwrap_or(false)
}

fn has_label(element: &Element) -> bool {
    has_text(element.prop_str("aria-label")) || has_text(element.prop_str("aria-labelledby"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(element: &Element) -> Vec<String> {
        A11yRule
            .check_element(element)
            .into_iter()
            .map(|d| d.rule)
            .collect()
    }

    #[test]
    fn test_img_without_alt() {
        let image = Element::new("i".into(), ElementKind::Image, 0.0, 0.0);
        assert_eq!(check(&image), vec!["a11y-img-alt"]);
    }

    #[test]
    fn test_img_with_alt() {
        let image =
            Element::new("i".into(), ElementKind::Image, 0.0, 0.0).with_prop("alt", "Team photo");
        assert!(check(&image).is_empty());
    }

    #[test]
    fn test_button_without_text() {
        let mut button = Element::new("b".into(), ElementKind::Button, 0.0, 0.0);
        button.content = None;
        assert_eq!(check(&button), vec!["a11y-button-text"]);

        let labelled = button.with_prop("aria-label", "Close");
        assert!(check(&labelled).is_empty());
    }

    #[test]
    fn test_button_with_text() {
        let button = Element::new("b".into(), ElementKind::Button, 0.0, 0.0);
        assert!(check(&button).is_empty());
    }

    #[test]
    fn test_input_label_is_a_warning() {
        let input = Element::new("in".into(), ElementKind::Input, 0.0, 0.0);
        let diagnostics = A11yRule.check_element(&input);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, crate::DiagnosticLevel::Warning);
        assert!(diagnostics[0].message.contains("Input"));
    }
}
