use crate::{ElementKind, Props, StyleKey, Styles};

/// Defaults for a freshly placed element
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub width: f64,
    pub height: f64,
    pub styles: Styles,
    pub content: Option<String>,
    pub props: Props,
}

impl Template {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            styles: Styles::new(),
            content: None,
            props: Props::new(),
        }
    }

    fn style(mut self, key: StyleKey, value: impl Into<crate::StyleValue>) -> Self {
        self.styles.set(key, value);
        self
    }

    fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    fn prop(mut self, name: &str, value: &str) -> Self {
        self.props.insert(name.to_string(), value.into());
        self
    }
}

impl Default for Template {
    /// Generic 200x100 block with empty styles
    fn default() -> Self {
        Template::new(200.0, 100.0)
    }
}

/// Per-kind default geometry, styles and content
///
/// Kinds without a dedicated entry get [`Template::default`].
pub fn template_for(kind: ElementKind) -> Template {
    use ElementKind::*;
    use StyleKey as S;

    match kind {
        Section | Hero => Template::new(1200.0, 400.0)
            .style(S::Padding, 48)
            .style(S::Display, "flex")
            .style(S::FlexDirection, "column"),
        Container => Template::new(600.0, 300.0).style(S::Padding, 16),
        Flex => Template::new(600.0, 200.0)
            .style(S::Display, "flex")
            .style(S::FlexDirection, "row")
            .style(S::Gap, 16),
        Grid => Template::new(600.0, 300.0)
            .style(S::Display, "grid")
            .style(S::GridTemplateColumns, "repeat(3, 1fr)")
            .style(S::Gap, 16),
        Columns => Template::new(600.0, 200.0)
            .style(S::Display, "grid")
            .style(S::GridTemplateColumns, "1fr 1fr")
            .style(S::Gap, 24),
        Header | Navbar => Template::new(1200.0, 80.0)
            .style(S::Display, "flex")
            .style(S::AlignItems, "center")
            .style(S::JustifyContent, "space-between")
            .style(S::Padding, 16),
        Footer => Template::new(1200.0, 160.0).style(S::Padding, 32),
        Sidebar => Template::new(260.0, 600.0).style(S::Padding, 16),
        Heading => Template::new(400.0, 60.0)
            .style(S::FontSize, 32)
            .style(S::FontWeight, "bold")
            .content("Heading"),
        Text => Template::new(300.0, 40.0).style(S::FontSize, 16).content("Text"),
        Paragraph => Template::new(400.0, 120.0)
            .style(S::FontSize, 16)
            .style(S::LineHeight, 1.6)
            .content("Lorem ipsum dolor sit amet, consectetur adipiscing elit."),
        Link => Template::new(120.0, 24.0)
            .style(S::TextDecoration, "underline")
            .content("Link")
            .prop("href", "#"),
        Button => Template::new(120.0, 44.0)
            .style(S::Padding, 12)
            .style(S::BorderRadius, 8)
            .style(S::FontSize, 16)
            .style(S::FontWeight, 600)
            .content("Click me"),
        Image => Template::new(300.0, 200.0)
            .content("https://placehold.co/300x200")
            .prop("alt", ""),
        Video => Template::new(480.0, 270.0),
        Audio => Template::new(300.0, 54.0),
        Input | Search | DatePicker => Template::new(250.0, 40.0)
            .style(S::Padding, 8)
            .style(S::BorderRadius, 6)
            .style(S::Border, "1px solid #d1d5db"),
        Textarea => Template::new(300.0, 120.0)
            .style(S::Padding, 8)
            .style(S::Border, "1px solid #d1d5db"),
        Checkbox => Template::new(24.0, 24.0).prop("type", "checkbox"),
        Radio => Template::new(24.0, 24.0).prop("type", "radio"),
        Slider => Template::new(200.0, 24.0).prop("type", "range"),
        Card | ProductCard | Testimonial => Template::new(300.0, 380.0)
            .style(S::Padding, 16)
            .style(S::BorderRadius, 12)
            .style(S::BoxShadow, "0 4px 12px rgba(0, 0, 0, 0.1)"),
        Badge | Tag | Deals => Template::new(80.0, 28.0)
            .style(S::Padding, 4)
            .style(S::BorderRadius, 999)
            .style(S::FontSize, 12)
            .content("New"),
        Divider => Template::new(400.0, 1.0).style(S::BackgroundColor, "#e5e7eb"),
        Avatar => Template::new(48.0, 48.0).style(S::BorderRadius, 999),
        Progress => Template::new(300.0, 12.0).style(S::BorderRadius, 999),
        Code => Template::new(400.0, 160.0)
            .style(S::FontFamily, "monospace")
            .style(S::Padding, 16)
            .content("console.log('hello');"),
        Quote => Template::new(400.0, 100.0)
            .style(S::FontSize, 18)
            .content("A memorable quote."),
        _ => Template::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kinds_fall_back_to_generic_block() {
        let template = template_for(ElementKind::Calendar);
        assert_eq!(template.width, 200.0);
        assert_eq!(template.height, 100.0);
        assert!(template.styles.is_empty());
        assert!(template.content.is_none());
    }

    #[test]
    fn test_button_template_leaves_background_to_the_theme() {
        let template = template_for(ElementKind::Button);
        assert!(!template.styles.contains(StyleKey::BackgroundColor));
        assert_eq!(template.content.as_deref(), Some("Click me"));
    }
}
