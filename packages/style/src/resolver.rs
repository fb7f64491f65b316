use crate::{Declaration, ResolvedStyle, ScriptValue};
use tracing::trace;
use weave_model::{Element, ElementId, ElementKind, StyleKey, StyleUnit, StyleValue, Styles, Theme};

/// Transform components in composition order, with their unit and identity
const TRANSFORM_PARTS: &[(StyleKey, &str, &str, f64)] = &[
    (StyleKey::Rotate, "rotate", "deg", 0.0),
    (StyleKey::Scale, "scale", "", 1.0),
    (StyleKey::TranslateX, "translateX", "px", 0.0),
    (StyleKey::TranslateY, "translateY", "px", 0.0),
    (StyleKey::RotateX, "rotateX", "deg", 0.0),
    (StyleKey::RotateY, "rotateY", "deg", 0.0),
];

/// Stylesheet class shared by the markup and the rule for an element
pub fn class_name(id: &ElementId) -> String {
    let sanitized: String = id
        .as_str()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("el-{}", sanitized)
}

/// Props that carry extra class names rather than a plain attribute
pub const CLASS_PROPS: &[&str] = &["class", "className"];

/// Generated class followed by any class names set through props.
/// Tokens that could break out of an attribute are dropped.
pub fn class_list(element: &Element) -> String {
    let mut classes = vec![class_name(&element.id)];
    for prop in CLASS_PROPS {
        let Some(extra) = element.props.get(*prop).and_then(|v| v.as_str()) else {
            continue;
        };
        for token in extra.split_whitespace() {
            let unsafe_char = |c: char| matches!(c, '"' | '\\' | '<' | '>' | '{' | '}' | '&');
            if !token.contains(unsafe_char) && !classes.iter().any(|c| c == token) {
                classes.push(token.to_string());
            }
        }
    }
    classes.join(" ")
}

/// Shortest decimal form of a number (`16`, `0.5`, `-5`)
pub fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Resolve a sparse style map against an optional theme
pub fn resolve(styles: &Styles, theme: Option<&Theme>) -> ResolvedStyle {
    let mut resolved = ResolvedStyle::new();
    append_styles(&mut resolved, styles, theme);
    resolved
}

/// Resolve an element: absolute geometry first, then its styles
///
/// A style entry for one of the geometry keys replaces the geometry value
/// in place instead of adding a second declaration.
pub fn resolve_element(element: &Element, theme: Option<&Theme>) -> ResolvedStyle {
    resolve_element_at(element, (0.0, 0.0), theme)
}

/// Like [`resolve_element`], with `left`/`top` measured from `origin`
///
/// Nested elements keep canvas coordinates in the model; emitters pass the
/// parent's position so the offset is relative to the positioned parent.
pub fn resolve_element_at(
    element: &Element,
    origin: (f64, f64),
    theme: Option<&Theme>,
) -> ResolvedStyle {
    let mut resolved = ResolvedStyle::new();

    resolved.push(Declaration::new(
        StyleKey::Position,
        "absolute",
        ScriptValue::Text("absolute".to_string()),
    ));
    for (key, n) in [
        (StyleKey::Left, element.x - origin.0),
        (StyleKey::Top, element.y - origin.1),
        (StyleKey::Width, element.width),
        (StyleKey::Height, element.height),
    ] {
        resolved.push(Declaration::new(
            key,
            format!("{}px", format_number(n)),
            ScriptValue::Number(n),
        ));
    }

    let theme = theme.map(|t| heading_aware(t, element.kind));
    append_styles(&mut resolved, &element.styles, theme.as_ref());
    resolved
}

/// Headings take the theme's heading font as their fallback
fn heading_aware(theme: &Theme, kind: ElementKind) -> Theme {
    let mut theme = theme.clone();
    if kind.is_heading() {
        theme.fonts.body = theme.fonts.heading.clone();
    }
    theme
}

fn with_theme_fallbacks(styles: &Styles, theme: &Theme) -> Styles {
    let mut effective = styles.clone();
    let fallbacks = [
        (StyleKey::BackgroundColor, StyleValue::from(theme.colors.background.as_str())),
        (StyleKey::Color, StyleValue::from(theme.colors.text.as_str())),
        (StyleKey::FontFamily, StyleValue::from(theme.fonts.body.as_str())),
        (StyleKey::BorderRadius, StyleValue::Number(theme.border_radius)),
    ];

    for (key, value) in fallbacks {
        if !effective.contains(key) {
            effective.set(key, value);
        }
    }

    effective
}

fn append_styles(resolved: &mut ResolvedStyle, styles: &Styles, theme: Option<&Theme>) {
    let themed;
    let styles = match theme {
        Some(theme) => {
            themed = with_theme_fallbacks(styles, theme);
            &themed
        }
        None => styles,
    };

    let transform = compose_transform(styles);
    let mut transform_placed = false;

    for (key, value) in styles.iter() {
        if !transform_placed && key >= StyleKey::Transform {
            if let Some(transform) = transform.clone() {
                resolved.push(Declaration::new(
                    StyleKey::Transform,
                    transform.clone(),
                    ScriptValue::Text(transform),
                ));
            }
            transform_placed = true;
        }

        if key == StyleKey::Transform || key.unit() == StyleUnit::Transform {
            continue;
        }

        resolved.push(declare(key, value));
    }

    if !transform_placed {
        if let Some(transform) = transform {
            resolved.push(Declaration::new(
                StyleKey::Transform,
                transform.clone(),
                ScriptValue::Text(transform),
            ));
        }
    }
}

fn declare(key: StyleKey, value: &StyleValue) -> Declaration {
    match (value, key.unit()) {
        (StyleValue::Number(n), StyleUnit::Px) => {
            Declaration::new(key, format!("{}px", format_number(*n)), ScriptValue::Number(*n))
        }
        (StyleValue::Number(n), StyleUnit::Unitless) => {
            Declaration::new(key, format_number(*n), ScriptValue::Number(*n))
        }
        (StyleValue::Number(n), _) => {
            let text = format_number(*n);
            Declaration::new(key, text.clone(), ScriptValue::Text(text))
        }
        (StyleValue::Text(s), _) => Declaration::new(key, s.clone(), ScriptValue::Text(s.clone())),
    }
}

/// Build the `transform` value: explicit text first, then the composed parts
fn compose_transform(styles: &Styles) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(explicit) = styles.get(StyleKey::Transform) {
        let explicit = explicit.to_string();
        let explicit = explicit.trim();
        if !explicit.is_empty() && explicit != "none" {
            parts.push(explicit.to_string());
        }
    }

    for (key, function, unit, identity) in TRANSFORM_PARTS {
        let Some(value) = styles.get(*key) else {
            continue;
        };

        let part = match value {
            StyleValue::Number(n) if *n == *identity => None,
            StyleValue::Number(n) => Some(format!("{}({}{})", function, format_number(*n), unit)),
            StyleValue::Text(text) => match text.trim().parse::<f64>() {
                Ok(n) if n == *identity => None,
                Ok(n) => Some(format!("{}({}{})", function, format_number(n), unit)),
                Err(_) if text.trim().is_empty() => None,
                Err(_) => Some(format!("{}({})", function, text.trim())),
            },
        };

        match part {
            Some(part) => parts.push(part),
            None => trace!(key = %key, "transform component at identity, omitted"),
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
