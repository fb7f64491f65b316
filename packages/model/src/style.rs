use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How a numeric value for a key is turned into stylesheet text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleUnit {
    /// Length, suffixed with `px`
    Px,
    /// Dimensionless number (opacity, z-index, line-height, font-weight)
    Unitless,
    /// Free text keyword or expression; numbers are printed as-is
    Keyword,
    /// Component of the composed `transform` list
    Transform,
}

macro_rules! style_keys {
    ($($variant:ident => ($camel:literal, $css:literal, $unit:ident),)*) => {
        /// Fixed style vocabulary
        ///
        /// Declaration order is significant: [`Styles`] iterates in this
        /// order and resolved output follows it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum StyleKey {
            $($variant,)*
        }

        impl StyleKey {
            pub const ALL: &'static [StyleKey] = &[$(StyleKey::$variant,)*];

            /// camelCase name, as used in documents and inline-style objects
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(StyleKey::$variant => $camel,)*
                }
            }

            /// kebab-case stylesheet property name
            pub fn css_name(&self) -> &'static str {
                match self {
                    $(StyleKey::$variant => $css,)*
                }
            }

            pub fn unit(&self) -> StyleUnit {
                match self {
                    $(StyleKey::$variant => StyleUnit::$unit,)*
                }
            }

            pub fn from_name(name: &str) -> Option<StyleKey> {
                match name {
                    $($camel | $css => Some(StyleKey::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

style_keys! {
    BackgroundColor => ("backgroundColor", "background-color", Keyword),
    Color => ("color", "color", Keyword),
    FontSize => ("fontSize", "font-size", Px),
    FontWeight => ("fontWeight", "font-weight", Unitless),
    FontFamily => ("fontFamily", "font-family", Keyword),
    LineHeight => ("lineHeight", "line-height", Unitless),
    LetterSpacing => ("letterSpacing", "letter-spacing", Px),
    TextAlign => ("textAlign", "text-align", Keyword),
    TextDecoration => ("textDecoration", "text-decoration", Keyword),
    TextTransform => ("textTransform", "text-transform", Keyword),
    Padding => ("padding", "padding", Px),
    PaddingTop => ("paddingTop", "padding-top", Px),
    PaddingRight => ("paddingRight", "padding-right", Px),
    PaddingBottom => ("paddingBottom", "padding-bottom", Px),
    PaddingLeft => ("paddingLeft", "padding-left", Px),
    Margin => ("margin", "margin", Px),
    MarginTop => ("marginTop", "margin-top", Px),
    MarginRight => ("marginRight", "margin-right", Px),
    MarginBottom => ("marginBottom", "margin-bottom", Px),
    MarginLeft => ("marginLeft", "margin-left", Px),
    BorderRadius => ("borderRadius", "border-radius", Px),
    Border => ("border", "border", Keyword),
    BorderWidth => ("borderWidth", "border-width", Px),
    BorderStyle => ("borderStyle", "border-style", Keyword),
    BorderColor => ("borderColor", "border-color", Keyword),
    Display => ("display", "display", Keyword),
    FlexDirection => ("flexDirection", "flex-direction", Keyword),
    JustifyContent => ("justifyContent", "justify-content", Keyword),
    AlignItems => ("alignItems", "align-items", Keyword),
    FlexWrap => ("flexWrap", "flex-wrap", Keyword),
    GridTemplateColumns => ("gridTemplateColumns", "grid-template-columns", Keyword),
    GridTemplateRows => ("gridTemplateRows", "grid-template-rows", Keyword),
    Gap => ("gap", "gap", Px),
    Opacity => ("opacity", "opacity", Unitless),
    Transform => ("transform", "transform", Keyword),
    TransformOrigin => ("transformOrigin", "transform-origin", Keyword),
    Rotate => ("rotate", "rotate", Transform),
    RotateX => ("rotateX", "rotate-x", Transform),
    RotateY => ("rotateY", "rotate-y", Transform),
    Scale => ("scale", "scale", Transform),
    TranslateX => ("translateX", "translate-x", Transform),
    TranslateY => ("translateY", "translate-y", Transform),
    Perspective => ("perspective", "perspective", Px),
    Transition => ("transition", "transition", Keyword),
    BoxShadow => ("boxShadow", "box-shadow", Keyword),
    TextShadow => ("textShadow", "text-shadow", Keyword),
    BackgroundImage => ("backgroundImage", "background-image", Keyword),
    BackgroundSize => ("backgroundSize", "background-size", Keyword),
    BackgroundPosition => ("backgroundPosition", "background-position", Keyword),
    BackgroundRepeat => ("backgroundRepeat", "background-repeat", Keyword),
    BackdropFilter => ("backdropFilter", "backdrop-filter", Keyword),
    Filter => ("filter", "filter", Keyword),
    ZIndex => ("zIndex", "z-index", Unitless),
    Position => ("position", "position", Keyword),
    Top => ("top", "top", Px),
    Right => ("right", "right", Px),
    Bottom => ("bottom", "bottom", Px),
    Left => ("left", "left", Px),
    Width => ("width", "width", Px),
    Height => ("height", "height", Px),
    MinWidth => ("minWidth", "min-width", Px),
    MaxWidth => ("maxWidth", "max-width", Px),
    MinHeight => ("minHeight", "min-height", Px),
    MaxHeight => ("maxHeight", "max-height", Px),
    Overflow => ("overflow", "overflow", Keyword),
    Cursor => ("cursor", "cursor", Keyword),
    PointerEvents => ("pointerEvents", "pointer-events", Keyword),
    MixBlendMode => ("mixBlendMode", "mix-blend-mode", Keyword),
    ClipPath => ("clipPath", "clip-path", Keyword),
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single style value: a number or a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

/// Partial style update: `Some` sets a key, `None` removes it
pub type StylePatch = BTreeMap<StyleKey, Option<StyleValue>>;

/// Sparse style map; a missing key means "visual default", not zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles(BTreeMap<StyleKey, StyleValue>);

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.0.get(&key)
    }

    pub fn contains(&self, key: StyleKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn set(&mut self, key: StyleKey, value: impl Into<StyleValue>) {
        self.0.insert(key, value.into());
    }

    /// Builder form of [`Styles::set`]
    pub fn with(mut self, key: StyleKey, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: StyleKey) -> Option<StyleValue> {
        self.0.remove(&key)
    }

    /// Merge a patch key by key, leaving untouched keys alone
    pub fn merge(&mut self, patch: &StylePatch) {
        for (key, value) in patch {
            match value {
                Some(value) => {
                    self.0.insert(*key, value.clone());
                }
                None => {
                    self.0.remove(key);
                }
            }
        }
    }

    /// Iterate in vocabulary order
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StyleKey, StyleValue)> for Styles {
    fn from_iter<I: IntoIterator<Item = (StyleKey, StyleValue)>>(iter: I) -> Self {
        Styles(iter.into_iter().collect())
    }
}
