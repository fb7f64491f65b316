use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

/// Active theme; supplies fallbacks for a few style keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub border_radius: f64,
}

impl Theme {
    fn preset(
        name: &str,
        [primary, secondary, background, text, accent]: [&str; 5],
        [heading, body]: [&str; 2],
        border_radius: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            colors: ThemeColors {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                background: background.to_string(),
                text: text.to_string(),
                accent: accent.to_string(),
            },
            fonts: ThemeFonts {
                heading: heading.to_string(),
                body: body.to_string(),
            },
            border_radius,
        }
    }

    /// Built-in theme presets
    pub fn presets() -> Vec<Theme> {
        vec![
            Theme::preset(
                "Modern Blue",
                ["#3b82f6", "#8b5cf6", "#ffffff", "#1f2937", "#06b6d4"],
                ["Inter", "Inter"],
                8.0,
            ),
            Theme::preset(
                "Dark Purple",
                ["#a855f7", "#ec4899", "#0f172a", "#f1f5f9", "#f59e0b"],
                ["Poppins", "Inter"],
                12.0,
            ),
            Theme::preset(
                "Minimal Gray",
                ["#6b7280", "#9ca3af", "#f9fafb", "#111827", "#374151"],
                ["SF Pro Display", "SF Pro Text"],
                4.0,
            ),
            Theme::preset(
                "Vibrant Gradient",
                ["#f43f5e", "#f97316", "#fef3c7", "#78350f", "#eab308"],
                ["Montserrat", "Open Sans"],
                16.0,
            ),
            Theme::preset(
                "Ocean Blue",
                ["#0ea5e9", "#06b6d4", "#ecfeff", "#164e63", "#14b8a6"],
                ["Raleway", "Lato"],
                10.0,
            ),
            Theme::preset(
                "Forest Green",
                ["#22c55e", "#84cc16", "#f0fdf4", "#14532d", "#10b981"],
                ["Roboto", "Roboto"],
                6.0,
            ),
            Theme::preset(
                "Sunset Orange",
                ["#f97316", "#fb923c", "#fff7ed", "#7c2d12", "#ea580c"],
                ["Playfair Display", "Source Sans Pro"],
                14.0,
            ),
            Theme::preset(
                "Royal Purple",
                ["#9333ea", "#a855f7", "#faf5ff", "#581c87", "#c026d3"],
                ["Merriweather", "PT Sans"],
                12.0,
            ),
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn named(name: &str) -> Option<Theme> {
        Self::presets()
            .into_iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_unique_names() {
        let presets = Theme::presets();
        assert_eq!(presets.len(), 8);

        let mut names: Vec<_> = presets.iter().map(|t| t.name.clone()).collect();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_named_lookup_is_case_insensitive() {
        let theme = Theme::named("ocean blue").unwrap();
        assert_eq!(theme.fonts.body, "Lato");
        assert_eq!(theme.border_radius, 10.0);
    }
}
