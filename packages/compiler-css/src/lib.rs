use tracing::{debug, instrument};
use weave_model::{Element, ElementCollection, Theme};
use weave_style::{class_name, resolve_element_at};

/// Lines every standalone stylesheet starts with
pub const RESET_CSS: &[&str] = &[
    "* { margin: 0; padding: 0; box-sizing: border-box; }",
    "body { font-family: system-ui, -apple-system, sans-serif; }",
];

/// Class of the element that hosts the canvas in generated markup
pub const ROOT_CLASS: &str = "canvas-root";

/// Options for CSS compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Prepend the global reset lines (off for component-scoped styles)
    pub include_reset: bool,
    /// Theme supplying fallback colors, fonts and radius
    pub theme: Option<Theme>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            include_reset: true,
            theme: None,
        }
    }
}

/// Compile a collection to a stylesheet: one rule per element, parents
/// before their children
#[instrument(skip_all, fields(elements = collection.len()))]
pub fn compile_to_css(collection: &ElementCollection, options: &CompileOptions) -> String {
    let mut css = String::new();

    if options.include_reset {
        for line in RESET_CSS {
            css.push_str(line);
            css.push('\n');
        }
    }
    css.push_str(&format!(
        ".{} {{ position: relative; min-height: 100vh; }}\n\n",
        ROOT_CLASS
    ));

    for element in collection {
        compile_rule(element, (0.0, 0.0), options, &mut css);
    }

    debug!(bytes = css.len(), "Compiled stylesheet");
    css
}

fn compile_rule(element: &Element, origin: (f64, f64), options: &CompileOptions, css: &mut String) {
    let resolved = resolve_element_at(element, origin, options.theme.as_ref());

    css.push('.');
    css.push_str(&class_name(&element.id));
    css.push_str(" {\n");

    for declaration in &resolved {
        css.push_str("  ");
        css.push_str(&declaration.to_css());
        css.push('\n');
    }

    css.push_str("}\n\n");

    for child in &element.children {
        compile_rule(child, (element.x, element.y), options, css);
    }
}
