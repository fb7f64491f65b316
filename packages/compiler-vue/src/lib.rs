//! Vue single-file component output
//!
//! Markup comes from the HTML compiler (with brace escaping, since Vue
//! interpolates `{{ }}`), styles from the CSS compiler without the global
//! reset, which would not survive `scoped`.

use thiserror::Error;
use tracing::{debug, instrument};
use weave_compiler_css::{compile_to_css, CompileOptions as CssOptions};
use weave_compiler_html::{compile_markup, CompileOptions as HtmlOptions};
use weave_model::{ElementCollection, Theme};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Markup error: {0}")]
    Markup(#[from] weave_compiler_html::CompileError),
}

#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub theme: Option<Theme>,
}

#[instrument(skip_all, fields(elements = collection.len()))]
pub fn compile_to_vue(
    collection: &ElementCollection,
    options: &CompileOptions,
) -> Result<String, CompileError> {
    let html_options = HtmlOptions {
        theme: options.theme.clone(),
        escape_braces: true,
        ..Default::default()
    };
    let css_options = CssOptions {
        include_reset: false,
        theme: options.theme.clone(),
    };

    let mut out = String::new();

    out.push_str("<template>\n");
    out.push_str(&compile_markup(collection, 1, &html_options)?);
    out.push_str("</template>\n\n");

    out.push_str("<script setup>\n");
    out.push_str("// Component logic\n");
    out.push_str("</script>\n\n");

    out.push_str("<style scoped>\n");
    out.push_str(compile_to_css(collection, &css_options).trim_end());
    out.push_str("\n</style>\n");

    debug!(bytes = out.len(), "Compiled Vue component");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_model::{Element, ElementKind};

    #[test]
    fn test_single_file_component_layout() {
        let collection = ElementCollection::from_vec(vec![Element::new(
            "b".into(),
            ElementKind::Button,
            0.0,
            0.0,
        )]);

        let sfc = compile_to_vue(&collection, &CompileOptions::default()).unwrap();

        assert!(sfc.starts_with("<template>\n  <div class=\"canvas-root\">\n"));
        assert!(sfc.contains("    <button class=\"el-b\">Click me</button>\n"));
        assert!(sfc.contains("<script setup>"));
        assert!(sfc.contains("<style scoped>\n.canvas-root {"));
        assert!(sfc.contains(".el-b {\n  position: absolute;"));
        assert!(!sfc.contains("box-sizing"));
        assert!(sfc.ends_with("</style>\n"));
    }

    #[test]
    fn test_mustaches_in_content_are_escaped() {
        let collection = ElementCollection::from_vec(vec![Element::new(
            "t".into(),
            ElementKind::Text,
            0.0,
            0.0,
        )
        .with_content("{{ secret }}")]);

        let sfc = compile_to_vue(&collection, &CompileOptions::default()).unwrap();
        assert!(!sfc.contains("{{ secret }}"));
    }
}
