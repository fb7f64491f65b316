//! Svelte component output
//!
//! Markup comes from the HTML compiler with `{`/`}` escaped (Svelte treats
//! them as expressions); the stylesheet is component-scoped, so the global
//! reset is left out.

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
pub fn compile_to_svelte(
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

    out.push_str("<script>\n");
    out.push_str("  // Component logic\n");
    out.push_str("</script>\n\n");

    out.push_str(&compile_markup(collection, 0, &html_options)?);
    out.push('\n');

    out.push_str("<style>\n");
    out.push_str(compile_to_css(collection, &css_options).trim_end());
    out.push_str("\n</style>\n");

    debug!(bytes = out.len(), "Compiled Svelte component");
    Ok(out)
}
