use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, instrument};
use weave_compiler_css::{compile_to_css, CompileOptions as CssOptions, ROOT_CLASS};
use weave_model::{Element, ElementCollection, ElementId, ElementKind, Theme};
use weave_style::{class_list, format_number, resolve_element_at, CLASS_PROPS};

/// Errors that can occur during HTML compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Invalid attribute name '{name}' on element {element}")]
    InvalidAttribute { element: ElementId, name: String },
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Emit `style="..."` on every node instead of classes plus a stylesheet
    pub inline_styles: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Document title
    pub title: String,
    /// Theme supplying fallback colors, fonts and radius
    pub theme: Option<Theme>,
    /// Escape `{` and `}` in text (template languages that interpolate them)
    pub escape_braces: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            inline_styles: false,
            pretty: true,
            indent: "  ".to_string(),
            title: "Weave Export".to_string(),
            theme: None,
            escape_braces: false,
        }
    }
}

struct Context<'a> {
    options: &'a CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a collection to a full HTML document
#[instrument(skip_all, fields(elements = collection.len()))]
pub fn compile_to_html(
    collection: &ElementCollection,
    options: &CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");

    compile_head(collection, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    compile_root(collection, &mut ctx)?;
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.add_line("</html>");

    let html = ctx.get_output();
    debug!(bytes = html.len(), "Compiled HTML document");
    Ok(html)
}

/// Compile only the element markup, wrapped in the canvas root, starting at
/// `depth` levels of indentation
pub fn compile_markup(
    collection: &ElementCollection,
    depth: usize,
    options: &CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);
    ctx.depth = depth;
    compile_root(collection, &mut ctx)?;
    Ok(ctx.get_output())
}

fn compile_head(collection: &ElementCollection, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);

    ctx.add_line("<style>");
    ctx.indent();
    let css_options = CssOptions {
        include_reset: true,
        theme: ctx.options.theme.clone(),
    };
    let stylesheet = if ctx.options.inline_styles {
        weave_compiler_css::RESET_CSS.join("\n")
    } else {
        compile_to_css(collection, &css_options)
    };
    for line in stylesheet.lines().filter(|line| !line.is_empty()) {
        ctx.add_line(line);
    }
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_root(collection: &ElementCollection, ctx: &mut Context) -> Result<(), CompileError> {
    if ctx.options.inline_styles {
        ctx.add_line(&format!(
            "<div class=\"{}\" style=\"position: relative; min-height: 100vh;\">",
            ROOT_CLASS
        ));
    } else {
        ctx.add_line(&format!("<div class=\"{}\">", ROOT_CLASS));
    }
    ctx.indent();

    for element in collection {
        compile_element(element, (0.0, 0.0), ctx)?;
    }

    ctx.dedent();
    ctx.add_line("</div>");
    Ok(())
}

fn compile_element(element: &Element, origin: (f64, f64), ctx: &mut Context) -> Result<(), CompileError> {
    let tag = element.kind.html_tag();
    let attributes = compile_attributes(element, origin, ctx.options)?;
    let open = format!("<{}{}", tag, attributes);

    // Void tags: content has already become an attribute
    if element.kind.is_void() {
        ctx.add_line(&format!("{} />", open));
        return Ok(());
    }

    let text = text_content(element)
        .map(|content| escape_text(content, ctx.options.escape_braces));

    if element.children.is_empty() {
        ctx.add_line(&format!(
            "{}>{}</{}>",
            open,
            text.unwrap_or_default(),
            tag
        ));
        return Ok(());
    }

    ctx.add_line(&format!("{}>", open));
    ctx.indent();

    if let Some(text) = text {
        ctx.add_line(&text);
    }
    for child in &element.children {
        compile_element(child, (element.x, element.y), ctx)?;
    }

    ctx.dedent();
    ctx.add_line(&format!("</{}>", tag));
    Ok(())
}

/// Attribute that receives `content` instead of the node body
fn content_attribute(kind: ElementKind) -> Option<&'static str> {
    use ElementKind::*;

    match kind {
        Image | Video | Audio | Iframe | Embed => Some("src"),
        Input | Search | DatePicker => Some("placeholder"),
        _ => None,
    }
}

fn text_content(element: &Element) -> Option<&str> {
    if content_attribute(element.kind).is_some() {
        return None;
    }
    element.content.as_deref()
}

fn compile_attributes(
    element: &Element,
    origin: (f64, f64),
    options: &CompileOptions,
) -> Result<String, CompileError> {
    let mut out = format!(" class=\"{}\"", class_list(element));

    if options.inline_styles {
        let resolved = resolve_element_at(element, origin, options.theme.as_ref());
        out.push_str(&format!(" style=\"{}\"", escape_html(&resolved.to_inline_css())));
    }

    // Props win over the content-derived attribute
    let mut attributes: BTreeMap<&str, Option<String>> = BTreeMap::new();
    if let (Some(name), Some(content)) = (content_attribute(element.kind), &element.content) {
        attributes.insert(name, Some(content.clone()));
    }

    for (name, value) in &element.props {
        if CLASS_PROPS.contains(&name.as_str()) {
            continue;
        }
        if !is_valid_attribute_name(name) {
            return Err(CompileError::InvalidAttribute {
                element: element.id.clone(),
                name: name.clone(),
            });
        }

        match value {
            serde_json::Value::Null | serde_json::Value::Bool(false) => {
                attributes.remove(name.as_str());
            }
            serde_json::Value::Bool(true) => {
                attributes.insert(name, None);
            }
            serde_json::Value::String(s) => {
                attributes.insert(name, Some(s.clone()));
            }
            serde_json::Value::Number(n) => {
                let text = n.as_f64().map(format_number).unwrap_or_else(|| n.to_string());
                attributes.insert(name, Some(text));
            }
            other => {
                attributes.insert(name, Some(other.to_string()));
            }
        }
    }

    for (name, value) in attributes {
        match value {
            Some(value) => out.push_str(&format!(" {}=\"{}\"", name, escape_html(&value))),
            None => out.push_str(&format!(" {}", name)),
        }
    }

    Ok(out)
}

fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' || c == '@' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-'))
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn escape_text(text: &str, escape_braces: bool) -> String {
    let escaped = escape_html(text);
    if escape_braces {
        escaped.replace('{', "&#123;").replace('}', "&#125;")
    } else {
        escaped
    }
}
