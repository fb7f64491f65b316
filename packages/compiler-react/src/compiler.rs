use crate::context::{CompileOptions, CompilerContext};
use thiserror::Error;
use tracing::{debug, instrument};
use weave_model::{Element, ElementCollection, ElementId, ElementKind};
use weave_style::{class_list, format_number, resolve_element_at, ScriptValue, CLASS_PROPS};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Invalid attribute name '{name}' on element {element}")]
    InvalidAttribute { element: ElementId, name: String },

    #[error("Invalid component name: {0}")]
    InvalidComponentName(String),
}

/// Compile a collection to a single React component
#[instrument(skip_all, fields(elements = collection.len()))]
pub fn compile_to_react(
    collection: &ElementCollection,
    options: CompileOptions,
) -> Result<String, CompileError> {
    if !is_component_name(&options.component_name) {
        return Err(CompileError::InvalidComponentName(options.component_name));
    }

    let ctx = CompilerContext::new(options);

    compile_imports(&ctx);

    if ctx.options.next_page {
        ctx.add_line(&format!("export default function {}() {{", page_name(&ctx)));
    } else if ctx.options.use_typescript {
        ctx.add_line(&format!(
            "const {}: React.FC = () => {{",
            ctx.options.component_name
        ));
    } else {
        ctx.add_line(&format!("const {} = () => {{", ctx.options.component_name));
    }
    ctx.indent();

    ctx.add_line("return (");
    ctx.indent();
    compile_root(collection, &ctx)?;
    ctx.dedent();
    ctx.add_line(");");

    ctx.dedent();
    if ctx.options.next_page {
        ctx.add_line("}");
    } else {
        ctx.add_line("};");
        ctx.add("\n");
        ctx.add_line(&format!("export default {};", ctx.options.component_name));
    }

    let output = ctx.get_output();
    debug!(bytes = output.len(), "Compiled React component");
    Ok(output)
}

fn page_name(ctx: &CompilerContext) -> &str {
    if ctx.options.component_name == "App" {
        "Page"
    } else {
        &ctx.options.component_name
    }
}

fn compile_imports(ctx: &CompilerContext) {
    if ctx.options.next_page {
        ctx.add_line("'use client';");
        ctx.add("\n");
    }
    ctx.add_line("import React from \"react\";");
    ctx.add("\n");
}

fn compile_root(collection: &ElementCollection, ctx: &CompilerContext) -> Result<(), CompileError> {
    let tag = if ctx.options.next_page { "main" } else { "div" };

    ctx.add_line(&format!(
        "<{} className=\"canvas-root\" style={{{{ position: \"relative\", minHeight: \"100vh\" }}}}>",
        tag
    ));
    ctx.indent();

    for element in collection {
        compile_element(element, (0.0, 0.0), ctx)?;
    }

    ctx.dedent();
    ctx.add_line(&format!("</{}>", tag));
    Ok(())
}

fn compile_element(
    element: &Element,
    origin: (f64, f64),
    ctx: &CompilerContext,
) -> Result<(), CompileError> {
    let tag = element.kind.html_tag();

    ctx.add_line(&format!("<{}", tag));
    ctx.indent();

    ctx.add_line(&format!("className=\"{}\"", class_list(element)));
    compile_style(element, origin, ctx);
    compile_attributes(element, ctx)?;

    let text = text_content(element);
    let has_body = !element.kind.is_void() && (text.is_some() || !element.children.is_empty());

    ctx.dedent();
    if !has_body {
        ctx.add_line("/>");
        return Ok(());
    }

    ctx.add_line(">");
    ctx.indent();

    if let Some(text) = text {
        ctx.add_line(&jsx_text(text));
    }
    for child in &element.children {
        compile_element(child, (element.x, element.y), ctx)?;
    }

    ctx.dedent();
    ctx.add_line(&format!("</{}>", tag));
    Ok(())
}

fn compile_style(element: &Element, origin: (f64, f64), ctx: &CompilerContext) {
    let resolved = resolve_element_at(element, origin, ctx.options.theme.as_ref());

    ctx.add_line("style={{");
    ctx.indent();
    for declaration in &resolved {
        ctx.add_line(&format!(
            "{}: {},",
            declaration.script_name(),
            declaration.value.script.to_literal()
        ));
    }
    ctx.dedent();
    ctx.add_line("}}");
}

/// Prop that receives `content` instead of the node body
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

fn compile_attributes(element: &Element, ctx: &CompilerContext) -> Result<(), CompileError> {
    let mut attributes: Vec<(String, serde_json::Value)> = Vec::new();

    if let (Some(name), Some(content)) = (content_attribute(element.kind), &element.content) {
        if !element.props.contains_key(name) {
            attributes.push((name.to_string(), serde_json::Value::String(content.clone())));
        }
    }
    // Class props are already merged into `className`
    for (name, value) in &element.props {
        if !CLASS_PROPS.contains(&name.as_str()) {
            attributes.push((name.clone(), value.clone()));
        }
    }
    attributes.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, value) in attributes {
        if !is_attribute_name(&name) {
            return Err(CompileError::InvalidAttribute {
                element: element.id.clone(),
                name,
            });
        }

        let prop = react_prop_name(&name);
        match value {
            serde_json::Value::Null | serde_json::Value::Bool(false) => {}
            serde_json::Value::Bool(true) => ctx.add_line(&prop),
            serde_json::Value::String(s) if !s.contains('"') && !s.contains('\\') => {
                ctx.add_line(&format!("{}=\"{}\"", prop, s));
            }
            serde_json::Value::Number(n) => {
                let text = n.as_f64().map(format_number).unwrap_or_else(|| n.to_string());
                ctx.add_line(&format!("{}={{{}}}", prop, text));
            }
            other => ctx.add_line(&format!("{}={{{}}}", prop, other)),
        }
    }

    Ok(())
}

/// Convert HTML attribute names to React props
fn react_prop_name(name: &str) -> String {
    match name {
        "for" => "htmlFor".to_string(),
        "tabindex" => "tabIndex".to_string(),
        "readonly" => "readOnly".to_string(),
        "maxlength" => "maxLength".to_string(),
        "autocomplete" => "autoComplete".to_string(),
        _ => name.to_string(),
    }
}

/// Text child: bare when safe, otherwise a string expression
fn jsx_text(text: &str) -> String {
    if text.contains(|c: char| matches!(c, '{' | '}' | '<' | '>' | '\n')) || text.trim() != text {
        format!("{{{}}}", ScriptValue::Text(text.to_string()).to_literal())
    } else {
        text.to_string()
    }
}

fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':'))
}

fn is_component_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
