use crate::{compile_markup, compile_to_html, CompileError, CompileOptions};
use weave_model::{Element, ElementCollection, ElementKind, StyleKey, Styles};

fn collection(elements: Vec<Element>) -> ElementCollection {
    ElementCollection::from_vec(elements)
}

#[test]
fn test_compile_simple_button() {
    let button = Element::new("b1".into(), ElementKind::Button, 0.0, 0.0);
    let html = compile_to_html(&collection(vec![button]), &CompileOptions::default())
        .expect("Failed to compile");

    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<button class=\"el-b1\">Click me</button>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("* { margin: 0; padding: 0; box-sizing: border-box; }"));
    assert!(html.contains(".el-b1 {"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_tag_comes_from_kind() {
    let html = compile_to_html(
        &collection(vec![
            Element::new("h".into(), ElementKind::Heading, 0.0, 0.0),
            Element::new("s".into(), ElementKind::Sidebar, 0.0, 0.0),
            Element::new("g".into(), ElementKind::Gallery, 0.0, 0.0),
        ]),
        &CompileOptions::default(),
    )
    .unwrap();

    assert!(html.contains("<h1 class=\"el-h\">Heading</h1>"));
    assert!(html.contains("<aside class=\"el-s\"></aside>"));
    assert!(html.contains("<div class=\"el-g\"></div>"));
}

#[test]
fn test_image_uses_content_as_src() {
    let image = Element::new("img".into(), ElementKind::Image, 0.0, 0.0)
        .with_content("photo.jpg")
        .with_prop("alt", "A photo");

    let html = compile_to_html(&collection(vec![image]), &CompileOptions::default()).unwrap();
    assert!(html.contains("<img class=\"el-img\" alt=\"A photo\" src=\"photo.jpg\" />"));
}

#[test]
fn test_props_are_sorted_attributes() {
    let link = Element::new("l".into(), ElementKind::Link, 0.0, 0.0)
        .with_prop("target", "_blank")
        .with_prop("href", "https://example.com")
        .with_prop("aria-label", "Example");

    let html = compile_to_html(&collection(vec![link]), &CompileOptions::default()).unwrap();
    assert!(html.contains(
        "<a class=\"el-l\" aria-label=\"Example\" href=\"https://example.com\" target=\"_blank\">Link</a>"
    ));
}

#[test]
fn test_class_prop_merges_into_generated_class() {
    let link = Element::new("l".into(), ElementKind::Link, 0.0, 0.0)
        .with_prop("class", "nav-link active")
        .with_prop("href", "/");

    let html = compile_to_html(&collection(vec![link]), &CompileOptions::default()).unwrap();
    assert!(html.contains("<a class=\"el-l nav-link active\" href=\"/\">Link</a>"));
    assert!(!html.contains(" class=\"nav-link"));
}

#[test]
fn test_children_nest_one_level_deeper() {
    let card = Element::new("card".into(), ElementKind::Card, 0.0, 0.0)
        .with_child(Element::new("t".into(), ElementKind::Text, 10.0, 10.0).with_content("Title"));

    let markup = compile_markup(&collection(vec![card]), 0, &CompileOptions::default()).unwrap();
    assert_eq!(
        markup,
        "<div class=\"canvas-root\">\n  <div class=\"el-card\">\n    <p class=\"el-t\">Title</p>\n  </div>\n</div>\n"
    );
}

#[test]
fn test_escape_html_entities() {
    let text = Element::new("t".into(), ElementKind::Text, 0.0, 0.0)
        .with_content("Hello <world> & friends");

    let html = compile_to_html(&collection(vec![text]), &CompileOptions::default()).unwrap();
    assert!(html.contains("Hello &lt;world&gt; &amp; friends"));
}

#[test]
fn test_escape_braces_for_template_languages() {
    let text = Element::new("t".into(), ElementKind::Text, 0.0, 0.0).with_content("{{ name }}");
    let options = CompileOptions {
        escape_braces: true,
        ..Default::default()
    };

    let markup = compile_markup(&collection(vec![text]), 0, &options).unwrap();
    assert!(markup.contains("&#123;&#123; name &#125;&#125;"));
}

#[test]
fn test_inline_styles() {
    let button = Element::new("b".into(), ElementKind::Button, 10.0, 20.0)
        .with_styles(Styles::new().with(StyleKey::Opacity, 0.5));
    let options = CompileOptions {
        inline_styles: true,
        ..Default::default()
    };

    let html = compile_to_html(&collection(vec![button]), &options).unwrap();
    assert!(html.contains(
        "style=\"position: absolute; left: 10px; top: 20px; width: 120px; height: 44px; opacity: 0.5;\""
    ));
    assert!(!html.contains(".el-b {"));
}

#[test]
fn test_invalid_attribute_name_is_rejected() {
    let el = Element::new("x".into(), ElementKind::Container, 0.0, 0.0).with_prop("on click", "x");

    let err = compile_to_html(&collection(vec![el]), &CompileOptions::default()).unwrap_err();
    assert_eq!(
        err,
        CompileError::InvalidAttribute {
            element: "x".into(),
            name: "on click".to_string(),
        }
    );
}

#[test]
fn test_compile_without_pretty_print() {
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };
    let html = compile_to_html(
        &collection(vec![Element::new("b".into(), ElementKind::Button, 0.0, 0.0)]),
        &options,
    )
    .unwrap();

    assert!(!html.contains('\n'));
}
