use weave_compiler_react::{compile_to_react, CompileOptions};
use weave_model::{Element, ElementCollection, ElementKind, StyleKey, Styles, Theme};

fn main() {
    let card = Element::new("card".into(), ElementKind::Card, 40.0, 40.0)
        .with_styles(
            Styles::new()
                .with(StyleKey::Border, "1px solid #ddd")
                .with(StyleKey::BorderRadius, 8)
                .with(StyleKey::Padding, 16),
        )
        .with_child(
            Element::new("title".into(), ElementKind::Heading, 56.0, 56.0)
                .with_content("Card Title"),
        )
        .with_child(
            Element::new("cta".into(), ElementKind::Button, 56.0, 140.0)
                .with_styles(Styles::new().with(StyleKey::Rotate, 3).with(StyleKey::Scale, 1.05))
                .with_prop("type", "button"),
        );

    let collection = ElementCollection::from_vec(vec![card]);

    println!("Compiling canvas to React...\n");

    let options = CompileOptions {
        theme: Theme::named("Modern Blue"),
        ..Default::default()
    };

    match compile_to_react(&collection, options) {
        Ok(react_code) => {
            println!("✅ Successfully compiled!\n");
            println!("Generated React code:");
            println!("{}", "=".repeat(80));
            println!("{}", react_code);
            println!("{}", "=".repeat(80));
        }
        Err(e) => {
            eprintln!("❌ Compilation error: {}", e);
            std::process::exit(1);
        }
    }
}
