use crate::config::{CompilerOption, Config, DEFAULT_CONFIG_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;
use weave_editor::{Editor, ElementPatch, Target};
use weave_model::{ElementKind, StyleKey, Theme};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target format (html, css, react, next, vue, svelte, all)
    #[arg(short, long, default_value = "html")]
    pub target: String,

    /// Source directory
    #[arg(short, long, default_value = "src")]
    pub src_dir: String,

    /// Theme preset applied to the example project
    #[arg(long, default_value = "Modern Blue")]
    pub theme: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let emit = match args.target.as_str() {
        "all" => Target::ALL.to_vec(),
        target => vec![target.parse::<Target>()?],
    };
    let theme = Theme::named(&args.theme).ok_or_else(|| anyhow!("Unknown theme: {}", args.theme))?;

    println!("{}", "📝 Initializing Weave project...".bright_blue().bold());

    let src_dir = cwd.join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let example_file = src_dir.join("landing.weave.json");
    if !example_file.exists() {
        let project = example_project(theme)?;
        fs::write(&example_file, project.to_json()?)?;
        println!("  {} Created landing.weave.json", "✓".green());
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        compiler_options: vec![CompilerOption {
            emit,
            out_dir: Some("dist".to_string()),
        }],
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/landing.weave.json", args.src_dir);
    println!("  2. Run: weave compile");
    println!("  3. Check output in dist/");

    Ok(())
}

/// A small themed landing page: heading, blurb, image and call to action
fn example_project(theme: Theme) -> Result<Editor> {
    let mut editor = Editor::new("landing");
    editor.apply_theme(theme);

    let heading = editor.create_element(ElementKind::Heading, 40.0, 40.0)?;
    editor.update_element(
        &heading,
        &ElementPatch::new().content(Some("Welcome to Weave".to_string())),
    )?;

    let blurb = editor.create_element(ElementKind::Paragraph, 40.0, 120.0)?;
    editor.update_element(
        &blurb,
        &ElementPatch::new()
            .content(Some("Drag, style and export your page.".to_string()))
            .width(480.0),
    )?;

    let image = editor.create_element(ElementKind::Image, 40.0, 200.0)?;
    editor.update_element(&image, &ElementPatch::new().prop("alt", "Product preview"))?;

    let button = editor.create_element(ElementKind::Button, 40.0, 440.0)?;
    editor.update_element(
        &button,
        &ElementPatch::new()
            .content(Some("Get started".to_string()))
            .style(StyleKey::Cursor, "pointer"),
    )?;

    Ok(editor)
}
