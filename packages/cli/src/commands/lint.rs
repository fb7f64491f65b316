use crate::commands::find_projects;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use weave_editor::Editor;
use weave_linter::{lint_collection, Diagnostic, DiagnosticLevel, LintOptions};

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Project file or directory to lint (defaults to the configured srcDir)
    pub input: Option<PathBuf>,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct LintSummary {
    pub files_checked: usize,
    pub diagnostics: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Lint every project; the summary's `errors` decides the exit status
pub fn lint(args: LintArgs, cwd: &Path) -> Result<LintSummary> {
    let config = Config::load(cwd)?;
    let input = match &args.input {
        Some(path) => cwd.join(path),
        None => config.get_src_dir(cwd),
    };

    if !input.exists() {
        return Err(anyhow::anyhow!("Input path does not exist: {}", input.display()));
    }

    let text = args.format != "json";
    if text {
        println!("🔍 {} Weave Linter", "Starting".green().bold());
        println!("   Input: {}", input.display());
        println!();
    }

    let mut summary = LintSummary::default();
    for file in find_projects(&input) {
        let editor = match Editor::load(&file, config.editor.clone()) {
            Ok(editor) => editor,
            Err(err) => {
                eprintln!("{} Failed to load {}: {}", "✗".red(), file.display(), err);
                summary.files_checked += 1;
                summary.errors += 1;
                continue;
            }
        };

        let diagnostics = lint_collection(editor.elements(), LintOptions::default());
        report(&file, &diagnostics, &args)?;

        summary.files_checked += 1;
        summary.diagnostics += diagnostics.len();
        summary.errors += count(&diagnostics, DiagnosticLevel::Error);
        summary.warnings += count(&diagnostics, DiagnosticLevel::Warning);
    }

    if text {
        print_summary(&summary);
    }

    Ok(summary)
}

fn count(diagnostics: &[Diagnostic], level: DiagnosticLevel) -> usize {
    diagnostics.iter().filter(|d| d.level == level).count()
}

fn report(file_path: &Path, diagnostics: &[Diagnostic], args: &LintArgs) -> Result<()> {
    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(diagnostics)?);
        return Ok(());
    }

    if diagnostics.is_empty() {
        if args.verbose {
            println!("{} {}", "✓".green(), file_path.display());
        }
        return Ok(());
    }

    println!("{}", file_path.display());

    for diagnostic in diagnostics {
        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        if !args.verbose && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        println!(
            "  {} [{}] {} ({})",
            level_str, diagnostic.rule, diagnostic.message, diagnostic.element_id
        );

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }

    println!();
    Ok(())
}

fn print_summary(summary: &LintSummary) {
    println!();
    println!(
        "✨ {} Linting complete!",
        if summary.errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", summary.files_checked);
    println!("   Total diagnostics: {}", summary.diagnostics);

    if summary.errors > 0 {
        println!("   {} {}", "Errors:".red(), summary.errors);
    }
    if summary.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), summary.warnings);
    }

    if summary.errors == 0 && summary.warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_editor::ElementPatch;
    use weave_model::ElementKind;

    fn args() -> LintArgs {
        LintArgs {
            input: None,
            verbose: false,
            format: "text".to_string(),
        }
    }

    #[test]
    fn test_lint_counts_errors_and_warnings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();

        let mut editor = Editor::new("form");
        editor.create_element(ElementKind::Image, 0.0, 0.0).unwrap();
        editor.create_element(ElementKind::Input, 0.0, 100.0).unwrap();
        editor.save(dir.path().join("src/form.weave.json")).unwrap();

        let summary = lint(args(), dir.path()).unwrap();
        assert_eq!(
            summary,
            LintSummary {
                files_checked: 1,
                diagnostics: 2,
                errors: 1,
                warnings: 1
            }
        );
    }

    #[test]
    fn test_clean_project_has_no_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();

        let mut editor = Editor::new("clean");
        let image = editor.create_element(ElementKind::Image, 0.0, 0.0).unwrap();
        editor
            .update_element(&image, &ElementPatch::new().prop("alt", "Logo"))
            .unwrap();
        editor.save(dir.path().join("src/clean.weave.json")).unwrap();

        assert_eq!(lint(args(), dir.path()).unwrap().errors, 0);
    }
}
