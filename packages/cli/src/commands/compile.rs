use crate::commands::find_projects;
use crate::config::{project_stem, Config};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use weave_editor::{Editor, EditorConfig, Target};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Project file or directory (defaults to the configured srcDir)
    pub path: Option<PathBuf>,

    /// Target format (html, css, react, next, vue, svelte); overrides config
    #[arg(short, long)]
    pub target: Option<Target>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let src_dir = match &args.path {
        Some(path) => cwd.join(path),
        None => config.get_src_dir(cwd),
    };

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let targets: Vec<(Target, Option<&str>)> = match args.target {
        Some(target) => vec![(target, None)],
        None => config.emit_targets(),
    };
    if targets.is_empty() {
        return Err(anyhow!("No targets to emit; pass --target or set compilerOptions"));
    }

    if !args.stdout {
        println!("{}", "🔨 Compiling Weave projects...".bright_blue().bold());
    }

    let projects = find_projects(&src_dir);
    if projects.is_empty() {
        println!("{}", "⚠️  No .weave.json files found".yellow());
        return Ok(());
    }

    let root = if src_dir.is_file() {
        src_dir.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        src_dir.clone()
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for project in &projects {
        let relative_path = project.strip_prefix(&root).unwrap_or(project);

        match compile_project(project, &config.editor, &targets, &args, &root, cwd) {
            Ok(outputs) => {
                success_count += 1;
                if !args.stdout {
                    for output in outputs {
                        println!("  {} {} → {}", "✓".green(), relative_path.display(), output);
                    }
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    if args.stdout {
        return if error_count == 0 {
            Ok(())
        } else {
            Err(anyhow!("{} projects failed to compile", error_count))
        };
    }

    println!();
    if error_count == 0 {
        println!("{} Compiled {} projects successfully", "✅".green(), success_count);
        Ok(())
    } else {
        println!(
            "{} Compiled {} projects, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
        Err(anyhow!("{} projects failed to compile", error_count))
    }
}

fn compile_project(
    file_path: &Path,
    editor_config: &EditorConfig,
    targets: &[(Target, Option<&str>)],
    args: &CompileArgs,
    root: &Path,
    cwd: &Path,
) -> Result<Vec<String>> {
    let editor = Editor::load(file_path, editor_config.clone())?;
    let stem = project_stem(file_path).ok_or_else(|| anyhow!("Not a project file"))?;

    let mut outputs = Vec::new();
    for (target, configured_out_dir) in targets {
        let output = editor.generate_code(*target)?;
        debug!(target = %target, bytes = output.len(), "Generated output");

        if args.stdout {
            println!("{}", output);
            outputs.push("stdout".to_string());
            continue;
        }

        let out_dir = args
            .out_dir
            .as_deref()
            .or(*configured_out_dir)
            .unwrap_or("dist");

        // Keep the project's folder layout under the output directory
        let relative_dir = file_path
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .unwrap_or_else(|| Path::new(""));
        let output_file = cwd
            .join(out_dir)
            .join(relative_dir)
            .join(output_name(stem, *target));

        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_file, output)?;

        outputs.push(output_file.display().to_string());
    }

    Ok(outputs)
}

/// React and Next share an extension, so Next pages get their own suffix
fn output_name(stem: &str, target: Target) -> String {
    match target {
        Target::Next => format!("{}.page.{}", stem, target.extension()),
        _ => format!("{}.{}", stem, target.extension()),
    }
}
