mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compile, init, lint, CompileArgs, InitArgs, LintArgs};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Weave CLI - compile and lint canvas-built web projects
#[derive(Parser, Debug)]
#[command(name = "weave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Weave project
    Init(InitArgs),

    /// Compile .weave.json projects to a target format
    Compile(CompileArgs),

    /// Check projects for accessibility and style problems
    Lint(LintArgs),
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd)?,
        Command::Compile(args) => compile(args, &cwd)?,
        Command::Lint(args) => {
            if lint(args, &cwd)?.errors > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!();
            eprintln!("{} {}", "Error:".red().bold(), err);
            eprintln!();
            ExitCode::FAILURE
        }
    }
}
