mod error;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use cool_semantic::SemanticAnalyzer;
use cool_syntax::Program;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::Result;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the syntax tree file produced by the parser front end.
    tree: PathBuf,

    /// Directory to look up cool-check.toml in.
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Text,
    Json,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let content = std::fs::read_to_string(&cli.tree)?;
    let program: Program = serde_json::from_str(&content)?;
    tracing::info!(classes = program.classes.len(), "syntax tree loaded");

    let config = cool_config::load_config(Some(&cli.config_dir));
    let mut analyzer = SemanticAnalyzer::new();
    let diagnostics = analyzer.analyze(&program);
    tracing::info!(
        errors = diagnostics.errors().len(),
        warnings = diagnostics.warnings().len(),
        "analysis finished"
    );

    match cli.format {
        Format::Text => print!("{}", report::render_text(&diagnostics, &config)),
        Format::Json => println!("{}", report::render_json(&diagnostics)?),
    }

    Ok(ExitCode::from(report::exit_code(&diagnostics, &config)))
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("cool-check: {err}");
            ExitCode::from(2)
        }
    }
}
