#![forbid(unsafe_code)]
//! Ideation tree project scaffolder

use std::path::PathBuf;

use clap::Parser;
use console::style;

use ideation::commands::{execute_init, InitOptions};
use ideation::config::DEFAULT_CONFIG_FILE;
use ideation::logging::init_logging;
use ideation::Config;

#[derive(Parser)]
#[command(name = "init_project")]
#[command(about = "Initialize a Socratic Ideation Tree project")]
#[command(version)]
struct Cli {
    /// Name of the project
    project_name: String,

    /// Base directory for project
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Only the log level is read from config here, so a broken file is not fatal
    let config = Config::load_or_default(&cli.config).unwrap_or_else(|e| {
        eprintln!(
            "{} Ignoring {}: {}",
            style("!").yellow(),
            cli.config.display(),
            e
        );
        Config::default()
    });
    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    init_logging(level)?;

    let options = InitOptions {
        name: cli.project_name,
        path: cli.path,
    };
    execute_init(options)?;

    Ok(())
}
