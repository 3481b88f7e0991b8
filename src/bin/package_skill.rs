#![forbid(unsafe_code)]
//! Skill packager: validate a skill folder and write `<folder>.skill`

use std::path::PathBuf;

use clap::Parser;
use console::style;

use ideation::commands::{execute_package, PackageOptions};
use ideation::config::DEFAULT_CONFIG_FILE;
use ideation::logging::init_logging;
use ideation::Config;

#[derive(Parser)]
#[command(name = "package_skill")]
#[command(about = "Creates a distributable .skill file from a skill folder")]
#[command(version)]
struct Cli {
    /// Path to the skill folder
    skill_folder: Option<PathBuf>,

    /// Output directory (default: current directory)
    output_directory: Option<PathBuf>,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let Some(skill_path) = cli.skill_folder else {
        eprintln!("Usage: package_skill <path/to/skill-folder> [output-directory]");
        eprintln!("\nExample:");
        eprintln!("  package_skill ./socratic-ideation-tree");
        eprintln!("  package_skill ./socratic-ideation-tree ./dist");
        std::process::exit(1);
    };

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Failed to load {}: {}", style("✗").red(), cli.config.display(), e);
            std::process::exit(1);
        }
    };

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    if let Err(e) = init_logging(level) {
        eprintln!("{} {}", style("!").yellow(), e);
    }

    let options = PackageOptions {
        skill_path,
        output_dir: cli.output_directory,
    };

    if let Err(e) = execute_package(options, &config) {
        eprintln!("{} {}", style("✗").red(), e);
        std::process::exit(1);
    }
}
