//! @acp:module "Init Command"
//! @acp:summary "Initialize a new ideation tree project"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `init_project <name> [--path <dir>]`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::scaffold::Scaffolder;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project name, used verbatim as the directory name
    pub name: String,
    /// Base directory the project is created in
    pub path: PathBuf,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            path: PathBuf::from("."),
        }
    }
}

/// Execute the init command, returning the project root
pub fn execute_init(options: InitOptions) -> Result<PathBuf> {
    let base = std::path::absolute(&options.path)
        .with_context(|| format!("Failed to resolve {}", options.path.display()))?;

    let scaffolder = Scaffolder::new()?;
    let project = scaffolder
        .init_project(&options.name, &base)
        .with_context(|| format!("Failed to initialize project '{}'", options.name))?;

    println!(
        "{} Initialized project at: {}",
        style("✓").green(),
        project.display()
    );

    println!("\n{}", style("Structure created:").bold());
    print!("{}", scaffolder.structure(&options.name)?);

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Edit {} to define your project vision and constraints",
        style("INTENT.md").cyan()
    );
    println!(
        "  2. Rename or delete {} and create your own ideas",
        style("example-idea/").cyan()
    );
    println!(
        "  3. Use {} to explore branches automatically",
        style("/auto-ideate").cyan()
    );

    Ok(project)
}
