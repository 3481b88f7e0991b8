//! @acp:module "Package Command"
//! @acp:summary "Validate and archive a skill folder"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `package_skill <skill-folder> [output-directory]`.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use console::style;

use crate::config::Config;
use crate::error::Error;
use crate::package::{PackageReport, Packager};
use crate::skill::VALID_MESSAGE;

/// Options for the package command
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Skill folder to package
    pub skill_path: PathBuf,
    /// Where the archive is written (working directory when unset)
    pub output_dir: Option<PathBuf>,
}

/// Execute the package command
///
/// Any failure means no usable archive was produced.
pub fn execute_package(options: PackageOptions, config: &Config) -> Result<PackageReport> {
    println!(
        "{} Packaging skill: {}",
        style("→").cyan(),
        options.skill_path.display()
    );
    if let Some(ref output_dir) = options.output_dir {
        println!("  Output directory: {}", output_dir.display());
    }
    println!();

    let packager = Packager::new(config.package.clone())?;

    println!("{} Validating skill...", style("→").dim());
    let extension = &config.package.extension;
    let plan = packager
        .prepare(&options.skill_path, options.output_dir.as_deref())
        .map_err(|e| describe_failure(e, extension))?;
    println!("{} {}\n", style("✓").green(), VALID_MESSAGE);

    let report = packager
        .write(plan, |entry| println!("  Added: {}", entry))
        .map_err(|e| describe_failure(e, extension))?;

    println!(
        "\n{} Successfully packaged skill to: {}",
        style("✓").green(),
        report.archive_path.display()
    );

    Ok(report)
}

fn describe_failure(err: Error, extension: &str) -> anyhow::Error {
    match err {
        Error::Validation(_) => anyhow!(
            "{}\n  Please fix the validation errors before packaging.",
            err
        ),
        Error::NotFound(_) | Error::NotADirectory(_) | Error::MissingSkillFile(_) => anyhow!(err),
        other => anyhow!("Error creating .{} file: {}", extension, other),
    }
}
