#![forbid(unsafe_code)]

//! @acp:module "Ideation Tree Library"
//! @acp:summary "Project scaffolding and skill packaging for the Socratic Ideation Tree"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Ideation Tree
//!
//! Two independent tools share this library:
//!
//! - **Scaffolder**: writes an `intent → idea → task → subtask` tree of
//!   Markdown templates for a new project
//! - **Packager**: validates a skill folder's `SKILL.md` header and
//!   compresses the folder into a `.skill` archive
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ideation::{package_skill, validate_skill};
//!
//! fn main() -> ideation::Result<()> {
//!     let validation = validate_skill("./my-skill");
//!     println!("{}", validation.message);
//!
//!     if validation.valid {
//!         let archive = package_skill("./my-skill", Some(Path::new("./dist")))?;
//!         println!("Wrote {}", archive.display());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod package;
pub mod scaffold;
pub mod skill;

// Re-exports
pub use config::{Config, PackageConfig};
pub use error::{Error, Result};
pub use package::{package_skill, PackagePlan, PackageReport, Packager};
pub use scaffold::{init_project, ProjectLayout, Scaffolder};
pub use skill::{
    check_skill, validate_skill, SkillHeader, Validation, ValidationError, ViolationKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
