//! @acp:module "Errors"
//! @acp:summary "Crate-wide error type"
//! @acp:domain cli
//! @acp:layer core

use std::path::PathBuf;

use thiserror::Error;

use crate::skill::ValidationError;

/// Errors raised while scaffolding projects or packaging skills
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Skill folder not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("SKILL.md not found in {}", .0.display())]
    MissingSkillFile(PathBuf),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Other(String),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
