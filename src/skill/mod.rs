//! @acp:module "Skill"
//! @acp:summary "SKILL.md header extraction and validation"
//! @acp:domain skill
//! @acp:layer core
//!
//! A skill is a folder whose `SKILL.md` starts with a YAML frontmatter block.
//! Validation is a pure function of that file's content.

pub mod header;
pub mod validate;

use thiserror::Error;

pub use validate::{
    check_skill, validate_header, validate_skill, SkillHeader, Validation, VALID_MESSAGE,
};

/// File inside a skill folder that carries the header
pub const SKILL_FILE: &str = "SKILL.md";

/// Keys permitted in the header, sorted
pub const ALLOWED_KEYS: [&str; 5] = ["allowed-tools", "description", "license", "metadata", "name"];

/// Maximum skill name length
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum description length
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Which header field a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    /// Key as written in the header
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
        }
    }
}

/// Classification of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    NotFound,
    FormatError,
    ParseError,
    SchemaError,
    MissingField,
    TypeError,
    PatternViolation,
    BoundaryViolation,
    LengthViolation,
    CharsetViolation,
}

/// A single reason a skill header was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("SKILL.md not found")]
    NotFound,

    #[error("Failed to read SKILL.md: {0}")]
    Unreadable(String),

    #[error("No YAML frontmatter found")]
    NoFrontmatter,

    #[error("Invalid frontmatter format")]
    InvalidFrontmatter,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),

    #[error("Frontmatter must be a YAML dictionary")]
    NotAMapping,

    #[error(
        "Unexpected key(s) in SKILL.md frontmatter: {}. Allowed properties are: {}",
        .unexpected.join(", "),
        ALLOWED_KEYS.join(", ")
    )]
    UnexpectedKeys { unexpected: Vec<String> },

    #[error("Missing '{}' in frontmatter", .0.key())]
    MissingField(Field),

    #[error("{} must be a string, got {actual}", .field.label())]
    WrongType { field: Field, actual: &'static str },

    #[error("Name '{0}' should be hyphen-case (lowercase letters, digits, and hyphens only)")]
    NamePattern(String),

    #[error("Name '{0}' cannot start/end with hyphen or contain consecutive hyphens")]
    NameBoundary(String),

    #[error(
        "{} is too long ({length} characters). Maximum is {max} characters.",
        .field.label()
    )]
    TooLong {
        field: Field,
        length: usize,
        max: usize,
    },

    #[error("Description cannot contain angle brackets (< or >)")]
    AngleBrackets,
}

impl ValidationError {
    /// Failure classification
    pub fn kind(&self) -> ViolationKind {
        match self {
            ValidationError::NotFound => ViolationKind::NotFound,
            ValidationError::Unreadable(_)
            | ValidationError::NoFrontmatter
            | ValidationError::InvalidFrontmatter => {
                ViolationKind::FormatError
            }
            ValidationError::InvalidYaml(_) | ValidationError::NotAMapping => {
                ViolationKind::ParseError
            }
            ValidationError::UnexpectedKeys { .. } => ViolationKind::SchemaError,
            ValidationError::MissingField(_) => ViolationKind::MissingField,
            ValidationError::WrongType { .. } => ViolationKind::TypeError,
            ValidationError::NamePattern(_) => ViolationKind::PatternViolation,
            ValidationError::NameBoundary(_) => ViolationKind::BoundaryViolation,
            ValidationError::TooLong { .. } => ViolationKind::LengthViolation,
            ValidationError::AngleBrackets => ViolationKind::CharsetViolation,
        }
    }
}
