//! @acp:module "Skill Validation"
//! @acp:summary "Check a skill folder's header against the allowed schema"
//! @acp:domain skill
//! @acp:layer validation
//!
//! # Validation Order
//!
//! 1. **Locate** `SKILL.md` inside the folder
//! 2. **Extract** the frontmatter block and parse it as a YAML mapping
//! 3. **Schema**: reject keys outside the allowed set
//! 4. **Required**: `name` and `description` must be present
//! 5. **Rules**: type, pattern, boundary and length checks per field
//!
//! The first failure wins; later checks are not run.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::header::{key_label, parse_header, type_name};
use super::{
    Field, ValidationError, ViolationKind, ALLOWED_KEYS, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    SKILL_FILE,
};

/// Hyphen-case skill names
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Message reported for a header that passes every check
pub const VALID_MESSAGE: &str = "Skill is valid!";

/// Header fields that passed validation, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillHeader {
    pub name: String,
    pub description: String,
}

/// Outcome of validating a skill folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Whether the header passed every check
    pub valid: bool,
    /// Human-readable reason or confirmation
    pub message: String,
    /// Failure classification, `None` when valid
    pub kind: Option<ViolationKind>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_string(),
            kind: None,
        }
    }
}

impl From<ValidationError> for Validation {
    fn from(err: ValidationError) -> Self {
        Self {
            valid: false,
            kind: Some(err.kind()),
            message: err.to_string(),
        }
    }
}

/// Validate the skill folder at `folder`, never failing
pub fn validate_skill(folder: impl AsRef<Path>) -> Validation {
    match check_skill(folder) {
        Ok(_) => Validation::ok(),
        Err(err) => err.into(),
    }
}

/// Validate the skill folder at `folder`, returning the accepted header
pub fn check_skill(folder: impl AsRef<Path>) -> Result<SkillHeader, ValidationError> {
    let skill_file = folder.as_ref().join(SKILL_FILE);
    if !skill_file.is_file() {
        return Err(ValidationError::NotFound);
    }

    let content = fs::read_to_string(&skill_file).map_err(|e| {
        debug!("Failed to read {:?}: {}", skill_file, e);
        ValidationError::Unreadable(e.to_string())
    })?;

    let header = validate_header(&content)?;
    debug!("Validated skill header for '{}'", header.name);
    Ok(header)
}

/// Validate the text of a `SKILL.md` file
pub fn validate_header(content: &str) -> Result<SkillHeader, ValidationError> {
    let mapping = parse_header(content)?;

    check_keys(&mapping)?;

    let name_value = mapping
        .get(Field::Name.key())
        .ok_or(ValidationError::MissingField(Field::Name))?;
    let description_value = mapping
        .get(Field::Description.key())
        .ok_or(ValidationError::MissingField(Field::Description))?;

    let name = string_field(Field::Name, name_value)?;
    check_name(&name)?;

    let description = string_field(Field::Description, description_value)?;
    check_description(&description)?;

    Ok(SkillHeader { name, description })
}

fn check_keys(mapping: &Mapping) -> Result<(), ValidationError> {
    let mut unexpected: Vec<String> = mapping
        .keys()
        .filter(|key| !key.as_str().is_some_and(|k| ALLOWED_KEYS.contains(&k)))
        .map(key_label)
        .collect();

    if unexpected.is_empty() {
        return Ok(());
    }

    unexpected.sort();
    unexpected.dedup();
    Err(ValidationError::UnexpectedKeys { unexpected })
}

fn string_field(field: Field, value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or(ValidationError::WrongType {
            field,
            actual: type_name(value),
        })
}

/// Apply the name rules; an empty name is left unchecked
pub fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Ok(());
    }

    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::NamePattern(name.to_string()));
    }

    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return Err(ValidationError::NameBoundary(name.to_string()));
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: Field::Name,
            length,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Apply the description rules; an empty description is left unchecked
pub fn check_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Ok(());
    }

    if description.contains(|c: char| c == '<' || c == '>') {
        return Err(ValidationError::AngleBrackets);
    }

    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooLong {
            field: Field::Description,
            length,
            max: MAX_DESCRIPTION_LENGTH,
        });
    }

    Ok(())
}
