//! @acp:module "Skill Header"
//! @acp:summary "Locate and parse the YAML frontmatter block of SKILL.md"
//! @acp:domain skill
//! @acp:layer parsing
//!
//! The header is found by scanning lines rather than by pattern matching:
//! the first line must be exactly `---`, and the block ends at the next
//! line that is `---`. Everything in between goes to `serde_yaml`.

use serde_yaml::{Mapping, Value};

use super::ValidationError;

/// Delimiter line opening and closing the header block
pub const DELIMITER: &str = "---";

/// Return the raw text between the two delimiter lines
pub fn extract_block(content: &str) -> Result<&str, ValidationError> {
    if !content.starts_with(DELIMITER) {
        return Err(ValidationError::NoFrontmatter);
    }

    let mut lines = content.split_inclusive('\n');
    let first = lines.next().unwrap_or_default();
    if strip_eol(first) != DELIMITER {
        return Err(ValidationError::InvalidFrontmatter);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if strip_eol(line).trim_end() == DELIMITER {
            let block = &content[start..offset];
            let block = block.strip_suffix('\n').unwrap_or(block);
            return Ok(block.strip_suffix('\r').unwrap_or(block));
        }
        offset += line.len();
    }

    Err(ValidationError::InvalidFrontmatter)
}

/// Parse the header block into a YAML mapping
pub fn parse_block(block: &str) -> Result<Mapping, ValidationError> {
    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| ValidationError::InvalidYaml(e.to_string()))?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(ValidationError::NotAMapping),
    }
}

/// Extract and parse in one step
pub fn parse_header(content: &str) -> Result<Mapping, ValidationError> {
    parse_block(extract_block(content)?)
}

/// YAML type name used in type-mismatch messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

/// Render a mapping key for diagnostics
pub fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

fn strip_eol(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
