//! Skill header validation tests
//!
//! Exercises `validate_skill` against real skill folders on disk.

use std::fs;
use std::path::Path;

use ideation::{validate_skill, ViolationKind};
use tempfile::TempDir;

fn write_skill(dir: &Path, content: &str) {
    fs::write(dir.join("SKILL.md"), content).unwrap();
}

fn skill_with_header(header: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    write_skill(temp.path(), &format!("---\n{}\n---\n\n# Skill\n\nBody.\n", header));
    temp
}

// =============================================================================
// Accepted headers
// =============================================================================

mod accepted_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_header_is_valid() {
        let skill = skill_with_header("name: socratic-ideation-tree\ndescription: Explore ideas.");
        let validation = validate_skill(skill.path());

        assert!(validation.valid);
        assert_eq!(validation.message, "Skill is valid!");
        assert_eq!(validation.kind, None);
    }

    #[test]
    fn test_all_allowed_keys() {
        let skill = skill_with_header(
            "name: demo-2\n\
             description: Does things\n\
             license: Apache-2.0\n\
             allowed-tools:\n  - Read\n  - Bash\n\
             metadata:\n  author: someone",
        );
        assert!(validate_skill(skill.path()).valid);
    }

    #[test]
    fn test_validation_is_repeatable() {
        let skill = skill_with_header("name: demo\ndescription: Demo");
        assert_eq!(validate_skill(skill.path()), validate_skill(skill.path()));
    }
}

// =============================================================================
// Rejected headers
// =============================================================================

mod rejected_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_skill_file() {
        let temp = TempDir::new().unwrap();
        let validation = validate_skill(temp.path());

        assert!(!validation.valid);
        assert_eq!(validation.message, "SKILL.md not found");
        assert_eq!(validation.kind, Some(ViolationKind::NotFound));
    }

    #[test]
    fn test_invalid_utf8_is_reported_as_unreadable() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("SKILL.md"),
            b"---\nname: a\ndescription: \xff\xfe\n---\n",
        )
        .unwrap();

        let validation = validate_skill(temp.path());
        assert!(!validation.valid);
        assert!(
            validation.message.starts_with("Failed to read SKILL.md: "),
            "{}",
            validation.message
        );
        assert_eq!(validation.kind, Some(ViolationKind::FormatError));
    }

    #[test]
    fn test_no_frontmatter() {
        let temp = TempDir::new().unwrap();
        write_skill(temp.path(), "# Skill without header\n");

        let validation = validate_skill(temp.path());
        assert_eq!(validation.message, "No YAML frontmatter found");
        assert_eq!(validation.kind, Some(ViolationKind::FormatError));
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let temp = TempDir::new().unwrap();
        write_skill(temp.path(), "---\nname: demo\ndescription: Demo\n");

        let validation = validate_skill(temp.path());
        assert_eq!(validation.message, "Invalid frontmatter format");
        assert_eq!(validation.kind, Some(ViolationKind::FormatError));
    }

    #[test]
    fn test_malformed_yaml() {
        let skill = skill_with_header("name: demo\ndescription: [unterminated");
        let validation = validate_skill(skill.path());

        assert!(validation.message.starts_with("Invalid YAML in frontmatter: "));
        assert_eq!(validation.kind, Some(ViolationKind::ParseError));
    }

    #[test]
    fn test_sequence_header() {
        let skill = skill_with_header("- name\n- description");
        let validation = validate_skill(skill.path());

        assert_eq!(validation.message, "Frontmatter must be a YAML dictionary");
        assert_eq!(validation.kind, Some(ViolationKind::ParseError));
    }

    #[test]
    fn test_extra_key_names_key_and_allowed_set() {
        let skill = skill_with_header("name: demo\ndescription: Demo\nfoo: bar");
        let validation = validate_skill(skill.path());

        assert!(!validation.valid);
        assert_eq!(validation.kind, Some(ViolationKind::SchemaError));
        assert_eq!(
            validation.message,
            "Unexpected key(s) in SKILL.md frontmatter: foo. \
             Allowed properties are: allowed-tools, description, license, metadata, name"
        );
    }

    #[test]
    fn test_missing_description() {
        let skill = skill_with_header("name: demo");
        let validation = validate_skill(skill.path());

        assert_eq!(validation.message, "Missing 'description' in frontmatter");
        assert_eq!(validation.kind, Some(ViolationKind::MissingField));
    }

    #[test]
    fn test_null_name() {
        let skill = skill_with_header("name:\ndescription: Demo");
        let validation = validate_skill(skill.path());

        assert_eq!(validation.message, "Name must be a string, got null");
        assert_eq!(validation.kind, Some(ViolationKind::TypeError));
    }

    #[test]
    fn test_name_pattern() {
        let skill = skill_with_header("name: My_Skill\ndescription: Demo");
        let validation = validate_skill(skill.path());

        assert_eq!(validation.kind, Some(ViolationKind::PatternViolation));
        assert_eq!(
            validation.message,
            "Name 'My_Skill' should be hyphen-case (lowercase letters, digits, and hyphens only)"
        );
    }

    #[test]
    fn test_name_boundary() {
        let skill = skill_with_header("name: \"-abc\"\ndescription: Demo");
        let validation = validate_skill(skill.path());

        assert_eq!(validation.kind, Some(ViolationKind::BoundaryViolation));
        assert_eq!(
            validation.message,
            "Name '-abc' cannot start/end with hyphen or contain consecutive hyphens"
        );
    }

    #[test]
    fn test_name_length() {
        let skill = skill_with_header(&format!("name: {}\ndescription: Demo", "a".repeat(65)));
        let validation = validate_skill(skill.path());

        assert_eq!(validation.kind, Some(ViolationKind::LengthViolation));
        assert_eq!(
            validation.message,
            "Name is too long (65 characters). Maximum is 64 characters."
        );
    }

    #[test]
    fn test_description_angle_brackets() {
        let skill = skill_with_header("name: demo\ndescription: Injects <script> tags");
        let validation = validate_skill(skill.path());

        assert_eq!(validation.kind, Some(ViolationKind::CharsetViolation));
        assert_eq!(
            validation.message,
            "Description cannot contain angle brackets (< or >)"
        );
    }

    #[test]
    fn test_description_length() {
        let skill = skill_with_header(&format!("name: demo\ndescription: {}", "d".repeat(1025)));
        let validation = validate_skill(skill.path());

        assert_eq!(validation.kind, Some(ViolationKind::LengthViolation));
        assert_eq!(
            validation.message,
            "Description is too long (1025 characters). Maximum is 1024 characters."
        );
    }

    #[test]
    fn test_name_checked_before_description() {
        let skill = skill_with_header("name: Bad\ndescription: <bad>");
        let validation = validate_skill(skill.path());

        assert_eq!(validation.kind, Some(ViolationKind::PatternViolation));
    }
}
