//! Input validation for submitted ideas and articles.

use std::fmt;

use ideation_core::Category;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid email format.
    InvalidEmail(String),
    /// Category id not in the accepted list.
    UnknownCategory(String),
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Empty value where one is required.
    Empty(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            ValidationError::UnknownCategory(id) => write!(f, "Unknown category: {}", id),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for email addresses.
pub const MAX_EMAIL_LENGTH: usize = 254;

pub const MAX_NAME_LENGTH: usize = 120;

pub const MAX_TITLE_LENGTH: usize = 200;

/// Applies to idea descriptions and article bodies.
pub const MAX_BODY_LENGTH: usize = 10_000;

/// Categories an article may be filed under.
pub const ARTICLE_CATEGORIES: [&str; 6] = [
    "general",
    "technology",
    "logistics",
    "procurement",
    "inventory",
    "sustainability",
];

/// Validate an email address (basic RFC 5322 format check).
///
/// This is a basic validation that checks:
/// - Contains exactly one @
/// - Has at least one character before @
/// - Has a domain with a dot that is neither leading nor trailing
/// - Is not too long
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Empty("email".to_string()));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LENGTH,
            actual: email.len(),
        });
    }

    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) if !domain.contains('@') => (local, domain),
        _ => {
            return Err(ValidationError::InvalidEmail(
                "must contain exactly one @ symbol".to_string(),
            ))
        }
    };

    if local.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing local part (before @)".to_string(),
        ));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail(
            "must not contain whitespace".to_string(),
        ));
    }

    if domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::InvalidEmail(
            "domain must contain a dot".to_string(),
        ));
    }

    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return Err(ValidationError::InvalidEmail(
            "malformed domain".to_string(),
        ));
    }

    Ok(())
}

/// Require a non-blank value no longer than `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Empty(field.to_string()));
    }

    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            actual,
        });
    }

    Ok(())
}

/// Validate an idea category id and return the parsed category.
pub fn validate_idea_category(id: &str) -> Result<Category, ValidationError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ValidationError::Empty("category".to_string()));
    }
    Category::from_id(id).ok_or_else(|| ValidationError::UnknownCategory(id.to_string()))
}

/// Validate an article category.
pub fn validate_article_category(category: &str) -> Result<(), ValidationError> {
    if ARTICLE_CATEGORIES.contains(&category.trim()) {
        Ok(())
    } else {
        Err(ValidationError::UnknownCategory(category.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email(" test@example.com ").is_ok()); // trimmed
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(matches!(validate_email(""), Err(ValidationError::Empty(_))));

        for bad in [
            "test.example.com",
            "test@example@com",
            "@example.com",
            "test@",
            "test@localhost",
            "test@.example.com",
            "test@example.com.",
            "test@example..com",
            "jane doe@example.com",
        ] {
            assert!(
                matches!(validate_email(bad), Err(ValidationError::InvalidEmail(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            validate_email(&email),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("title", "Smarter docks", MAX_TITLE_LENGTH).is_ok());
        assert_eq!(
            validate_required("title", "   ", MAX_TITLE_LENGTH),
            Err(ValidationError::Empty("title".to_string()))
        );
        assert!(matches!(
            validate_required("title", &"x".repeat(201), MAX_TITLE_LENGTH),
            Err(ValidationError::TooLong { max: 200, actual: 201, .. })
        ));
    }

    #[test]
    fn test_validate_idea_category() {
        assert_eq!(validate_idea_category("kinaxis"), Ok(Category::Kinaxis));
        assert_eq!(validate_idea_category(" other_scm "), Ok(Category::OtherScm));
        assert!(matches!(
            validate_idea_category("sap"),
            Err(ValidationError::UnknownCategory(_))
        ));
        assert!(matches!(
            validate_idea_category(""),
            Err(ValidationError::Empty(_))
        ));
    }

    #[test]
    fn test_validate_article_category() {
        assert!(validate_article_category("logistics").is_ok());
        assert!(validate_article_category("kinaxis").is_err());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidEmail("test message".to_string());
        assert_eq!(err.to_string(), "Invalid email: test message");

        let err = ValidationError::Empty("name".to_string());
        assert_eq!(err.to_string(), "name cannot be empty");
    }
}
