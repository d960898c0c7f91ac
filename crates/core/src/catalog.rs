//! Catalog constants and validation functions.
//!
//! Used by the API layer before categories and menu items are written.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Maximum length of a category or menu item title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of a category slug.
pub const MAX_SLUG_LENGTH: usize = 50;

/// Letters, digits, hyphens and underscores.
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug pattern is valid"));

/// Validate a category or menu item title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a category slug.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !SLUG_PATTERN.is_match(slug) {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use letters, numbers, underscores or hyphens"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_titles() {
        assert!(validate_title("Main Course").is_ok());
    }

    #[test]
    fn rejects_blank_and_long_titles() {
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn slug_syntax() {
        assert!(validate_slug("main-course_2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("main course").is_err());
        assert!(validate_slug("café").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)).is_err());
    }
}
