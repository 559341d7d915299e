//! Local checks run before an email is sent for analysis

use thiserror::Error;

use crate::constants::{MIN_EMAIL_CHARS, MSG_EMAIL_TOO_SHORT, MSG_EMPTY_EMAIL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", MSG_EMPTY_EMAIL)]
    Empty,
    #[error("{}", MSG_EMAIL_TOO_SHORT)]
    TooShort,
}

/// Validate email text. Checks run in order and the first failure wins.
///
/// The length check counts characters of the untrimmed text, so padding
/// around a short message still counts toward the minimum.
pub fn validate_email_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if text.chars().count() < MIN_EMAIL_CHARS {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        for text in ["", " ", "\n\t  \n"] {
            assert_eq!(validate_email_text(text), Err(ValidationError::Empty));
        }
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Please paste an email to analyze"
        );
    }

    #[test]
    fn test_short_input_is_rejected() {
        for len in 1..=9 {
            let text = "x".repeat(len);
            assert_eq!(
                validate_email_text(&text),
                Err(ValidationError::TooShort),
                "length {}",
                len
            );
        }
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Email text is too short. Please provide more content."
        );
    }

    #[test]
    fn test_ten_characters_pass() {
        assert_eq!(validate_email_text("0123456789"), Ok(()));
        // Multi-byte characters count once each
        assert_eq!(validate_email_text("héllo wörl"), Ok(()));
    }

    #[test]
    fn test_whitespace_counts_toward_length() {
        assert_eq!(validate_email_text("  hi there  "), Ok(()));
    }
}
