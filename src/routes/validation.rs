use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::constants::{
    EMAIL_PATTERN, ERR_FIELDS_REQUIRED, ERR_INVALID_EMAIL, ERR_PASSWORD_TOO_SHORT,
    MIN_PASSWORD_LENGTH,
};

/// Error type for signup validation (constrained to the checks that can fail)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
    PasswordTooShort,
}

impl ValidationError {
    /// Message rendered above the signup form
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::MissingFields => ERR_FIELDS_REQUIRED,
            ValidationError::InvalidEmail => ERR_INVALID_EMAIL,
            ValidationError::PasswordTooShort => ERR_PASSWORD_TOO_SHORT,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(EMAIL_PATTERN).unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Validate signup input, returning the first failing check
///
/// Order: presence of all fields, email shape, password length.
/// Callers are expected to have trimmed username and email already.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_signup() {
        assert_eq!(validate_signup("alice", "alice@example.com", "secret1"), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let cases = [
            ("", "alice@example.com", "secret1"),
            ("alice", "", "secret1"),
            ("alice", "alice@example.com", ""),
            ("", "", ""),
        ];

        for (username, email, password) in cases {
            let err = validate_signup(username, email, password).unwrap_err();
            assert_eq!(err, ValidationError::MissingFields);
            assert_eq!(err.message(), "All fields are required.");
        }
    }

    #[test]
    fn test_missing_fields_checked_before_email() {
        // Bad email and short password, but the empty username wins
        assert_eq!(
            validate_signup("", "not-an-email", "123"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_invalid_email() {
        for email in [
            "plainaddress",
            "@example.com",
            "alice@",
            "alice@example",
            "alice@.",
            "alice@@example.com",
            "alice@example.",
        ] {
            assert_eq!(
                validate_signup("alice", email, "secret1"),
                Err(ValidationError::InvalidEmail),
                "expected {email:?} to be rejected"
            );
        }
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format."
        );
    }

    #[test]
    fn test_email_pattern_is_loose() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.co.uk"));
        // Only the start of the address is anchored
        assert!(is_valid_email("a@b.c@d"));
        assert!(is_valid_email("with space@example.com"));
    }

    #[test]
    fn test_email_checked_before_password() {
        assert_eq!(
            validate_signup("alice", "bad", "123"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_password_too_short() {
        let err = validate_signup("alice", "alice@example.com", "12345").unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooShort);
        assert_eq!(err.message(), "Password must be at least 6 characters.");
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(validate_signup("alice", "alice@example.com", "123456").is_ok());
        // Counted in characters, not bytes
        assert_eq!(
            validate_signup("alice", "alice@example.com", "ééééé"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_signup("alice", "alice@example.com", "éééééé").is_ok());
    }

    #[test]
    fn test_password_whitespace_counts() {
        assert!(validate_signup("alice", "alice@example.com", "      ").is_ok());
    }
}
