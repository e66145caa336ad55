//! Input checks applied before any request leaves the browser.

use crate::app_lib::AppError;
use regex::Regex;

/// Length of the one-time code mailed by the auth API.
pub const CODE_LENGTH: usize = 6;

/// Basic email format check; the API performs the authoritative validation.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email.trim()))
}

/// True when the code is exactly six ASCII digits.
pub fn valid_code(code: &str) -> bool {
    Regex::new(r"^[0-9]{6}$").is_ok_and(|regex| regex.is_match(code.trim()))
}

/// Normalizes and checks an email entered in the form.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();
    if valid_email(email) {
        Ok(email.to_string())
    } else {
        Err(AppError::Validation(
            "Enter a valid email address.".to_string(),
        ))
    }
}

/// Normalizes and checks a one-time code entered in the form.
pub fn normalize_code(code: &str) -> Result<String, AppError> {
    let code = code.trim();
    if valid_code(code) {
        Ok(code.to_string())
    } else {
        Err(AppError::Validation(format!(
            "Enter the {CODE_LENGTH}-digit code from the email."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("test@example.com"));
        assert!(valid_email("  first.last+tag@mail.example.org "));
    }

    #[test]
    fn valid_email_rejects_missing_parts() {
        assert!(!valid_email(""));
        assert!(!valid_email("test"));
        assert!(!valid_email("test@"));
        assert!(!valid_email("test@example"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email("te st@example.com"));
        assert!(!valid_email("a@b@example.com"));
    }

    #[test]
    fn valid_code_requires_six_digits() {
        assert!(valid_code("123456"));
        assert!(valid_code(" 000000 "));
        assert!(!valid_code("12345"));
        assert!(!valid_code("1234567"));
        assert!(!valid_code("12a456"));
        assert!(!valid_code("１２３４５６"));
        assert!(!valid_code(""));
    }

    #[test]
    fn normalize_trims_accepted_values() {
        assert_eq!(
            normalize_email(" test@example.com ").as_deref(),
            Ok("test@example.com")
        );
        assert_eq!(normalize_code(" 123456\n").as_deref(), Ok("123456"));
    }

    #[test]
    fn normalize_rejects_with_validation_error() {
        assert!(matches!(normalize_email("nope"), Err(AppError::Validation(_))));
        assert!(matches!(normalize_code("12"), Err(AppError::Validation(_))));
    }
}
