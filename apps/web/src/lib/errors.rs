use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Validation(String),
    Network(String),
    Http { status: u16, detail: Option<String> },
    Parse(String),
    Serialization(String),
    Storage(String),
}

impl AppError {
    /// Text shown to the user for this failure.
    ///
    /// Validation and storage problems describe themselves. HTTP failures show
    /// the server-provided `detail` when there is one. Everything else falls
    /// back to the caller's phrase so transport internals never reach the page.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(message) | AppError::Storage(message) => message.clone(),
            AppError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Validation(message) => write!(formatter, "Invalid input: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http { status, detail } => match detail {
                Some(detail) => write!(formatter, "Request failed ({status}): {detail}"),
                None => write!(formatter, "Request failed ({status})"),
            },
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Pulls a displayable `detail` string out of an error response body.
///
/// The string is returned unchanged. Only a non-blank string `detail` counts;
/// structured details (for example a list of field errors) and non-JSON
/// bodies yield `None`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?.as_str()?;
    if detail.trim().is_empty() {
        None
    } else {
        Some(detail.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, extract_detail};

    #[test]
    fn extract_detail_reads_string_detail() {
        let body = r#"{"detail":"Code OTP invalide ou expiré"}"#;
        assert_eq!(
            extract_detail(body),
            Some("Code OTP invalide ou expiré".to_string())
        );
    }

    #[test]
    fn extract_detail_ignores_structured_and_missing_detail() {
        assert_eq!(extract_detail(r#"{"detail":[{"loc":["body","email"]}]}"#), None);
        assert_eq!(extract_detail(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_detail(r#"{"detail":"   "}"#), None);
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
    }

    #[test]
    fn extract_detail_returns_message_verbatim() {
        let long = format!(" {} ", "x".repeat(250));
        let body = serde_json::json!({ "detail": long }).to_string();
        assert_eq!(extract_detail(&body), Some(long));
    }

    #[test]
    fn user_message_prefers_detail_then_fallback() {
        let with_detail = AppError::Http {
            status: 403,
            detail: Some("Not invited".to_string()),
        };
        let without_detail = AppError::Http {
            status: 500,
            detail: None,
        };
        let network = AppError::Network("connection refused".to_string());

        assert_eq!(with_detail.user_message("fallback"), "Not invited");
        assert_eq!(without_detail.user_message("fallback"), "fallback");
        assert_eq!(network.user_message("fallback"), "fallback");
    }

    #[test]
    fn user_message_shows_validation_and_storage_text() {
        let validation = AppError::Validation("Enter a valid email address.".to_string());
        let storage = AppError::Storage("Local storage is unavailable.".to_string());
        assert_eq!(
            validation.user_message("fallback"),
            "Enter a valid email address."
        );
        assert_eq!(storage.user_message("fallback"), "Local storage is unavailable.");
    }
}
