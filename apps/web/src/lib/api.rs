//! HTTP helpers for the JSON auth API. Feature clients use these helpers to
//! avoid duplicating request setup and to map every failure into `AppError`
//! the same way. No timeout is layered on top of the browser's own fetch
//! behavior. The helpers never log request or response bodies since both
//! carry codes and tokens.

use super::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use super::errors::{AppError, extract_detail};
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, Response};
#[cfg(target_arch = "wasm32")]
use serde::{Serialize, de::DeserializeOwned};

/// Posts a JSON body and parses a JSON response.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let request = Request::post(&url)
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    let response = request.send().await.map_err(map_request_error)?;
    handle_json_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
pub fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses JSON responses and turns HTTP errors into `AppError::Http` with the
/// server `detail`, if any.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            detail: extract_detail(&body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::build_url_with_base;

    #[test]
    fn build_url_with_base_joins_without_double_slashes() {
        assert_eq!(
            build_url_with_base("http://localhost:8000/", "/auth/send-otp"),
            "http://localhost:8000/auth/send-otp"
        );
        assert_eq!(
            build_url_with_base(" https://api.logpages.dev ", "auth/verify-otp"),
            "https://api.logpages.dev/auth/verify-otp"
        );
    }

    #[test]
    fn build_url_with_empty_base_keeps_relative_path() {
        assert_eq!(build_url_with_base("", "/auth/send-otp"), "/auth/send-otp");
        assert_eq!(build_url_with_base("   ", " /auth/send-otp "), "/auth/send-otp");
    }
}
