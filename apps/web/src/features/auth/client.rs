//! HTTP client for the auth API endpoints. Request bodies carry the email
//! and one-time code and responses carry bearer tokens, so nothing here logs
//! payloads.

use crate::{
    app_lib::{AppError, api::post_json},
    features::auth::{
        gateway::AuthGateway,
        types::{SendCodeRequest, SendCodeResponse, TokenResponse, VerifyCodeRequest},
    },
};

const SEND_CODE_PATH: &str = "/auth/send-otp";
const VERIFY_CODE_PATH: &str = "/auth/verify-otp";

/// `AuthGateway` backed by the configured API base URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthGateway;

impl AuthGateway for HttpAuthGateway {
    async fn send_code(&self, request: &SendCodeRequest) -> Result<SendCodeResponse, AppError> {
        post_json(SEND_CODE_PATH, request).await
    }

    async fn verify_code(&self, request: &VerifyCodeRequest) -> Result<TokenResponse, AppError> {
        post_json(VERIFY_CODE_PATH, request).await
    }
}
