//! The two auth API calls the login flow depends on. The HTTP
//! implementation lives in `client`; tests script responses directly.

use crate::{
    app_lib::AppError,
    features::auth::types::{SendCodeRequest, SendCodeResponse, TokenResponse, VerifyCodeRequest},
};

/// Remote auth service issuing and verifying one-time codes.
///
/// Futures run on the browser's single thread, so they are not `Send`.
pub trait AuthGateway {
    /// Asks the API to mail a one-time code to `request.email`.
    async fn send_code(&self, request: &SendCodeRequest) -> Result<SendCodeResponse, AppError>;

    /// Exchanges the code for identity-provider tokens.
    async fn verify_code(&self, request: &VerifyCodeRequest) -> Result<TokenResponse, AppError>;
}
