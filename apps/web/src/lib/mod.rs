//! Shared frontend utilities for API access, configuration, errors, logging,
//! and build metadata.
//!
//! ## Login flow
//!
//! 1. **Send code:** The client POSTs `{email}` to `/auth/send-otp`; the API
//!    mails a six-digit code and answers `{"ok": true}`.
//! 2. **Verify code:** The client POSTs `{email, code}` to `/auth/verify-otp`
//!    and receives the identity provider's `access_token` and `refresh_token`.
//! 3. **Session:** Both tokens are written to local storage. The landing page
//!    only checks that an access token is present and decodes its claims for
//!    display; nothing here validates a signature.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging codes,
//! tokens, or email addresses.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;

pub(crate) use errors::AppError;
