//! Auth feature module: the email one-time code login flow, client-side
//! session storage, and the session guard for the landing page. It keeps
//! authentication logic out of the UI. Codes and tokens pass through here and
//! must never be logged.
//!
//! Flow overview: the email step posts to `/auth/send-otp`; on acknowledgment
//! the code step posts `{email, code}` to `/auth/verify-otp`, stores the
//! returned access and refresh tokens, and navigates to the landing page. The
//! landing page's guard only checks that an access token is stored.

pub(crate) mod claims;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
pub(crate) mod gateway;
pub(crate) mod guard;
pub(crate) mod navigation;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod types;
pub(crate) mod validate;
