//! Two-step login state machine: email entry, then code entry, then the
//! hand-off to the landing page.
//!
//! `LoginFlow` holds the form state and its transitions and does no I/O.
//! `submit` drives one form submission against an `AuthGateway`: it takes the
//! request out of the state machine, awaits the call, and feeds the result
//! back in. Only one request can be outstanding per flow; `busy` rejects any
//! submission made while one is in flight.

use crate::{
    app_lib::AppError,
    features::auth::{
        gateway::AuthGateway,
        navigation::{Destination, Navigator},
        storage::{KeyValueStore, SessionStore},
        types::{CredentialPair, SendCodeRequest, SendCodeResponse, VerifyCodeRequest},
        validate,
    },
};
use std::cell::RefCell;
use tracing::{debug, info, warn};

pub const CODE_SENT_MESSAGE: &str = "We sent a one-time code to your email. Enter it below.";
pub const SEND_FAILED_MESSAGE: &str = "Could not send the code. Please try again.";
pub const VERIFY_FAILED_MESSAGE: &str = "Could not verify the code. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Email,
    CodeEntry { code: String },
    /// Tokens are stored and navigation has been requested.
    Authenticated,
}

/// Why a submission did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    Busy,
    WrongStage,
    Invalid(AppError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginFlow {
    email: String,
    stage: Stage,
    error: Option<String>,
    info: Option<String>,
    busy: bool,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            stage: Stage::Email,
            error: None,
            info: None,
            busy: false,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The code being typed, only while in code entry.
    pub fn code(&self) -> Option<&str> {
        match &self.stage {
            Stage::CodeEntry { code } => Some(code),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_code_entry(&self) -> bool {
        matches!(self.stage, Stage::CodeEntry { .. })
    }

    /// Updates the email field. Ignored once a code has been requested so the
    /// verify call always carries the address the code was sent to.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if matches!(self.stage, Stage::Email) && !self.busy {
            self.email = value.into();
        }
    }

    pub fn set_code(&mut self, value: impl Into<String>) {
        if self.busy {
            return;
        }
        if let Stage::CodeEntry { code } = &mut self.stage {
            *code = value.into();
        }
    }

    /// Validates the email and marks the flow busy, returning the request to send.
    pub fn begin_send(&mut self) -> Result<SendCodeRequest, Rejection> {
        if self.busy {
            return Err(Rejection::Busy);
        }
        if !matches!(self.stage, Stage::Email) {
            return Err(Rejection::WrongStage);
        }

        self.info = None;
        match validate::normalize_email(&self.email) {
            Ok(email) => {
                self.email = email.clone();
                self.error = None;
                self.busy = true;
                Ok(SendCodeRequest { email })
            }
            Err(err) => {
                self.error = Some(err.user_message(SEND_FAILED_MESSAGE));
                Err(Rejection::Invalid(err))
            }
        }
    }

    /// Applies the send-code result. Returns true when the flow moved to code entry.
    pub fn finish_send(&mut self, result: Result<SendCodeResponse, AppError>) -> bool {
        self.busy = false;
        match result {
            Ok(response) if response.ok => {
                let message = response
                    .message
                    .map(|message| message.trim().to_string())
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| CODE_SENT_MESSAGE.to_string());
                self.stage = Stage::CodeEntry {
                    code: String::new(),
                };
                self.error = None;
                self.info = Some(message);
                true
            }
            Ok(_) => {
                self.error = Some(SEND_FAILED_MESSAGE.to_string());
                false
            }
            Err(err) => {
                self.error = Some(err.user_message(SEND_FAILED_MESSAGE));
                false
            }
        }
    }

    /// Validates the code and marks the flow busy, returning the request to send.
    pub fn begin_verify(&mut self) -> Result<VerifyCodeRequest, Rejection> {
        if self.busy {
            return Err(Rejection::Busy);
        }
        let Stage::CodeEntry { code } = &self.stage else {
            return Err(Rejection::WrongStage);
        };

        match validate::normalize_code(code) {
            Ok(code) => {
                self.error = None;
                self.busy = true;
                Ok(VerifyCodeRequest {
                    email: self.email.clone(),
                    code,
                })
            }
            Err(err) => {
                self.error = Some(err.user_message(VERIFY_FAILED_MESSAGE));
                Err(Rejection::Invalid(err))
            }
        }
    }

    /// Marks the flow finished after the tokens were stored.
    pub fn finish_verified(&mut self) {
        self.busy = false;
        self.error = None;
        self.stage = Stage::Authenticated;
    }

    /// Applies a verify-code failure; the typed code is kept for correction.
    pub fn finish_verify_failed(&mut self, err: &AppError) {
        self.busy = false;
        self.error = Some(err.user_message(VERIFY_FAILED_MESSAGE));
    }

    /// Leaves code entry for a different address. Clears code, error, and
    /// info; the email field keeps its value. Returns false when not in code
    /// entry or while a request is outstanding.
    pub fn change_email(&mut self) -> bool {
        if self.busy || !self.is_code_entry() {
            return false;
        }
        self.stage = Stage::Email;
        self.error = None;
        self.info = None;
        true
    }
}

/// Shared access to a `LoginFlow` owned by the UI.
///
/// Returns `None` when the owner is gone (for example an unmounted page).
pub trait FlowCell {
    fn with_flow<R>(&self, update: impl FnOnce(&mut LoginFlow) -> R) -> Option<R>;
}

impl FlowCell for RefCell<LoginFlow> {
    fn with_flow<R>(&self, update: impl FnOnce(&mut LoginFlow) -> R) -> Option<R> {
        Some(update(&mut self.borrow_mut()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent.
    Rejected(Rejection),
    CodeSent,
    SendFailed,
    Authenticated,
    VerifyFailed,
    /// The flow owner went away while the request was in flight.
    Detached,
}

/// Handles a form submission for whichever step the flow is on.
pub async fn submit<C, G, S, N>(
    flow: &C,
    gateway: &G,
    sessions: &SessionStore<S>,
    navigator: &N,
) -> SubmitOutcome
where
    C: FlowCell,
    G: AuthGateway,
    S: KeyValueStore,
    N: Navigator,
{
    match flow.with_flow(|flow| flow.is_code_entry()) {
        Some(true) => verify_code(flow, gateway, sessions, navigator).await,
        Some(false) => send_code(flow, gateway).await,
        None => SubmitOutcome::Detached,
    }
}

/// Email step: requests a code and moves to code entry on acknowledgment.
pub async fn send_code<C, G>(flow: &C, gateway: &G) -> SubmitOutcome
where
    C: FlowCell,
    G: AuthGateway,
{
    let request = match flow.with_flow(LoginFlow::begin_send) {
        Some(Ok(request)) => request,
        Some(Err(rejection)) => {
            debug!(?rejection, "send-code submission rejected");
            return SubmitOutcome::Rejected(rejection);
        }
        None => return SubmitOutcome::Detached,
    };

    let result = gateway.send_code(&request).await;
    match &result {
        Ok(response) if response.ok => info!("one-time code requested"),
        Ok(_) => warn!("send-code response was not acknowledged"),
        Err(err) => warn!(error = %err, "send-code request failed"),
    }

    match flow.with_flow(|flow| flow.finish_send(result)) {
        Some(true) => SubmitOutcome::CodeSent,
        Some(false) => SubmitOutcome::SendFailed,
        None => SubmitOutcome::Detached,
    }
}

/// Code step: exchanges the code for tokens, stores them, then navigates to
/// the landing page. Storage is untouched when any part fails.
pub async fn verify_code<C, G, S, N>(
    flow: &C,
    gateway: &G,
    sessions: &SessionStore<S>,
    navigator: &N,
) -> SubmitOutcome
where
    C: FlowCell,
    G: AuthGateway,
    S: KeyValueStore,
    N: Navigator,
{
    let request = match flow.with_flow(LoginFlow::begin_verify) {
        Some(Ok(request)) => request,
        Some(Err(rejection)) => {
            debug!(?rejection, "verify-code submission rejected");
            return SubmitOutcome::Rejected(rejection);
        }
        None => return SubmitOutcome::Detached,
    };

    let stored = gateway
        .verify_code(&request)
        .await
        .and_then(CredentialPair::try_from)
        .and_then(|credentials| sessions.save(&credentials));

    match stored {
        Ok(()) => {
            info!("one-time code verified; session stored");
            flow.with_flow(LoginFlow::finish_verified);
            navigator.navigate(Destination::Landing);
            SubmitOutcome::Authenticated
        }
        Err(err) => {
            warn!(error = %err, "verify-code request failed");
            match flow.with_flow(|flow| flow.finish_verify_failed(&err)) {
                Some(()) => SubmitOutcome::VerifyFailed,
                None => SubmitOutcome::Detached,
            }
        }
    }
}
