//! Session guard for the landing page. Presence of a stored access token is
//! the only check; this is a UX gate, and anything that matters must be
//! enforced by the services receiving the token.

use crate::features::auth::{
    claims::{Claims, decode_claims},
    navigation::{Destination, Navigator},
    storage::{KeyValueStore, SessionStore},
};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome {
    /// No session; navigation to login was requested.
    Redirected,
    /// A token is stored. `claims` is `None` when it is not a readable JWT.
    Authenticated { claims: Option<Claims> },
}

/// Checks for a stored access token when the landing page activates.
pub fn activate<S, N>(sessions: &SessionStore<S>, navigator: &N) -> GuardOutcome
where
    S: KeyValueStore,
    N: Navigator,
{
    let Some(token) = sessions.access_token() else {
        debug!("no stored access token; redirecting to login");
        navigator.navigate(Destination::Login);
        return GuardOutcome::Redirected;
    };

    let claims = decode_claims(&token);
    if claims.is_none() {
        warn!("failed to decode access token claims");
    }
    GuardOutcome::Authenticated { claims }
}

/// Clears both stored tokens and returns to login. Safe to call repeatedly.
pub fn logout<S, N>(sessions: &SessionStore<S>, navigator: &N)
where
    S: KeyValueStore,
    N: Navigator,
{
    sessions.clear();
    info!("session cleared");
    navigator.navigate(Destination::Login);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::{
        claims::tests::jwt_with_payload,
        navigation::tests::RecordingNavigator,
        storage::{ACCESS_TOKEN_KEY, MemoryStore, REFRESH_TOKEN_KEY},
    };
    use std::cell::Cell;

    /// Store that counts reads.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        reads: Cell<usize>,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.reads.set(self.reads.get() + 1);
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), crate::app_lib::AppError> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key);
        }
    }

    #[test]
    fn missing_token_redirects_to_login() {
        let sessions = SessionStore::new(CountingStore::default());
        let navigator = RecordingNavigator::default();

        let outcome = activate(&sessions, &navigator);

        assert_eq!(outcome, GuardOutcome::Redirected);
        assert_eq!(navigator.visits(), vec![Destination::Login]);
        assert_eq!(sessions.inner().reads.get(), 1);
    }

    #[test]
    fn refresh_token_alone_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(REFRESH_TOKEN_KEY, "b").expect("seed");
        let navigator = RecordingNavigator::default();

        let outcome = activate(&SessionStore::new(store), &navigator);

        assert_eq!(outcome, GuardOutcome::Redirected);
    }

    #[test]
    fn stored_jwt_yields_claims_without_navigation() {
        let store = MemoryStore::new();
        let token = jwt_with_payload(&serde_json::json!({ "email": "test@example.com" }));
        store.set(ACCESS_TOKEN_KEY, &token).expect("seed");
        let navigator = RecordingNavigator::default();

        let outcome = activate(&SessionStore::new(store), &navigator);

        let GuardOutcome::Authenticated {
            claims: Some(claims),
        } = outcome
        else {
            panic!("expected decoded claims");
        };
        assert_eq!(claims.email(), Some("test@example.com"));
        assert!(navigator.visits().is_empty());
    }

    #[test]
    fn undecodable_token_is_authenticated_without_claims() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "a").expect("seed");
        let navigator = RecordingNavigator::default();

        let outcome = activate(&SessionStore::new(store.clone()), &navigator);

        assert_eq!(outcome, GuardOutcome::Authenticated { claims: None });
        assert!(navigator.visits().is_empty());

        store.set(ACCESS_TOKEN_KEY, "x.%%%.y").expect("seed");
        let outcome = activate(&SessionStore::new(store), &navigator);
        assert_eq!(outcome, GuardOutcome::Authenticated { claims: None });
    }

    #[test]
    fn logout_clears_both_tokens_and_navigates() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "a").expect("seed");
        store.set(REFRESH_TOKEN_KEY, "b").expect("seed");
        let sessions = SessionStore::new(store.clone());
        let navigator = RecordingNavigator::default();

        logout(&sessions, &navigator);

        assert!(store.is_empty());
        assert_eq!(navigator.visits(), vec![Destination::Login]);
    }

    #[test]
    fn logout_with_partial_session_and_twice_is_safe() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "a").expect("seed");
        let sessions = SessionStore::new(store.clone());
        let navigator = RecordingNavigator::default();

        logout(&sessions, &navigator);
        logout(&sessions, &navigator);

        assert!(store.is_empty());
        assert_eq!(
            navigator.visits(),
            vec![Destination::Login, Destination::Login]
        );
        assert_eq!(activate(&sessions, &navigator), GuardOutcome::Redirected);
    }
}
