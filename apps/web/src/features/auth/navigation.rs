//! Navigation targets the auth flow and session guard can request. The
//! router sits behind `Navigator` so the flow logic stays testable without
//! a browser history.

/// Route paths used across the app.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const LANDING: &str = "/test";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Landing,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => paths::LOGIN,
            Destination::Landing => paths::LANDING,
        }
    }
}

pub trait Navigator {
    fn navigate(&self, destination: Destination);
}

impl<F> Navigator for F
where
    F: Fn(Destination),
{
    fn navigate(&self, destination: Destination) {
        self(destination);
    }
}
