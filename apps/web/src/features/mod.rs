//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while keeping session and API handling
//! in a dedicated feature area.

pub(crate) mod auth;
