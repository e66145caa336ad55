#[cfg(target_arch = "wasm32")]
mod app;
// Native builds only carry this logic for unit tests; its callers live in the
// wasm32-only UI modules.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    app_lib::logging::init();
    tracing::info!(commit = app_lib::build_info::git_commit_hash(), "starting LogPages web");
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {
    app_lib::logging::init();
}
