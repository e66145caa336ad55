//! Console logging for the browser build. Tracing events from the auth flow
//! and session guard are routed to the devtools console; panics get a readable
//! stack trace instead of `unreachable executed`.

#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {}
