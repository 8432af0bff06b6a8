//! Customer Address Updater Entry Point
//!
//! This is the main entry point for the WASM application.
//! It initializes logging and mounts the Leptos app to the DOM.

use address_updater_ui::App;
use leptos::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    let max_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(max_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting address updater");

    mount_to_body(|| view! { <App /> });
}
