//! Club Dashboard Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod format;
mod loader;
mod models;
mod navigation;
mod store;
mod toast;
mod validation;
mod verification;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] Club dashboard starting");
    mount_to_body(App);
}
