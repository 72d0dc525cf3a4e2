//! Shop Explorer Frontend Entry Point

mod api;
mod app;
mod components;
mod pages;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("ShopExplorer", console_logger::default_level()) {
        web_sys::console::error_1(&format!("logger already initialized: {}", e).into());
    }
    mount_to_body(App);
}
