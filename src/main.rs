//! Checklist Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod renderer;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::{Level, LevelFilter};
use wasm_bindgen::JsValue;

fn console_sink(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::log_1(&line),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let config = loaded.clone().unwrap_or_default();

    let level = config.log_level.parse().unwrap_or(LevelFilter::Info);
    if let Err(e) = rolling_logger::init_logger("Checklist", level, config.log_capacity, Box::new(console_sink)) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    if let Err(e) = loaded {
        log::warn!("using default config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
