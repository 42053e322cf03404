//! Task List Frontend Entry Point

mod app;
mod components;
mod confirm;
mod dispatcher;
mod view;

use app::App;
use leptos::prelude::*;
use task_sync::ClientConfig;

/// Defaults, with the API base overridable at build time
fn client_config() -> ClientConfig {
    let config = ClientConfig::default();
    match option_env!("TASK_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => config.with_api_base_url(url.trim()),
        _ => config,
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let config = client_config();
    if let Some(level) = config.log_level.to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }
    }
    log::info!("Task API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
