//! Entry point for the WASM application

use leptos::*;
use upload_widget::{App, WidgetConfig};

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let config = WidgetConfig::from_env();
    log::info!("🦀 Report upload widget starting (API: {})", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone()/> })
}
