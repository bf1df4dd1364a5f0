//! Card List Frontend Entry Point

use card_list_ui::storage::default_store;
use card_list_ui::{App, AppConfig};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    let config = AppConfig::default();
    let store = default_store();
    log::info!("[APP] Starting, list source: {}", config.data_url);

    mount_to_body(move || view! { <App config=config store=store /> });
}
