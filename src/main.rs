//! Gutendex Browser Frontend Entry Point

mod actions;
mod api;
mod app;
mod browse;
mod components;
mod config;
mod context;
mod debounce;
mod error;
mod models;
mod pagination;
mod preferences;
mod route;
mod storage;
mod store;
mod view_model;
mod wishlist;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if console_logger::init(config.log_level).is_ok() {
        log::info!("Starting catalog browser against {}", config.api_url);
    }

    mount_to_body(move || view! { <App config=config /> });
}
