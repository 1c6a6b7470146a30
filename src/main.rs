//! TaskForge Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod edit;
mod ids;
mod models;
mod storage;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    console_logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
