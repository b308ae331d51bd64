#![allow(warnings)]
//! Ecoleta Frontend Entry Point

mod models;
mod config;
mod api;
mod geolocation;
mod store;
mod loader;
mod submission;
mod context;
mod components;
mod home;
mod create_point;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(App);
}
