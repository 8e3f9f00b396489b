mod app;
mod components;
mod core;
mod pages;
mod store;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting blog admin app");
    leptos::mount_to_body(App);
}
