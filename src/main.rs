#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod models;
mod filter;
mod reveal;
mod typewriter;
mod form;
mod dom;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
